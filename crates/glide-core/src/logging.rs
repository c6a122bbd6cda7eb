pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("info,glide_core=debug,glide_motion=debug")
        .init();
}
