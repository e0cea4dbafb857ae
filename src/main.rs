//! Trunk entry point. Mounts the application into `<body>`.

fn main() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("EngiDraw Data client starting");
        leptos::mount::mount_to_body(engidraw_client::app::App);
    }
}
