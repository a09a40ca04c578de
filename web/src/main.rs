//! Browser entry point of the asset dashboard.

use dioxus::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        eprintln!("logger already initialized: {e}");
    }
    dioxus_logger::tracing::info!("starting asset dashboard (web)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
