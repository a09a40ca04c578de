//! Desktop entry point of the asset dashboard.
//!
//! Server functions run in-process, so `ACCOUNT_STATE_PATH` and friends are
//! read from this process's environment.

use dioxus::prelude::*;

fn main() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        eprintln!("logger already initialized: {e}");
    }
    dioxus_logger::tracing::info!(
        account_state_path = ?std::env::var("ACCOUNT_STATE_PATH").ok(),
        "starting asset dashboard (desktop)"
    );
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
