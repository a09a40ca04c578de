// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod asset_query;
pub mod compat;
mod components;
pub mod hooks;
mod screens;
#[cfg(test)]
mod test_support;

use api::assets::account::AccountState;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Card;
use components::pico::Container;
use screens::assets::AssetsScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
    }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .app-main-container .content {
        padding: 0 1rem;
    }

    /* --- INFORMERS --- */
    .informer { display: flex; flex-direction: column; min-width: 10rem; }
    .informer-value { font-size: 1.25rem; white-space: nowrap; }
    .informer-toggle { align-self: flex-start; padding: 0 0.4rem; margin-top: 0.25rem; font-size: 0.8rem; }

    /* --- ASSETS TABLE --- */
    .assets-table { margin-bottom: 0; }
    .assets-table td, .assets-table th { vertical-align: middle; }
    .assets-table.table-small td, .assets-table.table-small th { padding: 0.25rem 0.5rem; }
    .assets-table.table-large td, .assets-table.table-large th { padding: 1rem 0.75rem; }
    .assets-table.table-bordered td, .assets-table.table-bordered th { border: 1px solid var(--pico-table-border-color); }
    .assets-table .id-cell { font-family: var(--pico-font-family-monospace); font-size: 0.85rem; white-space: nowrap; }
    .page-button { padding: 0.2rem 0.6rem; margin-bottom: 0; font-size: 0.9rem; }
    .copy-button { padding: 0 0.3rem; margin: 0; font-size: 0.75rem; line-height: 1.4; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let mut initial_data_future = use_server_future(move || async move {
        // call the server apis concurrently
        let (prefs_result, account_result) =
            tokio::join!(api::get_user_prefs(), api::account_state());

        let user_prefs = prefs_result?;
        let account = account_result?;

        dioxus_logger::tracing::info!("prefs: {:#?}", user_prefs);

        Ok::<_, api::ApiError>((user_prefs, account))
    })?;

    // Read from the single future to ensure it's polled during SSR.
    let body = match &*initial_data_future.read() {
        Some(Ok((prefs, account))) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(prefs.clone()),
                    account: account.clone(),
                }
            }
        }
        Some(Err(e)) => rsx! {
            Container {
                Card {
                    h3 { "Unable to load account" }
                    p { "An error occurred: {e}" }
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| initial_data_future.restart(),
                        "Retry"
                    }
                }
            }
        },
        _ => rsx! {
            p {
                "aria-busy": "true",
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState, #[props(!optional)] account: Option<AccountState>) -> Element {
    let hide_balances = app_state.prefs.hide_balances();

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let account_signal = use_signal(|| account.clone());
    let hide_balances_signal = use_signal(|| hide_balances);

    use_context_provider(|| AppStateMut {
        account_state: account_signal,
        hide_balances: hide_balances_signal,
    });

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "Asset Dashboard"
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    AssetsScreen {}
                }
            }
        }
    }
}

