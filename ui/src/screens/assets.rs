//=============================================================================
// File: src/screens/assets.rs
//=============================================================================
use std::rc::Rc;

use api::assets::quantity::with_commas;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::asset_query::filter_assets;
use crate::components::assets_table::AssetsTable;
use crate::components::empty_state::EmptyState;
use crate::components::informers::AdaInformer;
use crate::components::informers::TextInformer;
use crate::components::pico::Card;
use crate::hooks::use_search_shortcut::use_search_shortcut;

const DISCONNECTED_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" width="100%" height="100%"><path stroke-linecap="round" stroke-linejoin="round" d="M13.19 8.688a4.5 4.5 0 0 1 1.242 7.244l-4.5 4.5a4.5 4.5 0 0 1-6.364-6.364l1.757-1.757m13.35-.622 1.757-1.757a4.5 4.5 0 0 0-6.364-6.364l-4.5 4.5a4.5 4.5 0 0 0 1.242 7.244"/><path stroke-linecap="round" d="M3 3l18 18"/></svg>"#;

#[component]
pub fn AssetsScreen() -> Element {
    let account_state = use_context::<AppStateMut>().account_state;

    let mut search = use_signal(String::new);
    let mut search_input = use_signal(|| None::<Rc<MountedData>>);

    use_search_shortcut(search_input);

    let filtered = use_memo(move || {
        let query = search.read();
        account_state
            .read()
            .as_ref()
            .map(|account| filter_assets(account.assets(), &query))
            .unwrap_or_default()
    });

    let Some(account) = account_state() else {
        return rsx! {
            Card {
                h3 { "Assets" }
                EmptyState {
                    title: "Account is not connected".to_string(),
                    description: Some("Please connect an account to access your information".to_string()),
                    icon: rsx! {
                        span {
                            dangerous_inner_html: DISCONNECTED_SVG,
                            style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center;",
                        }
                    }
                }
            }
        };
    };

    rsx! {
        Card {
            h3 { "Assets" }

            div {
                class: "informers",
                style: "display: flex; flex-wrap: wrap; gap: 1rem 3rem; margin-bottom: 1.5rem;",
                AdaInformer {
                    title: "Account Balance".to_string(),
                    value: account.balance_value(),
                    help: "Current address balance".to_string(),
                    hideable: true,
                }
                AdaInformer {
                    title: "Rewards".to_string(),
                    value: account.rewards(),
                    help: "Rewards available for withdrawal".to_string(),
                    hideable: true,
                }
                TextInformer {
                    title: "Total Assets".to_string(),
                    value: with_commas(account.total_assets()),
                    help: "Total number of assets in the account".to_string(),
                }
            }

            hr { style: "border-top-style: dashed;" }

            div {
                role: "search",
                style: "display: flex; align-items: center; gap: 0.5rem; max-width: 32rem; margin-bottom: 1rem;",
                input {
                    r#type: "search",
                    name: "asset-search",
                    "aria-label": "Search assets",
                    placeholder: "Search by Asset Name, Fingerprint, or Policy ID",
                    style: "margin-bottom: 0;",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                    onmounted: move |evt| search_input.set(Some(evt.data())),
                }
                if !search.read().is_empty() {
                    button {
                        class: "secondary outline",
                        title: "Clear search",
                        style: "margin-bottom: 0;",
                        onclick: move |_| search.set(String::new()),
                        "✕"
                    }
                }
                kbd { title: "Press / to search", "/" }
            }

            AssetsTable { data: filtered() }
        }
    }
}
