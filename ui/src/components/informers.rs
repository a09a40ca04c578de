//! Small labelled figures: balances, counts and asset quantities.

use api::assets::quantity::Quantity;
use api::assets::quantity::ADA_DECIMALS;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::pico::CopyButton;

const HIDDEN_VALUE: &str = "***";

#[component]
fn InformerTitle(title: String, help: Option<String>) -> Element {
    rsx! {
        small {
            class: "informer-title",
            style: "display: block; color: var(--pico-muted-color); font-size: 0.8rem;",
            "{title}"
            if let Some(help) = help {
                span {
                    title: "{help}",
                    style: "cursor: help; margin-left: 0.35em; border-bottom: 1px dotted var(--pico-muted-border-color);",
                    "?"
                }
            }
        }
    }
}

/// An ADA amount given in lovelace.
///
/// A `hideable` informer shows an eye toggle that masks every hideable
/// balance on the page at once.
#[component]
pub fn AdaInformer(
    title: String,
    value: Quantity,
    #[props(optional)] help: Option<String>,
    #[props(default = false)] hideable: bool,
) -> Element {
    let mut hide_balances = use_context::<AppStateMut>().hide_balances;

    let formatted = value.format(ADA_DECIMALS);
    let hidden = hideable && hide_balances();

    rsx! {
        div {
            class: "informer",
            InformerTitle { title, help }
            span {
                class: "informer-value",
                title: if hidden { String::new() } else { format!("{} ADA", formatted.full()) },
                if hidden {
                    "{HIDDEN_VALUE}"
                } else {
                    strong { "{formatted.whole}" }
                    if !formatted.fraction.is_empty() {
                        span { style: "opacity: 0.6;", ".{formatted.fraction}" }
                    }
                    " ADA"
                }
            }
            if hideable {
                button {
                    class: "secondary outline informer-toggle",
                    title: if hidden { "Show balances" } else { "Hide balances" },
                    onclick: move |_| hide_balances.toggle(),
                    if hidden { "👁" } else { "◌" }
                }
            }
        }
    }
}

#[component]
pub fn TextInformer(
    title: String,
    value: String,
    #[props(optional)] help: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "informer",
            InformerTitle { title, help }
            span {
                class: "informer-value",
                strong { "{value}" }
            }
        }
    }
}

/// A token quantity scaled by its decimals, with the full precision value on hover.
#[component]
pub fn AssetQuantity(quantity: Quantity, decimals: u8) -> Element {
    let formatted = quantity.format(decimals);

    rsx! {
        span {
            title: "{formatted.full()}",
            style: "white-space: nowrap;",
            "{formatted.trimmed()}"
        }
    }
}

/// Shortened text with a button copying the complete value.
#[component]
pub fn CopyText(value: String, copy: String) -> Element {
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; gap: 0.35rem;",
            span {
                title: "{copy}",
                "{value}"
            }
            CopyButton { text_to_copy: copy.clone() }
        }
    }
}
