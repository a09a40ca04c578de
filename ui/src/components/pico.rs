//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use std::time::Duration;

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    title: Option<String>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.outline, &props.button_type) {
        (false, ButtonType::Primary) => "",
        (false, ButtonType::Secondary) => "secondary",
        (false, ButtonType::Contrast) => "contrast",
        (true, ButtonType::Primary) => "outline",
        (true, ButtonType::Secondary) => "secondary outline",
        (true, ButtonType::Contrast) => "contrast outline",
    };
    rsx! {
        button {
            class: "{class_str}",
            title: props.title.clone().unwrap_or_default(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// A compact button that copies `text_to_copy` to the clipboard and briefly
/// confirms the copy.
#[component]
pub fn CopyButton(text_to_copy: String) -> Element {
    let mut copied = use_signal(|| false);

    rsx! {
        button {
            class: "secondary outline copy-button",
            title: if copied() { "Copied" } else { "Copy to clipboard" },
            onclick: move |evt| {
                // rows may react to clicks; copying should not
                evt.stop_propagation();
                let text = text_to_copy.clone();
                spawn(async move {
                    if crate::compat::clipboard_set(text).await {
                        copied.set(true);
                        crate::compat::sleep(Duration::from_millis(1500)).await;
                        copied.set(false);
                    } else {
                        dioxus_logger::tracing::warn!("clipboard write failed");
                    }
                });
            },
            if copied() { "✓" } else { "⧉" }
        }
    }
}
