use api::prefs::user_prefs::asset_image_url;
use dioxus::prelude::*;

use crate::app_state::AppState;

const IMAGE_STYLE: &str = "width: 2rem; height: 2rem; border-radius: 50%; object-fit: cover; display: block;";

/// The image for an asset, keyed by policy id + asset name.
///
/// Falls back to a neutral tile when no image source is configured or the
/// image fails to load.
#[component]
pub fn AssetImage(asset_id: String) -> Element {
    let app_state = use_context::<AppState>();
    let mut failed = use_signal(|| false);

    let src = asset_image_url(&app_state.prefs, &asset_id);

    match src {
        Some(src) if !failed() => rsx! {
            img {
                src: "{src}",
                alt: "",
                "loading": "lazy",
                style: IMAGE_STYLE,
                onerror: move |_| failed.set(true),
            }
        },
        _ => rsx! {
            div {
                style: "{IMAGE_STYLE} background: var(--pico-muted-border-color);",
            }
        },
    }
}
