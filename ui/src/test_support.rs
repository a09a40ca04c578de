//! Render helpers for component tests.

use api::assets::account::AccountState;
use api::assets::asset::Asset;
use api::assets::quantity::Quantity;
use api::prefs::user_prefs::UserPrefs;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;

/// Provides the same contexts as `LoadedApp`, for components rendered on their own.
pub fn use_app_context(account: Option<AccountState>, hide_balances: bool) -> AppStateMut {
    use_context_provider(|| AppState::new(UserPrefs::default()));
    let account_state = use_signal(|| account);
    let hide_balances = use_signal(|| hide_balances);
    use_context_provider(|| AppStateMut {
        account_state,
        hide_balances,
    })
}

/// Builds the tree once and returns its html.
pub fn render_once<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Rows in the table body, not counting the header row.
pub fn body_rows(html: &str) -> usize {
    html.matches("<tr").count().saturating_sub(1)
}

/// `count` distinct assets with fingerprints `asset1row000`, `asset1row001`, ...
pub fn numbered_assets(count: usize) -> Vec<Asset> {
    (0..count)
        .map(|i| Asset {
            policy_id: format!("{:056x}", i),
            asset_name: format!("Token{i}").bytes().map(|b| format!("{b:02x}")).collect(),
            asset_name_ascii: None,
            fingerprint: format!("asset1row{i:03}"),
            quantity: Quantity::from(i as u64 + 1),
            decimals: None,
        })
        .collect()
}
