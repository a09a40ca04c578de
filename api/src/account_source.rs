//! Loads the connected account's snapshot from disk.

use std::path::Path;

use anyhow::Context;

use crate::assets::account::AccountState;
use crate::prefs::user_prefs::UserPrefs;

/// Reads and parses an account snapshot.
pub async fn load_account_state(path: impl AsRef<Path>) -> anyhow::Result<AccountState> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading account state from {}", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("parsing account state in {}", path.display()))
}

/// Loads the account configured in `prefs`. `None` means no account is connected.
pub async fn connected_account(prefs: &UserPrefs) -> anyhow::Result<Option<AccountState>> {
    let Some(path) = prefs.account_state_path() else {
        dioxus_logger::tracing::info!("no account state configured; account not connected");
        return Ok(None);
    };

    let account = load_account_state(path).await?;
    dioxus_logger::tracing::info!(
        "loaded account state from {}: {} assets",
        path,
        account.total_assets()
    );
    Ok(Some(account))
}
