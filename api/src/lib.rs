//! This crate contains the shared asset model and all fullstack server functions.

#[cfg(not(target_arch = "wasm32"))]
pub mod account_source;
pub mod assets;
pub mod prefs;

use dioxus::prelude::*;

use assets::account::AccountState;
use prefs::user_prefs::UserPrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it reads
/// env vars, see [`UserPrefs::from_env`].
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::from_env())
}

/// Retrieves the connected account's state, or `None` when no account is connected.
#[post("/api/account_state")]
pub async fn account_state() -> Result<Option<AccountState>, ApiError> {
    let prefs = UserPrefs::from_env();
    match account_source::connected_account(&prefs).await {
        Ok(account) => Ok(account),
        Err(e) => {
            dioxus_logger::tracing::warn!("failed to load account state: {:#}", e);
            Err(e)
        }
    }
}
