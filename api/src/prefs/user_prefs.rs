use serde::Deserialize;
use serde::Serialize;
use std::env;

/// Represents all user prefs. Intended for saving to a file. editing in settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    account_state_path: Option<String>,
    asset_image_base_url: Option<String>,
    hide_balances: bool,
}

impl UserPrefs {
    /// Creates a UserPrefs instance from environment variables.
    ///
    /// # Environment Variables:
    /// - `ACCOUNT_STATE_PATH`: JSON snapshot of the connected account.
    ///   When unset, no account is connected.
    /// - `ASSET_IMAGE_BASE_URL`: base url that asset images are fetched from.
    ///   Images are requested as `{base}/{policy_id}{asset_name}`.
    /// - `HIDE_BALANCES`: "true" or "1" to start with balances masked.
    pub fn from_env() -> Self {
        let non_empty = |key: &str| env::var(key).ok().filter(|val| !val.trim().is_empty());

        let hide_balances = env::var("HIDE_BALANCES")
            .map(|val| val.eq_ignore_ascii_case("true") || val == "1")
            .unwrap_or(false);

        Self {
            account_state_path: non_empty("ACCOUNT_STATE_PATH"),
            asset_image_base_url: non_empty("ASSET_IMAGE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            hide_balances,
        }
    }

    pub fn account_state_path(&self) -> Option<&str> {
        self.account_state_path.as_deref()
    }

    pub fn asset_image_base_url(&self) -> Option<&str> {
        self.asset_image_base_url.as_deref()
    }

    pub fn hide_balances(&self) -> bool {
        self.hide_balances
    }

    pub fn with_account_state_path(mut self, path: impl Into<String>) -> Self {
        self.account_state_path = Some(path.into());
        self
    }

    pub fn with_asset_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.asset_image_base_url = Some(url.into());
        self
    }
}

/// Returns the url of an asset image, if an image source is configured.
pub fn asset_image_url(prefs: &UserPrefs, asset_id: &str) -> Option<String> {
    prefs
        .asset_image_base_url()
        .map(|base| format!("{}/{}", base, asset_id))
}
