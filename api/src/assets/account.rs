//! The account snapshot the dashboard renders.
//!
//! Every level of the snapshot is optional on the wire. Accessors on
//! `AccountState` fall back to zero or empty values instead of failing.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use super::asset::Asset;
use super::quantity::Quantity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    #[serde(default)]
    pub state: Option<AccountInfo>,
    #[serde(default)]
    pub delegation: Option<Delegation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: Balance,
}

/// ADA balance in lovelace plus the native assets held next to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Quantity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    /// Rewards available for withdrawal, in lovelace.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rewards: Quantity,
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AccountState {
    fn balance(&self) -> Option<&Balance> {
        self.state.as_ref().map(|info| &info.balance)
    }

    pub fn balance_value(&self) -> Quantity {
        self.balance()
            .map(|balance| balance.value.clone())
            .unwrap_or_default()
    }

    pub fn rewards(&self) -> Quantity {
        self.delegation
            .as_ref()
            .map(|delegation| delegation.rewards.clone())
            .unwrap_or_default()
    }

    pub fn assets(&self) -> &[Asset] {
        self.balance()
            .map(|balance| balance.assets.as_slice())
            .unwrap_or_default()
    }

    pub fn total_assets(&self) -> usize {
        self.assets().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_default_to_zero() {
        let account: AccountState = serde_json::from_str("{}").unwrap();
        assert!(account.balance_value().is_zero());
        assert!(account.rewards().is_zero());
        assert!(account.assets().is_empty());
        assert_eq!(account.total_assets(), 0);
    }

    #[test]
    fn balance_without_assets() {
        let account: AccountState =
            serde_json::from_str(r#"{ "state": { "balance": { "value": "2500000" } } }"#).unwrap();
        assert_eq!(account.balance_value(), Quantity::from(2_500_000u64));
        assert_eq!(account.total_assets(), 0);
    }

    #[test]
    fn null_balance_value_reads_as_zero() {
        let account: AccountState =
            serde_json::from_str(r#"{ "state": { "balance": { "value": null, "assets": [] } } }"#)
                .unwrap();
        assert!(account.balance_value().is_zero());
        assert_eq!(account.total_assets(), 0);
    }

    #[test]
    fn null_assets_read_as_empty() {
        let account: AccountState =
            serde_json::from_str(r#"{ "state": { "balance": { "value": "1000000", "assets": null } } }"#)
                .unwrap();
        assert_eq!(account.balance_value(), Quantity::from(1_000_000u64));
        assert!(account.assets().is_empty());
    }

    #[test]
    fn null_rewards_read_as_zero() {
        let account: AccountState =
            serde_json::from_str(r#"{ "delegation": { "rewards": null } }"#).unwrap();
        assert!(account.rewards().is_zero());
    }

    #[test]
    fn null_balance_and_sections() {
        let account: AccountState = serde_json::from_str(
            r#"{ "state": { "balance": null }, "delegation": null }"#,
        )
        .unwrap();
        assert!(account.balance_value().is_zero());
        assert!(account.rewards().is_zero());
    }
}
