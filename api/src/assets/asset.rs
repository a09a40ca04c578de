use serde::Deserialize;
use serde::Serialize;

use super::asset_name::decode_asset_name;
use super::quantity::Quantity;

/// A native asset held by an account.
///
/// Within one balance the `fingerprint` is unique and serves as the row identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub policy_id: String,
    /// Hex encoded on-chain name.
    #[serde(default)]
    pub asset_name: String,
    #[serde(default)]
    pub asset_name_ascii: Option<String>,
    pub fingerprint: String,
    pub quantity: Quantity,
    #[serde(default)]
    pub decimals: Option<u8>,
}

impl Asset {
    /// The decoded name, or an empty string if the name cannot be decoded.
    pub fn display_name(&self) -> String {
        decode_asset_name(&self.asset_name)
            .map(|decoded| decoded.final_name)
            .unwrap_or_default()
    }

    /// Identifier used to look up the asset image: policy id followed by the raw name.
    pub fn image_id(&self) -> String {
        format!("{}{}", self.policy_id, self.asset_name)
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_with_optional_fields() {
        let asset: Asset = serde_json::from_value(json!({
            "policyId": "f0ff48bbb7bbe9d59a40f1ce90e9e9d0ff5002ec48f232b49ca0fb9a",
            "assetName": "48534b59",
            "fingerprint": "asset17q7r59zlc3dgw0venc80pdv566q6yguw03f0d9",
            "quantity": "1000000"
        }))
        .unwrap();

        assert_eq!(asset.decimals(), 0);
        assert_eq!(asset.asset_name_ascii, None);
        assert_eq!(asset.display_name(), "HSKY");
        assert_eq!(
            asset.image_id(),
            "f0ff48bbb7bbe9d59a40f1ce90e9e9d0ff5002ec48f232b49ca0fb9a48534b59"
        );
    }

    #[test]
    fn undecodable_name_displays_empty() {
        let asset: Asset = serde_json::from_value(json!({
            "policyId": "p",
            "assetName": "zz",
            "fingerprint": "asset1",
            "quantity": 1,
            "decimals": 2
        }))
        .unwrap();

        assert_eq!(asset.display_name(), "");
        assert_eq!(asset.decimals(), 2);
    }
}
