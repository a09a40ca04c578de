//! Decodes hex encoded native asset names into something a person can read.

/// The result of decoding an on-chain asset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAssetName {
    /// CIP-67 label number, when the name carries a valid label prefix.
    pub label: Option<u16>,
    /// The name bytes (label stripped) as text, if they are printable UTF-8.
    pub ascii: Option<String>,
    /// What to show: `ascii` when available, otherwise the hex of the name bytes.
    pub final_name: String,
}

/// Decodes a hex encoded asset name.
///
/// Returns `None` when `hex_name` is not valid hex. An empty name decodes to
/// an empty `final_name`.
pub fn decode_asset_name(hex_name: &str) -> Option<DecodedAssetName> {
    let bytes = hex::decode(hex_name).ok()?;

    let (label, name_bytes) = match bytes.get(..4).and_then(cip67_label) {
        Some(label) => (Some(label), &bytes[4..]),
        None => (None, &bytes[..]),
    };

    let ascii = std::str::from_utf8(name_bytes)
        .ok()
        .filter(|s| !s.is_empty() && !s.chars().any(char::is_control))
        .map(str::to_string);

    let final_name = match &ascii {
        Some(s) => s.clone(),
        None => hex::encode(name_bytes),
    };

    Some(DecodedAssetName {
        label,
        ascii,
        final_name,
    })
}

/// Parses a CIP-67 label: `0000 | 16 bit label | 8 bit crc-8 | 0000`.
fn cip67_label(prefix: &[u8]) -> Option<u16> {
    let [b0, b1, b2, b3] = <[u8; 4]>::try_from(prefix).ok()?;
    if b0 >> 4 != 0 || b3 & 0x0f != 0 {
        return None;
    }

    let label = (u16::from(b0 & 0x0f) << 12) | (u16::from(b1) << 4) | u16::from(b2 >> 4);
    let checksum = ((b2 & 0x0f) << 4) | (b3 >> 4);

    (crc8(&label.to_be_bytes()) == checksum).then_some(label)
}

/// CRC-8 with polynomial 0x07, zero init, no reflection.
fn crc8(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |mut crc, &byte| {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ 0x07
            } else {
                crc << 1
            };
        }
        crc
    })
}
