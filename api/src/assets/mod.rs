//! Data model and display helpers for the account's native assets.

pub mod account;
pub mod asset;
pub mod asset_name;
pub mod display;
pub mod quantity;
