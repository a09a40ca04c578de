//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, tables and informers.
pub mod asset_image;
pub mod assets_table;
pub mod empty_state;
pub mod informers;
pub mod pagination;
pub mod pico;
