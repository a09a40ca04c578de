//! Defines the mutable, reactive state for the application's UI.

use api::assets::account::AccountState;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the core,
/// immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The connected account. `None` while no account is connected.
    ///
    /// Screens only read this signal; it is owned by whoever loads account data.
    pub account_state: Signal<Option<AccountState>>,
    /// Masks balance informers marked as hideable.
    pub hide_balances: Signal<bool>,
}
