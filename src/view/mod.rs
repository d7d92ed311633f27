//! UI view modules — pure rendering functions.
//!
//! Each submodule renders one screen. Views read from [`AppState`] and push
//! navigation through its transition methods. No async, no services.
//!
//! [`AppState`]: crate::state::AppState

pub mod card_detail;
pub mod placeholder;
pub mod settings;
pub mod wallet;
