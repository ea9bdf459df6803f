//! A reusable modal message box: alerts, confirmations, text and password prompts,
//! progress and wait dialogs, all served by one lazily built window.
//!
//! [`DialogController`] owns the state machine and sizing; the window itself is supplied
//! by a [`host::DialogHost`]. [`terminal::TerminalHost`] draws it with ratatui.

pub mod buttons;
pub mod config;
pub mod controller;
pub mod host;
pub mod icon;
pub mod options;
pub mod terminal;
mod text;

pub use buttons::{ButtonId, ButtonLabel, ButtonSet, ButtonText};
pub use config::{ConfigError, MessageBoxConfig};
pub use controller::DialogController;
pub use options::{callback, Callback, DisplayMode, InputMode, RequestOptions, WaitConfig};
pub use text::BLANK;

/// The controller bound to the terminal host.
pub type MessageBox = DialogController<terminal::TerminalHost>;
