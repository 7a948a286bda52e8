//! Keyboard input.
//!
//! All input flows the same way:
//!
//! ```text
//! KeyEvent -> KeybindingConfig::command_for() -> Command -> dispatch() -> Dashboard
//! ```
//!
//! # Example
//!
//! ```ignore
//! use dockdeck::input::{dispatch, Cursor, KeybindingConfig};
//!
//! let bindings = KeybindingConfig::default();
//! if let Some(command) = bindings.command_for(&key_event, dashboard.view_mode()) {
//!     if dispatch(&dashboard, command, &mut cursor).await.is_break() {
//!         return Ok(());
//!     }
//! }
//! ```

pub mod command;
pub mod cursor;
pub mod dispatch;
pub mod keybindings;

pub use command::Command;
pub use cursor::Cursor;
pub use dispatch::dispatch;
pub use keybindings::{command_for, KeyCombo, KeybindingConfig};
