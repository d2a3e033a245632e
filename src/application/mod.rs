//! Runs a `Scene` in a window until the user asks to close it.
//!
//! ```text
//! Setup -> Loop { input check, clear, draw pairs, present, poll } -> Teardown
//! ```
//!
//! Every binary of this crate boils down to a call to `launch` with one of the
//! built-in variants.

pub mod settings;

mod launcher;

pub use self::launcher::{execute, launch, report, run};
pub use self::settings::Settings;
