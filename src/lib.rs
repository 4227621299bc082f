#![cfg_attr(not(test), no_std)]

//! Bindings to the fx-CP400 firmware's GUI and debug text subsystems.
//!
//! Everything in this crate is a thin, ABI-exact call into firmware entry
//! points; the crate draws nothing and dispatches nothing of its own. Symbol
//! addresses are resolved at link time from the application's linker script.
//!
//! GUI objects are allocated and owned by the firmware and are reached only
//! through documented byte offsets. Event interception works by swapping an
//! object's vtable pointer for a locally owned shadow copy with one slot
//! redirected, see [`gui::dialog`].

pub mod console;
pub mod debug;
pub mod firmware;
pub mod gui;
pub mod vtable;

#[cfg(all(feature = "panic-handler", not(test)))]
mod panic;

// Re-export commonly used items
pub use gui::*;
