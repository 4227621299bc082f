//! Debug text-mode primitives.
//!
//! Thin passthroughs of the firmware's debug text subsystem. The only
//! failure the firmware reports at this layer is "string did not fit on the
//! screen"; everything else either succeeds or is a firmware-side fault
//! this crate cannot observe.

use core::ffi::{c_char, c_int, CStr};

use crate::firmware;

/// Key codes reported by [`get_key`].
///
/// The primitive only reacts reliably to the number keys and Power/Clear;
/// other codes are preserved in [`Key::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Number keys 0-9.
    Digit(u8),
    /// The Power/Clear key.
    Power,
    Other(c_int),
}

impl Key {
    fn from_code(code: c_int) -> Self {
        match code {
            0x30..=0x39 => Key::Digit((code - 0x30) as u8),
            0x98 => Key::Power,
            other => Key::Other(other),
        }
    }
}

/// Prints a string at the current cursor position, black-on-white or
/// inverted white-on-black.
///
/// The error is the firmware's own "did not fit on screen" return, passed
/// through unchanged; the exact overflow granularity is firmware-defined.
pub fn print(text: &CStr, invert: bool) -> Result<(), &'static str> {
    // The firmware takes a mutable pointer but does not write through it.
    let ok = unsafe { firmware::Debug_PrintString(text.as_ptr() as *mut c_char, invert) };
    if ok {
        Ok(())
    } else {
        Err("string did not fit on the screen")
    }
}

/// Blocks until a key is pressed.
pub fn get_key() -> Key {
    Key::from_code(unsafe { firmware::Debug_GetKey() })
}

/// Current cursor position in debug text mode.
pub fn cursor_position() -> (c_int, c_int) {
    let mut x = 0;
    let mut y = 0;
    // The firmware's return value is always 0.
    unsafe { firmware::Debug_GetCursorPosition(&mut x, &mut y) };
    (x, y)
}

pub fn set_cursor_position(x: c_int, y: c_int) {
    unsafe { firmware::Debug_SetCursorPosition(x, y) };
}
