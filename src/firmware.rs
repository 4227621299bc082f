//! Firmware entry points.
//!
//! Addresses are resolved at link time from the application's linker script;
//! nothing in this module is implemented by the crate itself. Parameters
//! documented as unknown are passed through as opaque integers by the
//! wrappers, see the callers for the observed safe values.
//!
//! Under `cfg(test)` the same symbols are provided by [`mock`], a small
//! stand-in firmware, so the wrappers and the vtable shim can be exercised
//! on the host.

#[cfg(not(test))]
use core::ffi::{c_char, c_int, c_void};

#[cfg(not(test))]
use crate::gui::dialog::RawDialog;
#[cfg(not(test))]
use crate::gui::textbox::RawTextBox;

#[cfg(not(test))]
extern "C" {
    pub fn GUI_CreateButton(
        button: *mut c_void,
        bounds: *mut u16,
        text: *const c_char,
        event_type: u16,
        unknown0: c_int,
        unknown1: c_int,
    ) -> *mut c_void;

    pub fn GUI_CreateDropDownMenu(
        drop_down_menu: *mut c_void,
        bounds: *mut u16,
        event_type: u16,
        flags1: c_int,
    ) -> *mut c_void;

    pub fn GUI_CreateDropDownMenuItem(
        drop_down_menu_item: *mut c_void,
        unknown0: c_int,
        unknown1: c_int,
        text: *const c_char,
        index: c_int,
        flags: c_int,
        unknown2: c_int,
    ) -> *mut c_void;

    pub fn GUI_CreateDialog(
        dialog: *mut c_void,
        height: c_int,
        alignment: c_int,
        title: *const c_char,
        unknown2: c_int,
        unknown3: c_int,
        keyboard: c_int,
    ) -> *mut RawDialog;

    pub fn GUI_CreateLabel(
        label: *mut c_void,
        x: c_int,
        y: c_int,
        text: *const c_char,
        unknown0: c_int,
        flags: c_int,
        font: *mut c_void,
        text_color: *const u16,
        background_color: *const u16,
        show_shadow: bool,
        shadow_color: u16,
        unknown1: c_int,
    ) -> *mut c_void;

    pub fn GUI_CreateRadioButton(
        radio_button: *mut c_void,
        x: c_int,
        y: c_int,
        text: *const c_char,
        unknown0: c_int,
        flags: c_int,
        font: *mut c_void,
        unknown2: c_int,
    ) -> *mut c_void;

    pub fn GUI_CreateTextBox(
        text_box: *mut c_void,
        x: c_int,
        y: c_int,
        width: c_int,
        text: *const c_char,
        unknown0: c_int,
        flags: c_int,
        max_length: c_int,
        count_length_by_bytes: bool,
    ) -> *mut RawTextBox;

    pub fn GUI_DisplayMessageBox(
        unknown: c_int,
        title_string_id: c_int,
        content_string_id: c_int,
    );

    pub fn GUI_DisplayMessageBox_Internal(
        unknown: c_int,
        title: *const c_char,
        content_prefix: *const c_char,
        content: *const c_char,
        buttons: c_int,
        disable_close_button: bool,
    ) -> *mut c_void;

    pub fn Debug_GetCursorPosition(x: *mut c_int, y: *mut c_int) -> c_int;

    pub fn Debug_GetKey() -> c_int;

    pub fn Debug_PrintString(string: *mut c_char, invert: bool) -> bool;

    pub fn Debug_SetCursorPosition(x: c_int, y: c_int) -> c_int;
}

#[cfg(test)]
pub use self::mock::*;
