//! Message boxes.

use core::ffi::{c_int, c_void, CStr};

use crate::firmware;

pub const BUTTON_OK: c_int = 1 << 5;
pub const BUTTON_YES: c_int = 1 << 6;
pub const BUTTON_NO: c_int = 1 << 7;
pub const BUTTON_ABORT: c_int = 1 << 8;
pub const BUTTON_RETRY: c_int = 1 << 9;
pub const BUTTON_CANCEL: c_int = 1 << 10;

/// Displays a message box whose title and content come from the firmware's
/// string table.
pub fn display_message_box(title_string_id: c_int, content_string_id: c_int) {
    // Leading parameter is undocumented; 0 is the observed safe value.
    unsafe { firmware::GUI_DisplayMessageBox(0, title_string_id, content_string_id) }
}

/// Displays a message box with caller-supplied strings.
///
/// `buttons` is a bitfield of `BUTTON_*` values OR'd together; the firmware
/// shows at most 3. If no buttons are requested and the close button is
/// disabled, the message box cannot be exited. The returned pointer is an
/// undocumented firmware structure, passed through opaquely.
pub fn display_message_box_text(
    title: &CStr,
    content_prefix: Option<&CStr>,
    content: &CStr,
    buttons: c_int,
    disable_close_button: bool,
) -> *mut c_void {
    let prefix = content_prefix.unwrap_or(c"");
    unsafe {
        firmware::GUI_DisplayMessageBox_Internal(
            0,
            title.as_ptr(),
            prefix.as_ptr(),
            content.as_ptr(),
            buttons,
            disable_close_button,
        )
    }
}
