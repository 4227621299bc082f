use core::ffi::{c_int, c_void, CStr};
use core::ptr;

use crate::firmware;
use crate::gui::GuiElement;

pub struct RadioButton {
    wrapped: *mut c_void,
}

impl RadioButton {
    /// Causes the radio button to be selected by default.
    pub const FLAG_SELECTED: c_int = 1 << 2;
    /// Makes the radio button interactive.
    pub const FLAG_ENABLED: c_int = 1 << 15;

    pub fn new(x: c_int, y: c_int, text: &'static CStr, flags: c_int) -> Self {
        // Font pointer and the undocumented integers follow the firmware's
        // defaults (null/0).
        let wrapped = unsafe {
            firmware::GUI_CreateRadioButton(
                ptr::null_mut(),
                x,
                y,
                text.as_ptr(),
                0,
                flags,
                ptr::null_mut(),
                0,
            )
        };
        RadioButton { wrapped }
    }
}

impl GuiElement for RadioButton {
    fn wrapped(&self) -> *mut c_void {
        self.wrapped
    }
}
