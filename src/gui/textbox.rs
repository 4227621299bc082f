//! Editable text box wrapper.

use core::ffi::{c_char, c_int, c_void, CStr};
use core::ptr;

use crate::firmware;
use crate::gui::GuiElement;
use crate::vtable::VTableFunction;
use crate::vtable_call;

pub type TextBoxSetTextFn = unsafe extern "C" fn(*mut RawTextBox, *const c_char);

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawTextBoxVTable {
    pub(crate) _reserved0: [u32; 96],
    pub set_text: VTableFunction<TextBoxSetTextFn>,
    // The ROM table continues past set_text, but nothing later is called
    // through this layout, so its length is not matched here.
}

/// The firmware's text box object. Externally allocated and owned.
#[repr(C)]
pub struct RawTextBox {
    _reserved0: [u8; 0x4C],
    pub vtable: *mut RawTextBoxVTable,
    _reserved1: [u8; 0x4],
    /// Firmware-owned backing string; null until text is assigned.
    pub text: *const c_char,
    _reserved2: [u8; 0x48],
}

#[cfg(target_pointer_width = "32")]
const _: () = {
    use core::mem::{offset_of, size_of};
    assert!(size_of::<RawTextBox>() == 0xA0);
    assert!(offset_of!(RawTextBox, vtable) == 0x4C);
    assert!(offset_of!(RawTextBox, text) == 0x54);
    assert!(offset_of!(RawTextBoxVTable, set_text) == 0x180);
};

pub struct TextBox {
    wrapped: *mut RawTextBox,
}

impl TextBox {
    /// Enables drawing the text box's outline and background.
    pub const FLAG_DRAW_BOX: c_int = 1 << 3;
    /// Allows the contents of the text box to be modified.
    pub const FLAG_EDITABLE: c_int = 1 << 8;

    pub fn new(
        x: c_int,
        y: c_int,
        width: c_int,
        max_length: c_int,
        count_length_by_bytes: bool,
    ) -> Self {
        Self::create(x, y, width, None, max_length, count_length_by_bytes)
    }

    pub fn with_text(
        x: c_int,
        y: c_int,
        width: c_int,
        text: &'static CStr,
        max_length: c_int,
        count_length_by_bytes: bool,
    ) -> Self {
        Self::create(x, y, width, Some(text), max_length, count_length_by_bytes)
    }

    fn create(
        x: c_int,
        y: c_int,
        width: c_int,
        text: Option<&'static CStr>,
        max_length: c_int,
        count_length_by_bytes: bool,
    ) -> Self {
        let wrapped = unsafe {
            firmware::GUI_CreateTextBox(
                ptr::null_mut(),
                x,
                y,
                width,
                text.map_or(ptr::null(), |text| text.as_ptr()),
                0,
                Self::FLAG_DRAW_BOX | Self::FLAG_EDITABLE,
                max_length,
                count_length_by_bytes,
            )
        };
        TextBox { wrapped }
    }

    /// Current contents, read from the firmware object. `None` while the
    /// firmware has no backing string.
    pub fn text(&self) -> Option<&CStr> {
        unsafe {
            let text = (*self.wrapped).text;
            if text.is_null() {
                None
            } else {
                Some(CStr::from_ptr(text))
            }
        }
    }

    pub fn set_text(&mut self, text: &CStr) {
        unsafe {
            vtable_call!((*self.wrapped).vtable, set_text, self.wrapped, text.as_ptr())
        };
    }
}

impl GuiElement for TextBox {
    fn wrapped(&self) -> *mut c_void {
        self.wrapped.cast()
    }
}
