use core::ffi::{c_int, c_void, CStr};
use core::ptr;

use crate::firmware;
use crate::gui::GuiElement;

/// A static text label.
pub struct Label {
    wrapped: *mut c_void,
}

impl Label {
    /// Enables displaying the background color of the label.
    pub const FLAG_BACKGROUND: c_int = 1 << 0;
    /// Allows the label to be selected/brought into focus. When selected,
    /// the text and background colors switch.
    pub const FLAG_SELECTABLE: c_int = 1 << 15;

    pub fn new(x: c_int, y: c_int, text: &'static CStr) -> Self {
        Self::with_flags(x, y, text, 0, None, None)
    }

    pub fn with_flags(
        x: c_int,
        y: c_int,
        text: &'static CStr,
        flags: c_int,
        text_color: Option<&'static u16>,
        background_color: Option<&'static u16>,
    ) -> Self {
        Self::with_shadow(x, y, text, flags, text_color, background_color, false, 0)
    }

    pub fn with_shadow(
        x: c_int,
        y: c_int,
        text: &'static CStr,
        flags: c_int,
        text_color: Option<&'static u16>,
        background_color: Option<&'static u16>,
        show_shadow: bool,
        shadow_color: u16,
    ) -> Self {
        // The font pointer and the two undocumented integers are passed as
        // null/0, matching the firmware's defaults.
        let wrapped = unsafe {
            firmware::GUI_CreateLabel(
                ptr::null_mut(),
                x,
                y,
                text.as_ptr(),
                0,
                flags,
                ptr::null_mut(),
                opt_color(text_color),
                opt_color(background_color),
                show_shadow,
                shadow_color,
                0,
            )
        };
        Label { wrapped }
    }
}

fn opt_color(color: Option<&'static u16>) -> *const u16 {
    color.map_or(ptr::null(), |color| color)
}

impl GuiElement for Label {
    fn wrapped(&self) -> *mut c_void {
        self.wrapped
    }
}
