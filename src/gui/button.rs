use core::ffi::{c_void, CStr};
use core::ptr;

use crate::firmware;
use crate::gui::GuiElement;

/// A push button. Pressing it delivers a [`crate::gui::DialogEvent`] whose
/// type is [`Button::event_code`] of the `event_type` passed here.
pub struct Button {
    wrapped: *mut c_void,
}

impl Button {
    /// Allows the button to be pressed.
    pub const FLAG_ENABLED: u16 = 1 << 15;

    pub fn new(
        left_x: u16,
        top_y: u16,
        right_x: u16,
        bottom_y: u16,
        text: &'static CStr,
        event_type: u16,
    ) -> Self {
        Self::with_flags(
            left_x,
            top_y,
            right_x,
            bottom_y,
            text,
            event_type,
            Self::FLAG_ENABLED,
        )
    }

    pub fn with_flags(
        left_x: u16,
        top_y: u16,
        right_x: u16,
        bottom_y: u16,
        text: &'static CStr,
        event_type: u16,
        flags: u16,
    ) -> Self {
        let mut bounds = [left_x, top_y, right_x, bottom_y];
        // Trailing parameters are undocumented; 0 is the observed safe value.
        let wrapped = unsafe {
            firmware::GUI_CreateButton(
                ptr::null_mut(),
                bounds.as_mut_ptr(),
                text.as_ptr(),
                event_type | flags,
                0,
                0,
            )
        };
        Button { wrapped }
    }

    /// Maps an `event_type` constructor argument to the `event_type` value
    /// the dialog's handler observes when this button is pressed.
    pub const fn event_code(event_type: u16) -> u16 {
        ((event_type + 8) << 4) | (1 << 3)
    }
}

impl GuiElement for Button {
    fn wrapped(&self) -> *mut c_void {
        self.wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::mock::{self, ElementKind};

    #[test]
    fn test_event_code_formula() {
        assert_eq!(Button::event_code(0), 0x88);
        assert_eq!(Button::event_code(1), 0x98);
        assert_eq!(Button::event_code(7), 0xF8);
    }

    #[test]
    fn test_new_defaults_to_enabled() {
        let _guard = mock::lock();
        let button = Button::new(20, 30, 120, 60, c"OK", 1);
        let state = mock::state();
        let record = &state.elements[0];
        assert_eq!(record.kind, ElementKind::Button);
        assert_eq!(record.address, button.wrapped() as usize);
        assert_eq!(record.bounds, Some([20, 30, 120, 60]));
        assert_eq!(record.text.as_deref(), Some("OK"));
        assert_eq!(record.event_type, Some(1 | Button::FLAG_ENABLED));
        assert_eq!(record.opaque, vec![0, 0]);
    }

    #[test]
    fn test_with_flags_passes_flags_verbatim() {
        let _guard = mock::lock();
        let _button = Button::with_flags(0, 0, 50, 20, c"...", 3, 0);
        let state = mock::state();
        assert_eq!(state.elements[0].event_type, Some(3));
    }
}
