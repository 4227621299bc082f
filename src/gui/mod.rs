//! Wrappers for the firmware's GUI element classes.
//!
//! Each constructor is one call into a fixed firmware entry point; the
//! returned object lives in firmware-owned memory and is only ever borrowed
//! here. Dialogs additionally intercept their event callback through a
//! shadow vtable, see [`dialog`].

pub mod button;
pub mod dialog;
pub mod dropdown;
pub mod label;
pub mod msgbox;
pub mod radio;
pub mod textbox;

pub use button::Button;
pub use dialog::{
    Dialog, DialogAlignment, DialogEvent, DialogEventHandler, DialogHeight, KeyboardState,
};
pub use dropdown::{DropDownMenu, DropDownMenuItem, ScrollBarVisibility};
pub use label::Label;
pub use msgbox::{
    display_message_box, display_message_box_text, BUTTON_ABORT, BUTTON_CANCEL, BUTTON_NO,
    BUTTON_OK, BUTTON_RETRY, BUTTON_YES,
};
pub use radio::RadioButton;
pub use textbox::TextBox;

use core::ffi::c_void;

/// Implemented by wrappers around firmware-owned GUI elements.
pub trait GuiElement {
    /// Raw pointer to the firmware object backing this element.
    fn wrapped(&self) -> *mut c_void;
}
