//! Drop-down menu and menu item wrappers.
//!
//! Unlike the dialog, the menu's vtable is never shadowed; the documented
//! slots are called directly through the firmware's own table.

use core::ffi::{c_int, c_void, CStr};
use core::ptr;

use crate::firmware;
use crate::gui::GuiElement;
use crate::vtable::VTableFunction;
use crate::vtable_call;

pub type DropDownAddItemFn = unsafe extern "C" fn(*mut c_void, *mut c_void, u32);
pub type DropDownScrollBarFn = unsafe extern "C" fn(*mut c_void, u32);

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawDropDownMenuVTable {
    pub(crate) _reserved0: [u32; 15],
    /// Trailing parameter is undocumented; always pass 0.
    pub add_menu_item: VTableFunction<DropDownAddItemFn>,
    pub(crate) _reserved1: [u32; 84],
    pub set_scroll_bar_visibility: VTableFunction<DropDownScrollBarFn>,
}

#[repr(C)]
pub struct RawDropDownMenu {
    _reserved0: [u8; 0x4C],
    pub vtable: *mut RawDropDownMenuVTable,
}

#[cfg(target_pointer_width = "32")]
const _: () = {
    use core::mem::offset_of;
    assert!(offset_of!(RawDropDownMenu, vtable) == 0x4C);
    assert!(offset_of!(RawDropDownMenuVTable, add_menu_item) == 0x3C);
    assert!(offset_of!(RawDropDownMenuVTable, set_scroll_bar_visibility) == 0x198);
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBarVisibility {
    Hidden = 0,
    AlwaysVisible = 1,
    VisibleWhenRequired = 2,
}

pub struct DropDownMenu {
    wrapped: *mut RawDropDownMenu,
}

impl DropDownMenu {
    pub fn new(left_x: u16, top_y: u16, right_x: u16, bottom_y: u16, event_type: u16) -> Self {
        let mut bounds = [left_x, top_y, right_x, bottom_y];
        // The final parameter is undocumented; 0 is the observed safe value.
        let wrapped = unsafe {
            firmware::GUI_CreateDropDownMenu(
                ptr::null_mut(),
                bounds.as_mut_ptr(),
                event_type,
                0,
            )
        }
        .cast::<RawDropDownMenu>();
        DropDownMenu { wrapped }
    }

    pub fn add_menu_item(&mut self, item: &DropDownMenuItem) {
        unsafe {
            vtable_call!(
                (*self.wrapped).vtable,
                add_menu_item,
                self.wrapped.cast::<c_void>(),
                item.wrapped(),
                0
            )
        };
    }

    pub fn set_scroll_bar_visibility(&mut self, visibility: ScrollBarVisibility) {
        unsafe {
            vtable_call!(
                (*self.wrapped).vtable,
                set_scroll_bar_visibility,
                self.wrapped.cast::<c_void>(),
                visibility as u32
            )
        };
    }
}

impl GuiElement for DropDownMenu {
    fn wrapped(&self) -> *mut c_void {
        self.wrapped.cast()
    }
}

pub struct DropDownMenuItem {
    wrapped: *mut c_void,
}

impl DropDownMenuItem {
    pub const FLAG_TEXT_ALIGN_RIGHT: c_int = 1 << 5;
    pub const FLAG_TEXT_ALIGN_LEFT: c_int = 1 << 6;
    pub const FLAG_ENABLED: c_int = 1 << 15;

    pub fn new(text: &'static CStr, index: c_int, flags: c_int) -> Self {
        let wrapped = unsafe {
            firmware::GUI_CreateDropDownMenuItem(
                ptr::null_mut(),
                0,
                0,
                text.as_ptr(),
                index,
                flags,
                0,
            )
        };
        DropDownMenuItem { wrapped }
    }
}

impl GuiElement for DropDownMenuItem {
    fn wrapped(&self) -> *mut c_void {
        self.wrapped
    }
}
