//! Dialog wrapper with event interception.
//!
//! The firmware dispatches dialog events through a vtable stored in ROM. To
//! intercept them without touching the firmware, the wrapper copies that
//! vtable into an owned shadow table, redirects the `on_event` slot to a
//! free trampoline function, and swaps the object's vtable pointer. The
//! ROM's first vtable dword is always zero and never read, so the shadow
//! copy repurposes it as a back-reference from the firmware object to the
//! owning wrapper.
//!
//! The firmware keeps a raw pointer to the shadow table (and the shadow
//! table one to the wrapper), so a wrapper's address must never change once
//! installed. `Dialog` is `!Unpin` and every mutating operation goes through
//! `Pin<&mut Self>`, which makes a move after installation a compile error.

use core::ffi::{c_int, c_void, CStr};
use core::marker::PhantomPinned;
use core::pin::Pin;
use core::ptr;

use crate::firmware;
use crate::gui::GuiElement;
use crate::vtable::VTableFunction;
use crate::vtable_call;

pub type DialogOnEventFn = unsafe extern "C" fn(*mut RawDialog, *mut DialogEvent) -> c_int;
pub type DialogAddElementFn = unsafe extern "C" fn(*mut RawDialog, *mut c_void, c_int);
pub type DialogMethodFn = unsafe extern "C" fn(*mut RawDialog);

/// The firmware's dialog vtable, byte-for-byte.
///
/// Slot order and the padding runs between slots are part of the binary
/// contract; the trailing padding keeps the copied table as long as the ROM
/// table so slots past `show_dialog` stay readable through the shadow copy.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawDialogVTable {
    /// Back-reference to the owning [`Dialog`]. Zero in the ROM original.
    pub(crate) me: *mut c_void,
    pub(crate) _reserved0: [u32; 2],
    pub(crate) _reserved1: [u32; 3],
    pub on_event: VTableFunction<DialogOnEventFn>,
    pub(crate) _reserved2: [u32; 3],
    /// Trailing parameter is undocumented; always pass 0.
    pub add_element: VTableFunction<DialogAddElementFn>,
    pub(crate) _reserved3: [u32; 12],
    pub refresh: VTableFunction<DialogMethodFn>,
    pub(crate) _reserved4: [u32; 69],
    pub show_dialog: VTableFunction<DialogMethodFn>,
    pub(crate) _reserved5: [u32; 60],
}

/// The firmware's dialog object. Externally allocated and owned; all bytes
/// outside the documented fields are opaque.
#[repr(C)]
pub struct RawDialog {
    _reserved0: [u8; 0x10],
    pub left_x: u16,
    pub top_y: u16,
    pub right_x: u16,
    pub bottom_y: u16,
    _reserved1: [u8; 0x34],
    pub vtable: *mut RawDialogVTable,
    _reserved2: [u8; 0x58],
}

#[cfg(target_pointer_width = "32")]
const _: () = {
    use core::mem::{offset_of, size_of};
    assert!(size_of::<RawDialog>() == 0xA8);
    assert!(offset_of!(RawDialog, left_x) == 0x10);
    assert!(offset_of!(RawDialog, vtable) == 0x4C);
    assert!(offset_of!(RawDialogVTable, on_event) == 0x18);
    assert!(offset_of!(RawDialogVTable, add_element) == 0x30);
    assert!(offset_of!(RawDialogVTable, refresh) == 0x6C);
    assert!(offset_of!(RawDialogVTable, show_dialog) == 0x18C);
};

/// Event record passed by the firmware to a dialog's event callback.
#[repr(C)]
pub struct DialogEvent {
    /// Event type code; [`crate::gui::Button::event_code`] gives the value
    /// reported for a button's `event_type` constructor argument.
    pub event_type: u16,
    _reserved0: u16,
    /// The firmware's internal pointer for the element the event refers to.
    /// Compare against [`GuiElement::wrapped`] to identify the source.
    pub element: *mut c_void,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogHeight {
    Height25 = 0,
    Height55 = 1,
    Height75 = 2,
    Height95 = 3,
    Height35 = 4,
    Height60 = 5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAlignment {
    Top = 0,
    Center = 1,
    Bottom = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardState {
    None = 0,
    Math1 = 1,
    Math2 = 4,
    Math3 = 5,
    Trig = 6,
    Var = 7,
    Abc = 8,
    Catalog = 9,
    Advance = 10,
    Number = 11,
}

/// Receives events the firmware dispatches to an overridden dialog.
pub trait DialogEventHandler {
    /// Return `Some(code)` to consume the event, or `None` to let the
    /// firmware's own handler run. `code` is returned to the firmware
    /// unchanged.
    fn on_event(&mut self, event: &DialogEvent) -> Option<c_int>;
}

impl<F: FnMut(&DialogEvent) -> Option<c_int>> DialogEventHandler for F {
    fn on_event(&mut self, event: &DialogEvent) -> Option<c_int> {
        self(event)
    }
}

/// A firmware dialog with its event callback redirected to `H`.
pub struct Dialog<H: DialogEventHandler> {
    wrapped: *mut RawDialog,
    original_vtable: *const RawDialogVTable,
    shadow_vtable: RawDialogVTable,
    handler: H,
    installed: bool,
    _pin: PhantomPinned,
}

impl<H: DialogEventHandler> Dialog<H> {
    /// Creates the firmware dialog and prepares the shadow vtable. The
    /// vtable pointer is not swapped until the wrapper is pinned and used,
    /// since the swap records the wrapper's address.
    pub fn new(
        height: DialogHeight,
        alignment: DialogAlignment,
        title: &'static CStr,
        keyboard: KeyboardState,
        handler: H,
    ) -> Self {
        // Null storage means the firmware allocates the object. The two
        // middle parameters are undocumented; 0 is the observed safe value.
        let wrapped = unsafe {
            firmware::GUI_CreateDialog(
                ptr::null_mut(),
                height as c_int,
                alignment as c_int,
                title.as_ptr(),
                0,
                0,
                keyboard as c_int,
            )
        };
        let original_vtable = unsafe { (*wrapped).vtable as *const RawDialogVTable };
        let mut shadow_vtable = unsafe { *original_vtable };
        shadow_vtable.on_event.func = on_event_trampoline::<H>;
        Dialog {
            wrapped,
            original_vtable,
            shadow_vtable,
            handler,
            installed: false,
            _pin: PhantomPinned,
        }
    }

    /// Links the shadow vtable to this wrapper and swaps it into the
    /// firmware object. Runs once; the address recorded here stays valid
    /// because `Dialog` is `!Unpin`.
    fn install(self: Pin<&mut Self>) {
        // Safety: nothing is moved out of the pinned reference.
        let this = unsafe { self.get_unchecked_mut() };
        if this.installed {
            return;
        }
        this.shadow_vtable.me = (this as *mut Self).cast();
        unsafe {
            (*this.wrapped).vtable = &mut this.shadow_vtable;
        }
        this.installed = true;
    }

    pub fn add_element(mut self: Pin<&mut Self>, element: &impl GuiElement) {
        self.as_mut().install();
        let this = unsafe { self.get_unchecked_mut() };
        unsafe {
            vtable_call!(&this.shadow_vtable, add_element, this.wrapped, element.wrapped(), 0)
        };
    }

    pub fn refresh(mut self: Pin<&mut Self>) {
        self.as_mut().install();
        let this = unsafe { self.get_unchecked_mut() };
        unsafe { vtable_call!(&this.shadow_vtable, refresh, this.wrapped) };
    }

    /// Shows the dialog and enters the firmware's modal event loop. Events
    /// arrive on the handler from inside this call.
    pub fn show(mut self: Pin<&mut Self>) {
        self.as_mut().install();
        let this = unsafe { self.get_unchecked_mut() };
        unsafe { vtable_call!(&this.shadow_vtable, show_dialog, this.wrapped) };
    }

    pub fn left_x(&self) -> u16 {
        unsafe { (*self.wrapped).left_x }
    }

    pub fn top_y(&self) -> u16 {
        unsafe { (*self.wrapped).top_y }
    }

    pub fn right_x(&self) -> u16 {
        unsafe { (*self.wrapped).right_x }
    }

    pub fn bottom_y(&self) -> u16 {
        unsafe { (*self.wrapped).bottom_y }
    }

    /// Raw pointer to the firmware object backing this dialog.
    pub fn wrapped(&self) -> *mut c_void {
        self.wrapped.cast()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The handler is not structurally pinned; mutating it cannot move the
    /// wrapper.
    pub fn handler_mut(self: Pin<&mut Self>) -> &mut H {
        unsafe { &mut self.get_unchecked_mut().handler }
    }
}

impl<H: DialogEventHandler> Drop for Dialog<H> {
    fn drop(&mut self) {
        // Point the firmware object back at the ROM table so nothing keeps
        // referencing the shadow copy owned by this wrapper.
        if self.installed {
            unsafe {
                (*self.wrapped).vtable = self.original_vtable as *mut RawDialogVTable;
            }
        }
    }
}

/// Free redirect target patched into the shadow `on_event` slot.
///
/// The firmware calls this with the raw object; the owning wrapper is
/// recovered through the `me` slot of the shadow vtable the object now
/// points at. Unhandled events are forwarded to the ROM implementation
/// through the saved original vtable, with that slot's own `self` offset.
/// The `c_int` return goes straight back into firmware control flow.
unsafe extern "C" fn on_event_trampoline<H: DialogEventHandler>(
    dialog: *mut RawDialog,
    event: *mut DialogEvent,
) -> c_int {
    let vtable = (*dialog).vtable;
    let this = &mut *(*vtable).me.cast::<Dialog<H>>();
    match this.handler.on_event(&*event) {
        Some(code) => code,
        None => vtable_call!(this.original_vtable, on_event, dialog, event),
    }
}
