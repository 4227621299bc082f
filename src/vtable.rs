// Firmware vtable plumbing.
//
// GUI objects in the firmware dispatch through vtables whose layout is fixed
// by the ROM: each slot is three 32-bit words (a signed self-pointer offset,
// an unused word, and the function pointer). Undocumented slots are kept as
// opaque padding arrays so the documented slots stay at their ROM offsets.

/// One function slot of a firmware vtable.
///
/// The firmware adds `self_offset` to the object pointer before invoking
/// `func`, so every call through a slot has to apply the same adjustment.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct VTableFunction<F: Copy> {
    pub self_offset: i32,
    _unused: u32,
    pub func: F,
}

impl<F: Copy> VTableFunction<F> {
    #[cfg(test)]
    pub(crate) const fn new(self_offset: i32, func: F) -> Self {
        VTableFunction {
            self_offset,
            _unused: 0,
            func,
        }
    }

    /// Applies this slot's `self` adjustment to an object pointer.
    ///
    /// # Safety
    ///
    /// `object` must point at the firmware object the containing vtable
    /// belongs to; the adjusted pointer is only meaningful for `func`.
    pub unsafe fn adjusted<T>(&self, object: *mut T) -> *mut T {
        object
            .cast::<u8>()
            .wrapping_offset(self.self_offset as isize)
            .cast()
    }
}

/// Calls through a slot of a firmware vtable, applying the slot's `self`
/// offset before the call.
///
/// Must be invoked from an `unsafe` context. The vtable and object pointers
/// must be valid for the slot's signature; there is no checking between this
/// macro and raw memory.
#[macro_export]
macro_rules! vtable_call {
    ($vtable:expr, $slot:ident, $object:expr $(, $arg:expr)* $(,)?) => {{
        let __entry = &(*$vtable).$slot;
        (__entry.func)(__entry.adjusted($object) $(, $arg)*)
    }};
}
