// Reports panics through the debug text mode, then parks on the keypad so
// the message stays readable.

use core::panic::PanicInfo;

use crate::{debug, debug_println};

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    debug::set_cursor_position(0, 0);
    debug_println!("PANIC: {}", info.message());
    if let Some(location) = info.location() {
        debug_println!("  at {}:{}:{}", location.file(), location.line(), location.column());
    }
    loop {
        let _ = debug::get_key();
    }
}
