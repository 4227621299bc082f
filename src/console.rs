// Formatted output on top of the firmware's debug text mode.
//
// The firmware primitive prints one NUL-terminated string at the cursor, so
// output is buffered per line and handed over on newline. A line the
// firmware reports as not fitting is dropped; the overflow granularity is
// firmware-defined and not modeled here.

use core::ffi::CStr;
use core::fmt::{self, Write};
use heapless::Vec;
use lazy_static::lazy_static;
use spin::Mutex;

use crate::debug;

/// Longest line handed to the firmware in one call, excluding the NUL.
const LINE_CAPACITY: usize = 64;

pub struct DebugConsole {
    line: Vec<u8, { LINE_CAPACITY + 1 }>,
    invert: bool,
}

impl DebugConsole {
    pub const fn new() -> Self {
        DebugConsole {
            line: Vec::new(),
            invert: false,
        }
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.invert = invert;
    }

    /// Buffers bytes until a newline, then flushes the completed line.
    /// Lines longer than the buffer are flushed in chunks.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            match byte {
                b'\n' => self.flush_line(),
                b'\r' => {}
                _ => {
                    if self.line.len() == LINE_CAPACITY {
                        self.flush_line();
                    }
                    let _ = self.line.push(byte);
                }
            }
        }
    }

    /// Prints the buffered line at the current cursor and moves the cursor
    /// to the start of the next row.
    fn flush_line(&mut self) {
        let (_, y) = debug::cursor_position();
        let _ = self.line.push(0);
        // The NUL always fits: the buffer keeps one spare byte for it.
        if let Ok(text) = CStr::from_bytes_until_nul(&self.line) {
            let _ = debug::print(text, self.invert);
        }
        self.line.clear();
        debug::set_cursor_position(0, y + 1);
    }
}

impl Write for DebugConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

// Global console instance
lazy_static! {
    pub static ref CONSOLE: Mutex<DebugConsole> = Mutex::new(DebugConsole::new());
}

#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut console = $crate::console::CONSOLE.lock();
        let _ = console.write_fmt(format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! debug_println {
    () => {
        $crate::debug_print!("\n")
    };
    ($($arg:tt)*) => {{
        $crate::debug_print!($($arg)*);
        $crate::debug_print!("\n");
    }};
}
