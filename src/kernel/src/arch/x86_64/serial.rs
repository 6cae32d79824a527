//! Serial console on COM1.
//!
//! Backs the kernel logger and the QEMU test harness. QEMU forwards it to
//! stdio with `-serial stdio`.

use core::fmt::{self, Write};
use spin::Mutex;
use uart_16550::SerialPort;

/// COM1 I/O port address.
const COM1_PORT: u16 = 0x3F8;

/// Global serial port instance, lazily initialized.
///
/// Only boot code, the logger and tests take this lock. The trap dispatcher
/// never prints, so an interrupt cannot deadlock on it.
pub static SERIAL: spin::Once<Mutex<SerialPort>> = spin::Once::new();

/// Initializes COM1. Later calls are no-ops.
pub fn init() {
    port();
}

fn port() -> &'static Mutex<SerialPort> {
    SERIAL.call_once(|| {
        // SAFETY: COM1_PORT is the standard PC serial port and the kernel
        // runs with I/O privilege. uart_16550 performs the init sequence.
        let mut serial = unsafe { SerialPort::new(COM1_PORT) };
        serial.init();
        Mutex::new(serial)
    })
}

/// Prints to the serial port without a newline.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::arch::x86_64::serial::_print(format_args!($($arg)*))
    };
}

/// Prints to the serial port with a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($($arg:tt)*) => ($crate::serial_print!("{}\n", format_args!($($arg)*)))
}

/// Internal print function used by macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    // The UART never reports a write error.
    let _ = port().lock().write_fmt(args);
}
