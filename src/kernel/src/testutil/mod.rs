//! In-QEMU test harness for Kestrel.
//!
//! Boot tests run as bare-metal binaries under QEMU and report over the
//! serial port. The result leaves QEMU through the `isa-debug-exit` device.
//!
//! # Usage
//!
//! ```rust,ignore
//! #![feature(custom_test_frameworks)]
//! #![test_runner(kestrel_kernel::testutil::test_runner)]
//! #![reexport_test_harness_main = "test_main"]
//! ```

use crate::arch::x86_64::halt_loop;
use crate::serial_println;

/// I/O port of QEMU's `isa-debug-exit` device.
const DEBUG_EXIT_PORT: u16 = 0xf4;

/// QEMU exit codes for signaling test results.
///
/// QEMU exits with `(code << 1) | 1`: 33 for success, 35 for failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// All tests passed.
    Success = 0x10,
    /// One or more tests failed.
    Failed = 0x11,
}

/// Exits QEMU with `exit_code`.
///
/// Requires `-device isa-debug-exit,iobase=0xf4,iosize=0x04`. Without the
/// device the write is ignored and the CPU is parked instead.
pub fn exit_qemu(exit_code: QemuExitCode) -> ! {
    use x86_64::instructions::port::Port;

    // SAFETY: the debug-exit port has no effect other than stopping QEMU.
    unsafe {
        let mut port = Port::new(DEBUG_EXIT_PORT);
        port.write(exit_code as u32);
    }
    halt_loop()
}

/// Trait for types that can be run as tests.
pub trait Testable {
    /// Run the test and report results.
    fn run(&self);
}

impl<T: Fn()> Testable for T {
    fn run(&self) {
        crate::serial_print!("{} ... ", core::any::type_name::<T>());
        self();
        serial_println!("[ok]");
    }
}

/// Runs every test case, then exits QEMU with success.
///
/// A failing case panics into [`test_panic_handler`] and never gets here.
pub fn test_runner(tests: &[&dyn Testable]) {
    serial_println!("running {} tests", tests.len());
    for test in tests {
        test.run();
    }
    exit_qemu(QemuExitCode::Success);
}

/// Panic handler for boot test binaries: reports the failure and exits QEMU.
pub fn test_panic_handler(info: &core::panic::PanicInfo) -> ! {
    serial_println!("[failed]");
    serial_println!("Error: {}", info);
    exit_qemu(QemuExitCode::Failed)
}
