//! Kestrel Kernel Entry Point
//!
//! The bootloader drops us in long mode with a flat kernel code segment at
//! selector 0x08, which is the selector every gate refers to.

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use kestrel_kernel::arch::x86_64;
use kestrel_kernel::serial_println;
use log::{error, info};

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    if let Err(e) = kestrel_kernel::init() {
        // The logger may be the thing that failed.
        serial_println!("boot failed: {}", e);
        error!("boot failed: {}", e);
        x86_64::halt_loop();
    }

    info!("boot complete, idling");

    // Timer ticks wake the CPU, get acknowledged, and land back here.
    x86_64::halt_loop()
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("KERNEL PANIC: {}", info);
    x86_64::halt_loop()
}
