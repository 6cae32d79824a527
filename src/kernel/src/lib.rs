//! Kestrel Kernel
//!
//! A minimal x86_64 kernel core: the interrupt table, the trap dispatcher and
//! the platform pieces that connect them to the hardware.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `trap`: Descriptor encoding, the interrupt table and the dispatcher
//! - `arch`: Platform-specific code (trampolines, PIC, PIT, serial)
//! - `logger`: `log` backend on the serial port
//! - `config`: Compile-time constants
//! - `testutil`: QEMU test harness helpers
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod arch;
pub mod config;
pub mod logger;
#[cfg(target_arch = "x86_64")]
pub mod testutil;
pub mod trap;

use kestrel_common::KernelError;

/// Initializes core kernel subsystems.
///
/// Called once early in the boot process: serial, logging, then interrupts.
/// Interrupts are enabled when this returns `Ok`.
pub fn init() -> Result<(), KernelError> {
    #[cfg(target_arch = "x86_64")]
    arch::x86_64::serial::init();
    logger::init()?;
    log::info!("Kestrel v{}", env!("CARGO_PKG_VERSION"));

    #[cfg(target_arch = "x86_64")]
    arch::x86_64::interrupts::init()?;
    Ok(())
}
