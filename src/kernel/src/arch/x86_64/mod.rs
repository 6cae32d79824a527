//! x86_64 architecture support.
//!
//! Provides the 8259 PIC and 8254 PIT drivers, the per-vector trap
//! trampolines, the `lidt` loader and serial output.

pub mod interrupts;
pub mod pic;
pub mod pit;
pub mod serial;
pub mod trampoline;

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors: fatal traps and panics.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}

/// [`kestrel_hal::Halt`] backed by [`halt_loop`].
///
/// Inside a trap the interrupt gate has cleared IF, so `hlt` only wakes for
/// an NMI and the loop parks it again.
pub struct HaltLoop;

impl kestrel_hal::Halt for HaltLoop {
    fn halt(&self) -> ! {
        halt_loop()
    }
}
