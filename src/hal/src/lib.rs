//! Kestrel Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines the primitives the trap core consumes but does not
//! implement. The kernel's x86_64 layer provides the real implementations;
//! host tests provide recording mocks.

#![no_std]

/// Trait for the interrupt controller sitting in front of the CPU.
pub trait InterruptController {
    /// Signals end of interrupt for the line currently being serviced.
    fn acknowledge(&mut self);
    /// Reads the in-service status byte of the controller.
    fn in_service(&mut self) -> u8;
}

/// Trait for the privileged instruction that points the CPU at a descriptor table.
pub trait TableLoader {
    /// The hardware record describing the table.
    type Pointer;

    /// Loads `pointer` into the CPU.
    ///
    /// # Safety
    ///
    /// The table named by `pointer` must be fully populated and every present
    /// entry must refer to valid handler code. The CPU keeps using the table
    /// after this call returns.
    unsafe fn load(&mut self, pointer: &'static Self::Pointer);
}

/// Trait for the per-vector entry trampolines.
///
/// A trampoline captures the register state into a trap record, calls the
/// dispatcher, and resumes the interrupted context when the dispatcher returns.
pub trait TrapEntries {
    /// Returns the entry address of the trampoline for `vector`, if one exists.
    fn entry_address(&self, vector: u8) -> Option<u64>;
}

/// Trait for parking the processor permanently.
pub trait Halt {
    /// Stops all forward progress. Never returns.
    fn halt(&self) -> !;
}
