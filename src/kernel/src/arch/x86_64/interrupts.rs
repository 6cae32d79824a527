//! Interrupt bring-up and the Rust side of the trap trampolines.

use core::arch::asm;

use kestrel_common::KernelError;
use kestrel_hal::TableLoader;
use log::info;

use super::pic::{Pic, PICS};
use super::trampoline::Trampolines;
use super::{pit, HaltLoop};
use crate::config::TIMER_HZ;
use crate::trap::{self, TablePointer, TrapFrame};

/// Loads an interrupt table with the `lidt` instruction.
pub struct Lidt;

impl TableLoader for Lidt {
    type Pointer = TablePointer;

    unsafe fn load(&mut self, pointer: &'static TablePointer) {
        unsafe {
            asm!(
                "lidt [{}]",
                in(reg) pointer as *const TablePointer,
                options(readonly, nostack, preserves_flags)
            );
        }
    }
}

/// Called by the shared trampoline tail with the frame it built on the stack.
///
/// Interrupts are masked for the whole call because every gate is an
/// interrupt gate. No lock is taken: an NMI can land while another trap is
/// in here.
pub extern "C" fn trap_entry(frame: &TrapFrame) {
    // SAFETY: the driver holds only port numbers, and the trap path only
    // sends EOI and reads the ISR.
    let mut pic = unsafe { Pic::new() };
    trap::dispatch(frame, &mut pic, &HaltLoop);
}

/// Brings up interrupt handling and enables interrupts.
///
/// Remaps and masks the PICs, installs the interrupt table, starts the timer,
/// then executes `sti`.
pub fn init() -> Result<(), KernelError> {
    x86_64::instructions::interrupts::disable();

    // SAFETY: interrupts are disabled and the table is not loaded yet.
    unsafe { PICS.lock().initialize() };
    info!("PIC remapped, timer line unmasked");

    // SAFETY: `Trampolines` only hands out the assembly stubs, which build a
    // `TrapFrame` and return with `iretq`.
    unsafe { trap::install::initialize(&Trampolines, &mut Lidt)? };

    // SAFETY: interrupts are still disabled.
    unsafe { pit::init(TIMER_HZ) };
    info!("PIT running at {} Hz", TIMER_HZ);

    x86_64::instructions::interrupts::enable();
    Ok(())
}
