//! Support for the primary and secondary 8259 Programmable Interrupt Controllers (PICs).

use kestrel_hal::InterruptController;
use lazy_static::lazy_static;
use pic8259::ChainedPics;
use spin::Mutex;
use x86_64::instructions::port::Port;

use crate::config::{PIC_1_OFFSET, PIC_2_OFFSET};

/// Command port of the primary PIC.
const PIC_1_COMMAND: u16 = 0x20;
/// Data (mask) port of the primary PIC.
const PIC_1_DATA: u16 = 0x21;
/// Data (mask) port of the secondary PIC.
const PIC_2_DATA: u16 = 0xA1;

/// OCW3: next read of the command port returns the in-service register.
const OCW3_READ_ISR: u8 = 0x0B;

/// Primary mask: only IRQ0 (timer) is unmasked.
const PIC_1_MASK: u8 = !(1 << 0);
/// Secondary mask: every line masked.
const PIC_2_MASK: u8 = 0xFF;

lazy_static! {
    /// The chained PICs used for bring-up.
    pub static ref PICS: Mutex<Pic> = Mutex::new(unsafe { Pic::new() });
}

/// The chained 8259 pair, remapped to [`PIC_1_OFFSET`] and [`PIC_2_OFFSET`].
pub struct Pic {
    pics: ChainedPics,
    command: Port<u8>,
    primary_data: Port<u8>,
    secondary_data: Port<u8>,
}

impl Pic {
    /// Create the driver without touching the hardware.
    ///
    /// The driver keeps no state beyond port numbers and vector offsets, so a
    /// trap handler may build its own.
    ///
    /// # Safety
    ///
    /// Only [`PICS`] may call [`initialize`](Self::initialize). Other
    /// instances must stick to the [`InterruptController`] operations.
    pub unsafe fn new() -> Self {
        Self {
            pics: unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) },
            command: Port::new(PIC_1_COMMAND),
            primary_data: Port::new(PIC_1_DATA),
            secondary_data: Port::new(PIC_2_DATA),
        }
    }

    /// Remaps both controllers and masks every line except the timer.
    ///
    /// # Safety
    ///
    /// Must run with interrupts disabled, before the interrupt table is live.
    pub unsafe fn initialize(&mut self) {
        unsafe {
            self.pics.initialize();
            self.primary_data.write(PIC_1_MASK);
            self.secondary_data.write(PIC_2_MASK);
        }
    }
}

impl InterruptController for Pic {
    fn acknowledge(&mut self) {
        // Both handled lines sit on the primary, so only it gets the EOI.
        unsafe { self.pics.notify_end_of_interrupt(PIC_1_OFFSET) }
    }

    fn in_service(&mut self) -> u8 {
        unsafe {
            self.command.write(OCW3_READ_ISR);
            self.command.read()
        }
    }
}
