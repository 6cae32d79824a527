//! 8254 Programmable Interval Timer, channel 0.
//!
//! Channel 0 drives IRQ0, which arrives as the timer tick on vector 32.

use x86_64::instructions::port::{Port, PortWriteOnly};

/// Input clock of the PIT in Hz.
pub const BASE_FREQUENCY: u32 = 1_193_182;

/// Channel 0 data port.
const CHANNEL_0: u16 = 0x40;
/// Mode/command register.
const COMMAND: u16 = 0x43;

/// Channel 0, lobyte/hibyte access, mode 3 (square wave), binary.
const CHANNEL_0_SQUARE_WAVE: u8 = 0b0011_0110;

/// Reload value giving a tick rate as close to `hz` as the 16-bit counter allows.
///
/// A reload of 0 is how the hardware spells 65536, the slowest rate.
pub fn divisor(hz: u32) -> u16 {
    let hz = hz.max(1);
    match BASE_FREQUENCY / hz {
        0 | 1 => 1,
        d if d > 0xFFFF => 0,
        d => d as u16,
    }
}

/// Programs channel 0 to fire at `hz`.
///
/// # Safety
///
/// Performs raw port I/O. Call once at boot before interrupts are enabled.
pub unsafe fn init(hz: u32) {
    let [low, high] = divisor(hz).to_le_bytes();
    let mut command: PortWriteOnly<u8> = PortWriteOnly::new(COMMAND);
    let mut data: Port<u8> = Port::new(CHANNEL_0);
    unsafe {
        command.write(CHANNEL_0_SQUARE_WAVE);
        data.write(low);
        data.write(high);
    }
}
