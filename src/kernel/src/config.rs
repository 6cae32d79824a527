//! Compile-time kernel configuration.

use log::LevelFilter;

/// GDT selector of the 64-bit kernel code segment set up by the bootloader.
pub const KERNEL_CODE_SELECTOR: u16 = 0x08;

/// First vector of the primary 8259. IRQ0..=7 map to 32..=39.
pub const PIC_1_OFFSET: u8 = 32;

/// First vector of the secondary 8259. IRQ8..=15 map to 40..=47.
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

/// Timer interrupt rate.
pub const TIMER_HZ: u32 = 100;

/// Most verbose level the serial logger emits.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Trace;
/// Most verbose level the serial logger emits.
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
