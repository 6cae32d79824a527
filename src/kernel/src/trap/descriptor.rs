//! 64-bit gate descriptors.

use core::mem::size_of;

use bitflags::bitflags;

use crate::config::KERNEL_CODE_SELECTOR;

bitflags! {
    /// Type and attribute byte of a gate descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct GateAttributes: u8 {
        /// 64-bit interrupt gate, clears IF on entry
        const INTERRUPT_GATE = 0x0E;
        /// Gate is present
        const PRESENT = 1 << 7;
    }
}

impl GateAttributes {
    /// Present, ring 0, 64-bit interrupt gate (`0x8E`).
    pub const KERNEL_INTERRUPT: Self = Self::PRESENT.union(Self::INTERRUPT_GATE);
}

/// Interrupt descriptor, one entry of the interrupt table.
///
/// The handler address is split over three fields because of the hardware
/// layout. Field order and widths give exactly 16 bytes with no padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Descriptor {
    /// Handler address bits 0-15
    low: u16,
    /// Code segment selector
    selector: u16,
    /// Reserved, zero
    reserved0: u8,
    /// Gate type, DPL, and P fields
    attributes: u8,
    /// Handler address bits 16-31
    mid: u16,
    /// Handler address bits 32-63
    high: u32,
    /// Reserved, zero
    reserved1: u32,
}

const _: () = assert!(size_of::<Descriptor>() == 16);

impl Descriptor {
    /// An absent gate.
    pub const EMPTY: Self = Self {
        low: 0,
        selector: 0,
        reserved0: 0,
        attributes: 0,
        mid: 0,
        high: 0,
        reserved1: 0,
    };

    /// Encode a gate for the handler at `address` with the given type/attribute byte.
    ///
    /// The selector is always the kernel code segment.
    pub const fn encode(address: u64, attributes: u8) -> Self {
        Self {
            low: address as u16,
            selector: KERNEL_CODE_SELECTOR,
            reserved0: 0,
            attributes,
            mid: (address >> 16) as u16,
            high: (address >> 32) as u32,
            reserved1: 0,
        }
    }

    /// Handler address reassembled from its three parts.
    pub const fn address(&self) -> u64 {
        (self.low as u64) | ((self.mid as u64) << 16) | ((self.high as u64) << 32)
    }

    /// Code segment selector.
    pub const fn selector(&self) -> u16 {
        self.selector
    }

    /// Raw type/attribute byte.
    pub const fn attributes(&self) -> u8 {
        self.attributes
    }

    /// Returns `true` if the present bit is set.
    pub const fn is_present(&self) -> bool {
        self.attributes & GateAttributes::PRESENT.bits() != 0
    }

    /// Returns `true` if every byte of the slot is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// The descriptor as the CPU reads it from memory.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..2].copy_from_slice(&self.low.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.selector.to_le_bytes());
        bytes[4] = self.reserved0;
        bytes[5] = self.attributes;
        bytes[6..8].copy_from_slice(&self.mid.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.high.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.reserved1.to_le_bytes());
        bytes
    }
}
