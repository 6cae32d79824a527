//! The interrupt table and the pointer record that describes it to the CPU.

use core::mem::size_of;

use super::descriptor::Descriptor;

/// Number of vectors the CPU can deliver.
pub const VECTOR_COUNT: usize = 256;

/// Size-minus-one limit of a full table, 4095.
pub const TABLE_LIMIT: u16 = (VECTOR_COUNT * size_of::<Descriptor>() - 1) as u16;

/// Pointer record consumed by `lidt`: limit followed by base, no padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, packed)]
pub struct TablePointer {
    /// Size of the table in bytes minus one
    limit: u16,
    /// Linear address of the table
    base: u64,
}

const _: () = assert!(size_of::<TablePointer>() == 10);

impl TablePointer {
    /// Create a pointer record.
    pub const fn new(limit: u16, base: u64) -> Self {
        Self { limit, base }
    }

    /// Table size in bytes minus one.
    pub const fn limit(&self) -> u16 {
        self.limit
    }

    /// Base address of the table.
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// The record as the CPU reads it from memory.
    pub fn to_bytes(&self) -> [u8; 10] {
        let mut bytes = [0u8; 10];
        bytes[0..2].copy_from_slice(&self.limit().to_le_bytes());
        bytes[2..10].copy_from_slice(&self.base().to_le_bytes());
        bytes
    }
}

/// The Interrupt Descriptor Table. It holds 256 entries, from 0-255.
///
/// Unpopulated slots are all-zero, which the CPU treats as absent gates.
#[derive(Debug, Clone)]
#[repr(C, align(16))]
pub struct InterruptTable {
    entries: [Descriptor; VECTOR_COUNT],
}

const _: () = assert!(size_of::<InterruptTable>() == 4096);

impl InterruptTable {
    /// Creates a new table with every slot absent.
    pub const fn new() -> Self {
        Self {
            entries: [Descriptor::EMPTY; VECTOR_COUNT],
        }
    }

    /// Returns the descriptor for `vector`.
    pub fn get(&self, vector: u8) -> &Descriptor {
        &self.entries[usize::from(vector)]
    }

    /// Writes the descriptor for `vector`.
    pub fn set(&mut self, vector: u8, descriptor: Descriptor) {
        self.entries[usize::from(vector)] = descriptor;
    }

    /// Iterates over the non-empty slots.
    pub fn populated(&self) -> impl Iterator<Item = (u8, &Descriptor)> + '_ {
        (0..=u8::MAX)
            .zip(self.entries.iter())
            .filter(|(_, desc)| !desc.is_empty())
    }

    /// Builds the pointer record describing this table at its current address.
    ///
    /// The record is only meaningful to the CPU while the table stays put.
    pub fn pointer(&self) -> TablePointer {
        TablePointer::new(
            (size_of::<Self>() - 1) as u16,
            self as *const Self as u64,
        )
    }
}

impl Default for InterruptTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn test_new_table_is_empty() {
        let table = InterruptTable::new();
        assert!((0..=u8::MAX).all(|v| table.get(v).is_empty()));
        assert_eq!(table.populated().count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut table = InterruptTable::new();
        let desc = Descriptor::encode(0xFFFF_8000_0010_0000, 0x8E);
        table.set(255, desc);
        assert_eq!(*table.get(255), desc);
        assert!(table.get(254).is_empty());

        let populated: [(u8, Descriptor); 1] = [(255, desc)];
        assert!(table
            .populated()
            .map(|(vector, desc)| (vector, *desc))
            .eq(populated.into_iter()));
    }

    #[test]
    fn test_pointer() {
        let table = InterruptTable::new();
        let pointer = table.pointer();
        assert_eq!(pointer.limit(), 4095);
        assert_eq!(pointer.limit(), TABLE_LIMIT);
        assert_eq!(pointer.base(), &table as *const InterruptTable as u64);
        assert_eq!(pointer.base() % 16, 0);
    }

    #[test]
    fn test_pointer_layout() {
        assert_eq!(offset_of!(TablePointer, limit), 0);
        assert_eq!(offset_of!(TablePointer, base), 2);

        let bytes = TablePointer::new(0x0FFF, 0x1122_3344_5566_7788).to_bytes();
        assert_eq!(
            bytes,
            [0xFF, 0x0F, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]
        );
    }
}
