//! Boot-time population and loading of the interrupt table.

use kestrel_common::{vector, KernelError};
use kestrel_hal::{TableLoader, TrapEntries};
use log::{debug, info};
use spin::Once;

use super::descriptor::{Descriptor, GateAttributes};
use super::table::{InterruptTable, TablePointer};

/// The kernel's interrupt table. Written once, read-only afterwards.
static TABLE: Once<InterruptTable> = Once::new();

/// The record handed to the CPU. Kept alive alongside the table.
static POINTER: Once<TablePointer> = Once::new();

/// Fills the gate for every supported vector from `entries`.
///
/// Every gate gets [`GateAttributes::KERNEL_INTERRUPT`]. Slots outside
/// [`vector::SUPPORTED`] are left untouched.
pub fn populate<E>(table: &mut InterruptTable, entries: &E) -> Result<(), KernelError>
where
    E: TrapEntries + ?Sized,
{
    for &v in vector::SUPPORTED.iter() {
        let address = entries
            .entry_address(v)
            .ok_or(KernelError::MissingTrapEntry(v))?;
        table.set(
            v,
            Descriptor::encode(address, GateAttributes::KERNEL_INTERRUPT.bits()),
        );
        debug!("gate {:>3} ({}) -> {:#018x}", v, vector::name(v), address);
    }
    Ok(())
}

/// Builds the process-wide interrupt table and loads it with `loader`.
///
/// Runs once at boot, before interrupts are enabled. Later calls reload the
/// table built by the first successful call. Nothing is loaded if a supported
/// vector has no entry.
///
/// # Safety
///
/// Every address returned by `entries` must be the start of a trampoline that
/// builds a [`TrapFrame`](super::TrapFrame) and returns with `iretq`.
pub unsafe fn initialize<E, L>(entries: &E, loader: &mut L) -> Result<&'static TablePointer, KernelError>
where
    E: TrapEntries + ?Sized,
    L: TableLoader<Pointer = TablePointer> + ?Sized,
{
    let table = TABLE.try_call_once(|| {
        let mut table = InterruptTable::new();
        populate(&mut table, entries)?;
        Ok::<_, KernelError>(table)
    })?;
    let pointer = POINTER.call_once(|| table.pointer());

    // SAFETY: the table is fully populated, lives in static storage and is
    // never written again. The caller guarantees the entry addresses.
    unsafe { loader.load(pointer) };

    info!(
        "interrupt table at {:#x} (limit {}), {} gates",
        pointer.base(),
        pointer.limit(),
        table.populated().count()
    );
    Ok(pointer)
}

/// The installed table, if [`initialize`] has succeeded.
pub fn table() -> Option<&'static InterruptTable> {
    TABLE.get()
}

/// The installed pointer record, if [`initialize`] has succeeded.
pub fn pointer() -> Option<&'static TablePointer> {
    POINTER.get()
}
