//! The trap core: descriptor encoding, the interrupt table, the trap record
//! and the dispatcher.
//!
//! # Boot
//!
//! [`install::initialize`] runs once before interrupts are enabled. It
//! encodes one gate per supported vector, stores the table in static
//! storage and loads its [`TablePointer`].
//!
//! # Trap
//!
//! A per-vector trampoline saves the registers as a [`TrapFrame`] and calls
//! [`dispatch`]. The CPU enters through an interrupt gate, so interrupts stay
//! masked until the trampoline returns and the dispatcher never nests.

pub mod descriptor;
pub mod dispatch;
pub mod frame;
pub mod install;
pub mod table;

pub use descriptor::{Descriptor, GateAttributes};
pub use dispatch::dispatch;
pub use frame::TrapFrame;
pub use table::{InterruptTable, TablePointer, TABLE_LIMIT, VECTOR_COUNT};
