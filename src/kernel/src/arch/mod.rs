//! Architecture-specific implementations.
//!
//! This module provides the platform side of the trap core: trampolines,
//! the interrupt controller, the timer and the table loader.
//! Currently supported: x86_64.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "x86_64")]
pub use x86_64::*;
