//! System-wide error types for Kestrel.

use core::fmt;

/// Kernel bring-up error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KernelError {
    /// A vector that must be wired up has no trampoline entry
    MissingTrapEntry(u8),
    /// A global logger was already installed
    LoggerAlreadySet,
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::MissingTrapEntry(vector) => {
                write!(f, "no trap entry for vector {}", vector)
            }
            KernelError::LoggerAlreadySet => write!(f, "logger already installed"),
        }
    }
}
