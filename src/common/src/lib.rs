//! Types shared between the Kestrel kernel and its boot binary.

#![no_std]

pub mod error;
pub mod vector;

pub use error::KernelError;
