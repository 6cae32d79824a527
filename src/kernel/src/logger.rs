//! `log` backend writing to the serial port.

use kestrel_common::KernelError;
use log::{Log, Metadata, Record};

use crate::config::LOG_LEVEL;

/// `Log` implementation for COM1.
pub struct SerialLogger;

/// The static logger.
pub static LOGGER: SerialLogger = SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        #[cfg(target_arch = "x86_64")]
        crate::serial_println!(
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Installs [`LOGGER`] as the global logger.
pub fn init() -> Result<(), KernelError> {
    log::set_logger(&LOGGER).map_err(|_| KernelError::LoggerAlreadySet)?;
    log::set_max_level(LOG_LEVEL);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filter() {
        let error = Metadata::builder().level(Level::Error).build();
        assert!(LOGGER.enabled(&error));

        let trace = Metadata::builder().level(Level::Trace).build();
        assert_eq!(LOGGER.enabled(&trace), LOG_LEVEL >= Level::Trace);
    }
}
