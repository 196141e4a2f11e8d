//! Logger setup for binaries and tests.
//!
//! Library code only uses the `log` macros; installing a backend is left to
//! the executable, which calls [`init_logging`] once at startup.

mod init;

pub use init::{LoggingConfig, init_logging};
