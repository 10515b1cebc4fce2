//! # Utility Modules
//!
//! Supporting utilities for diagnostics.
//!
//! ## Components
//! - **Hex**: short hex previews of rejected buffers for log events
//! - **Logging**: `tracing-subscriber` setup driven by `LoggingConfig`

pub mod hex;
pub mod logging;
