//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, screens, controller produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters via the metrics facade)
//! ```
//!
//! # Design Decisions
//! - Structured fields (route, callback, screen) rather than formatted text
//! - Configuration errors on the page are logged, never panicked on
//! - Metrics are cheap no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
