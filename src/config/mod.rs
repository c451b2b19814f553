//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → read once at boot by the controller and the headless page
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; screens and routes never change after boot
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::AppConfig;
pub use schema::BootConfig;
pub use schema::LayoutConfig;
pub use schema::ObservabilityConfig;
pub use schema::PageConfig;
pub use schema::ScreenConfig;
