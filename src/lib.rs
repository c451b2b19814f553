//! Fragment-driven screen navigation for single-page applications.
//!
//! Maps the location fragment to one visible screen, fans the fragment out to
//! every declared route template whose pattern matches (invoking its named
//! callback with the resolved URL), and keeps the visible screen sized and
//! centered in the viewport.

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod observability;
pub mod routing;
pub mod screens;

pub use config::AppConfig;
pub use controller::NavigationController;
pub use dom::{DomAdapter, MemoryDom};
pub use routing::CallbackRegistry;
