//! Screen subsystem.
//!
//! # Data Flow
//! ```text
//! NavigationEvent
//!     → visibility.rs (pick exactly one screen, default as fallback)
//!     → layout.rs (size and center the visible screen from the viewport)
//!
//! Resize
//!     → layout.rs only
//! ```
//!
//! # Design Decisions
//! - Screens are declared once at boot; only their `visible` flag changes
//! - Layout math is total (clamped with a minimum), it has no error cases

pub mod layout;
pub mod visibility;

pub use layout::{compute_layout, LayoutEngine, ScreenBounds, Viewport};
pub use visibility::{Screen, ScreenVisibilityManager, VisibilityChange};
