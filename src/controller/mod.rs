//! Navigation controller subsystem.
//!
//! # Data Flow
//! ```text
//! Boot (startup.rs, once):
//!     DOM → discover screens + route forms → register routes
//!         → bind fragment-change / resize / unload → initial navigation
//!
//! Event loop (navigation.rs):
//!     FragmentChanged → dispatch routes → visibility transition → layout
//!     Resized         → layout
//!     Unload          → stop
//! ```
//!
//! # Design Decisions
//! - One explicit controller value instead of page-global state
//! - Single-threaded, run-to-completion: one event is fully handled before
//!   the next is taken from the channel
//! - Slow callbacks stall the loop; callbacks are expected to be quick

pub mod navigation;
pub mod startup;

pub use navigation::{EventOutcome, NavigationController, NavigationOutcome};
