//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at boot):
//!     form[method=GET] (action, callback field)
//!     → RouteTemplate
//!     → pattern.rs (compile placeholders into an anchored matcher)
//!     → dispatcher.rs (append in declaration order)
//!
//! Fragment change:
//!     NavigationEvent ("game/42")
//!     → FragmentPath ("/game/42")
//!     → every route: match → resolve → registry.rs (invoke by name)
//!     → DispatchReport
//! ```
//!
//! # Design Decisions
//! - Routes compiled at boot, immutable afterwards
//! - Callbacks are looked up by name in an explicit registry, never evaluated
//! - All matching routes fire (fan-out), in declaration order

pub mod dispatcher;
pub mod navigation;
pub mod pattern;
pub mod registry;

pub use dispatcher::{DispatchReport, Invocation, RouteDispatcher, RouteTemplate};
pub use navigation::NavigationEvent;
pub use pattern::{compile, CapturedValues, CompiledPattern, FragmentPath};
pub use registry::{CallbackRegistry, RouteCallback};
