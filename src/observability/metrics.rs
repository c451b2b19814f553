//! Navigation metrics.
//!
//! # Metrics
//! - `navigation_events_total` (counter): fragment changes handled
//! - `route_callbacks_total` (counter): callbacks invoked, by callback name
//! - `dispatch_errors_total` (counter): dispatch problems, by kind
//! - `routes_rejected_total` (counter): route templates skipped at boot
//! - `layout_updates_total` (counter): bounds applied, by trigger
//!
//! # Design Decisions
//! - Uses the `metrics` facade only; the host installs a recorder if it wants one
//! - Without a recorder every call is a no-op

/// Record a handled navigation event.
pub fn record_navigation() {
    metrics::counter!("navigation_events_total").increment(1);
}

/// Record a route callback invocation.
pub fn record_callback(callback: &str) {
    metrics::counter!("route_callbacks_total", "callback" => callback.to_string()).increment(1);
}

/// Record a dispatch error.
pub fn record_dispatch_error(kind: &'static str) {
    metrics::counter!("dispatch_errors_total", "kind" => kind).increment(1);
}

/// Record a route template rejected at registration.
pub fn record_route_rejected() {
    metrics::counter!("routes_rejected_total").increment(1);
}

/// Record a layout pass. `trigger` is `navigation` or `resize`.
pub fn record_layout(trigger: &'static str) {
    metrics::counter!("layout_updates_total", "trigger" => trigger).increment(1);
}
