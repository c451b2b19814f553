//! Fan-out route dispatch.
//!
//! # Responsibilities
//! - Hold the route templates discovered at boot, compiled once
//! - On every navigation, try every route in declaration order
//! - Invoke the named callback of every route that matches
//!
//! # Design Decisions
//! - Fan-out, not first-match: two matching routes fire two callbacks
//! - A non-matching route is skipped silently
//! - Errors are logged and collected per route; dispatch never aborts early

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, PatternResult};
use crate::observability::metrics;
use crate::routing::navigation::NavigationEvent;
use crate::routing::pattern::CompiledPattern;
use crate::routing::registry::CallbackRegistry;

/// A declarative rule pairing an action pattern with a callback name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTemplate {
    /// Pattern with `{name}` placeholders, e.g. `/game/{id}`.
    #[serde(rename = "action")]
    pub action_pattern: String,

    /// Name of the registered callback; may be empty in a misconfigured page.
    #[serde(rename = "callback", default)]
    pub callback_name: String,
}

impl RouteTemplate {
    pub fn new(action_pattern: impl Into<String>, callback_name: impl Into<String>) -> Self {
        Self {
            action_pattern: action_pattern.into(),
            callback_name: callback_name.into(),
        }
    }
}

#[derive(Debug)]
struct Route {
    template: RouteTemplate,
    pattern: CompiledPattern,
}

/// A callback fired during dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub callback: String,
    pub resolved_url: String,
}

/// What happened during one dispatch pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Callbacks fired, in route declaration order.
    pub invoked: Vec<Invocation>,
    /// Matched routes whose callback could not be fired.
    pub errors: Vec<DispatchError>,
}

impl DispatchReport {
    pub fn matched(&self) -> usize {
        self.invoked.len() + self.errors.len()
    }
}

/// Ordered set of compiled routes.
#[derive(Debug, Default)]
pub struct RouteDispatcher {
    routes: Vec<Route>,
}

impl RouteDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and append a route. A pattern that fails to compile is not registered.
    pub fn register(&mut self, template: RouteTemplate) -> PatternResult<()> {
        let pattern = CompiledPattern::compile(&template.action_pattern)?;
        tracing::debug!(
            action = %template.action_pattern,
            callback = %template.callback_name,
            placeholders = pattern.placeholder_count(),
            "Route registered"
        );
        self.routes.push(Route { template, pattern });
        Ok(())
    }

    /// Registered templates in declaration order.
    pub fn templates(&self) -> impl Iterator<Item = &RouteTemplate> {
        self.routes.iter().map(|r| &r.template)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Fire the callback of every route matching `event`.
    pub fn dispatch(
        &self,
        event: &NavigationEvent,
        registry: &mut CallbackRegistry,
    ) -> DispatchReport {
        let path = event.path();
        let mut report = DispatchReport::default();

        for (index, route) in self.routes.iter().enumerate() {
            let Some(captured) = route.pattern.match_path(&path) else {
                continue;
            };

            let result = route
                .pattern
                .resolve(captured.as_slice())
                .map_err(DispatchError::from)
                .and_then(|url| {
                    let name = &route.template.callback_name;
                    if name.is_empty() {
                        return Err(DispatchError::MissingCallbackName {
                            action: route.template.action_pattern.clone(),
                        });
                    }
                    registry.invoke(name, &url)?;
                    Ok(url)
                });

            match result {
                Ok(resolved_url) => {
                    tracing::debug!(
                        route = index,
                        action = %route.template.action_pattern,
                        callback = %route.template.callback_name,
                        url = %resolved_url,
                        "Route callback invoked"
                    );
                    metrics::record_callback(&route.template.callback_name);
                    report.invoked.push(Invocation {
                        callback: route.template.callback_name.clone(),
                        resolved_url,
                    });
                }
                Err(e) => {
                    tracing::error!(
                        route = index,
                        action = %route.template.action_pattern,
                        path = %path,
                        error = %e,
                        "Route matched but callback was not invoked"
                    );
                    metrics::record_dispatch_error(e.kind());
                    report.errors.push(e);
                }
            }
        }

        report
    }
}
