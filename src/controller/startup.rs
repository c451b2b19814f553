//! Boot-time discovery.
//!
//! # Responsibilities
//! - Read `.screen` elements into `Screen`s (id attribute, `default` class)
//! - Read `form[method=GET]` elements into route templates and register them
//!
//! # Design Decisions
//! - Runs once; the page is not re-scanned on navigation
//! - A bad route declaration is logged and skipped, boot continues

use crate::dom::{DomAdapter, Selector, ACTION_ATTRIBUTE, CALLBACK_FIELD, DEFAULT_CLASS};
use crate::observability::metrics;
use crate::routing::{RouteDispatcher, RouteTemplate};
use crate::screens::Screen;

/// Collect the declared screens in document order.
pub fn discover_screens<D: DomAdapter>(dom: &D) -> Vec<Screen> {
    dom.select(&Selector::Screens)
        .into_iter()
        .filter_map(|element| {
            let id = dom.attribute(element, "id").filter(|id| !id.is_empty());
            if id.is_none() {
                tracing::warn!(element = element.0, "Screen element has no id; ignored");
            }
            id.map(|id| Screen::new(id, dom.has_class(element, DEFAULT_CLASS)))
        })
        .collect()
}

/// Collect the declared route templates in document order.
pub fn discover_routes<D: DomAdapter>(dom: &D) -> Vec<RouteTemplate> {
    dom.select(&Selector::RouteForms)
        .into_iter()
        .map(|form| RouteTemplate {
            action_pattern: dom.attribute(form, ACTION_ATTRIBUTE).unwrap_or_default(),
            callback_name: dom.field_value(form, CALLBACK_FIELD).unwrap_or_default(),
        })
        .collect()
}

/// Register every template, skipping those whose pattern does not compile.
pub fn register_routes(dispatcher: &mut RouteDispatcher, templates: Vec<RouteTemplate>) -> usize {
    let mut rejected = 0;
    for template in templates {
        let action = template.action_pattern.clone();
        if let Err(e) = dispatcher.register(template) {
            tracing::error!(action = %action, error = %e, "Route declaration rejected");
            metrics::record_route_rejected();
            rejected += 1;
        }
    }
    rejected
}
