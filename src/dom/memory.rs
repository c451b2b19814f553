//! Headless in-memory page.
//!
//! Holds screens and route forms as plain elements, records the classes and
//! bounds the controller applies, and fires events to bound sinks the way a
//! browser window would. Used by the `screen-router` binary and in tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::config::PageConfig;
use crate::dom::{
    DomAdapter, ElementId, EventKind, EventSink, PageEvent, Selector, ACTION_ATTRIBUTE,
    CALLBACK_FIELD, DEFAULT_CLASS, SCREEN_CLASS, VISIBLE_CLASS,
};
use crate::routing::navigation::NavigationEvent;
use crate::screens::{ScreenBounds, Viewport};

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    /// `input` children as (name, value), in document order.
    fields: Vec<(String, String)>,
    bounds: Option<ScreenBounds>,
}

#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: Vec<Element>,
    viewport: Viewport,
    fragment: Option<String>,
    sinks: HashMap<EventKind, Vec<EventSink>>,
}

impl MemoryDom {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Build a page from its description.
    pub fn from_page(page: &PageConfig) -> Self {
        let mut dom = Self::new(page.viewport);
        for screen in &page.screens {
            dom.add_screen(&screen.id, screen.default);
        }
        for route in &page.routes {
            let callback = Some(route.callback_name.as_str()).filter(|c| !c.is_empty());
            dom.add_route_form(&route.action_pattern, callback);
        }
        let fragment = page.fragment.clone().or_else(|| {
            page.location
                .as_ref()
                .map(|url| NavigationEvent::from_location(url).fragment)
        });
        dom.fragment = fragment.filter(|f| !f.is_empty());
        dom
    }

    /// Set the initial fragment without firing an event.
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        self.fragment = Some(fragment).filter(|f| !f.is_empty());
        self
    }

    /// Append a `<div class="screen" id=…>`.
    pub fn add_screen(&mut self, id: &str, is_default: bool) -> ElementId {
        let mut classes = BTreeSet::from([SCREEN_CLASS.to_string()]);
        if is_default {
            classes.insert(DEFAULT_CLASS.to_string());
        }
        self.push(Element {
            tag: "div".to_string(),
            id: Some(id.to_string()),
            classes,
            ..Element::default()
        })
    }

    /// Append a `<form method="GET" action=…>` with an optional callback field.
    pub fn add_route_form(&mut self, action: &str, callback: Option<&str>) -> ElementId {
        self.add_form("GET", action, callback)
    }

    pub fn add_form(&mut self, method: &str, action: &str, callback: Option<&str>) -> ElementId {
        let attributes = BTreeMap::from([
            ("method".to_string(), method.to_string()),
            (ACTION_ATTRIBUTE.to_string(), action.to_string()),
        ]);
        let fields = callback
            .map(|c| vec![(CALLBACK_FIELD.to_string(), c.to_string())])
            .unwrap_or_default();
        self.push(Element {
            tag: "form".to_string(),
            attributes,
            fields,
            ..Element::default()
        })
    }

    /// Change the viewport and fire a resize event.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.emit(PageEvent::Resized);
    }

    /// Fire the unload event; the controller loop ends after handling it.
    pub fn unload(&mut self) {
        self.emit(PageEvent::Unload);
    }

    /// Bounds last applied to `element`.
    pub fn bounds(&self, element: ElementId) -> Option<ScreenBounds> {
        self.elements.get(element.0).and_then(|e| e.bounds)
    }

    /// Bounds last applied to the element with `id`.
    pub fn bounds_of(&self, id: &str) -> Option<ScreenBounds> {
        self.find_by_id(id).and_then(|e| self.bounds(e))
    }

    /// Ids of screens currently carrying the `visible` class.
    pub fn visible_screens(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.classes.contains(SCREEN_CLASS) && e.classes.contains(VISIBLE_CLASS))
            .filter_map(|e| e.id.clone())
            .collect()
    }

    fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    fn find_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(ElementId)
    }

    fn emit(&mut self, event: PageEvent) {
        if let Some(sinks) = self.sinks.get_mut(&event.kind()) {
            // Drop sinks whose receiver is gone.
            sinks.retain(|sink| sink.send(event.clone()).is_ok());
        }
    }

    fn current_navigation(&self) -> NavigationEvent {
        NavigationEvent::new(self.fragment.clone().unwrap_or_default())
    }
}

impl DomAdapter for MemoryDom {
    fn select(&self, selector: &Selector<'_>) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| match selector {
                Selector::RouteForms => {
                    e.tag == "form"
                        && e.attributes
                            .get("method")
                            .is_some_and(|m| m.eq_ignore_ascii_case("GET"))
                }
                Selector::Screens => e.classes.contains(SCREEN_CLASS),
                Selector::Id(id) => e.id.as_deref() == Some(*id),
            })
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        let e = self.elements.get(element.0)?;
        if name == "id" {
            return e.id.clone();
        }
        e.attributes.get(name).cloned()
    }

    fn field_value(&self, form: ElementId, field: &str) -> Option<String> {
        self.elements
            .get(form.0)?
            .fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.clone())
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements
            .get(element.0)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn set_class(&mut self, element: ElementId, class: &str, on: bool) {
        if let Some(e) = self.elements.get_mut(element.0) {
            if on {
                e.classes.insert(class.to_string());
            } else {
                e.classes.remove(class);
            }
        }
    }

    fn on_event(&mut self, kind: EventKind, sink: EventSink) {
        self.sinks.entry(kind).or_default().push(sink);
    }

    fn trigger_event(&mut self, kind: EventKind) {
        let event = match kind {
            EventKind::FragmentChange => PageEvent::FragmentChanged(self.current_navigation()),
            EventKind::Resize => PageEvent::Resized,
            EventKind::Unload => PageEvent::Unload,
        };
        self.emit(event);
    }

    fn measure_viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_element_bounds(&mut self, element: ElementId, bounds: &ScreenBounds) {
        if let Some(e) = self.elements.get_mut(element.0) {
            e.bounds = Some(*bounds);
        }
    }

    fn location_fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn set_location_fragment(&mut self, fragment: &str) {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let next = Some(fragment.to_string()).filter(|f| !f.is_empty());
        if next == self.fragment {
            return;
        }
        self.fragment = next;
        self.emit(PageEvent::FragmentChanged(self.current_navigation()));
    }
}
