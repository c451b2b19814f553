//! DOM adapter interface.
//!
//! # Responsibilities
//! - Abstract the host page: element lookup, attribute and class access
//! - Deliver page events (fragment change, resize, unload) over a channel
//! - Measure the viewport and position elements
//!
//! # Design Decisions
//! - Typed selectors instead of free-form CSS: the controller only ever asks
//!   for route forms, screens, or an element by id
//! - Event handlers are channel senders; the controller drains one receiver,
//!   so every event is handled to completion before the next
//! - Setting the location fragment fires a fragment-change event, as browsers do

pub mod memory;

use tokio::sync::mpsc;

use crate::routing::navigation::NavigationEvent;
use crate::screens::{ScreenBounds, Viewport};

pub use memory::MemoryDom;

/// Class marking an element as a screen.
pub const SCREEN_CLASS: &str = "screen";
/// Class marking the default screen.
pub const DEFAULT_CLASS: &str = "default";
/// Class marking the visible screen.
pub const VISIBLE_CLASS: &str = "visible";
/// Attribute of a route form holding its action pattern.
pub const ACTION_ATTRIBUTE: &str = "action";
/// Field of a route form holding its callback name.
pub const CALLBACK_FIELD: &str = "callback";

/// Opaque handle to an element owned by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Element queries the controller needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `form[method=GET]`: route declarations.
    RouteForms,
    /// `.screen`
    Screens,
    /// `#id`
    Id(&'a str),
}

/// Event sources the controller binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    FragmentChange,
    Resize,
    Unload,
}

/// An event delivered by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    FragmentChanged(NavigationEvent),
    Resized,
    Unload,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::FragmentChanged(_) => EventKind::FragmentChange,
            PageEvent::Resized => EventKind::Resize,
            PageEvent::Unload => EventKind::Unload,
        }
    }
}

/// Where a bound event source delivers its events.
pub type EventSink = mpsc::UnboundedSender<PageEvent>;

/// Capabilities the navigation controller needs from the host page.
pub trait DomAdapter {
    /// Elements matching `selector`, in document order.
    fn select(&self, selector: &Selector<'_>) -> Vec<ElementId>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Value of the first `input[name=field]` inside `form`.
    fn field_value(&self, form: ElementId, field: &str) -> Option<String>;

    fn has_class(&self, element: ElementId, class: &str) -> bool;

    fn set_class(&mut self, element: ElementId, class: &str, on: bool);

    /// Deliver events of `kind` to `sink` from now on.
    fn on_event(&mut self, kind: EventKind, sink: EventSink);

    /// Fire one synthetic event of `kind` to the bound sinks.
    fn trigger_event(&mut self, kind: EventKind);

    fn measure_viewport(&self) -> Viewport;

    fn set_element_bounds(&mut self, element: ElementId, bounds: &ScreenBounds);

    /// Current fragment without the leading `#`; `None` when there is none.
    fn location_fragment(&self) -> Option<String>;

    /// Change the location fragment, firing a fragment-change event if it differs.
    fn set_location_fragment(&mut self, fragment: &str);
}
