//! The navigation controller.
//!
//! Owns everything that lives for the page lifetime: the DOM adapter, the
//! callback registry, the compiled routes, the screens and the layout engine.
//! It is built once by [`NavigationController::boot`] and then fed page
//! events one at a time.

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::controller::startup::{discover_routes, discover_screens, register_routes};
use crate::dom::{
    DomAdapter, ElementId, EventKind, PageEvent, Selector, SCREEN_CLASS, VISIBLE_CLASS,
};
use crate::error::BootError;
use crate::observability::metrics;
use crate::routing::{CallbackRegistry, DispatchReport, NavigationEvent, RouteDispatcher};
use crate::screens::{
    LayoutEngine, Screen, ScreenBounds, ScreenVisibilityManager, VisibilityChange,
};

/// Everything one fragment change did.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationOutcome {
    pub fragment: String,
    pub dispatch: DispatchReport,
    pub visibility: VisibilityChange,
    /// Bounds applied to the visible screen, if any screen is visible.
    pub bounds: Option<ScreenBounds>,
}

/// Result of handling one page event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Navigated(NavigationOutcome),
    Resized(Option<ScreenBounds>),
    Unloaded,
}

pub struct NavigationController<D: DomAdapter> {
    dom: D,
    registry: CallbackRegistry,
    dispatcher: RouteDispatcher,
    screens: ScreenVisibilityManager,
    layout: LayoutEngine,
}

impl<D: DomAdapter> NavigationController<D> {
    /// Discover screens and routes, bind page events and start the first navigation.
    ///
    /// The initial navigation uses the current fragment, or sets the fragment
    /// to `boot.bootstrap_fragment` when there is none. Either way its event
    /// is waiting on the returned receiver.
    pub fn boot(
        mut dom: D,
        registry: CallbackRegistry,
        config: &AppConfig,
    ) -> Result<(Self, mpsc::UnboundedReceiver<PageEvent>), BootError> {
        let screens = discover_screens(&dom);
        if screens.is_empty() {
            return Err(BootError::NoScreens);
        }

        let mut dispatcher = RouteDispatcher::new();
        let rejected = register_routes(&mut dispatcher, discover_routes(&dom));

        for template in dispatcher.templates() {
            let name = &template.callback_name;
            if name.is_empty() {
                tracing::warn!(action = %template.action_pattern, "Route declares no callback");
            } else if !registry.contains(name) {
                tracing::warn!(
                    action = %template.action_pattern,
                    callback = %name,
                    "Route callback is not registered"
                );
            }
        }

        let (tx, rx) = mpsc::unbounded_channel();
        dom.on_event(EventKind::Resize, tx.clone());
        dom.on_event(EventKind::Unload, tx.clone());
        dom.on_event(EventKind::FragmentChange, tx);

        tracing::info!(
            screens = screens.len(),
            routes = dispatcher.len(),
            rejected_routes = rejected,
            callbacks = registry.len(),
            "Navigation controller booted"
        );

        let mut controller = Self {
            dom,
            registry,
            dispatcher,
            screens: ScreenVisibilityManager::new(screens),
            layout: LayoutEngine::new(&config.layout),
        };

        let has_fragment = controller
            .dom
            .location_fragment()
            .is_some_and(|f| !f.is_empty());
        let bootstrap = config.boot.bootstrap_fragment.trim_start_matches('#');
        if has_fragment || bootstrap.is_empty() {
            controller.dom.trigger_event(EventKind::FragmentChange);
        } else {
            controller.dom.set_location_fragment(bootstrap);
        }

        Ok((controller, rx))
    }

    /// Handle one event to completion.
    pub fn handle(&mut self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::FragmentChanged(nav) => EventOutcome::Navigated(self.navigate(&nav)),
            PageEvent::Resized => EventOutcome::Resized(self.apply_layout("resize")),
            PageEvent::Unload => {
                tracing::info!("Page unloading");
                EventOutcome::Unloaded
            }
        }
    }

    /// Dispatch routes, switch screens, then lay out the visible screen.
    pub fn navigate(&mut self, event: &NavigationEvent) -> NavigationOutcome {
        let span = tracing::debug_span!("navigation", fragment = %event.fragment);
        let _enter = span.enter();

        metrics::record_navigation();

        let dispatch = self.dispatcher.dispatch(event, &mut self.registry);
        let visibility = self.screens.transition(event);
        self.sync_visibility();
        let bounds = self.apply_layout("navigation");

        tracing::info!(
            callbacks = dispatch.invoked.len(),
            errors = dispatch.errors.len(),
            screen = ?visibility.current,
            fell_back = visibility.fell_back,
            "Navigation handled"
        );

        NavigationOutcome {
            fragment: event.fragment.clone(),
            dispatch,
            visibility,
            bounds,
        }
    }

    /// Handle every event already queued, stopping after an unload.
    pub fn drain(&mut self, events: &mut mpsc::UnboundedReceiver<PageEvent>) -> Vec<EventOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(event) = events.try_recv() {
            let outcome = self.handle(event);
            let unloaded = outcome == EventOutcome::Unloaded;
            outcomes.push(outcome);
            if unloaded {
                break;
            }
        }
        outcomes
    }

    /// Handle events until the page unloads or every event source is gone.
    /// Returns the number of events handled.
    pub async fn run(&mut self, mut events: mpsc::UnboundedReceiver<PageEvent>) -> usize {
        let mut handled = 0;
        while let Some(event) = events.recv().await {
            handled += 1;
            if self.handle(event) == EventOutcome::Unloaded {
                break;
            }
        }
        tracing::info!(handled, "Navigation loop stopped");
        handled
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Mutable access to the page, e.g. to change the fragment or resize.
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn callbacks_mut(&mut self) -> &mut CallbackRegistry {
        &mut self.registry
    }

    pub fn routes(&self) -> &RouteDispatcher {
        &self.dispatcher
    }

    pub fn screens(&self) -> &ScreenVisibilityManager {
        &self.screens
    }

    pub fn visible_screen(&self) -> Option<&Screen> {
        self.screens.visible()
    }

    fn screen_element(&self, id: &str) -> Option<ElementId> {
        self.dom
            .select(&Selector::Id(id))
            .into_iter()
            .find(|e| self.dom.has_class(*e, SCREEN_CLASS))
    }

    fn sync_visibility(&mut self) {
        for element in self.dom.select(&Selector::Screens) {
            self.dom.set_class(element, VISIBLE_CLASS, false);
        }
        let visible = self.screens.visible().map(|s| s.id.clone());
        if let Some(element) = visible.and_then(|id| self.screen_element(&id)) {
            self.dom.set_class(element, VISIBLE_CLASS, true);
        }
    }

    fn apply_layout(&mut self, trigger: &'static str) -> Option<ScreenBounds> {
        let id = self.screens.visible()?.id.clone();
        let element = self.screen_element(&id)?;
        let viewport = self.dom.measure_viewport();
        let bounds = self.layout.compute_layout(viewport);
        self.dom.set_element_bounds(element, &bounds);

        tracing::debug!(
            screen = %id,
            trigger,
            width = bounds.width,
            height = bounds.height,
            offset_top = bounds.offset_top,
            offset_left = bounds.offset_left,
            "Layout applied"
        );
        metrics::record_layout(trigger);
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::screens::Viewport;

    fn page() -> MemoryDom {
        let mut dom = MemoryDom::new(Viewport::new(1920, 1080));
        dom.add_screen("index", true);
        dom.add_screen("game", false);
        dom
    }

    #[test]
    fn test_boot_without_fragment_uses_bootstrap() {
        let (mut controller, mut rx) =
            NavigationController::boot(page(), CallbackRegistry::new(), &AppConfig::default())
                .unwrap();
        assert!(controller.visible_screen().is_none());

        let outcomes = controller.drain(&mut rx);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(controller.dom().location_fragment().as_deref(), Some("index"));
        assert_eq!(controller.visible_screen().unwrap().id, "index");
        assert_eq!(controller.dom().visible_screens(), vec!["index"]);
    }

    #[test]
    fn test_boot_with_hash_only_bootstrap_still_navigates() {
        let mut config = AppConfig::default();
        config.boot.bootstrap_fragment = "#".to_string();
        let (mut controller, mut rx) =
            NavigationController::boot(page(), CallbackRegistry::new(), &config).unwrap();

        assert_eq!(controller.drain(&mut rx).len(), 1);
        assert_eq!(controller.visible_screen().unwrap().id, "index");
        assert_eq!(controller.dom().location_fragment(), None);
    }

    #[test]
    fn test_boot_strips_hash_from_bootstrap() {
        let mut config = AppConfig::default();
        config.boot.bootstrap_fragment = "#game".to_string();
        let (mut controller, mut rx) =
            NavigationController::boot(page(), CallbackRegistry::new(), &config).unwrap();

        controller.drain(&mut rx);
        assert_eq!(controller.dom().location_fragment().as_deref(), Some("game"));
        assert_eq!(controller.visible_screen().unwrap().id, "game");
    }

    #[test]
    fn test_boot_with_fragment_triggers_it() {
        let dom = page().with_fragment("game/3");
        let (mut controller, mut rx) =
            NavigationController::boot(dom, CallbackRegistry::new(), &AppConfig::default())
                .unwrap();
        controller.drain(&mut rx);
        assert_eq!(controller.visible_screen().unwrap().id, "game");
        assert_eq!(controller.dom().location_fragment().as_deref(), Some("game/3"));
    }

    #[test]
    fn test_boot_without_screens_fails() {
        let dom = MemoryDom::new(Viewport::default());
        let result = NavigationController::boot(dom, CallbackRegistry::new(), &AppConfig::default());
        assert!(matches!(result, Err(BootError::NoScreens)));
    }

    #[test]
    fn test_resize_relayouts_visible_screen() {
        let (mut controller, mut rx) =
            NavigationController::boot(page(), CallbackRegistry::new(), &AppConfig::default())
                .unwrap();
        controller.drain(&mut rx);

        controller.dom_mut().resize(Viewport::new(400, 400));
        let outcomes = controller.drain(&mut rx);
        let expected = crate::screens::compute_layout(400, 400);
        assert_eq!(outcomes, vec![EventOutcome::Resized(Some(expected))]);
        assert_eq!(controller.dom().bounds_of("index"), Some(expected));
    }

    #[test]
    fn test_drain_stops_at_unload() {
        let (mut controller, mut rx) =
            NavigationController::boot(page(), CallbackRegistry::new(), &AppConfig::default())
                .unwrap();
        controller.dom_mut().unload();
        controller.dom_mut().set_location_fragment("game");

        let outcomes = controller.drain(&mut rx);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[1], EventOutcome::Unloaded);
        assert_eq!(controller.visible_screen().unwrap().id, "index");
    }
}
