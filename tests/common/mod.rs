//! Shared fixtures for controller integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use screen_router::screens::Viewport;
use screen_router::{CallbackRegistry, MemoryDom};

/// Calls recorded as (callback name, resolved url).
pub type CallLog = Rc<RefCell<Vec<(String, String)>>>;

/// A registry with a recording handler for each name.
pub fn recording_registry(names: &[&str]) -> (CallbackRegistry, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut registry = CallbackRegistry::new();
    for name in names {
        let log = log.clone();
        let callback = name.to_string();
        registry.register(*name, move |url: &str| {
            log.borrow_mut().push((callback.clone(), url.to_string()));
        });
    }
    (registry, log)
}

/// A game page: index (default), lobby, game, settings and a few route forms.
pub fn game_page(viewport: Viewport) -> MemoryDom {
    let mut dom = MemoryDom::new(viewport);
    dom.add_screen("index", true);
    dom.add_screen("lobby", false);
    dom.add_screen("game", false);
    dom.add_screen("settings", false);
    dom.add_route_form("/game/{id}", Some("load_game"));
    dom.add_route_form("/game/{id}/move/{x}/{y}", Some("play_move"));
    dom.add_route_form("/{screen}/{id}", Some("track"));
    dom.add_route_form("/lobby", Some("load_lobby"));
    dom
}

/// Owned (callback, url) pair for comparisons.
#[allow(dead_code)]
pub fn call(callback: &str, url: &str) -> (String, String) {
    (callback.to_string(), url.to_string())
}
