//! screen-router
//!
//! Boots the navigation controller against a headless page built from a TOML
//! description, replays scripted fragment changes and resizes, and prints the
//! resulting state as JSON.
//!
//! ```text
//! screen-router page.toml nav:game/42 resize:400x400 nav:settings
//! ```

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use clap::Parser;
use serde::Serialize;

use screen_router::config::load_config;
use screen_router::error::BootError;
use screen_router::observability::logging::init_logging;
use screen_router::routing::Invocation;
use screen_router::screens::{ScreenBounds, Viewport};
use screen_router::{AppConfig, CallbackRegistry, DomAdapter, MemoryDom, NavigationController};

#[derive(Parser)]
#[command(name = "screen-router")]
#[command(about = "Replay fragment navigation against a page description", long_about = None)]
struct Cli {
    /// Page description and settings (TOML).
    config: PathBuf,

    /// Events replayed after boot: `nav:<fragment>` or `resize:<W>x<H>`.
    events: Vec<ScriptedEvent>,
}

#[derive(Debug, Clone, PartialEq)]
enum ScriptedEvent {
    Navigate(String),
    Resize(Viewport),
}

impl FromStr for ScriptedEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(fragment) = s.strip_prefix("nav:") {
            return Ok(ScriptedEvent::Navigate(fragment.to_string()));
        }
        if let Some(size) = s.strip_prefix("resize:") {
            let (w, h) = size
                .split_once('x')
                .ok_or_else(|| format!("expected resize:<W>x<H>, got {:?}", s))?;
            let width = w.parse().map_err(|e| format!("bad width {:?}: {}", w, e))?;
            let height = h.parse().map_err(|e| format!("bad height {:?}: {}", h, e))?;
            return Ok(ScriptedEvent::Resize(Viewport::new(width, height)));
        }
        Err(format!("unknown event {:?}; use nav:<fragment> or resize:<W>x<H>", s))
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    fragment: Option<String>,
    visible_screen: Option<String>,
    bounds: Option<ScreenBounds>,
    invoked: Vec<Invocation>,
    events_handled: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    init_logging(&config.observability);

    tracing::info!(
        config = %cli.config.display(),
        screens = config.page.screens.len(),
        routes = config.page.routes.len(),
        "screen-router v0.1.0 starting"
    );

    let summary = replay(&config, cli.events).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

/// Boot a headless page from `config`, replay `events`, then unload it.
async fn replay(config: &AppConfig, events: Vec<ScriptedEvent>) -> Result<Summary, BootError> {
    let invoked = Rc::new(RefCell::new(Vec::new()));
    let mut registry = CallbackRegistry::new();
    for name in &config.page.callbacks {
        let log = invoked.clone();
        let callback = name.clone();
        registry.register(name.clone(), move |url: &str| {
            tracing::info!(callback = %callback, url = %url, "Callback invoked");
            log.borrow_mut().push(Invocation {
                callback: callback.clone(),
                resolved_url: url.to_string(),
            });
        });
    }

    let dom = MemoryDom::from_page(&config.page);
    let (mut controller, receiver) = NavigationController::boot(dom, registry, config)?;

    for event in events {
        match event {
            ScriptedEvent::Navigate(fragment) => {
                controller.dom_mut().set_location_fragment(&fragment)
            }
            ScriptedEvent::Resize(viewport) => controller.dom_mut().resize(viewport),
        }
    }
    controller.dom_mut().unload();

    let events_handled = controller.run(receiver).await;

    let visible_screen = controller.visible_screen().map(|s| s.id.clone());
    let bounds = visible_screen
        .as_deref()
        .and_then(|id| controller.dom().bounds_of(id));
    let invoked = invoked.borrow().clone();
    Ok(Summary {
        fragment: controller.dom().location_fragment(),
        visible_screen,
        bounds,
        invoked,
        events_handled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scripted_events() {
        assert_eq!(
            "nav:game/42".parse::<ScriptedEvent>().unwrap(),
            ScriptedEvent::Navigate("game/42".into())
        );
        assert_eq!(
            "resize:400x300".parse::<ScriptedEvent>().unwrap(),
            ScriptedEvent::Resize(Viewport::new(400, 300))
        );
        assert!("resize:400".parse::<ScriptedEvent>().is_err());
        assert!("resize:ax3".parse::<ScriptedEvent>().is_err());
        assert!("jump:3".parse::<ScriptedEvent>().is_err());
    }

    #[tokio::test]
    async fn test_replay_demo_page() {
        let config =
            screen_router::config::parse_config(include_str!("../demos/page.toml")).unwrap();
        let events: Vec<ScriptedEvent> = ["nav:game/42", "resize:400x400", "nav:settings"]
            .iter()
            .map(|e| e.parse().unwrap())
            .collect();

        let summary = replay(&config, events).await.unwrap();

        // Boot, three scripted events, unload.
        assert_eq!(summary.events_handled, 5);
        assert_eq!(summary.fragment.as_deref(), Some("settings"));
        assert_eq!(summary.visible_screen.as_deref(), Some("settings"));
        assert_eq!(summary.bounds.map(|b| (b.width, b.height)), Some((500, 500)));
        assert_eq!(
            summary.invoked,
            vec![Invocation {
                callback: "load_game".to_string(),
                resolved_url: "/game/42".to_string(),
            }]
        );
    }
}
