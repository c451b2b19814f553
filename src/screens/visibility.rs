//! Screen visibility state machine.
//!
//! # States
//! - No screen visible (only before the first navigation)
//! - Exactly one screen visible
//!
//! # Transition (every navigation event)
//! ```text
//! clear all → segment = fragment up to first '/' (empty fragment → default id)
//!           → show screen with id == segment
//!           → nothing shown? show the default screen
//! ```
//!
//! # Design Decisions
//! - The first screen flagged default is the default; later flags are ignored
//! - Falling back to the default is not an error

use serde::Serialize;

use crate::routing::navigation::NavigationEvent;

/// A mutually exclusive panel of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub id: String,
    pub is_default: bool,
    pub visible: bool,
}

impl Screen {
    pub fn new(id: impl Into<String>, is_default: bool) -> Self {
        Self {
            id: id.into(),
            is_default,
            visible: false,
        }
    }
}

/// Result of one visibility transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityChange {
    pub previous: Option<String>,
    pub current: Option<String>,
    /// True when no screen matched the segment and the default was shown.
    pub fell_back: bool,
}

#[derive(Debug, Clone)]
pub struct ScreenVisibilityManager {
    screens: Vec<Screen>,
    default_index: Option<usize>,
}

impl ScreenVisibilityManager {
    /// Take ownership of the declared screens. All start hidden.
    pub fn new(screens: Vec<Screen>) -> Self {
        let mut screens = screens;
        for screen in &mut screens {
            screen.visible = false;
        }

        let mut defaults = screens.iter().enumerate().filter(|(_, s)| s.is_default);
        let default_index = defaults.next().map(|(i, _)| i);
        let extra: Vec<&str> = defaults.map(|(_, s)| s.id.as_str()).collect();

        match default_index {
            None => tracing::warn!("No default screen declared; unknown fragments show nothing"),
            Some(i) if !extra.is_empty() => tracing::warn!(
                default = %screens[i].id,
                ignored = ?extra,
                "Multiple default screens declared; using the first"
            ),
            Some(_) => {}
        }

        Self {
            screens,
            default_index,
        }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn default_screen(&self) -> Option<&Screen> {
        self.default_index.map(|i| &self.screens[i])
    }

    pub fn visible(&self) -> Option<&Screen> {
        self.screens.iter().find(|s| s.visible)
    }

    /// Select the screen for `event`.
    pub fn transition(&mut self, event: &NavigationEvent) -> VisibilityChange {
        let previous = self.visible().map(|s| s.id.clone());

        for screen in &mut self.screens {
            screen.visible = false;
        }

        let segment = if event.is_empty() {
            self.default_screen().map(|s| s.id.clone()).unwrap_or_default()
        } else {
            event.screen_segment().to_string()
        };

        let selected = self
            .screens
            .iter()
            .position(|s| !segment.is_empty() && s.id == segment);

        let (index, fell_back) = match selected {
            Some(i) => (Some(i), false),
            None => (self.default_index, true),
        };

        let current = index.map(|i| {
            self.screens[i].visible = true;
            self.screens[i].id.clone()
        });

        if current.is_none() {
            tracing::warn!(segment = %segment, "No screen matches fragment and no default screen exists");
        } else if fell_back {
            tracing::debug!(segment = %segment, screen = ?current, "Falling back to default screen");
        }

        VisibilityChange {
            previous,
            current,
            fell_back,
        }
    }
}
