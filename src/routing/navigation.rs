//! Navigation events.

use url::Url;

use crate::routing::pattern::FragmentPath;

/// One fragment change. `fragment` never carries the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub fragment: String,
}

impl NavigationEvent {
    pub fn new(fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        let fragment = match fragment.strip_prefix('#') {
            Some(stripped) => stripped.to_string(),
            None => fragment,
        };
        Self { fragment }
    }

    /// Build an event from a full location, e.g. `https://host/play#game/42`.
    /// A location without a fragment yields an empty fragment. Page
    /// descriptions with a `location` get their initial fragment this way.
    pub fn from_location(location: &Url) -> Self {
        Self::new(location.fragment().unwrap_or_default())
    }

    /// The leading path segment that selects a screen (`game/42` → `game`).
    pub fn screen_segment(&self) -> &str {
        self.fragment.split('/').next().unwrap_or_default()
    }

    /// The path route patterns are matched against.
    pub fn path(&self) -> FragmentPath {
        FragmentPath::from_fragment(&self.fragment)
    }

    pub fn is_empty(&self) -> bool {
        self.fragment.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_location() {
        let url = Url::parse("https://example.com/play#game/42").unwrap();
        let event = NavigationEvent::from_location(&url);
        assert_eq!(event.fragment, "game/42");
        assert_eq!(event.screen_segment(), "game");
        assert_eq!(event.path().as_str(), "/game/42");

        let bare = Url::parse("https://example.com/play").unwrap();
        assert!(NavigationEvent::from_location(&bare).is_empty());
    }

    #[test]
    fn test_hash_prefix_stripped() {
        let event = NavigationEvent::new("#lobby");
        assert_eq!(event.fragment, "lobby");
        assert_eq!(event.screen_segment(), "lobby");
    }

    #[test]
    fn test_empty_segment() {
        assert_eq!(NavigationEvent::new("").screen_segment(), "");
        assert_eq!(NavigationEvent::new("/x").screen_segment(), "");
    }
}
