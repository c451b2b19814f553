//! Configuration schema definitions.
//!
//! Settings for the controller plus a description of a page (screens, route
//! forms, viewport) that the headless adapter can be built from. All types
//! derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::routing::RouteTemplate;
use crate::screens::Viewport;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Boot behavior.
    pub boot: BootConfig,

    /// Screen sizing.
    pub layout: LayoutConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Page description for the headless adapter.
    pub page: PageConfig,
}

/// Boot configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BootConfig {
    /// Fragment forced at boot when the location has none.
    pub bootstrap_fragment: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            bootstrap_fragment: "index".to_string(),
        }
    }
}

/// Layout of the visible screen relative to the viewport.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Share of each viewport axis the screen occupies (0.8 = 80%).
    pub scale: f64,

    /// Minimum screen width in pixels.
    pub min_width: u32,

    /// Minimum screen height in pixels.
    pub min_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 0.8,
            min_width: 500,
            min_height: 500,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// A page: its screens, route forms and initial location.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PageConfig {
    /// Viewport size at load.
    pub viewport: Viewport,

    /// Fragment present at load, without `#`.
    pub fragment: Option<String>,

    /// Full location at load. Its fragment is used when `fragment` is unset.
    pub location: Option<Url>,

    /// Screens in document order.
    pub screens: Vec<ScreenConfig>,

    /// Route forms in document order.
    pub routes: Vec<RouteTemplate>,

    /// Callback names the host registers handlers for.
    pub callbacks: Vec<String>,
}

/// A declared screen.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScreenConfig {
    /// Element id; also the fragment segment that selects it.
    pub id: String,

    /// Whether this is the fallback screen.
    #[serde(default)]
    pub default: bool,
}
