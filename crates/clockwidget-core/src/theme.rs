//! Theme name resolution.
//!
//! Pure "name -> resource identifier" mapping; the shell owns actually
//! loading and swapping the stylesheet. Unknown names normalize to Light
//! so a hand-edited settings file can never break startup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Resolve a theme name case-insensitively; unknown names are Light.
    pub fn resolve(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Resource identifier for the shell's stylesheet loader.
    pub fn stylesheet(self) -> &'static str {
        match self {
            Theme::Light => "themes/light.css",
            Theme::Dark => "themes/dark.css",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}
