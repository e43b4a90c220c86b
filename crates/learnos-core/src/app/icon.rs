//! Icon resolution by symbolic name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Renderable icons known to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Calculator,
    Grid,
    Orbit,
    /// Generic application icon, used for any unrecognized name.
    Application,
}

/// Symbolic names the backend may send, mapped to their icon.
const ICON_TABLE: [(&str, Icon); 3] = [
    ("Calculator", Icon::Calculator),
    ("Grid", Icon::Grid),
    ("Orbit", Icon::Orbit),
];

impl Icon {
    /// Resolves a symbolic icon name.
    ///
    /// Lookup is case-sensitive. Unknown names resolve to
    /// [`Icon::Application`] so that every descriptor stays renderable.
    pub fn resolve(name: &str) -> Self {
        ICON_TABLE
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::Application)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Calculator => "Calculator",
            Icon::Grid => "Grid",
            Icon::Orbit => "Orbit",
            Icon::Application => "AppWindow",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
