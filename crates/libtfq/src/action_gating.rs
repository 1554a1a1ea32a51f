use serde::Deserialize;
use serde::Serialize;

/// Whether the surface's "search" and "save" actions are enabled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGating {
    pub search_enabled: bool,
    pub save_enabled: bool,
}

impl ActionGating {
    pub fn disabled() -> Self {
        Self::default()
    }
}
