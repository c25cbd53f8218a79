use serde::{Deserialize, Serialize};

/// Discriminator for the `listDestinations` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DestinationFilter {
    /// Both screen and aux destinations.
    #[default]
    All,
    /// Screen destinations only.
    Screen,
    /// Auxiliary destinations only.
    Aux,
}

impl DestinationFilter {
    /// The numeric wire value of this discriminator.
    pub fn wire_value(self) -> i32 {
        match self {
            Self::All => 0,
            Self::Screen => 1,
            Self::Aux => 2,
        }
    }
}

/// An auxiliary output destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuxDestination {
    pub id: i32,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "AuxStreamMode")]
    pub aux_stream_mode: i32,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A screen (composited) output destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenDestination {
    pub id: i32,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "HSize")]
    pub h_size: i32,
    #[serde(default, rename = "VSize")]
    pub v_size: i32,
    /// Number of layers this destination can composite.
    #[serde(default, rename = "Layers")]
    pub layers: i32,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result of `listDestinations`: both kinds arrive together.
///
/// With a narrowing [`DestinationFilter`] the device omits the other
/// kind's array entirely, hence the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DestinationList {
    #[serde(default, rename = "AuxDestination")]
    pub aux_destinations: Vec<AuxDestination>,
    #[serde(default, rename = "ScreenDestination")]
    pub screen_destinations: Vec<ScreenDestination>,
}
