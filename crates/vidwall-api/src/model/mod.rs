// Typed wire models for the device's JSON-RPC responses.
//
// The device is inconsistent about field presence across firmware
// versions, so `#[serde(default)]` is used liberally and every entity
// carries a catch-all `extra` map for undocumented fields.

mod content;
mod destination;
mod source;

pub use content::{BgLayer, Layer, ScreenContent};
pub use destination::{AuxDestination, DestinationFilter, DestinationList, ScreenDestination};
pub use source::Source;
