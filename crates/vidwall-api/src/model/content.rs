use serde::{Deserialize, Serialize};

/// One screen's layered content, from `listContent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenContent {
    pub id: i32,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Layers")]
    pub layers: Vec<Layer>,
    #[serde(default, rename = "BgLyr")]
    pub bg_layers: Vec<BgLayer>,
}

impl ScreenContent {
    /// Normalize wire sentinels, in place.
    ///
    /// The device encodes "no source" as a negative `LastSrcIdx`; after
    /// this pass the field is `None` instead. Idempotent, and always
    /// applied before a decoded document reaches a caller.
    pub fn normalize(&mut self) {
        for layer in &mut self.layers {
            if matches!(layer.last_src_idx, Some(idx) if idx < 0) {
                layer.last_src_idx = None;
            }
        }
    }
}

/// A content layer within a screen destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layer {
    pub id: i32,
    /// Back-reference to the last routed source, if any.
    #[serde(default, rename = "LastSrcIdx")]
    pub last_src_idx: Option<i32>,
    #[serde(default, rename = "LastUserKeyIdx")]
    pub last_user_key_idx: Option<i32>,
    #[serde(default, rename = "PvwMode")]
    pub pvw_mode: i32,
    #[serde(default, rename = "PgmMode")]
    pub pgm_mode: i32,
    #[serde(default, rename = "Freeze")]
    pub freeze: i32,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A background layer value within a screen destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BgLayer {
    pub id: i32,
    #[serde(default, rename = "LastBGSourceIndex")]
    pub last_bg_source_index: i32,
    #[serde(default, rename = "BGShowMatte")]
    pub bg_show_matte: i32,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
