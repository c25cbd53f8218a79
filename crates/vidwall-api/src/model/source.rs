use serde::{Deserialize, Serialize};

/// A video/signal source, from `listSources`.
///
/// Index fields use `-1` on the wire to mean "none"; they are kept
/// verbatim here (only screen-content layers carry the documented
/// sentinel normalization).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    pub id: i32,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "HSize")]
    pub h_size: i32,
    #[serde(default, rename = "VSize")]
    pub v_size: i32,
    /// 0=input, 1=still, 2=destination
    #[serde(default, rename = "SrcType")]
    pub src_type: i32,
    #[serde(default, rename = "InputCfgIndex")]
    pub input_cfg_index: i32,
    #[serde(default, rename = "StillIndex")]
    pub still_index: i32,
    #[serde(default, rename = "DestIndex")]
    pub dest_index: i32,
    #[serde(default, rename = "UserKeyIndex")]
    pub user_key_index: i32,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
