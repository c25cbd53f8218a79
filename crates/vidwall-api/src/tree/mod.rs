// XML configuration trees.
//
// The device pushes composite configuration as XML documents whose
// collections interleave creation and incremental correction of the
// same records. `Element` is an owned document tree; `sync` merges
// identifier-tagged elements into typed collections; `dest_mgr` is the
// destination manager document built on both.

mod element;
pub mod dest_mgr;
pub mod sync;

pub use dest_mgr::{AuxDest, DestMgr, ScreenDest};
pub use element::Element;
pub use sync::{TreeEntity, sync_into};
