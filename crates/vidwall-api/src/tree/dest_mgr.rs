// Destination manager configuration tree.
//
// `<DestMgr id=...>` carries two heterogeneous sub-collections under
// one root: `<AuxDestCol>` of `<AuxDest>` entries and `<ScreenDestCol>`
// of `<ScreenDest>` entries, each leaf keyed by its `id` attribute.
// Successive documents are partial: applying a second document onto an
// existing `DestMgr` merges element by element.

use std::collections::HashMap;

use crate::error::Error;
use crate::tree::{Element, TreeEntity, sync_into};

/// An auxiliary destination entry in the configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuxDest {
    pub name: String,
    pub aux_stream_mode: i32,
    pub out_cfg_index: i32,
}

impl TreeEntity for AuxDest {
    const TAG: &'static str = "AuxDest";

    fn merge(&mut self, element: &Element) -> Result<(), Error> {
        if let Some(name) = element.child_text("Name") {
            self.name = name.to_owned();
        }
        if let Some(mode) = element.child_value("AuxStreamMode")? {
            self.aux_stream_mode = mode;
        }
        if let Some(index) = element.child_value("OutCfgIndex")? {
            self.out_cfg_index = index;
        }
        Ok(())
    }
}

/// A screen destination entry in the configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenDest {
    pub name: String,
    pub h_size: i32,
    pub v_size: i32,
    pub is_active: i32,
}

impl TreeEntity for ScreenDest {
    const TAG: &'static str = "ScreenDest";

    fn merge(&mut self, element: &Element) -> Result<(), Error> {
        if let Some(name) = element.child_text("Name") {
            self.name = name.to_owned();
        }
        if let Some(h_size) = element.child_value("HSize")? {
            self.h_size = h_size;
        }
        if let Some(v_size) = element.child_value("VSize")? {
            self.v_size = v_size;
        }
        if let Some(is_active) = element.child_value("IsActive")? {
            self.is_active = is_active;
        }
        Ok(())
    }
}

/// The destination manager tree, indexed by entry id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestMgr {
    pub id: i32,
    pub aux_destinations: HashMap<i32, AuxDest>,
    pub screen_destinations: HashMap<i32, ScreenDest>,
}

impl DestMgr {
    /// Parse a complete document into a fresh tree.
    pub fn parse(xml: &str) -> Result<Self, Error> {
        let mut mgr = Self::default();
        mgr.apply_str(xml)?;
        Ok(mgr)
    }

    /// Parse a document and merge it onto this tree.
    pub fn apply_str(&mut self, xml: &str) -> Result<(), Error> {
        let root = Element::parse(xml)?;
        self.apply(&root)
    }

    /// Merge a parsed `<DestMgr>` element onto this tree.
    ///
    /// Entries present in the document are created or merge-updated;
    /// entries absent from it are left as they are.
    pub fn apply(&mut self, root: &Element) -> Result<(), Error> {
        if root.tag != "DestMgr" {
            return Err(Error::TypeMismatch {
                expected: "DestMgr",
                found: root.tag.clone(),
            });
        }
        self.id = root.id_attr()?;

        if let Some(col) = root.child("AuxDestCol") {
            for element in &col.children {
                sync_into(&mut self.aux_destinations, element)?;
            }
        }
        if let Some(col) = root.child("ScreenDestCol") {
            for element in &col.children {
                sync_into(&mut self.screen_destinations, element)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FULL_DOC: &str = r#"
        <DestMgr id="0">
          <AuxDestCol>
            <AuxDest id="0">
              <Name>Aux A</Name>
              <AuxStreamMode>4</AuxStreamMode>
              <OutCfgIndex>2</OutCfgIndex>
            </AuxDest>
            <AuxDest id="1">
              <Name>Aux B</Name>
            </AuxDest>
          </AuxDestCol>
          <ScreenDestCol>
            <ScreenDest id="0">
              <Name>Main Wall</Name>
              <HSize>3840</HSize>
              <VSize>1080</VSize>
              <IsActive>1</IsActive>
            </ScreenDest>
          </ScreenDestCol>
        </DestMgr>"#;

    #[test]
    fn parses_both_sub_collections() {
        let mgr = DestMgr::parse(FULL_DOC).unwrap();

        assert_eq!(mgr.id, 0);
        assert_eq!(mgr.aux_destinations.len(), 2);
        assert_eq!(mgr.screen_destinations.len(), 1);

        let aux = &mgr.aux_destinations[&0];
        assert_eq!(aux.name, "Aux A");
        assert_eq!(aux.aux_stream_mode, 4);
        assert_eq!(aux.out_cfg_index, 2);

        let screen = &mgr.screen_destinations[&0];
        assert_eq!(screen.name, "Main Wall");
        assert_eq!((screen.h_size, screen.v_size), (3840, 1080));
    }

    #[test]
    fn partial_update_accumulates_onto_existing_entries() {
        let mut mgr = DestMgr::parse(FULL_DOC).unwrap();

        mgr.apply_str(
            r#"<DestMgr id="0">
                 <AuxDestCol>
                   <AuxDest id="0"><AuxStreamMode>1</AuxStreamMode></AuxDest>
                 </AuxDestCol>
               </DestMgr>"#,
        )
        .unwrap();

        let aux = &mgr.aux_destinations[&0];
        assert_eq!(aux.aux_stream_mode, 1, "encoded field overwritten");
        assert_eq!(aux.name, "Aux A", "absent field untouched");
        assert_eq!(aux.out_cfg_index, 2, "absent field untouched");

        // Collections absent from the update are untouched too.
        assert_eq!(mgr.screen_destinations.len(), 1);
        assert_eq!(mgr.aux_destinations.len(), 2);
    }

    #[test]
    fn reapplying_the_same_document_is_a_no_op() {
        let mut mgr = DestMgr::parse(FULL_DOC).unwrap();
        let before = mgr.clone();
        mgr.apply_str(FULL_DOC).unwrap();
        assert_eq!(mgr, before);
    }

    #[test]
    fn wrong_root_tag_is_rejected() {
        let err = DestMgr::parse(r#"<PresetMgr id="0"/>"#).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { expected: "DestMgr", .. }));
    }

    #[test]
    fn foreign_element_inside_collection_is_rejected() {
        let mut mgr = DestMgr::default();
        let err = mgr
            .apply_str(
                r#"<DestMgr id="0">
                     <AuxDestCol><ScreenDest id="1"/></AuxDestCol>
                   </DestMgr>"#,
            )
            .unwrap_err();

        assert!(
            matches!(err, Error::TypeMismatch { expected: "AuxDest", ref found } if found == "ScreenDest")
        );
        assert!(mgr.aux_destinations.is_empty());
    }
}
