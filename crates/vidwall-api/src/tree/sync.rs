// Keyed collection synchronizer.
//
// The wire format interleaves creation and incremental correction of
// the same records with no separate patch envelope: a later element for
// an id may carry only the fields that changed. Decoding therefore
// merges into the existing entry when one exists, and into a fresh
// default when it does not. Each collection is bound to one entity type
// at compile time via `TreeEntity`; the element's tag must name that
// type, never the other way around.

use std::collections::HashMap;

use crate::error::Error;
use crate::tree::Element;

/// An entity that lives in an identifier-indexed XML collection.
///
/// `merge` must only touch fields whose child elements are present, so
/// successive narrow updates accumulate onto a previously-fuller
/// record (merge-patch).
pub trait TreeEntity: Default {
    /// The element tag naming this entity on the wire.
    const TAG: &'static str;

    /// Apply one wire element's encoded fields onto `self`.
    fn merge(&mut self, element: &Element) -> Result<(), Error>;
}

/// Decode one wire element into its slot in `collection`.
///
/// Creates the entry from `T::default()` on first sight of the id,
/// merges onto the existing entry on later sightings. Fails with
/// [`Error::TypeMismatch`] for a mis-tagged element,
/// [`Error::MalformedIdentifier`] for a bad `id` attribute, and
/// whatever `merge` reports for a bad field; on any failure the
/// collection is left untouched. Returns the element's id.
pub fn sync_into<T: TreeEntity + Clone>(
    collection: &mut HashMap<i32, T>,
    element: &Element,
) -> Result<i32, Error> {
    if element.tag != T::TAG {
        return Err(Error::TypeMismatch {
            expected: T::TAG,
            found: element.tag.clone(),
        });
    }

    let id = element.id_attr()?;

    // Decode into a scratch copy; the slot is written only once the
    // whole element has decoded.
    let mut item = collection.get(&id).cloned().unwrap_or_default();
    item.merge(element)?;
    collection.insert(id, item);
    Ok(id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Widget {
        name: String,
        size: i32,
    }

    impl TreeEntity for Widget {
        const TAG: &'static str = "Widget";

        fn merge(&mut self, element: &Element) -> Result<(), Error> {
            if let Some(name) = element.child_text("Name") {
                self.name = name.to_owned();
            }
            if let Some(size) = element.child_value("Size")? {
                self.size = size;
            }
            Ok(())
        }
    }

    fn element(xml: &str) -> Element {
        Element::parse(xml).unwrap()
    }

    #[test]
    fn create_on_miss_uses_defaults_for_absent_fields() {
        let mut widgets: HashMap<i32, Widget> = HashMap::new();

        let id = sync_into(&mut widgets, &element(r#"<Widget id="5"><Name>a</Name></Widget>"#))
            .unwrap();

        assert_eq!(id, 5);
        assert_eq!(widgets[&5], Widget { name: "a".into(), size: 0 });
    }

    #[test]
    fn merge_preserves_fields_absent_from_update() {
        let mut widgets: HashMap<i32, Widget> = HashMap::new();

        sync_into(
            &mut widgets,
            &element(r#"<Widget id="5"><Name>a</Name><Size>2</Size></Widget>"#),
        )
        .unwrap();
        sync_into(&mut widgets, &element(r#"<Widget id="5"><Size>9</Size></Widget>"#)).unwrap();

        assert_eq!(widgets[&5], Widget { name: "a".into(), size: 9 });
    }

    #[test]
    fn mismatched_tag_is_rejected_and_collection_untouched() {
        let mut widgets: HashMap<i32, Widget> = HashMap::new();

        let err = sync_into(&mut widgets, &element(r#"<Gadget id="1"/>"#)).unwrap_err();

        assert!(
            matches!(err, Error::TypeMismatch { expected: "Widget", ref found } if found == "Gadget")
        );
        assert!(widgets.is_empty());
    }

    #[test]
    fn malformed_id_is_rejected_and_collection_untouched() {
        let mut widgets: HashMap<i32, Widget> = HashMap::new();
        sync_into(&mut widgets, &element(r#"<Widget id="1"><Name>keep</Name></Widget>"#)).unwrap();

        let err = sync_into(&mut widgets, &element(r#"<Widget id="abc"/>"#)).unwrap_err();

        assert!(matches!(err, Error::MalformedIdentifier { ref value, .. } if value == "abc"));
        assert_eq!(widgets.len(), 1);
        assert_eq!(widgets[&1].name, "keep");
    }

    #[test]
    fn failed_field_decode_inserts_nothing() {
        let mut widgets: HashMap<i32, Widget> = HashMap::new();

        let err = sync_into(
            &mut widgets,
            &element(r#"<Widget id="7"><Name>x</Name><Size>bad</Size></Widget>"#),
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidField { field: "Size", .. }));
        assert!(widgets.is_empty(), "no partially-decoded entry may appear");
    }

    #[test]
    fn failed_field_decode_preserves_existing_entry() {
        let mut widgets: HashMap<i32, Widget> = HashMap::new();
        sync_into(
            &mut widgets,
            &element(r#"<Widget id="7"><Name>orig</Name><Size>2</Size></Widget>"#),
        )
        .unwrap();

        let err = sync_into(
            &mut widgets,
            &element(r#"<Widget id="7"><Name>new</Name><Size>bad</Size></Widget>"#),
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidField { field: "Size", .. }));
        assert_eq!(
            widgets[&7],
            Widget { name: "orig".into(), size: 2 },
            "entry must not change when its update fails to decode"
        );
    }

    #[test]
    fn distinct_ids_create_distinct_entries() {
        let mut widgets: HashMap<i32, Widget> = HashMap::new();

        sync_into(&mut widgets, &element(r#"<Widget id="1"><Name>one</Name></Widget>"#)).unwrap();
        sync_into(&mut widgets, &element(r#"<Widget id="2"><Name>two</Name></Widget>"#)).unwrap();

        assert_eq!(widgets.len(), 2);
        assert_eq!(widgets[&1].name, "one");
        assert_eq!(widgets[&2].name, "two");
    }
}
