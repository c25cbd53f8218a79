// Owned XML element tree.
//
// quick-xml's pull parser is folded into a plain tree once per
// document; everything downstream (field merges, the synchronizer)
// works on `Element` references without touching the parser.

use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::Error;

/// One XML element: tag, attributes, trimmed text, child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Parse a complete document and return its root element.
    pub fn parse(xml: &str) -> Result<Element, Error> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event().map_err(|e| Error::Xml(e.to_string()))? {
                Event::Start(start) => {
                    stack.push(Self::from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        let value = text.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                        current.text.push_str(value.trim());
                    }
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::Xml("unbalanced end tag".into()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Eof => {
                    return Err(Error::Xml("document has no root element".into()));
                }
                _ => {}
            }
        }
    }

    fn from_start(start: &quick_xml::events::BytesStart<'_>) -> Result<Element, Error> {
        let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attrs = Vec::new();

        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(e.to_string()))?
                .into_owned();
            attrs.push((key, value));
        }

        Ok(Element {
            tag,
            attrs,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The integer `id` attribute every collection element must carry.
    ///
    /// Missing or unparsable ids are protocol violations, surfaced as
    /// [`Error::MalformedIdentifier`].
    pub fn id_attr(&self) -> Result<i32, Error> {
        let value = self.attr("id").unwrap_or("");
        value.parse().map_err(|_| Error::MalformedIdentifier {
            tag: self.tag.clone(),
            value: value.to_owned(),
        })
    }

    /// The first child element with the given tag.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// The text of the first child element with the given tag.
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.child(tag).map(|child| child.text.as_str())
    }

    /// Parse the text of the named child as `T`, if the child exists.
    ///
    /// Absence is `Ok(None)` (the field was simply not encoded);
    /// present-but-unparsable is [`Error::InvalidField`].
    pub fn child_value<T: FromStr>(&self, field: &'static str) -> Result<Option<T>, Error> {
        match self.child_text(field) {
            None => Ok(None),
            Some(text) => text.parse().map(Some).map_err(|_| Error::InvalidField {
                tag: self.tag.clone(),
                field,
                value: text.to_owned(),
            }),
        }
    }
}
