//! Generic XML element tree built on the quick-xml pull reader.
//!
//! The POM mapping never looks at raw events. This module turns a document
//! into an owned [`Element`] tree first, rejecting anything that is not
//! well-formed, so the mapping layer only ever sees a complete tree.

use crate::error::{PomError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use serde::Serialize;

/// One XML element with its attributes, child elements and character data.
///
/// Element names are stored without their namespace prefix. Attribute names
/// are stored as written (`xsi:schemaLocation`, `combine.children`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    /// Concatenated character data of this element, untrimmed.
    pub text: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Character data with surrounding XML whitespace removed.
    pub fn text(&self) -> &str {
        trim_xml_whitespace(&self.text)
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Self::text)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Trims the four XML whitespace characters (space, tab, CR, LF).
pub(crate) fn trim_xml_whitespace(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Parses a complete document and returns its root element.
///
/// Fails on mismatched or unclosed tags, malformed attributes, unknown
/// entity references, content outside the root element, and nesting deeper
/// than `max_depth`.
pub fn parse_document(content: &str, max_depth: usize) -> Result<Element> {
    let mut reader = Reader::from_str(content);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(PomError::decode)?;

        match event {
            Event::Start(ref e) => {
                check_open(&stack, root.as_ref(), max_depth)?;
                stack.push(open_element(e, &reader)?);
            }
            Event::Empty(ref e) => {
                check_open(&stack, root.as_ref(), max_depth)?;
                let element = open_element(e, &reader)?;
                attach(element, &mut stack, &mut root);
            }
            Event::End(ref e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                let element = stack.pop().ok_or_else(|| {
                    PomError::decode(format!("unexpected closing tag </{name}>"))
                })?;
                if element.name != name {
                    return Err(PomError::decode(format!(
                        "element <{}> closed by </{name}>",
                        element.name
                    )));
                }
                attach(element, &mut stack, &mut root);
            }
            Event::Text(ref e) => {
                let text = e.decode().map_err(PomError::decode)?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(ref e) => {
                let text = String::from_utf8_lossy(e).to_string();
                push_text(&mut stack, &text)?;
            }
            Event::GeneralRef(ref e) => {
                let text = resolve_reference(e)?;
                push_text(&mut stack, &text)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(PomError::decode(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| PomError::decode("document has no root element"))
}

fn check_open(stack: &[Element], root: Option<&Element>, max_depth: usize) -> Result<()> {
    if stack.is_empty() && root.is_some() {
        return Err(PomError::decode("content after the root element"));
    }
    if stack.len() >= max_depth {
        return Err(PomError::decode(format!(
            "elements nested deeper than {max_depth} levels"
        )));
    }
    Ok(())
}

fn open_element(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(start.local_name().as_ref()));

    for attr in start.attributes() {
        let attr = attr.map_err(PomError::decode)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(PomError::decode)?;
        element.attributes.push((key, value.into_owned()));
    }

    Ok(element)
}

fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(element) => {
            element.text.push_str(text);
            Ok(())
        }
        None if trim_xml_whitespace(text).is_empty() => Ok(()),
        None => Err(PomError::decode("character data outside the root element")),
    }
}

/// Resolves `&#NN;`, `&#xNN;` and the five predefined XML entities.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String> {
    if let Some(ch) = reference.resolve_char_ref().map_err(PomError::decode)? {
        return Ok(ch.to_string());
    }

    let name = reference.decode().map_err(PomError::decode)?;
    quick_xml::escape::resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| PomError::decode(format!("unknown entity reference &{name};")))
}
