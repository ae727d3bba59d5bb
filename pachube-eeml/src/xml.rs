//! Element tree and XML text support for EEML
//!
//! Every entity renders itself into an [`Element`]. The tree is turned into
//! markup with `quick-xml`'s writer, and markup can be read back into a tree
//! for inspection, which is how the tests compare documents and how the
//! client reads error payloads.

use std::fmt;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::{EemlError, Result};

/// A single XML element with attributes, optional text and children
///
/// Attributes keep insertion order for output. Equality treats attributes as
/// a set and children as a sequence.
#[derive(Debug, Clone, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set an attribute, replacing any previous value
    pub fn with_attr<K: Into<String>, V: fmt::Display>(mut self, name: K, value: V) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute only when a value is present
    pub fn with_attr_opt<K: Into<String>, V: fmt::Display>(self, name: K, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_attr(name, value),
            None => self,
        }
    }

    /// Set the text content
    pub fn with_text<V: fmt::Display>(mut self, text: V) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a `<name>value</name>` child only when a value is present
    pub fn with_text_child_opt<K: Into<String>, V: fmt::Display>(
        self,
        name: K,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(value) => self.with_child(Element::new(name).with_text(value)),
            None => self,
        }
    }

    /// Set an attribute in place
    pub fn set_attr<K: Into<String>, V: fmt::Display>(&mut self, name: K, value: V) {
        let name = name.into();
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Append a child in place
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Element name, including any namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of attribute `name`
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in output order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Text content
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// All children in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child called `name`
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Every child called `name`, in order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child called `name`
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(Element::text)
    }

    /// Render this element as markup, without an XML declaration
    pub fn to_xml(&self, pretty: bool) -> Result<String> {
        self.render(pretty, false)
    }

    /// Render this element as a standalone document with an XML declaration
    pub fn to_document(&self, pretty: bool) -> Result<String> {
        self.render(pretty, true)
    }

    fn render(&self, pretty: bool, declaration: bool) -> Result<String> {
        self.check_chars()?;

        let mut writer = if pretty {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };

        if declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .map_err(|e| EemlError::serialization(e.to_string()))?;
        }
        self.write_into(&mut writer)
            .map_err(|e| EemlError::serialization(e.to_string()))?;

        String::from_utf8(writer.into_inner()).map_err(|e| EemlError::serialization(e.to_string()))
    }

    // Text and attribute values must match the XML 1.0 `Char` production.
    fn check_chars(&self) -> Result<()> {
        let values = self
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(self.text.as_deref().map(|t| (self.name.as_str(), t)));
        for (field, value) in values {
            if let Some(c) = value.chars().find(|c| !is_xml_char(*c)) {
                return Err(EemlError::serialization(format!(
                    "'{}' contains U+{:04X}, which XML does not allow",
                    field, c as u32
                )));
            }
        }
        self.children.iter().try_for_each(Element::check_chars)
    }

    fn write_into<W: std::io::Write>(&self, writer: &mut Writer<W>) -> quick_xml::Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            return writer.write_event(Event::Empty(start));
        }

        writer.write_event(Event::Start(start))?;
        if let Some(text) = &self.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_into(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))
    }

    /// Parse markup into a tree
    ///
    /// Text is kept exactly as written, except that whitespace-only text in
    /// an element with child elements, or outside the root, is dropped. A
    /// `<x></x>` pair has empty text while `<x/>` has none. Declarations,
    /// comments and processing instructions are skipped.
    pub fn from_xml(xml: &str) -> Result<Element> {
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| EemlError::deserialization(e.to_string()))?;
            match event {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let mut element = stack
                        .pop()
                        .ok_or_else(|| EemlError::deserialization("unexpected closing tag"))?;
                    if element.children.is_empty() {
                        element.text.get_or_insert_with(String::new);
                    } else if element.text.as_deref().is_some_and(is_blank) {
                        element.text = None;
                    }
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| EemlError::deserialization(e.to_string()))?;
                    Self::append_text(&mut stack, &text)?;
                }
                Event::CData(data) => {
                    let text = String::from_utf8(data.into_inner().into_owned())
                        .map_err(|e| EemlError::deserialization(e.to_string()))?;
                    Self::append_text(&mut stack, &text)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(EemlError::deserialization("unclosed element at end of input"));
        }
        root.ok_or_else(|| EemlError::deserialization("document has no root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Element> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| EemlError::deserialization(e.to_string()))?
            .to_string();
        let mut element = Element::new(name);

        for attr in start.attributes() {
            let attr = attr.map_err(|e| EemlError::deserialization(e.to_string()))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| EemlError::deserialization(e.to_string()))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| EemlError::deserialization(e.to_string()))?;
            element.attributes.push((key, value.into_owned()));
        }
        Ok(element)
    }

    fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(EemlError::deserialization("more than one root element")),
        }
        Ok(())
    }

    fn append_text(stack: &mut [Element], text: &str) -> Result<()> {
        match stack.last_mut() {
            Some(current) => {
                current.text.get_or_insert_with(String::new).push_str(text);
                Ok(())
            }
            None if is_blank(text) => Ok(()),
            None => Err(EemlError::deserialization("text outside of the root element")),
        }
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name
            || self.text != other.text
            || self.children != other.children
            || self.attributes.len() != other.attributes.len()
        {
            return false;
        }
        self.attributes
            .iter()
            .all(|(k, v)| other.attr(k) == Some(v.as_str()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.to_xml(false).map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}
