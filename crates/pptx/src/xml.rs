//! Thin helper over quick-xml's event writer.

use deck_core::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// Builds one XML part in memory, starting with the standard declaration.
pub(crate) struct XmlBuilder {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlBuilder {
    /// Start a part with the `<?xml ...?>` declaration.
    pub fn new() -> Result<Self> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_err)?;
        Ok(Self { writer })
    }

    /// Open an element with attributes.
    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer
            .write_event(Event::Start(element(name, attrs)))
            .map_err(xml_err)
    }

    /// Write a self-closing element with attributes.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer
            .write_event(Event::Empty(element(name, attrs)))
            .map_err(xml_err)
    }

    /// Write character data. Escaping is quick-xml's.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_err)
    }

    /// Close an element opened with [`XmlBuilder::open`].
    pub fn close(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    /// Finish the part and return its bytes.
    pub fn finish(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }
}

fn element<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut el = BytesStart::new(name);
    for (key, value) in attrs {
        el.push_attribute((*key, *value));
    }
    el
}

fn xml_err(e: quick_xml::Error) -> Error {
    Error::XmlError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_text_content() {
        let mut xml = XmlBuilder::new().unwrap();
        xml.open("t", &[]).unwrap();
        xml.text("Fish & Chips <deluxe>").unwrap();
        xml.close("t").unwrap();
        let out = String::from_utf8(xml.finish()).unwrap();
        assert!(out.contains("Fish &amp; Chips &lt;deluxe&gt;"));
    }

    #[test]
    fn test_declaration_first() {
        let xml = XmlBuilder::new().unwrap();
        let out = String::from_utf8(xml.finish()).unwrap();
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
    }

    #[test]
    fn test_empty_element_with_attrs() {
        let mut xml = XmlBuilder::new().unwrap();
        xml.empty("a:off", &[("x", "914400"), ("y", "0")]).unwrap();
        let out = String::from_utf8(xml.finish()).unwrap();
        assert!(out.contains("<a:off x=\"914400\" y=\"0\"/>"));
    }
}
