//! PPTX package writer.
//!
//! Assembles the OPC package: content types, package relationships,
//! document properties, the presentation part, the fixed
//! master/layout/theme, one part per slide, and media parts for every
//! embedded picture.

use crate::parts::{
    self, content_type, rel_type, NS_CONTENT_TYPES, NS_DRAWING, NS_PACKAGE_REL, NS_PRESENTATION,
    NS_REL,
};
use crate::slide;
use crate::xml::XmlBuilder;
use deck_core::{Deck, Error, ImageData, Result, Shape};
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writer for PPTX (Office Open XML) packages.
#[derive(Debug, Clone, Default)]
pub struct PptxWriter {
    title: Option<String>,
    creator: Option<String>,
}

impl PptxWriter {
    /// Create a writer with empty document properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title written to docProps/core.xml.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document creator written to docProps/core.xml.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Serialize the deck to a file.
    pub fn write_file(&self, deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::info!(
            "Writing {} slides to {}",
            deck.slide_count(),
            path.display()
        );
        let file = File::create(path)?;
        self.write(deck, file)
    }

    /// Serialize the deck to any seekable sink.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, sink: W) -> Result<()> {
        let mut zip = ZipWriter::new(sink);
        let xml_options: FileOptions =
            FileOptions::default().compression_method(CompressionMethod::Deflated);
        // Media payloads are already compressed formats.
        let media_options: FileOptions =
            FileOptions::default().compression_method(CompressionMethod::Stored);

        // Assign media part names up front; slide parts reference
        // pictures by their per-slide relationship ids.
        let mut media_parts: Vec<(String, &ImageData)> = Vec::new();
        let mut slide_picture_targets: Vec<Vec<String>> = Vec::new();
        for s in &deck.slides {
            let mut targets = Vec::new();
            for shape in &s.shapes {
                if let Shape::Picture(picture) = shape {
                    let name = format!(
                        "image{}.{}",
                        media_parts.len() + 1,
                        picture.image.format.extension()
                    );
                    targets.push(format!("../media/{}", name));
                    media_parts.push((name, &picture.image));
                }
            }
            slide_picture_targets.push(targets);
        }

        write_part(
            &mut zip,
            "[Content_Types].xml",
            &self.content_types_xml(deck)?,
            xml_options,
        )?;
        write_part(&mut zip, "_rels/.rels", &self.package_rels_xml()?, xml_options)?;
        write_part(&mut zip, "docProps/core.xml", &self.core_props_xml()?, xml_options)?;
        write_part(&mut zip, "docProps/app.xml", &self.app_props_xml(deck)?, xml_options)?;
        write_part(
            &mut zip,
            "ppt/presentation.xml",
            &self.presentation_xml(deck)?,
            xml_options,
        )?;
        write_part(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            &self.presentation_rels_xml(deck)?,
            xml_options,
        )?;

        write_part(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            parts::SLIDE_MASTER_XML.as_bytes(),
            xml_options,
        )?;
        write_part(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::SLIDE_MASTER_RELS_XML.as_bytes(),
            xml_options,
        )?;
        write_part(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            parts::SLIDE_LAYOUT_XML.as_bytes(),
            xml_options,
        )?;
        write_part(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::SLIDE_LAYOUT_RELS_XML.as_bytes(),
            xml_options,
        )?;
        write_part(
            &mut zip,
            "ppt/theme/theme1.xml",
            parts::THEME_XML.as_bytes(),
            xml_options,
        )?;

        for (index, s) in deck.slides.iter().enumerate() {
            let number = index + 1;
            log::debug!("Serializing slide {}", number);
            write_part(
                &mut zip,
                &format!("ppt/slides/slide{}.xml", number),
                &slide::slide_xml(s)?,
                xml_options,
            )?;
            write_part(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                &slide::slide_rels_xml(&slide_picture_targets[index])?,
                xml_options,
            )?;
        }

        for (name, image) in &media_parts {
            write_part(
                &mut zip,
                &format!("ppt/media/{}", name),
                &image.bytes,
                media_options,
            )?;
        }

        zip.finish().map_err(zip_err)?;
        Ok(())
    }

    fn content_types_xml(&self, deck: &Deck) -> Result<Vec<u8>> {
        let mut xml = XmlBuilder::new()?;
        xml.open("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
        for (extension, mime) in [
            ("rels", content_type::RELATIONSHIPS),
            ("xml", "application/xml"),
            ("png", "image/png"),
            ("jpeg", "image/jpeg"),
        ] {
            xml.empty("Default", &[("Extension", extension), ("ContentType", mime)])?;
        }

        let overrides = [
            ("/ppt/presentation.xml", content_type::PRESENTATION),
            ("/ppt/slideMasters/slideMaster1.xml", content_type::SLIDE_MASTER),
            ("/ppt/slideLayouts/slideLayout1.xml", content_type::SLIDE_LAYOUT),
            ("/ppt/theme/theme1.xml", content_type::THEME),
            ("/docProps/core.xml", content_type::CORE_PROPERTIES),
            ("/docProps/app.xml", content_type::EXTENDED_PROPERTIES),
        ];
        for (part, mime) in overrides {
            xml.empty("Override", &[("PartName", part), ("ContentType", mime)])?;
        }
        for number in 1..=deck.slide_count() {
            let part = format!("/ppt/slides/slide{}.xml", number);
            xml.empty(
                "Override",
                &[("PartName", &part), ("ContentType", content_type::SLIDE)],
            )?;
        }
        xml.close("Types")?;
        Ok(xml.finish())
    }

    fn package_rels_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlBuilder::new()?;
        xml.open("Relationships", &[("xmlns", NS_PACKAGE_REL)])?;
        xml.empty(
            "Relationship",
            &[
                ("Id", "rId1"),
                ("Type", rel_type::OFFICE_DOCUMENT),
                ("Target", "ppt/presentation.xml"),
            ],
        )?;
        xml.empty(
            "Relationship",
            &[
                ("Id", "rId2"),
                ("Type", rel_type::CORE_PROPERTIES),
                ("Target", "docProps/core.xml"),
            ],
        )?;
        xml.empty(
            "Relationship",
            &[
                ("Id", "rId3"),
                ("Type", rel_type::EXTENDED_PROPERTIES),
                ("Target", "docProps/app.xml"),
            ],
        )?;
        xml.close("Relationships")?;
        Ok(xml.finish())
    }

    fn core_props_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlBuilder::new()?;
        xml.open(
            "cp:coreProperties",
            &[
                (
                    "xmlns:cp",
                    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
                ),
                ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ],
        )?;
        if let Some(title) = &self.title {
            xml.open("dc:title", &[])?;
            xml.text(title)?;
            xml.close("dc:title")?;
        }
        if let Some(creator) = &self.creator {
            xml.open("dc:creator", &[])?;
            xml.text(creator)?;
            xml.close("dc:creator")?;
        }
        xml.close("cp:coreProperties")?;
        Ok(xml.finish())
    }

    fn app_props_xml(&self, deck: &Deck) -> Result<Vec<u8>> {
        let slides = deck.slide_count().to_string();
        let mut xml = XmlBuilder::new()?;
        xml.open(
            "Properties",
            &[(
                "xmlns",
                "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
            )],
        )?;
        xml.open("Application", &[])?;
        xml.text("deck-pptx")?;
        xml.close("Application")?;
        xml.open("Slides", &[])?;
        xml.text(&slides)?;
        xml.close("Slides")?;
        xml.close("Properties")?;
        Ok(xml.finish())
    }

    fn presentation_xml(&self, deck: &Deck) -> Result<Vec<u8>> {
        let mut xml = XmlBuilder::new()?;
        xml.open(
            "p:presentation",
            &[
                ("xmlns:a", NS_DRAWING),
                ("xmlns:r", NS_REL),
                ("xmlns:p", NS_PRESENTATION),
            ],
        )?;
        xml.open("p:sldMasterIdLst", &[])?;
        xml.empty(
            "p:sldMasterId",
            &[("id", "2147483648"), ("r:id", "rId1")],
        )?;
        xml.close("p:sldMasterIdLst")?;

        xml.open("p:sldIdLst", &[])?;
        for index in 0..deck.slide_count() {
            let id = (256 + index).to_string();
            let rid = format!("rId{}", index + 2);
            xml.empty("p:sldId", &[("id", &id), ("r:id", &rid)])?;
        }
        xml.close("p:sldIdLst")?;

        let cx = deck.slide_width.value().to_string();
        let cy = deck.slide_height.value().to_string();
        xml.empty("p:sldSz", &[("cx", &cx), ("cy", &cy)])?;
        xml.empty("p:notesSz", &[("cx", &cy), ("cy", &cx)])?;
        xml.close("p:presentation")?;
        Ok(xml.finish())
    }

    fn presentation_rels_xml(&self, deck: &Deck) -> Result<Vec<u8>> {
        let mut xml = XmlBuilder::new()?;
        xml.open("Relationships", &[("xmlns", NS_PACKAGE_REL)])?;
        xml.empty(
            "Relationship",
            &[
                ("Id", "rId1"),
                ("Type", rel_type::SLIDE_MASTER),
                ("Target", "slideMasters/slideMaster1.xml"),
            ],
        )?;
        for index in 0..deck.slide_count() {
            let rid = format!("rId{}", index + 2);
            let target = format!("slides/slide{}.xml", index + 1);
            xml.empty(
                "Relationship",
                &[("Id", &rid), ("Type", rel_type::SLIDE), ("Target", &target)],
            )?;
        }
        xml.close("Relationships")?;
        Ok(xml.finish())
    }
}

fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    bytes: &[u8],
    options: FileOptions,
) -> Result<()> {
    zip.start_file(name, options).map_err(zip_err)?;
    zip.write_all(bytes)?;
    Ok(())
}

fn zip_err(e: zip::result::ZipError) -> Error {
    Error::ZipError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Emu, Frame, ImageFormat, Paragraph, Picture, Run, Slide, TextBox, TextFrame};
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use std::io::{Cursor, Read};

    fn text_slide(text: &str) -> Slide {
        let mut frame = TextFrame::new();
        frame.add_paragraph(Paragraph::from_run(Run::new(text)));
        let mut s = Slide::new();
        s.add_shape(Shape::TextBox(TextBox::new(Frame::default(), frame)));
        s
    }

    fn picture_slide(bytes: Vec<u8>, format: ImageFormat) -> Slide {
        let mut s = Slide::new();
        s.add_shape(Shape::Picture(Picture::new(
            Frame::new(Emu::ZERO, Emu::ZERO, Emu::inches(2.0), Emu::inches(1.0)),
            ImageData::new(bytes, format),
        )));
        s
    }

    fn write_to_vec(deck: &Deck) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        PptxWriter::new().write(deck, &mut buffer).unwrap();
        buffer.into_inner()
    }

    fn read_part(package: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(package)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    /// Pull all `a:t` character data back out of a slide part.
    fn extract_text(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(false);
        let mut texts = Vec::new();
        let mut in_text = false;
        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"a:t" => in_text = true,
                Ok(Event::Text(ref e)) if in_text => {
                    texts.push(e.unescape().unwrap().to_string());
                }
                Ok(Event::End(ref e)) if e.name().as_ref() == b"a:t" => in_text = false,
                Ok(Event::Eof) => break,
                Err(e) => panic!("XML error: {}", e),
                _ => {}
            }
        }
        texts
    }

    #[test]
    fn test_package_contains_expected_parts() {
        let mut deck = Deck::new();
        *deck.add_slide() = text_slide("one");
        *deck.add_slide() = text_slide("two");
        let package = write_to_vec(&deck);

        let archive = zip::ZipArchive::new(Cursor::new(&package[..])).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
        ] {
            assert!(names.contains(&expected), "missing part: {}", expected);
        }
    }

    #[test]
    fn test_presentation_lists_slides_in_order() {
        let mut deck = Deck::new();
        *deck.add_slide() = text_slide("one");
        *deck.add_slide() = text_slide("two");
        let package = write_to_vec(&deck);

        let presentation = read_part(&package, "ppt/presentation.xml");
        assert!(presentation.contains("<p:sldId id=\"256\" r:id=\"rId2\"/>"));
        assert!(presentation.contains("<p:sldId id=\"257\" r:id=\"rId3\"/>"));
        assert!(presentation.contains("<p:sldSz cx=\"9144000\" cy=\"6858000\"/>"));

        let rels = read_part(&package, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains("Target=\"slides/slide1.xml\""));
        assert!(rels.contains("Target=\"slides/slide2.xml\""));
    }

    #[test]
    fn test_slide_text_survives_roundtrip() {
        let mut deck = Deck::new();
        *deck.add_slide() = text_slide("Key Milestones & Growth");
        let package = write_to_vec(&deck);

        let xml = read_part(&package, "ppt/slides/slide1.xml");
        let texts = extract_text(&xml);
        assert_eq!(texts, vec!["Key Milestones & Growth".to_string()]);
    }

    #[test]
    fn test_media_parts_and_relationships() {
        let mut deck = Deck::new();
        *deck.add_slide() = picture_slide(vec![0x89, 0x50, 0x4E, 0x47], ImageFormat::Png);
        *deck.add_slide() = picture_slide(vec![0xFF, 0xD8, 0xFF], ImageFormat::Jpeg);
        let package = write_to_vec(&deck);

        let archive = zip::ZipArchive::new(Cursor::new(&package[..])).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"ppt/media/image1.png"));
        assert!(names.contains(&"ppt/media/image2.jpeg"));

        let rels = read_part(&package, "ppt/slides/_rels/slide2.xml.rels");
        assert!(rels.contains("Target=\"../media/image2.jpeg\""));

        let xml = read_part(&package, "ppt/slides/slide2.xml");
        assert!(xml.contains("r:embed=\"rId2\""));
    }

    #[test]
    fn test_content_types_cover_slides_and_media() {
        let mut deck = Deck::new();
        *deck.add_slide() = picture_slide(vec![1, 2, 3], ImageFormat::Png);
        let package = write_to_vec(&deck);

        let types = read_part(&package, "[Content_Types].xml");
        assert!(types.contains("Extension=\"png\""));
        assert!(types.contains("Extension=\"jpeg\""));
        assert!(types.contains("PartName=\"/ppt/slides/slide1.xml\""));
    }

    #[test]
    fn test_app_props_record_slide_count() {
        let mut deck = Deck::new();
        *deck.add_slide() = text_slide("a");
        *deck.add_slide() = text_slide("b");
        *deck.add_slide() = text_slide("c");
        let package = write_to_vec(&deck);

        let app = read_part(&package, "docProps/app.xml");
        assert!(app.contains("<Slides>3</Slides>"));
    }

    #[test]
    fn test_core_props_carry_title_and_creator() {
        let mut deck = Deck::new();
        *deck.add_slide() = text_slide("a");
        let mut buffer = Cursor::new(Vec::new());
        PptxWriter::new()
            .with_title("Why Vine Failed")
            .with_creator("deck-cli")
            .write(&deck, &mut buffer)
            .unwrap();
        let package = buffer.into_inner();

        let core = read_part(&package, "docProps/core.xml");
        assert!(core.contains("<dc:title>Why Vine Failed</dc:title>"));
        assert!(core.contains("<dc:creator>deck-cli</dc:creator>"));
    }

    #[test]
    fn test_write_file_produces_zip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pptx");
        let mut deck = Deck::new();
        *deck.add_slide() = text_slide("hello");
        PptxWriter::new().write_file(&deck, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..4], &[0x50, 0x4B, 0x03, 0x04]);
    }
}
