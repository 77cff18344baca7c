//! Slide part serialization.
//!
//! One function per shape kind, emitting the `p:sp` / `p:pic` subtrees
//! into the slide's `p:spTree`.

use crate::parts::{rel_type, NS_DRAWING, NS_PACKAGE_REL, NS_PRESENTATION, NS_REL};
use crate::xml::XmlBuilder;
use deck_core::{
    Align, AutoShape, Font, Frame, Paragraph, Picture, Result, Rgb, Run, Shape, ShapeGeometry,
    Slide, TextBox, TextFrame,
};

/// Relationship id assigned to the `index`-th picture on a slide.
/// rId1 is always the slide's layout relationship.
pub fn picture_rel_id(index: usize) -> String {
    format!("rId{}", index + 2)
}

/// Serialize one slide part.
pub fn slide_xml(slide: &Slide) -> Result<Vec<u8>> {
    let mut xml = XmlBuilder::new()?;
    xml.open(
        "p:sld",
        &[
            ("xmlns:a", NS_DRAWING),
            ("xmlns:r", NS_REL),
            ("xmlns:p", NS_PRESENTATION),
        ],
    )?;
    xml.open("p:cSld", &[])?;

    if let Some(color) = slide.background {
        xml.open("p:bg", &[])?;
        xml.open("p:bgPr", &[])?;
        solid_fill(&mut xml, color)?;
        xml.empty("a:effectLst", &[])?;
        xml.close("p:bgPr")?;
        xml.close("p:bg")?;
    }

    xml.open("p:spTree", &[])?;
    xml.open("p:nvGrpSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    xml.empty("p:cNvGrpSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.close("p:nvGrpSpPr")?;
    xml.open("p:grpSpPr", &[])?;
    xml.open("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    xml.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    xml.close("a:xfrm")?;
    xml.close("p:grpSpPr")?;

    // Shape id 1 is the group shape above.
    let mut shape_id = 2u32;
    let mut picture_index = 0usize;
    for shape in &slide.shapes {
        match shape {
            Shape::AutoShape(s) => write_auto_shape(&mut xml, s, shape_id)?,
            Shape::TextBox(s) => write_text_box(&mut xml, s, shape_id)?,
            Shape::Picture(s) => {
                let rid = picture_rel_id(picture_index);
                write_picture(&mut xml, s, shape_id, &rid)?;
                picture_index += 1;
            }
        }
        shape_id += 1;
    }

    xml.close("p:spTree")?;
    xml.close("p:cSld")?;
    xml.open("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.close("p:clrMapOvr")?;
    xml.close("p:sld")?;
    Ok(xml.finish())
}

/// Serialize a slide's relationships part: layout plus one image
/// relationship per picture, targets in shape order.
pub fn slide_rels_xml(picture_targets: &[String]) -> Result<Vec<u8>> {
    let mut xml = XmlBuilder::new()?;
    xml.open("Relationships", &[("xmlns", NS_PACKAGE_REL)])?;
    xml.empty(
        "Relationship",
        &[
            ("Id", "rId1"),
            ("Type", rel_type::SLIDE_LAYOUT),
            ("Target", "../slideLayouts/slideLayout1.xml"),
        ],
    )?;
    for (index, target) in picture_targets.iter().enumerate() {
        let rid = picture_rel_id(index);
        xml.empty(
            "Relationship",
            &[("Id", &rid), ("Type", rel_type::IMAGE), ("Target", target)],
        )?;
    }
    xml.close("Relationships")?;
    Ok(xml.finish())
}

fn write_auto_shape(xml: &mut XmlBuilder, shape: &AutoShape, id: u32) -> Result<()> {
    let kind = match shape.geometry {
        ShapeGeometry::Rectangle => "Rectangle",
        ShapeGeometry::RoundedRectangle => "Rounded Rectangle",
    };
    let id_attr = id.to_string();
    let name = format!("{} {}", kind, id);

    xml.open("p:sp", &[])?;
    xml.open("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", &id_attr), ("name", &name)])?;
    xml.empty("p:cNvSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.close("p:nvSpPr")?;

    xml.open("p:spPr", &[])?;
    write_xfrm(xml, &shape.frame)?;
    xml.open("a:prstGeom", &[("prst", shape.geometry.preset())])?;
    xml.empty("a:avLst", &[])?;
    xml.close("a:prstGeom")?;
    if let Some(color) = shape.fill {
        solid_fill(xml, color)?;
    }
    xml.open("a:ln", &[])?;
    match shape.outline {
        Some(color) => solid_fill(xml, color)?,
        None => xml.empty("a:noFill", &[])?,
    }
    xml.close("a:ln")?;
    xml.close("p:spPr")?;

    match &shape.text {
        Some(text) => write_tx_body(xml, text)?,
        None => write_empty_tx_body(xml)?,
    }
    xml.close("p:sp")?;
    Ok(())
}

fn write_text_box(xml: &mut XmlBuilder, shape: &TextBox, id: u32) -> Result<()> {
    let id_attr = id.to_string();
    let name = format!("TextBox {}", id);

    xml.open("p:sp", &[])?;
    xml.open("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", &id_attr), ("name", &name)])?;
    xml.empty("p:cNvSpPr", &[("txBox", "1")])?;
    xml.empty("p:nvPr", &[])?;
    xml.close("p:nvSpPr")?;

    xml.open("p:spPr", &[])?;
    write_xfrm(xml, &shape.frame)?;
    xml.open("a:prstGeom", &[("prst", "rect")])?;
    xml.empty("a:avLst", &[])?;
    xml.close("a:prstGeom")?;
    xml.empty("a:noFill", &[])?;
    xml.close("p:spPr")?;

    write_tx_body(xml, &shape.text)?;
    xml.close("p:sp")?;
    Ok(())
}

fn write_picture(xml: &mut XmlBuilder, picture: &Picture, id: u32, rid: &str) -> Result<()> {
    let id_attr = id.to_string();
    let name = format!("Picture {}", id);

    xml.open("p:pic", &[])?;
    xml.open("p:nvPicPr", &[])?;
    xml.empty("p:cNvPr", &[("id", &id_attr), ("name", &name)])?;
    xml.open("p:cNvPicPr", &[])?;
    xml.empty("a:picLocks", &[("noChangeAspect", "1")])?;
    xml.close("p:cNvPicPr")?;
    xml.empty("p:nvPr", &[])?;
    xml.close("p:nvPicPr")?;

    xml.open("p:blipFill", &[])?;
    xml.empty("a:blip", &[("r:embed", rid)])?;
    xml.open("a:stretch", &[])?;
    xml.empty("a:fillRect", &[])?;
    xml.close("a:stretch")?;
    xml.close("p:blipFill")?;

    xml.open("p:spPr", &[])?;
    write_xfrm(xml, &picture.frame)?;
    xml.open("a:prstGeom", &[("prst", "rect")])?;
    xml.empty("a:avLst", &[])?;
    xml.close("a:prstGeom")?;
    xml.close("p:spPr")?;
    xml.close("p:pic")?;
    Ok(())
}

fn write_xfrm(xml: &mut XmlBuilder, frame: &Frame) -> Result<()> {
    let x = frame.left.value().to_string();
    let y = frame.top.value().to_string();
    let cx = frame.width.value().to_string();
    let cy = frame.height.value().to_string();
    xml.open("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", &x), ("y", &y)])?;
    xml.empty("a:ext", &[("cx", &cx), ("cy", &cy)])?;
    xml.close("a:xfrm")
}

fn write_tx_body(xml: &mut XmlBuilder, frame: &TextFrame) -> Result<()> {
    xml.open("p:txBody", &[])?;
    let mut attrs: Vec<(&str, &str)> = Vec::new();
    if let Some(wrap) = frame.word_wrap {
        attrs.push(("wrap", if wrap { "square" } else { "none" }));
    }
    if frame.zero_insets {
        attrs.extend([("lIns", "0"), ("tIns", "0"), ("rIns", "0"), ("bIns", "0")]);
    }
    xml.empty("a:bodyPr", &attrs)?;
    xml.empty("a:lstStyle", &[])?;
    if frame.paragraphs.is_empty() {
        xml.empty("a:p", &[])?;
    }
    for paragraph in &frame.paragraphs {
        write_paragraph(xml, paragraph)?;
    }
    xml.close("p:txBody")
}

fn write_empty_tx_body(xml: &mut XmlBuilder) -> Result<()> {
    xml.open("p:txBody", &[])?;
    xml.empty("a:bodyPr", &[])?;
    xml.empty("a:lstStyle", &[])?;
    xml.empty("a:p", &[])?;
    xml.close("p:txBody")
}

fn write_paragraph(xml: &mut XmlBuilder, paragraph: &Paragraph) -> Result<()> {
    xml.open("a:p", &[])?;

    let has_props =
        paragraph.alignment.is_some() || paragraph.level > 0 || paragraph.space_after.is_some();
    if has_props {
        let level;
        let mut attrs: Vec<(&str, &str)> = Vec::new();
        if paragraph.level > 0 {
            level = paragraph.level.to_string();
            attrs.push(("lvl", &level));
        }
        if let Some(alignment) = paragraph.alignment {
            let algn = match alignment {
                Align::Left => "l",
                Align::Center => "ctr",
                Align::Right => "r",
            };
            attrs.push(("algn", algn));
        }
        if let Some(points) = paragraph.space_after {
            let val = centipoints(points);
            xml.open("a:pPr", &attrs)?;
            xml.open("a:spcAft", &[])?;
            xml.empty("a:spcPts", &[("val", &val)])?;
            xml.close("a:spcAft")?;
            xml.close("a:pPr")?;
        } else {
            xml.empty("a:pPr", &attrs)?;
        }
    }

    for run in &paragraph.runs {
        write_run(xml, run)?;
    }
    xml.close("a:p")
}

fn write_run(xml: &mut XmlBuilder, run: &Run) -> Result<()> {
    // Embedded newlines become explicit line breaks within the paragraph.
    for (index, segment) in run.text.split('\n').enumerate() {
        if index > 0 {
            xml.empty("a:br", &[])?;
        }
        xml.open("a:r", &[])?;
        write_run_props(xml, &run.font)?;
        xml.open("a:t", &[])?;
        xml.text(segment)?;
        xml.close("a:t")?;
        xml.close("a:r")?;
    }
    Ok(())
}

fn write_run_props(xml: &mut XmlBuilder, font: &Font) -> Result<()> {
    let size;
    let mut attrs: Vec<(&str, &str)> = vec![("lang", "en-US")];
    if let Some(points) = font.size {
        size = centipoints(points);
        attrs.push(("sz", &size));
    }
    if font.bold {
        attrs.push(("b", "1"));
    }
    if font.italic {
        attrs.push(("i", "1"));
    }

    if font.color.is_some() || font.typeface.is_some() {
        xml.open("a:rPr", &attrs)?;
        if let Some(color) = font.color {
            solid_fill(xml, color)?;
        }
        if let Some(typeface) = &font.typeface {
            xml.empty("a:latin", &[("typeface", typeface)])?;
        }
        xml.close("a:rPr")
    } else {
        xml.empty("a:rPr", &attrs)
    }
}

fn solid_fill(xml: &mut XmlBuilder, color: Rgb) -> Result<()> {
    let hex = color.hex();
    xml.open("a:solidFill", &[])?;
    xml.empty("a:srgbClr", &[("val", &hex)])?;
    xml.close("a:solidFill")
}

/// Font sizes and spacing are serialized in hundredths of a point.
fn centipoints(points: f32) -> String {
    ((points * 100.0).round() as i64).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Emu, ImageData, ImageFormat};

    fn text_box_with(text: &str) -> Shape {
        let mut frame = TextFrame::new();
        frame.add_paragraph(Paragraph::from_run(Run::new(text)));
        Shape::TextBox(TextBox::new(Frame::default(), frame))
    }

    fn render(slide: &Slide) -> String {
        String::from_utf8(slide_xml(slide).unwrap()).unwrap()
    }

    #[test]
    fn test_newline_becomes_line_break() {
        let mut slide = Slide::new();
        slide.add_shape(text_box_with("first\nsecond"));
        let out = render(&slide);
        assert!(out.contains("<a:br/>"));
        assert!(out.contains("<a:t>first</a:t>"));
        assert!(out.contains("<a:t>second</a:t>"));
    }

    #[test]
    fn test_background_fill_emitted() {
        let mut slide = Slide::new();
        slide.background = Some(Rgb(28, 34, 43));
        let out = render(&slide);
        assert!(out.contains("<p:bg>"));
        assert!(out.contains("<a:srgbClr val=\"1C222B\"/>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut slide = Slide::new();
        slide.add_shape(text_box_with("Fish & Chips <deluxe>"));
        let out = render(&slide);
        assert!(out.contains("Fish &amp; Chips &lt;deluxe&gt;"));
    }

    #[test]
    fn test_autoshape_without_outline_gets_no_fill_line() {
        let mut slide = Slide::new();
        slide.add_shape(Shape::AutoShape(
            AutoShape::new(ShapeGeometry::Rectangle, Frame::default()).with_fill(Rgb(0, 180, 136)),
        ));
        let out = render(&slide);
        assert!(out.contains("<a:ln><a:noFill/></a:ln>"));
        assert!(out.contains("prst=\"rect\""));
    }

    #[test]
    fn test_rounded_rectangle_preset() {
        let mut slide = Slide::new();
        slide.add_shape(Shape::AutoShape(AutoShape::new(
            ShapeGeometry::RoundedRectangle,
            Frame::default(),
        )));
        let out = render(&slide);
        assert!(out.contains("prst=\"roundRect\""));
    }

    #[test]
    fn test_picture_references_relationship() {
        let mut slide = Slide::new();
        slide.add_shape(Shape::Picture(Picture::new(
            Frame::new(Emu::ZERO, Emu::ZERO, Emu::inches(1.0), Emu::inches(1.0)),
            ImageData::new(vec![1, 2, 3], ImageFormat::Png),
        )));
        let out = render(&slide);
        assert!(out.contains("r:embed=\"rId2\""));
    }

    #[test]
    fn test_font_attributes() {
        let mut frame = TextFrame::new();
        frame.add_paragraph(Paragraph::from_run(
            Run::new("band")
                .with_size(32.0)
                .bold()
                .with_typeface("Calibri")
                .with_color(Rgb::WHITE),
        ));
        let mut slide = Slide::new();
        slide.add_shape(Shape::TextBox(TextBox::new(Frame::default(), frame)));
        let out = render(&slide);
        assert!(out.contains("sz=\"3200\""));
        assert!(out.contains("b=\"1\""));
        assert!(out.contains("typeface=\"Calibri\""));
        assert!(out.contains("<a:srgbClr val=\"FFFFFF\"/>"));
    }

    #[test]
    fn test_paragraph_properties() {
        let mut frame = TextFrame::new();
        frame.add_paragraph(
            Paragraph::from_run(Run::new("centered"))
                .with_alignment(Align::Center)
                .with_level(1)
                .with_space_after(6.0),
        );
        let mut slide = Slide::new();
        slide.add_shape(Shape::TextBox(TextBox::new(Frame::default(), frame)));
        let out = render(&slide);
        assert!(out.contains("lvl=\"1\""));
        assert!(out.contains("algn=\"ctr\""));
        assert!(out.contains("<a:spcPts val=\"600\"/>"));
    }

    #[test]
    fn test_slide_rels_lists_layout_then_images() {
        let rels = slide_rels_xml(&["../media/image1.png".to_string()]).unwrap();
        let out = String::from_utf8(rels).unwrap();
        assert!(out.contains("Id=\"rId1\""));
        assert!(out.contains("slideLayout1.xml"));
        assert!(out.contains("Id=\"rId2\""));
        assert!(out.contains("Target=\"../media/image1.png\""));
    }

    #[test]
    fn test_zero_insets_and_wrap() {
        let mut frame = TextFrame::new().with_word_wrap(true).with_zero_insets();
        frame.add_paragraph(Paragraph::from_run(Run::new("band title")));
        let mut slide = Slide::new();
        slide.add_shape(Shape::TextBox(TextBox::new(Frame::default(), frame)));
        let out = render(&slide);
        assert!(out.contains("wrap=\"square\""));
        assert!(out.contains("lIns=\"0\""));
        assert!(out.contains("bIns=\"0\""));
    }
}
