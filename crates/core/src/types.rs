//! Domain types for representing a presentation before serialization.
//!
//! A [`Deck`] owns an ordered sequence of [`Slide`]s; each slide owns an
//! ordered sequence of [`Shape`]s. Shape order is the z-order the
//! serializer emits, nothing else depends on it.

use crate::color::Rgb;
use crate::geometry::{Emu, Frame};
use serde::{Deserialize, Serialize};

/// Raster image formats the package can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// File extension used for the media part name.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }

    /// MIME content type for `[Content_Types].xml`.
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// An image payload ready to embed as a media part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageData {
    /// Raw encoded bytes, written verbatim into the package.
    pub bytes: Vec<u8>,

    /// Encoding of `bytes`.
    pub format: ImageFormat,
}

impl ImageData {
    /// Create an image payload.
    pub fn new(bytes: Vec<u8>, format: ImageFormat) -> Self {
        Self { bytes, format }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Character formatting for a text run.
///
/// Unset fields inherit the viewer's defaults, matching how the
/// templates only set what they care about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Font {
    /// Typeface name, e.g. "Calibri".
    pub typeface: Option<String>,

    /// Size in typographic points.
    pub size: Option<f32>,

    pub bold: bool,
    pub italic: bool,

    /// Solid text color.
    pub color: Option<Rgb>,
}

/// A contiguous stretch of identically formatted text.
///
/// Text may contain `\n`, which the serializer turns into line breaks
/// within the paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub font: Font,
}

impl Run {
    /// Create a run with default formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Font::default(),
        }
    }

    /// Set the font size in points.
    pub fn with_size(mut self, points: f32) -> Self {
        self.font.size = Some(points);
        self
    }

    /// Set the typeface name.
    pub fn with_typeface(mut self, name: impl Into<String>) -> Self {
        self.font.typeface = Some(name.into());
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.font.color = Some(color);
        self
    }

    /// Make the run bold.
    pub fn bold(mut self) -> Self {
        self.font.bold = true;
        self
    }

    /// Make the run italic.
    pub fn italic(mut self) -> Self {
        self.font.italic = true;
        self
    }
}

/// A paragraph: runs plus paragraph-level formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Option<Align>,

    /// Indent level, 0 for top-level text.
    pub level: u8,

    /// Space after the paragraph in points.
    pub space_after: Option<f32>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding a single run.
    pub fn from_run(run: Run) -> Self {
        Self {
            runs: vec![run],
            ..Self::default()
        }
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Align) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the indent level.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Set space after the paragraph in points.
    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after = Some(points);
        self
    }
}

/// Text content of a text box or autoshape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,

    /// Whether text wraps at the frame edge; `None` inherits.
    pub word_wrap: Option<bool>,

    /// Collapse the default internal margins to zero.
    pub zero_insets: bool,
}

impl TextFrame {
    /// Create an empty text frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set explicit word wrapping.
    pub fn with_word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = Some(wrap);
        self
    }

    /// Collapse internal margins to zero.
    pub fn with_zero_insets(mut self) -> Self {
        self.zero_insets = true;
        self
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// All run text concatenated, paragraphs separated by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.runs.iter().map(|r| r.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Mutable access to every run, across paragraphs.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.paragraphs.iter_mut().flat_map(|p| p.runs.iter_mut())
    }
}

/// Preset geometry for autoshapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeGeometry {
    Rectangle,
    RoundedRectangle,
}

impl ShapeGeometry {
    /// DrawingML preset geometry name.
    pub fn preset(&self) -> &'static str {
        match self {
            ShapeGeometry::Rectangle => "rect",
            ShapeGeometry::RoundedRectangle => "roundRect",
        }
    }
}

/// A preset-geometry shape with optional fill, outline, and text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoShape {
    pub geometry: ShapeGeometry,
    pub frame: Frame,

    /// Solid fill color; `None` leaves the theme default.
    pub fill: Option<Rgb>,

    /// Outline color; `None` suppresses the outline entirely.
    pub outline: Option<Rgb>,

    pub text: Option<TextFrame>,
}

impl AutoShape {
    /// Create an autoshape with no fill, outline, or text.
    pub fn new(geometry: ShapeGeometry, frame: Frame) -> Self {
        Self {
            geometry,
            frame,
            fill: None,
            outline: None,
            text: None,
        }
    }

    /// Set a solid fill.
    pub fn with_fill(mut self, color: Rgb) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set an outline color.
    pub fn with_outline(mut self, color: Rgb) -> Self {
        self.outline = Some(color);
        self
    }

    /// Attach text.
    pub fn with_text(mut self, text: TextFrame) -> Self {
        self.text = Some(text);
        self
    }
}

/// A plain text box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    pub frame: Frame,
    pub text: TextFrame,
}

impl TextBox {
    /// Create a text box.
    pub fn new(frame: Frame, text: TextFrame) -> Self {
        Self { frame, text }
    }
}

/// An embedded picture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Picture {
    pub frame: Frame,
    pub image: ImageData,
}

impl Picture {
    /// Create a picture.
    pub fn new(frame: Frame, image: ImageData) -> Self {
        Self { frame, image }
    }
}

/// A positioned visual element on a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    AutoShape(AutoShape),
    TextBox(TextBox),
    Picture(Picture),
}

impl Shape {
    /// The shape's frame.
    pub fn frame(&self) -> &Frame {
        match self {
            Shape::AutoShape(s) => &s.frame,
            Shape::TextBox(s) => &s.frame,
            Shape::Picture(s) => &s.frame,
        }
    }

    /// The shape's text frame, if it has one.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match self {
            Shape::AutoShape(s) => s.text.as_ref(),
            Shape::TextBox(s) => Some(&s.text),
            Shape::Picture(_) => None,
        }
    }

    /// Mutable access to the shape's text frame, if it has one.
    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match self {
            Shape::AutoShape(s) => s.text.as_mut(),
            Shape::TextBox(s) => Some(&mut s.text),
            Shape::Picture(_) => None,
        }
    }
}

/// A single slide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Solid background color; `None` keeps the master background.
    pub background: Option<Rgb>,

    /// Shapes in z-order.
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// All text on the slide, shape by shape.
    pub fn texts(&self) -> Vec<String> {
        self.shapes
            .iter()
            .filter_map(|s| s.text_frame())
            .map(|t| t.text())
            .collect()
    }
}

/// The in-memory presentation document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Slide width in EMU.
    pub slide_width: Emu,

    /// Slide height in EMU.
    pub slide_height: Emu,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Create an empty 4:3 deck (10in x 7.5in).
    pub fn new() -> Self {
        Self {
            slide_width: Emu::inches(10.0),
            slide_height: Emu::inches(7.5),
            slides: Vec::new(),
        }
    }

    /// Append an empty slide and return it for population.
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::new());
        self.slides.last_mut().expect("slide was just pushed")
    }

    /// The most recently added slide.
    pub fn last_slide_mut(&mut self) -> Option<&mut Slide> {
        self.slides.last_mut()
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_slide_appends_in_order() {
        let mut deck = Deck::new();
        deck.add_slide().background = Some(Rgb(1, 2, 3));
        deck.add_slide();
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.slides[0].background, Some(Rgb(1, 2, 3)));
        assert_eq!(deck.slides[1].background, None);
    }

    #[test]
    fn test_default_slide_size_is_4_3() {
        let deck = Deck::new();
        assert_eq!(deck.slide_width, Emu(9_144_000));
        assert_eq!(deck.slide_height, Emu(6_858_000));
    }

    #[test]
    fn test_text_frame_text_joins_paragraphs() {
        let mut frame = TextFrame::new();
        frame.add_paragraph(Paragraph::from_run(Run::new("first")));
        frame.add_paragraph(Paragraph::from_run(Run::new("second")));
        assert_eq!(frame.text(), "first\nsecond");
    }

    #[test]
    fn test_runs_mut_covers_all_paragraphs() {
        let mut frame = TextFrame::new();
        frame.add_paragraph(Paragraph::from_run(Run::new("a")));
        let mut p = Paragraph::from_run(Run::new("b"));
        p.runs.push(Run::new("c"));
        frame.add_paragraph(p);

        for run in frame.runs_mut() {
            run.font.color = Some(Rgb::WHITE);
        }

        let colors: Vec<_> = frame
            .paragraphs
            .iter()
            .flat_map(|p| p.runs.iter().map(|r| r.font.color))
            .collect();
        assert_eq!(colors, vec![Some(Rgb::WHITE); 3]);
    }

    #[test]
    fn test_slide_texts_skips_pictures() {
        let mut slide = Slide::new();
        slide.add_shape(Shape::TextBox(TextBox::new(
            Frame::default(),
            {
                let mut t = TextFrame::new();
                t.add_paragraph(Paragraph::from_run(Run::new("hello")));
                t
            },
        )));
        slide.add_shape(Shape::Picture(Picture::new(
            Frame::default(),
            ImageData::new(vec![0u8; 4], ImageFormat::Png),
        )));
        assert_eq!(slide.texts(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_run_builders() {
        let run = Run::new("x")
            .with_size(19.0)
            .with_typeface("Calibri")
            .with_color(Rgb(30, 30, 30))
            .bold()
            .italic();
        assert_eq!(run.font.size, Some(19.0));
        assert_eq!(run.font.typeface.as_deref(), Some("Calibri"));
        assert_eq!(run.font.color, Some(Rgb(30, 30, 30)));
        assert!(run.font.bold);
        assert!(run.font.italic);
    }

    #[test]
    fn test_image_format_metadata() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Jpeg.content_type(), "image/jpeg");
    }
}
