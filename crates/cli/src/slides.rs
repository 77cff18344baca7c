//! Slide template functions.
//!
//! Each function appends exactly one fully-formed slide to the deck
//! (except [`add_bottom_center_image`], which decorates the slide that
//! was just added). Layout constants are inches, converted to EMU at
//! the shape boundary.

use deck_core::{
    Align, AutoShape, Deck, Emu, Frame, Paragraph, Picture, Rgb, Run, Shape, ShapeGeometry,
    Slide, TextBox, TextFrame,
};
use deck_media::MediaImage;

/// Vine brand green.
pub const VINE_GREEN: Rgb = Rgb(0, 180, 136);

const CALIBRI: &str = "Calibri";
const CALIBRI_LIGHT: &str = "Calibri Light";

/// One bullet on a content slide: a plain line, or a bold head with
/// indented italic children.
#[derive(Debug, Clone, Copy)]
pub enum Bullet {
    Plain(&'static str),
    Group(&'static str, &'static [&'static str]),
}

/// Draw the green title band and its overlaid text box at the top of a
/// content slide.
fn band_title(slide: &mut Slide, text: &str, band_width_in: f64) {
    let left = Emu::inches(0.5);
    let top = Emu::inches(0.7);
    let height = Emu::inches(0.7);
    let width = Emu::inches(band_width_in);

    let band = AutoShape::new(ShapeGeometry::Rectangle, Frame::new(left, top, width, height))
        .with_fill(VINE_GREEN);
    slide.add_shape(Shape::AutoShape(band));

    let mut text_frame = TextFrame::new().with_word_wrap(true).with_zero_insets();
    text_frame.add_paragraph(Paragraph::from_run(
        Run::new(text)
            .with_size(32.0)
            .bold()
            .with_color(Rgb::WHITE)
            .with_typeface(CALIBRI),
    ));
    let title_frame = Frame::new(
        left + Emu::inches(0.2),
        top,
        width - Emu::inches(0.3),
        height,
    );
    slide.add_shape(Shape::TextBox(TextBox::new(title_frame, text_frame)));
}

/// Dark title slide with the deck title, subtitle, and a centered logo
/// near the top edge.
pub fn add_title_slide(deck: &mut Deck, title: &str, subtitle: &str, logo: &MediaImage) {
    let slide_width = deck.slide_width;
    let slide = deck.add_slide();
    slide.background = Some(Rgb(28, 34, 43));

    let mut title_frame = TextFrame::new();
    title_frame.add_paragraph(
        Paragraph::from_run(
            Run::new(title)
                .with_size(48.0)
                .with_typeface(CALIBRI_LIGHT)
                .with_color(Rgb::WHITE),
        )
        .with_alignment(Align::Center),
    );
    slide.add_shape(Shape::TextBox(TextBox::new(
        Frame::new(
            Emu::inches(0.5),
            Emu::inches(2.3),
            Emu::inches(9.0),
            Emu::inches(1.25),
        ),
        title_frame,
    )));

    let mut subtitle_frame = TextFrame::new();
    subtitle_frame.add_paragraph(
        Paragraph::from_run(
            Run::new(subtitle)
                .with_size(28.0)
                .with_typeface(CALIBRI)
                .with_color(Rgb(180, 200, 255)),
        )
        .with_alignment(Align::Center),
    );
    slide.add_shape(Shape::TextBox(TextBox::new(
        Frame::new(
            Emu::inches(1.5),
            Emu::inches(3.7),
            Emu::inches(7.0),
            Emu::inches(1.0),
        ),
        subtitle_frame,
    )));

    let width = Emu::inches(2.2);
    let height = Emu::inches(1.1);
    slide.add_shape(Shape::Picture(Picture::new(
        Frame::new(width.centered_in(slide_width), Emu::inches(0.2), width, height),
        logo.data.clone(),
    )));
}

/// Full-bleed green section divider.
pub fn add_section_header(deck: &mut Deck, title: &str, subtitle: &str) {
    let slide = deck.add_slide();
    slide.background = Some(VINE_GREEN);

    let mut title_frame = TextFrame::new();
    title_frame.add_paragraph(Paragraph::from_run(
        Run::new(title)
            .with_size(40.0)
            .with_typeface(CALIBRI)
            .with_color(Rgb::WHITE),
    ));
    slide.add_shape(Shape::TextBox(TextBox::new(
        Frame::new(
            Emu::inches(0.7),
            Emu::inches(2.6),
            Emu::inches(8.6),
            Emu::inches(1.0),
        ),
        title_frame,
    )));

    if !subtitle.is_empty() {
        let mut subtitle_frame = TextFrame::new();
        subtitle_frame.add_paragraph(Paragraph::from_run(
            Run::new(subtitle)
                .with_size(22.0)
                .with_typeface(CALIBRI)
                .with_color(Rgb(200, 220, 255)),
        ));
        slide.add_shape(Shape::TextBox(TextBox::new(
            Frame::new(
                Emu::inches(0.7),
                Emu::inches(3.7),
                Emu::inches(8.6),
                Emu::inches(0.6),
            ),
            subtitle_frame,
        )));
    }
}

/// The hand-laid overview slide: founding facts, a one-line
/// description, and a green key-facts banner.
pub fn add_overview_slide(deck: &mut Deck) {
    let slide = deck.add_slide();
    band_title(slide, "Vine Overview", 6.2);

    let left = Emu::inches(0.7);
    let top = Emu::inches(1.7);
    let width = Emu::inches(2.2);
    let height = Emu::inches(1.0);

    let mut founding = TextFrame::new();
    founding.add_paragraph(
        Paragraph::from_run(
            Run::new(
                "Founded in June 2012\n(Dom Hofmann, Rus Yusupov, Colin Kroll)\nAcquired by Twitter for ~$30M, Oct 2012",
            )
            .with_size(16.0)
            .with_typeface(CALIBRI),
        )
        .with_space_after(6.0),
    );
    slide.add_shape(Shape::TextBox(TextBox::new(
        Frame::new(left, top, width, height),
        founding,
    )));

    let mut description = TextFrame::new();
    description.add_paragraph(Paragraph::from_run(
        Run::new("A short-form video app for sharing 6-second looping videos.")
            .with_size(15.0)
            .with_typeface(CALIBRI),
    ));
    slide.add_shape(Shape::TextBox(TextBox::new(
        Frame::new(left, top + height + Emu::inches(0.15), width, Emu::inches(0.7)),
        description,
    )));

    let mut key_facts = TextFrame::new();
    key_facts.add_paragraph(
        Paragraph::from_run(
            Run::new("Launch: Jan 2013 \u{2022} Peak: ~200M users (2015) \u{2022} Shutdown: Jan 2017")
                .with_size(17.0)
                .with_typeface(CALIBRI)
                .with_color(Rgb::WHITE),
        )
        .with_alignment(Align::Center),
    );
    let banner = AutoShape::new(
        ShapeGeometry::RoundedRectangle,
        Frame::new(
            Emu::inches(3.1),
            Emu::inches(3.8),
            Emu::inches(4.5),
            Emu::inches(1.1),
        ),
    )
    .with_fill(VINE_GREEN)
    .with_text(key_facts);
    slide.add_shape(Shape::AutoShape(banner));
}

/// Band-titled bullet slide.
pub fn add_band_bullets_slide(deck: &mut Deck, title: &str, bullets: &[Bullet], wider_title: bool) {
    let slide = deck.add_slide();
    band_title(slide, title, if wider_title { 7.5 } else { 6.2 });

    let mut body = TextFrame::new();
    for bullet in bullets {
        match bullet {
            Bullet::Plain(text) => body.add_paragraph(Paragraph::from_run(
                Run::new(*text).with_size(19.0).with_typeface(CALIBRI),
            )),
            Bullet::Group(head, children) => {
                body.add_paragraph(Paragraph::from_run(
                    Run::new(*head).with_size(20.0).bold().with_typeface(CALIBRI),
                ));
                for child in *children {
                    body.add_paragraph(
                        Paragraph::from_run(
                            Run::new(*child)
                                .with_size(16.0)
                                .italic()
                                .with_typeface(CALIBRI_LIGHT),
                        )
                        .with_level(1),
                    );
                }
            }
        }
    }
    slide.add_shape(Shape::TextBox(TextBox::new(
        Frame::new(
            Emu::inches(1.0),
            Emu::inches(1.6),
            Emu::inches(8.5),
            Emu::inches(4.5),
        ),
        body,
    )));
}

/// Band-titled quote slide: the quote in a light rounded box with a
/// right-aligned attribution line.
pub fn add_band_quote_slide(deck: &mut Deck, quote: &str, source: &str, wider_title: bool) {
    let slide = deck.add_slide();
    band_title(slide, "What People Said", if wider_title { 7.5 } else { 6.2 });

    let mut text = TextFrame::new();
    text.add_paragraph(Paragraph::from_run(
        Run::new(format!("\u{201C}{}\u{201D}", quote))
            .with_size(20.0)
            .italic()
            .with_color(Rgb(30, 30, 30))
            .with_typeface(CALIBRI_LIGHT),
    ));
    text.add_paragraph(
        Paragraph::from_run(
            Run::new(format!("\u{2014} {}", source))
                .with_size(13.0)
                .with_typeface(CALIBRI)
                .with_color(Rgb(80, 80, 80)),
        )
        .with_alignment(Align::Right),
    );

    let quote_box = AutoShape::new(
        ShapeGeometry::RoundedRectangle,
        Frame::new(
            Emu::inches(1.0),
            Emu::inches(2.0),
            Emu::inches(8.0),
            Emu::inches(2.3),
        ),
    )
    .with_fill(Rgb(245, 245, 255))
    .with_outline(Rgb(120, 170, 255))
    .with_text(text);
    slide.add_shape(Shape::AutoShape(quote_box));
}

/// Band-titled image slide; the picture keeps its native aspect at the
/// given height.
pub fn add_band_image_slide(
    deck: &mut Deck,
    title: &str,
    image: &MediaImage,
    height_in: f64,
    wider_title: bool,
) {
    let slide = deck.add_slide();
    band_title(slide, title, if wider_title { 7.5 } else { 6.2 });

    let height = Emu::inches(height_in);
    let width = image.width_for_height(height);
    slide.add_shape(Shape::Picture(Picture::new(
        Frame::new(Emu::inches(1.0), Emu::inches(1.7), width, height),
        image.data.clone(),
    )));
}

/// Place a picture on the slide that was just added: fixed width,
/// aspect-derived height, horizontally centered, bottom edge the given
/// margin above the slide bottom.
pub fn add_bottom_center_image(
    deck: &mut Deck,
    image: &MediaImage,
    width_in: f64,
    bottom_margin_in: f64,
) {
    let slide_width = deck.slide_width;
    let slide_height = deck.slide_height;
    let width = Emu::inches(width_in);
    let height = image.height_for_width(width);
    let left = width.centered_in(slide_width);
    let top = slide_height - height - Emu::inches(bottom_margin_in);

    if let Some(slide) = deck.last_slide_mut() {
        slide.add_shape(Shape::Picture(Picture::new(
            Frame::new(left, top, width, height),
            image.data.clone(),
        )));
    }
}

/// Repaint every text run on the slide white.
pub fn paint_text_white(slide: &mut Slide) {
    for shape in &mut slide.shapes {
        if let Some(frame) = shape.text_frame_mut() {
            for run in frame.runs_mut() {
                run.font.color = Some(Rgb::WHITE);
            }
        }
    }
}
