//! Generates the Vine retrospective deck.
//!
//! Renders the two illustrative charts, fetches the remote images,
//! assembles the fixed slide sequence, and writes the presentation to
//! the working directory.

mod content;
mod slides;

use anyhow::{Context, Result};
use deck_chart::LineChart;
use deck_core::Deck;
use deck_media::MediaImage;
use deck_pptx::PptxWriter;

/// The two chart images, rendered to disk and loaded back for embedding.
struct Charts {
    users: MediaImage,
    engagement: MediaImage,
}

/// Remote images the deck embeds, fetched up front.
struct RemoteImages {
    logo: MediaImage,
    explore: MediaImage,
    infographic: MediaImage,
    comparison: MediaImage,
    eulogy: MediaImage,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let charts = render_charts().context("Failed to render chart images")?;
    let images = fetch_images().context("Failed to fetch remote images")?;

    let deck = build_deck(&charts, &images);

    PptxWriter::new()
        .with_title(content::TITLE)
        .with_creator("vine-deck")
        .write_file(&deck, content::OUTPUT_FILE)
        .with_context(|| format!("Failed to write {}", content::OUTPUT_FILE))?;

    println!("Saved presentation to: {}", content::OUTPUT_FILE);
    Ok(())
}

/// Render both line charts to the working directory and load them back
/// with their pixel dimensions.
fn render_charts() -> Result<Charts> {
    let months: Vec<String> = content::CHART_MONTHS.iter().map(|m| m.to_string()).collect();

    LineChart::new(
        content::USERS_CHART_TITLE,
        months.clone(),
        content::USERS_MILLIONS.to_vec(),
    )
    .with_x_desc("Date")
    .with_y_desc("Users (M)")
    .with_color(slides::VINE_GREEN)
    .with_size(content::CHART_SIZE_PX)
    .render_to_file(content::USERS_CHART_FILE)
    .context("rendering users chart")?;

    LineChart::new(
        content::ENGAGEMENT_CHART_TITLE,
        months,
        content::ENGAGEMENT_PCT.to_vec(),
    )
    .with_x_desc("Date")
    .with_y_desc("Engagement (%)")
    .with_color(slides::VINE_GREEN)
    .with_size(content::CHART_SIZE_PX)
    .render_to_file(content::ENGAGEMENT_CHART_FILE)
    .context("rendering engagement chart")?;

    Ok(Charts {
        users: deck_media::load(content::USERS_CHART_FILE).context("loading users chart")?,
        engagement: deck_media::load(content::ENGAGEMENT_CHART_FILE)
            .context("loading engagement chart")?,
    })
}

/// Download every remote image the deck embeds. Any failure aborts the
/// run before the output file is written.
fn fetch_images() -> Result<RemoteImages> {
    Ok(RemoteImages {
        logo: deck_media::fetch(content::LOGO_URL).context("fetching Vine logo")?,
        explore: deck_media::fetch(content::EXPLORE_URL).context("fetching explore screenshot")?,
        infographic: deck_media::fetch(content::INFOGRAPHIC_URL)
            .context("fetching growth infographic")?,
        comparison: deck_media::fetch(content::COMPARISON_URL)
            .context("fetching comparison image")?,
        eulogy: deck_media::fetch(content::EULOGY_URL).context("fetching eulogy image")?,
    })
}

/// Assemble the fixed slide sequence.
fn build_deck(charts: &Charts, images: &RemoteImages) -> Deck {
    let mut deck = Deck::new();

    slides::add_title_slide(&mut deck, content::TITLE, content::SUBTITLE, &images.logo);
    slides::add_section_header(&mut deck, "Overview", "What is Vine?");
    slides::add_overview_slide(&mut deck);

    slides::add_band_bullets_slide(&mut deck, "Core Platform Features", &content::CORE_FEATURES, false);
    slides::add_bottom_center_image(&mut deck, &images.explore, 3.2, 2.0);

    slides::add_band_bullets_slide(&mut deck, "Key Milestones & Growth", &content::MILESTONES, false);
    slides::add_bottom_center_image(&mut deck, &images.infographic, 4.2, 2.0);

    slides::add_band_bullets_slide(&mut deck, "Peak Popularity", &content::PEAK_POPULARITY, true);
    slides::add_band_bullets_slide(
        &mut deck,
        "Competitive Pressures",
        &content::COMPETITIVE_PRESSURES,
        false,
    );
    slides::add_band_bullets_slide(&mut deck, "Business Model Issues", &content::BUSINESS_MODEL, true);
    slides::add_band_bullets_slide(&mut deck, "Positioning", &content::POSITIONING, true);

    slides::add_band_image_slide(&mut deck, "Growth Signal (Illustrative)", &charts.users, 4.0, true);
    slides::add_band_image_slide(
        &mut deck,
        "Engagement Decline (Illustrative)",
        &charts.engagement,
        4.0,
        true,
    );

    slides::add_band_bullets_slide(&mut deck, "Execution & Org Gaps", &content::EXECUTION_GAPS, true);
    slides::add_band_bullets_slide(
        &mut deck,
        "Missed Opportunities",
        &content::MISSED_OPPORTUNITIES,
        false,
    );

    slides::add_band_quote_slide(&mut deck, content::QUOTE, content::QUOTE_SOURCE, true);
    slides::add_bottom_center_image(&mut deck, &images.comparison, 3.3, 1.0);

    slides::add_band_bullets_slide(
        &mut deck,
        "How Instagram and TikTok beat Vine",
        &content::HOW_RIVALS_WON,
        true,
    );

    slides::add_band_bullets_slide(&mut deck, "Thank You", &content::THANK_YOU, true);
    slides::add_bottom_center_image(&mut deck, &images.eulogy, 4.0, 3.0);
    if let Some(slide) = deck.last_slide_mut() {
        slides::paint_text_white(slide);
    }

    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{ImageData, ImageFormat, Rgb};

    fn fake_image(width_px: u32, height_px: u32) -> MediaImage {
        MediaImage {
            data: ImageData::new(vec![0u8; 16], ImageFormat::Png),
            width_px,
            height_px,
        }
    }

    fn fake_deck() -> Deck {
        let charts = Charts {
            users: fake_image(1200, 700),
            engagement: fake_image(1200, 700),
        };
        let images = RemoteImages {
            logo: fake_image(1000, 563),
            explore: fake_image(640, 480),
            infographic: fake_image(960, 684),
            comparison: fake_image(600, 450),
            eulogy: fake_image(1200, 630),
        };
        build_deck(&charts, &images)
    }

    #[test]
    fn test_deck_has_sixteen_slides() {
        assert_eq!(fake_deck().slide_count(), 16);
    }

    #[test]
    fn test_slide_titles_in_order() {
        let deck = fake_deck();
        let expected = [
            (3, "Core Platform Features"),
            (4, "Key Milestones & Growth"),
            (5, "Peak Popularity"),
            (6, "Competitive Pressures"),
            (7, "Business Model Issues"),
            (8, "Positioning"),
            (9, "Growth Signal (Illustrative)"),
            (10, "Engagement Decline (Illustrative)"),
            (11, "Execution & Org Gaps"),
            (12, "Missed Opportunities"),
            (13, "What People Said"),
            (14, "How Instagram and TikTok beat Vine"),
            (15, "Thank You"),
        ];
        for (index, title) in expected {
            let texts = deck.slides[index].texts().join("\n");
            assert!(texts.contains(title), "slide {} missing '{}'", index + 1, title);
        }
    }

    #[test]
    fn test_bullets_appear_verbatim() {
        let deck = fake_deck();
        let texts = deck.slides[3].texts().join("\n");
        assert!(texts.contains("6-second looping videos"));
        assert!(texts.contains("Allowed multiple 'takes' per vine"));
    }

    #[test]
    fn test_bottom_images_land_on_their_slides() {
        let deck = fake_deck();
        // Title logo, two chart slides, and four bottom-centered images.
        for index in [0, 3, 4, 9, 10, 13, 15] {
            let pictures = deck.slides[index]
                .shapes
                .iter()
                .filter(|s| matches!(s, deck_core::Shape::Picture(_)))
                .count();
            assert_eq!(pictures, 1, "slide {} should hold one picture", index + 1);
        }
    }

    #[test]
    fn test_final_slide_text_is_white() {
        let deck = fake_deck();
        let last = deck.slides.last().unwrap();
        for shape in &last.shapes {
            if let Some(frame) = shape.text_frame() {
                for paragraph in &frame.paragraphs {
                    for run in &paragraph.runs {
                        assert_eq!(run.font.color, Some(Rgb::WHITE));
                    }
                }
            }
        }
    }
}
