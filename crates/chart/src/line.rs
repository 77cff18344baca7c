//! Line chart description and PNG rendering.

use deck_core::{Error, Result, Rgb};
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};
use resvg::{tiny_skia, usvg};
use std::path::Path;

/// A single-series line chart with category labels on the x axis.
///
/// Rendering draws the chart into an in-memory SVG with plotters, then
/// rasterizes it to the requested pixel size and writes a PNG file.
#[derive(Debug, Clone)]
pub struct LineChart {
    title: String,
    x_desc: String,
    y_desc: String,
    labels: Vec<String>,
    values: Vec<f64>,
    color: Rgb,
    size: (u32, u32),
}

impl LineChart {
    /// Create a chart from parallel category labels and values.
    pub fn new(title: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            title: title.into(),
            x_desc: String::new(),
            y_desc: String::new(),
            labels,
            values,
            color: Rgb(31, 119, 180),
            size: (1200, 700),
        }
    }

    /// Set the x axis description.
    pub fn with_x_desc(mut self, desc: impl Into<String>) -> Self {
        self.x_desc = desc.into();
        self
    }

    /// Set the y axis description.
    pub fn with_y_desc(mut self, desc: impl Into<String>) -> Self {
        self.y_desc = desc.into();
        self
    }

    /// Set the line and marker color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Set the output size in pixels.
    pub fn with_size(mut self, size: (u32, u32)) -> Self {
        self.size = size;
        self
    }

    /// Render the chart to a PNG file.
    pub fn render_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if self.labels.len() != self.values.len() {
            return Err(Error::ChartError(format!(
                "{} labels for {} values",
                self.labels.len(),
                self.values.len()
            )));
        }
        if self.values.len() < 2 {
            return Err(Error::ChartError(
                "a line chart needs at least two points".to_string(),
            ));
        }

        log::debug!("Rendering chart '{}' to {}", self.title, path.display());
        let svg = self.draw_svg()?;
        rasterize_svg(&svg, self.size, path)
    }

    fn draw_svg(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            let color = RGBColor(self.color.0, self.color.1, self.color.2);
            let x_max = (self.values.len() - 1) as i32;
            let peak = self.values.iter().cloned().fold(0.0f64, f64::max);
            let y_top = if peak > 0.0 { peak * 1.15 } else { 1.0 };

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    &self.title,
                    FontDesc::new(FontFamily::SansSerif, 26.0, FontStyle::Bold),
                )
                .margin(12)
                .x_label_area_size(46)
                .y_label_area_size(58)
                .build_cartesian_2d(0..x_max, 0.0..y_top)
                .map_err(draw_err)?;

            chart
                .configure_mesh()
                .x_labels(self.labels.len())
                .x_label_formatter(&|index: &i32| {
                    self.labels
                        .get(*index as usize)
                        .cloned()
                        .unwrap_or_default()
                })
                .x_desc(self.x_desc.as_str())
                .y_desc(self.y_desc.as_str())
                .axis_desc_style(("sans-serif", 15))
                .draw()
                .map_err(draw_err)?;

            let points: Vec<(i32, f64)> = self
                .values
                .iter()
                .enumerate()
                .map(|(index, value)| (index as i32, *value))
                .collect();

            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    color.stroke_width(3),
                ))
                .map_err(draw_err)?;
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|(x, y)| Circle::new((*x, *y), 4, color.filled())),
                )
                .map_err(draw_err)?;

            // One value annotation above each marker.
            let annotation = TextStyle::from(("sans-serif", 13).into_font()).color(&color);
            chart
                .draw_series(points.iter().map(|(x, y)| {
                    EmptyElement::at((*x, *y))
                        + Text::new(format!("{:.1}", y), (-10, -20), annotation.clone())
                }))
                .map_err(draw_err)?;

            root.present().map_err(draw_err)?;
        }
        Ok(svg)
    }
}

/// Rasterize the drawn SVG and write it as a PNG file.
fn rasterize_svg(svg: &str, size: (u32, u32), path: &Path) -> Result<()> {
    let options = usvg::Options::default();
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options, &fontdb)
        .map_err(|e| Error::ChartError(format!("failed to parse chart SVG: {}", e)))?;

    let mut pixmap = tiny_skia::Pixmap::new(size.0, size.1)
        .ok_or_else(|| Error::ChartError("failed to allocate chart pixmap".to_string()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity((pixmap.width() * pixmap.height() * 4) as usize);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let rendered = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| Error::ChartError("pixmap buffer size mismatch".to_string()))?;
    rendered
        .save(path)
        .map_err(|e| Error::ChartError(format!("failed to write {}: {}", path.display(), e)))?;
    Ok(())
}

fn draw_err(e: impl std::fmt::Display) -> Error {
    Error::ChartError(e.to_string())
}
