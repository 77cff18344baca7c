//! Image fetching, loading, and payload probing.

use deck_core::{Emu, Error, ImageData, ImageFormat, Result};
use std::io::Cursor;
use std::path::Path;

/// An image payload plus the pixel dimensions probed from its header.
#[derive(Debug, Clone)]
pub struct MediaImage {
    /// Bytes and format, ready to embed as a media part.
    pub data: ImageData,

    pub width_px: u32,
    pub height_px: u32,
}

impl MediaImage {
    /// Probe an image payload for format and dimensions.
    ///
    /// `origin` names the source (URL or path) for error context.
    /// Only the header is decoded; the payload is embedded verbatim.
    pub fn from_bytes(bytes: Vec<u8>, origin: &str) -> Result<Self> {
        let reader = image::ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .map_err(|e| Error::ImageError(format!("probing {}: {}", origin, e)))?;

        let format = match reader.format() {
            Some(image::ImageFormat::Png) => ImageFormat::Png,
            Some(image::ImageFormat::Jpeg) => ImageFormat::Jpeg,
            Some(other) => {
                return Err(Error::ImageError(format!(
                    "unsupported image format {:?} from {}",
                    other, origin
                )))
            }
            None => {
                return Err(Error::ImageError(format!(
                    "unrecognized image data from {}",
                    origin
                )))
            }
        };

        let (width_px, height_px) = reader
            .into_dimensions()
            .map_err(|e| Error::ImageError(format!("reading dimensions of {}: {}", origin, e)))?;
        if width_px == 0 || height_px == 0 {
            return Err(Error::ImageError(format!(
                "degenerate image dimensions from {}",
                origin
            )));
        }

        Ok(Self {
            data: ImageData::new(bytes, format),
            width_px,
            height_px,
        })
    }

    /// Height that keeps the native aspect ratio at the given width.
    pub fn height_for_width(&self, width: Emu) -> Emu {
        width.scale(self.height_px as f64 / self.width_px as f64)
    }

    /// Width that keeps the native aspect ratio at the given height.
    pub fn width_for_height(&self, height: Emu) -> Emu {
        height.scale(self.width_px as f64 / self.height_px as f64)
    }
}

/// Download an image over plain HTTP GET.
///
/// Blocks until the transfer completes; no timeout, no retry. A
/// non-2xx status is an error, so a failed download aborts the run
/// instead of embedding an error page.
pub fn fetch(url: &str) -> Result<MediaImage> {
    log::info!("Fetching {}", url);
    let response = reqwest::blocking::get(url)
        .map_err(|e| Error::HttpError(format!("GET {} failed: {}", url, e)))?
        .error_for_status()
        .map_err(|e| Error::HttpError(format!("GET {} failed: {}", url, e)))?;
    let bytes = response
        .bytes()
        .map_err(|e| Error::HttpError(format!("reading body of {} failed: {}", url, e)))?;
    MediaImage::from_bytes(bytes.to_vec(), url)
}

/// Load an image file from disk (the rendered chart PNGs).
pub fn load(path: impl AsRef<Path>) -> Result<MediaImage> {
    let path = path.as_ref();
    log::debug!("Loading {}", path.display());
    let bytes = std::fs::read(path)?;
    MediaImage::from_bytes(bytes, &path.display().to_string())
}
