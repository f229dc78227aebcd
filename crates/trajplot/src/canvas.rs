//! Supersampled pixel surface.
//!
//! The buffer holds `width*supersample × height*supersample` pixels. Every
//! drawing call goes through the device transform `scale(supersample)`, so
//! callers work in logical `width × height` units.

use std::fmt;
use std::path::Path;

use tiny_skia::{FillRule, Paint, Pixmap, Stroke};

use crate::transform::Affine2;
use crate::types::Rgb;

/// Canvas size and supersampling factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasCfg {
    pub width: u32,
    pub height: u32,
    pub supersample: u32,
}

impl Default for CanvasCfg {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            supersample: 4,
        }
    }
}

impl CanvasCfg {
    /// Physical buffer size; `None` on zero dimensions or overflow.
    pub fn physical_size(&self) -> Option<(u32, u32)> {
        if self.width == 0 || self.height == 0 || self.supersample == 0 {
            return None;
        }
        let w = self.width.checked_mul(self.supersample)?;
        let h = self.height.checked_mul(self.supersample)?;
        Some((w, h))
    }

    pub fn validate(&self) -> Result<(), CanvasError> {
        self.physical_size()
            .map(|_| ())
            .ok_or(CanvasError::InvalidSize(*self))
    }

    /// Logical units → physical pixels.
    pub fn device_transform(&self) -> Affine2 {
        let s = self.supersample as f64;
        Affine2::scaling(s, s)
    }
}

#[derive(Debug)]
pub enum CanvasError {
    InvalidSize(CanvasCfg),
    AllocationFailed { width: u32, height: u32 },
    BackgroundAlreadyFilled,
    BackgroundNotFilled,
    InvalidColor(Rgb),
    Encode(String),
    Io(std::io::Error),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::InvalidSize(cfg) => write!(
                f,
                "invalid canvas size {}x{} at supersample {}",
                cfg.width, cfg.height, cfg.supersample
            ),
            CanvasError::AllocationFailed { width, height } => {
                write!(f, "could not allocate a {width}x{height} pixel buffer")
            }
            CanvasError::BackgroundAlreadyFilled => write!(f, "background was already filled"),
            CanvasError::BackgroundNotFilled => {
                write!(f, "background must be filled before drawing")
            }
            CanvasError::InvalidColor(c) => write!(f, "color {c} is outside [0, 1]"),
            CanvasError::Encode(msg) => write!(f, "png encoding failed: {msg}"),
            CanvasError::Io(e) => write!(f, "writing png failed: {e}"),
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CanvasError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Pixel surface plus the device transform used for every draw call.
pub struct Canvas {
    cfg: CanvasCfg,
    pixmap: Pixmap,
    background_filled: bool,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("cfg", &self.cfg)
            .field("background_filled", &self.background_filled)
            .finish_non_exhaustive()
    }
}

fn paint_for(color: Rgb) -> Result<Paint<'static>, CanvasError> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia().ok_or(CanvasError::InvalidColor(color))?);
    paint.anti_alias = true;
    Ok(paint)
}

impl Canvas {
    pub fn create(cfg: CanvasCfg) -> Result<Self, CanvasError> {
        let (width, height) = cfg.physical_size().ok_or(CanvasError::InvalidSize(cfg))?;
        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::AllocationFailed { width, height })?;
        Ok(Self {
            cfg,
            pixmap,
            background_filled: false,
        })
    }

    #[inline]
    pub fn cfg(&self) -> CanvasCfg {
        self.cfg
    }

    /// `(width, height)` of the pixel buffer.
    #[inline]
    pub fn physical_size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    #[inline]
    pub fn background_filled(&self) -> bool {
        self.background_filled
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Flat fill of the whole canvas. Allowed once, before any drawing.
    pub fn fill_background(&mut self, color: Rgb) -> Result<(), CanvasError> {
        if self.background_filled {
            return Err(CanvasError::BackgroundAlreadyFilled);
        }
        let c = color.to_skia().ok_or(CanvasError::InvalidColor(color))?;
        self.pixmap.fill(c);
        self.background_filled = true;
        Ok(())
    }

    /// Stroke `path` (logical units) with a constant width.
    pub fn stroke(
        &mut self,
        path: &tiny_skia::Path,
        color: Rgb,
        width: f32,
    ) -> Result<(), CanvasError> {
        self.ensure_background()?;
        let paint = paint_for(color)?;
        // Default join/cap: miter, butt.
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        let transform = self.cfg.device_transform().to_skia();
        self.pixmap
            .stroke_path(path, &paint, &stroke, transform, None);
        Ok(())
    }

    /// Fill `path` (logical units) with a flat color.
    pub fn fill(&mut self, path: &tiny_skia::Path, color: Rgb) -> Result<(), CanvasError> {
        self.ensure_background()?;
        let paint = paint_for(color)?;
        let transform = self.cfg.device_transform().to_skia();
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, transform, None);
        Ok(())
    }

    fn ensure_background(&self) -> Result<(), CanvasError> {
        if self.background_filled {
            Ok(())
        } else {
            Err(CanvasError::BackgroundNotFilled)
        }
    }

    /// Encode the current surface as PNG (RGBA8, fully opaque after a background fill).
    pub fn export_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.pixmap
            .encode_png()
            .map_err(|e| CanvasError::Encode(e.to_string()))
    }

    /// Encode, then write. Nothing is written if encoding fails.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), CanvasError> {
        let bytes = self.export_png()?;
        std::fs::write(path, bytes).map_err(CanvasError::Io)
    }
}
