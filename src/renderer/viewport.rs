//! Mapping between field pixels, surface pixels and NDC
//!
//! The field keeps its aspect ratio and is centered on the surface;
//! leftover space becomes bars of background color.

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface size in physical pixels
    pub size: (u32, u32),
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
        }
    }

    /// Surface pixels per field pixel
    pub fn scale(&self) -> f32 {
        let (w, h) = self.size;
        (w as f32 / FIELD_WIDTH).min(h as f32 / FIELD_HEIGHT)
    }

    /// Top-left of the field on the surface, in surface pixels
    fn offset(&self) -> (f32, f32) {
        let (w, h) = self.size;
        let scale = self.scale();
        (
            (w as f32 - FIELD_WIDTH * scale) / 2.0,
            (h as f32 - FIELD_HEIGHT * scale) / 2.0,
        )
    }

    /// Convert field coordinates to normalized device coordinates
    /// Field y grows downward; NDC y grows upward
    pub fn field_to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        let (w, h) = self.size;
        let scale = self.scale();
        let (ox, oy) = self.offset();
        let sx = ox + x * scale;
        let sy = oy + y * scale;
        (sx / w as f32 * 2.0 - 1.0, 1.0 - sy / h as f32 * 2.0)
    }

    /// Convert a surface x (e.g. cursor position) to field x
    pub fn surface_to_field_x(&self, x: f32) -> f32 {
        let scale = self.scale();
        if scale <= 0.0 {
            return x;
        }
        (x - self.offset().0) / scale
    }
}
