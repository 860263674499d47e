//! Mapping from domain coordinates to pixel-space markers

use bytemuck::{Pod, Zeroable};
use dots_physics::{Vector2D, MARKER_FRACTION};
use glam::{DVec2, IVec2};

/// Integer pixel rectangle, origin at the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// What the renderer draws for one particle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    pub point: IVec2,
    pub rect: PixelRect,
}

/// GPU instance layout for a marker (matches WGSL)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MarkerInstance {
    /// x, y, w, h in pixels
    pub rect: [f32; 4],
}

impl Marker {
    /// Project a normalized position onto a `width x height` viewport
    pub fn project(position: Vector2D, width: u16, height: u16) -> Self {
        let viewport = DVec2::new(f64::from(width), f64::from(height));
        // `as` casts truncate toward zero
        let point = (DVec2::from(position) * viewport).as_ivec2();
        let size = (viewport * MARKER_FRACTION).as_uvec2();
        let origin = point - (size / 2).as_ivec2();
        let rect = PixelRect {
            x: origin.x,
            y: origin.y,
            w: size.x,
            h: size.y,
        };
        Self { point, rect }
    }

    pub fn to_instance(&self) -> MarkerInstance {
        MarkerInstance {
            rect: [
                self.rect.x as f32,
                self.rect.y as f32,
                self.rect.w as f32,
                self.rect.h as f32,
            ],
        }
    }
}
