//! Pixel viewport the markers are laid out in

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// Viewport uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _padding: [f32; 2],
    pub color: [f32; 4],
}

/// Logical drawing area. Markers are produced in this space; the surface may be any size
/// and is stretched to fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
    pub marker_color: Vec4,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Vec2::new(f32::from(width), f32::from(height)),
            marker_color: Vec4::ONE,
        }
    }

    pub fn to_uniform(&self) -> ViewportUniform {
        ViewportUniform {
            viewport: self.size.to_array(),
            _padding: [0.0; 2],
            color: self.marker_color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 32);
        let uniform = Viewport::new(100, 50).to_uniform();
        assert_eq!(uniform.viewport, [100.0, 50.0]);
        assert_eq!(uniform.color, [1.0; 4]);
    }
}
