// Background fitting against the preview surface.
//
// The background is scaled uniformly and centered on the axis that has space
// left over. Which axis is matched depends on the ratio comparison and on the
// orientation: landscape inverts the portrait choice. The image itself is
// never rotated; landscape is presented by rotating the surrounding container.

use super::orientation::Orientation;
use glam::Vec2;

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn ratio(self) -> f32 {
        self.width / self.height
    }
}

/// Uniform scale and top-left offset for the background node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundFit {
    pub scale: f32,
    pub offset: Vec2,
}

impl BackgroundFit {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Size of the texture once this fit is applied.
    #[inline]
    pub fn scaled(&self, texture: Size) -> Size {
        Size::new(texture.width * self.scale, texture.height * self.scale)
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Width,
    Height,
}

#[inline]
fn fit_axis(viewport: Size, texture: Size, axis: Axis) -> BackgroundFit {
    match axis {
        Axis::Width => {
            let scale = viewport.width / texture.width;
            BackgroundFit {
                scale,
                offset: Vec2::new(0.0, (viewport.height - texture.height * scale) / 2.0),
            }
        }
        Axis::Height => {
            let scale = viewport.height / texture.height;
            BackgroundFit {
                scale,
                offset: Vec2::new((viewport.width - texture.width * scale) / 2.0, 0.0),
            }
        }
    }
}

pub fn fit_background(viewport: Size, texture: Size, orientation: Orientation) -> BackgroundFit {
    let screen_wider = viewport.ratio() > texture.ratio();
    let axis = match (orientation, screen_wider) {
        (Orientation::Portrait, true) => Axis::Width,
        (Orientation::Portrait, false) => Axis::Height,
        (Orientation::Landscape, true) => Axis::Height,
        (Orientation::Landscape, false) => Axis::Width,
    };
    fit_axis(viewport, texture, axis)
}
