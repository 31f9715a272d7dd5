use super::constants::{LANDSCAPE_ROTATION_DEG, PORTRAIT_ROTATION_DEG};

/// Layout of the phone frame around the preview surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// The other orientation. Toggling has no guard conditions.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    #[inline]
    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }

    /// Presentational rotation applied to the outer container, in degrees.
    #[inline]
    pub fn container_rotation_deg(self) -> f32 {
        match self {
            Orientation::Portrait => PORTRAIT_ROTATION_DEG,
            Orientation::Landscape => LANDSCAPE_ROTATION_DEG,
        }
    }

    /// CSS `transform` value for the outer container.
    pub fn container_css_transform(self) -> String {
        format!("rotate({}deg)", self.container_rotation_deg())
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}
