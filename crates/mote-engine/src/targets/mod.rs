//! Target generation: the three interchangeable strategies that produce
//! rest positions for the field, selected by the active scene kind.

pub mod disc;
pub mod glyph;
pub mod skeleton;

/// The closed set of scenes a field can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Idle/default disc layout.
    Sphere,
    /// Rasterized glyph coverage of user text.
    Text,
    /// Live hand skeleton driven by the detector stream.
    Skeleton,
}

impl SceneKind {
    /// Numeric tag read by the JS side for status display.
    pub fn as_u32(self) -> u32 {
        match self {
            SceneKind::Sphere => 0,
            SceneKind::Text => 1,
            SceneKind::Skeleton => 2,
        }
    }
}
