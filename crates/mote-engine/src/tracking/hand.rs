use glam::Vec2;

/// Landmarks per tracked hand, fixed by the detector's topology.
pub const KEYPOINT_COUNT: usize = 21;

/// Landmark index of the index fingertip — the designated influence point.
pub const INDEX_FINGER_TIP: usize = 8;

/// Bone index-pairs of the 21-point hand topology: four joints per finger
/// chain plus the palm edge.
pub const BONES: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4), // thumb
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8), // index
    (5, 9),
    (9, 10),
    (10, 11),
    (11, 12), // middle
    (9, 13),
    (13, 14),
    (14, 15),
    (15, 16), // ring
    (13, 17),
    (17, 18),
    (18, 19),
    (19, 20), // pinky
    (0, 17),  // palm edge
];

/// Convert a normalized detector keypoint (`x, y ∈ [0,1]`, origin at the
/// sensor's physical left) to canvas pixels, mirroring horizontally so
/// the rendered scene matches the self-view expectation.
pub fn mirror_to_canvas(norm: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(size.x - norm.x * size.x, norm.y * size.y)
}

/// One detection result: 21 normalized keypoints for a single tracked hand.
#[derive(Debug, Clone, Copy)]
pub struct HandFrame {
    pub keypoints: [Vec2; KEYPOINT_COUNT],
}

impl HandFrame {
    /// Build a frame from the flat `[x0, y0, x1, y1, ...]` layout the
    /// bridge receives. Returns `None` unless exactly 21 pairs arrive.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != KEYPOINT_COUNT * 2 {
            return None;
        }
        Some(Self {
            keypoints: std::array::from_fn(|i| Vec2::new(data[2 * i], data[2 * i + 1])),
        })
    }

    /// All keypoints mapped to canvas pixels with the mirror convention.
    pub fn to_canvas(&self, size: Vec2) -> [Vec2; KEYPOINT_COUNT] {
        std::array::from_fn(|i| mirror_to_canvas(self.keypoints[i], size))
    }
}
