use glam::Vec2;

use crate::tracking::hand::{HandFrame, BONES, KEYPOINT_COUNT};

/// One target per hand keypoint, in canvas pixels. The 21 joint particles
/// persist frame to frame; only these rest positions move, so the field
/// remaps them in place instead of regenerating.
pub fn keypoint_targets(frame: &HandFrame, size: Vec2) -> [Vec2; KEYPOINT_COUNT] {
    frame.to_canvas(size)
}

/// Interior points along each bone, `subdivisions` segments per bone.
///
/// These fill in the skeleton visually and are fully determined by the
/// frame's endpoint keypoints, so they are ephemeral: rebuilt on every
/// detection and drawn directly, never integrated.
pub fn connector_points(joints: &[Vec2; KEYPOINT_COUNT], subdivisions: usize) -> Vec<Vec2> {
    if subdivisions < 2 {
        return Vec::new();
    }
    let mut points = Vec::with_capacity(BONES.len() * (subdivisions - 1));
    for &(a, b) in BONES.iter() {
        let (start, end) = (joints[a], joints[b]);
        for i in 1..subdivisions {
            let t = i as f32 / subdivisions as f32;
            points.push(start.lerp(end, t));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::hand::INDEX_FINGER_TIP;

    fn uniform_frame(x: f32, y: f32) -> HandFrame {
        HandFrame {
            keypoints: [Vec2::new(x, y); KEYPOINT_COUNT],
        }
    }

    #[test]
    fn keypoint_targets_apply_mirror() {
        let frame = uniform_frame(0.2, 0.5);
        let targets = keypoint_targets(&frame, Vec2::new(1000.0, 800.0));
        assert_eq!(targets[INDEX_FINGER_TIP], Vec2::new(800.0, 400.0));
    }

    #[test]
    fn connector_count_is_bones_times_interior_points() {
        let joints = [Vec2::ZERO; KEYPOINT_COUNT];
        let points = connector_points(&joints, 8);
        assert_eq!(points.len(), BONES.len() * 7);
    }

    #[test]
    fn connectors_lie_on_the_bone() {
        let mut joints = [Vec2::ZERO; KEYPOINT_COUNT];
        joints[0] = Vec2::new(0.0, 0.0);
        joints[1] = Vec2::new(80.0, 0.0);
        let points = connector_points(&joints, 4);
        // first bone is (0, 1): expect its interior points at 20, 40, 60
        assert_eq!(points[0], Vec2::new(20.0, 0.0));
        assert_eq!(points[1], Vec2::new(40.0, 0.0));
        assert_eq!(points[2], Vec2::new(60.0, 0.0));
    }

    #[test]
    fn degenerate_subdivision_yields_nothing() {
        let joints = [Vec2::ZERO; KEYPOINT_COUNT];
        assert!(connector_points(&joints, 1).is_empty());
        assert!(connector_points(&joints, 0).is_empty());
    }
}
