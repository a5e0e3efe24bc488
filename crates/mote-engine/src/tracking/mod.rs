//! Detector-facing types: the hand keypoint stream the bridge forwards
//! and the influence source the field consumes. The detector itself
//! (camera, inference, landmark extraction) lives entirely in JS.

pub mod hand;
pub mod influence;
