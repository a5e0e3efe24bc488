use glam::Vec2;

/// Sample an RGBA raster of pre-rendered text: walk every `stride`-th
/// pixel in both axes and keep a target wherever the alpha channel
/// exceeds `threshold`. The raster itself comes from the render surface
/// collaborator (an offscreen canvas on the JS side).
///
/// Returns `None` if `rgba` is not a `width * height` RGBA block.
pub fn glyph_targets(
    rgba: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    threshold: u8,
) -> Option<Vec<Vec2>> {
    if rgba.len() != width * height * 4 || stride == 0 {
        return None;
    }

    let mut targets = Vec::new();
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let alpha = rgba[(y * width + x) * 4 + 3];
            if alpha > threshold {
                targets.push(Vec2::new(x as f32, y as f32));
            }
            x += stride;
        }
        y += stride;
    }
    Some(targets)
}
