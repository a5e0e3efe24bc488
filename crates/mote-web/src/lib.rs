pub mod runner;

pub use runner::FieldRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut FieldRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Field not initialized. Call field_init() first.");
        f(runner)
    })
}

/// Create the field for a `width` x `height` canvas. Call once, before
/// anything else; the idle disc scene is seeded immediately. `seed`
/// drives the layout randomness — pass `Date.now()` for a fresh scene
/// per page load.
#[wasm_bindgen]
pub fn field_init(width: f32, height: f32, seed: f64) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(FieldRunner::new(width, height, seed as u64));
    });

    log::info!("mote: initialized {}x{}", width, height);
}

/// Replace the tunables from a JSON string; a parse failure is logged and
/// the previous config stays in effect.
#[wasm_bindgen]
pub fn field_load_config(json: &str) {
    with_runner(|r| r.load_config(json));
}

/// Advance the field by one frame delta (seconds) and rebuild the dot
/// buffer. Call from `requestAnimationFrame`.
#[wasm_bindgen]
pub fn field_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn field_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

/// Switch to the idle disc scene (also the empty-text fallback).
#[wasm_bindgen]
pub fn field_set_sphere() {
    with_runner(|r| r.set_sphere());
}

/// Switch to the text scene. `rgba` is the pixel block of an offscreen
/// canvas where JS has rendered the requested text. Returns false if the
/// raster does not match the given dimensions.
#[wasm_bindgen]
pub fn field_set_text_raster(rgba: &[u8], width: u32, height: u32) -> bool {
    with_runner(|r| r.set_text_raster(rgba, width, height))
}

/// Switch to the live hand-skeleton scene.
#[wasm_bindgen]
pub fn field_set_skeleton() {
    with_runner(|r| r.set_skeleton());
}

/// Forward a detection result: 21 normalized keypoints as 42 floats
/// `[x0, y0, x1, y1, ...]`, origin top-left of the camera frame.
#[wasm_bindgen]
pub fn field_hand_frame(landmarks: &[f32]) {
    with_runner(|r| r.hand_frame(landmarks));
}

/// Forward an empty detection result (no hand found).
#[wasm_bindgen]
pub fn field_hand_lost() {
    with_runner(|r| r.hand_lost());
}

// ---- Data accessors ----

/// Pointer into WASM linear memory: `get_dot_count() * 4` floats of
/// (x, y, radius, hue) per dot.
#[wasm_bindgen]
pub fn get_dots_ptr() -> *const f32 {
    with_runner(|r| r.dots_ptr())
}

#[wasm_bindgen]
pub fn get_dot_count() -> u32 {
    with_runner(|r| r.dot_count())
}

/// Whether the influence source currently tracks a hand (status display).
#[wasm_bindgen]
pub fn get_tracking_active() -> bool {
    with_runner(|r| r.tracking_active())
}

/// Active scene tag: 0 = sphere, 1 = text, 2 = skeleton.
#[wasm_bindgen]
pub fn get_scene_kind() -> u32 {
    with_runner(|r| r.scene_kind())
}
