//! Fitting the view canvas into the output surface

use glam::{Affine2, Vec2};

use crate::sim::Rect;

/// Uniform scale that fits `canvas` inside `window`, letterboxing the rest
pub fn fit_scale(canvas: &Rect, window: &Rect) -> f32 {
    (window.width() / canvas.width()).min(window.height() / canvas.height())
}

/// View-to-output transform: the canvas center lands on the window center and
/// the canvas is scaled to fit
pub fn letterbox(canvas: &Rect, window: &Rect) -> Affine2 {
    let scale = fit_scale(canvas, window);
    Affine2::from_translation(window.center())
        * Affine2::from_scale(Vec2::splat(scale))
        * Affine2::from_translation(-canvas.center())
}
