//! View-side components: camera, output fitting and the trail

pub mod camera;
pub mod trail;
pub mod viewport;

pub use camera::Camera;
pub use trail::{DrawableCircle, Trail};
pub use viewport::{fit_scale, letterbox};
