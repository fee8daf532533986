//! Rendering module
//!
//! The simulation produces a [`Frame`] per tick; a [`RenderSurface`] consumes
//! it. [`VertexSurface`] tessellates frames into vertex batches for the GPU.

pub mod frame;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use frame::{DrawablePolygon, Frame, RenderSurface};
pub use surface::VertexSurface;
pub use vertex::Vertex;
