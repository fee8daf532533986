//! Simulation module
//!
//! All motion logic lives here. No rendering or platform dependencies:
//! time arrives as explicit `dt` / `now` arguments.

pub mod character;
pub mod collision;
pub mod debris;
pub mod history;
pub mod rect;
pub mod tick;

pub use character::{Character, Motion};
pub use collision::{Edge, boundary_violation};
pub use debris::{DebrisField, RectangularDebris};
pub use history::{History, HistorySample};
pub use rect::Rect;
pub use tick::{PlayerInput, World, tick};
