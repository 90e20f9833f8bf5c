//! ShapeTree Core Library
//!
//! A recursive tree of drawable shapes. Leaves and groups share one capability
//! ([`ShapeTrait`]): bounds, translation, point hit testing, selection and paint.
//! The [`Scene`] is the root group a host mutates, paints and clicks into.

pub mod scene;
pub mod shapes;
pub mod surface;

pub use scene::{Scene, SceneError, SceneResult};
pub use shapes::{Circle, Dot, Group, Rectangle, Shape, ShapeColor, ShapeId, ShapeTrait};
pub use surface::{StrokeStyle, Surface};
