//! Rendering projection
//!
//! Everything here is a pure function of a [`GridState`](crate::GridState):
//! the canvas never stores colors of its own, it is recomputed from the model.

pub mod layout;
pub mod paint;
pub mod raster;

pub use layout::{hit_test, layout_cells, CellBox, Rect};
pub use paint::{paint_commands, PaintCommand};
pub use raster::{rasterize, Frame};
