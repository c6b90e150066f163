mod bounds;
mod rect;

pub use bounds::{GlobalBounds, MAX_CANVAS_DIMENSION, calculate_global_bounds, even_canvas, even_up};
pub use rect::WorldRect;
