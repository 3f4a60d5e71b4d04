mod rotation;
mod slider_render;
mod slider_state;

pub use rotation::RotationTimer;
pub use slider_render::render_showcase;
pub use slider_state::{FALLBACK_TEXT, Slide, SliderState, search_query};
