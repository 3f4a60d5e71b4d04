mod events;
mod input_state;
mod render;
mod state;

pub use input_state::InputState;
pub use state::{App, DEFAULT_IMAGE_QUERY};
