mod loader;
mod types;

pub use loader::load;
pub use types::{Config, SliderConfig, SuggestConfig};
