mod debounce;
mod suggest_events;
mod suggest_render;
mod suggest_state;

pub use debounce::Debouncer;
pub use suggest_events::{handle_dropdown_key, handle_mouse_click};
pub use suggest_render::render_dropdown;
pub use suggest_state::{MIN_QUERY_LEN, SuggestState};
