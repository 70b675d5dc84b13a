mod input_field;
mod state;

pub use input_field::{DEFAULT_TEXT_AREA_HEIGHT, InputField, PASSWORD_MASK};
pub use state::VisualState;
