pub mod editor;
pub mod label;
pub mod text_input;

pub use editor::{Editor, EditorStyle};
pub use label::Label;
pub use text_input::TextInputState;
