pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_panel_toggle;
pub use pointer::{wire_input_handlers, InputWiring};
