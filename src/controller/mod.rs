mod controller;
mod events;

pub use controller::ArenaController;
pub use events::{Render, UiEvent};
