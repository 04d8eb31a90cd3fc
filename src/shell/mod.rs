// Declare the display submodule
mod display;

// Declare the shell submodule (containing the shell_loop logic)
mod shell;

// Declare the command_handlers module
mod command_handlers;

// Re-export the public items
pub use command_handlers::{parse_command, Command};
pub use shell::shell_loop;
