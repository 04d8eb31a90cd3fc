use std::error::Error;
use std::io::Write;

use rustyline::DefaultEditor;
use tracing::{info, warn};

use super::command_handlers::{parse_command, Command};
use super::display::{
    print_cards, print_help, print_modal, print_notice, print_review_count, print_submitted,
    print_table,
};
use crate::audio::ToggleState;
use crate::controller::{ArenaController, Render, UiEvent};

// --- Main Shell Loop ---

/// Runs the interactive browser until the user exits or closes stdin.
pub fn shell_loop(controller: &mut ArenaController) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("Starting shell session");
    print_help(false);
    print_cards(controller);

    let mut rl = DefaultEditor::new()?;

    loop {
        let prompt = match controller.modal().draft() {
            Ok(draft) => format!("[rating {}] > ", draft.model_name()),
            Err(_) => "arena> ".to_string(),
        };

        match rl.readline(&prompt) {
            Ok(input) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);

                match parse_command(input, controller.modal().is_open()) {
                    Command::Exit => {
                        println!("Goodbye!");
                        break;
                    }
                    Command::Help => print_help(controller.modal().is_open()),
                    Command::Clear => {
                        print!("\x1B[2J\x1B[1;1H");
                        std::io::stdout().flush()?;
                    }
                    Command::List => print_cards(controller),
                    Command::Table => print_table(controller),
                    Command::Show => print_modal(controller),
                    Command::Usage(usage) => println!("Usage: {}", usage),
                    Command::Unknown(text) => {
                        let hint = if controller.modal().is_open() {
                            "rating commands"
                        } else {
                            "a list of commands"
                        };
                        print_notice(&format!(
                            "Unknown command '{}'. Type 'help' for {}.",
                            text, hint
                        ));
                    }
                    Command::Event(event) => handle_event(controller, event),
                }
            }
            Err(_) => {
                println!("Goodbye!");
                break;
            }
        }
    }
    Ok(())
}

fn handle_event(controller: &mut ArenaController, event: UiEvent) {
    let is_review = matches!(event, UiEvent::Review(_));
    match controller.dispatch(event) {
        Ok(Render::Cards) => print_cards(controller),
        Ok(Render::Modal) if is_review => print_review_count(controller),
        Ok(Render::Modal) => print_modal(controller),
        Ok(Render::Submitted(submission)) => {
            print_submitted(&submission);
            print_cards(controller);
        }
        Ok(Render::ModalClosed) => {
            print_notice("Rating discarded.");
            print_cards(controller);
        }
        Ok(Render::Notice(message)) => print_notice(&message),
        Ok(Render::Music(state)) => match state {
            ToggleState::Playing => println!("{} music playing", state.glyph()),
            ToggleState::Paused => println!("{} music paused", state.glyph()),
            ToggleState::Idle => print_notice("Music could not be started."),
        },
        Ok(Render::Nothing) => {}
        Err(e) => {
            warn!("Command failed: {}", e);
            print_notice(&e.to_string());
        }
    }
}
