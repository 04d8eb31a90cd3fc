use colored::*;

use crate::controller::ArenaController;
use crate::rating::RatingSubmission;
use crate::render::{char_count, models_table, paint};

// Add color constants
const CYAN: &str = "\x1b[36m";
const BRIGHT_CYAN: &str = "\x1b[96m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

pub(super) fn print_help(rating_open: bool) {
    println!("\n{CYAN}Model Arena Commands{RESET}");
    println!("{BRIGHT_CYAN}{}{RESET}", "=".repeat(60));

    if rating_open {
        println!("{GREEN}set <code> <1-100>{RESET}  - Score one attribute (e.g. set RL 87)");
        println!("{GREEN}review <text>{RESET}       - Replace the review text");
        println!("{GREEN}show{RESET}                - Show the rating form again");
        println!("{GREEN}submit{RESET}              - Submit the rating");
        println!("{GREEN}cancel, close{RESET}       - Discard the rating");
        println!("{GREEN}rate <id>{RESET}           - Discard this rating and rate another model");
    } else {
        println!("{GREEN}list{RESET}                - Show the filter bar and model cards");
        println!("{GREEN}table{RESET}               - Show visible models as a table");
        println!("{GREEN}filter <category>{RESET}   - all, coding or a company name");
        println!("{GREEN}search [term]{RESET}       - Search name, company, description and tags");
        println!("{GREEN}rate <id>{RESET}           - Rate a model");
        println!("{GREEN}details <id>{RESET}        - Show model details");
    }
    println!("{GREEN}music{RESET}               - Play or pause the background music");
    println!("{GREEN}help{RESET}                - Show this help message");
    println!("{GREEN}clear{RESET}               - Clear the screen");
    println!("{GREEN}exit, bye, quit{RESET}     - Exit");
    println!();
}

pub(super) fn print_cards(controller: &ArenaController) {
    println!();
    print!("{}", paint(&controller.filter_bar_view()));
    let search = &controller.filter().search;
    if !search.is_empty() {
        println!("{} {}", "search:".bright_black(), search.yellow());
    }
    println!();
    print!("{}", paint(&controller.cards_view()));
    let summary = format!(
        "Showing {} of {} models",
        controller.visible().len(),
        controller.catalog().len()
    );
    println!("{}", summary.bright_green());
}

pub(super) fn print_table(controller: &ArenaController) {
    let visible = controller.visible();
    if visible.is_empty() {
        println!("{}", "No results found.".yellow());
        return;
    }
    println!("\n{}", models_table(&visible));
}

pub(super) fn print_modal(controller: &ArenaController) {
    if let Some(view) = controller.modal_view() {
        print!("{}", paint(&view));
    }
}

pub(super) fn print_review_count(controller: &ArenaController) {
    if let Ok(draft) = controller.modal().draft() {
        println!("{}", char_count(draft).bright_black());
    }
}

pub(super) fn print_submitted(submission: &RatingSubmission) {
    println!(
        "{} {}",
        "Thank you for your rating!".bright_green().bold(),
        format!("({})", submission.id).bright_black()
    );
}

pub(super) fn print_notice(message: &str) {
    println!("{}", message.yellow());
}
