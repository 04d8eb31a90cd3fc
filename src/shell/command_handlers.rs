use crate::controller::UiEvent;
use crate::filter::Category;

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Clear,
    /// Redraw the filter bar and cards
    List,
    /// Compact table of the visible models
    Table,
    /// Redraw the rating form
    Show,
    /// Forward to the controller
    Event(UiEvent),
    /// Recognised command with bad arguments; holds the usage line
    Usage(&'static str),
    Unknown(String),
}

/// Parses one line of shell input.
///
/// Rating commands (`set`, `review`, `submit`, `cancel`, `show`) are only
/// recognised while a rating form is open.
pub fn parse_command(input: &str, rating_open: bool) -> Command {
    let input = input.trim();
    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };
    let word = word.to_lowercase();

    match word.as_str() {
        "exit" | "quit" | "bye" => Command::Exit,
        "help" => Command::Help,
        "clear" => Command::Clear,
        "list" | "ls" => Command::List,
        "table" => Command::Table,
        "music" => Command::Event(UiEvent::ToggleMusic),
        "filter" if rest.is_empty() => Command::Usage("filter <all|coding|company>"),
        "filter" => Command::Event(UiEvent::SelectFilter(Category::parse(rest))),
        "search" => Command::Event(UiEvent::Search(rest.to_string())),
        "rate" => match rest.parse::<u32>() {
            Ok(id) => Command::Event(UiEvent::Rate(id)),
            Err(_) => Command::Usage("rate <model id>"),
        },
        "details" => match rest.parse::<u32>() {
            Ok(id) => Command::Event(UiEvent::Details(id)),
            Err(_) => Command::Usage("details <model id>"),
        },
        "set" if rating_open => parse_set(rest),
        "review" if rating_open => Command::Event(UiEvent::Review(rest.to_string())),
        "submit" if rating_open => Command::Event(UiEvent::Submit),
        "cancel" | "close" if rating_open => Command::Event(UiEvent::Cancel),
        "show" if rating_open => Command::Show,
        _ => Command::Unknown(input.to_string()),
    }
}

// `set <code> <score>`; the code may also be a full attribute name.
fn parse_set(args: &str) -> Command {
    const USAGE: &str = "set <code> <1-100>";
    let Some((code, value)) = args.rsplit_once(char::is_whitespace) else {
        return Command::Usage(USAGE);
    };
    match value.parse::<i64>() {
        Ok(value) => Command::Event(UiEvent::SetScore {
            code: code.trim().to_string(),
            value,
        }),
        Err(_) => Command::Usage(USAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_commands() {
        assert_eq!(parse_command("  QUIT ", false), Command::Exit);
        assert_eq!(
            parse_command("filter Anthropic", false),
            Command::Event(UiEvent::SelectFilter(Category::Company("Anthropic".into())))
        );
        assert_eq!(parse_command("filter", false), Command::Usage("filter <all|coding|company>"));
        assert_eq!(
            parse_command("search  Open Source ", false),
            Command::Event(UiEvent::Search("Open Source".into()))
        );
        assert_eq!(parse_command("search", false), Command::Event(UiEvent::Search(String::new())));
        assert_eq!(parse_command("rate 3", false), Command::Event(UiEvent::Rate(3)));
        assert_eq!(parse_command("rate three", false), Command::Usage("rate <model id>"));
    }

    #[test]
    fn test_rating_commands_need_open_form() {
        assert_eq!(parse_command("submit", false), Command::Unknown("submit".into()));
        assert_eq!(parse_command("submit", true), Command::Event(UiEvent::Submit));
        assert_eq!(parse_command("close", true), Command::Event(UiEvent::Cancel));
    }

    #[test]
    fn test_set_accepts_codes_and_names() {
        assert_eq!(
            parse_command("set RL 87", true),
            Command::Event(UiEvent::SetScore { code: "RL".into(), value: 87 })
        );
        assert_eq!(
            parse_command("set Reasoning & Logic 12", true),
            Command::Event(UiEvent::SetScore { code: "Reasoning & Logic".into(), value: 12 })
        );
        assert_eq!(parse_command("set RL", true), Command::Usage("set <code> <1-100>"));
    }

    #[test]
    fn test_review_keeps_text() {
        assert_eq!(
            parse_command("review Great at   code", true),
            Command::Event(UiEvent::Review("Great at   code".into()))
        );
    }
}
