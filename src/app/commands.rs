//! Built-in command set.
//!
//! The first word of a submitted line is resolved against the built-ins
//! here; anything unrecognized is handed to the user's shell (see
//! [`crate::app::external`]). Commands never touch the display or the
//! session state directly; they report an outcome and the session applies
//! it.

use chrono::Local;

use super::external;

/// What a dispatched command asks the session to do.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Lines to append to the scrollback, in order.
    Output(Vec<String>),
    /// Empty the scrollback and erase the viewport.
    Clear,
    /// End the session.
    Exit,
}

/// Resolve and run one submitted line.
pub fn dispatch(input: &str) -> CommandOutcome {
    let trimmed = input.trim();
    let (name, args) = split_first_word(trimmed);

    match name {
        "" => CommandOutcome::Output(Vec::new()),
        "about" => CommandOutcome::Output(vec![
            "brine: a small shell with history and scrollback. Type `help` for commands."
                .to_string(),
        ]),
        "greet" => CommandOutcome::Output(vec![greet(args)]),
        "echo" => CommandOutcome::Output(vec![echo(args)]),
        "time" => CommandOutcome::Output(vec![format!(
            "Current date/time: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )]),
        "clear" => CommandOutcome::Clear,
        "help" => CommandOutcome::Output(help()),
        "exit" => CommandOutcome::Exit,
        _ => CommandOutcome::Output(external::run(trimmed)),
    }
}

/// Split a trimmed line into its command word and the remaining argument
/// text (`None` when there is nothing after the command word).
fn split_first_word(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => {
            let rest = rest.trim_start();
            (name, (!rest.is_empty()).then_some(rest))
        }
        None => (line, None),
    }
}

fn greet(name: Option<&str>) -> String {
    format!(
        "Hello, {}",
        name.unwrap_or("John Doe (please provide a name after `greet`)")
    )
}

fn echo(message: Option<&str>) -> String {
    message.unwrap_or("*cricket noises*").to_string()
}

fn help() -> Vec<String> {
    vec![
        "Built-in commands:".to_string(),
        "  about         what this is".to_string(),
        "  greet [name]  say hello".to_string(),
        "  echo [text]   print text".to_string(),
        "  time          print the local date and time".to_string(),
        "  clear         wipe the scrollback".to_string(),
        "  help          this list".to_string(),
        "  exit          leave the shell (also Ctrl+Q)".to_string(),
        "Anything else runs through your shell.".to_string(),
    ]
}
