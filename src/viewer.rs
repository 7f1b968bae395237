//! Line-oriented terminal front-end.
//!
//! Renders the controller state after every change and maps one line of
//! user input to controller commands. Everything runs synchronously on the
//! calling thread; the loop ends on `quit` or end of input.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::controller::Slideshow;
use crate::events::ViewerCommand;

const HELP: &str =
    "commands: next (n), back (b), go <number> (g), help (h), quit (q); a bare number jumps";

/// What one line of user input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// Commands to route into the controller, in order.
    Route(Vec<ViewerCommand>),
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

fn parse_line(line: &str) -> Input {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Input::Nothing;
    };
    match head.to_ascii_lowercase().as_str() {
        "n" | "next" => Input::Route(vec![ViewerCommand::Advance]),
        "b" | "back" | "prev" => Input::Route(vec![ViewerCommand::Retreat]),
        "g" | "go" => match tokens.next() {
            // `go 5` edits the stored input first, exactly like typing into
            // the field before pressing the button.
            Some(arg) => Input::Route(vec![
                ViewerCommand::EditJumpInput(arg.to_string()),
                ViewerCommand::AttemptJump,
            ]),
            // Bare `go` re-attempts with whatever input is stored.
            None => Input::Route(vec![ViewerCommand::AttemptJump]),
        },
        "h" | "help" | "?" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        other if other.parse::<i64>().is_ok() => Input::Route(vec![
            ViewerCommand::EditJumpInput(other.to_string()),
            ViewerCommand::AttemptJump,
        ]),
        other => Input::Unknown(other.to_string()),
    }
}

fn render(out: &mut impl Write, show: &Slideshow) -> std::io::Result<()> {
    let item = show.current_item();
    writeln!(
        out,
        "[{}/{}] {}",
        show.current_index() + 1,
        show.gallery().len(),
        item.caption
    )?;
    writeln!(out, "      {}", item.image.display())?;
    if let Some(message) = show.validation_error() {
        writeln!(out, "  !! {message}")?;
    }
    Ok(())
}

/// Run the interactive loop until `quit` or end of input.
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    show: &mut Slideshow,
    title: &str,
) -> Result<()> {
    writeln!(output, "{title}")?;
    render(&mut output, show)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match parse_line(&line?) {
            Input::Nothing => {}
            Input::Help => writeln!(output, "{HELP}")?,
            Input::Quit => break,
            Input::Unknown(word) => writeln!(output, "unrecognized command {word:?}; try help")?,
            Input::Route(commands) => {
                let mut redraw = false;
                for command in commands {
                    debug!(?command, "routing viewer command");
                    redraw |= show.apply(command);
                }
                if redraw {
                    render(&mut output, show)?;
                }
            }
        }
    }
    Ok(())
}
