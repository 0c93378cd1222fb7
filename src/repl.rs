use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::{Args, run_line};

const PROMPT: &str = "calc> ";

/// Runs the interactive read-eval-print loop until end of input.
///
/// Blank lines are skipped. A failed line is reported and the session
/// continues with the next one. Ctrl-C discards the current line; Ctrl-D ends
/// the session.
///
/// On a terminal, a caret under the echoed input marks where a failed line
/// went wrong. It is left out when token or tree views were printed in between.
pub fn run(args: &Args) -> ExitCode {
    let show_caret = io::stdin().is_terminal() && !args.tokens && !args.show_ast;

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            return ExitCode::FAILURE;
        },
    };

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    debug!(error = %e, "failed to record history entry");
                }
                if let Err(e) = run_line(&line, args) {
                    if show_caret {
                        eprintln!("{}^", " ".repeat(PROMPT.len() + e.position()));
                    }
                    eprintln!("{e}");
                }
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => return ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }
    }
}
