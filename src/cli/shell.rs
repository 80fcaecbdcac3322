//! Shell front end: a rustyline REPL for interactive use and a line-oriented
//! script mode (driven by `TURFBOOK_CLI_SCRIPT`) for tests and pipelines.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context as ReadlineContext, Editor, Helper};
use shell_words::split;

use crate::catalog::{City, CityFilter};
use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output;

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("TURFBOOK_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<TurfbookHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(TurfbookHelper));

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();
                if dispatch_line(context, line)? == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.handle_interrupt()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        if dispatch_line(context, line.trim())? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Tokenizes one input line and hands it to the command dispatcher.
/// Recoverable command failures are reported and the loop continues.
fn dispatch_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::error(format!("Could not parse input: {err}"));
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    context.last_command = Some(line.to_string());

    match context.dispatch(&raw.to_lowercase(), raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

/// Tab completion: command names in first position, then the fixed
/// vocabulary of the command being typed (cities, booking fields, themes).
struct TurfbookHelper;

impl Completer for TurfbookHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = completion_candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Helper for TurfbookHelper {}

impl Hinter for TurfbookHelper {
    type Hint = String;
}

impl Highlighter for TurfbookHelper {}

impl Validator for TurfbookHelper {}

/// Completion pool for the word under the cursor, with the offset where the
/// replacement starts.
fn completion_candidates(prefix: &str) -> (usize, Vec<String>) {
    let start = prefix
        .rfind(char::is_whitespace)
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let word = prefix[start..].to_ascii_lowercase();
    let earlier: Vec<&str> = prefix[..start].split_whitespace().collect();

    let pool: Vec<String> = match earlier.as_slice() {
        [] => ShellContext::command_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        [command] => argument_pool(&command.to_ascii_lowercase()),
        _ => Vec::new(),
    };

    let matches = pool
        .into_iter()
        .filter(|candidate| candidate.to_ascii_lowercase().starts_with(&word))
        .collect();
    (start, matches)
}

fn argument_pool(command: &str) -> Vec<String> {
    match command {
        "filter" | "search" => std::iter::once(CityFilter::All.as_str())
            .chain(City::ALL.iter().map(|city| city.name()))
            .map(str::to_string)
            .collect(),
        "set" => ["name", "phone", "date", "slot"]
            .iter()
            .map(|field| field.to_string())
            .collect(),
        "theme" => ["light", "dark", "plain"]
            .iter()
            .map(|theme| theme.to_string())
            .collect(),
        _ => Vec::new(),
    }
}
