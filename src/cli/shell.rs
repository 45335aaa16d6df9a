//! Line sources for the shell: a rustyline editor for terminals and plain
//! stdin for piped scripts. Both feed the same dispatch loop.

use std::io::{self, BufRead, Lines, StdinLock};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use tracing::debug;

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::io as cli_io;

/// Set to run commands from stdin without the line editor.
pub const SCRIPT_MODE_ENV: &str = "FINTRACK_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = match std::env::var_os(SCRIPT_MODE_ENV) {
        Some(_) => CliMode::Script,
        None => CliMode::Interactive,
    };

    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Interactive => {
            cli_io::print_info("Type `help` to list commands.");
            let mut source = EditorSource::new(context.command_names())?;
            drive(&mut context, &mut source)
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut source = ScriptSource {
                lines: stdin.lock().lines(),
            };
            drive(&mut context, &mut source)
        }
    }
}

enum Input {
    Line(String),
    /// Ctrl-C on the editor; asks before leaving.
    Interrupted,
    Finished,
}

trait LineSource {
    fn next_line(&mut self, prompt: &str) -> Result<Input, CliError>;

    fn remember(&mut self, _line: &str) {}
}

fn drive(context: &mut ShellContext, source: &mut impl LineSource) -> Result<(), CliError> {
    while context.running {
        let line = match source.next_line(&context.prompt())? {
            Input::Line(line) => line,
            Input::Interrupted if context.confirm_exit()? => break,
            Input::Interrupted => continue,
            Input::Finished => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        source.remember(line);

        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    debug!(mode = ?context.mode(), status = %context.status(), "shell finished");
    Ok(())
}

struct ScriptSource<'a> {
    lines: Lines<StdinLock<'a>>,
}

impl LineSource for ScriptSource<'_> {
    fn next_line(&mut self, _prompt: &str) -> Result<Input, CliError> {
        match self.lines.next() {
            Some(line) => Ok(Input::Line(line?)),
            None => Ok(Input::Finished),
        }
    }
}

struct EditorSource {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl EditorSource {
    fn new(commands: Vec<&'static str>) -> Result<Self, CliError> {
        let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CommandHelper::new(commands)));
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn next_line(&mut self, prompt: &str) -> Result<Input, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => {
                cli_io::print_info("Exiting shell.");
                Ok(Input::Finished)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Completes the command word from the registered command names.
struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable_by_key(|name| name.to_ascii_lowercase());
        commands.dedup_by(|a, b| a.eq_ignore_ascii_case(*b));
        Self { commands }
    }

    fn candidates(&self, prefix: &str) -> Vec<Pair> {
        let prefix = prefix.to_ascii_lowercase();
        self.commands
            .iter()
            .filter(|name| name.to_ascii_lowercase().starts_with(&prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];
        // Arguments are free-form; only the first word completes.
        if before_cursor.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let word = before_cursor.trim_start();
        Ok((pos - word.len(), self.candidates(word)))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}

impl Helper for CommandHelper {}

/// Splits a command line into words, honouring shell-style quotes.
pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(input)
}
