use std::{
    fs,
    io::{self, BufRead, Write},
    iter::Sum,
    path::PathBuf,
    process::ExitCode,
};

use log::{debug, warn};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    error::{DriverError, Error},
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, tokenize},
    },
};

/// Prompt shown by the interactive driver when none is configured.
pub const DEFAULT_PROMPT: &str = "calc> ";

/// What happened to a single line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line was empty and was not evaluated.
    Skipped,
    /// The line evaluated to this value.
    Value(u64),
    /// The line was split into these tokens, ending with end-of-input.
    Tokens(Vec<Token>),
    /// The line failed to evaluate.
    Failed(Error),
}

/// What the driver does with each line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Evaluate the line and report the sum.
    #[default]
    Evaluate,
    /// Report the tokens of the line instead of evaluating it.
    Tokens,
}

impl Mode {
    /// Processes one line unless it is empty.
    ///
    /// Only a line with no characters at all is skipped; a line of spaces is
    /// processed like any other.
    ///
    /// # Examples
    /// ```
    /// use calc::{
    ///     driver::{Mode, Outcome},
    ///     interpreter::lexer::Token,
    /// };
    ///
    /// assert_eq!(Mode::Tokens.process(""), Outcome::Skipped);
    /// assert_eq!(Mode::Tokens.process(" + "),
    ///            Outcome::Tokens(vec![Token::Plus, Token::EndOfInput]));
    /// assert_eq!(Mode::Evaluate.process("2 + 2"), Outcome::Value(4));
    /// ```
    #[must_use]
    pub fn process(self, line: &str) -> Outcome {
        if line.is_empty() {
            return Outcome::Skipped;
        }

        let result = match self {
            Self::Evaluate => evaluate(line).map(Outcome::Value),
            Self::Tokens => tokenize(line).map(Outcome::Tokens).map_err(Error::from),
        };
        result.unwrap_or_else(Outcome::Failed)
    }
}

/// Where the driver reads its lines from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A single line given directly.
    Expression(String),
    /// A file read line by line.
    File(PathBuf),
    /// Standard input, read line by line until end-of-input.
    Stdin,
}

/// Everything the driver needs to know about one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where lines come from.
    pub source: Source,
    /// What to do with each line.
    pub mode:   Mode,
    /// Prompt shown when standard input is a terminal.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { source: Source::Stdin,
               mode:   Mode::default(),
               prompt: DEFAULT_PROMPT.to_string(), }
    }
}

/// Counts of evaluated and failed lines over a whole session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines that were evaluated, successfully or not.
    pub evaluated: usize,
    /// Lines whose evaluation failed.
    pub failed:    usize,
}

impl Summary {
    /// Counts one more line with the given outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped => {},
            Outcome::Value(_) | Outcome::Tokens(_) => self.evaluated += 1,
            Outcome::Failed(_) => {
                self.evaluated += 1;
                self.failed += 1;
            },
        }
    }

    /// Returns `true` if no evaluated line failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Returns the process exit status for this session.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    }
}

impl Sum for Summary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |total, part| Self { evaluated: total.evaluated + part.evaluated,
                                                        failed:    total.failed + part.failed, })
    }
}

/// Evaluates one line unless it is empty.
///
/// Only a line with no characters at all is skipped; a line of spaces is
/// evaluated (and fails, as it holds no integer).
///
/// # Examples
/// ```
/// use calc::driver::{Outcome, process_line};
///
/// assert_eq!(process_line(""), Outcome::Skipped);
/// assert_eq!(process_line("2 + 2"), Outcome::Value(4));
/// assert!(matches!(process_line("2 * 2"), Outcome::Failed(_)));
/// ```
#[must_use]
pub fn process_line(line: &str) -> Outcome {
    Mode::Evaluate.process(line)
}

/// Writes an outcome: values go to `out`, errors go to `err`.
fn report<W: Write, E: Write>(outcome: &Outcome, out: &mut W, err: &mut E) -> io::Result<()> {
    match outcome {
        Outcome::Skipped => Ok(()),
        Outcome::Value(value) => writeln!(out, "{value}"),
        Outcome::Tokens(tokens) => tokens.iter().try_for_each(|token| writeln!(out, "{token}")),
        Outcome::Failed(e) => writeln!(err, "{e}"),
    }
}

/// Processes every line of `input` until it is exhausted.
///
/// A failing line is reported and evaluation continues with the next one.
///
/// # Errors
/// Returns an error if reading the input or writing the output fails.
///
/// # Examples
/// ```
/// use calc::driver::{Mode, run_batch};
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let summary = run_batch("1+2\n\n3 + 4\n".as_bytes(), Mode::Evaluate, &mut out, &mut err).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "3\n7\n");
/// assert_eq!(summary.evaluated, 2);
/// assert!(summary.is_success());
/// ```
pub fn run_batch<R, W, E>(input: R, mode: Mode, out: &mut W, err: &mut E) -> io::Result<Summary>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut summary = Summary::default();

    for line in input.lines() {
        let line = line?;
        let outcome = mode.process(line.strip_suffix('\r').unwrap_or(&line));
        summary.record(&outcome);
        report(&outcome, out, err)?;
    }

    debug!("batch finished: {} evaluated, {} failed", summary.evaluated, summary.failed);
    Ok(summary)
}

/// Runs a non-interactive session described by `config`.
///
/// [`Source::Stdin`] reads lines from `stdin`; the caller decides beforehand
/// whether a terminal should get [`run_repl`] instead.
///
/// # Errors
/// Returns an error if the input file cannot be read, or if reading input or
/// writing output fails. Lines that fail to evaluate are reported and counted
/// in the [`Summary`] instead.
///
/// # Examples
/// ```
/// use calc::driver::{Config, Mode, Source, run};
///
/// let config = Config { source: Source::Expression("1+23".to_string()),
///                       mode: Mode::Tokens,
///                       ..Config::default() };
/// let mut out = Vec::new();
/// let summary = run(&config, std::io::empty(), &mut out, &mut std::io::sink()).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "INTEGER 1\nPLUS\nINTEGER 23\nEOF\n");
/// assert!(summary.is_success());
/// ```
pub fn run<R, W, E>(config: &Config, stdin: R, out: &mut W, err: &mut E) -> Result<Summary, DriverError>
    where R: BufRead,
          W: Write,
          E: Write
{
    match &config.source {
        Source::Expression(line) => {
            let outcome = config.mode.process(line);
            let mut summary = Summary::default();
            summary.record(&outcome);
            report(&outcome, out, err)?;
            Ok(summary)
        },
        Source::File(path) => {
            let script = fs::read_to_string(path).map_err(|source| DriverError::UnreadableFile {
                path: path.clone(),
                source,
            })?;
            Ok(run_batch(script.as_bytes(), config.mode, out, err)?)
        },
        Source::Stdin => Ok(run_batch(stdin, config.mode, out, err)?),
    }
}

/// Runs the interactive prompt until end-of-input.
///
/// Empty lines are skipped, `Ctrl-C` discards the current line, and `Ctrl-D`
/// ends the session.
///
/// # Errors
/// Returns an error if the terminal cannot be set up or read from.
pub fn run_repl(prompt: &str, mode: Mode) -> Result<Summary, ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    let mut summary = Summary::default();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }

                let outcome = mode.process(&line);
                summary.record(&outcome);
                report(&outcome, &mut stdout, &mut stderr)?;
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                warn!("readline failed: {e}");
                return Err(e);
            },
        }
    }

    Ok(summary)
}
