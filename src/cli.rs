use std::path::PathBuf;

use clap::Parser;

use crate::driver::{Config, DEFAULT_PROMPT, Mode, Source};

/// calc adds two non-negative integers written as `a + b`.
///
/// Without arguments it reads lines interactively, or from standard input when
/// it is not a terminal.
#[derive(Parser, Debug)]
#[command(name = "calc", version, about, long_about = None)]
pub struct Args {
    /// Tells calc to read lines from a file instead of a single expression.
    #[arg(short, long, requires = "contents")]
    pub file: bool,

    /// Prints the tokens of each line instead of evaluating it.
    #[arg(short, long)]
    pub tokens: bool,

    /// Prompt shown in interactive mode.
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    pub contents: Option<String>,
}

impl Args {
    /// Turns the parsed arguments into a driver configuration.
    ///
    /// # Examples
    /// ```
    /// use calc::{
    ///     cli::Args,
    ///     driver::{Mode, Source},
    /// };
    /// use clap::Parser;
    ///
    /// let config = Args::parse_from(["calc", "--tokens"]).into_config();
    /// assert_eq!(config.source, Source::Stdin);
    /// assert_eq!(config.mode, Mode::Tokens);
    /// ```
    #[must_use]
    pub fn into_config(self) -> Config {
        let source = match self.contents {
            Some(path) if self.file => Source::File(PathBuf::from(path)),
            Some(expression) => Source::Expression(expression),
            None => Source::Stdin,
        };
        let mode = if self.tokens { Mode::Tokens } else { Mode::Evaluate };

        Config { source,
                 mode,
                 prompt: self.prompt }
    }
}
