use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// Ctrl+C, or the input stream was closed.
    #[error("input cancelled by user")]
    Cancelled,

    #[error("terminal error")]
    Terminal(#[from] dialoguer::Error),

    #[error("cannot read input")]
    Io(#[from] io::Error),
}

/// Source of answers for the wizard.
pub trait Prompter {
    /// Reads one line of free text. An empty answer is allowed.
    fn input(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Asks a yes/no question that defaults to "no".
    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError>;
}

fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(
        err,
        dialoguer::Error::IO(io_err)
            if matches!(
                io_err.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::UnexpectedEof
            )
    )
}

fn map_err(err: dialoguer::Error) -> PromptError {
    if is_cancelled(&err) {
        PromptError::Cancelled
    } else {
        PromptError::Terminal(err)
    }
}

/// Reads answers from the terminal.
pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
}

impl DialoguerPrompter {
    pub fn new(colorful: bool) -> Self {
        let theme: Box<dyn Theme> = if colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        DialoguerPrompter { theme }
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str) -> Result<String, PromptError> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(map_err)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(map_err)
    }
}

/// Reads plain lines, for when stdin is a pipe or there is no tty.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompter { input, output }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.read_line(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let answer = self.read_line(&format!("{} (y/N)", prompt))?;
        Ok(answer == "y" || answer == "Y")
    }
}
