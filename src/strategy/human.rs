//! Human decisions typed at the console.

use std::io::{BufRead, Write};

use dialoguer::Input;

use super::{Decision, Prompt, Strategy, TurnView};
use crate::error::{PigError, Result};

const DECISION_PROMPT: &str = "Press 'r' to roll or 'h' to hold";

/// A person deciding through the table's `Prompt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Human;

impl Strategy for Human {
    fn decide(&mut self, view: &TurnView<'_>, input: &mut dyn Prompt) -> Result<Decision> {
        let line = input.read_line(&format!("{} - {}", view.name, DECISION_PROMPT))?;
        line.parse()
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Interactive terminal input via dialoguer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal;

impl Prompt for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let line = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}

/// Line-oriented input from any reader.
///
/// Used when stdin is not a terminal, and in tests over `io::Cursor`.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineInput<std::io::Cursor<Vec<u8>>> {
    /// Replay the given lines, one per read.
    ///
    /// ```
    /// use pig_dice::strategy::{LineInput, Prompt};
    ///
    /// let mut input = LineInput::script(["r", "h"]);
    /// assert_eq!(input.read_line("go").unwrap(), "r");
    /// assert_eq!(input.read_line("go").unwrap(), "h");
    /// assert!(input.read_line("go").is_err());
    /// ```
    pub fn script<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut text = String::new();
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        Self::new(std::io::Cursor::new(text.into_bytes()))
    }
}

impl<R: BufRead> Prompt for LineInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}: ", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PigError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
