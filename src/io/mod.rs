//! Input/output abstractions
//!
//! The engine talks to players only through [`InteractionPort`]. Line-based
//! terminal I/O is adapted to that port by [`ConsoleInteraction`], and both
//! halves can be swapped for mocks in tests.

use std::io::{self, Write};

use crate::models::card::Card;
use crate::models::errors::GameResult;
use crate::ui::presenters::HandPresenter;

pub const FAMILY_PROMPT: &str = "Enter the family name:";
pub const ROLE_PROMPT: &str = "Enter the role (father, mother, son, daughter):";

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user with a prompt
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Everything the game engine needs from the people playing it.
pub trait InteractionPort {
    /// Ask the current player which family they want a card from.
    fn prompt_family(&mut self) -> GameResult<String>;
    /// Ask the current player which member of the family they want.
    fn prompt_role(&mut self) -> GameResult<String>;
    fn display_hand(&mut self, player_name: &str, cards: &[Card]);
    fn display_message(&mut self, text: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Adapts a line reader and a line writer into an [`InteractionPort`].
pub struct ConsoleInteraction<I, O> {
    input: I,
    output: O,
}

impl<I: InputReader, O: OutputWriter> ConsoleInteraction<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}

impl ConsoleInteraction<TerminalIO, TerminalIO> {
    pub fn terminal() -> Self {
        Self::new(TerminalIO, TerminalIO)
    }
}

impl<I: InputReader, O: OutputWriter> InteractionPort for ConsoleInteraction<I, O> {
    fn prompt_family(&mut self) -> GameResult<String> {
        let line = self.input.read_line(FAMILY_PROMPT)?;
        Ok(line.trim().to_string())
    }

    fn prompt_role(&mut self) -> GameResult<String> {
        let line = self.input.read_line(ROLE_PROMPT)?;
        Ok(line.trim().to_string())
    }

    fn display_hand(&mut self, player_name: &str, cards: &[Card]) {
        HandPresenter::show_hand(player_name, cards, &mut self.output);
    }

    fn display_message(&mut self, text: &str) {
        self.output.writeln(text);
    }
}
