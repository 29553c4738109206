//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};

use crate::error::{LilipatError, LilipatResult};

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is
    pub fn say(&mut self, text: &str) -> LilipatResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Show a prompt and read one line, trimmed
    ///
    /// End of input is reported as [`LilipatError::InputClosed`]. Bytes that
    /// are not UTF-8 are replaced, so a stray byte is just an unknown answer.
    pub fn line(&mut self, prompt: &str) -> LilipatResult<String> {
        self.say(prompt)?;
        self.output.flush()?;

        let mut input = Vec::new();
        if self.input.read_until(b'\n', &mut input)? == 0 {
            return Err(LilipatError::InputClosed);
        }

        Ok(String::from_utf8_lossy(&input).trim().to_string())
    }

    /// Show a prompt and read a single-character menu selection
    pub fn choice(&mut self, prompt: &str) -> LilipatResult<Option<char>> {
        Ok(self.line(prompt)?.chars().next())
    }
}
