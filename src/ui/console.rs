use crate::core::input::parse_choice;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Line-based terminal: writes prompts, reads answers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn say_all(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one line.
    /// `None` means the input is closed.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Asks until the answer is a valid 1-based choice among `option_count`.
    /// Returns the 0-based index, or `None` when the input is closed.
    pub fn choose(&mut self, option_count: usize, prompt: &str) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_choice(&line, option_count) {
                Ok(index) => return Ok(Some(index)),
                Err(err) => {
                    debug!(input = line.trim(), %err, "rejected menu input");
                    self.say(&err.to_string())?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
