//! Line-oriented prompting of the user.
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Stdout, Write};

/// Asks the user questions and writes output for them to read.
///
/// Generic over its input and output so that sessions can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// A console attached to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a new [`Console`]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where program output should be written
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning its output
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` on its own line and read the user's answer.
    ///
    /// The trailing newline is removed from the answer. Bytes which aren't valid UTF-8 are replaced
    /// rather than rejected, so that they simply fail validation. It is an error if the input is
    /// closed.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        let bytes_read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from input")?;
        if bytes_read == 0 {
            bail!("Input closed while waiting for an answer");
        }

        let answer = String::from_utf8_lossy(&buf);
        Ok(answer.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Keep asking until `parse` accepts the answer.
    ///
    /// The first question is `prompt`; subsequent ones are `retry_prompt`. There is no limit on
    /// the number of attempts.
    pub fn ask_until<T, F>(&mut self, prompt: &str, retry_prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let mut answer = self.ask(prompt)?;
        loop {
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            answer = self.ask(retry_prompt)?;
        }
    }

    /// Ask a yes/no question.
    ///
    /// Only exactly "yes" (in any case, with no surrounding whitespace) counts as agreement.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("yes"))
    }
}
