//! One interactive exchange: prompt, read a line, print one result line.

use crate::error::CalcResult;
use crate::evaluator::{Answer, ExpressionEvaluator};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Prefix of a successful result line
pub const RESULT_PREFIX: &str = "Результат:";

/// Drives a single evaluation over arbitrary input and output streams
pub struct Session<'a> {
    evaluator: &'a ExpressionEvaluator,
    prompt: &'a str,
}

impl<'a> Session<'a> {
    pub fn new(evaluator: &'a ExpressionEvaluator, prompt: &'a str) -> Self {
        Self { evaluator, prompt }
    }

    /// Prompt, read one line and write exactly one line back.
    ///
    /// Evaluation errors are written as output and returned as the inner
    /// result; only stream failures produce the outer `io::Error`.
    pub fn run<R, W>(&self, input: &mut R, output: &mut W) -> io::Result<CalcResult<Answer>>
    where
        R: BufRead,
        W: Write,
    {
        write!(output, "{}", self.prompt)?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            debug!("Input closed before a line was read");
        }

        let outcome = self.evaluator.evaluate(line.trim());
        match &outcome {
            Ok(answer) => writeln!(output, "{RESULT_PREFIX} {answer}")?,
            Err(e) => writeln!(output, "{e}")?,
        }
        output.flush()?;

        Ok(outcome)
    }
}
