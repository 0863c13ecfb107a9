use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// decides whether to go ahead when files would be overwritten
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// a fixed answer, nothing is asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Confirm for Answer {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(*self == Answer::Yes)
    }
}

/// asks on `output` and keeps reading lines from `input` until one is `y` or `n`
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            write!(self.output, "{question} [y/n]:")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::NoAnswer);
            }
            match line.trim_end_matches(['\r', '\n']) {
                "y" => return Ok(true),
                "n" => return Ok(false),
                other => {
                    log::debug!("Rejected answer `{other}`");
                    writeln!(self.output, "Answer should be either y or n.")?;
                }
            }
        }
    }
}
