use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

use crate::error::Error;

/// Line-oriented destination for the human-readable reports.
pub trait OutputSink {
    fn line(&mut self, text: &str) -> io::Result<()>;
}

/// Source of interactive answers.
pub trait InputSource {
    /// One line of input without its line terminator.
    fn read_line(&mut self) -> io::Result<String>;
}

pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }
}

/// Captures every line, for tests and for callers that post-process the report.
impl OutputSink for Vec<String> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}

pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self) -> io::Result<String> {
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed before an answer was given",
            ));
        }
        Ok(strip_line_ending(&input).to_string())
    }
}

/// Replays canned answers in order; runs dry with `UnexpectedEof`.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    asked: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: 0,
        }
    }

    /// How many times input was requested.
    pub fn times_asked(&self) -> usize {
        self.asked
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<String> {
        self.asked += 1;
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left"))
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Reads a log written by the test framework, one entry per line.
pub fn load_lines(path: &Path) -> Result<Vec<String>, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::LogUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
