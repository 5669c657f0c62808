//! Line-oriented operator input. Each reader keeps prompting until it gets a
//! value of the right shape, so parse and range problems never reach the
//! caller. The only error left is I/O, including end of input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::Datelike;

use crate::messages::{Catalog, Msg};

/// Earliest release year accepted at input time.
pub const MIN_YEAR: i32 = 1900;

/// Calendar year of the local system clock, read on every call.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Console streams plus the catalog used for retry messages.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    catalog: Catalog,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, catalog: Catalog) -> Self {
        Self {
            reader,
            writer,
            catalog,
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Print one full line of output.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Print `prompt` and return the next line without its terminator. An
    /// empty line is a valid answer. Bytes that are not UTF-8 become U+FFFD.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "operator input closed",
            ));
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompt until the answer is a base-10 integer.
    pub fn read_int(&mut self, prompt: &str) -> io::Result<i64> {
        self.read_parsed(prompt, Msg::NotAnInteger)
    }

    /// Prompt until the answer is a decimal number.
    pub fn read_float(&mut self, prompt: &str) -> io::Result<f64> {
        self.read_parsed(prompt, Msg::NotANumber)
    }

    /// Prompt until the answer is a year in `[1900, current year]`.
    pub fn read_year(&mut self, prompt: &str) -> io::Result<i32> {
        self.read_year_up_to(prompt, current_year())
    }

    /// Prompt until the answer is a year in `[1900, max]`.
    pub fn read_year_up_to(&mut self, prompt: &str, max: i32) -> io::Result<i32> {
        loop {
            let value = self.read_int(prompt)?;
            match i32::try_from(value) {
                Ok(year) if (MIN_YEAR..=max).contains(&year) => return Ok(year),
                _ => {
                    let text = self.catalog.format(Msg::YearOutOfRange, max);
                    self.say(&text)?;
                }
            }
        }
    }

    fn read_parsed<T: FromStr>(&mut self, prompt: &str, retry: Msg) -> io::Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    log::debug!("rejected input {line:?}");
                    let text = self.catalog.text(retry);
                    self.say(text)?;
                }
            }
        }
    }
}
