use std::io::{BufRead, Write};
use std::path::Path;

use log::warn;

use crate::errors::{Result, StatsError};
use crate::loader::{self, LoadSummary};
use crate::model::{Country, Vital, YearRange};
use crate::report;

/// What a finished run loaded and reported on.
#[derive(Debug)]
pub struct Session {
    pub country: Country,
    pub range: YearRange,
}

/// Asks questions on `out` and reads the answers from `input`, one line each.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Prompter<R, W> {
        Prompter { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(StatsError::UnexpectedEof {
                prompt: prompt.trim_end().to_string(),
            });
        }
        let answer = line.trim_end_matches(|c| c == '\n' || c == '\r');
        Ok(answer.to_string())
    }

    /// A year that does not parse ends the run.
    pub fn ask_year(&mut self, prompt: &str) -> Result<i64> {
        let answer = self.ask(prompt)?;
        answer
            .trim()
            .parse::<i64>()
            .map_err(|_| StatsError::InvalidYear { input: answer })
    }
}

// A file that cannot be opened is reported to the user and treated as empty.
fn report_load<W: Write>(out: &mut W, outcome: Result<LoadSummary>) -> Result<()> {
    match outcome {
        Ok(_) => Ok(()),
        Err(e @ StatsError::FileNotFound(_)) | Err(e @ StatsError::Unreadable { .. }) => {
            warn!("{}", e);
            writeln!(out, "ERROR: {}", e)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// The whole interactive flow: country, both files, year range, then the
/// births and deaths tables.
pub fn run<R: BufRead, W: Write>(input: R, out: W) -> Result<Session> {
    let mut prompter = Prompter::new(input, out);
    report::write_banner(prompter.out(), report::WELCOME)?;

    let name = prompter.ask("Enter the name of a country: ")?;
    let abbreviation = prompter.ask("Enter the abbreviation of a country: ")?;
    let mut country = Country::new(&name, &abbreviation);

    let regions = prompter.ask("Enter the filename for reading a list of regions: ")?;
    let loaded = loader::load_regions_from_path(&mut country, Path::new(&regions));
    report_load(prompter.out(), loaded)?;

    let data = prompter.ask("Enter the filename for reading Births/Deaths data: ")?;
    let loaded = loader::load_records_from_path(&mut country, Path::new(&data));
    report_load(prompter.out(), loaded)?;

    report::write_banner(prompter.out(), report::PRINTING)?;
    let start = prompter.ask_year("Enter the start year: ")?;
    let end = prompter.ask_year("Enter the end year: ")?;
    let range = YearRange::new(start, end);

    report::write_table(prompter.out(), &country, Vital::Births, range)?;
    report::write_table(prompter.out(), &country, Vital::Deaths, range)?;
    prompter.out().flush()?;

    Ok(Session { country, range })
}
