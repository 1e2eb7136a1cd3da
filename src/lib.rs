extern crate csv;

mod cli;
mod errors;
mod loader;
mod model;
mod report;

pub use crate::cli::{run, Prompter, Session};
pub use crate::errors::{LineError, Result, StatsError};
pub use crate::loader::{
    apply_data_line, load_records, load_records_from_path, load_regions, load_regions_from_path,
    parse_data_line, parse_region_line, stripped_fields, DataLine, LoadSummary,
};
pub use crate::model::{Country, Labelled, Record, Region, Vital, YearRange};
pub use crate::report::{render_table, write_banner, write_rows, write_table, PRINTING, WELCOME};

/// Births in `region` between `start_year` and `end_year`, both inclusive.
pub fn sum_births(region: &Region, start_year: i64, end_year: i64) -> i128 {
    region.sum_births(YearRange::new(start_year, end_year))
}

/// Deaths in `region` between `start_year` and `end_year`, both inclusive.
pub fn sum_deaths(region: &Region, start_year: i64, end_year: i64) -> i128 {
    region.sum_deaths(YearRange::new(start_year, end_year))
}
