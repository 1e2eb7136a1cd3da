use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ByteRecord, Reader, ReaderBuilder, StringRecord};
use log::{debug, info};

use crate::errors::{LineError, Result, StatsError};
use crate::model::{Country, Record, Region, Vital};

const REGION_FIELDS: usize = 2;
const DATA_FIELDS: usize = 4;

/// How many lines of one input file were kept and how many were skipped.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct LoadSummary {
    pub accepted: usize,
    pub skipped: usize,
}

/// A validated line of the births/deaths file, not yet attached to a region.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DataLine {
    pub year: i64,
    pub kind: Vital,
    pub region: String,
    pub count: i64,
}

// both files are bare tab separated text, quotes carry no meaning
fn tsv_reader<R: Read>(rdr: R) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(rdr)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StatsError::FileNotFound(path.to_path_buf())
        } else {
            StatsError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

fn parse_int(field: &'static str, value: &str) -> std::result::Result<i64, LineError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| LineError::NotAnInteger {
            field,
            value: value.to_string(),
        })
}

fn check_fields(fields: &[&str], expected: usize) -> std::result::Result<(), LineError> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(LineError::FieldCount {
            expected,
            found: fields.len(),
        })
    }
}

/// Splits a record the way the line would split after stripping its outer
/// whitespace: whitespace-only fields at either end are dropped and the
/// outermost remaining fields lose their padding. Inner fields are untouched.
pub fn stripped_fields(record: &StringRecord) -> Vec<&str> {
    let mut fields: Vec<&str> = record.iter().collect();
    let start = fields
        .iter()
        .position(|f| !f.trim().is_empty())
        .unwrap_or_else(|| fields.len());
    fields.drain(..start);
    while fields.last().map_or(false, |f| f.trim().is_empty()) {
        fields.pop();
    }
    if let Some(&first) = fields.first() {
        fields[0] = first.trim_start();
    }
    if let Some(&last) = fields.last() {
        let end = fields.len() - 1;
        fields[end] = last.trim_end();
    }
    fields
}

/// Validates `{name}\t{land_area}`.
pub fn parse_region_line(fields: &[&str]) -> std::result::Result<Region, LineError> {
    check_fields(fields, REGION_FIELDS)?;
    let land_area = parse_int("land area", fields[1])?;
    if land_area <= 0 {
        return Err(LineError::NonPositiveLandArea(land_area));
    }
    Ok(Region::new(fields[0], land_area as u64))
}

/// Validates `{year}\t{Births|Deaths}\t{region}\t{count}`.
pub fn parse_data_line(fields: &[&str]) -> std::result::Result<DataLine, LineError> {
    check_fields(fields, DATA_FIELDS)?;
    let year = parse_int("year", fields[0])?;
    let count = parse_int("count", fields[3])?;
    let kind = Vital::from_label(fields[1])
        .ok_or_else(|| LineError::UnknownLabel(fields[1].to_string()))?;
    Ok(DataLine {
        year,
        kind,
        region: fields[2].to_string(),
        count,
    })
}

/// Attaches a validated line to its region. Leaves the country untouched
/// when the region does not exist.
pub fn apply_data_line(country: &mut Country, line: DataLine) -> std::result::Result<(), LineError> {
    let region = country
        .find_region_mut(&line.region)
        .ok_or_else(|| LineError::UnknownRegion(line.region.clone()))?;
    region.add_record(line.kind, Record::new(line.year, line.count));
    Ok(())
}

// Feeds the stripped fields of every line of `rdr` to `handle`, counting what
// was kept. Only a failing reader aborts; a bad line is logged and skipped.
fn each_line<R, F>(mut rdr: Reader<R>, mut handle: F) -> io::Result<LoadSummary>
where
    R: Read,
    F: FnMut(&[&str]) -> std::result::Result<(), LineError>,
{
    let mut summary = LoadSummary::default();
    let mut raw = ByteRecord::new();
    loop {
        let line = rdr.position().line();
        if !rdr.read_byte_record(&mut raw)? {
            break;
        }
        // the buffer goes back into `raw` on both paths
        let outcome = match StringRecord::from_byte_record(raw) {
            Ok(record) => {
                let outcome = handle(stripped_fields(&record).as_slice());
                raw = record.into_byte_record();
                outcome
            }
            Err(e) => {
                raw = e.into_byte_record();
                Err(LineError::Encoding)
            }
        };
        match outcome {
            Ok(()) => summary.accepted += 1,
            Err(reason) => {
                debug!("skipping line {line}: {reason}");
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

/// Adds every valid region line from `rdr` to `country`.
pub fn load_regions<R: Read>(country: &mut Country, rdr: R) -> io::Result<LoadSummary> {
    let summary = each_line(tsv_reader(rdr), |fields| {
        country.add_region(parse_region_line(fields)?);
        Ok(())
    })?;
    info!(
        "loaded {} regions, skipped {} lines",
        summary.accepted, summary.skipped
    );
    Ok(summary)
}

/// Attaches every valid births/deaths line from `rdr` to its region in `country`.
pub fn load_records<R: Read>(country: &mut Country, rdr: R) -> io::Result<LoadSummary> {
    let summary = each_line(tsv_reader(rdr), |fields| {
        let line = parse_data_line(fields)?;
        apply_data_line(country, line)
    })?;
    info!(
        "loaded {} records, skipped {} lines",
        summary.accepted, summary.skipped
    );
    Ok(summary)
}

pub fn load_regions_from_path<P: AsRef<Path>>(country: &mut Country, path: P) -> Result<LoadSummary> {
    let path = path.as_ref();
    let file = open(path)?;
    info!("reading regions from {}", path.display());
    load_regions(country, file).map_err(|source| StatsError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_records_from_path<P: AsRef<Path>>(country: &mut Country, path: P) -> Result<LoadSummary> {
    let path = path.as_ref();
    let file = open(path)?;
    info!("reading births/deaths from {}", path.display());
    load_records(country, file).map_err(|source| StatsError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}
