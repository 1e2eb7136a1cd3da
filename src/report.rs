use std::io::{self, Write};

use crate::model::{Country, Vital, YearRange};

pub const WELCOME: &str = "Welcome to Births/Deaths Statistics";
pub const PRINTING: &str = "Printing Births/Deaths Statistics";

const NAME_WIDTH: usize = 18;

/// Writes `title` between two rows of stars as wide as the title.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let stars = "*".repeat(title.chars().count());
    writeln!(out, "{}", stars)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", stars)
}

/// One `name|sum` row per region, in the country's order.
pub fn write_rows<W: Write>(
    out: &mut W,
    country: &Country,
    kind: Vital,
    range: YearRange,
) -> io::Result<()> {
    for region in country.regions() {
        writeln!(
            out,
            "{:<width$}|{}",
            region.name(),
            region.total(kind, range),
            width = NAME_WIDTH
        )?;
    }
    Ok(())
}

/// Header banner, region rows and the total banner for one kind.
pub fn write_table<W: Write>(
    out: &mut W,
    country: &Country,
    kind: Vital,
    range: YearRange,
) -> io::Result<()> {
    write_banner(out, &format!("{} by Regions:", kind))?;
    write_rows(out, country, kind, range)?;
    write_banner(
        out,
        &format!("{} Total: {}", kind, country.total(kind, range)),
    )
}

pub fn render_table(country: &Country, kind: Vital, range: YearRange) -> io::Result<String> {
    let mut buf = Vec::new();
    write_table(&mut buf, country, kind, range)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
