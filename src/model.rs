use std::fmt;

/// Which of the two yearly series a record belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Vital {
    Births,
    Deaths,
}

impl Vital {
    /// Accepts only the exact labels used in the data file.
    pub fn from_label(label: &str) -> Option<Vital> {
        match label {
            "Births" => Some(Vital::Births),
            "Deaths" => Some(Vital::Deaths),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Vital::Births => "Births",
            Vital::Deaths => "Deaths",
        }
    }
}

impl fmt::Display for Vital {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One yearly observation of births or deaths.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Record {
    pub year: i64,
    pub count: i64,
}

impl Record {
    pub fn new(year: i64, count: i64) -> Record {
        Record { year, count }
    }
}

impl Default for Record {
    fn default() -> Record {
        Record::new(1990, 0)
    }
}

/// Pairs a record with its kind, only for display.
pub struct Labelled<'a>(pub Vital, pub &'a Record);

impl fmt::Display for Labelled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} ({})", self.0, self.1.count, self.1.year)
    }
}

/// Inclusive `[start, end]` window of years. An inverted window matches nothing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct YearRange {
    pub start: i64,
    pub end: i64,
}

impl YearRange {
    pub fn new(start: i64, end: i64) -> YearRange {
        YearRange { start, end }
    }

    pub fn contains(&self, year: i64) -> bool {
        self.start <= year && year <= self.end
    }
}

#[derive(Debug, Clone)]
pub struct Region {
    name: String,
    land_area: u64,
    births: Vec<Record>,
    deaths: Vec<Record>,
}

impl Region {
    pub fn new(name: &str, land_area: u64) -> Region {
        Region {
            name: name.to_string(),
            land_area,
            births: Vec::new(),
            deaths: Vec::new(),
        }
    }

    /// Identity key: regions compare and sort by this alone.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn land_area(&self) -> u64 {
        self.land_area
    }

    pub fn records(&self, kind: Vital) -> &[Record] {
        match kind {
            Vital::Births => &self.births,
            Vital::Deaths => &self.deaths,
        }
    }

    pub fn add_record(&mut self, kind: Vital, record: Record) {
        match kind {
            Vital::Births => self.births.push(record),
            Vital::Deaths => self.deaths.push(record),
        }
    }

    pub fn add_birth_record(&mut self, record: Record) {
        self.add_record(Vital::Births, record)
    }

    pub fn add_death_record(&mut self, record: Record) {
        self.add_record(Vital::Deaths, record)
    }

    /// Sum of counts for `kind` whose year falls inside `range`. Widened to
    /// `i128` so any number of `i64` counts adds up without overflow.
    pub fn total(&self, kind: Vital, range: YearRange) -> i128 {
        self.records(kind)
            .iter()
            .filter(|r| range.contains(r.year))
            .map(|r| i128::from(r.count))
            .sum()
    }

    pub fn sum_births(&self, range: YearRange) -> i128 {
        self.total(Vital::Births, range)
    }

    pub fn sum_deaths(&self, range: YearRange) -> i128 {
        self.total(Vital::Deaths, range)
    }
}

impl Default for Region {
    fn default() -> Region {
        Region::new("Unknown", 1)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} km^2)", self.name, self.land_area)
    }
}

#[derive(Debug, Clone)]
pub struct Country {
    name: String,
    abbreviation: String,
    regions: Vec<Region>,
}

impl Country {
    pub fn new(name: &str, abbreviation: &str) -> Country {
        Country {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            regions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Regions in ascending name order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Inserts after every region whose name is <= the new one, so the list
    /// stays sorted and duplicates keep their arrival order.
    pub fn add_region(&mut self, region: Region) {
        let at = self
            .regions
            .partition_point(|r| r.name() <= region.name());
        self.regions.insert(at, region);
    }

    /// First region whose name matches exactly.
    pub fn find_region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name() == name)
    }

    pub fn find_region_mut(&mut self, name: &str) -> Option<&mut Region> {
        self.regions.iter_mut().find(|r| r.name() == name)
    }

    pub fn total(&self, kind: Vital, range: YearRange) -> i128 {
        self.regions.iter().map(|r| r.total(kind, range)).sum()
    }

    pub fn total_births(&self, range: YearRange) -> i128 {
        self.total(Vital::Births, range)
    }

    pub fn total_deaths(&self, range: YearRange) -> i128 {
        self.total(Vital::Deaths, range)
    }
}

impl Default for Country {
    fn default() -> Country {
        Country::new("Unknown", "N/A")
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.abbreviation)?;
        let lines: Vec<String> = self.regions.iter().map(|r| r.to_string()).collect();
        f.write_str(&lines.join("\n"))
    }
}
