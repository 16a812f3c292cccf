// src/model.rs
//
// Core record types. Everything here is immutable once loaded; derived
// views (placements, chart rows) are rebuilt per query.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/* ---------------- Region ---------------- */

/// Two-digit qualifying region code (tens digit 1..=9, ones digit 1 or 2).
///
/// The type does not reject invalid codes on its own: filters may carry
/// arbitrary codes and simply match nothing. Loaders check `is_valid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Region(pub u8);

impl Region {
    /// All 18 valid codes, ascending.
    pub const ALL: [Region; 18] = [
        Region(11), Region(12), Region(21), Region(22), Region(31), Region(32),
        Region(41), Region(42), Region(51), Region(52), Region(61), Region(62),
        Region(71), Region(72), Region(81), Region(82), Region(91), Region(92),
    ];

    #[inline]
    pub fn code(self) -> u8 { self.0 }

    pub fn is_valid(self) -> bool {
        let tens = self.0 / 10;
        let ones = self.0 % 10;
        (1..=9).contains(&tens) && (ones == 1 || ones == 2)
    }

    /// Parse a validated code. Returns None for anything outside the 18 codes.
    pub fn parse_valid(s: &str) -> Option<Region> {
        let code: u8 = s.trim().parse().ok()?;
        let r = Region(code);
        r.is_valid().then_some(r)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/* ---------------- Category ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender { Female, Male }

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgeBracket { Junior, YouthA, YouthB, YouthC, YouthD }

/// Competitor division. Declaration order is the canonical display order,
/// and `Ord` follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category { FJR, MJR, FYA, MYA, FYB, MYB, FYC, MYC, FYD, MYD }

impl Category {
    pub const ALL: [Category; 10] = [
        Category::FJR, Category::MJR,
        Category::FYA, Category::MYA,
        Category::FYB, Category::MYB,
        Category::FYC, Category::MYC,
        Category::FYD, Category::MYD,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Category::FJR => "FJR", Category::MJR => "MJR",
            Category::FYA => "FYA", Category::MYA => "MYA",
            Category::FYB => "FYB", Category::MYB => "MYB",
            Category::FYC => "FYC", Category::MYC => "MYC",
            Category::FYD => "FYD", Category::MYD => "MYD",
        }
    }

    pub fn gender(self) -> Gender {
        match self {
            Category::FJR | Category::FYA | Category::FYB | Category::FYC | Category::FYD => Gender::Female,
            _ => Gender::Male,
        }
    }

    pub fn age_bracket(self) -> AgeBracket {
        match self {
            Category::FJR | Category::MJR => AgeBracket::Junior,
            Category::FYA | Category::MYA => AgeBracket::YouthA,
            Category::FYB | Category::MYB => AgeBracket::YouthB,
            Category::FYC | Category::MYC => AgeBracket::YouthC,
            Category::FYD | Category::MYD => AgeBracket::YouthD,
        }
    }

    /// e.g. "Female Youth A"
    pub fn label(self) -> String {
        let g = match self.gender() { Gender::Female => "Female", Gender::Male => "Male" };
        let a = match self.age_bracket() {
            AgeBracket::Junior => "Junior",
            AgeBracket::YouthA => "Youth A",
            AgeBracket::YouthB => "Youth B",
            AgeBracket::YouthC => "Youth C",
            AgeBracket::YouthD => "Youth D",
        };
        format!("{g} {a}")
    }

    /// Chart colour as RGB.
    pub fn color(self) -> [u8; 3] {
        match self {
            Category::FJR => [0xff, 0xa8, 0x22], Category::MJR => [0xb3, 0x6b, 0x00],
            Category::FYA => [0x13, 0x4e, 0x6f], Category::MYA => [0x07, 0x1e, 0x2c],
            Category::FYB => [0xff, 0x61, 0x50], Category::MYB => [0xff, 0x1a, 0x00],
            Category::FYC => [0x1a, 0xc0, 0xc6], Category::MYC => [0x12, 0x83, 0x87],
            Category::FYD => [0xb6, 0xbb, 0xc8], Category::MYD => [0x8b, 0x93, 0xa7],
        }
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive tag match, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.tag().eq_ignore_ascii_case(t))
            .ok_or_else(|| format!("Unknown category: {t}"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/* ---------------- Records ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClimberRecord {
    pub region: Region,
    pub category: Category,
    pub first_name: String,
    pub last_name: String,
    pub score: i32,
    pub competition: String,
}

/// Loaded results. Read-only after construction; share it through `Arc`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<ClimberRecord>,
}

impl ResultSet {
    pub fn new(records: Vec<ClimberRecord>) -> Self { Self { records } }

    pub fn records(&self) -> &[ClimberRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, ClimberRecord> { self.records.iter() }

    pub fn into_shared(self) -> Arc<ResultSet> { Arc::new(self) }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ClimberRecord;
    type IntoIter = std::slice::Iter<'a, ClimberRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

/// One line of the placement table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementRow {
    pub region: Region,
    pub category: Category,
    /// 1-based rank the candidate would have taken.
    pub place: usize,
    pub field_size: usize,
}

impl PlacementRow {
    /// Cells in table column order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.region.to_string(),
            s!(self.category.tag()),
            self.place.to_string(),
            self.field_size.to_string(),
        ]
    }
}
