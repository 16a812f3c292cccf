// src/filter.rs
//
// Explicit "all vs subset" filter. An empty subset collapses to `All`, so
// "nothing selected" and "no filter" behave the same everywhere.

use crate::model::{Category, Region};

/// Values that have a fixed, canonical universe.
pub trait Universe: Copy + PartialEq + 'static {
    fn universe() -> &'static [Self];
}

impl Universe for Region {
    fn universe() -> &'static [Self] { &Region::ALL }
}

impl Universe for Category {
    fn universe() -> &'static [Self] { &Category::ALL }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    /// Non-empty, duplicate-free, in caller order.
    Subset(Vec<T>),
}

impl<T: Universe> Selection<T> {
    /// Build from an optional list. `None` and an empty list both mean `All`.
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn from_optional(values: Option<Vec<T>>) -> Self {
        match values {
            None => Selection::All,
            Some(v) => Self::from_values(v),
        }
    }

    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut out: Vec<T> = Vec::new();
        for v in values {
            if !out.contains(&v) { out.push(v); }
        }
        if out.is_empty() { Selection::All } else { Selection::Subset(out) }
    }

    #[inline]
    pub fn is_all(&self) -> bool { matches!(self, Selection::All) }

    /// Iteration order: canonical for `All`, caller order for `Subset`.
    pub fn values(&self) -> &[T] {
        match self {
            Selection::All => T::universe(),
            Selection::Subset(v) => v,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Subset(v) => v.contains(value),
        }
    }

    /// Toggle one value. Selecting the last remaining value off returns to `All`.
    pub fn toggle(&mut self, value: T) {
        let mut v = match self {
            Selection::All => Vec::new(),
            Selection::Subset(v) => std::mem::take(v),
        };
        if let Some(pos) = v.iter().position(|x| *x == value) {
            v.remove(pos);
        } else {
            v.push(value);
        }
        *self = Self::from_values(v);
    }
}

/// Parse a comma list of category tags. Unknown tags are dropped.
pub fn parse_categories(s: &str) -> Selection<Category> {
    let mut kept = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse::<Category>() {
            Ok(c) => kept.push(c),
            Err(e) => logd!("Filter: {}", e),
        }
    }
    Selection::from_values(kept)
}

/// Parse region codes with ranges, e.g. "11,21-32". Ranges expand to the
/// valid codes they span; single codes are kept even if invalid (they will
/// simply match nothing). Tokens that are not numbers, or do not fit a
/// two-digit code, are dropped. A reversed range is an error.
pub fn parse_regions(s: &str) -> Result<Selection<Region>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some((a, b)) = part.split_once('-') {
            let (Ok(a), Ok(b)) = (a.trim().parse::<u32>(), b.trim().parse::<u32>()) else {
                logd!("Filter: Ignoring region range '{}'", part);
                continue;
            };
            if a > b { return Err(format!("Invalid range: {}", part).into()); }
            out.extend(Region::ALL.iter().copied().filter(|r| (a..=b).contains(&u32::from(r.code()))));
        } else {
            match part.parse::<u8>() {
                Ok(code) => out.push(Region(code)),
                Err(_) => logd!("Filter: Ignoring region '{}'", part),
            }
        }
    }
    Ok(Selection::from_values(out))
}
