//! Address tagging: splitting an assembled address string into labeled
//! token runs.
//!
//! The canonicalizer depends only on the narrow [`AddressTagger`] trait;
//! [`LexiconTagger`] is the built-in implementation, a positional token
//! classifier over small USPS-style lexicons. Its output contract follows
//! the usual tagging semantics of address parsers:
//!
//! - adjacent tokens sharing a label merge into one `(label, text)` pair;
//! - a later, non-adjacent run of a *repeatable* label (street names and
//!   the identifier labels) is folded into that label's first slot, so the
//!   emitted order is label-driven and may differ from input token order;
//! - a non-adjacent repeat of any other label means the same semantic slot
//!   was claimed at conflicting positions, and tagging fails with
//!   [`AddressError::AmbiguousParse`].

use std::fmt;

use addr_model::{AddressError, Result};

/// Semantic labels emitted by a tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    AddressNumber,
    AddressNumberSuffix,
    StreetNamePreDirectional,
    StreetNamePreType,
    StreetName,
    StreetNamePostType,
    StreetNamePostDirectional,
    SubaddressType,
    SubaddressIdentifier,
    FloorType,
    FloorIdentifier,
    OccupancyType,
    OccupancyIdentifier,
}

impl Label {
    /// Labels that may legitimately recur at separated positions; a later
    /// run merges into the first slot instead of conflicting.
    pub fn repeatable(self) -> bool {
        matches!(
            self,
            Self::StreetName
                | Self::SubaddressIdentifier
                | Self::FloorIdentifier
                | Self::OccupancyIdentifier
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddressNumber => "AddressNumber",
            Self::AddressNumberSuffix => "AddressNumberSuffix",
            Self::StreetNamePreDirectional => "StreetNamePreDirectional",
            Self::StreetNamePreType => "StreetNamePreType",
            Self::StreetName => "StreetName",
            Self::StreetNamePostType => "StreetNamePostType",
            Self::StreetNamePostDirectional => "StreetNamePostDirectional",
            Self::SubaddressType => "SubaddressType",
            Self::SubaddressIdentifier => "SubaddressIdentifier",
            Self::FloorType => "FloorType",
            Self::FloorIdentifier => "FloorIdentifier",
            Self::OccupancyType => "OccupancyType",
            Self::OccupancyIdentifier => "OccupancyIdentifier",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A probabilistic address tagger.
///
/// `tag` splits the input into an ordered sequence of `(label, text)` pairs.
/// The emitted order is authoritative: callers join pair texts as-is and
/// must not re-sort them.
pub trait AddressTagger {
    fn tag(&self, text: &str) -> Result<Vec<(Label, String)>>;
}

const DIRECTIONALS: &[&str] = &[
    "N", "S", "E", "W", "NE", "NW", "SE", "SW", "NORTH", "SOUTH", "EAST", "WEST", "NORTHEAST",
    "NORTHWEST", "SOUTHEAST", "SOUTHWEST",
];

const STREET_TYPES: &[&str] = &[
    "ALY", "ALLEY", "AVE", "AVENUE", "BLVD", "BOULEVARD", "BND", "CIR", "CIRCLE", "CT", "COURT",
    "CV", "COVE", "CRES", "DR", "DRIVE", "EXPY", "FWY", "HWY", "HIGHWAY", "LN", "LANE", "LOOP",
    "PASS", "PKWY", "PARKWAY", "PL", "PLACE", "PT", "POINT", "RD", "ROAD", "ROW", "RUN", "SQ",
    "SQUARE", "ST", "STREET", "TER", "TERRACE", "TRL", "TRAIL", "WAY", "XING", "CROSSING",
];

const SUBADDRESS_TYPES: &[&str] = &["BLDG", "BUILDING", "BSMT", "HANGAR", "PIER", "SLIP"];

const FLOOR_TYPES: &[&str] = &["FL", "FLR", "FLOOR"];

const OCCUPANCY_TYPES: &[&str] = &[
    "APT", "APARTMENT", "DEPT", "LOT", "OFC", "OFFICE", "PH", "RM", "ROOM", "SPC", "STE", "SUITE",
    "TRLR", "UNIT",
];

/// Lexicon-and-position token classifier implementing [`AddressTagger`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }
}

impl AddressTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<(Label, String)>> {
        let mut labeled: Vec<(Label, &str)> = Vec::new();
        let mut street_seen = false;
        // Identifier label expected for tokens following a designator
        // keyword (BLDG, FL, APT, ...).
        let mut pending_identifier: Option<Label> = None;

        for token in text.split_whitespace() {
            let key = lookup_key(token);
            let label = if let Some(designator) = classify_designator(&key) {
                pending_identifier = Some(match designator {
                    Label::SubaddressType => Label::SubaddressIdentifier,
                    Label::FloorType => Label::FloorIdentifier,
                    _ => Label::OccupancyIdentifier,
                });
                designator
            } else if let Some(identifier) = pending_identifier {
                identifier
            } else if is_integer(&key) {
                if labeled.is_empty() {
                    Label::AddressNumber
                } else {
                    street_seen = true;
                    Label::StreetName
                }
            } else if is_fraction(&key)
                && labeled.last().map(|(l, _)| *l) == Some(Label::AddressNumber)
            {
                Label::AddressNumberSuffix
            } else if DIRECTIONALS.contains(&key.as_str()) {
                if street_seen {
                    Label::StreetNamePostDirectional
                } else {
                    Label::StreetNamePreDirectional
                }
            } else if STREET_TYPES.contains(&key.as_str()) {
                if street_seen {
                    Label::StreetNamePostType
                } else {
                    Label::StreetNamePreType
                }
            } else {
                street_seen = true;
                Label::StreetName
            };
            labeled.push((label, token));
        }

        fold_pairs(text, labeled)
    }
}

/// Merge the per-token labels into emitted pairs, enforcing the repeat
/// rules described in the module docs.
fn fold_pairs(text: &str, labeled: Vec<(Label, &str)>) -> Result<Vec<(Label, String)>> {
    let mut pairs: Vec<(Label, String)> = Vec::new();
    for (label, token) in labeled {
        if let Some((last_label, last_text)) = pairs.last_mut()
            && *last_label == label
        {
            last_text.push(' ');
            last_text.push_str(token);
            continue;
        }
        match pairs.iter().position(|(existing, _)| *existing == label) {
            Some(idx) if label.repeatable() => {
                pairs[idx].1.push(' ');
                pairs[idx].1.push_str(token);
            }
            Some(_) => {
                return Err(AddressError::AmbiguousParse {
                    label: label.to_string(),
                    text: text.to_string(),
                });
            }
            None => pairs.push((label, token.to_string())),
        }
    }
    Ok(pairs)
}

/// Uppercased token key with surrounding punctuation stripped; the emitted
/// text keeps the original token verbatim.
fn lookup_key(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_ascii_alphanumeric())
        .to_ascii_uppercase()
}

fn is_integer(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

fn is_fraction(key: &str) -> bool {
    match key.split_once('/') {
        Some((numerator, denominator)) => is_integer(numerator) && is_integer(denominator),
        None => false,
    }
}

fn classify_designator(key: &str) -> Option<Label> {
    if SUBADDRESS_TYPES.contains(&key) {
        Some(Label::SubaddressType)
    } else if FLOOR_TYPES.contains(&key) {
        Some(Label::FloorType)
    } else if OCCUPANCY_TYPES.contains(&key) {
        Some(Label::OccupancyType)
    } else {
        None
    }
}
