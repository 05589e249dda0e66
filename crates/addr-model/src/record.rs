//! Raw upstream records and the field aliasing scheme.
//!
//! The upstream dataset (a component-based municipal/GIS address composite)
//! names its columns with the aliases in [`field`]. A [`RawAddressRecord`]
//! is one row of that schema before any validation: a plain mapping from
//! alias to raw cell text, where the empty string means the cell was blank.

use std::collections::BTreeMap;

/// Upstream column aliases.
///
/// These are the literal column names of the source composite and double as
/// the keys of [`RawAddressRecord`]. Columns outside this set are ignored.
pub mod field {
    /// Upstream numeric record identifier.
    pub const OBJECTID: &str = "OBJECTID";
    /// Primary address number ("22959").
    pub const ADDR_NUM: &str = "AddrNum";
    /// Address number suffix ("1/2").
    pub const NUM_SUF: &str = "NumSuf";
    /// Word preceding and modifying the street name ("Old" in "Old Highway 50").
    pub const ST_PRE_MOD: &str = "St_PreMod";
    /// Directional preceding the street name ("N" in "N Main St").
    pub const PRE_DIR: &str = "PreDir";
    /// Street type preceding the street name ("Highway" in "Highway 50").
    pub const PRE_TYPE: &str = "PreType";
    /// Separator between pre-type and street name ("of" in "Avenue of the
    /// Americas"). Declared numeric upstream; see `AddressComponents`.
    pub const ST_PRE_SEP: &str = "St_PreSep";
    /// The street name proper. Required.
    pub const STREET_NAME: &str = "StreetName";
    /// Street type following the street name ("Rd", "Ave").
    pub const POST_TYPE: &str = "PostType";
    /// Directional following the street name ("SW" in "Canyon Rd SW").
    pub const POST_DIR: &str = "PostDir";
    /// Word following and modifying the street name ("Extended").
    pub const ST_POS_MOD: &str = "St_PosMod";
    /// Building designator value.
    pub const BUILDING: &str = "Building";
    /// Floor designator value.
    pub const FLOOR: &str = "Floor";
    /// Unit designator value ("APT E101", "12B").
    pub const UNIT: &str = "Unit";
    /// Municipality / place name.
    pub const PLACE_NAME: &str = "PlaceName";
    /// County name.
    pub const COUNTY: &str = "County";
    /// Postal code (also the partition key).
    pub const ZIPCODE: &str = "Zipcode";
    /// Opaque passthrough geometry column.
    pub const LOCATION: &str = "location";
}

/// Every alias the pipeline consumes, in output-relevant order.
pub const CONSUMED_FIELDS: &[&str] = &[
    field::OBJECTID,
    field::ADDR_NUM,
    field::NUM_SUF,
    field::ST_PRE_MOD,
    field::PRE_DIR,
    field::PRE_TYPE,
    field::ST_PRE_SEP,
    field::STREET_NAME,
    field::POST_TYPE,
    field::POST_DIR,
    field::ST_POS_MOD,
    field::BUILDING,
    field::FLOOR,
    field::UNIT,
    field::PLACE_NAME,
    field::COUNTY,
    field::ZIPCODE,
    field::LOCATION,
];

/// Fields a row must populate to enter the pipeline at all; rows missing
/// any of these are dropped by the orchestrator before rule application.
pub const REQUIRED_FIELDS: &[&str] = &[field::STREET_NAME, field::PLACE_NAME, field::ADDR_NUM];

/// One raw row of the upstream schema, keyed by alias.
///
/// Values are the raw cell text; blank cells are stored as empty strings
/// and surface as `None` from [`RawAddressRecord::get`]. The sentinel null
/// token is *not* interpreted here — that is the null-token normalizer's
/// job during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAddressRecord {
    values: BTreeMap<String, String>,
}

impl RawAddressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value. Unknown aliases are stored but never consumed.
    pub fn set(&mut self, alias: impl Into<String>, value: impl Into<String>) {
        self.values.insert(alias.into(), value.into());
    }

    /// Builder-style `set` for fixtures and tests.
    #[must_use]
    pub fn with(mut self, alias: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(alias, value);
        self
    }

    /// Raw value for an alias; blank and absent cells both read as `None`.
    pub fn get(&self, alias: &str) -> Option<&str> {
        match self.values.get(alias).map(String::as_str) {
            Some("") | None => None,
            Some(value) => Some(value),
        }
    }

    /// Render the record for diagnostics (populated fields only, in the
    /// consumed-field order). Used when logging an offending row on abort.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        for alias in CONSUMED_FIELDS {
            if let Some(value) = self.get(alias) {
                parts.push(format!("{alias}={value}"));
            }
        }
        parts.join(" ")
    }
}

impl FromIterator<(String, String)> for RawAddressRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
