//! Validated address components and the canonical output record.

/// A validated component record, produced from a
/// [`RawAddressRecord`](crate::RawAddressRecord) by the component validator.
///
/// Only the identifier and the street name are required; every other field
/// may be absent. Optional fields have already been through null-token
/// normalization, so the sentinel marker never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressComponents {
    /// Upstream numeric identifier, retained verbatim in the output.
    pub id: i64,
    /// Street name proper. Never empty.
    pub street_name: String,
    pub address_number: Option<String>,
    pub address_number_suffix: Option<String>,
    pub street_pre_mod: Option<String>,
    pub street_pre_dir: Option<String>,
    pub street_pre_type: Option<String>,
    /// Separator between pre-type and street name ("of" in "Avenue of the
    /// Americas"). The upstream schema declares this column numeric even
    /// though it holds a word token; the integer is kept as-is and
    /// stringified into the assembled line for output compatibility.
    pub street_pre_sep: Option<i64>,
    pub street_post_type: Option<String>,
    pub street_post_dir: Option<String>,
    pub street_post_mod: Option<String>,
    pub building: Option<String>,
    pub floor: Option<String>,
    pub unit: Option<String>,
    pub place_name: Option<String>,
    pub county: Option<String>,
    pub zipcode: Option<String>,
    /// Opaque passthrough geometry value.
    pub location: Option<String>,
}

impl AddressComponents {
    /// Minimal components for tests and the interactive path.
    pub fn new(id: i64, street_name: impl Into<String>) -> Self {
        Self {
            id,
            street_name: street_name.into(),
            address_number: None,
            address_number_suffix: None,
            street_pre_mod: None,
            street_pre_dir: None,
            street_pre_type: None,
            street_pre_sep: None,
            street_post_type: None,
            street_post_dir: None,
            street_post_mod: None,
            building: None,
            floor: None,
            unit: None,
            place_name: None,
            county: None,
            zipcode: None,
            location: None,
        }
    }
}

/// The terminal, immutable output record: one canonical address per
/// surviving input row. `address` is always derived by the canonicalizer,
/// never hand-edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalAddress {
    pub id: i64,
    pub address: String,
    pub city: Option<String>,
    pub county: Option<String>,
    pub zipcode: Option<String>,
    pub location: Option<String>,
}
