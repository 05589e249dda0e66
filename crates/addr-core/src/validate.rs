//! Component validation: raw field mapping to typed `AddressComponents`.

use addr_model::{AddressComponents, AddressError, RawAddressRecord, Result, field};

use crate::null_token::normalize_null_token;

/// Validate one raw record into a typed component record.
///
/// Fails when the identifier is missing or non-numeric, or when the street
/// name is absent after null-token normalization. Every optional field goes
/// through the null-token pre-pass; unknown extra fields are ignored.
pub fn validate_record(record: &RawAddressRecord, null_token: &str) -> Result<AddressComponents> {
    let id = parse_required_i64(record, field::OBJECTID)?;

    let street_name = normalize_null_token(record.get(field::STREET_NAME), null_token)
        .map(str::to_string)
        .ok_or(AddressError::MissingField {
            field: field::STREET_NAME,
        })?;

    let optional = |alias: &str| {
        normalize_null_token(record.get(alias), null_token).map(str::to_string)
    };

    // The pre-separator column is declared numeric upstream even though it
    // stands for a word token; a non-numeric value is a schema violation.
    let street_pre_sep = match normalize_null_token(record.get(field::ST_PRE_SEP), null_token) {
        None => None,
        Some(raw) => Some(parse_i64(field::ST_PRE_SEP, raw)?),
    };

    Ok(AddressComponents {
        id,
        street_name,
        address_number: optional(field::ADDR_NUM),
        address_number_suffix: optional(field::NUM_SUF),
        street_pre_mod: optional(field::ST_PRE_MOD),
        street_pre_dir: optional(field::PRE_DIR),
        street_pre_type: optional(field::PRE_TYPE),
        street_pre_sep,
        street_post_type: optional(field::POST_TYPE),
        street_post_dir: optional(field::POST_DIR),
        street_post_mod: optional(field::ST_POS_MOD),
        building: optional(field::BUILDING),
        floor: optional(field::FLOOR),
        unit: optional(field::UNIT),
        place_name: optional(field::PLACE_NAME),
        county: optional(field::COUNTY),
        zipcode: optional(field::ZIPCODE),
        location: optional(field::LOCATION),
    })
}

fn parse_required_i64(record: &RawAddressRecord, alias: &'static str) -> Result<i64> {
    let raw = record
        .get(alias)
        .ok_or(AddressError::MissingField { field: alias })?;
    parse_i64(alias, raw)
}

fn parse_i64(alias: &'static str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AddressError::NonNumericField {
            field: alias,
            value: raw.to_string(),
        })
}
