//! Deterministic address line assembly.
//!
//! Line 1 follows the component ordering of the upstream civic schema;
//! line 2 carries the USPS Pub 28 secondary unit designators. Both are pure
//! token joins: absent tokens are skipped, survivors are joined with a
//! single space.

use addr_model::AddressComponents;

/// Unit values already carrying one of these prefixes are emitted verbatim
/// on line 2 instead of being wrapped in `UNIT ...`.
const UNIT_PREFIXES: &[&str] = &["APT", "UNIT"];

/// Assemble address line 1.
///
/// Token order: number, number suffix, pre-modifier, pre-directional,
/// pre-type, pre-separator, street name, post-type, post-directional,
/// post-modifier.
///
/// The pre-separator is an integer in the source schema although it stands
/// for a preposition ("of" in "Avenue of the Americas"); its decimal string
/// form is inserted positionally, preserving the upstream behavior.
pub fn address_line_1(components: &AddressComponents) -> String {
    let pre_sep = components.street_pre_sep.map(|v| v.to_string());
    let parts = [
        components.address_number.as_deref(),
        components.address_number_suffix.as_deref(),
        components.street_pre_mod.as_deref(),
        components.street_pre_dir.as_deref(),
        components.street_pre_type.as_deref(),
        pre_sep.as_deref(),
        Some(components.street_name.as_str()),
        components.street_post_type.as_deref(),
        components.street_post_dir.as_deref(),
        components.street_post_mod.as_deref(),
    ];
    join_present(&parts)
}

/// Assemble address line 2 (secondary unit designators).
///
/// `BLDG <building>`, `FL <floor>`, then the unit: if the unit value
/// already leads with a recognized designator (`APT`, `UNIT`) it is emitted
/// verbatim so the prefix is not doubled; otherwise it is wrapped as
/// `UNIT <unit>`. Empty when no secondary designator is present.
pub fn address_line_2(components: &AddressComponents) -> String {
    let building = components.building.as_deref().map(|b| format!("BLDG {b}"));
    let floor = components.floor.as_deref().map(|f| format!("FL {f}"));
    let unit = components.unit.as_deref().map(|u| {
        let upper = u.to_uppercase();
        if UNIT_PREFIXES.iter().any(|prefix| upper.starts_with(prefix)) {
            u.to_string()
        } else {
            format!("UNIT {u}")
        }
    });

    let parts = [building.as_deref(), floor.as_deref(), unit.as_deref()];
    join_present(&parts)
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .filter_map(|part| *part)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components() -> AddressComponents {
        AddressComponents::new(1, "SMOKY HILL")
    }

    #[test]
    fn line_1_orders_all_tokens() {
        let mut c = components();
        c.address_number = Some("22959".to_string());
        c.address_number_suffix = Some("1/2".to_string());
        c.street_pre_mod = Some("OLD".to_string());
        c.street_pre_dir = Some("E".to_string());
        c.street_pre_type = Some("AVENUE".to_string());
        c.street_pre_sep = Some(5);
        c.street_post_type = Some("RD".to_string());
        c.street_post_dir = Some("SW".to_string());
        c.street_post_mod = Some("EXTENDED".to_string());
        assert_eq!(
            address_line_1(&c),
            "22959 1/2 OLD E AVENUE 5 SMOKY HILL RD SW EXTENDED"
        );
    }

    #[test]
    fn line_1_skips_absent_tokens() {
        let mut c = components();
        c.address_number = Some("22959".to_string());
        c.street_pre_dir = Some("E".to_string());
        c.street_post_type = Some("RD".to_string());
        assert_eq!(address_line_1(&c), "22959 E SMOKY HILL RD");
    }

    #[test]
    fn pre_separator_is_stringified_integer() {
        let mut c = components();
        c.street_pre_type = Some("AVENUE".to_string());
        c.street_pre_sep = Some(0);
        assert_eq!(address_line_1(&c), "AVENUE 0 SMOKY HILL");
    }

    #[test]
    fn line_2_prefixes_designators() {
        let mut c = components();
        c.building = Some("E".to_string());
        c.floor = Some("2".to_string());
        c.unit = Some("12B".to_string());
        assert_eq!(address_line_2(&c), "BLDG E FL 2 UNIT 12B");
    }

    #[test]
    fn recognized_unit_prefix_is_not_doubled() {
        let mut c = components();
        c.unit = Some("APT E101".to_string());
        assert_eq!(address_line_2(&c), "APT E101");

        c.unit = Some("apt 3".to_string());
        assert_eq!(address_line_2(&c), "apt 3");

        c.unit = Some("UNIT 5".to_string());
        assert_eq!(address_line_2(&c), "UNIT 5");
    }

    #[test]
    fn line_2_empty_without_designators() {
        assert_eq!(address_line_2(&components()), "");
    }
}
