//! Cleanup rule engine.
//!
//! Rules run as a strict left-to-right fold over the bulk table: each rule
//! observes exactly the state the previous rules produced. Authors rely on
//! the sequencing (normalize a value, then exclude the normalized form), so
//! there is no reordering, batching, or short-circuiting here.

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, IntoLazy, col, lit, when};
use tracing::info;

use addr_model::CleanupRule;

/// Apply an ordered rule list to the table.
pub fn apply_rules(df: DataFrame, rules: &[CleanupRule]) -> Result<DataFrame> {
    let mut df = df;
    for (index, rule) in rules.iter().enumerate() {
        df = apply_rule(df, rule)
            .with_context(|| format!("rule {index} on field {}", rule.field()))?;
    }
    Ok(df)
}

/// Apply a single rule, logging its observable effect.
pub fn apply_rule(df: DataFrame, rule: &CleanupRule) -> Result<DataFrame> {
    match rule {
        CleanupRule::Replace {
            field,
            matches,
            replacement,
        } => {
            let matched = df
                .clone()
                .lazy()
                .filter(col(field.as_str()).eq(lit(matches.as_str())))
                .collect()?
                .height();
            let df = if matched > 0 {
                df.lazy()
                    .with_column(
                        when(col(field.as_str()).eq(lit(matches.as_str())))
                            .then(lit(replacement.as_str()))
                            .otherwise(col(field.as_str()))
                            .alias(field.as_str()),
                    )
                    .collect()?
            } else {
                df
            };
            info!(%field, %matches, %replacement, matched, "replace rule");
            Ok(df)
        }
        CleanupRule::Exclude { field, matches } => {
            let before = df.height();
            let df = df
                .lazy()
                .filter(
                    col(field.as_str())
                        .neq(lit(matches.as_str()))
                        .or(col(field.as_str()).is_null()),
                )
                .collect()?;
            let dropped = before - df.height();
            info!(%field, %matches, dropped, remaining = df.height(), "exclude rule");
            Ok(df)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    fn city_frame() -> DataFrame {
        DataFrame::new(vec![Column::new(
            "PlaceName".into(),
            &["SPRINGS", "Springs", "AURORA"],
        )])
        .unwrap()
    }

    fn city_values(df: &DataFrame) -> Vec<String> {
        let column = df.column("PlaceName").unwrap();
        (0..df.height())
            .map(|idx| {
                column
                    .get(idx)
                    .unwrap()
                    .to_string()
                    .trim_matches('"')
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn replace_rewrites_exact_matches_only() {
        let df = apply_rule(
            city_frame(),
            &CleanupRule::replace("PlaceName", "SPRINGS", "Springs"),
        )
        .unwrap();
        assert_eq!(city_values(&df), vec!["Springs", "Springs", "AURORA"]);
    }

    #[test]
    fn exclude_drops_matching_rows() {
        let df = apply_rule(city_frame(), &CleanupRule::exclude("PlaceName", "Springs")).unwrap();
        assert_eq!(city_values(&df), vec!["SPRINGS", "AURORA"]);
    }

    #[test]
    fn rule_order_changes_surviving_rows() {
        let replace_then_exclude = apply_rules(
            city_frame(),
            &[
                CleanupRule::replace("PlaceName", "SPRINGS", "Springs"),
                CleanupRule::exclude("PlaceName", "Springs"),
            ],
        )
        .unwrap();
        let exclude_then_replace = apply_rules(
            city_frame(),
            &[
                CleanupRule::exclude("PlaceName", "Springs"),
                CleanupRule::replace("PlaceName", "SPRINGS", "Springs"),
            ],
        )
        .unwrap();

        assert_eq!(replace_then_exclude.height(), 1);
        assert_eq!(exclude_then_replace.height(), 2);
        assert_eq!(city_values(&replace_then_exclude), vec!["AURORA"]);
        assert_eq!(
            city_values(&exclude_then_replace),
            vec!["Springs", "AURORA"]
        );
    }

    #[test]
    fn nulls_survive_exclusion() {
        let df = DataFrame::new(vec![Column::new(
            "PlaceName".into(),
            &[Some("Springs"), None, Some("AURORA")],
        )])
        .unwrap();
        let df = apply_rule(df, &CleanupRule::exclude("PlaceName", "Springs")).unwrap();
        assert_eq!(df.height(), 2);
    }
}
