//! Free-text rule decoding.
//!
//! Spreadsheet rows arrive with Yes/No flags, percentage strings like
//! `"20% along height"`, and lifespan categories. This module turns them into
//! the typed parameters the engine consumes, with documented defaults, so the
//! numeric code never sees raw text.

use crate::part::{PackDensity, Part};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decodes an affirmative flag. Case-insensitive `yes`, `y`, `true` and `1`
/// are true; everything else (including empty) is false.
pub fn parse_flag(text: &str) -> bool {
    matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

/// Extracts the first numeric substring of `text`, if any.
fn first_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit() || c == '.')?;
    let tail = &text[start..];
    let end = tail
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(tail.len());
    tail[..end].parse().ok()
}

/// Decodes a percentage from free text (`"20%"`, `"0.2"`, `"20% of height"`).
///
/// A plain value at or below 1.0 is read as a fraction and scaled by 100;
/// larger values are taken as already-percent. The result is clamped to
/// [0, 100]; unparsable text decodes to 0.
pub fn parse_percent(text: &str) -> f64 {
    match first_number(text) {
        Some(value) if value <= 1.0 => (value * 100.0).clamp(0.0, 100.0),
        Some(value) => value.clamp(0.0, 100.0),
        None => 0.0,
    }
}

/// Decodes a lifespan category into a packing-density preference.
///
/// Keyword match first (`long`/`high`/`durable`, `medium`/`mid`), then a
/// numeric year count with thresholds (>= 5 years loose, >= 2 relaxed).
/// Absent or unparsable text defaults to tight packing.
pub fn parse_density(text: &str) -> PackDensity {
    let lower = text.trim().to_ascii_lowercase();
    if lower.contains("long") || lower.contains("high") || lower.contains("durable") {
        return PackDensity::Loose;
    }
    if lower.contains("medium") || lower.contains("mid") {
        return PackDensity::Relaxed;
    }
    match first_number(&lower) {
        Some(years) if years >= 5.0 => PackDensity::Loose,
        Some(years) if years >= 2.0 => PackDensity::Relaxed,
        _ => PackDensity::Tight,
    }
}

/// Lenient numeric coercion: invalid text becomes 0.
///
/// A 0 dimension makes every orientation infeasible for that part, so bad
/// input surfaces as a NO FIT row rather than a crash.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// One raw spreadsheet row, all fields as uploaded text.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartRow {
    /// Part name or SKU.
    pub name: String,
    /// Width, as text.
    pub width: String,
    /// Length, as text.
    pub length: String,
    /// Height, as text.
    pub height: String,
    /// Unit weight, as text (optional column).
    pub weight: String,
    /// Required quantity, as text (optional column).
    pub qty: String,
    /// Fragile flag column.
    pub fragile: String,
    /// Stacking flag column.
    pub stacking: String,
    /// Nesting flag column.
    pub nesting: String,
    /// Nesting percentage column.
    pub nest_pct: String,
    /// Lifespan category column.
    pub lifespan: String,
}

impl PartRow {
    /// Decodes the row into a typed [`Part`].
    ///
    /// Numerics coerce invalid values to 0; a missing stacking column reads
    /// as not stackable, so callers that do not carry rule columns should
    /// fill `stacking` with `"yes"`.
    pub fn into_part(self) -> Part {
        let mut part = Part::new(
            self.name,
            parse_number(&self.width),
            parse_number(&self.length),
            parse_number(&self.height),
        )
        .with_fragile(parse_flag(&self.fragile))
        .with_stackable(parse_flag(&self.stacking))
        .with_density(parse_density(&self.lifespan));

        let weight = parse_number(&self.weight);
        if weight > 0.0 {
            part = part.with_weight(weight);
        }

        let qty = parse_number(&self.qty);
        if qty >= 1.0 {
            part = part.with_quantity(qty as usize);
        }

        if parse_flag(&self.nesting) {
            part = part.with_nesting(parse_percent(&self.nest_pct));
        }

        part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_flag() {
        for truthy in ["yes", "Yes", "Y", "TRUE", "1", " y "] {
            assert!(parse_flag(truthy), "{truthy:?} should be true");
        }
        for falsy in ["no", "n", "0", "", "maybe"] {
            assert!(!parse_flag(falsy), "{falsy:?} should be false");
        }
    }

    #[test]
    fn test_parse_percent() {
        assert_relative_eq!(parse_percent("20%"), 20.0);
        assert_relative_eq!(parse_percent("20% along height"), 20.0);
        assert_relative_eq!(parse_percent("0.2"), 20.0);
        assert_relative_eq!(parse_percent("1"), 100.0);
        assert_relative_eq!(parse_percent("150"), 100.0);
        assert_relative_eq!(parse_percent("junk"), 0.0);
    }

    #[test]
    fn test_parse_density() {
        assert_eq!(parse_density("Long life"), PackDensity::Loose);
        assert_eq!(parse_density("durable"), PackDensity::Loose);
        assert_eq!(parse_density("medium"), PackDensity::Relaxed);
        assert_eq!(parse_density("7 years"), PackDensity::Loose);
        assert_eq!(parse_density("3"), PackDensity::Relaxed);
        assert_eq!(parse_density("1 year"), PackDensity::Tight);
        assert_eq!(parse_density(""), PackDensity::Tight);
    }

    #[test]
    fn test_parse_number_coerces_invalid_to_zero() {
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number(" 40 "), 40.0);
        assert_eq!(parse_number("n/a"), 0.0);
    }

    #[test]
    fn test_row_decoding() {
        let row = PartRow {
            name: "Cup".into(),
            width: "80".into(),
            length: "80".into(),
            height: "95".into(),
            weight: "0.12".into(),
            qty: "250".into(),
            fragile: "No".into(),
            stacking: "Yes".into(),
            nesting: "Yes".into(),
            nest_pct: "15%".into(),
            lifespan: "short".into(),
        };

        let part = row.into_part();
        assert_eq!(part.id(), "Cup");
        assert_eq!(part.quantity(), 250);
        assert!(part.is_stackable());
        assert!(part.is_nested());
        assert_relative_eq!(part.nest_pct(), 15.0);
        assert_eq!(part.weight(), Some(0.12));
        assert_eq!(part.density(), PackDensity::Tight);
        assert!(part.validate().is_ok());
    }

    #[test]
    fn test_row_with_bad_numerics_fails_validation() {
        let row = PartRow {
            name: "Broken".into(),
            width: "wide".into(),
            length: "10".into(),
            height: "10".into(),
            stacking: "yes".into(),
            ..Default::default()
        };
        // Width coerces to 0; the part is well-formed text-wise but invalid.
        assert!(row.into_part().validate().is_err());
    }
}
