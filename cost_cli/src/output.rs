//! Console rendering shared by the menu and `eval`.

use std::io::{self, Write};

use cost_core::calculations::UtilitiesResult;
use cost_core::report::{self, DetailRow};
use cost_core::{CostError, EquipmentResult};

const RULE: &str = "═══════════════════════════════════════════════════════";

pub fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  {}", title)?;
    writeln!(out, "{}", RULE)
}

fn rows(out: &mut impl Write, rows: &[DetailRow]) -> io::Result<()> {
    let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for row in rows {
        writeln!(out, "  {:<width$}  {}", row.name, row.value, width = width)?;
    }
    Ok(())
}

/// Every intermediate of one item, then its fallback notes.
pub fn item_result(out: &mut impl Write, label: &str, result: &EquipmentResult) -> io::Result<()> {
    let summary = result.cost_result();
    banner(out, &format!("{} - {}", summary.equipment.to_uppercase(), label))?;
    rows(out, &report::detail_rows(result))?;

    let used: Vec<String> = result
        .equations()
        .iter()
        .map(|eq| {
            let meta = eq.metadata();
            format!("{} [{}]", meta.name, meta.reference.short_form())
        })
        .collect();
    writeln!(out)?;
    writeln!(out, "Correlations: {}", used.join(", "))?;

    let notes = result.unmatched_keys();
    if !notes.is_empty() {
        writeln!(out)?;
        writeln!(out, "Defaults applied:")?;
        for note in notes {
            writeln!(out, "  - {}", note)?;
        }
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  TOTAL PURCHASED COST: {}", summary.total_cost)?;
    writeln!(out, "{}", RULE)
}

pub fn utilities_result(out: &mut impl Write, result: &UtilitiesResult) -> io::Result<()> {
    banner(out, "UTILITY CONSUMPTION")?;
    rows(out, &report::utilities_rows(result))?;
    writeln!(out, "{}", RULE)
}

/// Human message followed by the structured error JSON.
pub fn engine_error(out: &mut impl Write, error: &CostError) -> io::Result<()> {
    writeln!(out, "Error: {}", error)?;
    if let Ok(json) = serde_json::to_string_pretty(error) {
        writeln!(out)?;
        writeln!(out, "Error JSON:")?;
        writeln!(out, "{}", json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use cost_core::calculations::{EquipmentItem, ReactorInput};
    use cost_core::LookupPolicy;

    use super::*;

    #[test]
    fn item_result_prints_total_and_notes() {
        let item = EquipmentItem::Reactor(ReactorInput::with_dimensions("R-101", 6.0, 15.0, "unobtainium"));
        let result = item.calculate(LookupPolicy::Permissive).expect("reactor should price");

        let mut buf = Vec::new();
        item_result(&mut buf, item.label(), &result).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.contains("REACTOR - R-101"));
        assert!(text.contains("Shell weight W"));
        assert!(text.contains("vessel material 'unobtainium' → carbon steel"));
        assert!(text.contains("TOTAL PURCHASED COST: $"));
        assert!(text.contains("Correlations: "));
        assert!(text.contains("[Seider]"));
    }

    #[test]
    fn engine_error_includes_json() {
        let mut buf = Vec::new();
        engine_error(&mut buf, &CostError::missing_field("length_ft")).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.starts_with("Error: Missing required field: length_ft"));
        assert!(text.contains("\"type\": \"MissingField\""));
    }
}
