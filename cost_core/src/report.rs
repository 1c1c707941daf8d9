//! # Cost Sheet Rendering
//!
//! Renders priced equipment as Markdown text. Adapters print or save the
//! string; this module performs no I/O.
//!
//! ## Layout
//!
//! - Header block (job, client, estimator, date, cost basis, lookup policy)
//! - Summary table, one row per item, with the grand total
//! - Per-item detail: intermediates, correction factors, fallback notes
//! - Citations for every correlation evaluated
//!
//! ## Example
//!
//! ```rust
//! use cost_core::calculations::{EquipmentItem, ReactorInput};
//! use cost_core::estimate::Estimate;
//! use cost_core::report::render_cost_sheet;
//!
//! let mut estimate = Estimate::new("J. Estimator", "EB-2025", "Styrene Co");
//! estimate.add_item(EquipmentItem::Reactor(ReactorInput::with_dimensions(
//!     "R-101", 6.0, 15.0, "stainless steel 316",
//! )));
//!
//! let sheet = render_cost_sheet(&estimate).unwrap();
//! assert!(sheet.contains("| R-101 | Reactor |"));
//! assert!(sheet.contains("$222,993.11"));
//! ```

use std::fmt::Write as _;

use crate::calculations::{EquipmentResult, UtilitiesResult};
use crate::equations::EquationTracker;
use crate::errors::EstimateResult;
use crate::estimate::{Estimate, EstimateSummary};

/// One labelled intermediate value, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub name: String,
    pub value: String,
}

impl DetailRow {
    fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Every intermediate of a priced item in pipeline order.
///
/// Currency uses [`Dollars`](crate::units::Dollars) formatting; other
/// quantities carry their units.
pub fn detail_rows(result: &EquipmentResult) -> Vec<DetailRow> {
    let mut rows = Vec::new();

    match result {
        EquipmentResult::Reactor(r) => {
            if let Some(volume) = r.volume_ft3 {
                rows.push(DetailRow::new("Volume V", format!("{:.2} ft³", volume)));
            }
            rows.push(DetailRow::new(
                "Diameter D",
                format!(
                    "{:.4} ft{}",
                    r.diameter_ft,
                    if r.sized_from_space_time { " (sized from space time)" } else { "" }
                ),
            ));
            rows.push(DetailRow::new("Length L", format!("{:.4} ft", r.length_ft)));
            rows.push(DetailRow::new("Shell weight W", format!("{:.2} lb", r.weight_lb)));
            rows.push(DetailRow::new("Base vessel cost C_V", r.base_cost.to_string()));
            rows.push(DetailRow::new("Material-adjusted cost F_M·C_V", r.adjusted_cost.to_string()));
            rows.push(DetailRow::new("Platforms and ladders C_PL", r.platform_ladder_cost.to_string()));
        }
        EquipmentResult::Column(c) => {
            rows.push(DetailRow::new("Diameter D", format!("{:.4} ft", c.diameter_ft)));
            rows.push(DetailRow::new("Length L", format!("{:.4} ft", c.length_ft)));
            rows.push(DetailRow::new("Shell weight W", format!("{:.2} lb", c.weight_lb)));
            rows.push(DetailRow::new("Base vessel cost C_V", c.base_cost.to_string()));
            rows.push(DetailRow::new("Material-adjusted cost F_M·C_V", c.adjusted_cost.to_string()));
            rows.push(DetailRow::new("Platforms and ladders C_PL", c.platform_ladder_cost.to_string()));
            rows.push(DetailRow::new("Trays N", c.tray_count.to_string()));
            rows.push(DetailRow::new("Base tray cost C_BT", c.base_tray_cost.to_string()));
            rows.push(DetailRow::new("Tray cost C_T", c.tray_cost.to_string()));
        }
        EquipmentResult::HeatExchanger(h) => {
            rows.push(DetailRow::new("Area A", format!("{:.2} ft²", h.area_ft2)));
            rows.push(DetailRow::new("Base cost C_B", h.base_cost.to_string()));
        }
        EquipmentResult::Compressor(c) => {
            rows.push(DetailRow::new("Power Pc", format!("{:.2} hp", c.power_hp)));
            rows.push(DetailRow::new("Base cost C_B", c.base_cost.to_string()));
        }
    }

    for factor in result.cost_result().correction_factors {
        rows.push(DetailRow::new(format!("{} {}", factor.symbol, factor.name), format!("{:.4}", factor.value)));
    }
    rows.push(DetailRow::new("Purchased cost", result.total_cost().to_string()));
    rows
}

/// Utility demand rows.
pub fn utilities_rows(result: &UtilitiesResult) -> Vec<DetailRow> {
    vec![
        DetailRow::new("Cooling water m_cw", format!("{:.2} kg/hr", result.cooling_water_kg_hr)),
        DetailRow::new("Fired heater duty Q_heater", format!("{:.2} kcal/hr", result.heater_duty_kcal_hr)),
        DetailRow::new("Natural gas m_ng", format!("{:.2} kg/hr", result.natural_gas_kg_hr)),
        DetailRow::new("CO₂ emissions m_CO2", format!("{:.2} kg/hr", result.co2_kg_hr)),
    ]
}

/// Evaluate an estimate and render its cost sheet.
///
/// # Errors
///
/// Any error from [`Estimate::evaluate`], unchanged.
pub fn render_cost_sheet(estimate: &Estimate) -> EstimateResult<String> {
    let summary = estimate.evaluate()?;
    Ok(render_summary(estimate, &summary))
}

/// Render an already-evaluated estimate.
pub fn render_summary(estimate: &Estimate, summary: &EstimateSummary) -> String {
    let meta = &estimate.meta;
    let mut out = String::with_capacity(4_096);

    let _ = write!(
        out,
        r#"# Equipment Cost Sheet

| | |
|---|---|
| Job | {job_id} |
| Client | {client} |
| Estimator | {estimator} |
| Date | {date} |
| Cost basis | {reference} |
| Lookup policy | {policy} |

## Purchased Equipment

| Item | Equipment | Base Cost | Purchased Cost |
|------|-----------|----------:|---------------:|
"#,
        job_id = escape_md(&meta.job_id),
        client = escape_md(&meta.client),
        estimator = escape_md(&meta.estimator),
        date = meta.modified.format("%Y-%m-%d"),
        reference = escape_md(&estimate.settings.reference),
        policy = estimate.settings.lookup_policy,
    );

    for line in &summary.lines {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            escape_md(&line.label),
            line.equipment_type,
            line.result.cost_result().base_cost,
            line.result.total_cost()
        );
    }
    let _ = writeln!(out, "| **Total** | | | **{}** |", summary.grand_total);

    if !summary.lines.is_empty() {
        out.push_str("\n## Item Detail\n");
    }
    for line in &summary.lines {
        let _ = write!(
            out,
            "\n### {} ({})\n\n| Quantity | Value |\n|---|---:|\n",
            escape_md(&line.label),
            line.equipment_type
        );
        for row in detail_rows(&line.result) {
            let _ = writeln!(out, "| {} | {} |", escape_md(&row.name), row.value);
        }
        if !line.warnings.is_empty() {
            out.push_str("\nDefaults applied:\n");
            for warning in &line.warnings {
                let _ = writeln!(out, "- {}", escape_md(warning));
            }
        }
    }

    out.push_str(&render_citations(&summary.equations));
    out
}

fn render_citations(tracker: &EquationTracker) -> String {
    if tracker.is_empty() {
        return String::new();
    }

    let usages = tracker.by_equation();
    let mut out = String::from("\n## Correlations\n");
    for (category, equations) in tracker.by_category() {
        let _ = write!(out, "\n**{}**\n\n", category.display_name());
        for equation in equations {
            let meta = equation.metadata();
            let mut labels: Vec<&str> = usages
                .get(&equation)
                .map(|u| u.iter().filter_map(|usage| usage.item_label.as_deref()).collect())
                .unwrap_or_default();
            labels.dedup();
            let _ = writeln!(
                out,
                "- {}: `{}` ({}); used by {}",
                meta.name,
                meta.formula_plain,
                meta.reference.citation(),
                escape_md(&labels.join(", "))
            );
        }
    }
    out
}

/// Escape characters that would break a Markdown table cell
fn escape_md(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '|' => "\\|".to_string(),
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '`' => "\\`".to_string(),
            '\n' | '\r' => " ".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{
        utilities, ColumnInput, CompressorInput, EquipmentItem, HeatExchangerInput, ReactorInput, UtilitiesInput,
    };
    use crate::factors::LookupPolicy;

    fn sample_estimate() -> Estimate {
        let mut estimate = Estimate::new("J. Estimator", "EB-2025", "Styrene | Co");
        estimate.add_item(EquipmentItem::Reactor(ReactorInput::from_space_time(
            "R-101",
            10.0,
            50.0,
            "stainless steel 316",
        )));
        estimate.add_item(EquipmentItem::Column(ColumnInput {
            label: "T-201".to_string(),
            diameter_ft: 5.0,
            length_ft: 40.0,
            tray_count: 25,
            material: "carbon steel".to_string(),
            tray_type: "sieve".to_string(),
            tray_material: "carbon steel".to_string(),
        }));
        estimate.add_item(EquipmentItem::HeatExchanger(HeatExchangerInput {
            label: "E-101".to_string(),
            heat_duty_btu_hr: 1.0e6,
            flux_btu_hr_ft2: 100.0,
            pressure_psig: 300.0,
            materials: "carbon steel/carbon steel".to_string(),
            tube_length_ft: 16.0,
        }));
        estimate
    }

    #[test]
    fn test_cost_sheet_sections() {
        let sheet = render_cost_sheet(&sample_estimate()).unwrap();

        assert!(sheet.starts_with("# Equipment Cost Sheet"));
        assert!(sheet.contains("| Job | EB-2025 |"));
        assert!(sheet.contains("Styrene \\| Co"));
        assert!(sheet.contains("## Purchased Equipment"));
        assert!(sheet.contains("| T-201 | Distillation Column |"));
        assert!(sheet.contains("$243,734.89"));
        assert!(sheet.contains("$126,445.14"));
        assert!(sheet.contains("**Total**"));
        assert!(sheet.contains("## Correlations"));
        assert!(sheet.contains("Seider et al."));
    }

    #[test]
    fn test_citations_name_the_items_using_them() {
        let sheet = render_cost_sheet(&sample_estimate()).unwrap();
        let weight = sheet
            .lines()
            .find(|l| l.starts_with("- Vessel Shell Weight:"))
            .expect("shell weight cited");
        assert!(weight.ends_with("used by R-101, T-201"), "{}", weight);

        let area = sheet
            .lines()
            .find(|l| l.starts_with("- Heat-Transfer Area:"))
            .expect("area cited");
        assert!(area.ends_with("used by E-101"), "{}", area);
    }

    #[test]
    fn test_rows_in_label_order() {
        let sheet = render_cost_sheet(&sample_estimate()).unwrap();
        let e = sheet.find("| E-101 |").unwrap();
        let r = sheet.find("| R-101 |").unwrap();
        let t = sheet.find("| T-201 |").unwrap();
        assert!(e < r && r < t);
    }

    #[test]
    fn test_empty_estimate_renders_zero_total() {
        let sheet = render_cost_sheet(&Estimate::default()).unwrap();
        assert!(sheet.contains("**$0.00**"));
        assert!(!sheet.contains("## Item Detail"));
        assert!(!sheet.contains("## Correlations"));
    }

    #[test]
    fn test_error_propagates() {
        let mut estimate = Estimate::default();
        estimate.add_item(EquipmentItem::Reactor(ReactorInput::with_dimensions("R-1", 0.0, 10.0, "carbon steel")));
        assert!(render_cost_sheet(&estimate).is_err());
    }

    #[test]
    fn test_fallback_notes_listed() {
        let mut estimate = Estimate::default();
        estimate.add_item(EquipmentItem::Compressor(CompressorInput {
            label: "K-101".to_string(),
            inlet_flow_ft3_min: 500.0,
            inlet_pressure_psia: 14.7,
            outlet_pressure_psia: 44.1,
            specific_heat_ratio: 1.4,
            efficiency: 0.78,
            drive: "diesel".to_string(),
            material: "carbon steel".to_string(),
        }));
        let sheet = render_cost_sheet(&estimate).unwrap();
        assert!(sheet.contains("Defaults applied:"));
        assert!(sheet.contains("drive type 'diesel' → electric"));
    }

    #[test]
    fn test_reactor_detail_rows() {
        let item = EquipmentItem::Reactor(ReactorInput::from_space_time("R-101", 10.0, 50.0, "carbon steel"));
        let result = item.calculate(LookupPolicy::Permissive).unwrap();
        let rows = detail_rows(&result);

        assert_eq!(rows[0], DetailRow::new("Volume V", "500.00 ft³"));
        assert!(rows[1].value.ends_with("(sized from space time)"));
        assert!(rows.iter().any(|r| r.name.starts_with("F_M")));
        assert_eq!(rows.last().map(|r| r.name.as_str()), Some("Purchased cost"));
    }

    #[test]
    fn test_utilities_rows() {
        let result = utilities::calculate(&UtilitiesInput::default()).unwrap();
        let rows = utilities_rows(&result);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].value, "538868.75 kg/hr");
        assert_eq!(rows[1].value, "8993000.00 kcal/hr");
    }
}
