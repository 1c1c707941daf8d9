//! Non-interactive subcommands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use cost_core::equations::generate_equations_markdown;
use cost_core::factors::{
    FactorTable, COMPRESSOR_MATERIALS, DRIVE_TYPES, EXCHANGER_MATERIALS, TRAY_MATERIALS, TRAY_TYPES, VESSEL_MATERIALS,
};
use cost_core::report::render_summary;
use cost_core::{EquipmentItem, Estimate, LookupPolicy};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::output;

/// What an `eval` document turned out to be.
#[derive(Debug)]
pub enum Document {
    Item(EquipmentItem),
    Estimate(Estimate),
}

/// Read a document from a file, or stdin for `-`.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Decide between a single item (`{"type": ...}`) and an estimate (`{"meta": ...}`).
pub fn parse_document(text: &str) -> anyhow::Result<Document> {
    let value: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    let Some(object) = value.as_object() else {
        anyhow::bail!("expected a JSON object holding an equipment item or an estimate");
    };

    if object.contains_key("type") {
        let item = serde_json::from_value(value).context("invalid equipment item")?;
        Ok(Document::Item(item))
    } else if object.contains_key("meta") {
        let estimate = serde_json::from_value(value).context("invalid estimate")?;
        Ok(Document::Estimate(estimate))
    } else {
        anyhow::bail!("expected an equipment item (with \"type\") or an estimate (with \"meta\")")
    }
}

/// Price a document and print it.
///
/// `--strict` tightens an estimate's own policy; it never loosens it.
pub fn eval(
    out: &mut impl Write,
    document: Document,
    format: OutputFormat,
    policy: LookupPolicy,
) -> anyhow::Result<()> {
    match document {
        Document::Item(item) => {
            debug!(label = item.label(), "evaluating single item");
            let result = item.calculate(policy)?;
            match format {
                OutputFormat::Text => output::item_result(out, item.label(), &result)?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
            }
        }
        Document::Estimate(mut estimate) => {
            if policy == LookupPolicy::Strict {
                estimate.settings.lookup_policy = LookupPolicy::Strict;
            }
            debug!(items = estimate.item_count(), "evaluating estimate");
            let summary = estimate.evaluate()?;
            match format {
                OutputFormat::Text => write!(out, "{}", render_summary(&estimate, &summary))?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?,
            }
        }
    }
    Ok(())
}

fn table<T: Copy>(out: &mut impl Write, table: &FactorTable<T>, value: impl Fn(T) -> String) -> io::Result<()> {
    writeln!(out, "{}:", table.name())?;
    for (key, v) in table.iter() {
        writeln!(out, "  {:<36} {}", key, value(v))?;
    }
    writeln!(out)
}

fn entries<T: Copy + Serialize>(table: &FactorTable<T>) -> serde_json::Result<Value> {
    serde_json::to_value(table.iter().collect::<Vec<_>>())
}

/// Print every factor table, text or JSON.
pub fn tables(out: &mut impl Write, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            table(out, &VESSEL_MATERIALS, |m| {
                format!("F_M = {:.1}, ρ = {:.0} lb/ft³", m.cost_factor, m.density_lb_ft3)
            })?;
            table(out, &TRAY_TYPES, |f| format!("F_TT = {:.2}", f))?;
            table(out, &TRAY_MATERIALS, |f| format!("F_TM = {:.3}", f))?;
            table(out, &EXCHANGER_MATERIALS, |c| format!("a = {:.2}, b = {:.2}", c.a, c.b))?;
            table(out, &DRIVE_TYPES, |f| format!("F_D = {:.2}", f))?;
            table(out, &COMPRESSOR_MATERIALS, |f| format!("F_M = {:.1}", f))?;
        }
        OutputFormat::Json => {
            let mut json = Map::new();
            json.insert(VESSEL_MATERIALS.name().to_string(), entries(&VESSEL_MATERIALS)?);
            json.insert(TRAY_TYPES.name().to_string(), entries(&TRAY_TYPES)?);
            json.insert(TRAY_MATERIALS.name().to_string(), entries(&TRAY_MATERIALS)?);
            json.insert(EXCHANGER_MATERIALS.name().to_string(), entries(&EXCHANGER_MATERIALS)?);
            json.insert(DRIVE_TYPES.name().to_string(), entries(&DRIVE_TYPES)?);
            json.insert(COMPRESSOR_MATERIALS.name().to_string(), entries(&COMPRESSOR_MATERIALS)?);
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

pub fn equations(out: &mut impl Write) -> anyhow::Result<()> {
    write!(out, "{}", generate_equations_markdown())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use cost_core::{CostError, ErrorKind};

    use super::*;

    const COMPRESSOR_JSON: &str = r#"{
        "type": "Compressor",
        "label": "K-101",
        "inlet_flow_ft3_min": 500.0,
        "inlet_pressure_psia": 14.7,
        "outlet_pressure_psia": 44.1,
        "specific_heat_ratio": 1.4,
        "efficiency": 0.78,
        "drive": "diesel",
        "material": "carbon steel"
    }"#;

    fn run(document: Document, format: OutputFormat, policy: LookupPolicy) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        eval(&mut buf, document, format, policy)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn parses_single_item() {
        let doc = parse_document(COMPRESSOR_JSON).expect("should parse");
        assert!(matches!(doc, Document::Item(EquipmentItem::Compressor(_))));
    }

    #[test]
    fn parses_estimate() {
        let mut estimate = Estimate::new("J. Estimator", "EB-2025", "Styrene Co");
        estimate.add_item(serde_json::from_str(COMPRESSOR_JSON).expect("item"));
        let json = serde_json::to_string(&estimate).expect("serialize");

        let doc = parse_document(&json).expect("should parse");
        assert!(matches!(doc, Document::Estimate(ref e) if e.item_count() == 1));
    }

    #[test]
    fn rejects_unrecognized_documents() {
        assert!(parse_document("[1, 2]").is_err());
        assert!(parse_document(r#"{"label": "X"}"#).is_err());
        assert!(parse_document("not json").is_err());
    }

    #[test]
    fn eval_item_text_and_json() {
        let text = run(parse_document(COMPRESSOR_JSON).unwrap(), OutputFormat::Text, LookupPolicy::Permissive)
            .expect("permissive eval");
        assert!(text.contains("COMPRESSOR - K-101"));
        assert!(text.contains("drive type 'diesel' → electric"));

        let json = run(parse_document(COMPRESSOR_JSON).unwrap(), OutputFormat::Json, LookupPolicy::Permissive)
            .expect("permissive eval");
        let value: Value = serde_json::from_str(&json).expect("json output");
        assert_eq!(value["type"], "Compressor");
        assert_eq!(value["drive"]["matched"], false);
    }

    #[test]
    fn strict_flag_surfaces_engine_error() {
        let err = run(parse_document(COMPRESSOR_JSON).unwrap(), OutputFormat::Text, LookupPolicy::Strict)
            .expect_err("strict eval should fail");
        let engine = err.downcast_ref::<CostError>().expect("engine error");
        assert_eq!(engine.kind(), ErrorKind::UnknownKey);
    }

    #[test]
    fn strict_flag_tightens_estimate_policy() {
        let mut estimate = Estimate::default();
        estimate.add_item(serde_json::from_str(COMPRESSOR_JSON).expect("item"));

        let ok = run(Document::Estimate(estimate.clone()), OutputFormat::Text, LookupPolicy::Permissive)
            .expect("permissive estimate");
        assert!(ok.contains("# Equipment Cost Sheet"));

        let err = run(Document::Estimate(estimate), OutputFormat::Json, LookupPolicy::Strict)
            .expect_err("strict estimate should fail");
        assert!(err.downcast_ref::<CostError>().is_some());
    }

    #[test]
    fn tables_list_every_table() {
        let mut buf = Vec::new();
        tables(&mut buf, OutputFormat::Text).expect("tables");
        let text = String::from_utf8(buf).expect("utf8");
        for name in ["vessel material:", "tray type:", "tray material:", "drive type:", "compressor material:"] {
            assert!(text.contains(name), "missing {}", name);
        }
        assert!(text.contains("stainless steel 316"));

        let mut buf = Vec::new();
        tables(&mut buf, OutputFormat::Json).expect("tables");
        let value: Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(value["drive type"].as_array().map(Vec::len), Some(3));
    }
}
