//! Output rendering.
//!
//! Text output is for the person at the till: amounts carry the configured
//! currency symbol and decimal places. JSON output is the engine's result
//! types as-is (camelCase, same shape the UI bindings describe), so it can
//! be piped into other tools.

use clap::ValueEnum;
use serde::Serialize;

use tender_core::{Combination, GenerationResult};

use crate::config::{CurrencyConfig, MAX_MINOR_DIGITS};
use crate::error::CliResult;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// =============================================================================
// Reports
// =============================================================================

/// Sale figures shown when change was derived from a tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sale {
    pub total: i64,
    pub tendered: i64,
}

/// Everything `change` and `tendered` print.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale: Option<Sale>,
    pub amount_owed: i64,
    #[serde(flatten)]
    pub result: &'a GenerationResult,
}

/// What `representable` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentableReport {
    pub amount: i64,
    pub givable_amount: u64,
    pub remainder: u64,
}

// =============================================================================
// Rendering
// =============================================================================

pub fn render_change(
    report: &ChangeReport<'_>,
    format: OutputFormat,
    currency: &CurrencyConfig,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(change_text(report, currency)),
    }
}

pub fn render_representable(
    report: &RepresentableReport,
    format: OutputFormat,
    currency: &CurrencyConfig,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok([
            format!("Amount:    {}", format_amount(i128::from(report.amount), currency)),
            format!("Givable:   {}", format_amount(i128::from(report.givable_amount), currency)),
            format!("Remainder: {}", format_amount(i128::from(report.remainder), currency)),
        ]
        .join("\n")),
    }
}

fn change_text(report: &ChangeReport<'_>, currency: &CurrencyConfig) -> String {
    let mut out = Vec::new();

    if let Some(sale) = report.sale {
        out.push(format!(
            "Total: {}  Tendered: {}",
            format_amount(i128::from(sale.total), currency),
            format_amount(i128::from(sale.tendered), currency)
        ));
    }

    let result = report.result;
    if result.is_empty() && result.remainder == 0 {
        out.push("No change due.".to_string());
        return out.join("\n");
    }

    out.push(format!(
        "Change due: {}",
        format_amount(i128::from(report.amount_owed), currency)
    ));
    out.push(format!(
        "Givable: {}  Remainder: {}",
        format_amount(i128::from(result.givable_amount), currency),
        format_amount(i128::from(result.remainder), currency)
    ));

    for (index, combination) in result.combinations.iter().enumerate() {
        out.push(String::new());
        push_combination(&mut out, index + 1, combination, currency);
    }

    out.join("\n")
}

fn push_combination(
    out: &mut Vec<String>,
    position: usize,
    combination: &Combination,
    currency: &CurrencyConfig,
) {
    let plural = if combination.total_notes == 1 { "" } else { "s" };
    out.push(format!(
        "{}. {} ({} note{})",
        position, combination.strategy_name, combination.total_notes, plural
    ));
    out.push(format!("   {}", combination.description));

    let width = combination
        .lines
        .iter()
        .map(|line| format_amount(i128::from(line.denomination), currency).len())
        .max()
        .unwrap_or(0);

    for line in &combination.lines {
        out.push(format!(
            "   {:>4} x {:<width$}  = {}",
            line.count,
            format_amount(i128::from(line.denomination), currency),
            format_amount(i128::from(line.total), currency),
            width = width
        ));
    }
}

/// Formats an amount in minor units, e.g. `123456` with two minor digits
/// and `€` becomes `€1,234.56`.
pub fn format_amount(minor: i128, currency: &CurrencyConfig) -> String {
    let digits = currency.minor_digits.min(MAX_MINOR_DIGITS);
    let sign = if minor < 0 { "-" } else { "" };
    let magnitude = minor.unsigned_abs();
    let scale = 10u128.pow(u32::from(digits));
    let whole = group_thousands(magnitude / scale);

    if digits == 0 {
        format!("{}{}{}", sign, currency.symbol, whole)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            currency.symbol,
            whole,
            magnitude % scale,
            width = usize::from(digits)
        )
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tender_core::generate;

    const STANDARD: [u64; 7] = [500, 250, 100, 50, 25, 10, 5];

    fn dollars() -> CurrencyConfig {
        CurrencyConfig::default()
    }

    fn euros() -> CurrencyConfig {
        CurrencyConfig {
            symbol: "€".to_string(),
            minor_digits: 2,
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0, &dollars()), "$0");
        assert_eq!(format_amount(137, &dollars()), "$137");
        assert_eq!(format_amount(1_234_567, &dollars()), "$1,234,567");
        assert_eq!(format_amount(-2500, &dollars()), "-$2,500");

        assert_eq!(format_amount(5, &euros()), "€0.05");
        assert_eq!(format_amount(123_456, &euros()), "€1,234.56");
        assert_eq!(format_amount(-100, &euros()), "-€1.00");
    }

    #[test]
    fn test_change_text() {
        let result = generate(137, &STANDARD).unwrap();
        let report = ChangeReport {
            sale: None,
            amount_owed: 137,
            result: &result,
        };

        let text = render_change(&report, OutputFormat::Text, &dollars()).unwrap();
        assert!(text.starts_with("Change due: $137\nGivable: $135  Remainder: $2"));
        assert!(text.contains("1. Fewest notes (3 notes)"));
        assert!(text.contains("1 x $100  = $100"));
        assert!(text.contains("2. Balanced mix"));
    }

    #[test]
    fn test_change_text_with_sale() {
        let result = generate(865, &STANDARD).unwrap();
        let report = ChangeReport {
            sale: Some(Sale {
                total: 1135,
                tendered: 2000,
            }),
            amount_owed: 865,
            result: &result,
        };

        let text = render_change(&report, OutputFormat::Text, &euros()).unwrap();
        assert!(text.starts_with("Total: €11.35  Tendered: €20.00\nChange due: €8.65"));
    }

    #[test]
    fn test_no_change_due_text() {
        let result = generate(0, &STANDARD).unwrap();
        let report = ChangeReport {
            sale: None,
            amount_owed: 0,
            result: &result,
        };

        let text = render_change(&report, OutputFormat::Text, &dollars()).unwrap();
        assert_eq!(text, "No change due.");
    }

    #[test]
    fn test_below_minimum_text() {
        let result = generate(3, &[100, 25, 10, 5]).unwrap();
        let report = ChangeReport {
            sale: None,
            amount_owed: 3,
            result: &result,
        };

        let text = render_change(&report, OutputFormat::Text, &dollars()).unwrap();
        assert!(text.contains("Givable: $0  Remainder: $3"));
        assert!(text.contains("Below smallest denomination (0 notes)"));
    }

    #[test]
    fn test_change_json_is_flat_camel_case() {
        let result = generate(137, &STANDARD).unwrap();
        let report = ChangeReport {
            sale: None,
            amount_owed: 137,
            result: &result,
        };

        let json = render_change(&report, OutputFormat::Json, &dollars()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["amountOwed"], 137);
        assert_eq!(value["givableAmount"], 135);
        assert_eq!(value["remainder"], 2);
        assert_eq!(value["combinations"][0]["strategyId"], "greedy_largest_first");
        assert_eq!(value["combinations"][0]["totalNotes"], 3);
        assert!(value.get("sale").is_none());
    }

    #[test]
    fn test_representable_output() {
        let report = RepresentableReport {
            amount: 137,
            givable_amount: 135,
            remainder: 2,
        };

        let text = render_representable(&report, OutputFormat::Text, &dollars()).unwrap();
        assert_eq!(text, "Amount:    $137\nGivable:   $135\nRemainder: $2");

        let json = render_representable(&report, OutputFormat::Json, &dollars()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["givableAmount"], 135);
    }
}
