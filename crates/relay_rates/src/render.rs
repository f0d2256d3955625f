//! Console rendering of a rate summary.

use relay_core::RateSummary;
use relay_error::RelayResult;
use std::fmt::Display;
use std::io::Write;

/// Printed in place of any value the response did not carry.
pub const PLACEHOLDER: &str = "None";

const RULE_WIDTH: usize = 50;
const SOURCE_LABEL: &str = "open.er-api.com";

fn or_placeholder<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

/// Writes the summary block.
///
/// Rates print as the JSON number they arrived as: integers without a
/// decimal point, fractions in shortest round-trip form. Exponents use
/// Rust's notation (`1e-5`), not a zero-padded one.
///
/// ```text
/// ==================================================
/// Live API Response from open.er-api.com
/// ==================================================
/// Base Currency: USD
/// Last Updated: Mon, 01 Jan 2024 00:00:01 +0000
///
/// INR Exchange Rate: 83.5
/// ==================================================
/// ```
pub fn render_summary<W: Write>(summary: &RateSummary, out: &mut W) -> RelayResult<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{}", rule)?;
    writeln!(out, "Live API Response from {}", SOURCE_LABEL)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Base Currency: {}", or_placeholder(summary.base_code().as_deref()))?;
    writeln!(out, "Last Updated: {}", or_placeholder(summary.last_updated().as_deref()))?;
    writeln!(out)?;
    writeln!(out, "{} Exchange Rate: {}", summary.target(), or_placeholder(summary.rate().as_ref()))?;
    writeln!(out, "{}", rule)?;
    out.flush()?;
    Ok(())
}
