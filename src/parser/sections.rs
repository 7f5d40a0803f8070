//! Section-specific parsers for cut request files.

use crate::error::{CutListError, Result};
use crate::model::PartRequirement;

/// A section line with its 1-based line number.
pub type NumberedLine<'a> = (usize, &'a str);

/// Parse a key=value pair from a line.
pub fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();
    Some((key, value))
}

/// Check if a line carries no data (blank or comment).
pub fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with(';') || line.starts_with('#')
}

/// Parse a float value for `key`.
pub fn parse_float(line: usize, key: &str, value: &str) -> Result<f64> {
    value.parse().map_err(|_| CutListError::ParseError {
        line,
        message: format!("Invalid number for '{}': '{}'", key, value),
    })
}

/// Parse a non-negative integer value for `key`.
pub fn parse_unsigned(line: usize, key: &str, value: &str) -> Result<u32> {
    value.parse().map_err(|_| CutListError::ParseError {
        line,
        message: format!("Invalid whole number for '{}': '{}'", key, value),
    })
}

/// Parse a comma-separated list of floats.
pub fn parse_float_list(line: usize, key: &str, value: &str) -> Result<Vec<f64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse_float(line, key, item))
        .collect()
}

/// Split section lines into key/value entries, skipping blanks and comments.
fn entries<'a>(lines: &[NumberedLine<'a>]) -> Result<Vec<(usize, &'a str, &'a str)>> {
    lines
        .iter()
        .filter(|(_, line)| !is_blank_or_comment(line))
        .map(|&(number, line)| {
            parse_key_value(line)
                .map(|(key, value)| (number, key, value))
                .ok_or_else(|| CutListError::ParseError {
                    line: number,
                    message: format!("Expected key=value, got '{}'", line.trim()),
                })
        })
        .collect()
}

/// Stock section data.
#[derive(Debug, Default)]
pub struct StockData {
    pub lengths: Option<Vec<f64>>,
    pub kerf: Option<f64>,
    pub max_distinct_lengths: Option<usize>,
}

/// Parse [Stock] section.
pub fn parse_stock(lines: &[NumberedLine<'_>]) -> Result<StockData> {
    let mut data = StockData::default();

    for (line, key, value) in entries(lines)? {
        match key {
            "Lengths" => data.lengths = Some(parse_float_list(line, key, value)?),
            "Kerf" => data.kerf = Some(parse_float(line, key, value)?),
            "MaxDistinctLengths" => {
                data.max_distinct_lengths = Some(parse_unsigned(line, key, value)? as usize)
            }
            _ => tracing::debug!("Ignoring unknown [Stock] key '{}' at line {}", key, line),
        }
    }

    Ok(data)
}

/// Invoice section data.
#[derive(Debug, Default)]
pub struct InvoiceData {
    pub sku_prefix: Option<String>,
    pub cut_fee: Option<f64>,
    pub setup_fee: Option<f64>,
}

/// Parse [Invoice] section.
pub fn parse_invoice(lines: &[NumberedLine<'_>]) -> Result<InvoiceData> {
    let mut data = InvoiceData::default();

    for (line, key, value) in entries(lines)? {
        match key {
            "SkuPrefix" => data.sku_prefix = Some(value.to_string()),
            "CutFee" => data.cut_fee = Some(parse_float(line, key, value)?),
            "SetupFee" => data.setup_fee = Some(parse_float(line, key, value)?),
            _ => tracing::debug!("Ignoring unknown [Invoice] key '{}' at line {}", key, line),
        }
    }

    Ok(data)
}

/// Parse a [Part] section. Quantity defaults to 1.
pub fn parse_part(lines: &[NumberedLine<'_>]) -> Result<PartRequirement> {
    let mut length = None;
    let mut quantity = 1;

    for (line, key, value) in entries(lines)? {
        match key {
            "Length" => length = Some(parse_float(line, key, value)?),
            "Quantity" => quantity = parse_unsigned(line, key, value)?,
            _ => tracing::debug!("Ignoring unknown [Part] key '{}' at line {}", key, line),
        }
    }

    let length = length.ok_or_else(|| CutListError::MissingField {
        section: "Part".to_string(),
        field: "Length".to_string(),
    })?;

    Ok(PartRequirement::new(length, quantity))
}
