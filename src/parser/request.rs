//! Main cut request file parser.

use crate::config::{CutListConfig, InvoiceConfig};
use crate::error::{CutListError, Result};
use crate::model::{CutRequest, StockCatalog};
use std::path::Path;

use super::sections::*;

/// Cut request file parser.
pub struct RequestParser {
    /// File content as lines.
    lines: Vec<String>,
    /// Section indices: (name, header_line, end_line).
    sections: Vec<(String, usize, usize)>,
}

impl RequestParser {
    /// Create a new parser from file content.
    pub fn new(content: &str) -> Self {
        let lines: Vec<String> = content.lines().map(|s| s.to_string()).collect();
        let sections = Self::find_sections(&lines);
        Self { lines, sections }
    }

    /// Find all sections and their line ranges.
    fn find_sections(lines: &[String]) -> Vec<(String, usize, usize)> {
        let mut sections = Vec::new();
        let mut current_section: Option<(String, usize)> = None;

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                if let Some((name, start)) = current_section.take() {
                    sections.push((name, start, i - 1));
                }
                let section_name = trimmed[1..trimmed.len() - 1].trim().to_string();
                current_section = Some((section_name, i));
            }
        }

        if let Some((name, start)) = current_section {
            sections.push((name, start, lines.len() - 1));
        }

        sections
    }

    /// Lines of a section range, numbered from 1, header excluded.
    fn numbered_lines(&self, start: usize, end: usize) -> Vec<NumberedLine<'_>> {
        (start + 1..=end)
            .map(|i| (i + 1, self.lines[i].as_str()))
            .collect()
    }

    /// Get the lines of the first section with a given name.
    fn get_section_lines(&self, name: &str) -> Option<Vec<NumberedLine<'_>>> {
        self.sections
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, start, end)| self.numbered_lines(*start, *end))
    }

    /// Get all sections with a given name.
    fn get_all_sections(&self, name: &str) -> Vec<Vec<NumberedLine<'_>>> {
        self.sections
            .iter()
            .filter(|(n, _, _)| n == name)
            .map(|(_, start, end)| self.numbered_lines(*start, *end))
            .collect()
    }

    /// Reject data that appears before the first section header.
    fn check_preamble(&self) -> Result<()> {
        let first_header = self
            .sections
            .first()
            .map(|(_, start, _)| *start)
            .unwrap_or(self.lines.len());

        match self.lines[..first_header]
            .iter()
            .position(|line| !is_blank_or_comment(line))
        {
            Some(idx) => Err(CutListError::ParseError {
                line: idx + 1,
                message: "Content outside of a section".to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Parse the request.
    pub fn parse(&self) -> Result<CutRequest> {
        self.check_preamble()?;

        for (name, start, _) in &self.sections {
            if !matches!(name.as_str(), "Stock" | "Invoice" | "Part") {
                tracing::warn!("Ignoring unknown section [{}] at line {}", name, start + 1);
            }
        }

        let stock_data = self
            .get_section_lines("Stock")
            .map(|lines| parse_stock(&lines))
            .transpose()?
            .unwrap_or_default();

        let invoice_data = self
            .get_section_lines("Invoice")
            .map(|lines| parse_invoice(&lines))
            .transpose()?
            .unwrap_or_default();

        let parts = self
            .get_all_sections("Part")
            .iter()
            .map(|lines| parse_part(lines))
            .collect::<Result<Vec<_>>>()?;

        let catalog = match stock_data.lengths {
            Some(lengths) => StockCatalog::new(lengths)?,
            None => StockCatalog::default(),
        };

        let mut config = CutListConfig::default();
        if let Some(kerf) = stock_data.kerf {
            config.kerf = kerf;
        }
        if let Some(max) = stock_data.max_distinct_lengths {
            config.max_distinct_lengths = max;
        }

        let mut invoice = InvoiceConfig::default();
        if let Some(prefix) = invoice_data.sku_prefix {
            invoice.sku_prefix = prefix;
        }
        if let Some(fee) = invoice_data.cut_fee {
            invoice.cut_fee = fee;
        }
        if let Some(fee) = invoice_data.setup_fee {
            invoice.setup_fee = fee;
        }

        Ok(CutRequest {
            parts,
            catalog,
            config,
            invoice,
        })
    }
}

/// Parse a cut request from a string.
pub fn parse_request_str(content: &str) -> Result<CutRequest> {
    RequestParser::new(content).parse()
}

/// Parse a cut request file from a path.
pub fn parse_request_file(path: &Path) -> Result<CutRequest> {
    if !path.exists() {
        return Err(CutListError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(CutListError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_request_str(&content)
}
