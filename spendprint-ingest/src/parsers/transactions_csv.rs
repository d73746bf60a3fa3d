//! Generic transaction CSV parser.
//!
//! Expected header (any order, case-insensitive):
//!   date,amount,category[,sub_category][,description][,id]
//!
//! Amounts may carry `$`, thousands separators, a leading minus or
//! accounting parentheses: `$1,200.00`, `-15.00`, `(42.10)`.

use anyhow::{bail, Context, Result};
use regex::Regex;
use spendprint_core::Transaction;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::dates::DateContext;

const AMOUNT_PATTERN: &str =
    r"^(?P<neg>-)?\s*\$?\s*(?P<num>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?|\.\d+)$";

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    amount: usize,
    category: usize,
    sub_category: Option<usize>,
    description: Option<usize>,
    id: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers.iter().position(|h| {
                let h = h.trim().to_lowercase();
                names.iter().any(|n| *n == h)
            })
        };

        let Some(date) = find(&["date", "transaction date", "trans date"]) else {
            bail!("missing required column: date");
        };
        let Some(amount) = find(&["amount"]) else {
            bail!("missing required column: amount");
        };
        let Some(category) = find(&["category"]) else {
            bail!("missing required column: category");
        };

        Ok(Self {
            date,
            amount,
            category,
            sub_category: find(&["sub_category", "subcategory", "sub category"]),
            description: find(&["description", "memo"]),
            id: find(&["id", "reference"]),
        })
    }
}

/// Parse a signed amount string, returning `None` for anything unrecognized
fn parse_amount(raw: &str, re: &Regex) -> Option<f64> {
    let s = raw.trim();
    let (s, parenthesized) = match s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        Some(inner) => (inner.trim(), true),
        None => (s, false),
    };

    let caps = re.captures(s)?;
    let value: f64 = caps["num"].replace(',', "").parse().ok()?;
    let negative = parenthesized || caps.name("neg").is_some();
    Some(if negative { -value } else { value })
}

fn optional_field(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse transactions from any reader producing CSV text
pub fn parse_transactions_reader<R: Read>(
    reader: R,
    dates: &DateContext,
) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let amount_re = Regex::new(AMOUNT_PATTERN)?;

    let mut txns = Vec::new();

    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        // header is line 1
        let line = row + 2;

        let date_str = record.get(columns.date).unwrap_or("");
        let Some(date) = dates.parse(date_str) else {
            warn!(line, date = date_str, "skipping row with missing or unparseable date");
            continue;
        };

        let amount_str = record.get(columns.amount).unwrap_or("");
        let Some(amount) = parse_amount(amount_str, &amount_re) else {
            warn!(line, amount = amount_str, "skipping row with unparseable amount");
            continue;
        };

        // Category is kept verbatim; PSR matching is case-sensitive.
        let category = record.get(columns.category).unwrap_or("").trim().to_string();

        txns.push(Transaction {
            id: optional_field(&record, columns.id),
            date,
            amount,
            category,
            sub_category: optional_field(&record, columns.sub_category),
            description: optional_field(&record, columns.description),
        });
    }

    debug!(count = txns.len(), "parsed transactions");
    Ok(txns)
}

/// Parse a transaction CSV file
pub fn parse_transactions_csv(
    path: impl AsRef<Path>,
    dates: &DateContext,
) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_transactions_reader(file, dates).with_context(|| format!("parsing {}", path.display()))
}
