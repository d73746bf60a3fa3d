//! spendprint-ingest: transaction CSV ingestion, category tiers and snapshot building.

pub mod dates;
pub mod parsers;
pub mod snapshot;
pub mod tiers;

pub use dates::DateContext;
pub use parsers::transactions_csv::{parse_transactions_csv, parse_transactions_reader};
pub use snapshot::{Aggregates, SnapshotBuilder};
pub use tiers::{Tier, TierRules};
