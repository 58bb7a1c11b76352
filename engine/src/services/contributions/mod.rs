//! # Contribution Service Module
//!
//! This module groups every computation over the contribution lists the
//! shell fetches from the backend. All functions are total over their
//! typed input: empty slices produce empty results or zeroed counters,
//! never an error.
//!
//! ## Sub-modules:
//! - `resolve`: joins raw contributions against the user and species
//!   directories, substituting sentinel strings for dangling references.
//! - `leaderboard`: groups resolved records per contributor and produces
//!   the ranked rollup list.
//! - `stats`: dashboard summary counters and the verification breakdown.
//! - `filter`: the admin table's search/type/date filtering.
//!
//! `resolve_contributions` runs first; the other operations consume its
//! output.

mod filter;
mod leaderboard;
mod resolve;
mod stats;

pub use filter::{filter_contributions, ContributionFilter};
pub use leaderboard::aggregate_contributors;
pub use resolve::resolve_contributions;
pub use stats::{compute_stats, status_breakdown};
