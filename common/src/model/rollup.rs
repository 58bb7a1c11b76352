use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::display::format_long_date;

/// Per-contributor aggregate derived from that user's resolved
/// contributions.
///
/// Rollups are recomputed on every aggregation call and carry no persisted
/// identity. The set of rollups partitions the resolved records by
/// `user_id`: summing `total_contributions` over all rollups gives the
/// record count, and summing `total_trees` gives the overall tree count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorRollup {
    /// Grouping key. `None` collects the records whose `user_id` was absent
    /// on the wire.
    pub user_id: Option<i64>,
    /// Display name taken from the first record of the group ("Unknown
    /// User" when the reference dangled).
    pub name: String,
    pub total_trees: u64,
    pub total_contributions: usize,
    /// Most recent parsed contribution date in the group, if any record
    /// carried a valid date.
    pub last_contribution: Option<NaiveDate>,
    /// 1-based position after sorting all rollups descending by
    /// `total_trees`. Ties keep first-encounter order.
    pub rank: usize,
}

impl ContributorRollup {
    /// The leaderboard's "Last contribution" column, "N/A" when no record
    /// in the group had a usable date.
    pub fn last_contribution_display(&self) -> String {
        match self.last_contribution {
            Some(date) => format_long_date(date),
            None => "N/A".to_string(),
        }
    }
}

/// Summary counters shown on the admin dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContributionStats {
    pub total_contributions: usize,
    pub total_trees_planted: u64,
    /// Size of the user directory, not of the contributor set: users with
    /// zero contributions are counted.
    pub total_users: usize,
    pub this_month_contributions: usize,
}

/// Verification counts across all resolved records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub verified: usize,
    pub pending: usize,
    pub rejected: usize,
}
