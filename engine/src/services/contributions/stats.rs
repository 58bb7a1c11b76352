use chrono::{Datelike, NaiveDate};
use common::model::contribution::{ContributionStatus, ResolvedContribution};
use common::model::directory::User;
use common::model::rollup::{ContributionStats, StatusBreakdown};

/// Computes the dashboard summary counters.
///
/// `reference` stands in for "today" so callers control the clock;
/// `this_month_contributions` counts records whose parsed date falls in
/// the same calendar month as `reference`. `total_users` is the size of
/// the user directory, not the contributor set.
pub fn compute_stats(
    resolved: &[ResolvedContribution],
    users: &[User],
    reference: NaiveDate,
) -> ContributionStats {
    let this_month = resolved
        .iter()
        .filter(|c| {
            c.date
                .is_some_and(|d| d.year() == reference.year() && d.month() == reference.month())
        })
        .count();

    ContributionStats {
        total_contributions: resolved.len(),
        total_trees_planted: resolved.iter().map(|c| u64::from(c.quantity)).sum(),
        total_users: users.len(),
        this_month_contributions: this_month,
    }
}

/// Counts records per verification status for the reports view.
pub fn status_breakdown(resolved: &[ResolvedContribution]) -> StatusBreakdown {
    let mut counts = StatusBreakdown::default();
    for record in resolved {
        match record.status {
            ContributionStatus::Verified => counts.verified += 1,
            ContributionStatus::Pending => counts.pending += 1,
            ContributionStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quantity: u32, date: Option<&str>, status: ContributionStatus) -> ResolvedContribution {
        ResolvedContribution {
            id: 0,
            user_id: Some(1),
            user_name: "Alice".to_string(),
            user_email: "N/A".to_string(),
            species_name: "Unknown Species".to_string(),
            quantity,
            date: date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            status,
            contribution_type: None,
            location: None,
            action: None,
            notes: None,
            picture: None,
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn empty_input_gives_zeroed_stats() {
        let stats = compute_stats(&[], &[], reference());
        assert_eq!(stats, ContributionStats::default());
    }

    #[test]
    fn month_filter_counts_only_the_reference_month() {
        let resolved = vec![
            record(1, Some("2024-03-01"), ContributionStatus::Pending),
            record(1, Some("2024-03-31"), ContributionStatus::Pending),
            record(1, Some("2024-04-01"), ContributionStatus::Pending),
            record(1, None, ContributionStatus::Pending),
        ];

        let stats = compute_stats(&resolved, &[], reference());
        assert_eq!(stats.this_month_contributions, 2);
        assert_eq!(stats.total_contributions, 4);
    }

    #[test]
    fn user_count_comes_from_the_directory() {
        let users = vec![
            User {
                id: 1,
                username: "Alice".to_string(),
                email: None,
                role: None,
            },
            User {
                id: 2,
                username: "Idle".to_string(),
                email: None,
                role: None,
            },
        ];
        let resolved = vec![record(12, Some("2024-03-02"), ContributionStatus::Verified)];

        let stats = compute_stats(&resolved, &users, reference());
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_trees_planted, 12);
    }

    #[test]
    fn breakdown_counts_every_status() {
        let resolved = vec![
            record(1, None, ContributionStatus::Verified),
            record(1, None, ContributionStatus::Verified),
            record(1, None, ContributionStatus::Pending),
            record(1, None, ContributionStatus::Rejected),
        ];

        let counts = status_breakdown(&resolved);
        assert_eq!(counts.verified, 2);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.rejected, 1);
    }
}
