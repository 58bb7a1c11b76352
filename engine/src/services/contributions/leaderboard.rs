use common::model::contribution::ResolvedContribution;
use common::model::rollup::ContributorRollup;
use std::collections::HashMap;

/// Groups resolved contributions per contributor and returns the full
/// ranked leaderboard, most trees first.
///
/// Groups are created in first-encounter order and the descending sort is
/// stable, so contributors with equal totals keep the order in which they
/// first appeared in the input. `rank` is the 1-based position in the
/// returned list. Callers wanting a top-N view (top 10 board, top 3
/// podium) slice the result themselves.
pub fn aggregate_contributors(resolved: &[ResolvedContribution]) -> Vec<ContributorRollup> {
    let mut rollups: Vec<ContributorRollup> = Vec::new();
    let mut index_by_user: HashMap<Option<i64>, usize> = HashMap::new();

    for record in resolved {
        let idx = *index_by_user.entry(record.user_id).or_insert_with(|| {
            rollups.push(ContributorRollup {
                user_id: record.user_id,
                name: record.user_name.clone(),
                total_trees: 0,
                total_contributions: 0,
                last_contribution: None,
                rank: 0,
            });
            rollups.len() - 1
        });

        let rollup = &mut rollups[idx];
        rollup.total_trees += u64::from(record.quantity);
        rollup.total_contributions += 1;
        // Option<NaiveDate> orders None before any date.
        if record.date > rollup.last_contribution {
            rollup.last_contribution = record.date;
        }
    }

    rollups.sort_by(|a, b| b.total_trees.cmp(&a.total_trees));
    for (i, rollup) in rollups.iter_mut().enumerate() {
        rollup.rank = i + 1;
    }
    rollups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::model::contribution::ContributionStatus;

    fn record(user_id: i64, name: &str, quantity: u32, date: &str) -> ResolvedContribution {
        ResolvedContribution {
            id: 0,
            user_id: Some(user_id),
            user_name: name.to_string(),
            user_email: "N/A".to_string(),
            species_name: "Unknown Species".to_string(),
            quantity,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            status: ContributionStatus::Pending,
            contribution_type: None,
            location: None,
            action: None,
            notes: None,
            picture: None,
        }
    }

    #[test]
    fn ranks_contributors_by_total_trees() {
        let resolved = vec![
            record(1, "Alice", 10, "2024-03-01"),
            record(1, "Alice", 5, "2024-03-10"),
            record(2, "Bob", 20, "2024-02-01"),
        ];

        let rollups = aggregate_contributors(&resolved);
        assert_eq!(rollups.len(), 2);

        assert_eq!(rollups[0].name, "Bob");
        assert_eq!(rollups[0].total_trees, 20);
        assert_eq!(rollups[0].total_contributions, 1);
        assert_eq!(rollups[0].rank, 1);

        assert_eq!(rollups[1].name, "Alice");
        assert_eq!(rollups[1].total_trees, 15);
        assert_eq!(rollups[1].total_contributions, 2);
        assert_eq!(rollups[1].rank, 2);
        assert_eq!(
            rollups[1].last_contribution,
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
    }

    #[test]
    fn totals_partition_the_input() {
        let resolved = vec![
            record(1, "Alice", 10, "2024-03-01"),
            record(2, "Bob", 0, "2024-03-02"),
            record(1, "Alice", 7, "bad-date"),
            record(3, "Carol", 3, "2024-01-20"),
        ];

        let rollups = aggregate_contributors(&resolved);
        let contribution_sum: usize = rollups.iter().map(|r| r.total_contributions).sum();
        let tree_sum: u64 = rollups.iter().map(|r| r.total_trees).sum();

        assert_eq!(contribution_sum, resolved.len());
        assert_eq!(
            tree_sum,
            resolved.iter().map(|r| u64::from(r.quantity)).sum::<u64>()
        );
    }

    #[test]
    fn ordering_is_descending_with_sequential_ranks() {
        let resolved = vec![
            record(1, "Alice", 4, "2024-01-01"),
            record(2, "Bob", 30, "2024-01-01"),
            record(3, "Carol", 11, "2024-01-01"),
            record(4, "Dan", 11, "2024-01-01"),
        ];

        let rollups = aggregate_contributors(&resolved);
        for pair in rollups.windows(2) {
            assert!(pair[0].total_trees >= pair[1].total_trees);
        }
        for (i, rollup) in rollups.iter().enumerate() {
            assert_eq!(rollup.rank, i + 1);
        }
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let resolved = vec![
            record(5, "Eve", 10, "2024-01-01"),
            record(6, "Frank", 10, "2024-01-02"),
            record(7, "Grace", 10, "2024-01-03"),
        ];

        let rollups = aggregate_contributors(&resolved);
        let names: Vec<&str> = rollups.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Eve", "Frank", "Grace"]);
    }

    #[test]
    fn empty_input_yields_empty_leaderboard() {
        assert!(aggregate_contributors(&[]).is_empty());
    }

    #[test]
    fn dateless_records_never_override_a_real_date() {
        let resolved = vec![
            record(1, "Alice", 1, "2024-02-01"),
            record(1, "Alice", 1, "not-a-date"),
        ];

        let rollups = aggregate_contributors(&resolved);
        assert_eq!(
            rollups[0].last_contribution,
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
    }
}
