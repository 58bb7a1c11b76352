use chrono::NaiveDate;
use common::model::contribution::ResolvedContribution;

/// Criteria for the admin contribution table. Unset fields match
/// everything; set fields must all match.
#[derive(Debug, Clone, Default)]
pub struct ContributionFilter {
    /// Case-insensitive substring over contributor name, action and
    /// location.
    pub search: Option<String>,
    /// Exact contribution type, e.g. "Planting".
    pub contribution_type: Option<String>,
    /// Exact contribution date.
    pub date: Option<NaiveDate>,
}

/// Applies `filter` to the resolved list, preserving order.
pub fn filter_contributions<'a>(
    resolved: &'a [ResolvedContribution],
    filter: &ContributionFilter,
) -> Vec<&'a ResolvedContribution> {
    resolved.iter().filter(|c| matches(c, filter)).collect()
}

fn matches(record: &ResolvedContribution, filter: &ContributionFilter) -> bool {
    if let Some(term) = &filter.search {
        let term = term.to_lowercase();
        let hit = record.user_name.to_lowercase().contains(&term)
            || record
                .action
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&term)
            || record
                .location
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&term);
        if !hit {
            return false;
        }
    }

    if let Some(kind) = &filter.contribution_type {
        if record.contribution_type.as_deref() != Some(kind.as_str()) {
            return false;
        }
    }

    if let Some(date) = filter.date {
        if record.date != Some(date) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::contribution::ContributionStatus;

    fn record(name: &str, kind: &str, location: &str, date: &str) -> ResolvedContribution {
        ResolvedContribution {
            id: 0,
            user_id: Some(1),
            user_name: name.to_string(),
            user_email: "N/A".to_string(),
            species_name: "Unknown Species".to_string(),
            quantity: 1,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            status: ContributionStatus::Pending,
            contribution_type: Some(kind.to_string()),
            location: Some(location.to_string()),
            action: Some("planted seedlings".to_string()),
            notes: None,
            picture: None,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let resolved = vec![
            record("Alice", "Planting", "Kigali", "2024-03-01"),
            record("Bob", "Monitoring", "Huye", "2024-03-02"),
        ];
        let hits = filter_contributions(&resolved, &ContributionFilter::default());
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let resolved = vec![
            record("Alice", "Planting", "Kigali", "2024-03-01"),
            record("Bob", "Monitoring", "Huye", "2024-03-02"),
        ];

        let by_name = ContributionFilter {
            search: Some("ALI".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_contributions(&resolved, &by_name).len(), 1);

        let by_location = ContributionFilter {
            search: Some("huye".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filter_contributions(&resolved, &by_location)[0].user_name,
            "Bob"
        );

        let by_action = ContributionFilter {
            search: Some("seedling".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_contributions(&resolved, &by_action).len(), 2);
    }

    #[test]
    fn type_and_date_are_exact_and_conjunctive() {
        let resolved = vec![
            record("Alice", "Planting", "Kigali", "2024-03-01"),
            record("Alice", "Planting", "Kigali", "2024-03-02"),
            record("Alice", "Maintenance", "Kigali", "2024-03-01"),
        ];

        let filter = ContributionFilter {
            contribution_type: Some("Planting".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        let hits = filter_contributions(&resolved, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].contribution_type.as_deref(), Some("Planting"));
    }
}
