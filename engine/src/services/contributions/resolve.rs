use chrono::NaiveDate;
use common::model::contribution::{Contribution, ResolvedContribution};
use common::model::directory::{TreeSpecies, User};
use log::warn;
use std::collections::HashMap;

/// Substituted when a contribution's `user_id` matches no user.
pub const UNKNOWN_USER: &str = "Unknown User";
/// Substituted for the email of an unresolved user.
pub const UNKNOWN_EMAIL: &str = "N/A";
/// Substituted when a contribution's `tree_species_id` matches no species.
pub const UNKNOWN_SPECIES: &str = "Unknown Species";

/// Joins each contribution against the user and species directories and
/// normalizes the loosely-typed columns.
///
/// The join is lenient: dangling references get the sentinel strings above
/// instead of raising, so a stale id never breaks list rendering. Output
/// order matches input order, one resolved record per input record.
pub fn resolve_contributions(
    contributions: &[Contribution],
    users: &[User],
    species: &[TreeSpecies],
) -> Vec<ResolvedContribution> {
    let users_by_id: HashMap<i64, &User> = users.iter().map(|u| (u.id, u)).collect();
    let species_by_id: HashMap<i64, &TreeSpecies> = species.iter().map(|s| (s.id, s)).collect();

    contributions
        .iter()
        .map(|c| {
            let user = c.user_id.and_then(|id| users_by_id.get(&id).copied());
            let species = c
                .tree_species_id
                .and_then(|id| species_by_id.get(&id).copied());

            ResolvedContribution {
                id: c.id,
                user_id: c.user_id,
                user_name: user
                    .map(|u| u.username.clone())
                    .unwrap_or_else(|| UNKNOWN_USER.to_string()),
                user_email: user
                    .and_then(|u| u.email.clone())
                    .unwrap_or_else(|| UNKNOWN_EMAIL.to_string()),
                species_name: species
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| UNKNOWN_SPECIES.to_string()),
                quantity: c.quantity.unwrap_or(0),
                date: c.date.as_deref().and_then(|raw| parse_date(c.id, raw)),
                status: c.status.unwrap_or_default(),
                contribution_type: c.contribution_type.clone(),
                location: c.location.clone(),
                action: c.action.clone(),
                notes: c.notes.clone(),
                picture: c.picture.clone(),
            }
        })
        .collect()
}

/// Dates must be zero-padded ISO 8601. Anything else is dropped from
/// date-based aggregation instead of silently misordering the leaderboard.
fn parse_date(id: i64, raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(
                "contribution {}: unparsable date {:?}, excluded from date-based aggregation",
                id, raw
            );
            None
        }
    }
}
