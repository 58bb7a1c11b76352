use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Verification state of a contribution record.
///
/// Field staff log contributions as `Pending`; an administrator later marks
/// them `Verified` or `Rejected`. Records arriving from the backend without
/// a status are treated as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

/// A raw contribution record as returned by the backend's
/// `GET /contributions/all` endpoint.
///
/// Everything beyond `id` is optional on the wire: the backend stores
/// free-form field reports and older rows may miss columns that were added
/// later. Defaults are applied during resolution, never at deserialization,
/// so the raw record stays a faithful copy of what the backend sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contribution {
    pub id: i64,
    /// Reference to the contributing user. May dangle (see
    /// `ResolvedContribution` for the sentinel policy).
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Reference to the planted tree species. May dangle.
    #[serde(default)]
    pub tree_species_id: Option<i64>,
    /// Number of trees involved; missing counts as zero.
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Calendar date of the contribution, ISO 8601 (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<ContributionStatus>,
    /// `Planting`, `Maintenance` or `Monitoring` in practice, but the
    /// backend does not enforce the vocabulary.
    #[serde(default)]
    pub contribution_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// URL of the uploaded photo evidence, if any.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub survival_rate: Option<f64>,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// A contribution with its user and species references resolved to display
/// fields and its loosely-typed columns normalized.
///
/// Resolution is lenient by design: a dangling `user_id` becomes
/// "Unknown User"/"N/A", a dangling `tree_species_id` becomes
/// "Unknown Species", so list views keep rendering instead of failing on a
/// stale reference. The date is parsed here; a record whose date string is
/// missing or malformed carries `None` and is excluded from all date-based
/// aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedContribution {
    pub id: i64,
    pub user_id: Option<i64>,
    pub user_name: String,
    pub user_email: String,
    pub species_name: String,
    pub quantity: u32,
    pub date: Option<NaiveDate>,
    pub status: ContributionStatus,
    pub contribution_type: Option<String>,
    pub location: Option<String>,
    pub action: Option<String>,
    pub notes: Option<String>,
    pub picture: Option<String>,
}
