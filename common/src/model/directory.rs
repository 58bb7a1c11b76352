use serde::{Deserialize, Serialize};

/// A platform user as returned by `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    /// `admin`, `staff` or `public`; informational only in this crate.
    #[serde(default)]
    pub role: Option<String>,
}

/// A tree species entry as returned by `GET /tree-species`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSpecies {
    pub id: i64,
    pub name: String,
}
