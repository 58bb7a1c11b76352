//! Computation core of the reforestation-tracking platform.
//!
//! The surrounding application (REST backend, admin UI, public pages) is an
//! external collaborator; this crate holds the two stateless pieces the
//! shell calls into:
//!
//! - `services::contributions`: turns the raw contribution/user/species
//!   lists fetched by the shell into display-ready resolved records, a
//!   ranked leaderboard and summary statistics.
//! - `services::certificates`: renders a one-off recognition certificate
//!   PDF for a contributor selected from the leaderboard.
//!
//! Both services are pure, synchronous, single-pass transformations: no
//! network, no persistence, no clock reads. The caller supplies the lists
//! and the current date.

pub mod services;
