//! Priority Scorer: additive point model matching a listing against the
//! caller's priority profile.
//!
//! Points (case-insensitive substring matching, computed in this order):
//! - role in title: +40
//! - each tech token in title or description: +10, capped at 40 overall
//! - location in the listing's required location, or that location says
//!   "anywhere": +20
//!
//! The total is clamped to 100 before being divided by 100.

use crate::insights::models::{PriorityProfile, RawListing};

pub const ROLE_POINTS: u32 = 40;
pub const TECH_POINTS_PER_MATCH: u32 = 10;
pub const TECH_POINTS_CAP: u32 = 40;
pub const LOCATION_POINTS: u32 = 20;
pub const MAX_POINTS: u32 = 100;

const ANYWHERE: &str = "anywhere";

/// Per-dimension points awarded to one listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub role: u32,
    pub tech: u32,
    pub location: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.role + self.tech + self.location
    }

    /// Normalised score in [0.0, 1.0].
    pub fn normalized(&self) -> f64 {
        f64::from(self.total().min(MAX_POINTS)) / f64::from(MAX_POINTS)
    }
}

/// Lower-cased profile terms, prepared once per request rather than per listing.
#[derive(Debug, Clone, Default)]
pub struct ProfileTerms {
    role: Option<String>,
    tech: Vec<String>,
    location: Option<String>,
}

impl ProfileTerms {
    pub fn new(profile: &PriorityProfile) -> Self {
        ProfileTerms {
            role: present(&profile.role),
            tech: profile.tech_stack.iter().map(|t| t.to_lowercase()).collect(),
            location: present(&profile.location),
        }
    }
}

/// Only a literally empty role or location is absent; whitespace is a term.
fn present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}

/// Points per dimension; `normalized()` on the result is the priority score.
/// Deterministic for a given listing and profile.
pub fn score_breakdown(listing: &RawListing, terms: &ProfileTerms) -> ScoreBreakdown {
    let title = listing.title_text().to_lowercase();
    let description = listing.description_text().to_lowercase();
    let location = listing.location_text().to_lowercase();

    let role = match &terms.role {
        Some(role) if title.contains(role.as_str()) => ROLE_POINTS,
        _ => 0,
    };

    let tech_matches = terms
        .tech
        .iter()
        .filter(|t| title.contains(t.as_str()) || description.contains(t.as_str()))
        .count() as u32;
    let tech = (tech_matches * TECH_POINTS_PER_MATCH).min(TECH_POINTS_CAP);

    let location = match &terms.location {
        Some(wanted) if location.contains(wanted.as_str()) || location.contains(ANYWHERE) => {
            LOCATION_POINTS
        }
        _ => 0,
    };

    ScoreBreakdown {
        role,
        tech,
        location,
    }
}
