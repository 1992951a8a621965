//! Relevance Filter: hard gate that keeps only software/engineering-adjacent
//! postings. Not a ranking signal: listings that fail it are dropped before scoring.

use crate::insights::models::RawListing;

/// Title keywords that mark a posting as software-relevant (case-insensitive substring).
pub const SOFTWARE_KEYWORDS: &[&str] = &[
    "software",
    "engineer",
    "developer",
    "data",
    "ai",
    "machine learning",
    "backend",
    "frontend",
    "full stack",
    "devops",
];

/// Category fragments that admit a posting regardless of its title.
pub const SOFTWARE_CATEGORIES: &[&str] = &["software", "development"];

/// Returns true when the title carries a role keyword or the category names
/// software/development work.
pub fn is_relevant(listing: &RawListing) -> bool {
    let title = listing.title_text().to_lowercase();
    let category = listing.category_text().to_lowercase();

    SOFTWARE_KEYWORDS.iter().any(|k| title.contains(k))
        || SOFTWARE_CATEGORIES.iter().any(|c| category.contains(c))
}
