//! Domain services: presence checks, existence checks and the
//! empty-collection policy, on top of the repos.

pub mod authors;
pub mod posts;
pub mod stats;

pub use authors::{AuthorInput, AuthorService, AuthorWithPosts};
pub use posts::{PostChanges, PostInput, PostService};
pub use stats::{PostCounts, StatsService};

/// A field counts as supplied only when present and non-empty.
/// Whitespace-only strings are supplied.
pub(crate) fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
