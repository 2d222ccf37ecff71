//! Wire models for the PokéAPI list endpoints.

use serde::Deserialize;
use serde::Serialize;

/// A named API resource: a display name plus the URL of the full record.
///
/// This is the shape the PokéAPI uses for every entry in a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. `"bulbasaur"`.
    pub name: String,
    /// URL of the full resource.
    pub url: String,
}

/// One page of a paginated list response.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPage {
    /// Total number of resources across all pages.
    pub count: u64,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// Resources on this page.
    pub results: Vec<NamedResource>,
}

/// Sorts resources by name, ascending.
///
/// The API returns list results in numeric id order; callers that present the
/// names to a user generally want them alphabetical. Names are lowercase ASCII
/// slugs, so a byte-wise comparison is enough.
pub fn sort_by_name(resources: &mut [NamedResource]) {
    resources.sort_unstable_by(|a, b| a.name.cmp(&b.name));
}
