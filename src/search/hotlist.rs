//! Hotlist and mailing-list query builder
//!
//! Vendors blast availability and requirement lists through hotlist emails
//! and legacy mailing-list groups; these queries surface the ones that leak
//! onto the open web.

use crate::search::builders::{QueryText, skills_or_title};
use crate::search::params::SearchParams;
use crate::search::query::{QueryCategory, SearchPlatform, SearchQuery};
use crate::search::terms::{C2C_BRIEF, HOTLIST_TERMS};

/// Both queries are emitted unconditionally.
pub fn hotlist_queries(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let mut queries = Vec::with_capacity(2);

    // Hotlist/requirement-list posts.
    let q = QueryText::new()
        .any_of(HOTLIST_TERMS)
        .group(&skills_or_title(p, 3))
        .any_of(C2C_BRIEF)
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::Google,
        format!("Find vendor hotlists with {title} requirements"),
        QueryCategory::JobSearch,
        1,
    ));

    // Requirement traffic on mailing-list groups.
    let q = QueryText::new()
        .group("site:groups.google.com OR \"google groups\" OR \"yahoo groups\"")
        .phrase("requirement")
        .group(&skills_or_title(p, 3))
        .any_of(&["c2c", "contract"])
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::Google,
        format!("Mailing list requirements for {title}"),
        QueryCategory::JobSearch,
        3,
    ));

    queries
}
