//! Query generation orchestrator

use tracing::debug;

use crate::search::builders;
use crate::search::hotlist;
use crate::search::params::SearchParams;
use crate::search::query::SearchQuery;
use crate::search::synonyms;

type Builder = fn(&SearchParams) -> Vec<SearchQuery>;

/// Fixed invocation order. Ordering is an observable contract: callers sort
/// by priority within category and rely on emission order as the tie-break.
const BUILDERS: &[Builder] = &[
    builders::linkedin,
    builders::dice,
    builders::indeed,
    builders::monster,
    builders::careerbuilder,
    builders::ziprecruiter,
    builders::techfetch,
    builders::vendor_hunt,
    builders::direct_client,
    builders::government,
    builders::corp_corp,
    builders::vms_msp,
    builders::email_harvest,
];

/// Generates x-ray search queries across every supported platform.
///
/// Stateless and deterministic: equal parameters always produce
/// byte-identical output, in the same order, with no dedup or shuffling.
#[derive(Debug, Clone, Copy, Default)]
pub struct XRaySearchEngine;

impl XRaySearchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Generate the comprehensive query set for a consultant profile.
    pub fn generate_all_queries(&self, params: &SearchParams) -> Vec<SearchQuery> {
        let mut queries = Vec::new();
        for builder in BUILDERS {
            queries.extend(builder(params));
        }
        debug!(
            count = queries.len(),
            title = %params.job_title,
            "generated x-ray queries"
        );
        queries
    }

    /// Generate queries that surface vendor hotlists and mailing lists.
    pub fn generate_hotlist_queries(&self, params: &SearchParams) -> Vec<SearchQuery> {
        let queries = hotlist::hotlist_queries(params);
        debug!(count = queries.len(), "generated hotlist queries");
        queries
    }

    /// Alternative job titles for broader searching.
    pub fn get_role_synonyms(&self, title: &str) -> Vec<String> {
        synonyms::role_synonyms(title)
    }
}
