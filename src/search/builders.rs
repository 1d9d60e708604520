//! Per-platform x-ray query builders
//!
//! Each builder is a pure function from search parameters to zero or more
//! query records. Builders share no state and may run in any order; the
//! engine owns the invocation sequence.
//!
//! Shared construction rules: skill disjunctions take the first 3-4 primary
//! skills depending on the builder, quoted phrases are dropped when their
//! source field is empty (never an empty `""` or `()` fragment), and every
//! job-search query carries at least one corp-to-corp/contract term.

use crate::search::params::SearchParams;
use crate::search::query::{QueryCategory, SearchPlatform, SearchQuery};
use crate::search::terms::{
    C2C_BRIEF, C2C_FULL, C2C_ONLY, MAJOR_BOARD_DOMAINS, RECRUITER_ROLES, REQUIREMENT_TERMS,
    RESUME_SUBMISSION_PHRASES, STAFFING_INDICATORS, SUBMISSION_PHRASES, URGENCY_TERMS,
    VMS_PLATFORMS,
};

/// Incremental boolean-expression builder.
///
/// Empty fragments are skipped, which is what lets builders degrade
/// gracefully on missing profile fields.
#[derive(Debug, Default)]
pub(crate) struct QueryText {
    parts: Vec<String>,
}

impl QueryText {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a raw token such as a `site:` restriction.
    pub(crate) fn raw(mut self, token: &str) -> Self {
        if !token.is_empty() {
            self.parts.push(token.to_string());
        }
        self
    }

    /// Append an exact-phrase term, quoted.
    pub(crate) fn phrase(mut self, text: &str) -> Self {
        if !text.is_empty() {
            self.parts.push(format!("\"{text}\""));
        }
        self
    }

    /// Append a parenthesized OR-disjunction of quoted terms.
    pub(crate) fn any_of(mut self, terms: &[&str]) -> Self {
        let rendered = quoted_or(terms);
        if !rendered.is_empty() {
            self.parts.push(format!("({rendered})"));
        }
        self
    }

    /// Append an already-rendered expression, parenthesized.
    pub(crate) fn group(mut self, rendered: &str) -> Self {
        if !rendered.is_empty() {
            self.parts.push(format!("({rendered})"));
        }
        self
    }

    pub(crate) fn finish(self) -> String {
        self.parts.join(" ")
    }
}

/// Join non-empty terms as `"a" OR "b"`, without parentheses.
fn quoted_or(terms: &[&str]) -> String {
    terms
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Disjunction of the first `width` primary skills.
fn skills_clause(params: &SearchParams, width: usize) -> String {
    let skills: Vec<&str> = params
        .primary_skills
        .iter()
        .take(width)
        .map(String::as_str)
        .collect();
    quoted_or(&skills)
}

/// `"title" OR <skills>` with either side dropped when empty.
fn title_or_skills(params: &SearchParams, width: usize) -> String {
    let title = quoted_or(&[params.job_title.as_str()]);
    let skills = skills_clause(params, width);
    match (title.is_empty(), skills.is_empty()) {
        (false, false) => format!("{title} OR {skills}"),
        (false, true) => title,
        (true, false) => skills,
        (true, true) => String::new(),
    }
}

/// `<skills> OR "title"`, the hotlist-style ordering of the same clause.
pub(crate) fn skills_or_title(params: &SearchParams, width: usize) -> String {
    let skills = skills_clause(params, width);
    let title = quoted_or(&[params.job_title.as_str()]);
    match (skills.is_empty(), title.is_empty()) {
        (false, false) => format!("{skills} OR {title}"),
        (false, true) => skills,
        (true, false) => title,
        (true, true) => String::new(),
    }
}

// ── LinkedIn x-ray ───────────────────────────────────────────────────────

pub fn linkedin(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let mut queries = Vec::with_capacity(4);

    // Job postings surfaced through Google rather than LinkedIn's own search.
    let q = QueryText::new()
        .raw("site:linkedin.com/jobs")
        .phrase(title)
        .group(&skills_clause(p, 4))
        .phrase(&p.location)
        .any_of(C2C_FULL)
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::Linkedin,
        format!("LinkedIn Jobs X-ray: {title} contract roles"),
        QueryCategory::JobSearch,
        1,
    ));

    // Recruiter profiles posting these roles.
    let q = QueryText::new()
        .raw("site:linkedin.com/in")
        .any_of(RECRUITER_ROLES)
        .group(&skills_clause(p, 4))
        .phrase(&p.location)
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::Linkedin,
        format!("LinkedIn People X-ray: Recruiters posting {title} roles"),
        QueryCategory::ContactFind,
        2,
    ));

    // Vendor company pages hiring for these roles.
    let q = QueryText::new()
        .raw("site:linkedin.com/company")
        .any_of(STAFFING_INDICATORS)
        .group(&title_or_skills(p, 4))
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::Linkedin,
        format!("LinkedIn Companies X-ray: Vendors hiring {title}"),
        QueryCategory::VendorHunt,
        3,
    ));

    // Feed posts announcing urgent requirements.
    let q = QueryText::new()
        .raw("site:linkedin.com/posts")
        .any_of(URGENCY_TERMS)
        .phrase(title)
        .any_of(C2C_FULL)
        .phrase(&p.location)
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::Linkedin,
        format!("LinkedIn Posts X-ray: Urgent {title} requirements"),
        QueryCategory::JobSearch,
        1,
    ));

    queries
}

// ── Dice x-ray ───────────────────────────────────────────────────────────

pub fn dice(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let mut queries = Vec::with_capacity(2);

    let q = QueryText::new()
        .raw("site:dice.com/job-detail")
        .phrase(title)
        .group(&skills_clause(p, 4))
        .phrase(&p.location)
        .any_of(&["contract", "c2c"])
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::Dice,
        format!("Dice X-ray: {title} contract roles"),
        QueryCategory::JobSearch,
        1,
    ));

    // Visa-targeted variant, only when the profile carries a status.
    if !p.visa_status.is_empty() {
        let q = QueryText::new()
            .raw("site:dice.com")
            .phrase(title)
            .any_of(&[p.visa_status.as_str(), "all visas", "any visa"])
            .finish();
        queries.push(SearchQuery::new(
            q,
            SearchPlatform::Dice,
            format!("Dice X-ray: {title} roles accepting {}", p.visa_status),
            QueryCategory::JobSearch,
            2,
        ));
    }

    queries
}

// ── Indeed x-ray ─────────────────────────────────────────────────────────

pub fn indeed(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let q = QueryText::new()
        .raw("site:indeed.com/viewjob")
        .phrase(title)
        .group(&skills_clause(p, 3))
        .any_of(C2C_BRIEF)
        .phrase(&p.location)
        .finish();
    vec![SearchQuery::new(
        q,
        SearchPlatform::Indeed,
        format!("Indeed X-ray: {title} contract roles"),
        QueryCategory::JobSearch,
        1,
    )]
}

// ── Monster x-ray ────────────────────────────────────────────────────────

pub fn monster(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    // Location is guarded like every other builder. The legacy engine
    // appended the quoted location unconditionally, emitting a bare `""`
    // term for empty locations; see monster_omits_location_when_empty.
    let q = QueryText::new()
        .raw("site:monster.com")
        .phrase(title)
        .any_of(&["contract", "temporary"])
        .phrase(&p.location)
        .finish();
    vec![SearchQuery::new(
        q,
        SearchPlatform::Monster,
        format!("Monster X-ray: {title} contract roles"),
        QueryCategory::JobSearch,
        2,
    )]
}

// ── CareerBuilder x-ray ──────────────────────────────────────────────────

pub fn careerbuilder(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let q = QueryText::new()
        .raw("site:careerbuilder.com")
        .phrase(title)
        .any_of(&["contract", "c2c"])
        .phrase(&p.location)
        .finish();
    vec![SearchQuery::new(
        q,
        SearchPlatform::Careerbuilder,
        format!("CareerBuilder X-ray: {title} contract roles"),
        QueryCategory::JobSearch,
        3,
    )]
}

// ── ZipRecruiter x-ray ───────────────────────────────────────────────────

pub fn ziprecruiter(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let q = QueryText::new()
        .raw("site:ziprecruiter.com/jobs")
        .phrase(title)
        .group(&skills_clause(p, 3))
        .phrase("contract")
        .phrase(&p.location)
        .finish();
    vec![SearchQuery::new(
        q,
        SearchPlatform::Ziprecruiter,
        format!("ZipRecruiter X-ray: {title} contract roles"),
        QueryCategory::JobSearch,
        2,
    )]
}

// ── TechFetch x-ray ──────────────────────────────────────────────────────

pub fn techfetch(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let q = QueryText::new()
        .raw("site:techfetch.com")
        .phrase(title)
        .any_of(&["c2c", "contract"])
        .phrase(&p.location)
        .finish();
    vec![SearchQuery::new(
        q,
        SearchPlatform::Techfetch,
        format!("TechFetch X-ray: {title} C2C/contract roles"),
        QueryCategory::JobSearch,
        2,
    )]
}

// ── Vendor hunting ───────────────────────────────────────────────────────

/// Find vendor companies and contacts who post these kinds of roles.
pub fn vendor_hunt(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let mut queries = Vec::with_capacity(2);

    // Vendor emails embedded in job postings.
    let q = QueryText::new()
        .group(&title_or_skills(p, 3))
        .any_of(SUBMISSION_PHRASES)
        .any_of(C2C_BRIEF)
        .phrase("@")
        .any_of(&[".com", ".net", ".io"])
        .phrase(&p.location)
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::Google,
        format!("Vendor hunt: Find recruiters with {title} needs"),
        QueryCategory::VendorHunt,
        1,
    ));

    // Staffing companies specializing in these skills.
    let q = QueryText::new()
        .phrase("staffing")
        .any_of(&["consulting"])
        .group(&skills_clause(p, 3))
        .any_of(&["c2c", "corp to corp", "contract staffing"])
        .phrase("united states")
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::Google,
        format!("Find staffing companies specializing in {title}"),
        QueryCategory::VendorHunt,
        2,
    ));

    queries
}

// ── Direct clients ───────────────────────────────────────────────────────

/// Corporate career-site postings, bypassing the big boards.
pub fn direct_client(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let exclusions = MAJOR_BOARD_DOMAINS
        .iter()
        .map(|domain| format!("-site:{domain}"))
        .collect::<Vec<_>>()
        .join(" ");

    let q = QueryText::new()
        .raw("inurl:careers OR inurl:jobs")
        .phrase(title)
        .group(&skills_clause(p, 3))
        .phrase("contract")
        .raw(&exclusions)
        .phrase(&p.location)
        .finish();
    vec![SearchQuery::new(
        q,
        SearchPlatform::Google,
        format!("Direct client search: {title} on corporate career sites"),
        QueryCategory::JobSearch,
        1,
    )]
}

/// Government and state contract roles.
pub fn government(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let q = QueryText::new()
        .group("site:governmentjobs.com OR site:usajobs.gov OR \"state contract\"")
        .phrase(title)
        .group(&skills_clause(p, 3))
        .phrase(&p.location)
        .finish();
    vec![SearchQuery::new(
        q,
        SearchPlatform::Google,
        format!("Government/state contracts: {title}"),
        QueryCategory::JobSearch,
        3,
    )]
}

// ── Corp-to-corp specific ────────────────────────────────────────────────

/// Queries aimed squarely at C2C requirement postings.
pub fn corp_corp(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let mut queries = Vec::with_capacity(2);

    let q = QueryText::new()
        .phrase(title)
        .group(&skills_clause(p, 3))
        .any_of(C2C_ONLY)
        .any_of(REQUIREMENT_TERMS)
        .phrase(&p.location)
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::CorpCorp,
        format!("C2C specific: {title} corp-to-corp requirements"),
        QueryCategory::JobSearch,
        1,
    ));

    // Boards dedicated to C2C requirements.
    let q = QueryText::new()
        .group("site:c2crequirements.com OR site:c2cjobs.com")
        .phrase(title)
        .group(&skills_clause(p, 3))
        .finish();
    queries.push(SearchQuery::new(
        q,
        SearchPlatform::CorpCorp,
        format!("C2C job boards: {title}"),
        QueryCategory::JobSearch,
        2,
    ));

    queries
}

// ── VMS/MSP programs ─────────────────────────────────────────────────────

/// Managed contingent-staffing programs (Fieldglass, Beeline, ...).
pub fn vms_msp(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let q = QueryText::new()
        .group(&quoted_or(&[title.as_str()]))
        .any_of(VMS_PLATFORMS)
        .any_of(&["contract", "contingent"])
        .phrase(&p.location)
        .finish();
    vec![SearchQuery::new(
        q,
        SearchPlatform::Google,
        format!("VMS/MSP programs: {title} contingent roles"),
        QueryCategory::JobSearch,
        3,
    )]
}

// ── Email harvesting ─────────────────────────────────────────────────────

/// Recruiter/vendor email addresses for direct outreach.
pub fn email_harvest(p: &SearchParams) -> Vec<SearchQuery> {
    let title = &p.job_title;
    let q = QueryText::new()
        .group(&quoted_or(&[title.as_str(), "bench sales"]))
        .any_of(RESUME_SUBMISSION_PHRASES)
        .phrase("@")
        .any_of(&["gmail.com", "yahoo.com", ".com"])
        .finish();
    vec![SearchQuery::new(
        q,
        SearchPlatform::Google,
        format!("Find recruiter emails for {title} submissions"),
        QueryCategory::ContactFind,
        2,
    )]
}
