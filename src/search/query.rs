//! Generated query records and their routing metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BxError;
use crate::search::encode::google_search_url;

/// Platform a generated query is aimed at.
///
/// Closed set: the consuming layer switches on this for grouping and
/// styling, so typos must not be able to mint new groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchPlatform {
    Linkedin,
    Dice,
    Indeed,
    Monster,
    Careerbuilder,
    Ziprecruiter,
    Glassdoor,
    Techfetch,
    Google,
    CorpCorp,
}

impl SearchPlatform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Dice => "dice",
            Self::Indeed => "indeed",
            Self::Monster => "monster",
            Self::Careerbuilder => "careerbuilder",
            Self::Ziprecruiter => "ziprecruiter",
            Self::Glassdoor => "glassdoor",
            Self::Techfetch => "techfetch",
            Self::Google => "google",
            Self::CorpCorp => "corp-corp",
        }
    }
}

impl fmt::Display for SearchPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket consumers group queries under when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryCategory {
    JobSearch,
    VendorHunt,
    ContactFind,
    #[default]
    General,
}

impl QueryCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JobSearch => "job_search",
            Self::VendorHunt => "vendor_hunt",
            Self::ContactFind => "contact_find",
            Self::General => "general",
        }
    }
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryCategory {
    type Err = BxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job_search" => Ok(Self::JobSearch),
            "vendor_hunt" => Ok(Self::VendorHunt),
            "contact_find" => Ok(Self::ContactFind),
            "general" | "" => Ok(Self::General),
            other => Err(BxError::InvalidArgument(format!(
                "unknown category '{other}' (expected job_search, vendor_hunt, contact_find, or general)"
            ))),
        }
    }
}

/// A constructed boolean search expression with metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The literal boolean search expression.
    pub query: String,
    pub platform: SearchPlatform,
    /// Loading this in a browser reproduces the search.
    pub search_url: String,
    pub description: String,
    #[serde(default)]
    pub category: QueryCategory,
    /// 1 is highest; ties break on emission order.
    pub priority: u8,
}

impl SearchQuery {
    /// Build a query record, attaching the Google URL for `query`.
    ///
    /// Every builder constructs records through here so the whole crate has
    /// a single escaping site.
    pub fn new(
        query: impl Into<String>,
        platform: SearchPlatform,
        description: impl Into<String>,
        category: QueryCategory,
        priority: u8,
    ) -> Self {
        let query = query.into();
        let search_url = google_search_url(&query);
        Self {
            query,
            platform,
            search_url,
            description: description.into(),
            category,
            priority,
        }
    }
}
