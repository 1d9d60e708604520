//! Search parameters derived from a consultant profile

use serde::{Deserialize, Serialize};

/// Inputs for one query-generation pass.
///
/// Every field has a safe empty/default reading: builders drop the
/// corresponding clause instead of failing. Read-only once constructed;
/// no builder mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub job_title: String,
    /// Top skills in priority order; builders slice the first 3-4.
    #[serde(default)]
    pub primary_skills: Vec<String>,
    /// Part of the contract for callers, unused by most builders.
    #[serde(default)]
    pub secondary_skills: Vec<String>,
    /// Empty means no location constraint.
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_true")]
    pub remote_ok: bool,
    /// Empty means no visa filter.
    #[serde(default)]
    pub visa_status: String,
    #[serde(default = "default_employment_types")]
    pub employment_types: Vec<String>,
    /// Informational only; never alters query text.
    #[serde(default)]
    pub experience_years: f64,
    /// Display only; never alters query text.
    #[serde(default)]
    pub rate_range: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            primary_skills: Vec::new(),
            secondary_skills: Vec::new(),
            location: String::new(),
            remote_ok: true,
            visa_status: String::new(),
            employment_types: default_employment_types(),
            experience_years: 0.0,
            rate_range: String::new(),
        }
    }
}

impl SearchParams {
    pub fn new(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            ..Self::default()
        }
    }

    pub fn with_primary_skills(mut self, skills: Vec<String>) -> Self {
        self.primary_skills = skills;
        self
    }

    pub fn with_secondary_skills(mut self, skills: Vec<String>) -> Self {
        self.secondary_skills = skills;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_remote_ok(mut self, remote_ok: bool) -> Self {
        self.remote_ok = remote_ok;
        self
    }

    pub fn with_visa_status(mut self, visa_status: impl Into<String>) -> Self {
        self.visa_status = visa_status.into();
        self
    }

    pub fn with_employment_types(mut self, employment_types: Vec<String>) -> Self {
        self.employment_types = employment_types;
        self
    }

    pub fn with_experience_years(mut self, years: f64) -> Self {
        self.experience_years = years;
        self
    }

    pub fn with_rate_range(mut self, rate_range: impl Into<String>) -> Self {
        self.rate_range = rate_range.into();
        self
    }
}

fn default_true() -> bool {
    true
}

fn default_employment_types() -> Vec<String> {
    vec!["C2C".to_string()]
}
