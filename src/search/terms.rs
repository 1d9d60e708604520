//! Static search vocabulary shared by the query builders
//!
//! Immutable process-wide tables. The engine sources contract requirements
//! exclusively: corp-to-corp terms appear throughout, W2 terms never do.

/// Full contract-intent disjunction used by the broadest builders.
pub const C2C_FULL: &[&str] = &["c2c", "corp to corp", "corp-to-corp", "contract"];

/// Three-term variant used where the hyphenated form adds no recall.
pub const C2C_BRIEF: &[&str] = &["c2c", "corp to corp", "contract"];

/// Strictly corp-to-corp phrasings, no generic "contract".
pub const C2C_ONLY: &[&str] = &["c2c", "corp to corp", "corp-to-corp"];

/// Profile headlines of the recruiters who broker bench placements.
pub const RECRUITER_ROLES: &[&str] = &["bench sales", "us staffing", "it recruiter"];

/// Company-page words that mark a staffing vendor.
pub const STAFFING_INDICATORS: &[&str] = &["staffing", "consulting", "solutions"];

/// Post phrasings that signal an open requirement.
pub const URGENCY_TERMS: &[&str] = &[
    "urgent requirement",
    "hot requirement",
    "immediate need",
    "looking for",
];

/// How vendors ask for candidate submissions in postings.
pub const SUBMISSION_PHRASES: &[&str] = &[
    "send resume",
    "email resume",
    "send profiles",
    "share profiles",
];

/// Imperative resume-submission phrasings used in email harvesting.
pub const RESUME_SUBMISSION_PHRASES: &[&str] =
    &["send resume to", "email your resume", "submit resume"];

/// Words that accompany an open C2C requirement.
pub const REQUIREMENT_TERMS: &[&str] = &["requirement", "position", "opening", "need"];

/// Vendor management platforms that intermediate contingent staffing.
pub const VMS_PLATFORMS: &[&str] = &[
    "fieldglass",
    "beeline",
    "workforce logiq",
    "vms",
    "managed service",
];

/// Phrasings vendors use for availability/requirement blasts.
pub const HOTLIST_TERMS: &[&str] = &[
    "hotlist",
    "requirement list",
    "urgent requirements",
    "hot list",
];

/// Major boards excluded from direct-client searches.
pub const MAJOR_BOARD_DOMAINS: &[&str] = &[
    "linkedin.com",
    "indeed.com",
    "dice.com",
    "monster.com",
    "ziprecruiter.com",
];
