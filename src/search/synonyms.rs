//! Role title synonym lookup

/// Canonical IT role titles and their alternative phrasings.
///
/// The first entry of each list is the canonical form itself. Keys are
/// stored pre-normalized (lowercase, trimmed).
const ROLE_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "java developer",
        &[
            "java developer",
            "java engineer",
            "java programmer",
            "j2ee developer",
        ],
    ),
    (
        "python developer",
        &[
            "python developer",
            "python engineer",
            "django developer",
            "flask developer",
        ],
    ),
    (
        "data engineer",
        &[
            "data engineer",
            "etl developer",
            "data pipeline engineer",
            "big data engineer",
        ],
    ),
    (
        "devops engineer",
        &[
            "devops engineer",
            "site reliability engineer",
            "sre",
            "platform engineer",
            "cloud engineer",
        ],
    ),
    (
        "full stack developer",
        &[
            "full stack developer",
            "fullstack developer",
            "full-stack developer",
            "mern developer",
            "mean developer",
        ],
    ),
    (
        "qa engineer",
        &[
            "qa engineer",
            "qa analyst",
            "test engineer",
            "sdet",
            "quality assurance",
        ],
    ),
    (
        "business analyst",
        &[
            "business analyst",
            "ba",
            "business systems analyst",
            "requirements analyst",
        ],
    ),
    (
        "data analyst",
        &[
            "data analyst",
            "reporting analyst",
            "bi analyst",
            "analytics engineer",
        ],
    ),
    (
        "salesforce developer",
        &[
            "salesforce developer",
            "sfdc developer",
            "salesforce engineer",
            "salesforce admin",
        ],
    ),
    (
        "aws engineer",
        &[
            "aws engineer",
            "aws architect",
            "aws devops",
            "cloud engineer aws",
        ],
    ),
    (
        "azure engineer",
        &[
            "azure engineer",
            "azure architect",
            "azure devops",
            "cloud engineer azure",
        ],
    ),
    (
        ".net developer",
        &[
            ".net developer",
            "dotnet developer",
            "c# developer",
            "asp.net developer",
        ],
    ),
    (
        "react developer",
        &[
            "react developer",
            "react engineer",
            "reactjs developer",
            "frontend developer react",
        ],
    ),
    (
        "scrum master",
        &["scrum master", "agile coach", "agile scrum master"],
    ),
    (
        "project manager",
        &[
            "project manager",
            "program manager",
            "it project manager",
            "technical project manager",
        ],
    ),
    (
        "data scientist",
        &[
            "data scientist",
            "ml engineer",
            "machine learning engineer",
            "ai engineer",
        ],
    ),
    (
        "sap consultant",
        &["sap consultant", "sap developer", "sap functional", "sap basis"],
    ),
    (
        "network engineer",
        &["network engineer", "network administrator", "cisco engineer"],
    ),
    (
        "security engineer",
        &[
            "security engineer",
            "cybersecurity engineer",
            "information security",
            "infosec engineer",
        ],
    ),
    (
        "database administrator",
        &[
            "database administrator",
            "dba",
            "database engineer",
            "sql dba",
        ],
    ),
];

/// Alternative job titles for broader searching.
///
/// Lookup is exact on the trimmed, lowercased title; returned synonyms keep
/// the table's canonical casing. Unknown titles are a normal case, not an
/// error: the caller's original string echoes back as a one-element list.
pub fn role_synonyms(title: &str) -> Vec<String> {
    let normalized = title.trim().to_lowercase();
    for (canonical, synonyms) in ROLE_SYNONYMS {
        if *canonical == normalized {
            return synonyms.iter().map(|s| (*s).to_string()).collect();
        }
    }
    vec![title.to_string()]
}
