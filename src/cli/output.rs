use chrono::{DateTime, Utc};
use console::style;
use serde::Serialize;

use crate::error::{BxError, Result};
use crate::search::{JobBoardLink, QueryCategory, SearchQuery};

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error { code: String, message: String },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

pub fn emit_robot<T: Serialize>(response: &RobotResponse<T>) -> Result<()> {
    emit_json(response)
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| BxError::Output(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl HumanLayout {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 12,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let key_style = style(key).dim().to_string();
        self.lines.push(format!(
            "{key_style:width$} {value}",
            width = self.key_width
        ));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Render order for category groups.
const CATEGORY_ORDER: &[QueryCategory] = &[
    QueryCategory::JobSearch,
    QueryCategory::VendorHunt,
    QueryCategory::ContactFind,
    QueryCategory::General,
];

/// Human rendering of a query list: grouped by category, sorted by priority
/// ascending within each group, emission order as the tie-break.
pub fn query_list(title: &str, queries: &[SearchQuery]) -> String {
    let mut layout = HumanLayout::new();
    layout.title(title);

    for category in CATEGORY_ORDER {
        let mut group: Vec<&SearchQuery> =
            queries.iter().filter(|q| q.category == *category).collect();
        if group.is_empty() {
            continue;
        }
        // Stable sort keeps emission order for equal priorities.
        group.sort_by_key(|q| q.priority);

        layout.section(&format!("{} ({})", category, group.len()));
        for q in group {
            layout
                .blank()
                .kv("description", &q.description)
                .kv("platform", q.platform.as_str())
                .kv("priority", &q.priority.to_string())
                .kv("query", &q.query)
                .kv("url", &q.search_url);
        }
        layout.blank();
    }

    layout.build()
}

/// Human rendering of direct job board links.
pub fn board_list(title: &str, links: &[JobBoardLink]) -> String {
    let mut layout = HumanLayout::new();
    layout.title(title);
    for link in links {
        layout
            .kv("description", &link.description)
            .kv("url", &link.url)
            .blank();
    }
    layout.build()
}

/// Human rendering of a synonym list.
pub fn synonym_list(title: &str, synonyms: &[String]) -> String {
    let mut layout = HumanLayout::new();
    layout.title(&format!("Role synonyms for: {title}"));
    for synonym in synonyms {
        layout.bullet(synonym);
    }
    layout.build()
}
