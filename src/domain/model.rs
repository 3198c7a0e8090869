use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::PortfolioError;

/// One skill category as shown on the home page, e.g. "CI/CD".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// Static biographical record displayed on the site.
///
/// Built once at startup and shared read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub summary: String,
    /// Ordered: categories render in declaration order.
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub experience_years: i64,
    pub current_learning: String,
}

impl Profile {
    /// Application name reported by `/health`.
    pub fn portfolio_name(&self) -> String {
        format!("{} Portfolio", self.name)
    }

    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|c| c.items.len()).sum()
    }
}

/// Body of `POST /api/highscore`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    #[serde(default)]
    pub score: Option<serde_json::Number>,
}

impl ScoreSubmission {
    /// Lenient decode: an empty, malformed or non-object body is a submission of 0.
    pub fn from_body(body: &[u8]) -> Self {
        let value = match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Unreadable score payload ({}), treating as 0", e);
                return Self::default();
            }
        };

        // only `{"score": <number>}` carries a score; arrays, strings and nulls do not
        let score = match value.get("score") {
            Some(serde_json::Value::Number(n)) => Some(n.clone()),
            Some(other) => {
                tracing::debug!("Non-numeric score {} treated as 0", other);
                None
            }
            None => None,
        };
        Self { score }
    }

    pub fn score_or_zero(&self) -> serde_json::Number {
        self.score.clone().unwrap_or_else(|| serde_json::Number::from(0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub status: String,
    pub message: String,
}

impl Acknowledgement {
    pub fn recorded(score: &serde_json::Number) -> Self {
        Self {
            status: "success".to_string(),
            message: format!("Score {} recorded!", score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentScore {
    pub highscore: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub app: String,
}

impl HealthStatus {
    pub fn healthy(app: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            app: app.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Game,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Game];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Game => "game",
        }
    }

    pub fn template_file(&self) -> String {
        format!("{}.html", self.id())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| PortfolioError::TemplateNotFound {
                page: s.to_string(),
            })
    }
}
