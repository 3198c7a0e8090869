use crate::core::{Page, PageRenderer, Profile, TemplateStore};
use crate::domain::model::SkillCategory;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");
const GAME_TEMPLATE: &str = include_str!("../../templates/game.html");

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{\s*([a-z_]+)\s*\}\}").unwrap())
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

#[async_trait]
impl TemplateStore for EmbeddedTemplates {
    async fn load(&self, page: Page) -> Result<String> {
        let template = match page {
            Page::Home => HOME_TEMPLATE,
            Page::Game => GAME_TEMPLATE,
        };
        Ok(template.to_string())
    }
}

/// Templates read from disk on every request, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    base_path: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

#[async_trait]
impl TemplateStore for DirectoryTemplates {
    async fn load(&self, page: Page) -> Result<String> {
        let full_path = self.base_path.join(page.template_file());
        tracing::debug!("Reading template: {}", full_path.display());

        match tokio::fs::read_to_string(&full_path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PortfolioError::TemplateNotFound {
                    page: page.id().to_string(),
                })
            }
            Err(e) => Err(PortfolioError::IoError(e)),
        }
    }
}

/// Fills `{{ key }}` placeholders with profile fields.
#[derive(Clone)]
pub struct TemplateRenderer {
    store: Arc<dyn TemplateStore>,
}

impl TemplateRenderer {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    pub fn embedded() -> Self {
        Self::new(Arc::new(EmbeddedTemplates))
    }

    pub fn from_directory(base_path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(DirectoryTemplates::new(base_path)))
    }
}

#[async_trait]
impl PageRenderer for TemplateRenderer {
    async fn render(&self, page: Page, profile: &Profile) -> Result<String> {
        let template = self.store.load(page).await?;
        let context = template_context(page, profile);
        fill_placeholders(&template, &context)
    }
}

pub fn template_context(page: Page, profile: &Profile) -> HashMap<&'static str, String> {
    let mut context = HashMap::new();
    context.insert("page", page.id().to_string());
    context.insert("portfolio_name", escape_html(&profile.portfolio_name()));
    context.insert("name", escape_html(&profile.name));
    context.insert("title", escape_html(&profile.title));
    context.insert("location", escape_html(&profile.location));
    context.insert("summary", escape_html(&profile.summary));
    context.insert("experience_years", profile.experience_years.to_string());
    context.insert("current_learning", escape_html(&profile.current_learning));
    context.insert("skills", render_skills(&profile.skills));
    context.insert("certifications", render_list(&profile.certifications));
    context
}

pub fn fill_placeholders(template: &str, context: &HashMap<&'static str, String>) -> Result<String> {
    let mut unresolved = Vec::new();

    let rendered = placeholder_pattern().replace_all(template, |caps: &regex::Captures| {
        let key = &caps[1];
        match context.get(key) {
            Some(value) => value.clone(),
            None => {
                unresolved.push(key.to_string());
                caps[0].to_string()
            }
        }
    });

    if !unresolved.is_empty() {
        let mut available: Vec<_> = context.keys().collect();
        available.sort();
        tracing::error!("Unresolved template placeholders: {:?}", unresolved);
        return Err(PortfolioError::TemplateError {
            message: format!(
                "Unresolved placeholders: {}. Available fields: {:?}",
                unresolved.join(", "),
                available
            ),
        });
    }

    Ok(rendered.into_owned())
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_skills(skills: &[SkillCategory]) -> String {
    skills
        .iter()
        .map(|category| {
            format!(
                "<div class=\"skill-category\">\n<h3>{}</h3>\n<ul class=\"skill-list\">\n{}\n</ul>\n</div>",
                escape_html(&category.category),
                render_list(&category.items)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
