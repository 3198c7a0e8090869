use crate::domain::model::Profile;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// On-disk profile file.
///
/// ```toml
/// [profile]
/// name = "Ada Lovelace"
/// title = "Analyst"
/// location = "London"
/// summary = "..."
/// experience_years = 10
/// current_learning = "${LEARNING_FOCUS}"
/// certifications = ["..."]
///
/// [[profile.skills]]
/// category = "Programming"
/// items = ["Rust", "Python"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub profile: Profile,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

impl ProfileConfig {
    /// 從 TOML 檔案載入個人資料
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PortfolioError::ConfigError {
            message: format!("Cannot read profile '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析個人資料
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LEARNING_FOCUS}), 未定義的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_profile(self) -> Profile {
        self.profile
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        self.profile.validate()
    }
}
