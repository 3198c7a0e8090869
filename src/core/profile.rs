use crate::config::toml_config::ProfileConfig;
use crate::core::{Profile, ProfileProvider};
use crate::domain::model::SkillCategory;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::path::Path;
use std::sync::Arc;

pub const MAX_EXPERIENCE_YEARS: i64 = 80;

/// Read-only profile shared by every request handler.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile: Arc<Profile>,
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: Arc::new(profile),
        }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_profile())
    }

    /// 載入個人資料: 指定檔案優先, 否則使用內建資料
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let profile = match path {
            Some(path) => {
                tracing::info!("📁 Loading profile from: {}", path.display());
                ProfileConfig::from_file(path)?.into_profile()
            }
            None => {
                tracing::info!("📁 Using built-in profile");
                builtin_profile()
            }
        };

        profile.validate()?;
        tracing::debug!(
            "Profile '{}' loaded with {} skills in {} categories",
            profile.name,
            profile.skill_count(),
            profile.skills.len()
        );

        Ok(Self::new(profile))
    }
}

impl ProfileProvider for ProfileStore {
    fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl Validate for Profile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.name)?;
        validate_non_empty_string("profile.title", &self.title)?;
        validate_range(
            "profile.experience_years",
            self.experience_years,
            0,
            MAX_EXPERIENCE_YEARS,
        )?;

        for category in &self.skills {
            validate_non_empty_string("profile.skills.category", &category.category)?;
            if category.items.iter().any(|item| item.trim().is_empty()) {
                return Err(PortfolioError::ConfigValidationError {
                    field: format!("profile.skills.{}", category.category),
                    message: "Skill names cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

fn category(name: &str, items: &[&str]) -> SkillCategory {
    SkillCategory {
        category: name.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn builtin_profile() -> Profile {
    Profile {
        name: "Sohaib Sohail".to_string(),
        title: "DevOps Engineer at PwC".to_string(),
        location: "London".to_string(),
        summary: "Cloud Engineer with over 4 years of experience at PwC and Capgemini, \
                  specialising in Azure, AWS, Terraform, and CI/CD pipelines."
            .to_string(),
        skills: vec![
            category("Cloud Platforms", &["Azure", "AWS", "GCP"]),
            category("Infrastructure as Code", &["Terraform (Terragrunt)", "Helm"]),
            category(
                "CI/CD",
                &["GitHub Actions", "Azure DevOps", "Jenkins", "Drone CI"],
            ),
            category(
                "Programming",
                &["Python", "JavaScript", "Bash", "SQL", "PowerShell"],
            ),
            category(
                "DevSecOps",
                &["Checkov", "TFLint", "Terratest", "Anchore", "SonarQube"],
            ),
            category(
                "Monitoring",
                &["Azure Monitor", "AWS CloudWatch", "Log Analytics"],
            ),
        ],
        certifications: vec![
            "Terraform Associate".to_string(),
            "Azure Fundamentals Certified".to_string(),
            "AWS Cloud Practitioner Certified".to_string(),
        ],
        experience_years: 4,
        current_learning: "Kubernetes (targeting CKA certification by Q3 2025)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_is_valid() {
        let store = ProfileStore::builtin();
        let profile = store.profile();

        assert!(profile.validate().is_ok());
        assert_eq!(profile.portfolio_name(), "Sohaib Sohail Portfolio");
        assert_eq!(profile.skills.len(), 6);
        assert_eq!(profile.skills[0].category, "Cloud Platforms");
        assert_eq!(profile.skills[5].category, "Monitoring");
        assert_eq!(profile.certifications.len(), 3);
        assert_eq!(profile.experience_years, 4);
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let store = ProfileStore::load(None).unwrap();
        assert_eq!(store.profile(), &builtin_profile());
    }

    #[test]
    fn test_store_serves_profile_through_provider() {
        let provider: Arc<dyn ProfileProvider> = Arc::new(ProfileStore::builtin());
        let cloned = ProfileStore::builtin().clone();

        assert_eq!(provider.profile(), cloned.profile());
        assert_eq!(provider.profile().portfolio_name(), "Sohaib Sohail Portfolio");
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut profile = builtin_profile();
        profile.name = "  ".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_experience() {
        let mut profile = builtin_profile();
        profile.experience_years = -1;
        assert!(profile.validate().is_err());

        profile.experience_years = MAX_EXPERIENCE_YEARS + 1;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_skill() {
        let mut profile = builtin_profile();
        profile.skills[1].items.push(String::new());
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("Infrastructure as Code"));
    }
}
