use crate::domain::model::{Acknowledgement, CurrentScore, Page, Profile, ScoreSubmission};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ProfileProvider: Send + Sync {
    fn profile(&self) -> &Profile;
}

/// High-score reporting. Submissions are acknowledged, never stored.
pub trait ScoreService: Send + Sync {
    fn submit(&self, submission: ScoreSubmission) -> Acknowledgement;
    fn query(&self) -> CurrentScore;
}

#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn load(&self, page: Page) -> Result<String>;
}

#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, page: Page, profile: &Profile) -> Result<String>;
}
