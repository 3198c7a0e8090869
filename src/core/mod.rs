pub mod profile;
pub mod render;
pub mod score;

pub use crate::domain::model::{Acknowledgement, CurrentScore, Page, Profile, ScoreSubmission};
pub use crate::domain::ports::{PageRenderer, ProfileProvider, ScoreService, TemplateStore};
pub use crate::utils::error::Result;
