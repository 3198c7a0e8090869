use crate::core::{Acknowledgement, CurrentScore, ScoreService, ScoreSubmission};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::Mutex;

pub const HIGHSCORE_MIN: u32 = 50;
pub const HIGHSCORE_MAX: u32 = 200;

enum DrawSource {
    /// Per-thread generator, no shared state between requests.
    Thread,
    Seeded(Mutex<StdRng>),
}

/// Acknowledges submissions and reports a fabricated current high score.
///
/// Nothing is stored: `query` is a fresh uniform draw from
/// `HIGHSCORE_MIN..=HIGHSCORE_MAX` no matter what was submitted before.
pub struct RandomScoreService {
    source: DrawSource,
    range: RangeInclusive<u32>,
}

impl RandomScoreService {
    pub fn new() -> Self {
        Self {
            source: DrawSource::Thread,
            range: HIGHSCORE_MIN..=HIGHSCORE_MAX,
        }
    }

    /// Deterministic sequence of draws, used by tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            source: DrawSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            range: HIGHSCORE_MIN..=HIGHSCORE_MAX,
        }
    }

    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }

    fn draw(&self) -> u32 {
        match &self.source {
            DrawSource::Thread => rand::thread_rng().gen_range(self.range.clone()),
            DrawSource::Seeded(rng) => {
                // a poisoned lock still holds a usable generator
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.gen_range(self.range.clone())
            }
        }
    }
}

impl Default for RandomScoreService {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreService for RandomScoreService {
    fn submit(&self, submission: ScoreSubmission) -> Acknowledgement {
        let score = submission.score_or_zero();
        tracing::info!("🎮 Score submitted: {}", score);
        Acknowledgement::recorded(&score)
    }

    fn query(&self) -> CurrentScore {
        let highscore = self.draw();
        tracing::debug!("🎮 Reporting high score: {}", highscore);
        CurrentScore { highscore }
    }
}
