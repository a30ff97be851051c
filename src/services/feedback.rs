//! Customer feedback service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use snowflaked::Generator;
use tokio::sync::Mutex;

use super::SharedStore;
use crate::{
    error::{AppError, AppResult},
    models::{
        feedback::{CreateFeedback, Feedback, FeedbackSummary},
        UserSession,
    },
    repository::{keys, Repository},
};

/// Ratings at or above this count as positive
const POSITIVE_RATING: u8 = 4;

#[derive(Clone)]
pub struct FeedbackService {
    store: SharedStore,
    repository: Repository,
    /// Also serializes read-modify-write of the feedback key
    ids: Arc<Mutex<Generator>>,
}

impl FeedbackService {
    pub fn new(store: SharedStore, repository: Repository) -> Self {
        Self {
            store,
            repository,
            ids: Arc::new(Mutex::new(Generator::new(1))),
        }
    }

    /// Record feedback from `user` about a piece of equipment
    pub async fn submit(
        &self,
        user: &UserSession,
        data: CreateFeedback,
        now: DateTime<Utc>,
    ) -> AppResult<Feedback> {
        if data.comment.trim().is_empty() {
            return Err(AppError::Validation("Please add a comment".to_string()));
        }
        let equipment_name = self
            .store
            .read()
            .await
            .find_equipment(&data.equipment_id)
            .map(|eq| eq.name.clone())
            .ok_or_else(|| AppError::Validation("Please select valid equipment".to_string()))?;

        let mut ids = self.ids.lock().await;
        let id: u64 = ids.generate();
        let feedback = Feedback {
            id: format!("f{}", id),
            customer_name: user.name.clone(),
            equipment_id: data.equipment_id,
            equipment_name,
            rating: data.rating,
            comment: data.comment,
            date: now,
        };

        let mut all = self.load().await?;
        all.push(feedback.clone());
        self.repository.save(keys::FEEDBACK, &all)?;

        tracing::info!(
            feedback_id = %feedback.id,
            equipment_id = %feedback.equipment_id,
            rating = feedback.rating,
            "Feedback submitted"
        );
        Ok(feedback)
    }

    pub async fn summary(&self) -> AppResult<FeedbackSummary> {
        Ok(summarize(self.load().await?))
    }

    async fn load(&self) -> AppResult<Vec<Feedback>> {
        Ok(self.repository.load(keys::FEEDBACK)?.unwrap_or_default())
    }
}

fn summarize(feedback: Vec<Feedback>) -> FeedbackSummary {
    let total = feedback.len();
    let (average_rating, positive_percent) = if total == 0 {
        (0.0, 0)
    } else {
        let sum: u32 = feedback.iter().map(|f| u32::from(f.rating)).sum();
        let average = f64::from(sum) / total as f64;
        let positive = feedback.iter().filter(|f| f.rating >= POSITIVE_RATING).count();
        (
            (average * 10.0).round() / 10.0,
            (positive as f64 / total as f64 * 100.0).round() as u32,
        )
    };

    FeedbackSummary {
        total,
        average_rating,
        positive_percent,
        feedback,
    }
}
