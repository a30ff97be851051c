//! Customer feedback model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Feedback record, persisted under the `feedback` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub customer_name: String,
    pub equipment_id: String,
    pub equipment_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Submit feedback request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedback {
    #[validate(length(min = 1, message = "Please select equipment"))]
    pub equipment_id: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
    #[validate(length(min = 1, message = "Please add a comment"))]
    pub comment: String,
}

/// All feedback with aggregate figures
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub total: usize,
    /// Mean rating rounded to one decimal, 0 when there is no feedback
    pub average_rating: f64,
    /// Share of ratings of 4 or more, in whole percent
    pub positive_percent: u32,
    pub feedback: Vec<Feedback>,
}
