//! Golf round endpoints (all authenticated).

use crate::models::GolfRound;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// The calling user's recorded rounds.
    pub async fn golf_rounds(&self) -> Result<Vec<GolfRound>, ApiError> {
        self.get_json("/api/golf-rounds").await
    }

    pub async fn golf_round(&self, id: i64) -> Result<GolfRound, ApiError> {
        self.get_json(&format!("/api/golf-rounds/{id}")).await
    }

    pub async fn create_golf_round(&self, round: &GolfRound) -> Result<GolfRound, ApiError> {
        self.post_json("/api/golf-rounds", round).await
    }

    pub async fn update_golf_round(&self, id: i64, round: &GolfRound) -> Result<GolfRound, ApiError> {
        self.put_json(&format!("/api/golf-rounds/{id}"), round).await
    }

    pub async fn delete_golf_round(&self, id: i64) -> Result<(), ApiError> {
        self.delete_empty(&format!("/api/golf-rounds/{id}")).await
    }
}
