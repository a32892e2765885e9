//! Lesson endpoints.
//!
//! `lessons()` is the one public-pipeline call here: the lesson catalogue must
//! be browsable before anyone logs in. Everything else is instructor-side and
//! authenticated.

use crate::models::{Lesson, LessonDraft};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// All published lessons. Public: no credential is attached and a
    /// rejection never touches the stored session.
    pub async fn lessons(&self) -> Result<Vec<Lesson>, ApiError> {
        self.get_public_json("/api/lessons").await
    }

    /// The calling instructor's own lessons, published or not.
    pub async fn instructor_lessons(&self) -> Result<Vec<Lesson>, ApiError> {
        self.get_json("/api/lessons/instructor").await
    }

    pub async fn create_lesson(&self, draft: &LessonDraft) -> Result<Lesson, ApiError> {
        self.post_json("/api/lessons", draft).await
    }

    pub async fn update_lesson(&self, id: i64, draft: &LessonDraft) -> Result<Lesson, ApiError> {
        self.put_json(&format!("/api/lessons/{id}"), draft).await
    }

    pub async fn delete_lesson(&self, id: i64) -> Result<(), ApiError> {
        self.delete_empty(&format!("/api/lessons/{id}")).await
    }

    /// Flip a lesson's `published` flag on.
    pub async fn publish_lesson(&self, id: i64) -> Result<Lesson, ApiError> {
        self.post_no_body(&format!("/api/lessons/{id}/publish")).await
    }

    /// Flip a lesson's `published` flag off.
    pub async fn unpublish_lesson(&self, id: i64) -> Result<Lesson, ApiError> {
        self.post_no_body(&format!("/api/lessons/{id}/unpublish"))
            .await
    }
}
