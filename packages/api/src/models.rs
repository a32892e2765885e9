//! Wire types for the GolfDiary REST API.
//!
//! The backend speaks camelCase JSON with SCREAMING_SNAKE_CASE enum values;
//! the category/level enums are closed sets, so an out-of-set value fails at
//! the deserialization boundary instead of leaking into the app as a loose
//! string.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use store::Role;

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response: the credential plus the identity to cache.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
}

/// Registration request body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Plain message body, used for registration confirmations and error bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Lesson categories offered by the platform (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LessonCategory {
    Technique,
    Putting,
    Chipping,
    Pitching,
    BunkerPlay,
    Driving,
    IronPlay,
    CourseManagement,
    MentalGame,
    Fitness,
    Rules,
    Equipment,
}

impl LessonCategory {
    pub const ALL: [LessonCategory; 12] = [
        LessonCategory::Technique,
        LessonCategory::Putting,
        LessonCategory::Chipping,
        LessonCategory::Pitching,
        LessonCategory::BunkerPlay,
        LessonCategory::Driving,
        LessonCategory::IronPlay,
        LessonCategory::CourseManagement,
        LessonCategory::MentalGame,
        LessonCategory::Fitness,
        LessonCategory::Rules,
        LessonCategory::Equipment,
    ];

    /// Parse the wire spelling (`BUNKER_PLAY`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonCategory::Technique => "TECHNIQUE",
            LessonCategory::Putting => "PUTTING",
            LessonCategory::Chipping => "CHIPPING",
            LessonCategory::Pitching => "PITCHING",
            LessonCategory::BunkerPlay => "BUNKER_PLAY",
            LessonCategory::Driving => "DRIVING",
            LessonCategory::IronPlay => "IRON_PLAY",
            LessonCategory::CourseManagement => "COURSE_MANAGEMENT",
            LessonCategory::MentalGame => "MENTAL_GAME",
            LessonCategory::Fitness => "FITNESS",
            LessonCategory::Rules => "RULES",
            LessonCategory::Equipment => "EQUIPMENT",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            LessonCategory::Technique => "Technique",
            LessonCategory::Putting => "Putting",
            LessonCategory::Chipping => "Chipping",
            LessonCategory::Pitching => "Pitching",
            LessonCategory::BunkerPlay => "Bunker Play",
            LessonCategory::Driving => "Driving",
            LessonCategory::IronPlay => "Iron Play",
            LessonCategory::CourseManagement => "Course Management",
            LessonCategory::MentalGame => "Mental Game",
            LessonCategory::Fitness => "Fitness",
            LessonCategory::Rules => "Rules",
            LessonCategory::Equipment => "Equipment",
        }
    }
}

/// Difficulty levels (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LessonLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl LessonLevel {
    pub const ALL: [LessonLevel; 4] = [
        LessonLevel::Beginner,
        LessonLevel::Intermediate,
        LessonLevel::Advanced,
        LessonLevel::Expert,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonLevel::Beginner => "BEGINNER",
            LessonLevel::Intermediate => "INTERMEDIATE",
            LessonLevel::Advanced => "ADVANCED",
            LessonLevel::Expert => "EXPERT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LessonLevel::Beginner => "Beginner",
            LessonLevel::Intermediate => "Intermediate",
            LessonLevel::Advanced => "Advanced",
            LessonLevel::Expert => "Expert",
        }
    }
}

/// The instructor reference embedded in a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

/// A lesson as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub document_url: Option<String>,
    pub category: LessonCategory,
    pub level: LessonLevel,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<InstructorRef>,
}

/// What an instructor submits when creating or editing a lesson. The backend
/// fills in identity, timestamps and ownership.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub category: LessonCategory,
    pub level: LessonLevel,
}

/// A recorded round of golf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GolfRound {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub course_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_date: Option<NaiveDateTime>,
    pub total_score: i32,
    #[serde(default)]
    pub par: Option<i32>,
    #[serde(default)]
    pub birdies: Option<i32>,
    #[serde(default)]
    pub pars: Option<i32>,
    #[serde(default)]
    pub bogeys: Option<i32>,
    #[serde(default)]
    pub double_bogeys: Option<i32>,
    #[serde(default)]
    pub other: Option<i32>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}
