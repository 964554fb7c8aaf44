//! REST DTOs for the outcome-tracking API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON so serde round-trips stay
//! lossless. Identifiers arrive as either JSON strings or integers depending
//! on the endpoint; they are normalized to `String` on the way in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Role tag attached to every user record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Hod,
    Faculty,
}

impl Role {
    /// Wire tag for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Hod => "HOD",
            Self::Faculty => "FACULTY",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Department reference embedded in user and faculty records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Authenticated user snapshot as returned by the server. Never mutated locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Empty when the server omits it.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

impl User {
    /// Name to show in the UI, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Payload of `GET /auth/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// A course row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub credits: u32,
    pub category: String,
    pub version: String,
    /// Attainment threshold in percent.
    pub threshold: f64,
    #[serde(default)]
    pub is_active: bool,
}

/// Create/update body for courses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: u32,
    pub category: String,
    pub version: String,
    pub threshold: f64,
}

/// Bloom's taxonomy level of a CLO.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BloomLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl BloomLevel {
    /// All levels in taxonomy order.
    pub const ALL: [Self; 6] = [
        Self::Remember,
        Self::Understand,
        Self::Apply,
        Self::Analyze,
        Self::Evaluate,
        Self::Create,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remember => "REMEMBER",
            Self::Understand => "UNDERSTAND",
            Self::Apply => "APPLY",
            Self::Analyze => "ANALYZE",
            Self::Evaluate => "EVALUATE",
            Self::Create => "CREATE",
        }
    }

    /// Parse a wire tag; `None` for anything outside the taxonomy.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw)
    }
}

/// A Course Learning Outcome row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub clo_code: String,
    pub description: String,
    pub bloom_level: BloomLevel,
    pub version: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub course_id: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Create/update body for CLOs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloInput {
    pub clo_code: String,
    pub description: String,
    pub bloom_level: BloomLevel,
    pub version: String,
    pub course_id: String,
}

/// Which outcome family a CLO maps onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeKind {
    Po,
    Pso,
}

/// Body of the CLO → PO/PSO mapping endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloMappingInput {
    pub clo_id: String,
    pub outcome_kind: OutcomeKind,
    /// Outcome code such as `PO3` or `PSO1`.
    pub outcome_code: String,
    /// Correlation strength, 1 (low) to 3 (high).
    pub correlation: u8,
}

/// A persisted CLO mapping as listed by `/hod/clo/mappings/:courseId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloMapping {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub clo_id: String,
    pub outcome_kind: OutcomeKind,
    pub outcome_code: String,
    pub correlation: u8,
}

/// Faculty member managed by a head of department.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Faculty record with the courses currently assigned to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyWithCourses {
    #[serde(flatten)]
    pub faculty: Faculty,
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Create/update body for faculty records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyInput {
    pub name: String,
    pub email: String,
    /// Only sent on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub designation: String,
}

/// Body for faculty ↔ course assignment and removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAssignment {
    pub faculty_id: String,
    pub course_id: String,
}

/// Counters rendered on the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_courses: u64,
    #[serde(rename = "activeCLOs")]
    pub active_clos: u64,
    pub program_outcomes: u64,
    pub pending_reviews: u64,
}

fn default_active() -> bool {
    true
}

/// Accept either a JSON string or integer identifier.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int.to_string());
            }
            if let Some(uint) = number.as_u64() {
                return Ok(uint.to_string());
            }
            Err(D::Error::custom("expected integer identifier"))
        }
        _ => Err(D::Error::custom("expected string or integer identifier")),
    }
}
