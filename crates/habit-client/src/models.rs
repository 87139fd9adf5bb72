//! Wire Models
//!
//! Records mirrored from backend responses and the request bodies we send.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Days per week pre-filled in the new-habit form
pub const DEFAULT_TARGET_DAYS: u32 = 5;

/// Backend identifier. The backend may emit numbers or strings; we keep the
/// form we received so it round-trips unchanged in request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole number from any JSON number. Fractions truncate toward zero and
/// `null` counts as 0; negative values are kept for the view to clamp.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0, |n| n as i64))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: RecordId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default = "default_target_days")]
    pub target_days_per_week: u32,
}

fn default_target_days() -> u32 {
    DEFAULT_TARGET_DAYS
}

/// Look up a habit by the text form of its id (as held by a `<select>`).
pub fn find_habit<'a>(habits: &'a [Habit], key: &str) -> Option<&'a Habit> {
    habits.iter().find(|h| h.id.to_string() == key)
}

/// Body of `POST /api/habits`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHabit {
    pub name: String,
    pub description: String,
    pub target_days_per_week: u32,
}

impl Default for NewHabit {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            target_days_per_week: DEFAULT_TARGET_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Zero-based position in the roadmap
    #[serde(default, deserialize_with = "lenient_int")]
    pub order: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: RecordId,
    /// Article, video, course, ...
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    pub title: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressEntry {
    #[serde(default)]
    pub habit_id: Option<RecordId>,
    #[serde(default)]
    pub note: Option<String>,
    /// Full data URL, not a bare payload
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ProgressEntry {
    /// Note text, if any non-blank note was attached
    pub fn visible_note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Body of `GET /api/progress/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ProgressEntry>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub streak: i64,
}

/// Body of `POST /api/ask`. `image_base64` is always sent, as `null` when absent.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest<'a> {
    pub habit_id: &'a RecordId,
    pub question: &'a str,
    pub image_base64: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AskAnswer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
}

/// Body of `POST /api/progress`
#[derive(Debug, Clone, Serialize)]
pub struct NewProgress<'a> {
    pub habit_id: &'a RecordId,
    pub note: &'a str,
    pub image_base64: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the Ask-AI transcript. Lives only in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub image_base64: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_keep_their_wire_form() {
        let numeric: RecordId = serde_json::from_value(json!(1)).unwrap();
        let text: RecordId = serde_json::from_value(json!("65f0c2")).unwrap();
        assert_eq!(numeric, RecordId::Number(1));
        assert_eq!(text, RecordId::from("65f0c2"));
        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!(1));
        assert_eq!(serde_json::to_value(&text).unwrap(), json!("65f0c2"));
        assert_eq!(numeric.to_string(), "1");
    }

    #[test]
    fn habit_tolerates_missing_fields() {
        let habit: Habit = serde_json::from_value(json!({
            "id": 3,
            "name": "Stretch",
            "description": null,
            "created_by": "someone"
        }))
        .unwrap();
        assert_eq!(habit.description, "");
        assert_eq!(habit.target_days_per_week, DEFAULT_TARGET_DAYS);
    }

    #[test]
    fn find_habit_matches_text_key() {
        let habits = vec![
            Habit {
                id: 1.into(),
                name: "Read".into(),
                description: String::new(),
                target_days_per_week: 5,
            },
            Habit {
                id: "abc".into(),
                name: "Run".into(),
                description: String::new(),
                target_days_per_week: 3,
            },
        ];
        assert_eq!(find_habit(&habits, "1").map(|h| h.name.as_str()), Some("Read"));
        assert_eq!(find_habit(&habits, "abc").map(|h| h.name.as_str()), Some("Run"));
        assert!(find_habit(&habits, "").is_none());
    }

    #[test]
    fn resource_type_is_renamed() {
        let resource: Resource = serde_json::from_value(json!({
            "id": 4,
            "type": "video",
            "title": "Habit loops",
            "url": "https://example.com/v",
            "provider": "YouTube"
        }))
        .unwrap();
        assert_eq!(resource.kind, "video");
    }

    #[test]
    fn progress_summary_defaults() {
        let summary: ProgressSummary = serde_json::from_value(json!({})).unwrap();
        assert!(summary.items.is_empty());
        assert_eq!(summary.streak, 0);

        let summary: ProgressSummary =
            serde_json::from_value(json!({ "items": null, "streak": null })).unwrap();
        assert_eq!(summary, ProgressSummary::default());
    }

    #[test]
    fn odd_numbers_do_not_reject_the_response() {
        let items: Vec<RoadmapItem> = serde_json::from_value(json!([
            { "id": 1, "title": "Warm-up", "order": -1 },
            { "id": 2, "title": "Half step", "order": 2.5 },
            { "id": 3, "title": "Unordered", "order": null }
        ]))
        .unwrap();
        let orders: Vec<_> = items.iter().map(|i| i.order).collect();
        assert_eq!(orders, [-1, 2, 0]);

        let summary: ProgressSummary =
            serde_json::from_value(json!({ "items": [], "streak": -3 })).unwrap();
        assert_eq!(summary.streak, -3);
        let summary: ProgressSummary =
            serde_json::from_value(json!({ "items": [], "streak": 4.9 })).unwrap();
        assert_eq!(summary.streak, 4);
    }

    #[test]
    fn ask_request_sends_null_image() {
        let id = RecordId::Number(1);
        let body = serde_json::to_value(AskRequest {
            habit_id: &id,
            question: "How do I start?",
            image_base64: None,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "habit_id": 1, "question": "How do I start?", "image_base64": null })
        );
    }

    #[test]
    fn blank_note_is_hidden() {
        let entry = ProgressEntry { note: Some("  ".into()), ..Default::default() };
        assert_eq!(entry.visible_note(), None);
        let entry = ProgressEntry { note: Some("10 pages".into()), ..Default::default() };
        assert_eq!(entry.visible_note(), Some("10 pages"));
    }

    #[test]
    fn chat_role_is_lowercase() {
        assert_eq!(serde_json::to_value(ChatRole::Assistant).unwrap(), json!("assistant"));
    }
}
