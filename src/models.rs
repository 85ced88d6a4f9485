use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slider position the logger starts from.
pub const DEFAULT_INTENSITY: u8 = 5;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Angry,
    Calm,
    Excited,
    #[default]
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Angry,
        Mood::Calm,
        Mood::Excited,
        Mood::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Calm => "calm",
            Mood::Excited => "excited",
            Mood::Neutral => "neutral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Angry => "Angry",
            Mood::Calm => "Calm",
            Mood::Excited => "Excited",
            Mood::Neutral => "Neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Anxious => "😰",
            Mood::Angry => "😠",
            Mood::Calm => "😌",
            Mood::Excited => "🤩",
            Mood::Neutral => "😐",
        }
    }

    /// Hex colour used for charts and badges.
    pub fn color(self) -> &'static str {
        match self {
            Mood::Happy => "#10B981",
            Mood::Sad => "#3B82F6",
            Mood::Anxious => "#F59E0B",
            Mood::Angry => "#EF4444",
            Mood::Calm => "#8B5CF6",
            Mood::Excited => "#F97316",
            Mood::Neutral => "#6B7280",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood '{0}'")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim().to_ascii_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == key)
            .ok_or_else(|| UnknownMood(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub mood: Mood,
    pub intensity: u8,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyCategory {
    Breathing,
    Mindfulness,
    Cbt,
    Movement,
    Creative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopingStrategy {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: StrategyCategory,
    pub duration: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize)]
pub struct MusicRecommendation {
    pub title: &'static str,
    pub artist: &'static str,
    pub genre: &'static str,
    pub mood: Mood,
    pub energy: u8,
    pub description: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct LogMoodRequest {
    #[serde(default)]
    pub mood: String,
    pub intensity: Option<i64>,
    #[serde(default)]
    pub emotions: Vec<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl LogMoodRequest {
    pub fn into_entry(self, id: String, now: DateTime<Utc>) -> Result<MoodEntry, ValidationError> {
        if self.mood.trim().is_empty() {
            return Err(ValidationError::MissingMood);
        }
        let mood = self
            .mood
            .parse::<Mood>()
            .map_err(|err| ValidationError::UnknownMood(err.0))?;
        let intensity = match self.intensity.unwrap_or(i64::from(DEFAULT_INTENSITY)) {
            value @ 1..=10 => value as u8,
            value => return Err(ValidationError::IntensityOutOfRange(value)),
        };

        let activities = normalize_tags(&self.activities);
        Ok(MoodEntry {
            id,
            date: now,
            mood,
            intensity,
            emotions: normalize_tags(&self.emotions),
            notes: self
                .notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
            activities: (!activities.is_empty()).then_some(activities),
        })
    }
}

/// Body of the dashboard's urlencoded log form; tags are comma separated.
#[derive(Debug, Deserialize)]
pub struct LogMoodForm {
    #[serde(default)]
    pub mood: String,
    pub intensity: Option<i64>,
    #[serde(default)]
    pub emotions: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub activities: String,
}

impl From<LogMoodForm> for LogMoodRequest {
    fn from(form: LogMoodForm) -> Self {
        Self {
            mood: form.mood,
            intensity: form.intensity,
            emotions: split_tags(&form.emotions),
            notes: Some(form.notes),
            activities: split_tags(&form.activities),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JournalDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub mood: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct JournalQuery {
    pub search: Option<String>,
    pub mood: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<StrategyCategory>,
}

#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    pub mood: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaybackNotice {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub mood: Mood,
    pub intensity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodInsights {
    pub average_mood: f64,
    pub most_common_mood: Mood,
    pub streak: u32,
    pub improvement_trend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyMood {
    pub week_start: String,
    pub week_end: String,
    pub entries: usize,
    pub average_intensity: f64,
    pub dominant_mood: Mood,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    pub percentage: f64,
}

/// Trims, drops empties and removes repeats while keeping first occurrence.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !out.iter().any(|existing| existing == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

fn split_tags(raw: &str) -> Vec<String> {
    normalize_tags(raw.split(','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_parses_case_insensitively() {
        assert_eq!("Happy".parse::<Mood>(), Ok(Mood::Happy));
        assert_eq!(" calm ".parse::<Mood>(), Ok(Mood::Calm));
        assert!("tired".parse::<Mood>().is_err());
    }

    #[test]
    fn mood_entry_omits_absent_optionals() {
        let entry = MoodEntry {
            id: "1".into(),
            date: "2026-01-05T10:00:00Z".parse().unwrap(),
            mood: Mood::Sad,
            intensity: 3,
            emotions: vec!["tired".into()],
            notes: None,
            activities: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["mood"], "sad");
        assert!(json.get("notes").is_none());
        assert!(json.get("activities").is_none());
    }

    #[test]
    fn mood_entry_reads_browser_timestamps() {
        let raw = r#"{"id":"1700000000000","date":"2026-01-05T10:00:00.000Z","mood":"calm","intensity":6,"emotions":[]}"#;
        let entry: MoodEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.mood, Mood::Calm);
        assert_eq!(entry.intensity, 6);
        assert_eq!(entry.notes, None);
    }

    fn request(mood: &str, intensity: Option<i64>) -> LogMoodRequest {
        LogMoodRequest {
            mood: mood.to_string(),
            intensity,
            emotions: vec!["hopeful".into(), "hopeful".into()],
            notes: Some("   ".into()),
            activities: Vec::new(),
        }
    }

    #[test]
    fn request_builds_entry_with_cleaned_fields() {
        let now: DateTime<Utc> = "2026-01-05T10:00:00Z".parse().unwrap();
        let entry = request("Excited", Some(9)).into_entry("x".into(), now).unwrap();
        assert_eq!(entry.mood, Mood::Excited);
        assert_eq!(entry.intensity, 9);
        assert_eq!(entry.emotions, vec!["hopeful"]);
        assert_eq!(entry.notes, None);
        assert_eq!(entry.activities, None);
        assert_eq!(entry.date, now);
    }

    #[test]
    fn request_validation() {
        let now = Utc::now();
        assert_eq!(
            request("", Some(5)).into_entry("x".into(), now).unwrap_err(),
            ValidationError::MissingMood
        );
        assert_eq!(
            request("grumpy", Some(5)).into_entry("x".into(), now).unwrap_err(),
            ValidationError::UnknownMood("grumpy".into())
        );
        assert_eq!(
            request("sad", Some(0)).into_entry("x".into(), now).unwrap_err(),
            ValidationError::IntensityOutOfRange(0)
        );
        assert_eq!(
            request("sad", Some(11)).into_entry("x".into(), now).unwrap_err(),
            ValidationError::IntensityOutOfRange(11)
        );
        for raw in [r#"{"mood":"sad","intensity":300}"#, r#"{"mood":"sad","intensity":-1}"#] {
            let parsed: LogMoodRequest = serde_json::from_str(raw).unwrap();
            let expected = parsed.intensity.unwrap();
            assert_eq!(
                parsed.into_entry("x".into(), now).unwrap_err(),
                ValidationError::IntensityOutOfRange(expected)
            );
        }
        assert_eq!(request("sad", None).into_entry("x".into(), now).unwrap().intensity, 5);
    }

    #[test]
    fn form_tags_are_split_and_deduplicated() {
        let form = LogMoodForm {
            mood: "happy".into(),
            intensity: Some(7),
            emotions: "proud, content,,proud".into(),
            notes: String::new(),
            activities: " work ".into(),
        };
        let request = LogMoodRequest::from(form);
        assert_eq!(request.emotions, vec!["proud", "content"]);
        assert_eq!(request.activities, vec!["work"]);
    }
}
