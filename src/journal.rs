use crate::errors::ValidationError;
use crate::models::{JournalDraft, JournalEntry, Mood, normalize_tags};
use chrono::{DateTime, Utc};

/// Builds a journal entry from a submitted draft. Without an explicit mood
/// the entry takes `todays_mood`, then neutral.
pub fn entry_from_draft(
    draft: JournalDraft,
    id: String,
    now: DateTime<Utc>,
    todays_mood: Option<Mood>,
) -> Result<JournalEntry, ValidationError> {
    let title = draft.title.trim();
    let content = draft.content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(ValidationError::EmptyJournalFields);
    }

    let mood = match draft.mood.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key
            .parse::<Mood>()
            .map_err(|err| ValidationError::UnknownMood(err.0))?,
        _ => todays_mood.unwrap_or_default(),
    };

    Ok(JournalEntry {
        id,
        date: now,
        title: title.to_string(),
        content: content.to_string(),
        mood,
        tags: normalize_tags(&draft.tags),
    })
}

/// Case-insensitive match on title, content or any tag, optionally limited
/// to one mood. Newest entries come first.
pub fn search(entries: Vec<JournalEntry>, term: &str, mood: Option<Mood>) -> Vec<JournalEntry> {
    let needle = term.trim().to_lowercase();
    let mut matches: Vec<JournalEntry> = entries
        .into_iter()
        .filter(|entry| mood.is_none_or(|wanted| entry.mood == wanted))
        .filter(|entry| {
            needle.is_empty()
                || entry.title.to_lowercase().contains(&needle)
                || entry.content.to_lowercase().contains(&needle)
                || entry
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect();
    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 7, 21, 0, 0).unwrap()
    }

    fn draft(title: &str, content: &str, mood: Option<&str>) -> JournalDraft {
        JournalDraft {
            title: title.to_string(),
            content: content.to_string(),
            mood: mood.map(str::to_string),
            tags: vec!["growth".into(), " growth ".into(), "goals".into()],
        }
    }

    fn entry(id: &str, title: &str, mood: Mood, hours_ago: i64, tags: &[&str]) -> JournalEntry {
        JournalEntry {
            id: id.to_string(),
            date: now() - Duration::hours(hours_ago),
            title: title.to_string(),
            content: format!("{title} body"),
            mood,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[test]
    fn draft_is_trimmed_and_tags_deduplicated() {
        let built = entry_from_draft(draft("  Day one ", " Felt good. ", Some("Happy")), "a".into(), now(), None)
            .unwrap();
        assert_eq!(built.title, "Day one");
        assert_eq!(built.content, "Felt good.");
        assert_eq!(built.mood, Mood::Happy);
        assert_eq!(built.tags, vec!["growth", "goals"]);
        assert_eq!(built.date, now());
    }

    #[test]
    fn draft_requires_title_and_content() {
        let err = entry_from_draft(draft("   ", "text", None), "a".into(), now(), None).unwrap_err();
        assert_eq!(err, ValidationError::EmptyJournalFields);
        let err = entry_from_draft(draft("title", "", None), "a".into(), now(), None).unwrap_err();
        assert_eq!(err, ValidationError::EmptyJournalFields);
    }

    #[test]
    fn draft_mood_defaults_to_today_then_neutral() {
        let from_today = entry_from_draft(draft("t", "c", None), "a".into(), now(), Some(Mood::Calm)).unwrap();
        assert_eq!(from_today.mood, Mood::Calm);

        let blank = entry_from_draft(draft("t", "c", Some(" ")), "b".into(), now(), None).unwrap();
        assert_eq!(blank.mood, Mood::Neutral);
    }

    #[test]
    fn draft_rejects_unknown_mood() {
        let err = entry_from_draft(draft("t", "c", Some("meh")), "a".into(), now(), None).unwrap_err();
        assert_eq!(err, ValidationError::UnknownMood("meh".into()));
    }

    #[test]
    fn search_matches_title_content_and_tags() {
        let entries = vec![
            entry("1", "Morning run", Mood::Happy, 30, &["health"]),
            entry("2", "Work stress", Mood::Anxious, 5, &["work"]),
            entry("3", "Dinner", Mood::Calm, 1, &["Relationships"]),
        ];

        let by_tag: Vec<String> = search(entries.clone(), "relation", None)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(by_tag, vec!["3"]);

        let by_content: Vec<String> = search(entries.clone(), "RUN BODY", None)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(by_content, vec!["1"]);

        let all: Vec<String> = search(entries, "", None).into_iter().map(|e| e.id).collect();
        assert_eq!(all, vec!["3", "2", "1"]);
    }

    #[test]
    fn search_filters_by_mood() {
        let entries = vec![
            entry("1", "A", Mood::Happy, 3, &[]),
            entry("2", "B", Mood::Sad, 2, &[]),
            entry("3", "C", Mood::Happy, 1, &[]),
        ];
        let happy: Vec<String> = search(entries, "", Some(Mood::Happy))
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(happy, vec!["3", "1"]);
    }
}
