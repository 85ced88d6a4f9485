//! Compiled-in coping strategies and music recommendations.

use crate::models::{CopingStrategy, Difficulty, Mood, MusicRecommendation, StrategyCategory};

const RECOMMENDED_STRATEGY_LIMIT: usize = 3;

static COPING_STRATEGIES: [CopingStrategy; 8] = [
    CopingStrategy {
        id: "1",
        title: "4-7-8 Breathing",
        description: "Inhale for 4 counts, hold for 7, exhale for 8. This technique activates your parasympathetic nervous system.",
        category: StrategyCategory::Breathing,
        duration: "3-5 minutes",
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "2",
        title: "Body Scan Meditation",
        description: "Focus on each part of your body from head to toe, noticing sensations without judgment.",
        category: StrategyCategory::Mindfulness,
        duration: "10-15 minutes",
        difficulty: Difficulty::Medium,
    },
    CopingStrategy {
        id: "3",
        title: "Thought Record",
        description: "Write down negative thoughts, identify cognitive distortions, and develop balanced alternatives.",
        category: StrategyCategory::Cbt,
        duration: "15-20 minutes",
        difficulty: Difficulty::Medium,
    },
    CopingStrategy {
        id: "4",
        title: "5-4-3-2-1 Grounding",
        description: "Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
        category: StrategyCategory::Mindfulness,
        duration: "5 minutes",
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "5",
        title: "Progressive Muscle Relaxation",
        description: "Tense and release each muscle group, starting from your toes up to your head.",
        category: StrategyCategory::Movement,
        duration: "15-20 minutes",
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "6",
        title: "Gratitude Journaling",
        description: "Write down three things you're grateful for and why they matter to you.",
        category: StrategyCategory::Creative,
        duration: "10 minutes",
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "7",
        title: "Mindful Walking",
        description: "Walk slowly, focusing on each step, your breathing, and your surroundings.",
        category: StrategyCategory::Movement,
        duration: "10-30 minutes",
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "8",
        title: "Emotional Labeling",
        description: "Identify and name your emotions specifically rather than using general terms.",
        category: StrategyCategory::Mindfulness,
        duration: "5 minutes",
        difficulty: Difficulty::Easy,
    },
];

const fn song(
    title: &'static str,
    artist: &'static str,
    genre: &'static str,
    mood: Mood,
    energy: u8,
    description: &'static str,
) -> MusicRecommendation {
    MusicRecommendation {
        title,
        artist,
        genre,
        mood,
        energy,
        description,
    }
}

static HAPPY_SONGS: [MusicRecommendation; 2] = [
    song("Good as Hell", "Lizzo", "Pop", Mood::Happy, 8, "Uplifting anthem for self-love and confidence"),
    song("Walking on Sunshine", "Katrina & The Waves", "Pop Rock", Mood::Happy, 9, "Classic feel-good track to boost your mood"),
];

static SAD_SONGS: [MusicRecommendation; 2] = [
    song("The Night We Met", "Lord Huron", "Indie Folk", Mood::Sad, 3, "Gentle melody for processing difficult emotions"),
    song("Mad World", "Gary Jules", "Alternative", Mood::Sad, 2, "Reflective song for contemplative moments"),
];

static ANXIOUS_SONGS: [MusicRecommendation; 2] = [
    song("Weightless", "Marconi Union", "Ambient", Mood::Anxious, 1, "Scientifically designed to reduce anxiety by 65%"),
    song("Claire de Lune", "Claude Debussy", "Classical", Mood::Anxious, 2, "Soothing classical piece for calming nerves"),
];

static ANGRY_SONGS: [MusicRecommendation; 2] = [
    song("Lose Yourself", "Eminem", "Hip Hop", Mood::Angry, 7, "Channel anger into motivation and determination"),
    song("Break Stuff", "Limp Bizkit", "Nu Metal", Mood::Angry, 9, "High-energy release for intense emotions"),
];

static CALM_SONGS: [MusicRecommendation; 2] = [
    song("River", "Leon Bridges", "Soul", Mood::Calm, 4, "Peaceful melody for relaxation and reflection"),
    song("Spiegel im Spiegel", "Arvo Pärt", "Minimalist Classical", Mood::Calm, 2, "Minimalist composition for deep tranquility"),
];

static EXCITED_SONGS: [MusicRecommendation; 2] = [
    song("Can't Stop the Feeling!", "Justin Timberlake", "Pop", Mood::Excited, 9, "Infectious energy to amplify positive emotions"),
    song("Pump It", "The Black Eyed Peas", "Hip Hop", Mood::Excited, 8, "High-energy track to maintain excitement"),
];

static NEUTRAL_SONGS: [MusicRecommendation; 2] = [
    song("Breathe Me", "Sia", "Alternative", Mood::Neutral, 4, "Introspective song for self-reflection"),
    song("Mad World", "Tears for Fears", "New Wave", Mood::Neutral, 5, "Balanced track for contemplative moments"),
];

pub fn coping_strategies() -> &'static [CopingStrategy] {
    &COPING_STRATEGIES
}

/// All strategies when `category` is `None`.
pub fn strategies_in(category: Option<StrategyCategory>) -> Vec<&'static CopingStrategy> {
    COPING_STRATEGIES
        .iter()
        .filter(|strategy| category.is_none_or(|wanted| strategy.category == wanted))
        .collect()
}

pub fn strategy_by_id(id: &str) -> Option<&'static CopingStrategy> {
    COPING_STRATEGIES.iter().find(|strategy| strategy.id == id)
}

fn preferred_categories(mood: Option<Mood>) -> &'static [StrategyCategory] {
    use StrategyCategory::*;
    match mood {
        Some(Mood::Anxious) => &[Breathing, Mindfulness],
        Some(Mood::Sad) => &[Creative, Movement],
        Some(Mood::Angry) => &[Breathing, Movement],
        Some(Mood::Happy) => &[Creative, Mindfulness],
        Some(Mood::Excited) => &[Mindfulness, Movement],
        Some(Mood::Calm) => &[Creative, Mindfulness],
        Some(Mood::Neutral) => &[Breathing, Cbt],
        None => &[Breathing],
    }
}

/// Up to three strategies suited to `mood`, in catalog order. Unknown moods
/// fall back to breathing exercises.
pub fn recommended_strategies(mood: &str) -> Vec<&'static CopingStrategy> {
    let categories = preferred_categories(mood.parse().ok());
    COPING_STRATEGIES
        .iter()
        .filter(|strategy| categories.contains(&strategy.category))
        .take(RECOMMENDED_STRATEGY_LIMIT)
        .collect()
}

pub fn songs_for(mood: Mood) -> &'static [MusicRecommendation] {
    match mood {
        Mood::Happy => &HAPPY_SONGS,
        Mood::Sad => &SAD_SONGS,
        Mood::Anxious => &ANXIOUS_SONGS,
        Mood::Angry => &ANGRY_SONGS,
        Mood::Calm => &CALM_SONGS,
        Mood::Excited => &EXCITED_SONGS,
        Mood::Neutral => &NEUTRAL_SONGS,
    }
}

/// Lookup by raw mood key; an unrecognized key yields no songs.
pub fn music_for(mood_key: &str) -> &'static [MusicRecommendation] {
    match mood_key.parse::<Mood>() {
        Ok(mood) => songs_for(mood),
        Err(_) => &[],
    }
}

/// Playback is not wired to any streaming service.
pub fn play(title: &str, artist: &str) -> String {
    format!("Playing: {title} by {artist} (streaming integration is not available)")
}

/// Emoji for a raw mood key such as a query parameter; unknown keys render as
/// neutral instead of failing.
pub fn mood_emoji(mood_key: &str) -> &'static str {
    mood_key.parse::<Mood>().unwrap_or_default().emoji()
}

/// Colour for a raw mood key, with the same neutral fallback as [`mood_emoji`].
pub fn mood_color(mood_key: &str) -> &'static str {
    mood_key.parse::<Mood>().unwrap_or_default().color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_narrows_catalog() {
        assert_eq!(strategies_in(None).len(), coping_strategies().len());

        let mindfulness = strategies_in(Some(StrategyCategory::Mindfulness));
        let ids: Vec<&str> = mindfulness.iter().map(|strategy| strategy.id).collect();
        assert_eq!(ids, vec!["2", "4", "8"]);
    }

    #[test]
    fn strategy_lookup_by_id() {
        assert_eq!(strategy_by_id("3").map(|s| s.title), Some("Thought Record"));
        assert!(strategy_by_id("99").is_none());
    }

    #[test]
    fn recommendations_follow_mood_categories() {
        let ids: Vec<&str> = recommended_strategies("anxious")
            .iter()
            .map(|strategy| strategy.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "4"]);

        let sad: Vec<&str> = recommended_strategies("sad").iter().map(|s| s.id).collect();
        assert_eq!(sad, vec!["5", "6", "7"]);
    }

    #[test]
    fn unknown_mood_recommends_breathing() {
        let strategies = recommended_strategies("sleepy");
        assert_eq!(strategies.len(), 1);
        assert_eq!(strategies[0].category, StrategyCategory::Breathing);
    }

    #[test]
    fn music_lookup_by_mood_key() {
        let songs = music_for("calm");
        assert_eq!(songs.len(), 2);
        assert!(songs.iter().all(|song| song.mood == Mood::Calm));
        assert_eq!(music_for("EXCITED")[0].artist, "Justin Timberlake");
    }

    #[test]
    fn unknown_mood_has_no_music() {
        assert!(music_for("bored").is_empty());
        assert!(music_for("").is_empty());
    }

    #[test]
    fn every_mood_has_songs_within_energy_range() {
        for mood in Mood::ALL {
            let songs = songs_for(mood);
            assert!(!songs.is_empty());
            assert!(songs.iter().all(|song| (1..=10).contains(&song.energy)));
        }
    }

    #[test]
    fn display_lookups_degrade_to_neutral() {
        assert_eq!(mood_emoji("happy"), Mood::Happy.emoji());
        assert_eq!(mood_emoji("confused"), Mood::Neutral.emoji());
        assert_eq!(mood_color("confused"), Mood::Neutral.color());
    }

    #[test]
    fn playback_is_a_notice_only() {
        assert!(play("River", "Leon Bridges").starts_with("Playing: River by Leon Bridges"));
    }
}
