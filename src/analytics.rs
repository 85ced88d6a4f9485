use crate::models::{Mood, MoodEntry, MoodInsights, MoodShare, TrendPoint, WeeklyMood};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Number of most recent entries the insight summary looks at.
pub const INSIGHT_WINDOW: usize = 7;
const NEUTRAL_AVERAGE: f64 = 5.0;

pub fn mood_trends(entries: &[MoodEntry], window_days: u32) -> Vec<TrendPoint> {
    mood_trends_at(entries, window_days, Utc::now())
}

/// Entries no older than `window_days` before `now`, oldest first.
pub fn mood_trends_at(entries: &[MoodEntry], window_days: u32, now: DateTime<Utc>) -> Vec<TrendPoint> {
    let cutoff = now
        .checked_sub_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let mut points: Vec<TrendPoint> = entries
        .iter()
        .filter(|entry| entry.date >= cutoff)
        .map(|entry| TrendPoint {
            date: entry.date,
            mood: entry.mood,
            intensity: entry.intensity,
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}

pub fn mood_insights(entries: &[MoodEntry]) -> MoodInsights {
    mood_insights_at(entries, &Local::now())
}

pub fn mood_insights_at<Tz: TimeZone>(entries: &[MoodEntry], now: &DateTime<Tz>) -> MoodInsights {
    let recent = &entries[entries.len().saturating_sub(INSIGHT_WINDOW)..];
    if recent.is_empty() {
        return MoodInsights {
            average_mood: NEUTRAL_AVERAGE,
            most_common_mood: Mood::Neutral,
            streak: 0,
            improvement_trend: false,
        };
    }

    let (first_half, second_half) = recent.split_at(recent.len().div_ceil(2));
    let improvement_trend = match (
        mean(first_half.iter().map(|entry| entry.intensity)),
        mean(second_half.iter().map(|entry| entry.intensity)),
    ) {
        (Some(before), Some(after)) => after > before,
        _ => false,
    };

    MoodInsights {
        average_mood: mean(recent.iter().map(|entry| entry.intensity)).unwrap_or(NEUTRAL_AVERAGE),
        most_common_mood: dominant_mood(recent.iter().map(|entry| entry.mood)).unwrap_or_default(),
        streak: streak_at(entries, now),
        improvement_trend,
    }
}

/// Consecutive calendar days ending today with at least one entry.
pub fn streak_at<Tz: TimeZone>(entries: &[MoodEntry], now: &DateTime<Tz>) -> u32 {
    let tz = now.timezone();
    let days: BTreeSet<NaiveDate> = entries
        .iter()
        .map(|entry| local_day(&entry.date, &tz))
        .collect();

    let mut day = now.date_naive();
    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Groups trend points into Sunday-aligned calendar weeks of `tz`.
pub fn weekly_moods<Tz: TimeZone>(trends: &[TrendPoint], tz: &Tz) -> Vec<WeeklyMood> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&TrendPoint>> = BTreeMap::new();
    for point in trends {
        let start = week_start(local_day(&point.date, tz));
        buckets.entry(start).or_default().push(point);
    }

    buckets
        .into_iter()
        .map(|(start, points)| WeeklyMood {
            week_start: date_key(start),
            week_end: date_key(start + Duration::days(6)),
            entries: points.len(),
            average_intensity: mean(points.iter().map(|point| point.intensity))
                .unwrap_or(NEUTRAL_AVERAGE),
            dominant_mood: dominant_mood(points.iter().map(|point| point.mood)).unwrap_or_default(),
        })
        .collect()
}

/// Share of each mood across all entries, most frequent first.
pub fn mood_distribution(entries: &[MoodEntry]) -> Vec<MoodShare> {
    let total = entries.len() as f64;
    let mut shares: Vec<MoodShare> = tally(entries.iter().map(|entry| entry.mood))
        .into_iter()
        .map(|(mood, count)| MoodShare {
            mood,
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

pub fn todays_entry(entries: &[MoodEntry]) -> Option<&MoodEntry> {
    todays_entry_at(entries, &Local::now())
}

pub fn todays_entry_at<'a, Tz: TimeZone>(
    entries: &'a [MoodEntry],
    now: &DateTime<Tz>,
) -> Option<&'a MoodEntry> {
    let tz = now.timezone();
    let today = now.date_naive();
    entries
        .iter()
        .find(|entry| local_day(&entry.date, &tz) == today)
}

fn mean(values: impl Iterator<Item = u8>) -> Option<f64> {
    let (sum, count) = values.fold((0u32, 0u32), |(sum, count), value| {
        (sum + u32::from(value), count + 1)
    });
    (count > 0).then(|| f64::from(sum) / f64::from(count))
}

/// Mode of the sequence; on equal counts the tied mood seen last (in first-seen
/// order) wins.
fn dominant_mood(moods: impl Iterator<Item = Mood>) -> Option<Mood> {
    let mut best: Option<(Mood, usize)> = None;
    for (mood, count) in tally(moods) {
        if best.is_none_or(|(_, best_count)| count >= best_count) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}

/// Counts per mood in first-seen order.
fn tally(moods: impl Iterator<Item = Mood>) -> Vec<(Mood, usize)> {
    let mut counts: Vec<(Mood, usize)> = Vec::new();
    for mood in moods {
        match counts.iter_mut().find(|(seen, _)| *seen == mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((mood, 1)),
        }
    }
    counts
}

fn local_day<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    date.with_timezone(tz).date_naive()
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
