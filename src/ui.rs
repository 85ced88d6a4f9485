use crate::catalog::mood_color;
use crate::models::{DEFAULT_INTENSITY, Mood, MoodEntry, MoodInsights};

pub fn render_index(insights: &MoodInsights, today: Option<&MoodEntry>, total_entries: usize) -> String {
    let greeting = match today {
        Some(entry) => format!("You're feeling {} today {}", entry.mood, entry.mood.emoji()),
        None => "How are you feeling today? Let's log your mood!".to_string(),
    };
    let trend = if insights.improvement_trend {
        "Improving"
    } else {
        "Stable"
    };

    INDEX_HTML
        .replace("{{GREETING}}", &greeting)
        .replace("{{TOTAL}}", &total_entries.to_string())
        .replace("{{AVERAGE}}", &format!("{:.1}", insights.average_mood))
        .replace("{{STREAK}}", &insights.streak.to_string())
        .replace("{{TREND}}", trend)
        .replace(
            "{{COMMON}}",
            &format!(
                "{} {}",
                insights.most_common_mood.emoji(),
                insights.most_common_mood.label()
            ),
        )
        .replace("{{COMMON_COLOR}}", insights.most_common_mood.color())
        .replace("{{MOOD_COLORS}}", &mood_palette())
        .replace("{{NEUTRAL_COLOR}}", mood_color(""))
        .replace("{{MOOD_OPTIONS}}", &mood_options())
        .replace("{{INTENSITY}}", &DEFAULT_INTENSITY.to_string())
}

/// JS object literal mapping each mood key to its chart colour.
fn mood_palette() -> String {
    let pairs = Mood::ALL
        .iter()
        .map(|mood| format!("{}: '{}'", mood.as_str(), mood.color()))
        .collect::<Vec<_>>();
    format!("{{ {} }}", pairs.join(", "))
}

fn mood_options() -> String {
    Mood::ALL
        .iter()
        .map(|mood| {
            format!(
                r#"<option value="{}">{} {}</option>"#,
                mood.as_str(),
                mood.emoji(),
                mood.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Tracker</title>
  <style>
    :root {
      --bg-1: #eef2fb;
      --bg-2: #d9ccf5;
      --ink: #1f2433;
      --accent: #6d5dfc;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f3ecff 60%, #f7f7fb 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c70;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    form.log {
      display: grid;
      gap: 14px;
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    form.log label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: #4d4a5c;
    }

    select, input, textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(109, 93, 252, 0.3);
    }

    #chart {
      width: 100%;
      height: 240px;
      display: block;
      background: white;
      border-radius: 20px;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Tracker</h1>
      <p class="subtitle">{{GREETING}}</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Entries</span>
        <span class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Average intensity</span>
        <span class="value">{{AVERAGE}}</span>
      </div>
      <div class="stat">
        <span class="label">Day streak</span>
        <span class="value">{{STREAK}}</span>
      </div>
      <div class="stat">
        <span class="label">Trend</span>
        <span class="value">{{TREND}}</span>
      </div>
      <div class="stat">
        <span class="label">Most common</span>
        <span class="value" style="color: {{COMMON_COLOR}}">{{COMMON}}</span>
      </div>
    </section>

    <form class="log" method="post" action="/mood">
      <label>Mood
        <select name="mood" required>
          <option value="">Select a mood</option>
          {{MOOD_OPTIONS}}
        </select>
      </label>
      <label>Intensity (1-10)
        <input type="range" name="intensity" min="1" max="10" value="{{INTENSITY}}" />
      </label>
      <label>Emotions (comma separated)
        <input type="text" name="emotions" placeholder="grateful, tired" />
      </label>
      <label>Activities (comma separated)
        <input type="text" name="activities" placeholder="work, exercise" />
      </label>
      <label>Notes
        <textarea name="notes" rows="3"></textarea>
      </label>
      <button type="submit">Log mood</button>
    </form>

    <section>
      <h2>Weekly intensity</h2>
      <svg id="chart" viewBox="0 0 600 240" aria-label="Weekly intensity" role="img"></svg>
    </section>
  </main>

  <script>
    const chartEl = document.getElementById('chart');
    const moodColors = {{MOOD_COLORS}};
    const colorFor = (mood) => moodColors[mood] || '{{NEUTRAL_COLOR}}';

    const renderWeeks = (weeks) => {
      if (!weeks.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }
      const width = 600;
      const height = 240;
      const padding = 40;
      const step = weeks.length > 1 ? (width - padding * 2) / (weeks.length - 1) : 0;
      const x = (index) => padding + index * step;
      const y = (value) => height - padding - (value / 10) * (height - padding * 2);
      const path = weeks
        .map((week, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(week.average_intensity).toFixed(2)}`)
        .join(' ');
      const labels = weeks
        .map((week, index) => `<text class="chart-label" x="${x(index)}" y="${height - padding + 18}" text-anchor="middle">${week.week_start.slice(5)}</text>`)
        .join('');
      const dots = weeks
        .map((week, index) => `<circle cx="${x(index).toFixed(2)}" cy="${y(week.average_intensity).toFixed(2)}" r="6" fill="${colorFor(week.dominant_mood)}"><title>${week.dominant_mood}</title></circle>`)
        .join('');
      chartEl.innerHTML = `<path class="chart-line" d="${path}" />${dots}${labels}`;
    };

    fetch('/api/trends/weekly?days=30')
      .then((res) => (res.ok ? res.json() : []))
      .then(renderWeeks)
      .catch(() => renderWeeks([]));
  </script>
</body>
</html>
"#;
