//! Sample data for a freshly created store.
//!
//! Nothing here runs implicitly. The composition root calls
//! [`seed_sample_data`] once, and only when the backing file did not exist
//! before the store was opened.

use chrono::{Days, NaiveDate};

use crate::{
  model::{NewColor, NewDay, NewEntry, NewHabit, NewList},
  store::TrackerStore,
};

/// The default palette, in insertion order.
pub const PALETTE: [(&str, &str); 14] = [
  ("red", "#f5716e"),
  ("orange", "#fb933c"),
  ("yellow", "#fbbf23"),
  ("yellow2", "#facc16"),
  ("lime", "#a3e636"),
  ("green", "#4ade80"),
  ("green2", "#34d399"),
  ("teal", "#2dd4c0"),
  ("cyan", "#21d3cd"),
  ("blue", "#38bbfb"),
  ("blue2", "#61a5fa"),
  ("indigo", "#818cf8"),
  ("purple", "#a78bfa"),
  ("purple2", "#c085fd"),
];

const SHOPPING: [&str; 3] = ["🥛 Milk", "🍞 Bread", "🥐 ~Quaso~"];

const MOVIES: [&str; 7] = [
  "👽 Alien (1979)",
  "🔫 Aliens (1986)",
  "⚰️ Alien³ (1992)",
  "🧬 Alien: Resurrection (1997)",
  "🗿 Prometheus (2012)",
  "🤖 Alien: Covenant (2017)",
  "🕳️ Alien: Romulus (2025)",
];

/// Rows created by [`seed_sample_data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
  pub colors:  usize,
  pub lists:   usize,
  pub entries: usize,
  pub habits:  usize,
  pub days:    usize,
}

/// Insert the palette, two sample lists with entries and two sample habits
/// with days. Individual rows that fail to insert are skipped.
pub async fn seed_sample_data<S: TrackerStore>(store: &S) -> SeedSummary {
  let mut summary = SeedSummary::default();
  let mut blue = None;
  let mut green = None;

  for (name, value) in PALETTE {
    if let Some(color) = store.add_color(NewColor::new(name).with_value(value)).await {
      summary.colors += 1;
      match name {
        "blue" => blue = Some(color.color_id),
        "green" => green = Some(color.color_id),
        _ => {}
      }
    }
  }

  let blue = blue.unwrap_or(crate::model::DEFAULT_COLOR_ID);
  let green = green.unwrap_or(crate::model::DEFAULT_COLOR_ID);

  for (name, color, items) in [
    ("🧾 Shopping List", blue, &SHOPPING[..]),
    ("🍿 Movies", green, &MOVIES[..]),
  ] {
    let Some(list) = store.add_list(NewList::new(name).with_color(color)).await else {
      continue;
    };
    tracing::info!(list_id = list.list_id, name, "sample list created");
    summary.lists += 1;
    for item in items {
      if store.add_entry(NewEntry::new(list.list_id, *item)).await.is_some() {
        summary.entries += 1;
      }
    }
  }

  for (name, color, start, stride, count) in [
    ("Reinforcement Learning", green, (1999, 1, 3), 5, 24),
    ("Robotics", blue, (1999, 2, 1), 7, 18),
  ] {
    let Some(habit) = store.add_habit(NewHabit::new(name).with_color(color)).await else {
      continue;
    };
    tracing::info!(habit_id = habit.habit_id, name, "sample habit created");
    summary.habits += 1;
    for value in sample_dates(start, stride, count) {
      if store.add_day(NewDay::new(habit.habit_id, value)).await.is_some() {
        summary.days += 1;
      }
    }
  }

  tracing::info!(?summary, "seeded store with sample data");
  summary
}

/// `count` dates formatted `DD/MM/YYYY`, starting at `start` and `stride`
/// days apart.
fn sample_dates(start: (i32, u32, u32), stride: u64, count: u64) -> Vec<String> {
  let Some(first) = NaiveDate::from_ymd_opt(start.0, start.1, start.2) else {
    return Vec::new();
  };
  (0..count)
    .filter_map(|i| first.checked_add_days(Days::new(i * stride)))
    .map(|d| d.format("%d/%m/%Y").to_string())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sample_dates_are_day_first_and_strided() {
    let dates = sample_dates((1999, 1, 30), 2, 3);
    assert_eq!(dates, ["30/01/1999", "01/02/1999", "03/02/1999"]);
  }

  #[test]
  fn sample_dates_stay_within_1999() {
    for (start, stride, count) in [((1999, 1, 3), 5, 24), ((1999, 2, 1), 7, 18)] {
      let dates = sample_dates(start, stride, count);
      assert_eq!(dates.len() as u64, count);
      assert!(dates.iter().all(|d| d.ends_with("/1999")), "{dates:?}");
    }
  }

  #[test]
  fn invalid_start_yields_nothing() {
    assert!(sample_dates((1999, 2, 30), 1, 3).is_empty());
  }
}
