//! Daily study session tracking.
//!
//! One `DailyProgress` record is current at any time, keyed by the
//! local calendar day. Loading a record from another day resets it to
//! an empty Active session; the configured target survives the reset.

use chrono::NaiveDate;
use rand::seq::IndexedRandom;

use crate::domain::{DailyProgress, Element, StudyStats};
use crate::store::AppData;

/// Bring a stored session up to date for `today`. A record from a
/// previous day is discarded and replaced with a fresh Active one;
/// today's record is kept as-is apart from the (possibly changed)
/// configured target.
pub fn roll_over(stored: Option<DailyProgress>, today: NaiveDate, target: u32) -> DailyProgress {
  match stored {
    Some(mut session) if session.date == today => {
      // Target changes apply mid-session; overshoot is tolerated
      session.target = target;
      session
    }
    _ => DailyProgress::new(today, target),
  }
}

/// Record that an element was shown. Idempotent: marking an element a
/// second time changes neither the set nor the count. Returns true when
/// the element was new for today.
pub fn mark_shown(session: &mut DailyProgress, stats: &mut StudyStats, element: u32) -> bool {
  let newly_shown = session.shown_elements.insert(element);
  if newly_shown {
    stats.studied_elements.insert(element);
    // Count the day once, at the transition into Complete
    if session.completed_count() == session.target && session.target > 0 {
      stats.days_completed += 1;
    }
  }
  newly_shown
}

/// The blob's current session, rolled over to `today` with the
/// configured target applied. Callers mutate through the returned
/// reference and persist the whole blob afterwards.
pub fn current(data: &mut AppData, today: NaiveDate) -> &mut DailyProgress {
  let target = data.settings.daily_flashcard_target;
  let rolled = roll_over(data.progress.take(), today, target);
  data.progress.insert(rolled)
}

/// Roll the blob's session over and mark an element shown in one step.
/// Returns true when the element was new for today.
pub fn mark_element_shown(data: &mut AppData, today: NaiveDate, element: u32) -> bool {
  let target = data.settings.daily_flashcard_target;
  let mut daily = roll_over(data.progress.take(), today, target);
  let newly_shown = mark_shown(&mut daily, &mut data.stats, element);
  data.progress = Some(daily);
  newly_shown
}

/// Uniformly pick an element that has not been shown today. `None`
/// means the pool is exhausted; callers treat that as a completion
/// signal distinct from the numeric target being met.
pub fn random_unshown<'a>(
  session: &DailyProgress,
  catalogue: &'a [Element],
) -> Option<&'a Element> {
  let unshown: Vec<&Element> = catalogue
    .iter()
    .filter(|e| !session.shown_elements.contains(&e.number))
    .collect();

  unshown.choose(&mut rand::rng()).copied()
}
