use async_trait::async_trait;
use time::Date;
use tracing::debug;

use crate::model::{Meal, MealTime};
use crate::plan::assign::WeeklyAssignment;

/// Per-date, per-slot meal log kept by the app shell (device storage on the
/// phone). The core only writes confirmed plans into it.
#[async_trait]
pub trait MealLogStore: Send + Sync {
    async fn set_meal_for_date(&self, date: Date, slot: MealTime, meal: &Meal)
        -> anyhow::Result<()>;
    async fn clear_meal_for_date(&self, date: Date, slot: MealTime) -> anyhow::Result<()>;
}

/// Persists every filled cell of a confirmed draft, mapping day 0 to
/// `monday`. Returns the number of cells written. Empty cells are simply
/// skipped; the user can still fill them by hand later.
pub async fn confirm_week(
    store: &dyn MealLogStore,
    monday: Date,
    draft: &WeeklyAssignment,
) -> anyhow::Result<usize> {
    let mut written = 0usize;
    for (day, slot, meal) in draft.filled() {
        let date = monday + time::Duration::days(day as i64);
        store.set_meal_for_date(date, slot, meal).await?;
        written += 1;
    }
    debug!(plan = %draft.id(), written, "weekly plan confirmed");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CalorieBreakdown;
    use crate::plan::assign::fill;
    use std::sync::Mutex;
    use time::macros::date;

    #[derive(Default)]
    struct FakeLog {
        entries: Mutex<Vec<(Date, MealTime, String)>>,
    }

    #[async_trait]
    impl MealLogStore for FakeLog {
        async fn set_meal_for_date(
            &self,
            date: Date,
            slot: MealTime,
            meal: &Meal,
        ) -> anyhow::Result<()> {
            self.entries
                .lock()
                .expect("lock")
                .push((date, slot, meal.id.clone()));
            Ok(())
        }

        async fn clear_meal_for_date(&self, date: Date, slot: MealTime) -> anyhow::Result<()> {
            self.entries
                .lock()
                .expect("lock")
                .retain(|(d, s, _)| !(*d == date && *s == slot));
            Ok(())
        }
    }

    fn breakfast_meal(id: &str) -> Meal {
        Meal {
            id: id.into(),
            name: format!("MEAL {id}"),
            description: String::new(),
            tags: vec![],
            ingredients: vec![],
            calories: Some(500),
            meal_times: vec![MealTime::Breakfast],
        }
    }

    #[tokio::test]
    async fn writes_exactly_the_filled_cells() {
        let mut draft = WeeklyAssignment::new();
        draft.set_manual(0, MealTime::Breakfast, breakfast_meal("m0"));
        draft.set_manual(3, MealTime::Breakfast, breakfast_meal("m3"));

        let log = FakeLog::default();
        let monday = date!(2025 - 01 - 06);
        let written = confirm_week(&log, monday, &draft).await.expect("confirm");
        assert_eq!(written, 2);

        {
            let entries = log.entries.lock().expect("lock");
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].0, monday);
            assert_eq!(entries[1].0, date!(2025 - 01 - 09));
        }

        // the user un-picks one day again
        log.clear_meal_for_date(monday, MealTime::Breakfast)
            .await
            .expect("clear");
        assert_eq!(log.entries.lock().expect("lock").len(), 1);
    }

    #[tokio::test]
    async fn confirms_a_fully_assigned_week_in_date_order() {
        let breakdown = CalorieBreakdown {
            target: 2400,
            breakfast: 600,
            lunch: 1080,
            dinner: 720,
        };
        let catalog = crate::catalog::sample_meals();
        let mut draft = WeeklyAssignment::new();
        fill(&breakdown, &catalog, &mut draft);

        let log = FakeLog::default();
        let monday = date!(2025 - 01 - 06);
        let written = confirm_week(&log, monday, &draft).await.expect("confirm");
        assert_eq!(written, draft.filled().count());

        let entries = log.entries.lock().expect("lock");
        let dates: Vec<Date> = entries.iter().map(|(d, _, _)| *d).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "cells must be written day by day");
    }
}
