use std::collections::HashSet;

use uuid::Uuid;

use crate::model::{CalorieBreakdown, Meal, MealTime};

pub const DAYS_PER_WEEK: usize = 7;

/// A week's draft menu: 7 days by 3 slots, day 0 being Monday. Cells stay
/// empty until the assigner or the user fills them; the draft is only
/// persisted once the user confirms it.
///
/// Owned exclusively by the caller that drives a planning run; `fill`
/// takes `&mut`, so two concurrent runs over the same draft cannot exist.
#[derive(Debug, Clone)]
pub struct WeeklyAssignment {
    id: Uuid,
    cells: [[Option<Meal>; 3]; DAYS_PER_WEEK],
}

impl WeeklyAssignment {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            cells: std::array::from_fn(|_| [None, None, None]),
        }
    }

    /// Identifies one planning run, e.g. in the client's plan history.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn get(&self, day: usize, slot: MealTime) -> Option<&Meal> {
        self.cells[day][slot_index(slot)].as_ref()
    }

    /// Records a meal the user picked by hand. Manual cells are never
    /// overwritten by the automatic assigner.
    pub fn set_manual(&mut self, day: usize, slot: MealTime, meal: Meal) {
        self.cells[day][slot_index(slot)] = Some(meal);
    }

    pub fn clear(&mut self, day: usize, slot: MealTime) {
        self.cells[day][slot_index(slot)] = None;
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Filled cells in day-major, slot-minor order.
    pub fn filled(&self) -> impl Iterator<Item = (usize, MealTime, &Meal)> {
        self.cells.iter().enumerate().flat_map(|(day, slots)| {
            MealTime::ALL.into_iter().filter_map(move |slot| {
                slots[slot_index(slot)].as_ref().map(|m| (day, slot, m))
            })
        })
    }

    fn set(&mut self, day: usize, slot: MealTime, meal: Meal) {
        self.cells[day][slot_index(slot)] = Some(meal);
    }
}

impl Default for WeeklyAssignment {
    fn default() -> Self {
        Self::new()
    }
}

fn slot_index(slot: MealTime) -> usize {
    match slot {
        MealTime::Breakfast => 0,
        MealTime::Lunch => 1,
        MealTime::Dinner => 2,
    }
}

/// Builds a fresh draft and fills all 21 cells from the catalog.
pub fn assign(breakdown: &CalorieBreakdown, catalog: &[Meal]) -> WeeklyAssignment {
    let mut draft = WeeklyAssignment::new();
    fill(breakdown, catalog, &mut draft);
    draft
}

/// Fills every empty cell of `draft`, day-major then breakfast, lunch,
/// dinner. Per cell: candidates are catalog meals scheduled for the slot
/// with positive calories; meals already used in this run are skipped and
/// the remaining meal closest to the slot's quota wins, catalog order
/// breaking ties. Only when the distinct candidates are exhausted is reuse
/// allowed; a slot no meal matches at all stays empty.
pub fn fill(breakdown: &CalorieBreakdown, catalog: &[Meal], draft: &mut WeeklyAssignment) {
    let mut used: HashSet<String> = draft
        .filled()
        .map(|(_, _, meal)| meal.id.clone())
        .collect();

    for day in 0..DAYS_PER_WEEK {
        for slot in MealTime::ALL {
            if draft.get(day, slot).is_some() {
                continue; // the user's manual choice wins
            }
            let candidates: Vec<&Meal> = catalog
                .iter()
                .filter(|m| m.applies_to(slot) && m.calories.is_some_and(|c| c > 0))
                .collect();
            if candidates.is_empty() {
                tracing::debug!(day, slot = slot.as_str(), "no catalog meal fits this slot");
                continue;
            }
            let fresh: Vec<&Meal> = candidates
                .iter()
                .copied()
                .filter(|m| !used.contains(&m.id))
                .collect();
            let pool = if fresh.is_empty() { &candidates } else { &fresh };
            let quota = breakdown.quota(slot);
            let pick = closest_to_quota(pool, quota);
            used.insert(pick.id.clone());
            draft.set(day, slot, pick.clone());
        }
    }
}

/// First meal with the smallest |calories - quota|; iteration order keeps
/// catalog-order tie-breaking.
fn closest_to_quota<'a>(pool: &[&'a Meal], quota: u32) -> &'a Meal {
    let mut best = pool[0];
    let mut best_diff = calorie_diff(best, quota);
    for &meal in &pool[1..] {
        let diff = calorie_diff(meal, quota);
        if diff < best_diff {
            best = meal;
            best_diff = diff;
        }
    }
    best
}

fn calorie_diff(meal: &Meal, quota: u32) -> u32 {
    meal.calories.unwrap_or(0).abs_diff(quota)
}
