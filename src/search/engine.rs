use std::cmp::Reverse;

use crate::model::{Meal, RankedResult, SearchQuery};
use crate::search::score::score;
use crate::text::normalize;

/// Ranks a catalog against one search invocation.
///
/// Ingredient chips filter first, then the free text is scored; zero-score
/// meals are excluded. Results order by descending score, then by
/// meal-time priority (breakfast, lunch, dinner, unscheduled); the sort is
/// stable, so catalog order breaks remaining ties. An empty query with no
/// chips is "browse" mode: the whole catalog in meal-time-priority order,
/// unscored.
pub fn search(query: &SearchQuery, catalog: &[Meal]) -> Vec<RankedResult> {
    let survivors: Vec<&Meal> = if query.selected_ingredients.is_empty() {
        catalog.iter().collect()
    } else {
        catalog
            .iter()
            .filter(|m| matches_ingredients(m, &query.selected_ingredients))
            .collect()
    };

    let text = query.text.trim();
    let mut ranked: Vec<RankedResult> = if text.is_empty() {
        survivors
            .into_iter()
            .map(|m| RankedResult {
                meal: m.clone(),
                score: 0,
            })
            .collect()
    } else {
        survivors
            .into_iter()
            .filter_map(|m| {
                let s = score(m, text);
                (s > 0).then(|| RankedResult {
                    meal: m.clone(),
                    score: s,
                })
            })
            .collect()
    };

    ranked.sort_by_key(|r| (Reverse(r.score), r.meal.meal_time_priority()));
    tracing::debug!(
        results = ranked.len(),
        chips = query.selected_ingredients.len(),
        "search ranked"
    );
    ranked
}

/// A meal survives the chip filter if at least one selected ingredient and
/// one of the meal's tags or ingredient names contain each other (either
/// direction, accent-insensitive). The bidirectional check covers both
/// "user typed fewer words than the catalog tag" and the reverse.
fn matches_ingredients(meal: &Meal, selected: &[String]) -> bool {
    let surfaces: Vec<String> = meal
        .tags
        .iter()
        .chain(meal.ingredients.iter())
        .map(|s| normalize(s).to_lowercase())
        .filter(|s| !s.trim().is_empty())
        .collect();
    selected.iter().any(|sel| {
        let sel = normalize(sel.trim()).to_lowercase();
        !sel.is_empty()
            && surfaces
                .iter()
                .any(|surf| surf.contains(&sel) || sel.contains(surf.as_str()))
    })
}
