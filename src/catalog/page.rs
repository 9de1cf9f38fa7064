use serde::Deserialize;
use serde_json::Value;

use crate::model::{Meal, MealTime};

/// One page of catalog results in the canonical shape. Everything past this
/// boundary works with `items`/`has_next_page` only.
#[derive(Debug, Clone, Default)]
pub struct CatalogPage {
    pub items: Vec<Meal>,
    pub has_next_page: bool,
}

impl CatalogPage {
    pub fn new(items: Vec<Meal>, has_next_page: bool) -> Self {
        Self {
            items,
            has_next_page,
        }
    }

    /// Maps any accepted upstream response shape into the canonical page.
    ///
    /// The backend has shipped several envelopes over time: a bare array,
    /// `{data, pagination: {hasNextPage}}` and `{items, hasNextPage}`. All
    /// of them are normalized here, once; nothing downstream branches on
    /// response shape. Records without a usable id or name are dropped,
    /// records without calories are kept (still searchable by name).
    pub fn from_json(value: Value) -> anyhow::Result<CatalogPage> {
        let raw: RawPage = serde_json::from_value(value)?;
        Ok(raw.into_page())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPage {
    Enveloped {
        #[serde(alias = "items")]
        data: Vec<RawMeal>,
        #[serde(default)]
        pagination: Option<RawPagination>,
        #[serde(default, rename = "hasNextPage")]
        has_next_page: Option<bool>,
    },
    Bare(Vec<RawMeal>),
}

impl RawPage {
    fn into_page(self) -> CatalogPage {
        match self {
            RawPage::Enveloped {
                data,
                pagination,
                has_next_page,
            } => {
                let has_next = has_next_page
                    .or(pagination.map(|p| p.has_next_page))
                    .unwrap_or(false);
                CatalogPage::new(convert(data), has_next)
            }
            RawPage::Bare(data) => CatalogPage::new(convert(data), false),
        }
    }
}

fn convert(raw: Vec<RawMeal>) -> Vec<Meal> {
    let mut items = Vec::with_capacity(raw.len());
    for r in raw {
        match r.into_meal() {
            Some(meal) => items.push(meal),
            None => tracing::debug!("dropping malformed catalog record"),
        }
    }
    items
}

#[derive(Deserialize)]
struct RawPagination {
    #[serde(default, rename = "hasNextPage")]
    has_next_page: bool,
}

#[derive(Deserialize)]
struct RawMeal {
    // the Mongo-era backend sends `_id`, the newer one plain `id`
    #[serde(default, alias = "_id")]
    id: Option<Value>,
    #[serde(default, alias = "title")]
    name: Option<String>,
    #[serde(default, alias = "desc")]
    description: Option<String>,
    #[serde(default, alias = "tags")]
    tag: Vec<String>,
    #[serde(default)]
    ingredients: Vec<RawIngredient>,
    #[serde(default, rename = "totalKcal", alias = "calories")]
    total_kcal: Option<f64>,
    #[serde(default, rename = "mealTime", alias = "meal_times")]
    meal_time: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIngredient {
    Named { name: String },
    Plain(String),
}

impl RawIngredient {
    fn name(self) -> Option<String> {
        let name = match self {
            RawIngredient::Named { name } => name,
            RawIngredient::Plain(name) => name,
        };
        let name = name.trim().to_string();
        (!name.is_empty()).then_some(name)
    }
}

impl RawMeal {
    fn into_meal(self) -> Option<Meal> {
        let id = match self.id? {
            Value::String(s) if !s.is_empty() => s,
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        let ingredients: Vec<String> = self
            .ingredients
            .into_iter()
            .filter_map(RawIngredient::name)
            .collect();
        // the shipped client derives the blurb from ingredient names when
        // the record has no description
        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| ingredients.join(", "));
        let calories = self
            .total_kcal
            .filter(|k| k.is_finite() && *k >= 0.0)
            .map(|k| k.round() as u32);
        let meal_times = self
            .meal_time
            .iter()
            .filter_map(|s| MealTime::from_str_loose(s))
            .collect();
        Some(Meal {
            id,
            name,
            description,
            tags: self.tag,
            ingredients,
            calories,
            meal_times,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_data_envelope_with_pagination() {
        let page = CatalogPage::from_json(json!({
            "data": [
                {
                    "_id": "m1",
                    "name": "CƠM GÀ",
                    "totalKcal": 650.4,
                    "mealTime": ["lunch", "dinner", "brunch"],
                    "ingredients": [{"name": "Thịt gà"}, {"name": "Cơm"}]
                }
            ],
            "pagination": { "hasNextPage": true }
        }))
        .expect("envelope should parse");
        assert!(page.has_next_page);
        assert_eq!(page.items.len(), 1);
        let meal = &page.items[0];
        assert_eq!(meal.id, "m1");
        assert_eq!(meal.calories, Some(650));
        assert_eq!(meal.meal_times, vec![MealTime::Lunch, MealTime::Dinner]);
        assert_eq!(meal.description, "Thịt gà, Cơm");
    }

    #[test]
    fn accepts_items_envelope_and_bare_array() {
        let page = CatalogPage::from_json(json!({
            "items": [{"id": "m2", "title": "BÚN BÒ", "ingredients": ["Thịt bò"]}],
            "hasNextPage": false
        }))
        .expect("items envelope should parse");
        assert!(!page.has_next_page);
        assert_eq!(page.items[0].name, "BÚN BÒ");
        assert_eq!(page.items[0].ingredients, vec!["Thịt bò"]);

        let bare = CatalogPage::from_json(json!([{"id": "m3", "name": "PHỞ"}]))
            .expect("bare array should parse");
        assert!(!bare.has_next_page);
        assert_eq!(bare.items[0].calories, None);
    }

    #[test]
    fn drops_records_without_id_or_name() {
        let page = CatalogPage::from_json(json!({
            "data": [
                {"name": "no id"},
                {"_id": "x", "name": "  "},
                {"_id": "ok", "name": "CHÁO GÀ"}
            ]
        }))
        .expect("should parse");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "ok");
    }

    #[test]
    fn rejects_malformed_envelope() {
        assert!(CatalogPage::from_json(json!({"data": "not-an-array"})).is_err());
        assert!(CatalogPage::from_json(json!(42)).is_err());
    }
}
