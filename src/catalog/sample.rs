use crate::model::{Meal, MealTime};

use MealTime::{Breakfast, Dinner, Lunch};

/// Built-in catalog used when the remote catalog is unreachable. Same
/// dishes the client ships for offline demos; small but covers every slot,
/// so search and plan assignment behave identically in degraded mode.
pub fn sample_meals() -> Vec<Meal> {
    vec![
        meal(
            "sample-1",
            // embedded line break is intentional, the catalog has them too
            "BÁNH MÌ TRỨNG\n+ PATE + RAU",
            &["Bánh mì", "Trứng gà", "Pate", "Rau củ"],
            420,
            &[Breakfast],
        ),
        meal(
            "sample-2",
            "CƠM GÀ NGŨ VỊ",
            &["Cơm", "Thịt gà", "Rau củ"],
            650,
            &[Lunch, Dinner],
        ),
        meal(
            "sample-3",
            "BÚN THỊT NƯỚNG",
            &["Bún", "Thịt heo", "Rau sống"],
            550,
            &[Lunch],
        ),
        meal(
            "sample-4",
            "CÁ LÓC KHO TỘ",
            &["Cá lóc", "Nước mắm", "Đường"],
            480,
            &[Lunch, Dinner],
        ),
        meal("sample-5", "TÔM RANG ME", &["Tôm", "Me", "Ớt"], 430, &[Dinner]),
        meal(
            "sample-6",
            "MỰC XÀO CHUA NGỌT",
            &["Mực", "Cà chua", "Dứa"],
            410,
            &[Dinner],
        ),
        meal(
            "sample-7",
            "SƯỜN HEO KHO",
            &["Sườn heo", "Nước mắm"],
            620,
            &[Lunch, Dinner],
        ),
        meal(
            "sample-8",
            "CƠM THỊT BÒ XÀO",
            &["Cơm", "Thịt bò", "Rau củ"],
            680,
            &[Lunch],
        ),
        meal(
            "sample-9",
            "ĐẬU HŨ CHIÊN",
            &["Đậu hũ", "Nước mắm", "Hành lá"],
            350,
            &[Breakfast, Dinner],
        ),
        meal(
            "sample-10",
            "TRỨNG VỊT LỘN",
            &["Trứng vịt", "Rau răm"],
            180,
            &[Breakfast],
        ),
    ]
}

fn meal(id: &str, name: &str, ingredients: &[&str], kcal: u32, times: &[MealTime]) -> Meal {
    let ingredients: Vec<String> = ingredients.iter().map(|s| s.to_string()).collect();
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        description: ingredients.join(", "),
        tags: Vec::new(),
        ingredients,
        calories: Some(kcal),
        meal_times: times.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_has_candidates() {
        let meals = sample_meals();
        for slot in MealTime::ALL {
            assert!(
                meals.iter().any(|m| m.applies_to(slot)),
                "sample set must cover {slot:?}"
            );
        }
    }

    #[test]
    fn ids_are_distinct_and_calories_positive() {
        let meals = sample_meals();
        let ids: std::collections::HashSet<_> = meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), meals.len());
        assert!(meals.iter().all(|m| m.calories.unwrap_or(0) > 0));
    }
}
