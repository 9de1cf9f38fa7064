use crate::model::{ActivityLevel, CalorieBreakdown, Goal, UserProfile};

const BREAKFAST_SHARE: f64 = 0.25;
const LUNCH_SHARE: f64 = 0.45;

/// No adjustment may push the daily target below this.
const MIN_DAILY_TARGET: i64 = 1200;

/// Derives the daily calorie target and its per-slot split from body
/// metrics.
///
/// The four BMI-band base values are the calibrated part. The activity and
/// goal offsets are a coarse, deliberately approximate adjustment with one
/// guarantee: more activity never lowers the target, a lose goal never
/// raises it, a gain goal never lowers it.
pub fn compute_target(profile: &UserProfile) -> CalorieBreakdown {
    let bmi = profile.bmi();
    let base: i64 = if bmi < 18.5 {
        2600
    } else if bmi < 25.0 {
        2400
    } else if bmi < 30.0 {
        2000
    } else {
        1800
    };
    let activity = match profile.activity {
        ActivityLevel::Low => -100,
        ActivityLevel::Medium => 0,
        ActivityLevel::High => 200,
    };
    let goal = match profile.goal {
        Goal::Lose => -200,
        Goal::Maintain => 0,
        Goal::Gain => 200,
    };
    let target = (base + activity + goal).max(MIN_DAILY_TARGET) as u32;
    tracing::debug!(bmi = format!("{bmi:.2}"), target, "calorie target computed");
    split(target)
}

/// 25% breakfast, 45% lunch, remainder dinner; dinner absorbs the rounding
/// so the three slots always sum exactly to the target.
fn split(target: u32) -> CalorieBreakdown {
    let breakfast = (f64::from(target) * BREAKFAST_SHARE).round() as u32;
    let lunch = (f64::from(target) * LUNCH_SHARE).round() as u32;
    let dinner = target - breakfast - lunch;
    CalorieBreakdown {
        target,
        breakfast,
        lunch,
        dinner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(height: f64, weight: f64, activity: ActivityLevel, goal: Goal) -> UserProfile {
        UserProfile::new(height, weight, activity, goal).expect("valid profile")
    }

    #[test]
    fn normal_bmi_reference_case() {
        // 175 cm / 70 kg -> BMI 22.86 -> 2400, split 600/1080/720
        let b = compute_target(&profile(175.0, 70.0, ActivityLevel::Medium, Goal::Maintain));
        assert_eq!(b.target, 2400);
        assert_eq!(b.breakfast, 600);
        assert_eq!(b.lunch, 1080);
        assert_eq!(b.dinner, 720);
    }

    #[test]
    fn bmi_bands_are_monotone_decreasing() {
        let underweight = profile(180.0, 55.0, ActivityLevel::Medium, Goal::Maintain); // ~17.0
        let normal = profile(175.0, 70.0, ActivityLevel::Medium, Goal::Maintain); // ~22.9
        let overweight = profile(170.0, 80.0, ActivityLevel::Medium, Goal::Maintain); // ~27.7
        let obese = profile(165.0, 95.0, ActivityLevel::Medium, Goal::Maintain); // ~34.9
        assert_eq!(compute_target(&underweight).target, 2600);
        assert_eq!(compute_target(&normal).target, 2400);
        assert_eq!(compute_target(&overweight).target, 2000);
        assert_eq!(compute_target(&obese).target, 1800);
    }

    #[test]
    fn activity_and_goal_adjust_monotonically() {
        let base = compute_target(&profile(175.0, 70.0, ActivityLevel::Medium, Goal::Maintain));
        let lazy = compute_target(&profile(175.0, 70.0, ActivityLevel::Low, Goal::Maintain));
        let active = compute_target(&profile(175.0, 70.0, ActivityLevel::High, Goal::Maintain));
        assert!(lazy.target < base.target && base.target < active.target);

        let lose = compute_target(&profile(175.0, 70.0, ActivityLevel::Medium, Goal::Lose));
        let gain = compute_target(&profile(175.0, 70.0, ActivityLevel::Medium, Goal::Gain));
        assert!(lose.target < base.target && base.target < gain.target);
    }

    #[test]
    fn slots_always_sum_to_target() {
        let activities = [ActivityLevel::Low, ActivityLevel::Medium, ActivityLevel::High];
        let goals = [Goal::Lose, Goal::Maintain, Goal::Gain];
        let bodies = [(180.0, 55.0), (175.0, 70.0), (170.0, 80.0), (165.0, 95.0)];
        for (h, w) in bodies {
            for activity in activities {
                for goal in goals {
                    let b = compute_target(&profile(h, w, activity, goal));
                    assert_eq!(
                        b.breakfast + b.lunch + b.dinner,
                        b.target,
                        "split must sum exactly for {h}/{w} {activity:?} {goal:?}"
                    );
                }
            }
        }
    }
}
