mod assign;
mod log;
mod target;

pub use assign::{assign, fill, WeeklyAssignment, DAYS_PER_WEEK};
pub use log::{confirm_week, MealLogStore};
pub use target::compute_target;
