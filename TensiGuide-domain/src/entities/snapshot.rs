use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::{ActivityLog, BloodPressureReading, ExerciseLog, FoodLog, SleepLog};

/// One patient's log collections captured at a single instant.
///
/// Collections may be in any order; consumers sort with [`newest_first`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub readings: Vec<BloodPressureReading>,
    pub activity_logs: Vec<ActivityLog>,
    pub sleep_logs: Vec<SleepLog>,
    pub exercise_logs: Vec<ExerciseLog>,
    pub food_logs: Vec<FoodLog>,
}

impl HealthSnapshot {
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
            && self.activity_logs.is_empty()
            && self.sleep_logs.is_empty()
            && self.exercise_logs.is_empty()
            && self.food_logs.is_empty()
    }
}

/// Anything recorded at a point in time
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

macro_rules! impl_timestamped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Timestamped for $ty {
                fn timestamp(&self) -> DateTime<Utc> {
                    self.timestamp
                }
            }
        )+
    };
}

impl_timestamped!(BloodPressureReading, ActivityLog, SleepLog, ExerciseLog, FoodLog);

/// Borrow the entries sorted newest first. Entries sharing a timestamp keep
/// their input order.
pub fn newest_first<T: Timestamped>(entries: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = entries.iter().collect();
    sorted.sort_by_key(|entry| std::cmp::Reverse(entry.timestamp()));
    sorted
}
