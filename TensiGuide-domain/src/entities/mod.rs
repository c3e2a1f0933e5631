// Domain entities and value objects
pub mod activity;
pub mod blood_pressure;
pub mod conversions;
pub mod exercise;
pub mod food;
pub mod profile;
pub mod sleep;
pub mod snapshot;

// Re-export common types for easier imports
pub use activity::{ActivityLog, ActivityType, HealthImpact, Intensity, NewActivityLog};
pub use blood_pressure::{BloodPressureCategory, BloodPressureReading, NewBloodPressureReading};
pub use exercise::{Breathing, Difficulty, ExerciseLog, NewExerciseLog};
pub use food::{FoodLog, NewFoodLog};
pub use profile::{BmiCategory, EmergencyContact, Gender, MedicalHistory, PatientProfile};
pub use sleep::{NewSleepLog, SleepLog};
pub use snapshot::{newest_first, HealthSnapshot, Timestamped};
