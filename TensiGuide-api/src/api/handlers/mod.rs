pub mod health;
pub mod insights;
pub mod patient;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use health::health_check;
pub use insights::{
    classify_blood_pressure, get_activity_progress, get_behavior_plan, get_health_score, get_report,
};
pub use patient::{
    create_activity, create_exercise, create_food, create_reading, create_sleep, get_profile,
    put_profile, PatientService,
};
