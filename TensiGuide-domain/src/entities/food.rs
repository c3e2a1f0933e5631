use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Domain model for a food diary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct FoodLog {
    pub id: String,
    /// Free-text description of what was eaten
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Values for recording a new food diary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFoodLog {
    pub description: String,
    pub timestamp: Option<DateTime<Utc>>,
}
