use crate::config::CrisisPrecedence;
use crate::entities::blood_pressure::BloodPressureCategory;

/// Systolic threshold above which a reading is a hypertensive crisis
pub const CRISIS_SYSTOLIC: u16 = 180;
/// Diastolic threshold above which a reading is a hypertensive crisis
pub const CRISIS_DIASTOLIC: u16 = 120;

/// Whether a reading is above the crisis thresholds
pub fn is_hypertensive_crisis(systolic: u16, diastolic: u16) -> bool {
    systolic > CRISIS_SYSTOLIC || diastolic > CRISIS_DIASTOLIC
}

/// Whether a reading is at or above the 140/90 treatment threshold
pub fn is_high_reading(systolic: u16, diastolic: u16) -> bool {
    systolic >= 140 || diastolic >= 90
}

/// Categorize blood pressure based on measurements.
///
/// Tiers are checked Low, Normal, Elevated, Stage 1, Stage 2; the crisis
/// tier goes first under [`CrisisPrecedence::SeverityFirst`] and is never
/// reached under [`CrisisPrecedence::SourceOrder`].
pub fn categorize_blood_pressure(
    systolic: u16,
    diastolic: u16,
    precedence: CrisisPrecedence,
) -> BloodPressureCategory {
    match precedence {
        CrisisPrecedence::SeverityFirst if is_hypertensive_crisis(systolic, diastolic) => {
            BloodPressureCategory::HypertensiveCrisis
        }
        _ => categorize_below_crisis(systolic, diastolic),
    }
}

fn categorize_below_crisis(systolic: u16, diastolic: u16) -> BloodPressureCategory {
    if systolic < 90 || diastolic < 60 {
        BloodPressureCategory::Low
    } else if systolic < 120 && diastolic < 80 {
        BloodPressureCategory::Normal
    } else if (120..=129).contains(&systolic) && diastolic < 80 {
        BloodPressureCategory::Elevated
    } else if (130..=139).contains(&systolic) || (80..=89).contains(&diastolic) {
        BloodPressureCategory::HighStage1
    } else {
        // Only systolic >= 140 or diastolic >= 90 is left here
        BloodPressureCategory::HighStage2
    }
}
