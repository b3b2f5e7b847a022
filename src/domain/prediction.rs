use serde::Serialize;

/// Per-factor adjustments relative to the role baseline, in whole INR.
///
/// Each field is rounded independently from `baseline × (multiplier − 1)`,
/// so the five numbers do not sum exactly to `expected − baseByRole`; the
/// multipliers compose multiplicatively and the breakdown is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionBreakdown {
    pub base_by_role: i64,
    pub experience_adjustment: i64,
    pub location_adjustment: i64,
    pub education_adjustment: i64,
    pub skills_adjustment: i64,
}

/// A salary estimate: the expected value and a low/high band around it,
/// in whole units of `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub currency: &'static str,
    pub low: i64,
    pub high: i64,
    pub expected: i64,
    pub breakdown: PredictionBreakdown,
}
