use crate::domain::prediction::{PredictionBreakdown, PredictionResult};
use crate::domain::profile::{EducationLevel, LocationTier, Profile, Role};

/// Static FX for display purposes. Replace with a live FX source if needed.
const USD_TO_INR: f64 = 83.0;

/// Role baselines in the reference currency (USD).
fn role_baseline_usd(role: Role) -> f64 {
    match role {
        Role::SoftwareEngineer => 90_000.0,
        Role::DataScientist => 95_000.0,
        Role::ProductManager => 105_000.0,
        Role::Designer => 80_000.0,
        Role::DevOpsEngineer => 100_000.0,
        Role::QaEngineer => 75_000.0,
    }
}

/// Premium keywords per role. A skill matches when it contains one of
/// these as a substring after trimming and lowercasing.
fn premium_skills(role: Role) -> &'static [&'static str] {
    match role {
        Role::SoftwareEngineer => &[
            "system design",
            "distributed",
            "rust",
            "go",
            "aws",
            "kubernetes",
        ],
        Role::DataScientist => &[
            "ml",
            "machine learning",
            "deep learning",
            "nlp",
            "pytorch",
            "tensorflow",
        ],
        Role::ProductManager => &["growth", "a/b", "analytics", "strategy"],
        Role::Designer => &["ux research", "motion", "3d", "system"],
        Role::DevOpsEngineer => &["kubernetes", "terraform", "aws", "gcp", "sre"],
        Role::QaEngineer => &["automation", "cypress", "playwright", "performance"],
    }
}

// 0 yrs = 0.9x, ~1.5x by mid-career, saturates at the 1.8x ceiling
fn experience_multiplier(years: f64) -> f64 {
    let y = years.clamp(0.0, 30.0);
    (0.9 + (1.0 + y).log2() * 0.25).clamp(0.8, 1.8)
}

fn location_multiplier(tier: LocationTier) -> f64 {
    match tier {
        LocationTier::Tier1 => 1.25,
        LocationTier::Tier2 => 1.0,
        LocationTier::Tier3 => 0.85,
    }
}

fn education_multiplier(level: EducationLevel) -> f64 {
    match level {
        EducationLevel::HighSchool => 0.9,
        EducationLevel::Bachelors => 1.0,
        EducationLevel::Masters => 1.08,
        EducationLevel::Phd => 1.12,
    }
}

/// Each skill counts at most once, however many keywords it contains.
fn skills_multiplier(skills: &[String], role: Role) -> f64 {
    if skills.is_empty() {
        return 1.0;
    }
    let premium = premium_skills(role);
    let matches = skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| premium.iter().copied().any(|keyword| skill.contains(keyword)))
        .count();
    // Each matching skill adds 2.5%, capped at +15%
    (1.0 + (matches as f64 * 0.025).min(0.15)).clamp(0.9, 1.3)
}

/// Converts a USD amount to whole INR, rounding half away from zero.
fn round_inr(usd: f64) -> i64 {
    (usd * USD_TO_INR).round() as i64
}

/// Prices a candidate profile.
///
/// Combines the role baseline with independent multipliers for experience,
/// location, education and skills, converts to INR, and derives a variance
/// band around the expected value. The band widens by up to five percentage
/// points below five years of experience and stays within [12%, 20%].
///
/// Pure and total: every structurally valid profile produces a result.
pub fn predict(profile: &Profile) -> PredictionResult {
    let base = role_baseline_usd(profile.role);
    let exp_mul = experience_multiplier(profile.years_experience);
    let loc_mul = location_multiplier(profile.location_tier);
    let edu_mul = education_multiplier(profile.education);
    let skl_mul = skills_multiplier(&profile.skills, profile.role);

    let expected_usd = base * exp_mul * loc_mul * edu_mul * skl_mul;
    let variance =
        (0.15 + (5.0 - profile.years_experience.min(5.0)) * 0.01).clamp(0.12, 0.20);

    let breakdown = PredictionBreakdown {
        base_by_role: round_inr(base),
        experience_adjustment: round_inr(base * (exp_mul - 1.0)),
        location_adjustment: round_inr(base * (loc_mul - 1.0)),
        education_adjustment: round_inr(base * (edu_mul - 1.0)),
        skills_adjustment: round_inr(base * (skl_mul - 1.0)),
    };

    PredictionResult {
        currency: "INR",
        low: round_inr(expected_usd * (1.0 - variance)),
        high: round_inr(expected_usd * (1.0 + variance)),
        expected: round_inr(expected_usd),
        breakdown,
    }
}
