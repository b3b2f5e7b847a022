use serde_json::Value;

use crate::domain::profile::{EducationLevel, LocationTier, Profile, Role};
use crate::error::RequestError;

/// Turns a raw JSON body into a typed [`Profile`].
///
/// Mirrors the form contract: `role` and `yearsExperience` must be present;
/// `yearsExperience` is number-like (a JSON number or a numeric string,
/// anything else coerces to 0); `locationTier` falls back to Tier 3 when
/// missing or unrecognized; `education` must name one of the four levels;
/// `skills` defaults to empty unless it is an array, and non-string
/// elements are dropped.
pub fn profile_from_body(body: &Value) -> Result<Profile, RequestError> {
    let (Some(role_value), Some(years_value)) =
        (body.get("role"), body.get("yearsExperience"))
    else {
        return Err(RequestError::InvalidPayload);
    };

    let role_name = match role_value {
        Value::String(name) if !name.is_empty() => name.as_str(),
        _ => return Err(RequestError::InvalidPayload),
    };
    let role = Role::parse(role_name)
        .ok_or_else(|| RequestError::UnknownRole(role_name.to_string()))?;

    let years_experience = number_like(years_value);

    let location_tier = body
        .get("locationTier")
        .and_then(Value::as_str)
        .map_or(LocationTier::Tier3, LocationTier::parse_lossy);

    let education = match body.get("education").and_then(Value::as_str) {
        Some(name) => EducationLevel::parse(name)
            .ok_or_else(|| RequestError::UnknownEducation(name.to_string()))?,
        None => return Err(RequestError::InvalidPayload),
    };

    let skills = match body.get("skills") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    };

    Ok(Profile {
        role,
        years_experience,
        location_tier,
        education,
        skills,
    })
}

fn number_like(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_body_normalizes() {
        let body = json!({
            "role": "Software Engineer",
            "yearsExperience": 3,
            "locationTier": "Tier 2",
            "education": "Bachelor's",
            "skills": ["Rust", "AWS"],
        });

        let profile = profile_from_body(&body).unwrap();
        assert_eq!(profile.role, Role::SoftwareEngineer);
        assert_eq!(profile.years_experience, 3.0);
        assert_eq!(profile.location_tier, LocationTier::Tier2);
        assert_eq!(profile.education, EducationLevel::Bachelors);
        assert_eq!(profile.skills, vec!["Rust", "AWS"]);
    }

    #[test]
    fn test_missing_role_is_invalid_payload() {
        let body = json!({ "yearsExperience": 3, "education": "PhD" });
        assert_eq!(
            profile_from_body(&body),
            Err(RequestError::InvalidPayload)
        );
    }

    #[test]
    fn test_empty_or_non_string_role_is_invalid_payload() {
        let empty = json!({ "role": "", "yearsExperience": 3, "education": "PhD" });
        assert_eq!(profile_from_body(&empty), Err(RequestError::InvalidPayload));

        let numeric = json!({ "role": 7, "yearsExperience": 3, "education": "PhD" });
        assert_eq!(
            profile_from_body(&numeric),
            Err(RequestError::InvalidPayload)
        );
    }

    #[test]
    fn test_missing_years_is_invalid_payload() {
        let body = json!({ "role": "Designer", "education": "PhD" });
        assert_eq!(
            profile_from_body(&body),
            Err(RequestError::InvalidPayload)
        );
    }

    #[test]
    fn test_unknown_role_is_rejected_with_name() {
        let body = json!({
            "role": "Staff Wizard",
            "yearsExperience": 3,
            "education": "PhD",
        });
        assert_eq!(
            profile_from_body(&body),
            Err(RequestError::UnknownRole("Staff Wizard".to_string()))
        );
    }

    #[test]
    fn test_years_accepts_numeric_strings() {
        let body = json!({
            "role": "Designer",
            "yearsExperience": " 4.5 ",
            "education": "Master's",
        });
        let profile = profile_from_body(&body).unwrap();
        assert_eq!(profile.years_experience, 4.5);
    }

    #[test]
    fn test_non_numeric_years_coerce_to_zero() {
        let body = json!({
            "role": "Designer",
            "yearsExperience": "a decade",
            "education": "Master's",
        });
        assert_eq!(profile_from_body(&body).unwrap().years_experience, 0.0);

        let body = json!({
            "role": "Designer",
            "yearsExperience": null,
            "education": "Master's",
        });
        assert_eq!(profile_from_body(&body).unwrap().years_experience, 0.0);
    }

    #[test]
    fn test_missing_or_unknown_tier_falls_back() {
        let missing = json!({
            "role": "Designer",
            "yearsExperience": 2,
            "education": "Master's",
        });
        assert_eq!(
            profile_from_body(&missing).unwrap().location_tier,
            LocationTier::Tier3
        );

        let unknown = json!({
            "role": "Designer",
            "yearsExperience": 2,
            "locationTier": "Moon Base",
            "education": "Master's",
        });
        assert_eq!(
            profile_from_body(&unknown).unwrap().location_tier,
            LocationTier::Tier3
        );
    }

    #[test]
    fn test_unknown_education_is_rejected() {
        let body = json!({
            "role": "Designer",
            "yearsExperience": 2,
            "education": "Bootcamp",
        });
        assert_eq!(
            profile_from_body(&body),
            Err(RequestError::UnknownEducation("Bootcamp".to_string()))
        );
    }

    #[test]
    fn test_missing_education_is_invalid_payload() {
        let body = json!({ "role": "Designer", "yearsExperience": 2 });
        assert_eq!(
            profile_from_body(&body),
            Err(RequestError::InvalidPayload)
        );
    }

    #[test]
    fn test_skills_default_to_empty() {
        let absent = json!({
            "role": "Designer",
            "yearsExperience": 2,
            "education": "Master's",
        });
        assert!(profile_from_body(&absent).unwrap().skills.is_empty());

        // Not an array: ignored rather than rejected
        let scalar = json!({
            "role": "Designer",
            "yearsExperience": 2,
            "education": "Master's",
            "skills": "Figma",
        });
        assert!(profile_from_body(&scalar).unwrap().skills.is_empty());
    }

    #[test]
    fn test_non_string_skill_elements_are_dropped() {
        let body = json!({
            "role": "Designer",
            "yearsExperience": 2,
            "education": "Master's",
            "skills": ["Figma", 42, null, "Motion"],
        });
        assert_eq!(
            profile_from_body(&body).unwrap().skills,
            vec!["Figma", "Motion"]
        );
    }
}
