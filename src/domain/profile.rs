use std::fmt;

/// Job title category. Every variant has a baseline and a premium-skill set
/// in the pricing tables; the exhaustive matches there keep the enumeration
/// and the tables in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    Designer,
    DevOpsEngineer,
    QaEngineer,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::SoftwareEngineer,
        Role::DataScientist,
        Role::ProductManager,
        Role::Designer,
        Role::DevOpsEngineer,
        Role::QaEngineer,
    ];

    /// Strict lookup by display name. Unknown names are a caller error.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Software Engineer" => Some(Role::SoftwareEngineer),
            "Data Scientist" => Some(Role::DataScientist),
            "Product Manager" => Some(Role::ProductManager),
            "Designer" => Some(Role::Designer),
            "DevOps Engineer" => Some(Role::DevOpsEngineer),
            "QA Engineer" => Some(Role::QaEngineer),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::SoftwareEngineer => "Software Engineer",
            Role::DataScientist => "Data Scientist",
            Role::ProductManager => "Product Manager",
            Role::Designer => "Designer",
            Role::DevOpsEngineer => "DevOps Engineer",
            Role::QaEngineer => "QA Engineer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cost-of-living/market bucket, ordered from the most expensive markets
/// (Tier 1) down to small markets and low-COL remote (Tier 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationTier {
    Tier1,
    Tier2,
    Tier3,
}

impl LocationTier {
    pub const ALL: [LocationTier; 3] =
        [LocationTier::Tier1, LocationTier::Tier2, LocationTier::Tier3];

    /// Lookup by display name. Unrecognized tiers price as the smallest
    /// market bucket rather than failing.
    pub fn parse_lossy(name: &str) -> Self {
        match name {
            "Tier 1" => LocationTier::Tier1,
            "Tier 2" => LocationTier::Tier2,
            _ => LocationTier::Tier3,
        }
    }
}

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::HighSchool,
        EducationLevel::Bachelors,
        EducationLevel::Masters,
        EducationLevel::Phd,
    ];

    /// Strict lookup by display name. Unknown names are a caller error.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "High School" => Some(EducationLevel::HighSchool),
            "Bachelor's" => Some(EducationLevel::Bachelors),
            "Master's" => Some(EducationLevel::Masters),
            "PhD" => Some(EducationLevel::Phd),
            _ => None,
        }
    }
}

/// A candidate profile, constructed fresh per request by the transport
/// layer and consumed by the pricing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub role: Role,
    pub years_experience: f64,
    pub location_tier: LocationTier,
    pub education: EducationLevel,
    pub skills: Vec<String>,
}
