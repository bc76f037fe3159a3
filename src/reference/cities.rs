//! City cost-of-living reference tables
//!
//! Static, read-only data: per-city base income by role and per-dimension
//! cost ranges. Invariant for every dimension: min <= default <= max.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LayakError;
use crate::models::Money;

/// Fixed set of cities with reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Jakarta,
    Yogyakarta,
    Cirebon,
}

impl City {
    /// All cities, in display order
    pub fn all() -> &'static [Self] {
        &[Self::Jakarta, Self::Yogyakarta, Self::Cirebon]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jakarta => "Jakarta",
            Self::Yogyakarta => "Yogyakarta",
            Self::Cirebon => "Cirebon",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for City {
    type Err = LayakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        for city in Self::all() {
            if needle == city.name().to_lowercase() {
                return Ok(*city);
            }
        }
        Err(LayakError::UnknownCity(s.to_string()))
    }
}

/// Fixed set of roles with a per-city income baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    UniversityStudent,
    Worker,
}

impl Role {
    /// All roles, in display order
    pub fn all() -> &'static [Self] {
        &[Self::Student, Self::UniversityStudent, Self::Worker]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::UniversityStudent => "University Student",
            Self::Worker => "Worker",
        }
    }

    const fn idx(self) -> usize {
        match self {
            Self::Student => 0,
            Self::UniversityStudent => 1,
            Self::Worker => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Role {
    type Err = LayakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        match needle.as_str() {
            "student" => Ok(Self::Student),
            "university student" | "university-student" | "university_student" => {
                Ok(Self::UniversityStudent)
            }
            "worker" => Ok(Self::Worker),
            _ => Err(LayakError::UnknownRole(s.to_string())),
        }
    }
}

/// Adjustable cost dimensions in the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostDimension {
    Food,
    Housing,
    Transportation,
    Internet,
    Utilities,
}

impl CostDimension {
    /// All dimensions, in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Housing,
            Self::Transportation,
            Self::Internet,
            Self::Utilities,
        ]
    }

    /// Indonesian display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Makan",
            Self::Housing => "Tempat Tinggal",
            Self::Transportation => "Transportasi",
            Self::Internet => "Internet",
            Self::Utilities => "Listrik & Air",
        }
    }

    const fn idx(self) -> usize {
        match self {
            Self::Food => 0,
            Self::Housing => 1,
            Self::Transportation => 2,
            Self::Internet => 3,
            Self::Utilities => 4,
        }
    }
}

impl fmt::Display for CostDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CostDimension {
    type Err = LayakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" | "makan" => Ok(Self::Food),
            "housing" | "tempat tinggal" => Ok(Self::Housing),
            "transportation" | "transport" | "transportasi" => Ok(Self::Transportation),
            "internet" => Ok(Self::Internet),
            "utilities" | "listrik" => Ok(Self::Utilities),
            _ => Err(LayakError::InvalidInput(format!(
                "unknown cost dimension: '{}'. Valid dimensions: food, housing, transportation, internet, utilities",
                s
            ))),
        }
    }
}

/// A cost range for one dimension in one city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: Money,
    pub max: Money,
    pub default: Money,
}

impl CostRange {
    const fn new(min: i64, max: i64, default: i64) -> Self {
        Self {
            min: Money::from_rupiah(min),
            max: Money::from_rupiah(max),
            default: Money::from_rupiah(default),
        }
    }

    /// Check whether an amount falls inside the range (inclusive)
    pub fn contains(&self, amount: Money) -> bool {
        amount >= self.min && amount <= self.max
    }
}

/// Static reference data for one city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityProfile {
    pub city: City,
    // Indexed by Role::idx
    base_income: [Money; 3],
    // Indexed by CostDimension::idx
    costs: [CostRange; 5],
}

impl CityProfile {
    /// Monthly income baseline for a role in this city
    pub fn base_income(&self, role: Role) -> Money {
        self.base_income[role.idx()]
    }

    /// Cost range for one dimension
    pub fn cost_range(&self, dimension: CostDimension) -> CostRange {
        self.costs[dimension.idx()]
    }

    /// Default cost for every dimension, in display order
    ///
    /// Used to seed simulator state; re-seeding on a city change discards any
    /// in-progress adjustments for the session.
    pub fn default_costs(&self) -> Vec<(CostDimension, Money)> {
        CostDimension::all()
            .iter()
            .map(|d| (*d, self.cost_range(*d).default))
            .collect()
    }
}

const JAKARTA: CityProfile = CityProfile {
    city: City::Jakarta,
    base_income: [
        Money::from_rupiah(1_500_000),
        Money::from_rupiah(2_000_000),
        Money::from_rupiah(4_800_000),
    ],
    costs: [
        CostRange::new(1_000_000, 3_000_000, 1_800_000),
        CostRange::new(1_500_000, 5_000_000, 2_500_000),
        CostRange::new(300_000, 1_500_000, 600_000),
        CostRange::new(200_000, 500_000, 300_000),
        CostRange::new(300_000, 800_000, 400_000),
    ],
};

const YOGYAKARTA: CityProfile = CityProfile {
    city: City::Yogyakarta,
    base_income: [
        Money::from_rupiah(1_200_000),
        Money::from_rupiah(1_800_000),
        Money::from_rupiah(3_500_000),
    ],
    costs: [
        CostRange::new(800_000, 2_000_000, 1_200_000),
        CostRange::new(800_000, 3_000_000, 1_500_000),
        CostRange::new(200_000, 800_000, 400_000),
        CostRange::new(150_000, 400_000, 250_000),
        CostRange::new(200_000, 600_000, 300_000),
    ],
};

const CIREBON: CityProfile = CityProfile {
    city: City::Cirebon,
    base_income: [
        Money::from_rupiah(1_000_000),
        Money::from_rupiah(1_500_000),
        Money::from_rupiah(3_000_000),
    ],
    costs: [
        CostRange::new(700_000, 1_800_000, 1_000_000),
        CostRange::new(600_000, 2_000_000, 1_000_000),
        CostRange::new(150_000, 600_000, 300_000),
        CostRange::new(150_000, 350_000, 200_000),
        CostRange::new(150_000, 500_000, 250_000),
    ],
};

/// Look up the static profile for a city
pub fn city_profile(city: City) -> &'static CityProfile {
    match city {
        City::Jakarta => &JAKARTA,
        City::Yogyakarta => &YOGYAKARTA,
        City::Cirebon => &CIREBON,
    }
}

/// Default costs per dimension for a city
pub fn default_costs(city: City) -> Vec<(CostDimension, Money)> {
    city_profile(city).default_costs()
}
