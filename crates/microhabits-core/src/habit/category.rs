use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    #[serde(alias = "salud")]
    Health,
    #[serde(alias = "estudio")]
    Study,
    #[serde(alias = "descanso")]
    Rest,
    #[serde(alias = "finanzas")]
    Finance,
    #[serde(alias = "bienestar")]
    Wellbeing,
}

impl HabitCategory {
    pub const ALL: [HabitCategory; 5] = [
        HabitCategory::Health,
        HabitCategory::Study,
        HabitCategory::Rest,
        HabitCategory::Finance,
        HabitCategory::Wellbeing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HabitCategory::Health => "health",
            HabitCategory::Study => "study",
            HabitCategory::Rest => "rest",
            HabitCategory::Finance => "finance",
            HabitCategory::Wellbeing => "wellbeing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HabitCategory::Health => "Salud",
            HabitCategory::Study => "Estudio",
            HabitCategory::Rest => "Descanso",
            HabitCategory::Finance => "Finanzas",
            HabitCategory::Wellbeing => "Bienestar",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            HabitCategory::Health => "💪",
            HabitCategory::Study => "📚",
            HabitCategory::Rest => "😴",
            HabitCategory::Finance => "💰",
            HabitCategory::Wellbeing => "🧘",
        }
    }
}

impl fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HabitCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "health" | "salud" => Ok(HabitCategory::Health),
            "study" | "estudio" => Ok(HabitCategory::Study),
            "rest" | "descanso" => Ok(HabitCategory::Rest),
            "finance" | "finanzas" => Ok(HabitCategory::Finance),
            "wellbeing" | "bienestar" => Ok(HabitCategory::Wellbeing),
            _ => Err(ValidationError::InvalidValue {
                field: "category",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[serde(alias = "diario")]
    Daily,
    #[serde(alias = "semanal")]
    Weekly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        })
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "diario" => Ok(Frequency::Daily),
            "weekly" | "semanal" => Ok(Frequency::Weekly),
            _ => Err(ValidationError::InvalidValue {
                field: "frequency",
                value: s.to_string(),
            }),
        }
    }
}

/// Category selector used by the dashboard and group list ("all" or one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(HabitCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: HabitCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todas" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}
