//! Achievement badges.
//!
//! Unlock state is a pure function of the current totals. A badge can lock
//! again if completions are later removed.

use serde::{Deserialize, Serialize};

/// What a badge measures and the value it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BadgeThreshold {
    TotalCompletions(u32),
    StreakDays(u32),
}

impl BadgeThreshold {
    pub fn is_met(&self, total_completions: u32, longest_streak: u32) -> bool {
        match *self {
            BadgeThreshold::TotalCompletions(n) => total_completions >= n,
            BadgeThreshold::StreakDays(n) => longest_streak >= n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub name: &'static str,
    pub icon: &'static str,
    pub requirement: &'static str,
    pub threshold: BadgeThreshold,
}

pub const BADGES: [Badge; 5] = [
    Badge {
        name: "Principiante",
        icon: "🌱",
        requirement: "1 hábito completado",
        threshold: BadgeThreshold::TotalCompletions(1),
    },
    Badge {
        name: "Constante",
        icon: "⭐",
        requirement: "3 días seguidos",
        threshold: BadgeThreshold::StreakDays(3),
    },
    Badge {
        name: "Dedicado",
        icon: "🔥",
        requirement: "7 días seguidos",
        threshold: BadgeThreshold::StreakDays(7),
    },
    Badge {
        name: "Maestro",
        icon: "🏆",
        requirement: "30 hábitos completados",
        threshold: BadgeThreshold::TotalCompletions(30),
    },
    Badge {
        name: "Leyenda",
        icon: "👑",
        requirement: "30 días seguidos",
        threshold: BadgeThreshold::StreakDays(30),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeStatus {
    pub name: String,
    pub icon: String,
    pub requirement: String,
    pub threshold: BadgeThreshold,
    pub unlocked: bool,
}

/// Evaluate the whole badge table against the given totals.
pub fn evaluate_badges(total_completions: u32, longest_streak: u32) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|b| BadgeStatus {
            name: b.name.to_string(),
            icon: b.icon.to_string(),
            requirement: b.requirement.to_string(),
            threshold: b.threshold,
            unlocked: b.threshold.is_met(total_completions, longest_streak),
        })
        .collect()
}
