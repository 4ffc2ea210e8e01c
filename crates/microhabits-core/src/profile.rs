//! User profile and the mock premium subscription flow.
//!
//! No payment is processed anywhere: checkout only produces a receipt
//! describing what the plan would cover.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Usuario".into(),
            avatar: "👤".into(),
        }
    }
}

impl UserProfile {
    /// Apply optional changes; blank values are rejected.
    pub fn update(&mut self, name: Option<&str>, avatar: Option<&str>) -> Result<(), ValidationError> {
        let name = name.map(str::trim);
        let avatar = avatar.map(str::trim);
        if name == Some("") {
            return Err(ValidationError::Empty { field: "name" });
        }
        if avatar == Some("") {
            return Err(ValidationError::Empty { field: "avatar" });
        }
        if let Some(name) = name {
            self.name = name.to_string();
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar.to_string();
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PremiumPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub months: u32,
    pub badge: &'static str,
    pub features: &'static [&'static str],
}

pub const PREMIUM_PLANS: [PremiumPlan; 3] = [
    PremiumPlan {
        id: "mensual",
        name: "Plan Mensual",
        price: "$4.99",
        period: "/mes",
        months: 1,
        badge: "Popular",
        features: &[
            "Hábitos ilimitados",
            "Estadísticas avanzadas",
            "Recordatorios personalizados",
            "Temas personalizados",
            "Exportar progreso",
            "Sin anuncios",
        ],
    },
    PremiumPlan {
        id: "trimestral",
        name: "Plan Trimestral",
        price: "$12.99",
        period: "/3 meses",
        months: 3,
        badge: "Mejor valor",
        features: &[
            "Todo del plan mensual",
            "Ahorra 13%",
            "Grupos privados ilimitados",
            "Análisis de productividad",
            "Soporte prioritario",
            "Insignias exclusivas",
        ],
    },
    PremiumPlan {
        id: "anual",
        name: "Plan Anual",
        price: "$39.99",
        period: "/año",
        months: 12,
        badge: "Máximo ahorro",
        features: &[
            "Todo del plan trimestral",
            "Ahorra 33%",
            "Coaching personalizado",
            "Acceso anticipado a funciones",
            "Contenido exclusivo",
            "Certificados de logros",
        ],
    },
];

pub fn find_plan(id: &str) -> Option<&'static PremiumPlan> {
    PREMIUM_PLANS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionReceipt {
    pub plan_id: String,
    pub plan_name: String,
    pub price: String,
    pub started_at: DateTime<Utc>,
    pub renews_at: DateTime<Utc>,
    /// Always true: nothing is charged.
    pub mock: bool,
}

/// Mock checkout for the plan with `plan_id`.
pub fn checkout(plan_id: &str, now: DateTime<Utc>) -> Result<SubscriptionReceipt, ValidationError> {
    let plan = find_plan(plan_id).ok_or_else(|| ValidationError::InvalidValue {
        field: "plan",
        value: plan_id.to_string(),
    })?;
    let renews_at = now
        .checked_add_months(Months::new(plan.months))
        .unwrap_or(now);
    Ok(SubscriptionReceipt {
        plan_id: plan.id.to_string(),
        plan_name: plan.name.to_string(),
        price: plan.price.to_string(),
        started_at: now,
        renews_at,
        mock: true,
    })
}
