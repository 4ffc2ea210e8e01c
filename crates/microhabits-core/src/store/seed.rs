//! Starter data for a first launch.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::group::Group;
use crate::habit::{Frequency, Habit, HabitCategory};

pub fn default_habits(today: NaiveDate, now: DateTime<Utc>) -> Vec<Habit> {
    let created_at = now - Duration::days(3);
    vec![
        Habit {
            id: "1".into(),
            name: "Meditar 5 minutos".into(),
            category: HabitCategory::Wellbeing,
            frequency: Frequency::Daily,
            icon: "🧘".into(),
            completed_dates: [0, 1, 2].iter().map(|d| today - Duration::days(*d)).collect(),
            created_at,
            reminder_time: "08:00".parse().ok(),
            group: None,
        },
        Habit {
            id: "2".into(),
            name: "Leer 10 páginas".into(),
            category: HabitCategory::Study,
            frequency: Frequency::Daily,
            icon: "📚".into(),
            completed_dates: [today].into_iter().collect(),
            created_at,
            reminder_time: "20:00".parse().ok(),
            group: None,
        },
    ]
}

pub fn default_groups(now: DateTime<Utc>) -> Vec<Group> {
    vec![
        Group {
            id: "1".into(),
            name: "Estudiantes Productivos".into(),
            description: "Grupo para estudiantes que quieren mejorar sus hábitos de estudio".into(),
            category: HabitCategory::Study,
            members: 24,
            active_today: 18,
            created_at: now,
            is_joined: false,
            habits: Vec::new(),
        },
        Group {
            id: "2".into(),
            name: "Vida Saludable".into(),
            description: "Comparte tu progreso en hábitos de salud y bienestar".into(),
            category: HabitCategory::Health,
            members: 42,
            active_today: 31,
            created_at: now,
            is_joined: false,
            habits: Vec::new(),
        },
    ]
}
