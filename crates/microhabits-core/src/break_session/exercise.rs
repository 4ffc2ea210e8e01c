use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Breathing,
    Meditation,
    Stretching,
}

/// A guided break exercise. Reference data, not user-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration_secs: u32,
    pub instructions: &'static [&'static str],
    pub kind: ExerciseKind,
}

impl Exercise {
    pub fn step_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn duration_min(&self) -> u32 {
        self.duration_secs / 60
    }

    /// Instruction shown after `elapsed_secs`. Steps advance on a fixed
    /// schedule, one every `duration / step_count` seconds, and the last
    /// step holds until the end.
    pub fn step_at(&self, elapsed_secs: u32) -> usize {
        let steps = self.step_count() as u64;
        if steps == 0 || self.duration_secs == 0 {
            return 0;
        }
        let index = u64::from(elapsed_secs) * steps / u64::from(self.duration_secs);
        index.min(steps - 1) as usize
    }
}

pub const EXERCISES: [Exercise; 3] = [
    Exercise {
        id: "breathing",
        name: "Respiración Profunda",
        description: "Inhala por 4 segundos, mantén por 4, exhala por 4",
        duration_secs: 120,
        instructions: &[
            "Siéntate cómodamente y relaja los hombros",
            "Inhala por la nariz durante 4 segundos",
            "Mantén el aire durante 4 segundos",
            "Exhala lentamente por la boca durante 4 segundos",
            "Repite el ciclo a tu propio ritmo",
        ],
        kind: ExerciseKind::Breathing,
    },
    Exercise {
        id: "meditation",
        name: "Meditación Rápida",
        description: "Cierra los ojos y enfócate en tu respiración",
        duration_secs: 300,
        instructions: &[
            "Cierra los ojos y adopta una postura estable",
            "Lleva la atención a tu respiración",
            "Observa tus pensamientos sin juzgarlos",
            "Vuelve suavemente a la respiración cuando te distraigas",
            "Abre los ojos poco a poco",
        ],
        kind: ExerciseKind::Meditation,
    },
    Exercise {
        id: "stretch",
        name: "Estiramiento",
        description: "Estira cuello, hombros y espalda suavemente",
        duration_secs: 180,
        instructions: &[
            "Inclina la cabeza hacia cada hombro",
            "Gira los hombros hacia atrás lentamente",
            "Entrelaza las manos y estira los brazos al frente",
            "Estira los brazos por encima de la cabeza",
            "Gira el torso suavemente a cada lado",
            "Sacude brazos y piernas para terminar",
        ],
        kind: ExerciseKind::Stretching,
    },
];

pub fn find_exercise(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}
