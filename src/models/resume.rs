use serde::{Deserialize, Serialize};

/// Resumen de un CV tal como lo entrega el catálogo
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    pub image_path: String,
    pub resume_path: String,
    pub feedback: Feedback,
}

/// Feedback generado por IA (solo lo que muestra la card)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub overall_score: u32,
}

/// Tono del badge de puntuación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScoreTone {
    Strong,
    Fair,
    Weak,
}

impl ScoreTone {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 69 => ScoreTone::Strong,
            s if s > 49 => ScoreTone::Fair,
            _ => ScoreTone::Weak,
        }
    }

    /// Clase CSS del badge
    pub fn class(self) -> &'static str {
        match self {
            ScoreTone::Strong => "score-badge score-strong",
            ScoreTone::Fair => "score-badge score-fair",
            ScoreTone::Weak => "score-badge score-weak",
        }
    }
}

impl ResumeSummary {
    /// Título visible de la card (empresa o "Resume" si no hay)
    pub fn display_title(&self) -> &str {
        self.company_name.as_deref().unwrap_or("Resume")
    }

    pub fn score_tone(&self) -> ScoreTone {
        ScoreTone::from_score(self.feedback.overall_score)
    }

    /// Ruta de detalle del CV
    pub fn detail_path(&self) -> String {
        format!("/resume/{}", self.id)
    }
}
