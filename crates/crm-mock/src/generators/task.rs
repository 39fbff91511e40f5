//! Task generation.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

use crate::models::{Channel, TaskStatus, iso_date, pick, random_id};

/// Generated task assigned to a user by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTask {
    pub id: Uuid,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "usuario_responsable")]
    pub responsible: String,
    #[serde(rename = "estatus")]
    pub status: TaskStatus,
    #[serde(rename = "requerimientos")]
    pub requirement: String,
    pub kpis: Vec<String>,
    #[serde(rename = "plazo", with = "iso_date")]
    pub due_date: Date,
    #[serde(rename = "canal")]
    pub channel: Channel,
    #[serde(rename = "presupuesto")]
    pub budget: u32,
    #[serde(rename = "notas")]
    pub notes: String,
}

/// Configuration for task generation.
#[derive(Debug, Clone)]
pub struct TaskGenConfig {
    /// Budget range in currency units.
    pub budget: RangeInclusive<u32>,
    /// Days from generation time to the due date.
    pub due_in_days: RangeInclusive<i64>,
}

impl Default for TaskGenConfig {
    fn default() -> Self {
        Self {
            budget: 12_000..=80_000,
            due_in_days: 2..=30,
        }
    }
}

const DEALS: &[&str] = &[
    "Global beverage supply optimization program",
    "North America retail analytics deployment",
    "Prime fulfillment automation initiative",
    "Cloud modernization for enterprise productivity",
    "AI-driven customer care rollout",
    "Gigafactory capacity expansion",
    "5G enterprise connectivity bundle",
    "Personalized streaming recommendation engine",
    "Sustainable packaging transformation",
];

const TASK_REQUIREMENTS: &[&str] = &[
    "Auditoría de ciberseguridad",
    "Integración ERP global",
    "Evaluación ESG",
    "Arquitectura de datos unificada",
];

const TASK_NOTES: &[&str] = &["Prioridad alta", "Seguimiento semanal"];

/// KPI label groups shared by tasks and interactions.
const KPI_GROUPS: &[&[&str]] = &[
    &["Revenue growth"],
    &["Operating margin"],
    &["Customer satisfaction"],
    &["Supply chain resilience"],
    &["Network uptime"],
    &["Subscriber retention"],
];

/// Picks a KPI group.
pub(crate) fn random_kpis(rng: &mut impl Rng) -> Vec<String> {
    pick(KPI_GROUPS, rng)
        .iter()
        .map(|kpi| kpi.to_string())
        .collect()
}

/// Generates tasks.
pub struct TaskGenerator {
    config: TaskGenConfig,
}

impl TaskGenerator {
    /// Creates a new task generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: TaskGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: TaskGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single task for the user called `responsible`.
    pub fn generate(
        &self,
        responsible: &str,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> GeneratedTask {
        let due_in = rng.gen_range(self.config.due_in_days.clone());

        GeneratedTask {
            id: random_id(rng),
            title: pick(DEALS, rng).to_string(),
            responsible: responsible.to_string(),
            status: TaskStatus::random(rng),
            requirement: pick(TASK_REQUIREMENTS, rng).to_string(),
            kpis: random_kpis(rng),
            due_date: (base_time + Duration::days(due_in)).date(),
            channel: Channel::random(rng),
            budget: rng.gen_range(self.config.budget.clone()),
            notes: pick(TASK_NOTES, rng).to_string(),
        }
    }

    /// Generates `count` independent tasks for the same user.
    pub fn generate_batch(
        &self,
        responsible: &str,
        count: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedTask> {
        (0..count)
            .map(|_| self.generate(responsible, base_time, rng))
            .collect()
    }
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self::new()
    }
}
