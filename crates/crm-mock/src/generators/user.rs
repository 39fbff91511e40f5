//! User generation with teammates and a recent interaction.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

use super::task::{GeneratedTask, random_kpis};
use crate::models::{Channel, iso_date, pick, random_id, rfc3339};
use crate::sources::{Contact, ContactPool};

/// Generated user (a contact with CRM attributes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedUser {
    pub id: Uuid,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "puesto")]
    pub title: String,
    #[serde(rename = "compañia")]
    pub company: String,
    #[serde(rename = "es_cliente")]
    pub is_client: bool,
    #[serde(rename = "es_proveedor")]
    pub is_supplier: bool,
    #[serde(rename = "equipo")]
    pub team: Vec<TeammateSummary>,
    #[serde(rename = "a_cargo_de_equipo")]
    pub leads_team: bool,
    /// Filled by the department generator once the roster exists.
    #[serde(rename = "status_tareas")]
    pub task_statuses: Vec<GeneratedTask>,
    #[serde(rename = "notas_personales")]
    pub personal_notes: String,
    #[serde(rename = "ultimas_interacciones")]
    pub interactions: Vec<GeneratedInteraction>,
}

/// Snapshot of a same-company colleague.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeammateSummary {
    pub id: Uuid,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "puesto")]
    pub title: String,
}

/// Generated communication record embedded on a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedInteraction {
    #[serde(rename = "fecha", with = "rfc3339")]
    pub occurred_at: OffsetDateTime,
    #[serde(rename = "canal")]
    pub channel: Channel,
    #[serde(rename = "participantes")]
    pub participants: Vec<String>,
    #[serde(rename = "presupuesto")]
    pub budget: u32,
    #[serde(rename = "requerimientos")]
    pub requirement: String,
    pub kpis: Vec<String>,
    #[serde(rename = "datos")]
    pub extra: BTreeMap<String, Value>,
    #[serde(rename = "plazo", with = "iso_date")]
    pub due_date: Date,
}

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Upper bound on sampled teammates.
    pub max_teammates: usize,
    /// How many days before generation time the interaction happened.
    pub interaction_days_ago: RangeInclusive<i64>,
    /// Days from generation time to the interaction's due date.
    pub interaction_due_in_days: RangeInclusive<i64>,
    /// Interaction budget range in currency units.
    pub interaction_budget: RangeInclusive<u32>,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            max_teammates: 3,
            interaction_days_ago: 0..=7,
            interaction_due_in_days: 1..=20,
            interaction_budget: 8_000..=55_000,
        }
    }
}

const INTERACTION_REQUIREMENTS: &[&str] = &[
    "Informe de cumplimiento global",
    "Plan maestro de cadena de suministro",
    "Estrategia de sostenibilidad",
    "Arquitectura de IA generativa",
];

/// Generates users from contacts in a pool.
pub struct UserGenerator<'a> {
    pool: &'a ContactPool,
    config: UserGenConfig,
}

impl<'a> UserGenerator<'a> {
    /// Creates a new user generator with default configuration.
    pub fn new(pool: &'a ContactPool) -> Self {
        Self {
            pool,
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(pool: &'a ContactPool, config: UserGenConfig) -> Self {
        Self { pool, config }
    }

    /// Generates a user for `contact`, with an empty task list.
    pub fn generate(
        &self,
        contact: &Contact,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> GeneratedUser {
        let id = random_id(rng);
        let team = self.sample_teammates(contact, rng);

        GeneratedUser {
            id,
            name: contact.name.clone(),
            title: contact.title.clone(),
            company: contact.company.clone(),
            is_client: rng.r#gen(),
            is_supplier: rng.r#gen(),
            team,
            leads_team: rng.r#gen(),
            task_statuses: Vec::new(),
            personal_notes: format!("Prefers to be called {}.", contact.first_name()),
            interactions: vec![self.generate_interaction(&contact.name, base_time, rng)],
        }
    }

    /// Samples up to `max_teammates` distinct colleagues, never the contact itself.
    fn sample_teammates(&self, contact: &Contact, rng: &mut impl Rng) -> Vec<TeammateSummary> {
        let candidates = self.pool.teammates_of(&contact.name, &contact.company);
        let max = self.config.max_teammates.min(candidates.len());
        if max == 0 {
            return Vec::new();
        }

        let size = rng.gen_range(1..=max);
        let picked: Vec<&Contact> = candidates.choose_multiple(rng, size).copied().collect();

        picked
            .into_iter()
            .map(|mate| TeammateSummary {
                id: random_id(rng),
                name: mate.name.clone(),
                title: mate.title.clone(),
            })
            .collect()
    }

    /// Generates the user's most recent interaction.
    fn generate_interaction(
        &self,
        name: &str,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> GeneratedInteraction {
        let days_ago = rng.gen_range(self.config.interaction_days_ago.clone());
        let channel = Channel::random(rng);

        // Counterpart may work anywhere, unlike teammates
        let counterpart = self
            .pool
            .choose(rng)
            .map_or_else(|| name.to_string(), |c| c.name.clone());

        let budget = rng.gen_range(self.config.interaction_budget.clone());
        let requirement = pick(INTERACTION_REQUIREMENTS, rng).to_string();
        let kpis = random_kpis(rng);
        let due_in = rng.gen_range(self.config.interaction_due_in_days.clone());

        let mut extra = BTreeMap::new();
        extra.insert(
            "otro_dato".to_string(),
            Value::String("Valor mock".to_string()),
        );

        GeneratedInteraction {
            occurred_at: base_time - Duration::days(days_ago),
            channel,
            participants: vec![name.to_string(), counterpart],
            budget,
            requirement,
            kpis,
            extra,
            due_date: (base_time + Duration::days(due_in)).date(),
        }
    }
}
