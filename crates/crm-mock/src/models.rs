//! Value types shared by the generated records.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Communication channel for tasks and interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Email,
    WhatsApp,
    Llamada,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::WhatsApp, Channel::Llamada];

    /// Returns the serialized string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::WhatsApp => "WhatsApp",
            Channel::Llamada => "Llamada",
        }
    }

    /// Picks a channel uniformly.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Task progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pendiente,
    #[serde(rename = "En proceso")]
    EnProceso,
    Terminado,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pendiente,
        TaskStatus::EnProceso,
        TaskStatus::Terminado,
    ];

    /// Returns the serialized string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pendiente => "Pendiente",
            TaskStatus::EnProceso => "En proceso",
            TaskStatus::Terminado => "Terminado",
        }
    }

    /// Picks a status uniformly.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Generates a version 4 UUID from the supplied RNG so seeded runs reproduce ids.
pub fn random_id(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.r#gen::<[u8; 16]>()).into_uuid()
}

/// Picks one entry of a non-empty constant table.
pub(crate) fn pick<'a, T: ?Sized>(table: &[&'a T], rng: &mut impl Rng) -> &'a T {
    table[rng.gen_range(0..table.len())]
}

/// `YYYY-MM-DD` calendar dates.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;

    const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

    pub fn parse(text: &str) -> Result<Date, time::error::Parse> {
        Date::parse(text, FORMAT)
    }

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date.format(FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }
}

/// RFC 3339 timestamps.
pub mod rfc3339 {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    pub fn serialize<S: Serializer>(
        timestamp: &OffsetDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let text = timestamp
            .format(&Rfc3339)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OffsetDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&text, &Rfc3339).map_err(serde::de::Error::custom)
    }
}
