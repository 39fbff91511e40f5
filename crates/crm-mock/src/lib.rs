//! Mock CRM dataset generation.
//!
//! This crate builds a tree of plausible sample records (companies, their
//! departments, the people in them, their tasks and interactions, and company
//! news) from a pool of `(name, company, title)` contacts, and writes it as a
//! single JSON document for demos and downstream tests.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use crm_mock::prelude::*;
//!
//! let result = DatasetBuilder::new()
//!     .with_contacts(ContactPool::from_tuples([
//!         ("Ada Lovelace", "Acme", "Engineer"),
//!         ("Grace Hopper", "Acme", "Admiral"),
//!     ]))
//!     .with_seed(7)
//!     .build();
//!
//! JsonWriter::new("empresas_mock.json").write_companies(&result.companies)?;
//! ```

pub mod builders;
pub mod config;
pub mod error;
pub mod generators;
pub mod models;
pub mod output;
pub mod sources;

pub use error::{MockDataError, Result};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{DatasetBuilder, DatasetMetrics, DatasetResult};
    pub use crate::config::{ContactSource, RunConfig};
    pub use crate::generators::{
        CompanyGenerator, DepartmentGenerator, GeneratedCompany, GeneratedDepartment,
        GeneratedInteraction, GeneratedNewsItem, GeneratedTask, GeneratedUser, TaskGenerator,
        TeammateSummary, UserGenerator,
    };
    pub use crate::models::{Channel, TaskStatus};
    pub use crate::output::JsonWriter;
    pub use crate::sources::{Contact, ContactPool, SyntheticContacts};
    pub use crate::{MockDataError, Result};
}
