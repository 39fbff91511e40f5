//! Entity generators for the mock CRM dataset.
//!
//! Generators nest top-down, each owning the one below it:
//! - [`CompanyGenerator`]: One company per distinct name, with departments and news
//! - [`DepartmentGenerator`]: A sampled roster of users plus aggregate tasks
//! - [`UserGenerator`]: A user with same-company teammates and one interaction
//! - [`TaskGenerator`]: A task assigned to a user by name

pub mod company;
pub mod department;
pub mod task;
pub mod user;

pub use company::{CompanyGenConfig, CompanyGenerator, GeneratedCompany, GeneratedNewsItem};
pub use department::{DepartmentGenConfig, DepartmentGenerator, GeneratedDepartment};
pub use task::{GeneratedTask, TaskGenConfig, TaskGenerator};
pub use user::{GeneratedInteraction, GeneratedUser, TeammateSummary, UserGenConfig, UserGenerator};
