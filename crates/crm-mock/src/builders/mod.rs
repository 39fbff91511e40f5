//! Fluent builder APIs for datasets.
//!
//! The [`DatasetBuilder`] picks a contact pool, configures every generator,
//! and runs the company-level driver.

mod dataset;

pub use dataset::{DatasetBuilder, DatasetMetrics, DatasetResult};
