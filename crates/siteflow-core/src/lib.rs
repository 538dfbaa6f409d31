//! Core domain model for siteflow
//!
//! This crate holds the provider-agnostic types the pipeline operates on:
//! the site configuration, the ledger of resource identifiers captured
//! during a run, and the outcome/status types reported back to the
//! operator. Provider crates (currently `siteflow-aws`) depend on this
//! crate, never the other way around.

pub mod domain;
pub mod error;
pub mod ledger;
pub mod step;

// Re-exports
pub use domain::SiteConfig;
pub use error::{DomainError, Result};
pub use ledger::ResourceLedger;
pub use step::{
    ActivateOutcome, BucketState, DeployOutcome, StatusSnapshot, Step, ValidationRecord,
};
