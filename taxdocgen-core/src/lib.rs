//! # taxdocgen
//!
//! Synthetic PDF tax-document fixtures for testing document-extraction
//! pipelines.
//!
//! The crate renders single-page W-2, 1099-NEC, 1099-INT, 1099-DIV and
//! 1098 forms with literal names and dollar amounts, at fixed absolute
//! coordinates, and reports what it drew through an in-memory manifest.
//! The point is not fidelity to the IRS layouts but stable, fully
//! deterministic fixtures: the same requests always produce the same
//! files and the same manifest.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taxdocgen::{standard_requests, FixtureGenerator, Result};
//!
//! # fn main() -> Result<()> {
//! let generator = FixtureGenerator::new("docs");
//! let manifest = generator.generate(&standard_requests())?;
//! assert_eq!(manifest.len(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`forms`] - one layout routine per form type, plus the painter
//! - [`generator`] - the driver that renders a request list to disk
//! - [`manifest`] - per-document field summaries
//! - [`money`] - dollar formatting and the fixed derived-value ratios
//! - [`request`] - the immutable per-document request
//!
//! ## Degraded fixtures
//!
//! Two quality flags exist for testing extraction robustness: `Blank`
//! renders only captions (an empty template), `LowQuality` lightens
//! selected value text to mimic a bad scan. See [`request::Quality`].

pub mod error;
pub mod forms;
pub mod generator;
pub mod manifest;
pub mod money;
pub mod request;

pub use error::{FixtureError, Result};
pub use forms::{FormLayout, FormType};
pub use generator::{standard_requests, FixtureGenerator};
pub use manifest::ManifestEntry;
pub use request::{DocumentRequest, Quality};
