//! secop-cli library
//!
//! This crate provides the core functionality for the `secop-cli` binary.
//! Keep the crate root minimal; implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of the contract data pipeline:
//!
//! - [`extractor`] - Queries the SECOP dataset on a Socrata endpoint and builds the raw table
//! - [`transformer`] - Coerces, renames, normalizes, derives and recodes the raw table
//! - [`writer`] - Persists the processed table as Parquet or CSV
//! - [`cli`] - Command-line interface for orchestrating the workflow
//! - [`config`] - Pipeline configuration and TOML loading
//! - [`constants`] - Query predicate, rename table, wage table and recoding domains
//! - [`models`] - Region and output format types
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use secop_cli::{config::ResolvedConfig, errors::AppResult, extractor, transformer};
//!
//! # async fn example() -> AppResult<()> {
//! let config = ResolvedConfig::default();
//! let raw = extractor::extract_data(&config).await?;
//! let contracts = transformer::process_data(raw)?;
//! println!("{} contracts prepared", contracts.height());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod extractor;
pub mod models;
pub mod transformer;
pub mod writer;
