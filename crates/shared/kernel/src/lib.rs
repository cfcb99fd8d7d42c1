//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts the layered settings loader and re-exports the domain.
//!
//! ## Config loading
//! ```rust,no_run
//! use pgen_kernel::config::load_config;
//! use pgen_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("pgen.toml")).unwrap_or_default();
//! assert!(cfg.generator.length() >= 6);
//! ```
pub mod config;

pub use pgen_domain as domain;
