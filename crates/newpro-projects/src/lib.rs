//! # newpro-projects
//!
//! Project scaffolding library for the newpro CLI providing:
//! - A template registry (Go, Astro, C++)
//! - Generators behind a single dispatch contract
//! - The interactive wizard state machine that collects a request
//!
//! # Examples
//!
//! ## Drive the wizard without a terminal
//!
//! ```no_run
//! use camino::Utf8Path;
//! use newpro_projects::config::NewproConfig;
//! use newpro_projects::generate::NoProgress;
//! use newpro_projects::templates::TemplateRegistry;
//! use newpro_projects::wizard::{Input, Outcome, Wizard};
//!
//! # async fn example() {
//! let registry = TemplateRegistry::builtin(&NewproConfig::default());
//! let mut wizard = Wizard::new(&registry);
//!
//! wizard.handle(Input::Down);
//! wizard.handle(Input::Down);
//! wizard.handle(Input::Confirm); // C++
//! for c in "hello".chars() {
//!     wizard.handle(Input::Char(c));
//! }
//! if wizard.handle(Input::Confirm) == Outcome::Dispatch {
//!     wizard.dispatch(Utf8Path::new("."), &NoProgress).await;
//! }
//! # }
//! ```
//!
//! ## Generate directly
//!
//! ```no_run
//! use camino::Utf8Path;
//! use newpro_projects::config::NewproConfig;
//! use newpro_projects::generate::NoProgress;
//! use newpro_projects::templates::TemplateRegistry;
//! use newpro_projects::types::Flags;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = TemplateRegistry::builtin(&NewproConfig::default());
//! let flags = Flags::new().with("add_test", true);
//! registry
//!     .dispatch("go", Utf8Path::new("."), "my-tool", &flags, &NoProgress)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod process;
pub mod templates;
pub mod types;
pub mod wizard;

pub use error::{Error, Result};

// Re-export the main types for convenience
pub use config::NewproConfig;
pub use templates::{TemplateDescriptor, TemplateRegistry};
pub use wizard::{Input, Outcome, Step, Wizard};
