//! # formwright-builder-ratatui
//!
//! Terminal form builder for formwright.
//!
//! Shows the field list next to an editor, previews and publishes the form,
//! imports a pasted schema and lets you take the form in place. All state
//! changes go through [`formwright::Session`]; this crate only maps keys to
//! actions and draws the result.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use formwright_builder_ratatui::{BuilderConfig, FormBuilder};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = BuilderConfig::new()
//!         .with_title("Signup")
//!         .with_fields(example_forms::contact_form());
//!     let state = FormBuilder::with_config(config).run()?;
//!     println!("{} fields", state.fields().len());
//!     Ok(())
//! }
//! ```

mod backend;
mod config;
mod host;
pub mod keymap;
pub mod view;

pub use backend::{BuilderError, FormBuilder, load_schema};
pub use config::{BuilderConfig, Theme};
pub use host::TerminalHost;
