//! # SIPESC CLI
//!
//! Terminal counterpart of the web session: sign in with a demo account,
//! keep the session in a JSON file and ask the access evaluator questions.
//!
//! ## Usage
//!
//! ```ignore
//! use sipesc_cli::commands::{self, Check};
//!
//! let session = commands::login(&sessions, &jwt_config, "conselho@sipesc.gov.br", "x").await?;
//! let allowed = commands::evaluate(Some(&session.user), &Check::School { id: "esc-002".into() });
//! ```

pub mod commands;
