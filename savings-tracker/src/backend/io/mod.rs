//! # IO Module
//!
//! The interface layer between the presentation layer and the domain logic.
//!
//! Requests arrive as shared DTOs and raw form text. This layer parses the
//! text, calls the domain services, and maps domain results back to the
//! shared DTOs together with the notification the user should see.
//!
//! ## Key Responsibilities
//!
//! - **Input Parsing**: Amount and date text into domain values
//! - **Selection State**: Resetting exclusions when the active goal changes
//! - **Result Mapping**: Domain types into `shared` DTOs via `mappers`

pub mod commands;
pub mod mappers;

pub use commands::SavingsCommands;
