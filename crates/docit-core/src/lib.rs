//! DocIt Core Library
//!
//! Command-driven record manager for a small clinic: patients, their medical
//! history, appointments and the prescriptions issued at them.
//!
//! # Architecture
//!
//! ```text
//!   user input line
//!         │
//!         ▼
//!   ┌───────────┐  Command   ┌───────────────────────────────┐
//!   │  parser   │ ─────────▶ │ Command::execute(&mut store)  │
//!   └───────────┘            └───────────────┬───────────────┘
//!                                            │
//!                        ┌───────────────────▼───────────────────┐
//!                        │              RecordStore              │
//!                        │  UniqueList<Patient>                  │
//!                        │  UniqueList<Appointment>  (cascade)   │
//!                        │  filtered views (pull-based)          │
//!                        └───────────────────┬───────────────────┘
//!                                            │ snapshot
//!                                            ▼
//!                                      JsonStorage
//! ```
//!
//! # Core Principle
//!
//! **Indices always refer to the currently displayed list.** A command that
//! takes an `INDEX` resolves it against the filtered view, never the full
//! collection.
//!
//! # Modules
//!
//! - [`models`]: Value types and entities (Patient, Appointment, Prescription)
//! - [`store`]: Uniqueness-enforcing lists, filters, the record store
//! - [`logic`]: Commands, the input parser and the logic manager
//! - [`storage`]: JSON persistence and user preferences
//! - [`index`]: One-based / zero-based list positions

pub mod index;
pub mod logic;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use index::Index;
pub use logic::commands::{Command, CommandError, CommandResult};
pub use logic::parser::{parse_command, ParseError};
pub use logic::{LogicError, LogicManager};
pub use models::{Appointment, MedicalEntry, Patient, PatientId, Prescription};
pub use storage::{JsonStorage, Storage, StorageError, UserPrefs};
pub use store::{ModelError, RecordStore, Snapshot, UniqueList};
