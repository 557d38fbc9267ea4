//! Command pipeline: parse a line, run it against the store, persist the result.

pub mod commands;
pub mod parser;

use std::time::Instant;

use log::{error, info, warn};
use thiserror::Error;

use crate::models::{Appointment, Patient};
use crate::storage::{Storage, StorageError, StorageResult};
use crate::store::{AppointmentFilter, FilteredView, PatientFilter, RecordStore};
use commands::{CommandError, CommandResult};
use parser::{parse_command, ParseError};

/// Errors surfaced to the front end for one line of input.
#[derive(Error, Debug)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not save data file: {0}")]
    Storage(#[from] StorageError),
}

pub type LogicResult<T> = Result<T, LogicError>;

/// Owns the record store and writes it back through `S` after every change.
pub struct LogicManager<S: Storage> {
    store: RecordStore,
    storage: S,
}

impl<S: Storage> LogicManager<S> {
    pub fn new(store: RecordStore, storage: S) -> Self {
        Self { store, storage }
    }

    /// Load the store from `storage`.
    pub fn open(storage: S) -> StorageResult<Self> {
        let store = storage.load_store()?;
        info!(
            "event=store_load module=logic status=ok patients={} appointments={}",
            store.patients().len(),
            store.appointments().len()
        );
        Ok(Self::new(store, storage))
    }

    /// Parse and run one line of user input.
    ///
    /// A failed save is reported as [`LogicError::Storage`] but the in-memory
    /// change is kept.
    pub fn execute(&mut self, input: &str) -> LogicResult<CommandResult> {
        let started = Instant::now();

        let command = parse_command(input).map_err(|e| {
            warn!("event=command_parse module=logic status=error error={:?}", e);
            e
        })?;
        let word = command.command_word();
        info!("event=command_run module=logic status=start command={}", word);

        let result = command.execute(&mut self.store).map_err(|e| {
            warn!(
                "event=command_run module=logic status=error command={} error={:?}",
                word, e
            );
            e
        })?;

        if command.modifies_records() {
            if let Err(e) = self.storage.save(&self.store.snapshot()) {
                error!(
                    "event=store_save module=logic status=error command={} error={}",
                    word, e
                );
                return Err(e.into());
            }
        }

        info!(
            "event=command_run module=logic status=ok command={} duration_ms={}",
            word,
            started.elapsed().as_millis()
        );
        Ok(result)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn filtered_patients(&self) -> FilteredView<'_, Patient, PatientFilter> {
        self.store.filtered_patients()
    }

    pub fn filtered_appointments(&self) -> FilteredView<'_, Appointment, AppointmentFilter> {
        self.store.filtered_appointments()
    }
}
