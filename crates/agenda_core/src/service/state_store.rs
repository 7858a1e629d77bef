//! Persisted agenda state use cases.
//!
//! # Responsibility
//! - Map `AgendaState` onto four independently keyed JSON blobs.
//! - Degrade to hard-coded defaults whenever stored data is missing or
//!   unreadable.
//! - Gate destructive reset behind explicit confirmation.
//!
//! # Invariants
//! - `load` never fails; each blob falls back to its own default.
//! - `save` writes all four blobs atomically.
//! - Save followed by load reproduces an equal `AgendaState`.

use crate::config::StorageNamespace;
use crate::editor::agenda_list::AgendaList;
use crate::model::defaults::{
    default_agenda, default_meeting_info, default_officers, default_reminders,
};
use crate::model::state::AgendaState;
use crate::repo::kv_repo::{KvError, KvRepository};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from state store writes.
#[derive(Debug)]
pub enum StoreError {
    /// Repository failure.
    Kv(KvError),
    /// In-memory value could not be encoded.
    Encode(serde_json::Error),
    /// Reset was requested without user confirmation.
    ResetNotConfirmed,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kv(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode agenda state: {err}"),
            Self::ResetNotConfirmed => write!(f, "reset requires explicit confirmation"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kv(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::ResetNotConfirmed => None,
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// One of the four persisted blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateSection {
    Info,
    Agenda,
    Officers,
    Reminders,
}

impl StateSection {
    pub const ALL: [StateSection; 4] = [Self::Info, Self::Agenda, Self::Officers, Self::Reminders];

    /// Storage key inside the namespace.
    pub fn key(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Agenda => "agenda",
            Self::Officers => "officers",
            Self::Reminders => "reminders",
        }
    }
}

/// Why a section was loaded from defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Nothing stored under the key.
    Missing,
    /// Stored text did not decode into the expected shape.
    Undecodable(String),
    /// The store itself could not be read.
    ReadFailed(String),
}

/// Outcome of `StateStore::load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedState {
    pub state: AgendaState,
    /// Sections that were filled from defaults, in `StateSection::ALL` order.
    pub fallbacks: Vec<(StateSection, FallbackReason)>,
}

impl LoadedState {
    /// Whether every section came from the store.
    pub fn is_complete(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

/// Explicit user answer to the reset prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetConfirmation {
    Confirmed,
    NotConfirmed,
}

impl From<bool> for ResetConfirmation {
    fn from(value: bool) -> Self {
        if value {
            Self::Confirmed
        } else {
            Self::NotConfirmed
        }
    }
}

/// Namespaced persistence facade for `AgendaState`.
pub struct StateStore<R: KvRepository> {
    repo: R,
    namespace: StorageNamespace,
}

impl<R: KvRepository> StateStore<R> {
    pub fn new(repo: R, namespace: StorageNamespace) -> Self {
        Self { repo, namespace }
    }

    pub fn namespace(&self) -> &StorageNamespace {
        &self.namespace
    }

    /// Loads the persisted state, filling gaps from defaults.
    pub fn load(&self) -> LoadedState {
        let mut fallbacks = Vec::new();
        let info = self.load_section(StateSection::Info, default_meeting_info, &mut fallbacks);
        let agenda = self.load_section(
            StateSection::Agenda,
            || AgendaList::from_fresh(default_agenda()),
            &mut fallbacks,
        );
        let officers =
            self.load_section(StateSection::Officers, default_officers, &mut fallbacks);
        let reminders =
            self.load_section(StateSection::Reminders, default_reminders, &mut fallbacks);

        info!(
            "event=state_load module=store status=ok namespace={} rows={} fallbacks={}",
            self.namespace,
            agenda.len(),
            fallbacks.len()
        );
        LoadedState {
            state: AgendaState {
                info,
                agenda,
                officers,
                reminders,
            },
            fallbacks,
        }
    }

    /// Writes all four sections in one transaction.
    ///
    /// # Errors
    /// - Returns `StoreError::Encode` when a section cannot be serialized.
    /// - Returns `StoreError::Kv` when the write fails; nothing is persisted.
    pub fn save(&self, state: &AgendaState) -> StoreResult<()> {
        let entries = [
            (StateSection::Info.key(), serde_json::to_string(&state.info)?),
            (StateSection::Agenda.key(), serde_json::to_string(&state.agenda)?),
            (StateSection::Officers.key(), serde_json::to_string(&state.officers)?),
            (StateSection::Reminders.key(), serde_json::to_string(&state.reminders)?),
        ];
        match self.repo.put_many(self.namespace.as_str(), &entries) {
            Ok(()) => {
                info!(
                    "event=state_save module=store status=ok namespace={} rows={}",
                    self.namespace,
                    state.agenda.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=state_save module=store status=error namespace={} error={}",
                    self.namespace, err
                );
                Err(err.into())
            }
        }
    }

    /// Clears the namespace and returns fresh defaults.
    ///
    /// # Errors
    /// - Returns `StoreError::ResetNotConfirmed` without touching the store
    ///   unless `confirmation` is `Confirmed`.
    pub fn reset(&self, confirmation: ResetConfirmation) -> StoreResult<AgendaState> {
        if confirmation != ResetConfirmation::Confirmed {
            info!(
                "event=state_reset module=store status=cancelled namespace={}",
                self.namespace
            );
            return Err(StoreError::ResetNotConfirmed);
        }
        let removed = self.repo.clear_namespace(self.namespace.as_str())?;
        info!(
            "event=state_reset module=store status=ok namespace={} removed_keys={}",
            self.namespace, removed
        );
        Ok(AgendaState::defaults())
    }

    fn load_section<T: DeserializeOwned>(
        &self,
        section: StateSection,
        default: impl FnOnce() -> T,
        fallbacks: &mut Vec<(StateSection, FallbackReason)>,
    ) -> T {
        let reason = match self.repo.get(self.namespace.as_str(), section.key()) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => return value,
                Err(err) => {
                    warn!(
                        "event=state_load module=store status=fallback namespace={} key={} reason=undecodable error={}",
                        self.namespace,
                        section.key(),
                        err
                    );
                    FallbackReason::Undecodable(err.to_string())
                }
            },
            Ok(None) => FallbackReason::Missing,
            Err(err) => {
                error!(
                    "event=state_load module=store status=fallback namespace={} key={} reason=read_failed error={}",
                    self.namespace,
                    section.key(),
                    err
                );
                FallbackReason::ReadFailed(err.to_string())
            }
        };
        fallbacks.push((section, reason));
        default()
    }
}
