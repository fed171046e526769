// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::seed::seed_state;
use crate::state::{AppState, TransitionResult};
use roster_audit::AuditEvent;
use tracing::{info, warn};

/// An owned handle on the roster.
///
/// The store holds the current state and the audit trail of every command
/// it has applied. Each store is independent; there is no shared instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStore {
    state: AppState,
    history: Vec<AuditEvent>,
}

impl RosterStore {
    /// Creates a store holding `state`.
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    /// Creates a store holding the seed roster.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_state())
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the audit events of all applied commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &[AuditEvent] {
        &self.history
    }

    /// Applies a command and replaces the current state with the result.
    ///
    /// On error the current state and history are left untouched.
    ///
    /// # Errors
    ///
    /// Returns any error produced by [`apply`].
    pub fn dispatch(&mut self, command: Command) -> Result<AuditEvent, CoreError> {
        let name: &'static str = command.name();
        let result: TransitionResult = apply(&self.state, command).inspect_err(|err| {
            warn!("Rejected {}: {}", name, err);
        })?;

        info!("{}", result.audit_event);
        self.state = result.new_state;
        self.history.push(result.audit_event.clone());
        Ok(result.audit_event)
    }

    /// Consumes the store and returns its state.
    #[must_use]
    pub fn into_state(self) -> AppState {
        self.state
    }
}
