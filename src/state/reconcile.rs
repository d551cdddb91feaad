//! Reconciles a staged user type against the signed-in user record.
//!
//! DESIGN
//! ======
//! An explicit state machine keyed by the authenticated-user instance:
//!
//! - `Idle`: nothing attempted for the current instance.
//! - `Attempted`: an update was issued; no further attempts this instance.
//! - `Cleared`: the staged value was consumed (matched or applied).
//!
//! A new instance starts whenever a user appears after an absence or the
//! user id changes. The machine never performs I/O; it returns a
//! `ReconcileAction` for the caller to execute and is told the outcome via
//! [`Reconciler::finish`]. Outcomes for an instance that has since ended are
//! reported as `Stale` and must be ignored.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use crate::net::error::ApiError;
use crate::net::types::{User, UserType};
use crate::state::preference::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Attempted,
    Cleared,
}

/// Identifies the update request issued for one user instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconcileTicket {
    epoch: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReconcileAction {
    /// Issue `PATCH /api/auth/user/type` with this value.
    UpdateUserType {
        ticket: ReconcileTicket,
        user_type: UserType,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Update accepted; staged value cleared. Caller invalidates the user.
    Applied,
    /// Update rejected; staged value kept for the next load.
    Failed(ApiError),
    /// The instance the update was issued for is gone.
    Stale,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Instance {
    user_id: String,
    epoch: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciler {
    instance: Option<Instance>,
    phase: Phase,
    in_flight: Option<ReconcileTicket>,
    epochs: u64,
}

impl Reconciler {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Feed the latest view of the current-user query.
    ///
    /// Returns an action only the first time a differing, valid staged value
    /// is seen for an authenticated instance.
    pub fn observe(
        &mut self,
        user: Option<&User>,
        loading: bool,
        store: &mut dyn PreferenceStore,
    ) -> Option<ReconcileAction> {
        let Some(user) = user else {
            self.end_instance();
            return None;
        };
        if loading {
            return None;
        }

        let epoch = self.enter(&user.id);
        if self.phase != Phase::Idle {
            return None;
        }

        // Unknown values are left in place for whatever wrote them.
        let staged = UserType::parse(&store.get()?)?;

        if user.user_type == Some(staged) {
            store.clear();
            self.phase = Phase::Cleared;
            return None;
        }

        let ticket = ReconcileTicket { epoch };
        self.phase = Phase::Attempted;
        self.in_flight = Some(ticket);
        Some(ReconcileAction::UpdateUserType {
            ticket,
            user_type: staged,
        })
    }

    /// Report the outcome of a previously returned update.
    ///
    /// The staged value is cleared before `Applied` is returned, so the
    /// caller's invalidation always follows the success handling.
    pub fn finish(
        &mut self,
        ticket: ReconcileTicket,
        result: Result<(), ApiError>,
        store: &mut dyn PreferenceStore,
    ) -> Completion {
        if self.in_flight != Some(ticket) {
            return Completion::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(()) => {
                store.clear();
                self.phase = Phase::Cleared;
                Completion::Applied
            }
            Err(err) => Completion::Failed(err),
        }
    }

    fn enter(&mut self, user_id: &str) -> u64 {
        if let Some(instance) = &self.instance {
            if instance.user_id == user_id {
                return instance.epoch;
            }
        }
        self.epochs += 1;
        self.instance = Some(Instance {
            user_id: user_id.to_owned(),
            epoch: self.epochs,
        });
        self.phase = Phase::Idle;
        self.in_flight = None;
        self.epochs
    }

    fn end_instance(&mut self) {
        self.instance = None;
        self.phase = Phase::Idle;
        self.in_flight = None;
    }
}
