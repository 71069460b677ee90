// src/domain/favorite.rs
//! Per-listing favorite toggle.
//!
//! The button shows the desired value while the store write is in flight.
//! If the write fails, it rolls back to the value it had before the toggle.
//!
//! ```text
//! Confirmed(v) --begin--> Pending { previous: v, desired: !v }
//! Pending      --confirm--> Confirmed(desired)
//! Pending      --fail-----> Failed { restored: previous, reason }
//! Failed(r)    --begin--> Pending { previous: r, desired: !r }
//! ```

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteState {
    Confirmed(bool),
    Pending { previous: bool, desired: bool },
    Failed { restored: bool, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FavoriteTransitionError {
    #[error("a favorite update is already in flight")]
    AlreadyPending,
    #[error("no favorite update is in flight")]
    NotPending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub listing_id: i64,
    state: FavoriteState,
}

impl FavoriteToggle {
    pub fn confirmed(listing_id: i64, favorited: bool) -> Self {
        Self {
            listing_id,
            state: FavoriteState::Confirmed(favorited),
        }
    }

    pub fn state(&self) -> &FavoriteState {
        &self.state
    }

    /// The value the UI shows right now (optimistic while pending).
    pub fn shown(&self) -> bool {
        match &self.state {
            FavoriteState::Confirmed(v) => *v,
            FavoriteState::Pending { desired, .. } => *desired,
            FavoriteState::Failed { restored, .. } => *restored,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, FavoriteState::Pending { .. })
    }

    /// Start a toggle. Returns the desired value the store should be set to.
    pub fn begin(&mut self) -> Result<bool, FavoriteTransitionError> {
        let previous = match &self.state {
            FavoriteState::Pending { .. } => return Err(FavoriteTransitionError::AlreadyPending),
            FavoriteState::Confirmed(v) => *v,
            FavoriteState::Failed { restored, .. } => *restored,
        };
        let desired = !previous;
        self.state = FavoriteState::Pending { previous, desired };
        Ok(desired)
    }

    pub fn confirm(&mut self) -> Result<(), FavoriteTransitionError> {
        match self.state {
            FavoriteState::Pending { desired, .. } => {
                self.state = FavoriteState::Confirmed(desired);
                Ok(())
            }
            _ => Err(FavoriteTransitionError::NotPending),
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), FavoriteTransitionError> {
        match self.state {
            FavoriteState::Pending { previous, .. } => {
                self.state = FavoriteState::Failed {
                    restored: previous,
                    reason: reason.into(),
                };
                Ok(())
            }
            _ => Err(FavoriteTransitionError::NotPending),
        }
    }
}
