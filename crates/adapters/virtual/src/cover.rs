//! Virtual cover — applies service calls instantly to an in-memory snapshot.

use std::sync::{Mutex, MutexGuard, PoisonError};

use coverctl_domain::cover::{
    AttributeValue, CURRENT_POSITION, CURRENT_TILT_POSITION, CoverFeature, CoverService,
    CoverState, MAX_POSITION, MIN_POSITION, ServiceCall, SupportedFeatures, clamp_position,
};

use crate::config::VirtualCoverConfig;
use crate::error::VirtualError;

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    state: CoverState,
    position: i32,
    tilt: i32,
}

/// A simulated cover.
///
/// Service calls take effect immediately: there is no travel time, so the
/// cover is never reported as `opening` or `closing` unless set explicitly.
pub struct VirtualCover {
    entity_id: String,
    features: SupportedFeatures,
    snapshot: Mutex<Snapshot>,
    history: Mutex<Vec<ServiceCall>>,
}

impl VirtualCover {
    #[must_use]
    pub fn new(config: VirtualCoverConfig) -> Self {
        Self {
            entity_id: config.entity_id,
            features: config.features,
            snapshot: Mutex::new(Snapshot {
                state: config.state,
                position: clamp_position(config.position),
                tilt: clamp_position(config.tilt),
            }),
            history: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn features(&self) -> SupportedFeatures {
        self.features
    }

    #[must_use]
    pub fn state(&self) -> CoverState {
        self.lock_snapshot().state
    }

    #[must_use]
    pub fn position(&self) -> i32 {
        self.lock_snapshot().position
    }

    #[must_use]
    pub fn tilt(&self) -> i32 {
        self.lock_snapshot().tilt
    }

    /// Force a reported state, e.g. to simulate a cover caught mid-travel.
    pub fn set_state(&self, state: CoverState) {
        self.lock_snapshot().state = state;
    }

    /// Every service call accepted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<ServiceCall> {
        lock(&self.history).clone()
    }

    /// Read an attribute the way a platform entity would expose it.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<AttributeValue> {
        let snapshot = *self.lock_snapshot();
        match name {
            CURRENT_POSITION if self.reports_position() => Some(snapshot.position.into()),
            CURRENT_TILT_POSITION if self.reports_tilt() => Some(snapshot.tilt.into()),
            _ => None,
        }
    }

    /// Apply a service call.
    ///
    /// # Errors
    ///
    /// Returns [`VirtualError::Unsupported`] when the cover lacks the
    /// capability, or [`VirtualError::MissingParameter`] when a positional
    /// service has no integer parameter. `stop_cover` on a cover without
    /// `stop` is accepted and ignored.
    pub fn apply(&self, call: &ServiceCall) -> Result<(), VirtualError> {
        let required = match call.service {
            CoverService::SetCoverPosition => CoverFeature::SetPosition,
            CoverService::OpenCover => CoverFeature::Open,
            CoverService::CloseCover => CoverFeature::Close,
            CoverService::StopCover => CoverFeature::Stop,
            CoverService::SetCoverTiltPosition => CoverFeature::SetTiltPosition,
        };
        if !self.features.contains(required) {
            if call.service == CoverService::StopCover {
                tracing::debug!(
                    entity_id = %self.entity_id,
                    "cover cannot stop, ignoring stop_cover"
                );
                return Ok(());
            }
            return Err(VirtualError::Unsupported {
                entity_id: self.entity_id.clone(),
                service: call.service,
            });
        }

        let mut snapshot = self.lock_snapshot();
        match call.service {
            CoverService::SetCoverPosition => {
                let position = int_param(call, "position")?;
                snapshot.position = clamp_position(position);
                snapshot.state = state_for(snapshot.position);
            }
            CoverService::OpenCover => {
                snapshot.position = MAX_POSITION;
                snapshot.state = CoverState::Open;
            }
            CoverService::CloseCover => {
                snapshot.position = MIN_POSITION;
                snapshot.state = CoverState::Closed;
            }
            CoverService::StopCover => {
                if snapshot.state.is_moving() {
                    snapshot.state = state_for(snapshot.position);
                }
            }
            CoverService::SetCoverTiltPosition => {
                snapshot.tilt = clamp_position(int_param(call, "tilt_position")?);
            }
        }
        drop(snapshot);

        lock(&self.history).push(call.clone());
        Ok(())
    }

    fn reports_position(&self) -> bool {
        self.features.contains(CoverFeature::SetPosition)
    }

    fn reports_tilt(&self) -> bool {
        self.features.contains(CoverFeature::SetTiltPosition)
            || self.features.contains(CoverFeature::OpenTilt)
            || self.features.contains(CoverFeature::CloseTilt)
    }

    fn lock_snapshot(&self) -> MutexGuard<'_, Snapshot> {
        lock(&self.snapshot)
    }
}

fn state_for(position: i32) -> CoverState {
    if position > MIN_POSITION {
        CoverState::Open
    } else {
        CoverState::Closed
    }
}

fn int_param(call: &ServiceCall, parameter: &'static str) -> Result<i32, VirtualError> {
    call.int_param(parameter)
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(VirtualError::MissingParameter {
            service: call.service,
            parameter,
        })
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
