//! Cover controller — turns semantic cover actions into platform service calls.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use coverctl_domain::cover::{
    CURRENT_TILT_POSITION, ControllerStatus, CoverAction, CoverConfig, CoverFeature, CoverService,
    ServiceCall, Timestamp, clamp_position,
};
use coverctl_domain::error::CoverError;

use crate::movement::MovementTimer;
use crate::ports::CoverPlatform;

/// Tilt step used by [`CoverAction::SetTiltOpen`] / [`CoverAction::SetTiltClose`];
/// large enough to reach either end from anywhere.
const FULL_TILT: i32 = 100;

/// Travel direction of a directional command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Open,
    Close,
}

/// A controller method together with its fixed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverHandler {
    Open,
    Close,
    Stop,
    /// Stop when moving, otherwise travel in the given direction.
    Toggle(Direction),
    /// Nudge the tilt by a signed delta.
    SetTilt(i32),
}

/// The fixed action vocabulary bound to handlers for a given tilt step.
#[must_use]
pub fn predefined_handlers(tilt_delta: i32) -> BTreeMap<CoverAction, CoverHandler> {
    BTreeMap::from([
        (CoverAction::Open, CoverHandler::Open),
        (CoverAction::Close, CoverHandler::Close),
        (CoverAction::Stop, CoverHandler::Stop),
        (
            CoverAction::ToggleOpen,
            CoverHandler::Toggle(Direction::Open),
        ),
        (
            CoverAction::ToggleClose,
            CoverHandler::Toggle(Direction::Close),
        ),
        (CoverAction::SetTiltUp, CoverHandler::SetTilt(tilt_delta)),
        (
            CoverAction::SetTiltDown,
            CoverHandler::SetTilt(tilt_delta.saturating_neg()),
        ),
        (CoverAction::SetTiltOpen, CoverHandler::SetTilt(FULL_TILT)),
        (CoverAction::SetTiltClose, CoverHandler::SetTilt(-FULL_TILT)),
    ])
}

/// Debounced copy of the entity's tilt position.
struct TiltCache {
    value: i32,
    refreshed_at: Option<Instant>,
}

/// Controls one cover entity through a [`CoverPlatform`].
///
/// Every handler takes `&self`; the controller can be shared behind an `Arc`.
pub struct CoverController<P> {
    platform: P,
    config: CoverConfig,
    handlers: BTreeMap<CoverAction, CoverHandler>,
    movement: MovementTimer,
    tilt: Mutex<TiltCache>,
    last_action: Mutex<Option<(CoverAction, Timestamp)>>,
}

impl<P: CoverPlatform> CoverController<P> {
    /// Validate `config` and bind the action vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::Validation`] when `cover` is empty or
    /// `open_position < close_position`.
    pub fn new(platform: P, config: CoverConfig) -> Result<Self, CoverError> {
        config.validate()?;
        tracing::info!(
            cover = %config.cover,
            open_position = config.open_position,
            close_position = config.close_position,
            cover_duration = ?config.cover_duration,
            "cover controller ready"
        );
        Ok(Self {
            platform,
            handlers: predefined_handlers(config.tilt_delta),
            movement: MovementTimer::new(config.cover_duration.map(Duration::from_secs)),
            tilt: Mutex::new(TiltCache {
                value: 0,
                refreshed_at: None,
            }),
            last_action: Mutex::new(None),
            config,
        })
    }

    /// Entity id of the controlled cover.
    #[must_use]
    pub fn cover(&self) -> &str {
        &self.config.cover
    }

    /// The handler bound to `action`.
    #[must_use]
    pub fn handler(&self, action: CoverAction) -> Option<CoverHandler> {
        self.handlers.get(&action).copied()
    }

    /// Whether the soft-movement timer is armed.
    #[must_use]
    pub fn is_supposedly_moving(&self) -> bool {
        self.movement.is_moving()
    }

    /// Last known or computed tilt position.
    #[must_use]
    pub fn tilt_position(&self) -> i32 {
        lock(&self.tilt).value
    }

    /// Snapshot for status reporting.
    #[must_use]
    pub fn status(&self) -> ControllerStatus {
        let last = *lock(&self.last_action);
        ControllerStatus {
            cover: self.config.cover.clone(),
            is_supposedly_moving: self.is_supposedly_moving(),
            tilt_position: self.tilt_position(),
            last_action: last.map(|(action, _)| action),
            last_action_at: last.map(|(_, at)| at),
        }
    }

    /// Run the handler bound to `action`.
    ///
    /// # Errors
    ///
    /// Propagates platform failures. A missing capability is not an error.
    #[tracing::instrument(skip(self), fields(cover = %self.config.cover))]
    pub async fn handle(&self, action: CoverAction) -> Result<(), CoverError> {
        let Some(handler) = self.handler(action) else {
            return Ok(());
        };
        *lock(&self.last_action) = Some((action, chrono::Utc::now()));
        match handler {
            CoverHandler::Open => self.open().await,
            CoverHandler::Close => self.close().await,
            CoverHandler::Stop => self.stop().await,
            CoverHandler::Toggle(direction) => self.toggle(direction).await,
            CoverHandler::SetTilt(delta) => self.set_tilt(delta).await,
        }
    }

    /// Open the cover, preferring an absolute position over the plain command.
    ///
    /// # Errors
    ///
    /// Propagates platform failures.
    pub async fn open(&self) -> Result<(), CoverError> {
        self.travel(Direction::Open).await
    }

    /// Close the cover, preferring an absolute position over the plain command.
    ///
    /// # Errors
    ///
    /// Propagates platform failures.
    pub async fn close(&self) -> Result<(), CoverError> {
        self.travel(Direction::Close).await
    }

    /// Cancel the movement timer and stop the cover.
    ///
    /// # Errors
    ///
    /// Propagates platform failures.
    pub async fn stop(&self) -> Result<(), CoverError> {
        self.movement.stop();
        self.platform
            .call_service(ServiceCall::new(CoverService::StopCover, self.cover()))
            .await
    }

    /// Stop when the cover is (or is assumed to be) moving, otherwise travel
    /// in `direction`.
    ///
    /// # Errors
    ///
    /// Propagates platform failures.
    pub async fn toggle(&self, direction: Direction) -> Result<(), CoverError> {
        let state = self.platform.get_state(self.cover()).await?;
        if state.is_moving() || self.movement.is_moving() {
            tracing::debug!(cover = %self.config.cover, %state, "cover moving, stopping it");
            self.stop().await
        } else {
            self.travel(direction).await
        }
    }

    /// Shift the tilt position by `delta`, clamped to `0..=100`.
    ///
    /// The entity's `current_tilt_position` is read at most once per
    /// `update_timeout`; in between, the cached value is reused.
    ///
    /// # Errors
    ///
    /// Propagates platform failures.
    pub async fn set_tilt(&self, delta: i32) -> Result<(), CoverError> {
        let cover = self.cover();
        let now = Instant::now();
        let timeout = Duration::from_secs(self.config.update_timeout);
        let refreshed_at = lock(&self.tilt).refreshed_at;

        match refreshed_at {
            Some(at) if now < at + timeout => {
                let remaining = (at + timeout).saturating_duration_since(now);
                tracing::info!(
                    cover,
                    remaining_secs = remaining.as_secs_f64().round(),
                    "using cached tilt position"
                );
            }
            _ => {
                let fetched = self
                    .platform
                    .get_attribute(cover, CURRENT_TILT_POSITION)
                    .await?
                    .and_then(|value| value.as_i32());
                match fetched {
                    Some(value) => {
                        let mut tilt = lock(&self.tilt);
                        tilt.value = value;
                        tilt.refreshed_at = Some(now);
                        tracing::debug!(cover, tilt = value, "fetched tilt position");
                    }
                    None => {
                        tracing::warn!(cover, "cover does not report a numeric tilt position");
                    }
                }
            }
        }

        let target = {
            let mut tilt = lock(&self.tilt);
            tilt.value = clamp_position(tilt.value.saturating_add(delta));
            tilt.value
        };

        if self
            .platform
            .is_supported(cover, CoverFeature::SetTiltPosition)
            .await?
        {
            self.platform
                .call_service(
                    ServiceCall::new(CoverService::SetCoverTiltPosition, cover)
                        .with("tilt_position", target),
                )
                .await
        } else {
            tracing::warn!(cover, "cover does not support SET_TILT_POSITION");
            Ok(())
        }
    }

    async fn travel(&self, direction: Direction) -> Result<(), CoverError> {
        let cover = self.cover();
        let (position, feature, service) = match direction {
            Direction::Open => (
                self.config.open_position,
                CoverFeature::Open,
                CoverService::OpenCover,
            ),
            Direction::Close => (
                self.config.close_position,
                CoverFeature::Close,
                CoverService::CloseCover,
            ),
        };

        let call = if self
            .platform
            .is_supported(cover, CoverFeature::SetPosition)
            .await?
        {
            ServiceCall::new(CoverService::SetCoverPosition, cover).with("position", position)
        } else if self.platform.is_supported(cover, feature).await? {
            ServiceCall::new(service, cover)
        } else {
            tracing::warn!(
                cover,
                ?feature,
                "cover does not support SET_POSITION or the plain command"
            );
            return Ok(());
        };

        self.platform.call_service(call).await?;
        lock(&self.tilt).value = position;
        self.movement.start();
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
