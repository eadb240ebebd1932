//! Second-resolution countdowns owned by a single view.
//!
//! The driver app runs three timers: a ride request expires if not accepted,
//! the active ride counts down to pickup, and once the trip starts it counts
//! down the estimated trip duration. Each view owns its own [`Countdown`] and
//! drives it with [`Countdown::tick`] once per elapsed second.

use crate::format::format_countdown;

/// A pending request is auto-declined after this long.
pub const RIDE_REQUEST_TIMEOUT_SECS: u32 = 30;

/// Countdown shown while the driver heads to pickup.
pub const PICKUP_COUNTDOWN_SECS: u32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    Running { remaining_secs: u32 },
    /// Reported exactly once, on the tick that reaches zero.
    Expired,
    /// Already expired, or frozen.
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration_secs: u32,
    remaining_secs: u32,
    frozen: bool,
    expiry_reported: bool,
}

impl Countdown {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            frozen: false,
            expiry_reported: false,
        }
    }

    pub fn ride_request() -> Self {
        Self::new(RIDE_REQUEST_TIMEOUT_SECS)
    }

    pub fn pickup() -> Self {
        Self::new(PICKUP_COUNTDOWN_SECS)
    }

    pub fn for_trip(duration_minutes: u32) -> Self {
        Self::new(duration_minutes.saturating_mul(60))
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> CountdownTick {
        self.advance(1)
    }

    /// Advance by `secs` seconds, saturating at zero.
    pub fn advance(&mut self, secs: u32) -> CountdownTick {
        if self.frozen {
            return CountdownTick::Idle;
        }
        if self.remaining_secs == 0 {
            return self.report_expiry();
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(secs);
        if self.remaining_secs == 0 {
            self.report_expiry()
        } else {
            CountdownTick::Running {
                remaining_secs: self.remaining_secs,
            }
        }
    }

    fn report_expiry(&mut self) -> CountdownTick {
        if self.expiry_reported {
            CountdownTick::Idle
        } else {
            self.expiry_reported = true;
            log::debug!("countdown of {}s expired", self.duration_secs);
            CountdownTick::Expired
        }
    }

    /// Stops the timer where it is, e.g. once a request has been accepted.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Starts over with a new duration, clearing any frozen/expired state.
    pub fn restart(&mut self, duration_secs: u32) {
        *self = Self::new(duration_secs);
    }

    /// Share of the original duration still left, in `[0, 1]`; drives the
    /// request card's progress bar. A zero-length countdown reports `0.0`.
    pub fn fraction_remaining(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        f64::from(self.remaining_secs) / f64::from(self.duration_secs)
    }

    /// `m:ss` rendering of the remaining time.
    pub fn display(&self) -> String {
        format_countdown(self.remaining_secs)
    }
}
