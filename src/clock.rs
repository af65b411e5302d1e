// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time source for usage log timestamps.
//!
//! The updater never reads the system time directly. It asks a [`Clock`],
//! which is [`SystemClock`] in production and [`ManualClock`] in tests.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;

/// Supplies the current time.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
///
/// An optional step is added after every reading, which gives strictly
/// increasing timestamps without sleeping.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use homecmd::clock::{Clock, ManualClock};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
/// let clock = ManualClock::ticking(start, TimeDelta::seconds(1));
///
/// assert_eq!(clock.now(), start);
/// assert_eq!(clock.now(), start + TimeDelta::seconds(1));
/// ```
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::ticking(start, TimeDelta::zero())
    }

    /// Creates a clock that advances by `step` after each reading.
    #[must_use]
    pub fn ticking(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: TimeDelta) {
        *self.current.lock() += delta;
    }

    /// Sets the clock to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock() = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock();
        let now = *current;
        *current += self.step;
        now
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("current", &*self.current.lock())
            .field("step", &self.step)
            .finish()
    }
}
