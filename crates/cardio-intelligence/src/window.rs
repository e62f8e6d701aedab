// ABOUTME: Activity time window derivation with midnight clipping and degenerate-window handling
// ABOUTME: Single linear catalog pass splitting samples into the window and the recovery tail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use cardio_core::errors::{AppError, AppResult};
use cardio_core::models::{Activity, MinuteData};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Half-open `[start, end)` interval of one activity, restricted to one calendar date
///
/// `start`/`end` are the activity bounds after normalization (a window whose
/// end does not follow its start becomes the single minute at `start`). The
/// calendar restriction clips activities that cross midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
    selected_date: NaiveDate,
}

impl ActivityWindow {
    /// Derive the window for `activity` on `selected_date`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidWindow` when the activity ends more than
    /// `tolerance_seconds` before it starts, or when the tolerance or the
    /// single-minute fallback falls outside the representable time range
    pub fn for_activity(
        activity: &Activity,
        selected_date: NaiveDate,
        tolerance_seconds: i64,
    ) -> AppResult<Self> {
        let start = activity.start();
        let mut end = activity.end();

        let tolerance = Duration::try_seconds(tolerance_seconds).ok_or_else(|| {
            AppError::invalid_window(format!(
                "window tolerance of {tolerance_seconds}s is out of range"
            ))
        })?;
        // Underflow means no representable end can precede the tolerance
        let earliest_end = start
            .checked_sub_signed(tolerance)
            .unwrap_or(NaiveDateTime::MIN);

        if end < earliest_end {
            return Err(AppError::invalid_window(format!(
                "activity {} ends at {end}, {}s before its start {start}",
                activity.id(),
                (start - end).num_seconds()
            )));
        }

        if end <= start {
            warn!(
                activity_id = %activity.id(),
                start = %start,
                end = %end,
                "Activity end does not follow its start, using a single-minute window"
            );
            end = start
                .checked_add_signed(Duration::minutes(1))
                .ok_or_else(|| {
                    AppError::invalid_window(format!(
                        "activity {} starts at the end of the representable time range",
                        activity.id()
                    ))
                })?;
        }

        Ok(Self {
            start,
            end,
            selected_date,
        })
    }

    /// Normalized activity start
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Normalized activity end (exclusive)
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Calendar date the window is restricted to
    #[must_use]
    pub const fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Window length in whole seconds, always positive
    #[must_use]
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Window bounds clipped to the selected date, `None` when they do not overlap
    #[must_use]
    pub fn clipped(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let day_start = self.selected_date.and_time(NaiveTime::MIN);
        let day_end = day_start
            .checked_add_signed(Duration::days(1))
            .unwrap_or(NaiveDateTime::MAX);
        let start = self.start.max(day_start);
        let end = self.end.min(day_end);
        (start < end).then_some((start, end))
    }

    /// Whether `timestamp` lies in the window and on the selected date
    #[must_use]
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.clipped()
            .is_some_and(|(start, end)| start <= timestamp && timestamp < end)
    }

    /// Whether `timestamp` lies in `[end, end + tail]` on the selected date
    ///
    /// A tail reaching past the representable range has no upper bound.
    #[must_use]
    pub fn in_tail(&self, timestamp: NaiveDateTime, tail: Duration) -> bool {
        let below_limit = match self.end.checked_add_signed(tail) {
            Some(limit) => timestamp <= limit,
            None => true,
        };
        self.end <= timestamp && below_limit && timestamp.date() == self.selected_date
    }
}

/// Samples of one catalog pass, each part sorted by timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSplit {
    /// Samples inside the activity window
    pub window: Vec<MinuteData>,
    /// Samples in the recovery tail after the window
    pub tail: Vec<MinuteData>,
}

/// Split `catalog` into window and recovery-tail samples in one linear pass
///
/// Both parts are stably sorted, so samples sharing a timestamp keep their
/// catalog order.
#[must_use]
pub fn split_catalog(catalog: &[MinuteData], window: &ActivityWindow, tail: Duration) -> CatalogSplit {
    let mut split = CatalogSplit::default();
    for sample in catalog {
        if window.contains(sample.timestamp) {
            split.window.push(*sample);
        } else if window.in_tail(sample.timestamp, tail) {
            split.tail.push(*sample);
        }
    }
    split.window.sort_by_key(|s| s.timestamp);
    split.tail.sort_by_key(|s| s.timestamp);
    split
}
