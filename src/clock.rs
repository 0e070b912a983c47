// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-clock display for the dashboard header.
//!
//! The dashboard shows the current local time, refreshed by the embedding
//! page on its own timer. This never touches the light registry; it is
//! display glue kept here only so formatting stays in one place.

use chrono::{Local, NaiveDateTime};

/// Formats a timestamp the way the dashboard header displays it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2026, 8, 4)
///     .unwrap()
///     .and_hms_opt(9, 30, 5)
///     .unwrap();
/// assert_eq!(lumipanel::clock::format_display(dt), "2026-08-04 09:30:05");
/// ```
#[must_use]
pub fn format_display(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Returns the current local time, formatted for the dashboard header.
#[must_use]
pub fn current_time_display() -> String {
    format_display(Local::now().naive_local())
}
