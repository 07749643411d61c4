//! Shared test infrastructure for the screen tests.
//!
//! This module provides common utilities for constructing seeded screens.
//!
//! # Screen Setup
//! - `announcements_screen()` / `attendance_screen()` / `leave_screen()`
//! - `surface()` - recording surface that approves every prompt
//! - `declining_surface()` - recording surface that declines every prompt

use chrono::NaiveDate;

use hrboard::controllers::announcements::AnnouncementsScreen;
use hrboard::controllers::attendance::AttendanceScreen;
use hrboard::controllers::leave::LeaveScreen;
use hrboard::surface::MemorySurface;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Newest seeded attendance day; screens treat this as "today".
pub const REFERENCE: &str = "2025-11-20";

// ============================================================================
// SCREEN SETUP
// ============================================================================

pub fn reference_date() -> NaiveDate {
    NaiveDate::parse_from_str(REFERENCE, "%Y-%m-%d").expect("Failed to parse reference date")
}

/// Announcements screen over the seed collection, anchored at the
/// reference date.
pub fn announcements_screen(per_page: usize) -> AnnouncementsScreen {
    AnnouncementsScreen::new(reference_date(), per_page)
}

/// Attendance screen over the seed collection, anchored at the
/// reference date so the trend chart covers the seeded week.
pub fn attendance_screen(per_page: usize) -> AttendanceScreen {
    AttendanceScreen::new(reference_date(), per_page)
}

/// Leave screen over the seed collection, anchored at the reference
/// date so approval and rejection dates are predictable.
pub fn leave_screen(per_page: usize) -> LeaveScreen {
    LeaveScreen::new(reference_date(), per_page)
}

/// Recording surface that approves every confirmation prompt.
pub fn surface() -> MemorySurface {
    MemorySurface::new()
}

/// Recording surface that declines every confirmation prompt.
pub fn declining_surface() -> MemorySurface {
    MemorySurface::answering(false)
}
