// Template context structures for Askama templates, organized by screen.
// All types are re-exported for seamless imports: `use hrboard::templates_structs::*`

use askama::Template;
use chrono::NaiveDate;

use crate::models::page::PageWindow;

/// `Nov 15, 2025` style date used by list and detail views.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// One `<option>` in a select control.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Build an option list from `(value, label)` pairs, marking the
    /// current value selected.
    pub fn list(pairs: &[(&str, &str)], current: &str) -> Vec<SelectOption> {
        pairs
            .iter()
            .map(|(value, label)| SelectOption {
                value: value.to_string(),
                label: label.to_string(),
                selected: *value == current,
            })
            .collect()
    }
}

/// One numbered pagination button.
pub struct PageItem {
    pub number: usize,
    pub active: bool,
}

/// Prev arrow, centered window of numbered buttons, next arrow.
#[derive(Template)]
#[template(path = "shared/pagination.html")]
pub struct PaginationTemplate {
    pub items: Vec<PageItem>,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: usize,
    pub next_page: usize,
}

impl PaginationTemplate {
    pub fn from_window(window: &PageWindow) -> Self {
        PaginationTemplate {
            items: window
                .pages
                .iter()
                .map(|&number| PageItem { number, active: number == window.current })
                .collect(),
            has_prev: window.has_prev,
            has_next: window.has_next,
            prev_page: window.current.saturating_sub(1).max(1),
            next_page: (window.current + 1).min(window.total_pages),
        }
    }
}

mod announcement;
mod attendance;
mod dashboard;
mod leave;

// Re-export all types for seamless imports
pub use self::announcement::{
    AnnouncementCard, AnnouncementCardsTemplate, AnnouncementDetailTemplate,
    AnnouncementFormTemplate, AnnouncementRow, AnnouncementTableTemplate,
    AnnouncementsPageTemplate,
};
pub use self::attendance::{
    AttendanceDetailTemplate, AttendanceFormTemplate, AttendancePageTemplate, AttendanceRow,
    AttendanceTableTemplate,
};
pub use self::dashboard::DashboardTemplate;
pub use self::leave::{
    LeaveDetailTemplate, LeaveFormTemplate, LeavePageTemplate, LeaveRow, LeaveTableTemplate,
    RejectFormTemplate,
};
