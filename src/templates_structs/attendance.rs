use askama::Template;

use super::SelectOption;
use crate::models::attendance::{AttendanceEntry, AttendanceForm, AttendanceStatus, Department};
use crate::models::badge::Badge;

/// One table row. Dates stay ISO here, matching the date filter input.
pub struct AttendanceRow {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: &'static str,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub status_badge: Badge,
    pub late: bool,
}

impl AttendanceRow {
    pub fn new(entry: &AttendanceEntry) -> Self {
        AttendanceRow {
            id: entry.id.clone(),
            employee_id: entry.employee_id.clone(),
            employee_name: entry.employee_name.clone(),
            department: entry.department.as_str(),
            date: entry.date.to_string(),
            check_in: entry.check_in_display(),
            check_out: entry.check_out_display(),
            status_badge: entry.status.badge(),
            late: entry.late_arrival,
        }
    }
}

#[derive(Template)]
#[template(path = "attendance/rows.html")]
pub struct AttendanceTableTemplate {
    pub rows: Vec<AttendanceRow>,
}

#[derive(Template)]
#[template(path = "attendance/detail.html")]
pub struct AttendanceDetailTemplate {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: &'static str,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub total_hours: String,
    pub status_badge: Badge,
    pub late_badge: Badge,
    pub early_badge: Badge,
    pub rate: &'static str,
}

impl AttendanceDetailTemplate {
    pub fn new(entry: &AttendanceEntry) -> Self {
        AttendanceDetailTemplate {
            id: entry.id.clone(),
            employee_id: entry.employee_id.clone(),
            employee_name: entry.employee_name.clone(),
            department: entry.department.as_str(),
            date: entry.date.to_string(),
            check_in: entry.check_in_display(),
            check_out: entry.check_out_display(),
            total_hours: entry.hours_display(),
            status_badge: entry.status.badge(),
            late_badge: Badge::flag(entry.late_arrival),
            early_badge: Badge::flag(entry.early_leave),
            rate: match entry.status {
                AttendanceStatus::Present => "100%",
                AttendanceStatus::Absent => "0%",
            },
        }
    }
}

#[derive(Template)]
#[template(path = "attendance/form.html")]
pub struct AttendanceFormTemplate {
    pub employee_id: String,
    pub employee_name: String,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub departments: Vec<SelectOption>,
    pub statuses: Vec<SelectOption>,
    pub late_arrival: bool,
    pub early_leave: bool,
    pub errors: Vec<String>,
}

impl AttendanceFormTemplate {
    pub fn new(form: &AttendanceForm, errors: Vec<String>) -> Self {
        let department_pairs = Department::ALL.map(|d| (d.as_str(), d.as_str()));
        let status_pairs = AttendanceStatus::ALL.map(|s| (s.as_str(), s.as_str()));
        AttendanceFormTemplate {
            employee_id: form.employee_id.clone(),
            employee_name: form.employee_name.clone(),
            date: form.date.clone(),
            check_in: form.check_in.clone(),
            check_out: form.check_out.clone(),
            departments: SelectOption::list(&department_pairs, &form.department),
            statuses: SelectOption::list(&status_pairs, &form.status),
            late_arrival: form.late_arrival,
            early_leave: form.early_leave,
            errors,
        }
    }
}

/// Full page shell for the preview build. Chart payloads are embedded
/// as JSON islands next to their canvases.
#[derive(Template)]
#[template(path = "attendance/page.html")]
pub struct AttendancePageTemplate {
    pub title: String,
    pub table_body: String,
    pub pagination: String,
    pub record_info: String,
    pub per_page_options: Vec<SelectOption>,
    pub daily_chart: String,
    pub department_chart: String,
}
