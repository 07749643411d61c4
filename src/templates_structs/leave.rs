use askama::Template;

use super::{SelectOption, format_date};
use crate::models::attendance::Department;
use crate::models::badge::Badge;
use crate::models::leave::{LeaveForm, LeaveRequest, LeaveType};

/// One table row. Quick approve and reject buttons only appear while
/// the request is pending.
pub struct LeaveRow {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: &'static str,
    pub type_badge: Badge,
    pub start_date: String,
    pub end_date: String,
    pub days: i64,
    pub reason: String,
    pub applied_on: String,
    pub status_badge: Badge,
    pub pending: bool,
}

impl LeaveRow {
    pub fn new(request: &LeaveRequest) -> Self {
        LeaveRow {
            id: request.id.clone(),
            employee_id: request.employee_id.clone(),
            employee_name: request.employee_name.clone(),
            department: request.department.as_str(),
            type_badge: request.leave_type.badge(),
            start_date: format_date(request.start_date),
            end_date: format_date(request.end_date),
            days: request.days,
            reason: request.reason.clone(),
            applied_on: format_date(request.applied_on),
            status_badge: request.status.badge(),
            pending: request.is_pending(),
        }
    }
}

#[derive(Template)]
#[template(path = "leave/rows.html")]
pub struct LeaveTableTemplate {
    pub rows: Vec<LeaveRow>,
}

#[derive(Template)]
#[template(path = "leave/detail.html")]
pub struct LeaveDetailTemplate {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: &'static str,
    pub type_badge: Badge,
    pub start_date: String,
    pub end_date: String,
    pub days: i64,
    pub reason: String,
    pub applied_on: String,
    pub requested_by: String,
    pub contact_info: String,
    pub emergency_contact: String,
    pub status_badge: Badge,
    pub decided_on: String,
    pub rejection_reason: String,
    pub pending: bool,
}

impl LeaveDetailTemplate {
    pub fn new(request: &LeaveRequest) -> Self {
        LeaveDetailTemplate {
            id: request.id.clone(),
            employee_id: request.employee_id.clone(),
            employee_name: request.employee_name.clone(),
            department: request.department.as_str(),
            type_badge: request.leave_type.badge(),
            start_date: format_date(request.start_date),
            end_date: format_date(request.end_date),
            days: request.days,
            reason: request.reason.clone(),
            applied_on: format_date(request.applied_on),
            requested_by: request.requested_by.clone(),
            contact_info: request.contact_info.clone(),
            emergency_contact: request.emergency_contact.clone(),
            status_badge: request.status.badge(),
            decided_on: request.decided_on.map(format_date).unwrap_or_default(),
            rejection_reason: request.rejection_reason.clone().unwrap_or_default(),
            pending: request.is_pending(),
        }
    }
}

/// Reason prompt shown before a rejection is committed.
#[derive(Template)]
#[template(path = "leave/reject.html")]
pub struct RejectFormTemplate {
    pub employee_name: String,
    pub reason: String,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "leave/form.html")]
pub struct LeaveFormTemplate {
    pub employee_id: String,
    pub employee_name: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub contact_info: String,
    pub emergency_contact: String,
    pub departments: Vec<SelectOption>,
    pub leave_types: Vec<SelectOption>,
    pub errors: Vec<String>,
}

impl LeaveFormTemplate {
    pub fn new(form: &LeaveForm, errors: Vec<String>) -> Self {
        let department_pairs = Department::ALL.map(|d| (d.as_str(), d.as_str()));
        let type_pairs = LeaveType::ALL.map(|t| (t.code(), t.display()));
        LeaveFormTemplate {
            employee_id: form.employee_id.clone(),
            employee_name: form.employee_name.clone(),
            start_date: form.start_date.clone(),
            end_date: form.end_date.clone(),
            reason: form.reason.clone(),
            contact_info: form.contact_info.clone(),
            emergency_contact: form.emergency_contact.clone(),
            departments: SelectOption::list(&department_pairs, &form.department),
            leave_types: SelectOption::list(&type_pairs, &form.leave_type),
            errors,
        }
    }
}

/// Full page shell for the preview build.
#[derive(Template)]
#[template(path = "leave/page.html")]
pub struct LeavePageTemplate {
    pub title: String,
    pub table_body: String,
    pub pagination: String,
    pub record_info: String,
    pub per_page_options: Vec<SelectOption>,
}
