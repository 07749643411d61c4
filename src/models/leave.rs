use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::badge::Badge;
use crate::models::list::{ListRecord, RecordFilter};
use crate::models::attendance::Department;
use crate::models::validate::{parse_required_date, validate_optional, validate_required};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Annual,
    Sick,
    Emergency,
    Maternity,
    Personal,
}

impl LeaveType {
    pub const ALL: [LeaveType; 5] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Emergency,
        LeaveType::Maternity,
        LeaveType::Personal,
    ];

    /// Machine code, also the select option value.
    pub fn code(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Emergency => "emergency",
            LeaveType::Maternity => "maternity",
            LeaveType::Personal => "personal",
        }
    }

    /// Long display name used in detail views and exports.
    pub fn display(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Emergency => "Emergency Leave",
            LeaveType::Maternity => "Maternity Leave",
            LeaveType::Personal => "Personal Leave",
        }
    }

    pub fn parse(s: &str) -> Option<LeaveType> {
        LeaveType::ALL.iter().copied().find(|t| t.code() == s.trim())
    }

    pub fn badge(&self) -> Badge {
        match self {
            LeaveType::Annual => Badge { class: "bg-primary", label: "Annual" },
            LeaveType::Sick => Badge { class: "bg-info", label: "Sick" },
            LeaveType::Emergency => Badge { class: "bg-danger", label: "Emergency" },
            LeaveType::Maternity => Badge { class: "bg-purple", label: "Maternity" },
            LeaveType::Personal => Badge { class: "bg-secondary", label: "Personal" },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 3] =
        [LeaveStatus::Pending, LeaveStatus::Approved, LeaveStatus::Rejected];

    /// Machine code, also the select option value.
    pub fn code(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<LeaveStatus> {
        LeaveStatus::ALL.iter().copied().find(|t| t.code() == s.trim())
    }

    pub fn badge(&self) -> Badge {
        match self {
            LeaveStatus::Pending => Badge { class: "bg-warning text-dark", label: "Pending" },
            LeaveStatus::Approved => Badge { class: "bg-success", label: "Approved" },
            LeaveStatus::Rejected => Badge { class: "bg-danger", label: "Rejected" },
        }
    }
}

/// One leave request moving through the approval flow.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: Department,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub reason: String,
    pub applied_on: NaiveDate,
    pub status: LeaveStatus,
    pub requested_by: String,
    pub contact_info: String,
    pub emergency_contact: String,
    pub decided_on: Option<NaiveDate>,
    pub rejection_reason: Option<String>,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    /// `pending -> approved`. Returns `false` and changes nothing once
    /// the request is already decided.
    pub fn approve(&mut self, decided_on: NaiveDate) -> bool {
        if self.status != LeaveStatus::Pending {
            return false;
        }
        self.status = LeaveStatus::Approved;
        self.decided_on = Some(decided_on);
        true
    }

    /// `pending -> rejected`. A blank reason fails validation and
    /// blocks the transition; a decided request is left untouched.
    pub fn reject(&mut self, reason: &str, decided_on: NaiveDate) -> Result<bool, AppError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::Validation(vec![
                "Please provide a rejection reason.".to_string(),
            ]));
        }
        if self.status != LeaveStatus::Pending {
            return Ok(false);
        }
        self.status = LeaveStatus::Rejected;
        self.rejection_reason = Some(reason.to_string());
        self.decided_on = Some(decided_on);
        Ok(true)
    }
}

impl ListRecord for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Active criteria for the leave list. The date predicate keeps
/// requests starting on or after the given day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Option<LeaveStatus>,
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
}

impl LeaveFilter {
    /// Criteria for one of the status quick-view buttons: only the
    /// status predicate set, everything else cleared.
    pub fn status_view(status: Option<LeaveStatus>) -> Self {
        LeaveFilter { status, ..Default::default() }
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl RecordFilter<LeaveRequest> for LeaveFilter {
    fn matches(&self, l: &LeaveRequest) -> bool {
        if let Some(status) = self.status {
            if l.status != status {
                return false;
            }
        }
        if let Some(leave_type) = self.leave_type {
            if l.leave_type != leave_type {
                return false;
            }
        }
        if let Some(department) = self.department {
            if l.department != department {
                return false;
            }
        }
        if let Some(from_date) = self.from_date {
            if l.start_date < from_date {
                return false;
            }
        }
        let term = self.search.trim().to_lowercase();
        if !term.is_empty()
            && !l.employee_name.to_lowercase().contains(&term)
            && !l.reason.to_lowercase().contains(&term)
            && !l.employee_id.to_lowercase().contains(&term)
        {
            return false;
        }
        true
    }
}

/// Raw values from the new-request dialog.
#[derive(Debug, Clone, Default)]
pub struct LeaveForm {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub contact_info: String,
    pub emergency_contact: String,
}

/// Validated request payload ready to commit.
#[derive(Debug, Clone)]
pub struct NewLeaveRequest {
    pub employee_id: String,
    pub employee_name: String,
    pub department: Department,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub reason: String,
    pub contact_info: String,
    pub emergency_contact: String,
}

impl LeaveForm {
    pub fn parse(&self) -> Result<NewLeaveRequest, Vec<String>> {
        let mut errors = Vec::new();

        if let Some(e) = validate_required(&self.employee_id, "Employee ID", 20) {
            errors.push(e);
        }
        if let Some(e) = validate_required(&self.employee_name, "Employee name", 100) {
            errors.push(e);
        }
        let department = Department::parse(&self.department);
        if department.is_none() {
            errors.push("Department is required".to_string());
        }
        let leave_type = LeaveType::parse(&self.leave_type);
        if leave_type.is_none() {
            errors.push("Leave type is required".to_string());
        }
        let start_date = match parse_required_date(&self.start_date, "Start date") {
            Ok(d) => Some(d),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        let end_date = match parse_required_date(&self.end_date, "End date") {
            Ok(d) => Some(d),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                errors.push("End date must not be before start date".to_string());
            }
        }
        if let Some(e) = validate_required(&self.reason, "Reason", 500) {
            errors.push(e);
        }
        if let Some(e) = validate_optional(&self.contact_info, "Contact info", 200) {
            errors.push(e);
        }
        if let Some(e) = validate_optional(&self.emergency_contact, "Emergency contact", 200) {
            errors.push(e);
        }

        match (department, leave_type, start_date, end_date) {
            (Some(department), Some(leave_type), Some(start_date), Some(end_date))
                if errors.is_empty() =>
            {
                Ok(NewLeaveRequest {
                    employee_id: self.employee_id.trim().to_string(),
                    employee_name: self.employee_name.trim().to_string(),
                    department,
                    leave_type,
                    start_date,
                    end_date,
                    days: (end_date - start_date).num_days() + 1,
                    reason: self.reason.trim().to_string(),
                    contact_info: self.contact_info.trim().to_string(),
                    emergency_contact: self.emergency_contact.trim().to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

struct Seed {
    id: &'static str,
    employee_id: &'static str,
    employee_name: &'static str,
    department: Department,
    leave_type: LeaveType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: i64,
    reason: &'static str,
    applied_on: NaiveDate,
    status: LeaveStatus,
    contact_info: &'static str,
    emergency_contact: &'static str,
}

/// Sample leave requests the screen boots with, application order.
pub fn seed() -> Vec<LeaveRequest> {
    use Department::{Finance, Hr, It, Operations, Sales};

    let rows = [
        Seed {
            id: "LV001",
            employee_id: "EMP001",
            employee_name: "John Smith",
            department: It,
            leave_type: LeaveType::Annual,
            start_date: date(2025, 11, 25),
            end_date: date(2025, 11, 27),
            days: 3,
            reason: "Family vacation planned",
            applied_on: date(2025, 11, 15),
            status: LeaveStatus::Pending,
            contact_info: "john.smith@company.com",
            emergency_contact: "Jane Smith (Spouse) - +1-555-0123",
        },
        Seed {
            id: "LV002",
            employee_id: "EMP002",
            employee_name: "Sarah Johnson",
            department: Hr,
            leave_type: LeaveType::Sick,
            start_date: date(2025, 11, 19),
            end_date: date(2025, 11, 19),
            days: 1,
            reason: "Flu symptoms, need rest",
            applied_on: date(2025, 11, 18),
            status: LeaveStatus::Pending,
            contact_info: "sarah.johnson@company.com",
            emergency_contact: "Mike Johnson (Father) - +1-555-0124",
        },
        Seed {
            id: "LV003",
            employee_id: "EMP003",
            employee_name: "Michael Brown",
            department: Sales,
            leave_type: LeaveType::Emergency,
            start_date: date(2025, 11, 20),
            end_date: date(2025, 11, 21),
            days: 2,
            reason: "Medical emergency in family",
            applied_on: date(2025, 11, 19),
            status: LeaveStatus::Approved,
            contact_info: "michael.brown@company.com",
            emergency_contact: "Lisa Brown (Sister) - +1-555-0125",
        },
        Seed {
            id: "LV004",
            employee_id: "EMP004",
            employee_name: "Emily Davis",
            department: Finance,
            leave_type: LeaveType::Annual,
            start_date: date(2025, 12, 1),
            end_date: date(2025, 12, 5),
            days: 5,
            reason: "Winter break with family",
            applied_on: date(2025, 11, 10),
            status: LeaveStatus::Approved,
            contact_info: "emily.davis@company.com",
            emergency_contact: "Robert Davis (Husband) - +1-555-0126",
        },
        Seed {
            id: "LV005",
            employee_id: "EMP005",
            employee_name: "David Wilson",
            department: It,
            leave_type: LeaveType::Sick,
            start_date: date(2025, 11, 22),
            end_date: date(2025, 11, 24),
            days: 3,
            reason: "Recovering from surgery",
            applied_on: date(2025, 11, 20),
            status: LeaveStatus::Pending,
            contact_info: "david.wilson@company.com",
            emergency_contact: "Dr. Sarah Wilson (Sister) - +1-555-0127",
        },
        Seed {
            id: "LV006",
            employee_id: "EMP006",
            employee_name: "Lisa Anderson",
            department: Operations,
            leave_type: LeaveType::Personal,
            start_date: date(2025, 11, 28),
            end_date: date(2025, 11, 28),
            days: 1,
            reason: "Personal matters",
            applied_on: date(2025, 11, 16),
            status: LeaveStatus::Rejected,
            contact_info: "lisa.anderson@company.com",
            emergency_contact: "Tom Anderson (Brother) - +1-555-0128",
        },
        Seed {
            id: "LV007",
            employee_id: "EMP007",
            employee_name: "Robert Taylor",
            department: Sales,
            leave_type: LeaveType::Annual,
            start_date: date(2025, 12, 15),
            end_date: date(2025, 12, 19),
            days: 5,
            reason: "Christmas vacation",
            applied_on: date(2025, 11, 12),
            status: LeaveStatus::Pending,
            contact_info: "robert.taylor@company.com",
            emergency_contact: "Mary Taylor (Wife) - +1-555-0129",
        },
        Seed {
            id: "LV008",
            employee_id: "EMP008",
            employee_name: "Jennifer Martinez",
            department: Hr,
            leave_type: LeaveType::Maternity,
            start_date: date(2025, 12, 1),
            end_date: date(2026, 3, 1),
            days: 90,
            reason: "Maternity leave",
            applied_on: date(2025, 11, 1),
            status: LeaveStatus::Approved,
            contact_info: "jennifer.martinez@company.com",
            emergency_contact: "Carlos Martinez (Husband) - +1-555-0130",
        },
    ];

    rows.into_iter()
        .map(|s| LeaveRequest {
            id: s.id.to_string(),
            employee_id: s.employee_id.to_string(),
            employee_name: s.employee_name.to_string(),
            department: s.department,
            leave_type: s.leave_type,
            start_date: s.start_date,
            end_date: s.end_date,
            days: s.days,
            reason: s.reason.to_string(),
            applied_on: s.applied_on,
            status: s.status,
            requested_by: s.employee_name.to_string(),
            contact_info: s.contact_info.to_string(),
            emergency_contact: s.emergency_contact.to_string(),
            decided_on: None,
            rejection_reason: None,
        })
        .collect()
}
