use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::badge::Badge;
use crate::models::list::{ListRecord, RecordFilter};
use crate::models::validate::{parse_optional_time, parse_required_date, validate_required};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "HR")]
    Hr,
    Sales,
    Finance,
    Operations,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::It,
        Department::Hr,
        Department::Sales,
        Department::Finance,
        Department::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::It => "IT",
            Department::Hr => "HR",
            Department::Sales => "Sales",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }

    pub fn parse(s: &str) -> Option<Department> {
        Department::ALL.iter().copied().find(|d| d.as_str() == s.trim())
    }

    /// Stable position used by the chart aggregations.
    pub fn index(&self) -> usize {
        match self {
            Department::It => 0,
            Department::Hr => 1,
            Department::Sales => 2,
            Department::Finance => 3,
            Department::Operations => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(s: &str) -> Option<AttendanceStatus> {
        match s.trim() {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            AttendanceStatus::Present => Badge { class: "bg-success", label: "Present" },
            AttendanceStatus::Absent => Badge { class: "bg-danger", label: "Absent" },
        }
    }
}

/// One employee-day attendance entry.
///
/// Entries carry their own record id; the employee id is payload and
/// repeats across dates.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceEntry {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: Department,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub late_arrival: bool,
    pub early_leave: bool,
}

impl AttendanceEntry {
    /// Hours between check-in and check-out, when both are recorded.
    pub fn worked_hours(&self) -> Option<f64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                Some((check_out - check_in).num_minutes() as f64 / 60.0)
            }
            _ => None,
        }
    }

    /// Worked hours for display and CSV, `-` when not derivable.
    pub fn hours_display(&self) -> String {
        match self.worked_hours() {
            Some(h) => format!("{h:.1}"),
            None => "-".to_string(),
        }
    }

    pub fn check_in_display(&self) -> String {
        time_display(self.check_in)
    }

    pub fn check_out_display(&self) -> String {
        time_display(self.check_out)
    }
}

fn time_display(t: Option<NaiveTime>) -> String {
    match t {
        Some(t) => t.format("%H:%M").to_string(),
        None => "-".to_string(),
    }
}

impl ListRecord for AttendanceEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Active criteria for the attendance list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl AttendanceFilter {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl RecordFilter<AttendanceEntry> for AttendanceFilter {
    fn matches(&self, e: &AttendanceEntry) -> bool {
        let term = self.search.trim().to_lowercase();
        if !term.is_empty()
            && !e.employee_id.to_lowercase().contains(&term)
            && !e.employee_name.to_lowercase().contains(&term)
            && !e.department.as_str().to_lowercase().contains(&term)
        {
            return false;
        }
        if let Some(department) = self.department {
            if e.department != department {
                return false;
            }
        }
        if let Some(date) = self.date {
            if e.date != date {
                return false;
            }
        }
        true
    }
}

/// Raw values from the manual-entry dialog.
#[derive(Debug, Clone, Default)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
    pub late_arrival: bool,
    pub early_leave: bool,
}

/// Validated entry payload ready to commit.
#[derive(Debug, Clone)]
pub struct NewAttendanceEntry {
    pub employee_id: String,
    pub employee_name: String,
    pub department: Department,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub late_arrival: bool,
    pub early_leave: bool,
}

impl AttendanceForm {
    pub fn parse(&self) -> Result<NewAttendanceEntry, Vec<String>> {
        let mut errors = Vec::new();

        if let Some(e) = validate_required(&self.employee_id, "Employee ID", 20) {
            errors.push(e);
        }
        if let Some(e) = validate_required(&self.employee_name, "Name", 100) {
            errors.push(e);
        }
        let department = Department::parse(&self.department);
        if department.is_none() {
            errors.push("Department is required".to_string());
        }
        let date = match parse_required_date(&self.date, "Date") {
            Ok(d) => Some(d),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        let status = AttendanceStatus::parse(&self.status);
        if status.is_none() {
            errors.push("Status is required".to_string());
        }
        let check_in = match parse_optional_time(&self.check_in, "Check in") {
            Ok(t) => t,
            Err(e) => {
                errors.push(e);
                None
            }
        };
        let check_out = match parse_optional_time(&self.check_out, "Check out") {
            Ok(t) => t,
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_out <= check_in {
                errors.push("Check out must be after check in".to_string());
            }
        }

        match (department, date, status) {
            (Some(department), Some(date), Some(status)) if errors.is_empty() => {
                // An absent entry carries no times.
                let absent = status == AttendanceStatus::Absent;
                Ok(NewAttendanceEntry {
                    employee_id: self.employee_id.trim().to_string(),
                    employee_name: self.employee_name.trim().to_string(),
                    department,
                    date,
                    check_in: if absent { None } else { check_in },
                    check_out: if absent { None } else { check_out },
                    status,
                    late_arrival: !absent && self.late_arrival,
                    early_leave: !absent && self.early_leave,
                })
            }
            _ => Err(errors),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

struct Seed(
    &'static str,
    &'static str,
    &'static str,
    Department,
    NaiveDate,
    Option<NaiveTime>,
    Option<NaiveTime>,
    AttendanceStatus,
    bool,
    bool,
);

/// Sample attendance entries the screen boots with, newest day first.
pub fn seed() -> Vec<AttendanceEntry> {
    use AttendanceStatus::{Absent, Present};
    use Department::{Finance, Hr, It, Operations, Sales};

    let rows = [
        Seed("ATT012", "EMP001", "John Smith", It, date(2025, 11, 20), time(9, 0), time(18, 0), Present, false, false),
        Seed("ATT011", "EMP002", "Sarah Johnson", Hr, date(2025, 11, 20), time(9, 45), time(17, 30), Present, true, true),
        Seed("ATT010", "EMP003", "Michael Brown", Sales, date(2025, 11, 20), None, None, Absent, false, false),
        Seed("ATT009", "EMP004", "Emily Davis", Finance, date(2025, 11, 20), time(8, 30), time(17, 0), Present, false, false),
        Seed("ATT008", "EMP005", "David Wilson", It, date(2025, 11, 19), time(9, 10), time(18, 5), Present, true, false),
        Seed("ATT007", "EMP006", "Lisa Anderson", Operations, date(2025, 11, 19), time(8, 55), time(16, 40), Present, false, true),
        Seed("ATT006", "EMP007", "Robert Taylor", Sales, date(2025, 11, 19), time(9, 0), time(17, 45), Present, false, false),
        Seed("ATT005", "EMP008", "Jennifer Martinez", Hr, date(2025, 11, 19), None, None, Absent, false, false),
        Seed("ATT004", "EMP001", "John Smith", It, date(2025, 11, 18), time(8, 58), time(17, 52), Present, false, false),
        Seed("ATT003", "EMP004", "Emily Davis", Finance, date(2025, 11, 18), time(9, 20), time(18, 10), Present, true, false),
        Seed("ATT002", "EMP006", "Lisa Anderson", Operations, date(2025, 11, 18), None, None, Absent, false, false),
        Seed("ATT001", "EMP005", "David Wilson", It, date(2025, 11, 18), time(9, 0), time(17, 30), Present, false, false),
    ];

    rows.into_iter()
        .map(|Seed(id, emp, name, department, date, check_in, check_out, status, late, early)| {
            AttendanceEntry {
                id: id.to_string(),
                employee_id: emp.to_string(),
                employee_name: name.to_string(),
                department,
                date,
                check_in,
                check_out,
                status,
                late_arrival: late,
                early_leave: early,
            }
        })
        .collect()
}
