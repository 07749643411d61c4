use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::models::attendance::{AttendanceEntry, AttendanceStatus, Department};

/// Payload handed to the charting collaborator. It redraws from this,
/// nothing flows back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u32>,
}

impl ChartData {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn department_labels() -> Vec<String> {
    Department::ALL.iter().map(|d| d.as_str().to_string()).collect()
}

fn is_on_time(e: &AttendanceEntry) -> bool {
    e.status == AttendanceStatus::Present && !e.late_arrival
}

fn is_late(e: &AttendanceEntry) -> bool {
    e.status == AttendanceStatus::Present && e.late_arrival
}

/// Present and Absent counts per department across the whole
/// collection.
pub fn department_summary(entries: &[AttendanceEntry]) -> ChartData {
    let mut present = vec![0u32; Department::ALL.len()];
    let mut absent = vec![0u32; Department::ALL.len()];
    for e in entries {
        match e.status {
            AttendanceStatus::Present => present[e.department.index()] += 1,
            AttendanceStatus::Absent => absent[e.department.index()] += 1,
        }
    }
    ChartData {
        labels: department_labels(),
        datasets: vec![
            Dataset { label: "Present".to_string(), data: present },
            Dataset { label: "Absent".to_string(), data: absent },
        ],
    }
}

/// Per-day status counts for the 7 days ending at `end`. A late
/// arrival counts as Late, not Present.
pub fn daily_trend(entries: &[AttendanceEntry], end: NaiveDate) -> ChartData {
    let days: Vec<NaiveDate> = (0..7)
        .rev()
        .map(|back| end.checked_sub_days(Days::new(back)).unwrap_or(end))
        .collect();
    let mut present = vec![0u32; days.len()];
    let mut absent = vec![0u32; days.len()];
    let mut late = vec![0u32; days.len()];
    for e in entries {
        let Some(slot) = days.iter().position(|d| *d == e.date) else {
            continue;
        };
        if is_on_time(e) {
            present[slot] += 1;
        } else if is_late(e) {
            late[slot] += 1;
        } else {
            absent[slot] += 1;
        }
    }
    ChartData {
        labels: days.iter().map(|d| d.format("%a, %b %-d").to_string()).collect(),
        datasets: vec![
            Dataset { label: "Present".to_string(), data: present },
            Dataset { label: "Absent".to_string(), data: absent },
            Dataset { label: "Late".to_string(), data: late },
        ],
    }
}

/// Distinct employees seen per department, for the dashboard bar.
pub fn headcount_by_department(entries: &[AttendanceEntry]) -> ChartData {
    let mut seen: Vec<BTreeSet<&str>> = vec![BTreeSet::new(); Department::ALL.len()];
    for e in entries {
        seen[e.department.index()].insert(e.employee_id.as_str());
    }
    ChartData {
        labels: department_labels(),
        datasets: vec![Dataset {
            label: "Employees".to_string(),
            data: seen.iter().map(|s| s.len() as u32).collect(),
        }],
    }
}

/// Present / Late / Absent split for one day, for the dashboard
/// doughnut.
pub fn status_mix(entries: &[AttendanceEntry], date: NaiveDate) -> ChartData {
    let mut data = vec![0u32; 3];
    for e in entries.iter().filter(|e| e.date == date) {
        if is_on_time(e) {
            data[0] += 1;
        } else if is_late(e) {
            data[1] += 1;
        } else {
            data[2] += 1;
        }
    }
    ChartData {
        labels: vec!["Present".to_string(), "Late".to_string(), "Absent".to_string()],
        datasets: vec![Dataset { label: "Entries".to_string(), data }],
    }
}
