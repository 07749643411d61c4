//! Leave approval tests: the pending/approved/rejected state machine.
//!
//! Covers:
//! - Approval with the confirmation prompt, including the declined path
//! - Rejection through the reason prompt with validation
//! - Terminal requests staying immutable
//! - Status quick views, submission and the CSV report

mod common;

use common::*;
use hrboard::controllers::leave::LeaveEvent;
use hrboard::models::leave::{LeaveForm, LeaveStatus};
use hrboard::surface::Tone;

const REJECTION_REASON: &str = "Team coverage is too thin that week.";

#[test]
fn test_approve_pending_request() {
    let mut screen = leave_screen(10);
    let mut surface = surface();
    screen.boot(&mut surface).expect("Failed to boot screen");

    screen
        .handle(LeaveEvent::Approve("LV001".to_string()), &mut surface)
        .expect("Failed to approve");

    assert_eq!(surface.prompts, vec!["Approve leave request for John Smith?"]);
    let request = screen.core().find("LV001").expect("LV001 missing");
    assert_eq!(request.status, LeaveStatus::Approved);
    assert_eq!(request.decided_on, Some(reference_date()));
    let (message, tone) = &surface.toasts[0];
    assert_eq!(message, "Leave approved for John Smith");
    assert_eq!(*tone, Tone::Success);

    println!("[PASS] test_approve_pending_request");
}

#[test]
fn test_declined_approval_keeps_request_pending() {
    let mut screen = leave_screen(10);
    let mut surface = declining_surface();
    screen.boot(&mut surface).expect("Failed to boot screen");

    screen
        .handle(LeaveEvent::Approve("LV001".to_string()), &mut surface)
        .expect("Failed to handle approve");

    assert_eq!(surface.prompts.len(), 1, "prompt must still be shown");
    let request = screen.core().find("LV001").expect("LV001 missing");
    assert_eq!(request.status, LeaveStatus::Pending);
    assert_eq!(request.decided_on, None);
    assert!(surface.toasts.is_empty());

    println!("[PASS] test_declined_approval_keeps_request_pending");
}

#[test]
fn test_rejection_requires_a_reason() {
    let mut screen = leave_screen(10);
    let mut surface = surface();
    screen.boot(&mut surface).expect("Failed to boot screen");

    screen
        .handle(LeaveEvent::Reject("LV002".to_string()), &mut surface)
        .expect("Failed to open rejection prompt");
    assert!(surface.is_overlay_open("rejectionReasonModal"));

    // A blank reason re-presents the prompt with the message.
    screen
        .handle(LeaveEvent::ConfirmReject("  ".to_string()), &mut surface)
        .expect("Blank reason must not error");
    assert!(surface.is_overlay_open("rejectionReasonModal"));
    assert!(
        surface.overlay("rejectionReasonModal").contains("Please provide a rejection reason.")
    );
    assert_eq!(
        screen.core().find("LV002").expect("LV002 missing").status,
        LeaveStatus::Pending
    );

    screen
        .handle(LeaveEvent::ConfirmReject(REJECTION_REASON.to_string()), &mut surface)
        .expect("Failed to reject");
    let request = screen.core().find("LV002").expect("LV002 missing");
    assert_eq!(request.status, LeaveStatus::Rejected);
    assert_eq!(request.rejection_reason.as_deref(), Some(REJECTION_REASON));
    assert_eq!(request.decided_on, Some(reference_date()));
    assert!(!surface.is_overlay_open("rejectionReasonModal"));
    let (message, tone) = surface.toasts.last().expect("Rejection toast missing");
    assert_eq!(message, "Leave rejected for Sarah Johnson");
    assert_eq!(*tone, Tone::Danger);

    println!("[PASS] test_rejection_requires_a_reason");
}

#[test]
fn test_terminal_requests_stay_immutable() {
    let mut screen = leave_screen(10);
    let mut surface = surface();
    screen.boot(&mut surface).expect("Failed to boot screen");

    // LV006 is already rejected, LV004 already approved.
    screen
        .handle(LeaveEvent::Approve("LV006".to_string()), &mut surface)
        .expect("Failed to handle approve");
    assert!(surface.prompts.is_empty(), "no prompt for a decided request");
    assert_eq!(
        screen.core().find("LV006").expect("LV006 missing").status,
        LeaveStatus::Rejected
    );

    screen
        .handle(LeaveEvent::Reject("LV004".to_string()), &mut surface)
        .expect("Failed to handle reject");
    assert!(!surface.is_overlay_open("rejectionReasonModal"));
    assert_eq!(
        screen.core().find("LV004").expect("LV004 missing").status,
        LeaveStatus::Approved
    );

    println!("[PASS] test_terminal_requests_stay_immutable");
}

#[test]
fn test_status_quick_views() {
    let mut screen = leave_screen(10);
    let mut surface = surface();
    screen.boot(&mut surface).expect("Failed to boot screen");

    screen
        .handle(LeaveEvent::StatusView("pending".to_string()), &mut surface)
        .expect("Failed to switch view");
    assert_eq!(screen.core().filtered_len(), 4);

    screen
        .handle(LeaveEvent::StatusView("approved".to_string()), &mut surface)
        .expect("Failed to switch view");
    assert_eq!(screen.core().filtered_len(), 3);

    screen
        .handle(LeaveEvent::StatusView("rejected".to_string()), &mut surface)
        .expect("Failed to switch view");
    assert_eq!(screen.core().filtered_len(), 1);

    screen
        .handle(LeaveEvent::StatusView("all".to_string()), &mut surface)
        .expect("Failed to switch view");
    assert_eq!(screen.core().filtered_len(), 8);

    println!("[PASS] test_status_quick_views");
}

#[test]
fn test_submission_derives_the_day_span() {
    let mut screen = leave_screen(10);
    let mut surface = surface();
    screen.boot(&mut surface).expect("Failed to boot screen");

    let form = LeaveForm {
        employee_id: "EMP009".to_string(),
        employee_name: "Carlos Vega".to_string(),
        department: "Sales".to_string(),
        leave_type: "annual".to_string(),
        start_date: "2025-12-22".to_string(),
        end_date: "2025-12-26".to_string(),
        reason: "Year-end trip".to_string(),
        contact_info: "carlos.vega@company.com".to_string(),
        emergency_contact: String::new(),
    };
    screen.handle(LeaveEvent::Submit(form), &mut surface).expect("Failed to submit");

    let request = screen.core().records().last().expect("Submitted request missing");
    assert_eq!(request.id, "LV009");
    assert_eq!(request.status, LeaveStatus::Pending);
    assert_eq!(request.days, 5, "both endpoints count");
    assert_eq!(request.applied_on, reference_date());
    assert!(!surface.is_overlay_open("leaveRequestModal"));
    let (message, _) = surface.toasts.last().expect("Submission toast missing");
    assert_eq!(message, "Leave request submitted successfully!");

    println!("[PASS] test_submission_derives_the_day_span");
}

#[test]
fn test_export_writes_the_full_report() {
    let mut screen = leave_screen(10);
    let mut surface = surface();
    screen.boot(&mut surface).expect("Failed to boot screen");

    screen
        .handle(LeaveEvent::StatusView("pending".to_string()), &mut surface)
        .expect("Failed to switch view");
    screen.handle(LeaveEvent::Export, &mut surface).expect("Failed to export");

    let file = &surface.downloads[0];
    assert_eq!(file.name, "leave_report_2025-11-20.csv");
    assert_eq!(file.contents.lines().count(), 9, "header plus all eight requests");
    assert!(file.contents.starts_with(
        "Employee ID,Employee Name,Department,Leave Type,Start Date,End Date,Days,Reason,Applied On,Status"
    ));
    assert!(file.contents.contains("Maternity Leave"));
    let (message, _) = surface.toasts.last().expect("Export toast missing");
    assert_eq!(message, "Leave data exported successfully!");

    println!("[PASS] test_export_writes_the_full_report");
}

#[test]
fn test_pending_rows_offer_decisions() {
    let mut screen = leave_screen(10);
    let mut surface = surface();
    screen.boot(&mut surface).expect("Failed to boot screen");

    let body = surface.container("attendanceTableBody");
    assert_eq!(body, "", "leave screen must not touch other containers");

    let rows = surface.container("leaveTableBody");
    assert_eq!(rows.matches("data-action=\"approve\"").count(), 4);
    assert_eq!(rows.matches("data-action=\"reject\"").count(), 4);
    assert_eq!(rows.matches("data-action=\"view\"").count(), 8);

    println!("[PASS] test_pending_rows_offer_decisions");
}
