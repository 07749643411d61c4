use std::path::Path;

use chrono::{Local, NaiveDate};

use hrboard::controllers::announcements::{AnnouncementEvent, AnnouncementsScreen, ViewMode};
use hrboard::controllers::attendance::{AttendanceEvent, AttendanceScreen};
use hrboard::controllers::dashboard::Dashboard;
use hrboard::controllers::leave::{LeaveEvent, LeaveScreen};
use hrboard::errors::{AppError, render};
use hrboard::models::announcement::{AnnouncementFilter, AnnouncementForm};
use hrboard::models::attendance::{self, AttendanceFilter, AttendanceForm};
use hrboard::models::leave::LeaveFilter;
use hrboard::models::page::DEFAULT_PAGE_SIZE;
use hrboard::surface::MemorySurface;
use hrboard::templates_structs::{
    AnnouncementsPageTemplate, AttendancePageTemplate, LeavePageTemplate, SelectOption,
};

const PER_PAGE_CHOICES: [(&str, &str); 3] = [("10", "10"), ("25", "25"), ("50", "50")];

/// Runs a scripted session against each screen and writes the resulting
/// pages and downloads into a preview directory, so the rendered output
/// can be inspected in a browser without any server in front.
fn main() -> Result<(), AppError> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let preview_dir =
        std::env::var("HRBOARD_PREVIEW_DIR").unwrap_or_else(|_| "preview".to_string());
    let per_page = match std::env::var("HRBOARD_PAGE_SIZE") {
        Ok(val) => match val.parse::<usize>() {
            Ok(n) if n > 0 => {
                log::info!("Using page size {n} from environment");
                n
            }
            _ => {
                log::warn!("HRBOARD_PAGE_SIZE is not a positive number ({val}), using {DEFAULT_PAGE_SIZE}");
                DEFAULT_PAGE_SIZE
            }
        },
        Err(_) => DEFAULT_PAGE_SIZE,
    };

    // Anchor "today" to the newest seeded attendance day so the stats and
    // charts have data on first paint.
    let reference = attendance::seed()
        .iter()
        .map(|e| e.date)
        .max()
        .unwrap_or_else(|| Local::now().date_naive());

    let dir = Path::new(&preview_dir);
    std::fs::create_dir_all(dir)?;
    log::info!("Rendering preview pages into {}", dir.display());

    let mut announcements = AnnouncementsScreen::new(reference, per_page);
    let mut attendance_screen = AttendanceScreen::new(reference, per_page);
    let mut leave = LeaveScreen::new(reference, per_page);

    announcements_session(&mut announcements, dir)?;
    attendance_session(&mut attendance_screen, dir, reference)?;
    leave_session(&mut leave, dir)?;
    dashboard_session(dir, &announcements, &attendance_screen, &leave, reference)?;

    log::info!("Preview complete");
    Ok(())
}

fn announcements_session(screen: &mut AnnouncementsScreen, dir: &Path) -> Result<(), AppError> {
    let mut surface = MemorySurface::new();
    screen.boot(&mut surface)?;

    if let Ok(raw) = std::env::var("HRBOARD_ANNOUNCEMENT_FILTER") {
        match AnnouncementFilter::from_json(&raw) {
            Ok(filter) => screen.set_criteria(filter, &mut surface)?,
            Err(e) => log::warn!("Ignoring HRBOARD_ANNOUNCEMENT_FILTER: {e}"),
        }
    }

    screen.handle(AnnouncementEvent::ViewDetails("ANN001".to_string()), &mut surface)?;
    screen.handle(
        AnnouncementEvent::Submit(AnnouncementForm {
            title: "Annual Performance Reviews".to_string(),
            category: "HR Updates".to_string(),
            priority: "High".to_string(),
            expiry_date: "2025-12-31".to_string(),
            content: "Performance review meetings run through the second week of December. \
                      Book a slot with your manager before the end of the month."
                .to_string(),
        }),
        &mut surface,
    )?;

    let page = AnnouncementsPageTemplate {
        title: "Announcements".to_string(),
        list_mode: matches!(screen.mode(), ViewMode::List),
        table_body: surface.container("announcementTableBody").to_string(),
        cards: surface.container("announcementCards").to_string(),
        pagination: surface.container("pagination").to_string(),
        record_info: surface.container("recordInfo").to_string(),
    };
    write_page(dir, "announcements.html", &render(&page)?)?;
    finish_session(dir, &surface)
}

fn attendance_session(
    screen: &mut AttendanceScreen,
    dir: &Path,
    reference: NaiveDate,
) -> Result<(), AppError> {
    let mut surface = MemorySurface::new();
    screen.boot(&mut surface)?;

    if let Ok(raw) = std::env::var("HRBOARD_ATTENDANCE_FILTER") {
        match AttendanceFilter::from_json(&raw) {
            Ok(filter) => screen.set_criteria(filter, &mut surface)?,
            Err(e) => log::warn!("Ignoring HRBOARD_ATTENDANCE_FILTER: {e}"),
        }
    }

    screen.handle(
        AttendanceEvent::Submit(AttendanceForm {
            employee_id: "EMP006".to_string(),
            employee_name: "Amanda Lee".to_string(),
            department: "Finance".to_string(),
            date: reference.to_string(),
            check_in: "09:15".to_string(),
            check_out: "17:45".to_string(),
            status: "Present".to_string(),
            late_arrival: true,
            early_leave: false,
        }),
        &mut surface,
    )?;
    screen.handle(AttendanceEvent::ExportOne("ATT012".to_string()), &mut surface)?;
    screen.handle(AttendanceEvent::ExportAll, &mut surface)?;

    let page = AttendancePageTemplate {
        title: "Attendance".to_string(),
        table_body: surface.container("attendanceTableBody").to_string(),
        pagination: surface.container("pagination").to_string(),
        record_info: surface.container("recordInfo").to_string(),
        per_page_options: SelectOption::list(&PER_PAGE_CHOICES, "10"),
        daily_chart: surface.container("dailyAttendanceChart").to_string(),
        department_chart: surface.container("departmentAttendanceChart").to_string(),
    };
    write_page(dir, "attendance.html", &render(&page)?)?;
    finish_session(dir, &surface)
}

fn leave_session(screen: &mut LeaveScreen, dir: &Path) -> Result<(), AppError> {
    let mut surface = MemorySurface::new();
    screen.boot(&mut surface)?;

    if let Ok(raw) = std::env::var("HRBOARD_LEAVE_FILTER") {
        match LeaveFilter::from_json(&raw) {
            Ok(filter) => screen.set_criteria(filter, &mut surface)?,
            Err(e) => log::warn!("Ignoring HRBOARD_LEAVE_FILTER: {e}"),
        }
    }

    screen.handle(LeaveEvent::Approve("LV001".to_string()), &mut surface)?;
    screen.handle(LeaveEvent::Reject("LV002".to_string()), &mut surface)?;
    screen.handle(
        LeaveEvent::ConfirmReject("Team coverage is too thin that week.".to_string()),
        &mut surface,
    )?;
    screen.handle(LeaveEvent::Export, &mut surface)?;

    let page = LeavePageTemplate {
        title: "Leave Approvals".to_string(),
        table_body: surface.container("leaveTableBody").to_string(),
        pagination: surface.container("pagination").to_string(),
        record_info: surface.container("recordInfo").to_string(),
        per_page_options: SelectOption::list(&PER_PAGE_CHOICES, "10"),
    };
    write_page(dir, "leave.html", &render(&page)?)?;
    finish_session(dir, &surface)
}

fn dashboard_session(
    dir: &Path,
    announcements: &AnnouncementsScreen,
    attendance: &AttendanceScreen,
    leave: &LeaveScreen,
    reference: NaiveDate,
) -> Result<(), AppError> {
    let username = std::env::var("HRBOARD_USER").unwrap_or_else(|_| "HR Admin".to_string());
    let mut surface = MemorySurface::new();
    Dashboard::new(username).render(announcements, attendance, leave, reference, &mut surface)?;
    write_page(dir, "dashboard.html", surface.container("dashboardContent"))
}

fn write_page(dir: &Path, name: &str, markup: &str) -> Result<(), AppError> {
    let path = dir.join(name);
    std::fs::write(&path, markup)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Persist the session's downloads next to the pages and echo its toasts.
fn finish_session(dir: &Path, surface: &MemorySurface) -> Result<(), AppError> {
    for file in &surface.downloads {
        let path = dir.join(&file.name);
        std::fs::write(&path, &file.contents)?;
        log::info!("Saved {} ({})", path.display(), file.mime);
    }
    for (message, _) in &surface.toasts {
        log::info!("toast: {message}");
    }
    Ok(())
}
