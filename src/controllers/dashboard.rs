use chrono::{Local, NaiveDate, Timelike};

use crate::controllers::announcements::AnnouncementsScreen;
use crate::controllers::attendance::AttendanceScreen;
use crate::controllers::leave::LeaveScreen;
use crate::errors::{AppError, render};
use crate::models::announcement::AnnouncementStatus;
use crate::models::attendance::AttendanceStatus;
use crate::models::chart::{headcount_by_department, status_mix};
use crate::surface::{DisplaySurface, SurfaceUpdate};
use crate::templates_structs::DashboardTemplate;

fn greeting_for_hour(hour: u32, username: &str) -> String {
    let period = match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        17..=21 => "Good evening",
        _ => "Good evening",
    };
    format!("{}, {}", period, username)
}

/// Landing screen. Reads over the three collections and paints headline
/// stats plus the two summary charts, so it carries no state of its own
/// beyond the signed-in name.
pub struct Dashboard {
    username: String,
}

impl Dashboard {
    pub fn new(username: impl Into<String>) -> Self {
        Dashboard { username: username.into() }
    }

    /// Paint the dashboard from the live collections. The reference date
    /// anchors "today", so the stats line up with the attendance data on
    /// screen rather than the wall clock.
    pub fn render(
        &self,
        announcements: &AnnouncementsScreen,
        attendance: &AttendanceScreen,
        leave: &LeaveScreen,
        reference: NaiveDate,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        let entries = attendance.core().records();
        let present_today = entries
            .iter()
            .filter(|e| e.date == reference && e.status == AttendanceStatus::Present)
            .count();
        let active_announcements = announcements
            .core()
            .records()
            .iter()
            .filter(|a| a.status == AnnouncementStatus::Active)
            .count();
        let pending_leave = leave.core().records().iter().filter(|r| r.is_pending()).count();

        let headcount_chart = headcount_by_department(entries).to_json();
        let status_chart = status_mix(entries, reference).to_json();
        surface.apply(SurfaceUpdate { container: "barChart", markup: headcount_chart.clone() });
        surface.apply(SurfaceUpdate { container: "pieChart", markup: status_chart.clone() });

        let markup = render(&DashboardTemplate {
            title: "Dashboard".to_string(),
            greeting: greeting_for_hour(Local::now().hour(), &self.username),
            present_today,
            active_announcements,
            pending_leave,
            headcount_chart,
            status_chart,
        })?;
        surface.apply(SurfaceUpdate { container: "dashboardContent", markup });
        Ok(())
    }
}
