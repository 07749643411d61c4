use askama::Template;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub greeting: String,
    // Headline stats
    pub present_today: usize,
    pub active_announcements: usize,
    pub pending_leave: usize,
    // Chart payloads, serialized once and embedded as JSON islands
    pub headcount_chart: String,
    pub status_chart: String,
}
