use chrono::NaiveDate;

use crate::controllers::paint_pagination;
use crate::errors::{AppError, render};
use crate::models::attendance::{
    self, AttendanceEntry, AttendanceFilter, AttendanceForm, Department,
};
use crate::models::chart;
use crate::models::csv::{CSV_MIME, build_csv, export_filename};
use crate::models::list::{ListCore, Placement};
use crate::surface::{DisplaySurface, SurfaceUpdate, Tone};
use crate::templates_structs::{
    AttendanceDetailTemplate, AttendanceFormTemplate, AttendanceRow, AttendanceTableTemplate,
};

const CSV_HEADER: &str =
    "Employee ID,Name,Department,Date,Check In,Check Out,Status,Total Hours";

/// Inputs the attendance screen reacts to. The "All Departments"
/// sentinel fails to parse and clears the predicate.
#[derive(Debug, Clone)]
pub enum AttendanceEvent {
    Search(String),
    DepartmentChanged(String),
    DateChanged(String),
    PageChanged(usize),
    PageSizeChanged(usize),
    ViewDetails(String),
    AddEntry,
    Submit(AttendanceForm),
    ExportOne(String),
    ExportAll,
}

pub struct AttendanceScreen {
    core: ListCore<AttendanceEntry, AttendanceFilter>,
    counter: u32,
    today: NaiveDate,
}

impl AttendanceScreen {
    pub fn new(today: NaiveDate, per_page: usize) -> Self {
        let core = ListCore::seeded("attendance entry", attendance::seed(), per_page);
        let counter = core.max_id_suffix("ATT");
        AttendanceScreen { core, counter, today }
    }

    pub fn core(&self) -> &ListCore<AttendanceEntry, AttendanceFilter> {
        &self.core
    }

    /// First paint: table, pagination and both chart payloads.
    pub fn boot(&mut self, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        self.render_list(surface)?;
        self.render_charts(surface);
        Ok(())
    }

    /// Wholesale criteria replacement, for externally supplied filters.
    pub fn set_criteria(
        &mut self,
        filter: AttendanceFilter,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        self.core.set_filter(filter);
        self.render_list(surface)
    }

    pub fn handle(
        &mut self,
        event: AttendanceEvent,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        match event {
            AttendanceEvent::Search(term) => {
                let mut filter = self.core.filter().clone();
                filter.search = term;
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            AttendanceEvent::DepartmentChanged(value) => {
                let mut filter = self.core.filter().clone();
                filter.department = Department::parse(&value);
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            AttendanceEvent::DateChanged(value) => {
                let mut filter = self.core.filter().clone();
                filter.date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            AttendanceEvent::PageChanged(page) => {
                self.core.set_page(page);
                self.render_list(surface)
            }
            AttendanceEvent::PageSizeChanged(per_page) => {
                self.core.set_page_size(per_page);
                self.render_list(surface)
            }
            AttendanceEvent::ViewDetails(id) => self.view_details(&id, surface),
            AttendanceEvent::AddEntry => {
                self.show_form(&AttendanceForm::default(), Vec::new(), surface)
            }
            AttendanceEvent::Submit(form) => self.submit(form, surface),
            AttendanceEvent::ExportOne(id) => self.export_one(&id, surface),
            AttendanceEvent::ExportAll => self.export_all(surface),
        }
    }

    fn view_details(&self, id: &str, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let Some(entry) = self.core.find(id) else {
            log::warn!("attendance entry {id} not found");
            return Ok(());
        };
        let markup = render(&AttendanceDetailTemplate::new(entry))?;
        surface.show_overlay("attendanceDetailsModal", markup);
        Ok(())
    }

    fn show_form(
        &self,
        form: &AttendanceForm,
        errors: Vec<String>,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        let markup = render(&AttendanceFormTemplate::new(form, errors))?;
        surface.show_overlay("attendanceEntryModal", markup);
        Ok(())
    }

    /// Commit the manual-entry dialog. New entries land at the top of
    /// the collection and the charts refresh with them.
    fn submit(&mut self, form: AttendanceForm, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let new = match form.parse() {
            Ok(new) => new,
            Err(messages) => return self.show_form(&form, messages, surface),
        };
        self.counter += 1;
        let entry = AttendanceEntry {
            id: format!("ATT{:03}", self.counter),
            employee_id: new.employee_id,
            employee_name: new.employee_name,
            department: new.department,
            date: new.date,
            check_in: new.check_in,
            check_out: new.check_out,
            status: new.status,
            late_arrival: new.late_arrival,
            early_leave: new.early_leave,
        };
        self.core.insert(entry, Placement::First);
        surface.hide_overlay("attendanceEntryModal");
        surface.notify("Attendance entry added successfully!", Tone::Success);
        self.render_list(surface)?;
        self.render_charts(surface);
        Ok(())
    }

    fn export_one(&self, id: &str, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let Some(entry) = self.core.find(id) else {
            log::warn!("attendance entry {id} not found");
            return Ok(());
        };
        let csv = build_csv(CSV_HEADER, &[csv_row(entry)]);
        let name = export_filename("attendance", Some(&entry.id), entry.date);
        surface.save_file(&name, CSV_MIME, &csv)?;
        Ok(())
    }

    /// Export the whole collection, not just the filtered view.
    fn export_all(&self, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let rows: Vec<Vec<String>> = self.core.records().iter().map(csv_row).collect();
        let csv = build_csv(CSV_HEADER, &rows);
        let name = export_filename("attendance", None, self.today);
        surface.save_file(&name, CSV_MIME, &csv)?;
        Ok(())
    }

    fn render_list(&self, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let rows: Vec<AttendanceRow> =
            self.core.page_slice().into_iter().map(AttendanceRow::new).collect();
        let markup = render(&AttendanceTableTemplate { rows })?;
        surface.apply(SurfaceUpdate { container: "attendanceTableBody", markup });
        paint_pagination(&self.core.window(), surface)
    }

    /// Chart payloads cover the whole collection regardless of the
    /// active criteria; the trend window ends at the reference date.
    fn render_charts(&self, surface: &mut dyn DisplaySurface) {
        let daily = chart::daily_trend(self.core.records(), self.today);
        surface.apply(SurfaceUpdate {
            container: "dailyAttendanceChart",
            markup: daily.to_json(),
        });
        let departments = chart::department_summary(self.core.records());
        surface.apply(SurfaceUpdate {
            container: "departmentAttendanceChart",
            markup: departments.to_json(),
        });
    }
}

fn csv_row(entry: &AttendanceEntry) -> Vec<String> {
    vec![
        entry.employee_id.clone(),
        entry.employee_name.clone(),
        entry.department.as_str().to_string(),
        entry.date.to_string(),
        entry.check_in_display(),
        entry.check_out_display(),
        entry.status.as_str().to_string(),
        entry.hours_display(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn screen() -> AttendanceScreen {
        AttendanceScreen::new(day(2025, 11, 20), 10)
    }

    #[test]
    fn department_and_date_filters_combine() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AttendanceEvent::DepartmentChanged("IT".to_string()), &mut surface).unwrap();
        assert_eq!(s.core().filtered_len(), 4);
        s.handle(AttendanceEvent::DateChanged("2025-11-18".to_string()), &mut surface).unwrap();
        assert_eq!(s.core().filtered_len(), 2);
        let body = surface.container("attendanceTableBody");
        assert!(body.contains("ATT004") || body.contains("EMP001"));
    }

    #[test]
    fn sentinel_department_clears_the_predicate() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AttendanceEvent::DepartmentChanged("HR".to_string()), &mut surface).unwrap();
        assert_eq!(s.core().filtered_len(), 2);
        s.handle(AttendanceEvent::DepartmentChanged("All Departments".to_string()), &mut surface)
            .unwrap();
        assert_eq!(s.core().filtered_len(), 12);
    }

    #[test]
    fn manual_entry_lands_first_and_refreshes_charts() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        let form = AttendanceForm {
            employee_id: "EMP009".to_string(),
            employee_name: "Carlos Vega".to_string(),
            department: "Sales".to_string(),
            date: "2025-11-20".to_string(),
            check_in: "09:05".to_string(),
            check_out: "17:40".to_string(),
            status: "Present".to_string(),
            late_arrival: true,
            early_leave: false,
        };
        s.handle(AttendanceEvent::Submit(form), &mut surface).unwrap();
        assert_eq!(s.core().records()[0].id, "ATT013");
        assert_eq!(s.core().len(), 13);
        assert!(!surface.is_overlay_open("attendanceEntryModal"));
        assert!(surface.container("dailyAttendanceChart").contains("datasets"));
        let (message, tone) = &surface.toasts[0];
        assert_eq!(message, "Attendance entry added successfully!");
        assert_eq!(*tone, Tone::Success);
    }

    #[test]
    fn absent_entry_drops_times_and_flags() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        let form = AttendanceForm {
            employee_id: "EMP010".to_string(),
            employee_name: "Dana Fox".to_string(),
            department: "Finance".to_string(),
            date: "2025-11-20".to_string(),
            check_in: "09:00".to_string(),
            check_out: "17:00".to_string(),
            status: "Absent".to_string(),
            late_arrival: true,
            early_leave: true,
        };
        s.handle(AttendanceEvent::Submit(form), &mut surface).unwrap();
        let entry = &s.core().records()[0];
        assert_eq!(entry.check_in, None);
        assert_eq!(entry.check_out, None);
        assert!(!entry.late_arrival);
        assert!(!entry.early_leave);
    }

    #[test]
    fn invalid_times_re_present_the_form() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        let form = AttendanceForm {
            employee_id: "EMP011".to_string(),
            employee_name: "Erin Cole".to_string(),
            department: "IT".to_string(),
            date: "2025-11-20".to_string(),
            check_in: "17:00".to_string(),
            check_out: "09:00".to_string(),
            status: "Present".to_string(),
            late_arrival: false,
            early_leave: false,
        };
        s.handle(AttendanceEvent::Submit(form), &mut surface).unwrap();
        assert!(surface.is_overlay_open("attendanceEntryModal"));
        assert!(
            surface
                .overlay("attendanceEntryModal")
                .contains("Check out must be after check in")
        );
        assert_eq!(s.core().len(), 12);
    }

    #[test]
    fn single_export_names_the_record() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AttendanceEvent::ExportOne("ATT012".to_string()), &mut surface).unwrap();
        let file = &surface.downloads[0];
        assert_eq!(file.name, "attendance_ATT012_2025-11-20.csv");
        assert!(file.contents.starts_with(CSV_HEADER));
        assert!(file.contents.contains("EMP001,John Smith,IT,2025-11-20,09:00,18:00,Present,9.0"));
    }

    #[test]
    fn full_export_covers_the_collection_in_order() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AttendanceEvent::DepartmentChanged("IT".to_string()), &mut surface).unwrap();
        s.handle(AttendanceEvent::ExportAll, &mut surface).unwrap();
        let file = &surface.downloads[0];
        assert_eq!(file.name, "attendance_report_2025-11-20.csv");
        assert_eq!(file.contents.lines().count(), 13);
        let first = file.contents.lines().nth(1).unwrap();
        assert!(first.starts_with("EMP001"));
    }

    #[test]
    fn detail_overlay_shows_flags_and_rate() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AttendanceEvent::ViewDetails("ATT011".to_string()), &mut surface).unwrap();
        let overlay = surface.overlay("attendanceDetailsModal");
        assert!(overlay.contains("Sarah Johnson"));
        assert!(overlay.contains("100%"));
        assert!(overlay.contains("Late Arrival"));
    }

    #[test]
    fn page_change_walks_the_filtered_view() {
        let mut s = AttendanceScreen::new(day(2025, 11, 20), 5);
        let mut surface = MemorySurface::new();
        s.boot(&mut surface).unwrap();
        assert!(surface.container("recordInfo").contains("Showing 1-5 of 12 records"));
        s.handle(AttendanceEvent::PageChanged(3), &mut surface).unwrap();
        assert!(surface.container("recordInfo").contains("Showing 11-12 of 12 records"));
        assert!(surface.container("attendanceTableBody").contains("ATT002") || {
            let body = surface.container("attendanceTableBody");
            body.contains("EMP006")
        });
    }
}
