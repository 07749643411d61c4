use chrono::NaiveDate;

use crate::controllers::paint_pagination;
use crate::errors::{AppError, render};
use crate::models::attendance::Department;
use crate::models::csv::{CSV_MIME, build_csv, export_filename};
use crate::models::leave::{
    self, LeaveFilter, LeaveForm, LeaveRequest, LeaveStatus, LeaveType,
};
use crate::models::list::{ListCore, Placement};
use crate::surface::{DisplaySurface, SurfaceUpdate, Tone};
use crate::templates_structs::{
    LeaveDetailTemplate, LeaveFormTemplate, LeaveRow, LeaveTableTemplate, RejectFormTemplate,
};

const CSV_HEADER: &str =
    "Employee ID,Employee Name,Department,Leave Type,Start Date,End Date,Days,Reason,Applied On,Status";

/// Inputs the leave screen reacts to. Select values arrive raw; the
/// "all" sentinel fails to parse and clears the predicate.
#[derive(Debug, Clone)]
pub enum LeaveEvent {
    Search(String),
    StatusChanged(String),
    TypeChanged(String),
    DepartmentChanged(String),
    FromDateChanged(String),
    /// One of the status quick-view buttons; replaces all criteria.
    StatusView(String),
    PageChanged(usize),
    PageSizeChanged(usize),
    ViewDetails(String),
    Approve(String),
    Reject(String),
    ConfirmReject(String),
    NewRequest,
    Submit(LeaveForm),
    Export,
}

pub struct LeaveScreen {
    core: ListCore<LeaveRequest, LeaveFilter>,
    counter: u32,
    /// Request id the open rejection prompt belongs to.
    pending_rejection: Option<String>,
    today: NaiveDate,
}

impl LeaveScreen {
    pub fn new(today: NaiveDate, per_page: usize) -> Self {
        let core = ListCore::seeded("leave request", leave::seed(), per_page);
        let counter = core.max_id_suffix("LV");
        LeaveScreen { core, counter, pending_rejection: None, today }
    }

    pub fn core(&self) -> &ListCore<LeaveRequest, LeaveFilter> {
        &self.core
    }

    /// First paint.
    pub fn boot(&mut self, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        self.render_list(surface)
    }

    /// Wholesale criteria replacement, for externally supplied filters.
    pub fn set_criteria(
        &mut self,
        filter: LeaveFilter,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        self.core.set_filter(filter);
        self.render_list(surface)
    }

    pub fn handle(
        &mut self,
        event: LeaveEvent,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        match event {
            LeaveEvent::Search(term) => {
                let mut filter = self.core.filter().clone();
                filter.search = term;
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            LeaveEvent::StatusChanged(value) => {
                let mut filter = self.core.filter().clone();
                filter.status = LeaveStatus::parse(&value);
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            LeaveEvent::TypeChanged(value) => {
                let mut filter = self.core.filter().clone();
                filter.leave_type = LeaveType::parse(&value);
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            LeaveEvent::DepartmentChanged(value) => {
                let mut filter = self.core.filter().clone();
                filter.department = Department::parse(&value);
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            LeaveEvent::FromDateChanged(value) => {
                let mut filter = self.core.filter().clone();
                filter.from_date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            LeaveEvent::StatusView(value) => {
                self.core.set_filter(LeaveFilter::status_view(LeaveStatus::parse(&value)));
                self.render_list(surface)
            }
            LeaveEvent::PageChanged(page) => {
                self.core.set_page(page);
                self.render_list(surface)
            }
            LeaveEvent::PageSizeChanged(per_page) => {
                self.core.set_page_size(per_page);
                self.render_list(surface)
            }
            LeaveEvent::ViewDetails(id) => self.view_details(&id, surface),
            LeaveEvent::Approve(id) => self.approve(&id, surface),
            LeaveEvent::Reject(id) => self.open_rejection(&id, surface),
            LeaveEvent::ConfirmReject(reason) => self.confirm_reject(reason, surface),
            LeaveEvent::NewRequest => self.show_form(&LeaveForm::default(), Vec::new(), surface),
            LeaveEvent::Submit(form) => self.submit(form, surface),
            LeaveEvent::Export => self.export(surface),
        }
    }

    fn view_details(&self, id: &str, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let Some(request) = self.core.find(id) else {
            log::warn!("leave request {id} not found");
            return Ok(());
        };
        let markup = render(&LeaveDetailTemplate::new(request))?;
        surface.show_overlay("leaveDetailsModal", markup);
        Ok(())
    }

    /// Approve a pending request. Both the row button and the detail
    /// panel land here, and both go through the confirmation prompt.
    fn approve(&mut self, id: &str, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let name = match self.core.find(id) {
            Some(request) if request.is_pending() => request.employee_name.clone(),
            Some(_) => return Ok(()),
            None => {
                log::warn!("leave request {id} not found");
                return Ok(());
            }
        };
        if !surface.confirm(&format!("Approve leave request for {name}?")) {
            return Ok(());
        }
        let today = self.today;
        if let Err(e) = self.core.modify(id, |request| {
            request.approve(today);
        }) {
            log::warn!("{e}");
            return Ok(());
        }
        surface.hide_overlay("leaveDetailsModal");
        surface.notify(&format!("Leave approved for {name}"), Tone::Success);
        self.render_list(surface)
    }

    /// Open the rejection-reason prompt for a pending request.
    fn open_rejection(&mut self, id: &str, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let name = match self.core.find(id) {
            Some(request) if request.is_pending() => request.employee_name.clone(),
            Some(_) => return Ok(()),
            None => {
                log::warn!("leave request {id} not found");
                return Ok(());
            }
        };
        self.pending_rejection = Some(id.to_string());
        self.show_reject_form(&name, "", Vec::new(), surface)
    }

    /// Commit the rejection prompt. The reason is validated before the
    /// status is checked, so a blank reason re-presents the prompt.
    fn confirm_reject(&mut self, reason: String, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let Some(id) = self.pending_rejection.clone() else {
            log::warn!("no rejection in progress");
            return Ok(());
        };
        let today = self.today;
        let mut outcome: Result<bool, AppError> = Ok(false);
        let updated = match self.core.modify(&id, |request| {
            outcome = request.reject(&reason, today);
        }) {
            Ok(updated) => updated,
            Err(e) => {
                log::warn!("{e}");
                self.pending_rejection = None;
                surface.hide_overlay("rejectionReasonModal");
                return Ok(());
            }
        };
        match outcome {
            Err(AppError::Validation(messages)) => {
                self.show_reject_form(&updated.employee_name, &reason, messages, surface)
            }
            Ok(true) => {
                self.pending_rejection = None;
                surface.hide_overlay("rejectionReasonModal");
                surface.hide_overlay("leaveDetailsModal");
                surface
                    .notify(&format!("Leave rejected for {}", updated.employee_name), Tone::Danger);
                self.render_list(surface)
            }
            Ok(false) => {
                self.pending_rejection = None;
                surface.hide_overlay("rejectionReasonModal");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn show_reject_form(
        &self,
        employee_name: &str,
        reason: &str,
        errors: Vec<String>,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        let markup = render(&RejectFormTemplate {
            employee_name: employee_name.to_string(),
            reason: reason.to_string(),
            errors,
        })?;
        surface.show_overlay("rejectionReasonModal", markup);
        Ok(())
    }

    fn show_form(
        &self,
        form: &LeaveForm,
        errors: Vec<String>,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        let markup = render(&LeaveFormTemplate::new(form, errors))?;
        surface.show_overlay("leaveRequestModal", markup);
        Ok(())
    }

    /// Commit the new-request dialog. Fresh requests start pending and
    /// join the end of the collection, application order.
    fn submit(&mut self, form: LeaveForm, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let new = match form.parse() {
            Ok(new) => new,
            Err(messages) => return self.show_form(&form, messages, surface),
        };
        self.counter += 1;
        let request = LeaveRequest {
            id: format!("LV{:03}", self.counter),
            employee_id: new.employee_id,
            employee_name: new.employee_name.clone(),
            department: new.department,
            leave_type: new.leave_type,
            start_date: new.start_date,
            end_date: new.end_date,
            days: new.days,
            reason: new.reason,
            applied_on: self.today,
            status: LeaveStatus::Pending,
            requested_by: new.employee_name,
            contact_info: new.contact_info,
            emergency_contact: new.emergency_contact,
            decided_on: None,
            rejection_reason: None,
        };
        self.core.insert(request, Placement::Last);
        surface.hide_overlay("leaveRequestModal");
        surface.notify("Leave request submitted successfully!", Tone::Success);
        self.render_list(surface)
    }

    /// Export the whole collection, not just the filtered view.
    fn export(&self, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let rows: Vec<Vec<String>> = self.core.records().iter().map(csv_row).collect();
        let csv = build_csv(CSV_HEADER, &rows);
        let name = export_filename("leave", None, self.today);
        surface.save_file(&name, CSV_MIME, &csv)?;
        surface.notify("Leave data exported successfully!", Tone::Success);
        Ok(())
    }

    fn render_list(&self, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let rows: Vec<LeaveRow> = self.core.page_slice().into_iter().map(LeaveRow::new).collect();
        let markup = render(&LeaveTableTemplate { rows })?;
        surface.apply(SurfaceUpdate { container: "leaveTableBody", markup });
        paint_pagination(&self.core.window(), surface)
    }
}

fn csv_row(request: &LeaveRequest) -> Vec<String> {
    vec![
        request.employee_id.clone(),
        request.employee_name.clone(),
        request.department.as_str().to_string(),
        request.leave_type.display().to_string(),
        request.start_date.to_string(),
        request.end_date.to_string(),
        request.days.to_string(),
        request.reason.clone(),
        request.applied_on.to_string(),
        request.status.code().to_string(),
    ]
}
