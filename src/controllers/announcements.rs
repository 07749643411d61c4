use chrono::{Days, NaiveDate};

use crate::controllers::paint_pagination;
use crate::errors::{AppError, render};
use crate::models::announcement::{
    self, Announcement, AnnouncementFilter, AnnouncementForm, AnnouncementStatus, Category,
    Priority,
};
use crate::models::list::{ListCore, Placement};
use crate::surface::{DisplaySurface, SurfaceUpdate, Tone};
use crate::templates_structs::{
    AnnouncementCard, AnnouncementCardsTemplate, AnnouncementDetailTemplate,
    AnnouncementFormTemplate, AnnouncementRow, AnnouncementTableTemplate,
};

/// Which of the two list renderings is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Card,
}

/// Inputs the announcements screen reacts to. Select values arrive
/// raw; the sentinel entries ("All Categories", "All Priorities")
/// simply fail to parse and clear the predicate.
#[derive(Debug, Clone)]
pub enum AnnouncementEvent {
    Search(String),
    CategoryChanged(String),
    PriorityChanged(String),
    DateChanged(String),
    PageChanged(usize),
    PageSizeChanged(usize),
    ModeChanged(ViewMode),
    ViewDetails(String),
    Compose,
    Edit(String),
    Submit(AnnouncementForm),
    Delete(String),
}

pub struct AnnouncementsScreen {
    core: ListCore<Announcement, AnnouncementFilter>,
    mode: ViewMode,
    counter: u32,
    editing: Option<String>,
    today: NaiveDate,
}

impl AnnouncementsScreen {
    pub fn new(today: NaiveDate, per_page: usize) -> Self {
        let core = ListCore::seeded("announcement", announcement::seed(), per_page);
        let counter = core.max_id_suffix("ANN");
        AnnouncementsScreen { core, mode: ViewMode::List, counter, editing: None, today }
    }

    pub fn core(&self) -> &ListCore<Announcement, AnnouncementFilter> {
        &self.core
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// First paint.
    pub fn boot(&mut self, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        self.render_list(surface)
    }

    /// Wholesale criteria replacement, for externally supplied filters.
    pub fn set_criteria(
        &mut self,
        filter: AnnouncementFilter,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        self.core.set_filter(filter);
        self.render_list(surface)
    }

    pub fn handle(
        &mut self,
        event: AnnouncementEvent,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        match event {
            AnnouncementEvent::Search(term) => {
                let mut filter = self.core.filter().clone();
                filter.search = term;
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            AnnouncementEvent::CategoryChanged(value) => {
                let mut filter = self.core.filter().clone();
                filter.category = Category::parse(&value);
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            AnnouncementEvent::PriorityChanged(value) => {
                let mut filter = self.core.filter().clone();
                filter.priority = Priority::parse(&value);
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            AnnouncementEvent::DateChanged(value) => {
                let mut filter = self.core.filter().clone();
                filter.date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();
                self.core.set_filter(filter);
                self.render_list(surface)
            }
            AnnouncementEvent::PageChanged(page) => {
                self.core.set_page(page);
                self.render_list(surface)
            }
            AnnouncementEvent::PageSizeChanged(per_page) => {
                self.core.set_page_size(per_page);
                self.render_list(surface)
            }
            AnnouncementEvent::ModeChanged(mode) => {
                self.mode = mode;
                self.render_list(surface)
            }
            AnnouncementEvent::ViewDetails(id) => self.view_details(&id, surface),
            AnnouncementEvent::Compose => {
                self.editing = None;
                self.show_form(&AnnouncementForm::default(), Vec::new(), surface)
            }
            AnnouncementEvent::Edit(id) => self.edit(&id, surface),
            AnnouncementEvent::Submit(form) => self.submit(form, surface),
            AnnouncementEvent::Delete(id) => self.delete(&id, surface),
        }
    }

    /// Opening the detail panel counts as a view, so the list repaints
    /// with the bumped counter.
    fn view_details(&mut self, id: &str, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let updated = match self.core.modify(id, |a| a.views += 1) {
            Ok(updated) => updated,
            Err(e) => {
                log::warn!("{e}");
                return Ok(());
            }
        };
        let markup = render(&AnnouncementDetailTemplate::new(&updated))?;
        surface.show_overlay("announcementDetailsModal", markup);
        self.render_list(surface)
    }

    fn edit(&mut self, id: &str, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let Some(existing) = self.core.find(id) else {
            log::warn!("announcement {id} not found");
            return Ok(());
        };
        let form = AnnouncementForm {
            title: existing.title.clone(),
            category: existing.category.as_str().to_string(),
            priority: existing.priority.as_str().to_string(),
            expiry_date: existing.expiry_date.to_string(),
            content: existing.content.clone(),
        };
        self.editing = Some(id.to_string());
        self.show_form(&form, Vec::new(), surface)
    }

    fn show_form(
        &self,
        form: &AnnouncementForm,
        errors: Vec<String>,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), AppError> {
        let markup = render(&AnnouncementFormTemplate::new(form, errors, self.editing.is_some()))?;
        surface.show_overlay("createAnnouncementModal", markup);
        Ok(())
    }

    /// Commit the compose/edit dialog. Validation failures re-present
    /// the form with the problems listed; editing updates the record in
    /// place and keeps its identity, date and view count.
    fn submit(&mut self, form: AnnouncementForm, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        let new = match form.parse() {
            Ok(new) => new,
            Err(messages) => return self.show_form(&form, messages, surface),
        };

        match self.editing.take() {
            Some(id) => {
                let result = self.core.modify(&id, |a| {
                    a.title = new.title.clone();
                    a.category = new.category;
                    a.priority = new.priority;
                    a.content = new.content.clone();
                    if let Some(expiry) = new.expiry_date {
                        a.expiry_date = expiry;
                    }
                });
                surface.hide_overlay("createAnnouncementModal");
                if let Err(e) = result {
                    log::warn!("{e}");
                    return Ok(());
                }
                surface.notify("Announcement updated successfully!", Tone::Success);
            }
            None => {
                self.counter += 1;
                let announcement = Announcement {
                    id: format!("ANN{:03}", self.counter),
                    title: new.title,
                    category: new.category,
                    priority: new.priority,
                    date: self.today,
                    views: 0,
                    status: AnnouncementStatus::Active,
                    expiry_date: new.expiry_date.unwrap_or_else(|| default_expiry(self.today)),
                    content: new.content,
                    audience: "All Employees".to_string(),
                    author: "HR Department".to_string(),
                };
                self.core.insert(announcement, Placement::First);
                surface.hide_overlay("createAnnouncementModal");
                surface.notify("Announcement created successfully!", Tone::Success);
            }
        }
        self.render_list(surface)
    }

    fn delete(&mut self, id: &str, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        if !surface.confirm("Are you sure you want to delete this announcement?") {
            return Ok(());
        }
        if !self.core.remove(id) {
            log::warn!("announcement {id} not found");
            return Ok(());
        }
        surface.notify("Announcement deleted successfully!", Tone::Success);
        self.render_list(surface)
    }

    /// Repaint the active view plus the shared pagination controls.
    /// Only the active rendering is refreshed; the other repaints when
    /// the mode switches back.
    fn render_list(&self, surface: &mut dyn DisplaySurface) -> Result<(), AppError> {
        match self.mode {
            ViewMode::List => {
                let rows: Vec<AnnouncementRow> =
                    self.core.page_slice().into_iter().map(AnnouncementRow::new).collect();
                let markup = render(&AnnouncementTableTemplate { rows })?;
                surface.apply(SurfaceUpdate { container: "announcementTableBody", markup });
            }
            ViewMode::Card => {
                let cards: Vec<AnnouncementCard> =
                    self.core.page_slice().into_iter().map(AnnouncementCard::new).collect();
                let markup = render(&AnnouncementCardsTemplate { cards })?;
                surface.apply(SurfaceUpdate { container: "announcementCards", markup });
            }
        }
        paint_pagination(&self.core.window(), surface)
    }
}

/// Expiry defaults to thirty days after publication.
fn default_expiry(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(30)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn screen() -> AnnouncementsScreen {
        AnnouncementsScreen::new(day(2025, 11, 20), 10)
    }

    #[test]
    fn created_ids_continue_past_the_seeds() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        let form = AnnouncementForm {
            title: "Parking lot closure".to_string(),
            category: "General".to_string(),
            priority: "Low".to_string(),
            expiry_date: String::new(),
            content: "The north parking lot will be closed next Monday.".to_string(),
        };
        s.handle(AnnouncementEvent::Submit(form), &mut surface).unwrap();
        assert_eq!(s.core().records()[0].id, "ANN009");
        assert_eq!(s.core().records()[0].views, 0);
        assert_eq!(s.core().records()[0].expiry_date, day(2025, 12, 20));
    }

    #[test]
    fn id_counter_survives_deletions() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AnnouncementEvent::Delete("ANN008".to_string()), &mut surface).unwrap();
        let form = AnnouncementForm {
            title: "Coffee machine maintenance".to_string(),
            category: "General".to_string(),
            priority: "Low".to_string(),
            expiry_date: String::new(),
            content: "The third floor coffee machine is out of service today.".to_string(),
        };
        s.handle(AnnouncementEvent::Submit(form), &mut surface).unwrap();
        assert_eq!(s.core().records()[0].id, "ANN009");
        assert_eq!(s.core().len(), 8);
    }

    #[test]
    fn edit_updates_in_place_without_duplicating() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        let before = s.core().len();
        s.handle(AnnouncementEvent::Edit("ANN003".to_string()), &mut surface).unwrap();
        let form = AnnouncementForm {
            title: "Team building moved to December".to_string(),
            category: "Events".to_string(),
            priority: "Medium".to_string(),
            expiry_date: "2025-12-15".to_string(),
            content: "The monthly team building event moves to December 5th.".to_string(),
        };
        s.handle(AnnouncementEvent::Submit(form), &mut surface).unwrap();
        assert_eq!(s.core().len(), before);
        let updated = s.core().find("ANN003").unwrap();
        assert_eq!(updated.title, "Team building moved to December");
        assert_eq!(updated.views, 156);
        assert_eq!(updated.date, day(2025, 11, 13));
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut s = screen();
        let mut surface = MemorySurface::answering(false);
        s.handle(AnnouncementEvent::Delete("ANN001".to_string()), &mut surface).unwrap();
        assert_eq!(s.core().len(), 8);
        assert!(surface.toasts.is_empty());
        assert_eq!(surface.prompts.len(), 1);
    }

    #[test]
    fn delete_keeps_active_criteria() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AnnouncementEvent::CategoryChanged("HR Updates".to_string()), &mut surface)
            .unwrap();
        assert_eq!(s.core().filtered_len(), 3);
        s.handle(AnnouncementEvent::Delete("ANN004".to_string()), &mut surface).unwrap();
        assert_eq!(s.core().filtered_len(), 2);
        assert_eq!(s.core().filter().category, Some(Category::HrUpdates));
    }

    #[test]
    fn viewing_details_bumps_the_view_count() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AnnouncementEvent::ViewDetails("ANN001".to_string()), &mut surface).unwrap();
        assert_eq!(s.core().find("ANN001").unwrap().views, 235);
        assert!(surface.is_overlay_open("announcementDetailsModal"));
        assert!(surface.overlay("announcementDetailsModal").contains("Company Holiday Schedule"));
    }

    #[test]
    fn viewing_a_vanished_record_is_absorbed() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AnnouncementEvent::ViewDetails("ANN999".to_string()), &mut surface).unwrap();
        assert!(!surface.is_overlay_open("announcementDetailsModal"));
    }

    #[test]
    fn invalid_form_re_presents_with_messages() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        let form = AnnouncementForm {
            title: String::new(),
            category: "General".to_string(),
            priority: "Low".to_string(),
            expiry_date: String::new(),
            content: "Body".to_string(),
        };
        s.handle(AnnouncementEvent::Submit(form), &mut surface).unwrap();
        assert!(surface.is_overlay_open("createAnnouncementModal"));
        assert!(surface.overlay("createAnnouncementModal").contains("Title is required"));
        assert_eq!(s.core().len(), 8);
    }

    #[test]
    fn card_mode_paints_the_card_container() {
        let mut s = screen();
        let mut surface = MemorySurface::new();
        s.handle(AnnouncementEvent::ModeChanged(ViewMode::Card), &mut surface).unwrap();
        assert!(surface.container("announcementCards").contains("card h-100"));
    }

    #[test]
    fn search_narrows_and_resets_page() {
        let mut s = AnnouncementsScreen::new(day(2025, 11, 20), 3);
        let mut surface = MemorySurface::new();
        s.handle(AnnouncementEvent::PageChanged(3), &mut surface).unwrap();
        s.handle(AnnouncementEvent::Search("policy".to_string()), &mut surface).unwrap();
        assert_eq!(s.core().pager().page, 1);
        assert_eq!(s.core().filtered_len(), 1);
        assert!(surface.container("announcementTableBody").contains("Dress Code"));
    }
}
