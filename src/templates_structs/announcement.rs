use askama::Template;

use super::{SelectOption, format_date};
use crate::models::announcement::{Announcement, AnnouncementForm, Category, Priority};
use crate::models::badge::Badge;

/// One table row, display ready.
pub struct AnnouncementRow {
    pub id: String,
    pub title: String,
    pub category: &'static str,
    pub priority_badge: Badge,
    pub date: String,
    pub views: u32,
    pub status_badge: Badge,
}

impl AnnouncementRow {
    pub fn new(announcement: &Announcement) -> Self {
        AnnouncementRow {
            id: announcement.id.clone(),
            title: announcement.title.clone(),
            category: announcement.category.as_str(),
            priority_badge: announcement.priority.badge(),
            date: format_date(announcement.date),
            views: announcement.views,
            status_badge: announcement.status.badge(),
        }
    }
}

#[derive(Template)]
#[template(path = "announcements/rows.html")]
pub struct AnnouncementTableTemplate {
    pub rows: Vec<AnnouncementRow>,
}

/// One card in the card view. The preview is the first 100 characters
/// of the content.
pub struct AnnouncementCard {
    pub id: String,
    pub title: String,
    pub category: &'static str,
    pub priority: &'static str,
    pub border_class: &'static str,
    pub preview: String,
    pub date: String,
    pub views: u32,
    pub status_badge: Badge,
}

impl AnnouncementCard {
    pub fn new(announcement: &Announcement) -> Self {
        AnnouncementCard {
            id: announcement.id.clone(),
            title: announcement.title.clone(),
            category: announcement.category.as_str(),
            priority: announcement.priority.as_str(),
            border_class: announcement.priority.border_class(),
            preview: announcement.content.chars().take(100).collect(),
            date: format_date(announcement.date),
            views: announcement.views,
            status_badge: announcement.status.badge(),
        }
    }
}

#[derive(Template)]
#[template(path = "announcements/cards.html")]
pub struct AnnouncementCardsTemplate {
    pub cards: Vec<AnnouncementCard>,
}

#[derive(Template)]
#[template(path = "announcements/detail.html")]
pub struct AnnouncementDetailTemplate {
    pub title: String,
    pub category: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
    pub content: String,
    pub published: String,
    pub expires: String,
    pub views: u32,
    pub audience: String,
    pub author: String,
}

impl AnnouncementDetailTemplate {
    pub fn new(announcement: &Announcement) -> Self {
        AnnouncementDetailTemplate {
            title: announcement.title.clone(),
            category: announcement.category.as_str(),
            priority: announcement.priority.as_str(),
            status: announcement.status.as_str(),
            content: announcement.content.clone(),
            published: format_date(announcement.date),
            expires: format_date(announcement.expiry_date),
            views: announcement.views,
            audience: announcement.audience.clone(),
            author: announcement.author.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "announcements/form.html")]
pub struct AnnouncementFormTemplate {
    pub heading: &'static str,
    pub icon: &'static str,
    pub title: String,
    pub expiry_date: String,
    pub content: String,
    pub categories: Vec<SelectOption>,
    pub priorities: Vec<SelectOption>,
    pub errors: Vec<String>,
}

impl AnnouncementFormTemplate {
    pub fn new(form: &AnnouncementForm, errors: Vec<String>, editing: bool) -> Self {
        let category_pairs = Category::ALL.map(|c| (c.as_str(), c.as_str()));
        let priority_pairs = Priority::ALL.map(|p| (p.as_str(), p.as_str()));
        AnnouncementFormTemplate {
            heading: if editing { "Edit Announcement" } else { "Create New Announcement" },
            icon: if editing { "fa-edit" } else { "fa-bullhorn" },
            title: form.title.clone(),
            expiry_date: form.expiry_date.clone(),
            content: form.content.clone(),
            categories: SelectOption::list(&category_pairs, &form.category),
            priorities: SelectOption::list(&priority_pairs, &form.priority),
            errors,
        }
    }
}

/// Full page shell for the preview build. List fragments are rendered
/// separately and injected pre-escaped.
#[derive(Template)]
#[template(path = "announcements/page.html")]
pub struct AnnouncementsPageTemplate {
    pub title: String,
    pub list_mode: bool,
    pub table_body: String,
    pub cards: String,
    pub pagination: String,
    pub record_info: String,
}
