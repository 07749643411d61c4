use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::badge::Badge;
use crate::models::list::{ListRecord, RecordFilter};
use crate::models::validate::{parse_optional_date, validate_required};

/// Categories offered by the compose form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Company News")]
    CompanyNews,
    #[serde(rename = "Policy Changes")]
    PolicyChanges,
    Events,
    #[serde(rename = "HR Updates")]
    HrUpdates,
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CompanyNews,
        Category::PolicyChanges,
        Category::Events,
        Category::HrUpdates,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CompanyNews => "Company News",
            Category::PolicyChanges => "Policy Changes",
            Category::Events => "Events",
            Category::HrUpdates => "HR Updates",
            Category::General => "General",
        }
    }

    /// Parse a select value; `None` for blank or unknown input.
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == s.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn parse(s: &str) -> Option<Priority> {
        Priority::ALL.iter().copied().find(|p| p.as_str() == s.trim())
    }

    pub fn badge(&self) -> Badge {
        match self {
            Priority::High => Badge { class: "bg-danger", label: "High" },
            Priority::Medium => Badge { class: "bg-warning text-dark", label: "Medium" },
            Priority::Low => Badge { class: "bg-secondary", label: "Low" },
        }
    }

    /// Card accent border for the card view.
    pub fn border_class(&self) -> &'static str {
        match self {
            Priority::High => "border-danger",
            Priority::Medium => "border-warning",
            Priority::Low => "border-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnouncementStatus {
    Active,
    Draft,
    Expired,
}

impl AnnouncementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementStatus::Active => "Active",
            AnnouncementStatus::Draft => "Draft",
            AnnouncementStatus::Expired => "Expired",
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            AnnouncementStatus::Active => Badge { class: "bg-success", label: "Active" },
            AnnouncementStatus::Draft => Badge { class: "bg-warning text-dark", label: "Draft" },
            AnnouncementStatus::Expired => Badge { class: "bg-secondary", label: "Expired" },
        }
    }
}

/// One company announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub date: NaiveDate,
    pub views: u32,
    pub status: AnnouncementStatus,
    pub expiry_date: NaiveDate,
    pub content: String,
    pub audience: String,
    pub author: String,
}

impl ListRecord for Announcement {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Active criteria for the announcements list. Unset fields match
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl AnnouncementFilter {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl RecordFilter<Announcement> for AnnouncementFilter {
    fn matches(&self, a: &Announcement) -> bool {
        let term = self.search.trim().to_lowercase();
        if !term.is_empty()
            && !a.title.to_lowercase().contains(&term)
            && !a.content.to_lowercase().contains(&term)
        {
            return false;
        }
        if let Some(category) = self.category {
            if a.category != category {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if a.priority != priority {
                return false;
            }
        }
        if let Some(date) = self.date {
            if a.date != date {
                return false;
            }
        }
        true
    }
}

/// Raw values from the compose/edit dialog.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementForm {
    pub title: String,
    pub category: String,
    pub priority: String,
    pub expiry_date: String,
    pub content: String,
}

/// Validated compose payload ready to commit.
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub expiry_date: Option<NaiveDate>,
    pub content: String,
}

impl AnnouncementForm {
    /// Validate and parse, collecting one message per problem.
    pub fn parse(&self) -> Result<NewAnnouncement, Vec<String>> {
        let mut errors = Vec::new();

        if let Some(e) = validate_required(&self.title, "Title", 200) {
            errors.push(e);
        }
        let category = Category::parse(&self.category);
        if category.is_none() {
            errors.push("Category is required".to_string());
        }
        let priority = Priority::parse(&self.priority);
        if priority.is_none() {
            errors.push("Priority is required".to_string());
        }
        let expiry_date = match parse_optional_date(&self.expiry_date, "Expiry date") {
            Ok(d) => d,
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if let Some(e) = validate_required(&self.content, "Content", 2000) {
            errors.push(e);
        }

        match (category, priority) {
            (Some(category), Some(priority)) if errors.is_empty() => Ok(NewAnnouncement {
                title: self.title.trim().to_string(),
                category,
                priority,
                expiry_date,
                content: self.content.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Sample announcements the screen boots with.
pub fn seed() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "ANN001".to_string(),
            title: "Company Holiday Schedule for 2025".to_string(),
            category: Category::CompanyNews,
            priority: Priority::High,
            date: date(2025, 11, 15),
            views: 234,
            status: AnnouncementStatus::Active,
            expiry_date: date(2025, 12, 31),
            content: "We are pleased to announce the official holiday schedule for the year 2025. Please review the calendar and plan your leave accordingly.".to_string(),
            audience: "All Employees".to_string(),
            author: "HR Department".to_string(),
        },
        Announcement {
            id: "ANN002".to_string(),
            title: "New Office Dress Code Policy".to_string(),
            category: Category::PolicyChanges,
            priority: Priority::High,
            date: date(2025, 11, 14),
            views: 189,
            status: AnnouncementStatus::Active,
            expiry_date: date(2025, 12, 31),
            content: "Effective immediately, we have updated our dress code policy to ensure a professional workplace environment. Please read the attached document for details.".to_string(),
            audience: "All Employees".to_string(),
            author: "Management".to_string(),
        },
        Announcement {
            id: "ANN003".to_string(),
            title: "Monthly Team Building Event".to_string(),
            category: Category::Events,
            priority: Priority::Medium,
            date: date(2025, 11, 13),
            views: 156,
            status: AnnouncementStatus::Active,
            expiry_date: date(2025, 11, 30),
            content: "Join us for our monthly team building event on November 25th. Activities include team sports, lunch, and networking opportunities.".to_string(),
            audience: "All Employees".to_string(),
            author: "HR Team".to_string(),
        },
        Announcement {
            id: "ANN004".to_string(),
            title: "Employee Benefits Update".to_string(),
            category: Category::HrUpdates,
            priority: Priority::Medium,
            date: date(2025, 11, 12),
            views: 201,
            status: AnnouncementStatus::Active,
            expiry_date: date(2025, 12, 31),
            content: "We are excited to announce new employee benefits including improved health insurance options and wellness programs.".to_string(),
            audience: "All Employees".to_string(),
            author: "HR Department".to_string(),
        },
        Announcement {
            id: "ANN005".to_string(),
            title: "IT System Maintenance Notice".to_string(),
            category: Category::General,
            priority: Priority::Low,
            date: date(2025, 11, 11),
            views: 145,
            status: AnnouncementStatus::Expired,
            expiry_date: date(2025, 11, 15),
            content: "Scheduled maintenance for our IT systems will take place this weekend. Some services may be temporarily unavailable.".to_string(),
            audience: "All Employees".to_string(),
            author: "IT Department".to_string(),
        },
        Announcement {
            id: "ANN006".to_string(),
            title: "Quarterly Performance Reviews".to_string(),
            category: Category::HrUpdates,
            priority: Priority::High,
            date: date(2025, 11, 10),
            views: 312,
            status: AnnouncementStatus::Active,
            expiry_date: date(2025, 11, 30),
            content: "Q4 performance reviews will begin next week. Managers should schedule one-on-one meetings with their team members.".to_string(),
            audience: "Management".to_string(),
            author: "HR Department".to_string(),
        },
        Announcement {
            id: "ANN007".to_string(),
            title: "Office Relocation Update".to_string(),
            category: Category::CompanyNews,
            priority: Priority::Medium,
            date: date(2025, 11, 9),
            views: 178,
            status: AnnouncementStatus::Active,
            expiry_date: date(2025, 12, 31),
            content: "The office relocation to the new building is progressing well. Expected move-in date is January 15, 2025.".to_string(),
            audience: "All Employees".to_string(),
            author: "Administration".to_string(),
        },
        Announcement {
            id: "ANN008".to_string(),
            title: "New Employee Onboarding Program".to_string(),
            category: Category::HrUpdates,
            priority: Priority::Medium,
            date: date(2025, 11, 8),
            views: 98,
            status: AnnouncementStatus::Draft,
            expiry_date: date(2025, 12, 31),
            content: "We have launched a comprehensive onboarding program to help new employees integrate smoothly into our team.".to_string(),
            audience: "HR Department".to_string(),
            author: "HR Team".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_title_and_content_case_insensitive() {
        let records = seed();
        let filter = AnnouncementFilter { search: "POLICY".to_string(), ..Default::default() };
        let hits: Vec<&str> = records
            .iter()
            .filter(|a| filter.matches(a))
            .map(|a| a.id.as_str())
            .collect();
        // ANN002 has "Policy" in the title, ANN001 "plan your leave" does not
        assert!(hits.contains(&"ANN002"));
        assert!(!hits.contains(&"ANN001"));
    }

    #[test]
    fn filters_are_conjunctive() {
        let records = seed();
        let filter = AnnouncementFilter {
            category: Some(Category::HrUpdates),
            priority: Some(Priority::High),
            ..Default::default()
        };
        let hits: Vec<&str> = records
            .iter()
            .filter(|a| filter.matches(a))
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(hits, vec!["ANN006"]);
    }

    #[test]
    fn default_filter_matches_everything() {
        let filter = AnnouncementFilter::default();
        assert!(seed().iter().all(|a| filter.matches(a)));
    }

    #[test]
    fn filter_json_round_trip() {
        let filter = AnnouncementFilter {
            search: "benefits".to_string(),
            category: Some(Category::HrUpdates),
            priority: None,
            date: Some(date(2025, 11, 12)),
        };
        let back = AnnouncementFilter::from_json(&filter.to_json()).unwrap();
        assert_eq!(back, filter);
    }

    #[test]
    fn filter_json_uses_select_values() {
        let filter = AnnouncementFilter::from_json(r#"{"category":"Company News"}"#).unwrap();
        assert_eq!(filter.category, Some(Category::CompanyNews));
        assert_eq!(filter.search, "");
    }

    #[test]
    fn form_parse_collects_all_errors() {
        let form = AnnouncementForm::default();
        let errors = form.parse().unwrap_err();
        assert!(errors.contains(&"Title is required".to_string()));
        assert!(errors.contains(&"Category is required".to_string()));
        assert!(errors.contains(&"Priority is required".to_string()));
        assert!(errors.contains(&"Content is required".to_string()));
    }

    #[test]
    fn form_parse_accepts_valid_input() {
        let form = AnnouncementForm {
            title: "Parking lot closure".to_string(),
            category: "General".to_string(),
            priority: "Low".to_string(),
            expiry_date: "2025-12-01".to_string(),
            content: "The north lot is closed next week.".to_string(),
        };
        let new = form.parse().unwrap();
        assert_eq!(new.category, Category::General);
        assert_eq!(new.expiry_date, Some(date(2025, 12, 1)));
    }

    #[test]
    fn form_parse_rejects_bad_expiry() {
        let form = AnnouncementForm {
            title: "T".to_string(),
            category: "General".to_string(),
            priority: "Low".to_string(),
            expiry_date: "soon".to_string(),
            content: "C".to_string(),
        };
        let errors = form.parse().unwrap_err();
        assert_eq!(errors, vec!["Expiry date must be a valid date (YYYY-MM-DD)".to_string()]);
    }
}
