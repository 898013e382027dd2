use coursedeck_common::{Site, SiteStatus, Template};

pub mod builder;
pub mod communication;
pub mod courses;
pub mod home;
pub mod layout;
pub mod login;
pub mod search;
pub mod settings;
pub mod users;
pub mod websites;

pub use builder::{render_builder, render_builder_loading};
pub use communication::render_communication;
pub use courses::render_courses;
pub use home::render_home;
pub use login::render_login;
pub use search::render_search;
pub use settings::render_settings;
pub use users::render_users;
pub use websites::render_websites;

// --- View Models ---

#[derive(Clone, PartialEq)]
pub struct StatView {
    pub name: String,
    pub value: String,
    pub change: String,
}

#[derive(Clone, PartialEq)]
pub struct CourseView {
    pub title: String,
    pub description: String,
    pub students: u32,
    pub duration: String,
    pub status_label: String,
    pub status_class: String,
}

#[derive(Clone, PartialEq)]
pub struct SiteCardView {
    pub id: String,
    pub name: String,
    pub url: String,
    pub status_label: String,
    pub status_class: String,
    pub last_edited: String,
    pub template_name: String,
}

#[derive(Clone, PartialEq)]
pub struct TemplateOptionView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

#[derive(Clone, PartialEq)]
pub struct StudentView {
    pub name: String,
    pub email: String,
    pub course: String,
    pub enrolled: String,
    pub progress: u8,
}

#[derive(Clone, PartialEq)]
pub struct MessageView {
    pub sender: String,
    pub subject: String,
    pub preview: String,
    pub time: String,
    pub read: bool,
}

#[derive(Clone, PartialEq)]
pub struct AnnouncementView {
    pub title: String,
    pub recipients: u32,
    pub date: String,
    pub status: String,
}

#[derive(Clone, PartialEq)]
pub struct CampaignView {
    pub name: String,
    pub subject: String,
    pub sent: u32,
    pub opens: u32,
    pub clicks: u32,
    pub status: String,
}

#[derive(Clone, PartialEq)]
pub struct CategoryView {
    pub name: String,
    pub count: u32,
}

#[derive(Clone, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub school: String,
}

#[derive(Clone, PartialEq)]
pub struct BuilderView {
    pub site_id: String,
    pub site_name: String,
    pub derived_url: String,
    pub page_name: String,
}

pub fn status_badge(status: SiteStatus) -> (&'static str, &'static str) {
    match status {
        SiteStatus::Published => ("published", "bg-green-100 text-green-800"),
        SiteStatus::Draft => ("draft", "bg-yellow-100 text-yellow-800"),
    }
}

pub fn site_to_view(site: &Site) -> SiteCardView {
    let (label, class) = status_badge(site.status);
    SiteCardView {
        id: site.id.to_string(),
        name: site.name.clone(),
        url: site.derived_url.clone(),
        status_label: label.to_string(),
        status_class: class.to_string(),
        last_edited: site.last_edited.clone(),
        template_name: site.template_name.clone(),
    }
}

pub fn template_to_view(template: &Template) -> TemplateOptionView {
    TemplateOptionView {
        id: template.id.clone(),
        name: template.name.clone(),
        category: template.category.clone(),
        description: template.description.clone(),
    }
}
