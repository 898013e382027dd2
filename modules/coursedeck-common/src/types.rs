use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Templates ---

/// A static, externally hosted HTML/CSS/JS asset bundle usable as the
/// starting point for a site. Defined once in the registry, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: String,
    pub thumbnail: String,
    /// URL path prefix under which the template's relative assets resolve.
    /// Always ends in "/".
    pub asset_root_path: String,
    pub entry_file: String,
    pub description: String,
}

// --- Sites ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Draft,
    Published,
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteStatus::Draft => write!(f, "draft"),
            SiteStatus::Published => write!(f, "published"),
        }
    }
}

/// A user-created website record. The template fields are a snapshot taken
/// at creation time, not a live reference into the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: Uuid,
    pub name: String,
    /// Slug of the name plus a fixed suffix, e.g. `my-site.example.com`.
    pub derived_url: String,
    pub status: SiteStatus,
    /// Date of the last edit, `YYYY-MM-DD`.
    pub last_edited: String,
    pub template_name: String,
    pub template_asset_root_path: String,
    pub template_id: String,
}

impl Site {
    /// Build a new draft site from a name and a template snapshot.
    /// The caller is responsible for rejecting empty names first.
    pub fn new(name: &str, template: &Template, now: DateTime<Utc>) -> Self {
        let slug = slugify(name);
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            derived_url: format!("{slug}.example.com"),
            status: SiteStatus::Draft,
            last_edited: now.format("%Y-%m-%d").to_string(),
            template_name: template.name.clone(),
            template_asset_root_path: template.asset_root_path.clone(),
            template_id: template.id.clone(),
        }
    }
}

/// Lowercase the name and collapse whitespace runs into single hyphens.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> Template {
        Template {
            id: "t1".to_string(),
            name: "Test Template".to_string(),
            category: "Education".to_string(),
            thumbnail: "/tpl/thumb.jpg".to_string(),
            asset_root_path: "/tpl/".to_string(),
            entry_file: "index.html".to_string(),
            description: "A test template".to_string(),
        }
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("My Course Site"), "my-course-site");
        assert_eq!(slugify("  My   Site  "), "my-site");
        assert_eq!(slugify("single"), "single");
    }

    #[test]
    fn new_site_snapshots_template() {
        let site = Site::new("My Site", &template(), Utc::now());
        assert_eq!(site.template_id, "t1");
        assert_eq!(site.template_name, "Test Template");
        assert_eq!(site.template_asset_root_path, "/tpl/");
        assert_eq!(site.status, SiteStatus::Draft);
        assert!(site.derived_url.starts_with("my-site"));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SiteStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&SiteStatus::Published).unwrap(),
            "\"published\""
        );
    }
}
