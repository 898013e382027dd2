use coursedeck_common::{Site, SiteStatus};
use uuid::Uuid;

/// Default site collection used when the local store is absent or
/// unreadable. Template fields are creation-time snapshots and are spelled
/// out literally.
pub fn seed_sites() -> Vec<Site> {
    vec![
        Site {
            id: Uuid::from_u128(1),
            name: "My Course Site".to_string(),
            derived_url: "my-course-site.example.com".to_string(),
            status: SiteStatus::Published,
            last_edited: "2025-01-15".to_string(),
            template_name: "eLearning Pro".to_string(),
            template_asset_root_path: "/templates/elearning-1.0.0/".to_string(),
            template_id: "elearning-1".to_string(),
        },
        Site {
            id: Uuid::from_u128(2),
            name: "Creative Workshop".to_string(),
            derived_url: "creative-workshop.example.com".to_string(),
            status: SiteStatus::Draft,
            last_edited: "2025-01-14".to_string(),
            template_name: "Courses Platform".to_string(),
            template_asset_root_path: "/templates/courses-master/".to_string(),
            template_id: "courses".to_string(),
        },
    ]
}
