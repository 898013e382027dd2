use coursedeck_common::{CourseDeckError, Template};

/// Static catalog of the templates a site can be created from. Loaded once
/// at startup; entries never change after construction.
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                Template {
                    id: "elearning-1".to_string(),
                    name: "eLearning Pro".to_string(),
                    category: "Education".to_string(),
                    thumbnail: "/templates/elearning-1.0.0/img/about.jpg".to_string(),
                    asset_root_path: "/templates/elearning-1.0.0/".to_string(),
                    entry_file: "index.html".to_string(),
                    description: "Professional eLearning template with modern design".to_string(),
                },
                Template {
                    id: "elearning-2".to_string(),
                    name: "eLearning Classic".to_string(),
                    category: "Education".to_string(),
                    thumbnail: "/templates/elearning-html-template/img/cat-1.jpg".to_string(),
                    asset_root_path: "/templates/elearning-html-template/".to_string(),
                    entry_file: "index.html".to_string(),
                    description: "Classic eLearning template with clean layout".to_string(),
                },
                Template {
                    id: "courses".to_string(),
                    name: "Courses Platform".to_string(),
                    category: "Education".to_string(),
                    thumbnail: "/templates/courses-master/assets/img/hero/h1_hero.png".to_string(),
                    asset_root_path: "/templates/courses-master/".to_string(),
                    entry_file: "index.html".to_string(),
                    description: "Complete courses platform template".to_string(),
                },
            ],
        }
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    /// Look up a template by id. Unknown ids are an explicit error.
    pub fn get(&self, id: &str) -> Result<&Template, CourseDeckError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CourseDeckError::TemplateNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_unique_ids_and_rooted_paths() {
        let registry = TemplateRegistry::builtin();
        let templates = registry.all();
        assert!(!templates.is_empty());

        let mut ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), templates.len(), "template ids must be unique");

        for t in templates {
            assert!(t.asset_root_path.ends_with('/'), "{} root must end in /", t.id);
            assert_eq!(t.entry_file, "index.html");
        }
    }

    #[test]
    fn get_known_id() {
        let registry = TemplateRegistry::builtin();
        let t = registry.get("elearning-1").unwrap();
        assert_eq!(t.name, "eLearning Pro");
    }

    #[test]
    fn get_unknown_id_is_an_error() {
        let registry = TemplateRegistry::builtin();
        let err = registry.get("nope").unwrap_err();
        assert!(matches!(err, CourseDeckError::TemplateNotFound(_)));
    }
}
