use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::components::{ProjectData, ProjectListing};

/// A project record as served by the projects API. Read-only here; nothing
/// in this service creates or mutates projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub status: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_color: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,
}

/// Wire envelope: `{ "data": { "projects": [...] } }`.
///
/// Either level may be absent or null; both cases read as an empty listing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    data: Option<EnvelopeData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EnvelopeData {
    #[serde(default)]
    projects: Option<Vec<Project>>,
}

impl Envelope {
    pub(crate) fn into_projects(self) -> Vec<Project> {
        self.data.and_then(|d| d.projects).unwrap_or_default()
    }
}

/// Distinct, non-empty category labels across the given projects.
///
/// Duplicates and blank values collapse. Order is not significant to
/// callers; sorted output keeps rendering stable.
pub fn category_labels(projects: &[Project]) -> Vec<String> {
    let labels: BTreeSet<&str> = projects
        .iter()
        .filter_map(|p| p.category.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    labels.into_iter().map(str::to_string).collect()
}

impl From<Project> for ProjectData {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            short_description: project.short_description,
            category: project.category,
            icon: project.icon,
            icon_color: project.icon_color,
            thumbnail_url: project.thumbnail_url,
            year: project.year,
            tech_stack: project.tech_stack.unwrap_or_default(),
        }
    }
}

/// Build the renderer payload: the fetched projects plus their derived
/// category set.
pub fn into_listing(projects: Vec<Project>) -> ProjectListing {
    let categories = category_labels(&projects);

    ProjectListing {
        projects: projects.into_iter().map(ProjectData::from).collect(),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            slug: format!("project-{id}"),
            status: "published".to_string(),
            short_description: None,
            category: category.map(str::to_string),
            icon: None,
            icon_color: None,
            thumbnail_url: None,
            year: None,
            tech_stack: None,
        }
    }

    #[test]
    fn parses_full_envelope() {
        let json = r##"{
            "data": {
                "projects": [{
                    "id": "p1",
                    "title": "Signal Atlas",
                    "slug": "signal-atlas",
                    "status": "published",
                    "short_description": "Realtime map of sensor data",
                    "category": "Web",
                    "icon": "map",
                    "icon_color": "#2d6cdf",
                    "thumbnail_url": "https://cdn.example.com/atlas.png",
                    "year": "2024",
                    "tech_stack": ["Rust", "Postgres"]
                }]
            }
        }"##;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let projects = envelope.into_projects();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "p1");
        assert_eq!(projects[0].title, "Signal Atlas");
        assert_eq!(projects[0].category, Some("Web".to_string()));
        assert_eq!(
            projects[0].tech_stack,
            Some(vec!["Rust".to_string(), "Postgres".to_string()])
        );
    }

    #[test]
    fn handles_missing_optional_fields() {
        let json = r#"{
            "data": {
                "projects": [{
                    "id": "p2",
                    "title": "Minimal",
                    "slug": "minimal",
                    "status": "published"
                }]
            }
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let projects = envelope.into_projects();

        assert_eq!(projects.len(), 1);
        assert!(projects[0].short_description.is_none());
        assert!(projects[0].category.is_none());
        assert!(projects[0].tech_stack.is_none());
    }

    #[test]
    fn missing_projects_field_reads_empty() {
        let envelope: Envelope = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(envelope.into_projects().is_empty());
    }

    #[test]
    fn missing_data_field_reads_empty() {
        let envelope: Envelope = serde_json::from_str(r#"{}"#).unwrap();
        assert!(envelope.into_projects().is_empty());
    }

    #[test]
    fn null_data_reads_empty() {
        let envelope: Envelope = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(envelope.into_projects().is_empty());

        let envelope: Envelope =
            serde_json::from_str(r#"{"data": {"projects": null}}"#).unwrap();
        assert!(envelope.into_projects().is_empty());
    }

    #[test]
    fn category_labels_deduplicates_and_drops_blanks() {
        let projects = vec![
            project("1", Some("A")),
            project("2", Some("B")),
            project("3", Some("A")),
            project("4", None),
        ];

        assert_eq!(category_labels(&projects), vec!["A", "B"]);
    }

    #[test]
    fn category_labels_trims_whitespace() {
        let projects = vec![
            project("1", Some("  Web ")),
            project("2", Some("Web")),
            project("3", Some("   ")),
        ];

        assert_eq!(category_labels(&projects), vec!["Web"]);
    }

    #[test]
    fn category_labels_empty_input() {
        assert!(category_labels(&[]).is_empty());
    }

    #[test]
    fn into_listing_converts_projects_and_derives_categories() {
        let listing = into_listing(vec![
            project("1", Some("Web")),
            project("2", Some("Mobile")),
        ]);

        assert_eq!(listing.projects.len(), 2);
        assert_eq!(listing.projects[0].title, "Project 1");
        assert!(listing.projects[0].tech_stack.is_empty());
        assert_eq!(listing.categories, vec!["Mobile", "Web"]);
    }
}
