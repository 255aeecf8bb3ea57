use leptos::prelude::*;

use super::ProjectCard;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectData {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub thumbnail_url: Option<String>,
    pub year: Option<String>,
    pub tech_stack: Vec<String>,
}

/// Payload handed to the listing page: the published projects plus the
/// distinct category labels derived from them.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectListing {
    pub projects: Vec<ProjectData>,
    pub categories: Vec<String>,
}

#[component]
pub fn ProjectGrid(projects: Vec<ProjectData>) -> impl IntoView {
    view! {
        <ul class="project-list">
            {projects
                .into_iter()
                .map(|p| {
                    view! {
                        <ProjectCard
                            title=p.title
                            short_description=p.short_description
                            category=p.category
                            icon=p.icon
                            icon_color=p.icon_color
                            thumbnail_url=p.thumbnail_url
                            year=p.year
                            tech_stack=p.tech_stack
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <div class="project-empty">
            <svg viewBox="0 0 120 80" class="project-empty-art" aria-hidden="true">
                <rect x="8" y="12" width="30" height="22" rx="3" fill="none" stroke="#d8d2c8" stroke-width="1.5"/>
                <rect x="45" y="12" width="30" height="22" rx="3" fill="none" stroke="#d8d2c8" stroke-width="1.5"/>
                <rect x="82" y="12" width="30" height="22" rx="3" fill="none" stroke="#d8d2c8" stroke-width="1.5"/>
                <line x1="8" y1="48" x2="112" y2="48" stroke="#d8d2c8" stroke-width="1"/>
                <line x1="8" y1="58" x2="84" y2="58" stroke="#d8d2c8" stroke-width="1"/>
            </svg>
            <p class="project-empty-text">"No projects to show yet"</p>
        </div>
    }
}
