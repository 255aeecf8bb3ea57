use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub detail: Option<String>,
}

#[component]
pub fn ActivityFeed(entries: Vec<ActivityEntry>) -> impl IntoView {
    view! {
        <ul class="activity-feed">
            {entries
                .into_iter()
                .map(|entry| {
                    view! {
                        <li class="activity-item">
                            <span class="activity-title">{entry.title}</span>
                            {entry.detail.map(|d| view! { <span class="activity-detail">{d}</span> })}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn ActivityFeedEmpty() -> impl IntoView {
    view! {
        <p class="activity-empty">"Nothing published recently"</p>
    }
}
