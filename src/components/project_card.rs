use leptos::prelude::*;

/// Fallback glyph for projects without an icon: up to two initials from
/// the title.
fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[component]
pub fn ProjectCard(
    title: String,
    short_description: Option<String>,
    category: Option<String>,
    icon: Option<String>,
    icon_color: Option<String>,
    thumbnail_url: Option<String>,
    year: Option<String>,
    tech_stack: Vec<String>,
) -> impl IntoView {
    let description = short_description.unwrap_or_default();
    let glyph = icon.unwrap_or_else(|| initials(&title));
    let chip_style = icon_color
        .map(|c| format!("background-color: {c}"))
        .unwrap_or_default();

    view! {
        <li class="project-card">
            {thumbnail_url.map(|src| view! {
                <img class="project-thumb" src=src alt="" loading="lazy"/>
            })}
            <div class="project-header">
                <span class="project-icon" style=chip_style aria-hidden="true">{glyph}</span>
                <h3>{title}</h3>
                {category.map(|c| view! { <span class="project-badge">{c}</span> })}
            </div>
            <p class="project-description">{description}</p>
            <div class="project-meta">
                {year.map(|y| view! { <span class="project-year">{y}</span> })}
                {(!tech_stack.is_empty()).then(|| view! {
                    <ul class="tech-stack">
                        {tech_stack
                            .into_iter()
                            .map(|tech| view! { <li class="tech-chip">{tech}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                })}
            </div>
        </li>
    }
}
