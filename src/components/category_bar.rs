use leptos::prelude::*;

/// Category chips above the project grid. Each chip links back to the
/// listing with a `category` query parameter; "all" clears it. Renders
/// nothing when no categories were derived.
#[component]
pub fn CategoryBar(categories: Vec<String>, active: Option<String>) -> impl IntoView {
    (!categories.is_empty()).then(|| {
        let all_class = if active.is_none() {
            "category-chip active"
        } else {
            "category-chip"
        };

        view! {
            <nav class="category-bar" aria-label="Project categories">
                <a href="/" class=all_class>"all"</a>
                {categories
                    .into_iter()
                    .map(|category| {
                        let href = format!("/?category={}", urlencoding::encode(&category));
                        let class = if active.as_deref() == Some(category.as_str()) {
                            "category-chip active"
                        } else {
                            "category-chip"
                        };
                        view! { <a href=href class=class>{category}</a> }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        }
    })
}
