use leptos::prelude::*;

#[component]
pub fn ProjectsPlaceholder() -> impl IntoView {
    view! {
        <div class="projects-placeholder" aria-hidden="true">
            {(0..3)
                .map(|_| {
                    view! {
                        <div class="placeholder-card">
                            <div class="placeholder-line placeholder-line--title"></div>
                            <div class="placeholder-line"></div>
                            <div class="placeholder-line placeholder-line--short"></div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
