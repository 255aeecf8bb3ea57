use leptos::prelude::*;

#[component]
pub fn Header(
    /// Render the name as plain text (homepage style)
    #[prop(default = false)]
    is_home: bool,
) -> impl IntoView {
    view! {
        <header class="header">
            {if is_home {
                view! {
                    <h1 class="header__name">"Noah Feld"</h1>
                }.into_any()
            } else {
                view! {
                    <h1 class="header__name">
                        <a href="/">"Noah Feld"</a>
                    </h1>
                }.into_any()
            }}
            <span class="header__tagline">"web · systems · design"</span>
        </header>
    }
}
