use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_query_map,
    StaticSegment,
};

use crate::components::{
    ActivityEntry, ActivityFeed, ActivityFeedEmpty, CategoryBar, Header, LoginForm, ProjectGrid,
    ProjectGridEmpty, ProjectListing, ProjectsPlaceholder,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/favicon.svg" type="image/svg+xml"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Published projects plus their derived category labels.
///
/// Resolves to an empty listing on any upstream failure; pages render the
/// empty state rather than an error.
#[server]
pub async fn published_listing() -> Result<ProjectListing, ServerFnError> {
    use crate::api::ProjectsHandle;

    let projects = use_context::<ProjectsHandle>()
        .ok_or_else(|| ServerFnError::new("projects client not configured"))?;

    Ok(projects.listing_or_empty().await)
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/folio.css"/>

        <Title text="Noah Feld"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("login"))
                        view=AdminLoginPage
                    />
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let listing = Resource::new_blocking(
        || (),
        |()| async move { published_listing().await.unwrap_or_default() },
    );
    let query = use_query_map();

    view! {
        <div class="container">
            <Header is_home=true/>

            <section class="projects">
                <h2>"Projects"</h2>
                <Suspense fallback=move || view! { <ProjectsPlaceholder/> }>
                    {move || {
                        listing
                            .get()
                            .map(|listing| {
                                let active = query
                                    .with(|q| q.get("category"))
                                    .filter(|c| !c.is_empty());
                                let shown: Vec<_> = match active.as_deref() {
                                    Some(category) => {
                                        listing
                                            .projects
                                            .iter()
                                            .filter(|p| p.category.as_deref() == Some(category))
                                            .cloned()
                                            .collect()
                                    }
                                    None => listing.projects.clone(),
                                };

                                view! {
                                    <CategoryBar
                                        categories=listing.categories.clone()
                                        active=active
                                    />
                                    {if shown.is_empty() {
                                        view! { <ProjectGridEmpty/> }.into_any()
                                    } else {
                                        view! { <ProjectGrid projects=shown/> }.into_any()
                                    }}
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn AdminLoginPage() -> impl IntoView {
    view! {
        <div class="container">
            <Header/>

            <section class="admin-login">
                <h2>"Sign in"</h2>
                <LoginForm/>
            </section>
        </div>
    }
}

/// Landing page after the login redirect. Shows the published listing as
/// an activity feed; there is no admin-only data in this service.
#[component]
fn AdminPage() -> impl IntoView {
    let listing = Resource::new_blocking(
        || (),
        |()| async move { published_listing().await.unwrap_or_default() },
    );

    view! {
        <div class="container">
            <Header/>

            <section class="admin">
                <h2>"Recently published"</h2>
                <Suspense fallback=move || view! { <ProjectsPlaceholder/> }>
                    {move || {
                        listing
                            .get()
                            .map(|listing| {
                                let entries: Vec<ActivityEntry> = listing
                                    .projects
                                    .iter()
                                    .map(|p| ActivityEntry {
                                        title: p.title.clone(),
                                        detail: p.category.clone().or_else(|| p.year.clone()),
                                    })
                                    .collect();

                                if entries.is_empty() {
                                    view! { <ActivityFeedEmpty/> }.into_any()
                                } else {
                                    view! { <ActivityFeed entries=entries/> }.into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
