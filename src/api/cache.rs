use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::api::{models, ApiError, Project, ProjectSource};
use crate::components::ProjectListing;

/// Time-based snapshot of the published listing.
///
/// Implements the upstream revalidation hint: a snapshot older than
/// `max_age` is refetched on the next request. The hint is advisory and
/// never changes the contract of the underlying source; a zero `max_age`
/// disables caching entirely. Stale snapshots are not served when a
/// refetch fails.
pub struct Revalidated<S> {
    source: S,
    max_age: Duration,
    slot: Mutex<Option<Snapshot>>,
}

#[derive(Debug)]
struct Snapshot {
    taken: Instant,
    projects: Vec<Project>,
}

impl<S: ProjectSource> Revalidated<S> {
    pub fn new(source: S, max_age: Duration) -> Self {
        Self {
            source,
            max_age,
            slot: Mutex::new(None),
        }
    }

    /// The published projects, served from the snapshot while it is fresh.
    ///
    /// Holding the slot lock across the fetch keeps concurrent renders
    /// from stampeding the API with duplicate requests.
    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        let mut slot = self.slot.lock().await;

        if let Some(snapshot) = slot.as_ref() {
            if snapshot.taken.elapsed() < self.max_age {
                return Ok(snapshot.projects.clone());
            }
        }

        let projects = self.source.fetch_published().await?;
        *slot = Some(Snapshot {
            taken: Instant::now(),
            projects: projects.clone(),
        });

        Ok(projects)
    }

    /// The renderer payload. Any failure degrades to an empty listing;
    /// pages never surface a fetch error to the visitor.
    pub async fn listing_or_empty(&self) -> ProjectListing {
        match self.projects().await {
            Ok(projects) => models::into_listing(projects),
            Err(error) => {
                tracing::warn!(%error, "published listing unavailable, rendering empty");
                ProjectListing::default()
            }
        }
    }
}
