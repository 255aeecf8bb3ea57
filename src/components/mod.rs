mod activity_feed;
mod category_bar;
mod header;
mod login_form;
mod project_card;
mod project_grid;
mod projects_placeholder;

pub use activity_feed::{ActivityEntry, ActivityFeed, ActivityFeedEmpty};
pub use category_bar::CategoryBar;
pub use header::Header;
pub use login_form::LoginForm;
pub use project_card::ProjectCard;
pub use project_grid::{ProjectData, ProjectGrid, ProjectGridEmpty, ProjectListing};
pub use projects_placeholder::ProjectsPlaceholder;
