mod app;
mod app_panels;
mod credentials;
mod pages_archived;
mod pages_landing;
mod pages_new_project;
mod pages_workspace;

pub use app::Sliverhand;
