pub mod selector;
pub mod viewer;

pub use selector::DashboardSelector;
pub use viewer::DashboardViewer;
