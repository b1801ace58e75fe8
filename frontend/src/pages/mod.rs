pub mod dashboard_manager;
pub mod login;
pub mod portal;

pub use dashboard_manager::DashboardManagerPanel;
pub use login::LoginPanel;
pub use portal::PortalPage;
