pub mod form;
pub mod list;

pub use form::DashboardForm;
pub use list::DashboardList;
