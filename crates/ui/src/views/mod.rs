mod dashboard;
mod loading;
pub(crate) mod screening;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use loading::LoadingView;
pub use screening::ScreeningFormView;
pub use state::{ViewError, ViewState, view_state_from_resource};
