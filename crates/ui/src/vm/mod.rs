mod dashboard_vm;
mod form_vm;

pub use dashboard_vm::{DashboardVm, ReportVm, map_dashboard};
pub use form_vm::{ANSWER_OPTIONS, FormVm};
