use screening_core::model::ScreeningResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub score: u32,
    pub risk_label: &'static str,
    pub risk_class: String,
    pub observations: Vec<String>,
    pub next_steps: Vec<String>,
    pub disclaimer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardVm {
    Report(ReportVm),
    /// Result of an unknown shape, pretty-printed.
    Raw(String),
}

#[must_use]
pub fn map_dashboard(result: &ScreeningResult) -> DashboardVm {
    match result.report() {
        Some(report) => {
            let risk_label = report.risk_level.label();
            DashboardVm::Report(ReportVm {
                score: report.score,
                risk_label,
                risk_class: format!("risk-{}", risk_label.to_ascii_lowercase()),
                observations: report.observations,
                next_steps: report.next_steps,
                disclaimer: report.disclaimer,
            })
        }
        None => {
            let value = result.as_value();
            let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            DashboardVm::Raw(text)
        }
    }
}
