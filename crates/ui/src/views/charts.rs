use dioxus::prelude::*;

use services::ReportError;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ChartVm, ReportVm, map_report};

#[derive(Clone, Debug, PartialEq, Eq)]
struct ChartsData {
    report: ReportVm,
}

/// The four descriptive summaries over every stored response, drawn as
/// horizontal bar panels.
#[component]
pub fn ChartsView() -> Element {
    let ctx = use_context::<AppContext>();
    let reports = ctx.reports();

    let resource = use_resource(move || {
        let reports = reports.clone();
        async move {
            let report = reports.build_report().await.map_err(|err| match err {
                ReportError::NoData => ViewError::NoData,
                ReportError::Storage(_) => ViewError::Unknown,
                _ => ViewError::Unknown,
            })?;
            Ok::<_, ViewError>(ChartsData {
                report: map_report(&report),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Charts" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    p { class: "charts-total", "{data.report.total} responses" }
                    div { class: "charts-grid",
                        for chart in data.report.charts {
                            ChartPanel { chart }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ChartPanel(chart: ChartVm) -> Element {
    rsx! {
        section { class: "chart-panel",
            h3 { "{chart.title}" }
            dl { class: "chart-bars",
                for bar in chart.bars {
                    dt { class: "chart-label", "{bar.label}" }
                    dd { class: "chart-row",
                        div {
                            class: "chart-bar",
                            style: "width: {bar.width_pct}%",
                        }
                        span { class: "chart-count",
                            "{bar.count} ({bar.share_pct}%)"
                        }
                    }
                }
            }
        }
    }
}
