use std::collections::BTreeMap;
use std::fmt::Display;

use services::SurveyReport;
use survey_core::model::SatisfactionScore;

/// One bar of a chart, with its geometry precomputed so the view only
/// interpolates strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarVm {
    pub label: String,
    pub count: u32,
    /// Bar length relative to the tallest bar in the same chart, 0-100.
    pub width_pct: u32,
    /// Share of all responses, 0-100.
    pub share_pct: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartVm {
    pub title: &'static str,
    pub bars: Vec<BarVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub total: u32,
    pub charts: Vec<ChartVm>,
}

fn pct(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        0
    } else {
        (part * 100 + whole / 2) / whole
    }
}

fn bars_from_counts<T: Copy + Display>(counts: &BTreeMap<T, u32>, total: u32) -> Vec<BarVm> {
    let max = counts.values().copied().max().unwrap_or(0);
    counts
        .iter()
        .map(|(key, &count)| BarVm {
            label: key.to_string(),
            count,
            width_pct: pct(count, max),
            share_pct: pct(count, total),
        })
        .collect()
}

fn histogram_bars(histogram: &[u32], total: u32) -> Vec<BarVm> {
    let max = histogram.iter().copied().max().unwrap_or(0);
    histogram
        .iter()
        .enumerate()
        .map(|(bucket, &count)| BarVm {
            label: (bucket + usize::from(SatisfactionScore::MIN)).to_string(),
            count,
            width_pct: pct(count, max),
            share_pct: pct(count, total),
        })
        .collect()
}

/// Maps the aggregated report into the four chart panels the view renders.
#[must_use]
pub fn map_report(report: &SurveyReport) -> ReportVm {
    let total = report.total;
    ReportVm {
        total,
        charts: vec![
            ChartVm {
                title: "Most Used Device",
                bars: bars_from_counts(&report.device_counts, total),
            },
            ChartVm {
                title: "Preferred Learning Environment",
                bars: bars_from_counts(&report.environment_counts, total),
            },
            ChartVm {
                title: "Study Time Preference",
                bars: bars_from_counts(&report.study_time_counts, total),
            },
            ChartVm {
                title: "Study Satisfaction Levels",
                bars: histogram_bars(&report.satisfaction_histogram, total),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::model::{LearningEnvironment, PrimaryDevice, StudyTime};

    fn sample_report() -> SurveyReport {
        let mut device_counts = BTreeMap::new();
        device_counts.insert(PrimaryDevice::Laptop, 2);
        device_counts.insert(PrimaryDevice::Tablet, 1);
        let mut environment_counts = BTreeMap::new();
        environment_counts.insert(LearningEnvironment::Online, 3);
        let mut study_time_counts = BTreeMap::new();
        study_time_counts.insert(StudyTime::Evening, 3);
        let mut satisfaction_histogram = [0u32; SurveyReport::BUCKETS];
        satisfaction_histogram[6] = 3;

        SurveyReport {
            total: 3,
            device_counts,
            environment_counts,
            study_time_counts,
            satisfaction_histogram,
        }
    }

    #[test]
    fn maps_four_charts() {
        let vm = map_report(&sample_report());
        assert_eq!(vm.total, 3);
        assert_eq!(vm.charts.len(), 4);
        assert_eq!(vm.charts[0].title, "Most Used Device");
        assert_eq!(vm.charts[3].title, "Study Satisfaction Levels");
    }

    #[test]
    fn tallest_bar_spans_full_width() {
        let vm = map_report(&sample_report());
        let devices = &vm.charts[0].bars;
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].label, "Laptop");
        assert_eq!(devices[0].count, 2);
        assert_eq!(devices[0].width_pct, 100);
        assert_eq!(devices[1].label, "Tablet");
        assert_eq!(devices[1].width_pct, 50);
    }

    #[test]
    fn shares_are_relative_to_total() {
        let vm = map_report(&sample_report());
        let devices = &vm.charts[0].bars;
        assert_eq!(devices[0].share_pct, 67);
        assert_eq!(devices[1].share_pct, 33);
    }

    #[test]
    fn histogram_keeps_all_ten_buckets() {
        let vm = map_report(&sample_report());
        let histogram = &vm.charts[3].bars;
        assert_eq!(histogram.len(), 10);
        assert_eq!(histogram[0].label, "1");
        assert_eq!(histogram[9].label, "10");
        assert_eq!(histogram[6].count, 3);
        assert_eq!(histogram[6].width_pct, 100);
        assert_eq!(histogram[0].count, 0);
        assert_eq!(histogram[0].width_pct, 0);
    }
}
