mod report_vm;

pub use report_vm::{BarVm, ChartVm, ReportVm, map_report};
