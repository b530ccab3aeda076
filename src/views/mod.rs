pub mod advisor;
pub mod dashboard;
pub mod diagnostics;
pub mod hybrid;
pub mod shared;

pub use advisor::AdvisorView;
pub use dashboard::DashboardView;
pub use diagnostics::DiagnosticsView;
pub use hybrid::HybridLabView;
