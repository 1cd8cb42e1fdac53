pub mod release_updater;
pub mod report;

pub use release_updater::ReleaseUpdater;
pub use report::UpdateReport;
