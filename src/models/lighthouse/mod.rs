pub mod audit;
pub mod category;
pub mod report;

pub use category::CategoryKind;
pub use report::PageQualityReport;
