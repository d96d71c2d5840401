pub mod report;

pub use report::{OrganicResult, VisibilityReport};
