//! UI components

mod form;
mod notice;
mod results;

pub use form::PlanForm;
pub use notice::NoticeBar;
pub use results::Results;
