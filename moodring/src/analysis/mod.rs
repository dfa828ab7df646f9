//! Batch scoring and aggregation over loaded messages.
//!
//! Every function here is a pure transform over an immutable slice: inputs
//! are never modified and results are recomputed from scratch on each call.

mod aggregate;
mod annotate;
mod extremes;
mod report;

pub use aggregate::{
    aggregate_by_direction, aggregate_by_month, aggregate_by_partner, aggregate_by_weekday,
    count_by_partner,
};
pub use annotate::annotate;
pub use extremes::select_extremes;
pub use report::AnalysisReport;
