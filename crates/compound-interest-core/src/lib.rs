pub mod compound;
pub mod error;
pub mod types;

#[cfg(feature = "scenarios")]
pub mod scenarios;

pub use compound::{
    compute_series, compute_totals, number_of_months, project, project_with_metadata,
    AnnualSummaryEntry, InvestmentParameters, MonthlyBalanceSeries, Projection, Totals,
};
pub use error::InvestmentError;
pub use types::*;

/// Standard result type for all investment operations
pub type InvestmentResult<T> = Result<T, InvestmentError>;
