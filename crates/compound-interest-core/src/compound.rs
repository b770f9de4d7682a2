use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Instant;

use crate::error::InvestmentError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, Years};
use crate::InvestmentResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Longest accepted investment period, in years.
pub const MAX_PERIOD_YEARS: Decimal = dec!(1000);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Inputs of a projection.
///
/// Construct through [`InvestmentParameters::new`] or
/// [`InvestmentParameters::parse`] to get the non-negativity checks; the
/// calculator itself accepts any values and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    pub initial_capital: Money,
    pub monthly_contribution: Money,
    /// Nominal annual rate as a percentage (5 = 5% p.a.).
    pub annual_rate_percent: Rate,
    pub period_years: Years,
}

/// Balance after each elapsed month. Index 0 is the balance after month 1.
pub type MonthlyBalanceSeries = Vec<Money>;

/// Balance at the end of month `year * 12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSummaryEntry {
    pub year: u32,
    pub balance: Money,
}

/// Aggregates derived from a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub final_balance: Money,
    pub total_contributed: Money,
    pub interest_earned: Money,
}

/// Everything a presentation layer needs for one set of parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub parameters: InvestmentParameters,
    pub number_of_months: u64,
    pub series: MonthlyBalanceSeries,
    pub annual_summary: Vec<AnnualSummaryEntry>,
    pub totals: Totals,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

impl InvestmentParameters {
    /// Build validated parameters.
    pub fn new(
        initial_capital: Money,
        monthly_contribution: Money,
        annual_rate_percent: Rate,
        period_years: Years,
    ) -> InvestmentResult<Self> {
        let params = Self {
            initial_capital,
            monthly_contribution,
            annual_rate_percent,
            period_years,
        };
        params.validate()?;
        Ok(params)
    }

    /// Build validated parameters from raw text fields.
    ///
    /// Surrounding whitespace is ignored. A single `,` is accepted as the
    /// decimal separator ("2,5" reads as 2.5) unless it could be a thousands
    /// separator: "1,000" and "1,000,000" are rejected rather than guessed.
    pub fn parse(
        initial_capital: &str,
        monthly_contribution: &str,
        annual_rate_percent: &str,
        period_years: &str,
    ) -> InvestmentResult<Self> {
        Self::new(
            parse_field("initial_capital", initial_capital)?,
            parse_field("monthly_contribution", monthly_contribution)?,
            parse_field("annual_rate_percent", annual_rate_percent)?,
            parse_field("period_years", period_years)?,
        )
    }

    /// Check the domain constraints: capital, contribution and rate must be
    /// non-negative, the period strictly positive and at most
    /// [`MAX_PERIOD_YEARS`].
    pub fn validate(&self) -> InvestmentResult<()> {
        if self.initial_capital < Decimal::ZERO {
            return Err(InvestmentError::invalid("initial_capital", "must be >= 0"));
        }
        if self.monthly_contribution < Decimal::ZERO {
            return Err(InvestmentError::invalid("monthly_contribution", "must be >= 0"));
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(InvestmentError::invalid("annual_rate_percent", "must be >= 0"));
        }
        if self.period_years <= Decimal::ZERO {
            return Err(InvestmentError::invalid("period_years", "must be > 0"));
        }
        if self.period_years > MAX_PERIOD_YEARS {
            return Err(InvestmentError::invalid(
                "period_years",
                format!("must be <= {MAX_PERIOD_YEARS}"),
            ));
        }
        Ok(())
    }

    /// Monthly rate as a decimal: `annual_rate_percent / 100 / 12`.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / dec!(100) / MONTHS_PER_YEAR
    }
}

fn parse_field(field: &str, raw: &str) -> InvestmentResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvestmentError::invalid(field, "a value is required"));
    }

    let not_a_number = || InvestmentError::invalid(field, format!("'{trimmed}' is not a number"));

    let normalized = match trimmed.split_once(',') {
        None => trimmed.to_string(),
        Some((int_part, frac_part)) => {
            if trimmed.contains('.') || frac_part.contains(',') || frac_part.len() == 3 {
                return Err(InvestmentError::invalid(
                    field,
                    format!("'{trimmed}' is ambiguous; use '.' as the decimal separator and no grouping"),
                ));
            }
            if frac_part.is_empty() {
                return Err(not_a_number());
            }
            format!("{int_part}.{frac_part}")
        }
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| not_a_number())
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// Number of elapsed months: `round(period_years * 12)`.
///
/// Ties round half to even, so 0.875 years (10.5 months) gives 10 months and
/// 0.125 years (1.5 months) gives 2. Non-positive products give 0. Exact for
/// every period that passes [`InvestmentParameters::validate`]; only products
/// beyond `u64` range saturate.
pub fn number_of_months(params: &InvestmentParameters) -> u64 {
    let months = match params.period_years.checked_mul(MONTHS_PER_YEAR) {
        Some(m) => m.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven),
        None if params.period_years.is_sign_positive() => return u64::MAX,
        None => return 0,
    };
    if months <= Decimal::ZERO {
        return 0;
    }
    months.to_u64().unwrap_or(u64::MAX)
}

fn whole_years(params: &InvestmentParameters) -> u32 {
    let years = params.period_years.floor();
    if years <= Decimal::ZERO {
        return 0;
    }
    years.to_u32().unwrap_or(u32::MAX)
}

/// Month-by-month balances and the end-of-year summary.
///
/// Each month the current balance is capitalized at the monthly rate, then
/// the contribution is added, so a contribution starts earning interest the
/// following month.
pub fn compute_series(
    params: &InvestmentParameters,
) -> (MonthlyBalanceSeries, Vec<AnnualSummaryEntry>) {
    let months = number_of_months(params);
    let growth = Decimal::ONE + params.monthly_rate();

    // Preallocate only up to the validated maximum; longer unvalidated
    // periods grow the vector as they go.
    let max_months = (MAX_PERIOD_YEARS * MONTHS_PER_YEAR).to_u64().unwrap_or(0);
    let capacity = usize::try_from(months.min(max_months)).unwrap_or(0);
    let mut series: MonthlyBalanceSeries = Vec::with_capacity(capacity);
    let mut balance = params.initial_capital;
    for _ in 0..months {
        balance = balance.saturating_mul(growth);
        balance = balance.saturating_add(params.monthly_contribution);
        series.push(balance);
    }

    let annual_summary = (1..=whole_years(params))
        .map_while(|year| {
            let idx = (year as usize) * 12 - 1;
            series
                .get(idx)
                .map(|&balance| AnnualSummaryEntry { year, balance })
        })
        .collect();

    (series, annual_summary)
}

/// Final balance, total contributed and interest earned for a series
/// produced by [`compute_series`] with the same parameters.
pub fn compute_totals(params: &InvestmentParameters, series: &[Money]) -> Totals {
    let final_balance = series.last().copied().unwrap_or(params.initial_capital);
    let total_contributed = params
        .monthly_contribution
        .saturating_mul(Decimal::from(number_of_months(params)));
    let interest_earned = final_balance
        .saturating_sub(params.initial_capital)
        .saturating_sub(total_contributed);

    Totals {
        final_balance,
        total_contributed,
        interest_earned,
    }
}

/// Run the calculator and bundle series, summary and totals.
pub fn project(params: &InvestmentParameters) -> Projection {
    let (series, annual_summary) = compute_series(params);
    let totals = compute_totals(params, &series);
    Projection {
        parameters: params.clone(),
        number_of_months: number_of_months(params),
        series,
        annual_summary,
        totals,
    }
}

/// Validate the parameters, project them and wrap the result in the
/// standard output envelope.
pub fn project_with_metadata(
    params: &InvestmentParameters,
) -> InvestmentResult<ComputationOutput<Projection>> {
    let start = Instant::now();
    params.validate()?;

    let mut warnings: Vec<String> = Vec::new();
    let projection = project(params);

    if projection.number_of_months == 0 {
        warnings.push(format!(
            "period of {} years rounds to zero months; final balance equals initial capital",
            params.period_years
        ));
    } else if params.period_years.fract() != Decimal::ZERO {
        warnings.push(format!(
            "period of {} years is not a whole number of years; the last partial year has no annual summary entry",
            params.period_years
        ));
    }
    if params.annual_rate_percent.is_zero() {
        warnings.push("annual rate is zero; balance grows by contributions only".into());
    }

    Ok(with_metadata(
        "Monthly capitalization: balance × (1 + annual_rate / 12), contribution added at month end",
        params,
        warnings,
        start.elapsed().as_micros() as u64,
        projection,
    ))
}
