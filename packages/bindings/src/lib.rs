use napi::Result as NapiResult;
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use compound_interest_core::scenarios::{self, NamedScenario, RankedScenario, ScenarioResult};
use compound_interest_core::{
    AnnualSummaryEntry, InvestmentParameters, MonthlyBalanceSeries,
};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn read_params(input_json: &str) -> NapiResult<InvestmentParameters> {
    let params: InvestmentParameters = serde_json::from_str(input_json).map_err(to_napi_error)?;
    params.validate().map_err(to_napi_error)?;
    Ok(params)
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SeriesOutput {
    series: MonthlyBalanceSeries,
    annual_summary: Vec<AnnualSummaryEntry>,
}

#[napi]
pub fn compute_series(input_json: String) -> NapiResult<String> {
    let params = read_params(&input_json)?;
    let (series, annual_summary) = compound_interest_core::compute_series(&params);
    serde_json::to_string(&SeriesOutput {
        series,
        annual_summary,
    })
    .map_err(to_napi_error)
}

#[derive(Deserialize)]
struct TotalsBindingInput {
    parameters: InvestmentParameters,
    series: MonthlyBalanceSeries,
}

#[napi]
pub fn compute_totals(input_json: String) -> NapiResult<String> {
    let input: TotalsBindingInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    input.parameters.validate().map_err(to_napi_error)?;
    let totals = compound_interest_core::compute_totals(&input.parameters, &input.series);
    serde_json::to_string(&totals).map_err(to_napi_error)
}

#[napi]
pub fn project(input_json: String) -> NapiResult<String> {
    let params: InvestmentParameters = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = compound_interest_core::project_with_metadata(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[napi]
pub fn default_scenarios() -> NapiResult<String> {
    serde_json::to_string(&scenarios::default_scenarios()).map_err(to_napi_error)
}

#[derive(Serialize)]
struct ScenarioBindingOutput {
    results: Vec<ScenarioResult>,
    ranking: Vec<RankedScenario>,
}

#[napi]
pub fn evaluate_scenarios(input_json: String) -> NapiResult<String> {
    let input: Vec<NamedScenario> = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let results = scenarios::evaluate_scenarios(&input).map_err(to_napi_error)?;
    let ranking = scenarios::rank_by_final_balance(&results);
    serde_json::to_string(&ScenarioBindingOutput { results, ranking }).map_err(to_napi_error)
}
