use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::compound::{project, AnnualSummaryEntry, InvestmentParameters, MonthlyBalanceSeries, Totals};
use crate::error::InvestmentError;
use crate::types::Money;
use crate::InvestmentResult;

/// A labelled set of parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub parameters: InvestmentParameters,
}

/// Projection of a single scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub parameters: InvestmentParameters,
    pub series: MonthlyBalanceSeries,
    pub annual_summary: Vec<AnnualSummaryEntry>,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedScenario {
    pub rank: usize,
    pub name: String,
    pub final_balance: Money,
}

impl NamedScenario {
    pub fn new(name: impl Into<String>, parameters: InvestmentParameters) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// File-name friendly form of the name. Letters, digits, `-` and `_`
    /// are kept; every other character, path separators and dots included,
    /// becomes `_`.
    pub fn slug(&self) -> String {
        self.name
            .trim()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

/// The fixed comparison set used by the scenario report.
pub fn default_scenarios() -> Vec<NamedScenario> {
    let scenario = |name: &str, capital, contribution, rate, years| {
        NamedScenario::new(
            name,
            InvestmentParameters {
                initial_capital: capital,
                monthly_contribution: contribution,
                annual_rate_percent: rate,
                period_years: years,
            },
        )
    };

    vec![
        scenario("Padrão", dec!(1000), dec!(100), dec!(5), dec!(10)),
        scenario("Sem aporte", dec!(1000), dec!(0), dec!(5), dec!(10)),
        scenario("Com aporte e taxa maior", dec!(1000), dec!(200), dec!(7), dec!(20)),
    ]
}

/// Validate and project every scenario, preserving input order.
pub fn evaluate_scenarios(scenarios: &[NamedScenario]) -> InvestmentResult<Vec<ScenarioResult>> {
    if scenarios.is_empty() {
        return Err(InvestmentError::InvalidScenario(
            "At least one scenario required".into(),
        ));
    }

    let mut seen = HashSet::new();
    let mut slugs = HashSet::new();
    for s in scenarios {
        if s.name.trim().is_empty() {
            return Err(InvestmentError::InvalidScenario(
                "Scenario names must not be empty".into(),
            ));
        }
        if !seen.insert(s.name.as_str()) {
            return Err(InvestmentError::InvalidScenario(format!(
                "Duplicate scenario name '{}'",
                s.name
            )));
        }
        if !slugs.insert(s.slug()) {
            return Err(InvestmentError::InvalidScenario(format!(
                "Scenario name '{}' maps to the same file name '{}' as an earlier scenario",
                s.name,
                s.slug()
            )));
        }
        s.parameters.validate().map_err(|e| {
            InvestmentError::InvalidScenario(format!("'{}': {e}", s.name))
        })?;
    }

    Ok(scenarios
        .iter()
        .map(|s| {
            let projection = project(&s.parameters);
            ScenarioResult {
                name: s.name.clone(),
                parameters: projection.parameters,
                series: projection.series,
                annual_summary: projection.annual_summary,
                totals: projection.totals,
            }
        })
        .collect())
}

/// Order scenarios by final balance, highest first. Ties keep input order.
pub fn rank_by_final_balance(results: &[ScenarioResult]) -> Vec<RankedScenario> {
    let mut ordered: Vec<&ScenarioResult> = results.iter().collect();
    ordered.sort_by(|a, b| b.totals.final_balance.cmp(&a.totals.final_balance));

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, r)| RankedScenario {
            rank: i + 1,
            name: r.name.clone(),
            final_balance: r.totals.final_balance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_ranking() {
        let results = evaluate_scenarios(&default_scenarios()).unwrap();
        let names: Vec<String> = rank_by_final_balance(&results)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            vec!["Com aporte e taxa maior", "Padrão", "Sem aporte"]
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut scenarios = default_scenarios();
        scenarios[1].name = "Padrão".into();
        assert!(evaluate_scenarios(&scenarios).is_err());
    }

    #[test]
    fn test_invalid_parameters_name_the_scenario() {
        let mut scenarios = default_scenarios();
        scenarios[2].parameters.period_years = dec!(0);
        let err = evaluate_scenarios(&scenarios).unwrap_err().to_string();
        assert!(err.contains("Com aporte e taxa maior"), "got {err}");
    }

    #[test]
    fn test_slug() {
        assert_eq!(default_scenarios()[1].slug(), "Sem_aporte");
        assert_eq!(default_scenarios()[0].slug(), "Padrão");
    }

    #[test]
    fn test_slug_strips_path_characters() {
        let base = default_scenarios()[0].parameters.clone();
        assert_eq!(NamedScenario::new("../escaped", base.clone()).slug(), "___escaped");
        assert_eq!(NamedScenario::new("a/b\\c", base).slug(), "a_b_c");
    }

    #[test]
    fn test_colliding_slugs_rejected() {
        let base = default_scenarios()[0].parameters.clone();
        let scenarios = vec![
            NamedScenario::new("A B", base.clone()),
            NamedScenario::new("A_B", base),
        ];
        let err = evaluate_scenarios(&scenarios).unwrap_err().to_string();
        assert!(err.contains("A_B"), "got {err}");
    }
}
