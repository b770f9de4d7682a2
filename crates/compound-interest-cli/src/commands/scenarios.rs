use clap::Args;
use serde_json::{json, Value};

use compound_interest_core::scenarios::{default_scenarios, NamedScenario};

use crate::input;

/// Arguments for listing scenarios
#[derive(Args)]
pub struct ScenariosArgs {
    /// Path to a JSON or YAML scenario list (defaults to the built-in set)
    #[arg(long)]
    pub scenarios: Option<String>,
}

/// Built-in scenarios, or the list in `path`.
pub fn load(path: Option<&str>) -> Result<Vec<NamedScenario>, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let scenarios: Vec<NamedScenario> = input::file::read_document(p)?;
            tracing::debug!(path = %p, count = scenarios.len(), "loaded scenarios");
            Ok(scenarios)
        }
        None => Ok(default_scenarios()),
    }
}

pub fn run_scenarios(args: ScenariosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenarios = load(args.scenarios.as_deref())?;
    let rows: Vec<Value> = scenarios
        .iter()
        .map(|s| {
            json!({
                "name": s.name,
                "initial_capital": s.parameters.initial_capital,
                "monthly_contribution": s.parameters.monthly_contribution,
                "annual_rate_percent": s.parameters.annual_rate_percent,
                "period_years": s.parameters.period_years,
            })
        })
        .collect();
    Ok(json!({ "results": rows }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const YAML_LIST: &str = "\
- name: Curto
  parameters:
    initial_capital: 500
    monthly_contribution: 50
    annual_rate_percent: 4
    period_years: 2
- name: Longo
  parameters:
    initial_capital: 2000
    monthly_contribution: 0
    annual_rate_percent: 6.5
    period_years: 30
";

    fn yaml_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "{}", YAML_LIST).unwrap();
        file
    }

    #[test]
    fn test_load_reads_yaml_list() {
        let file = yaml_file();
        let scenarios = load(Some(file.path().to_str().unwrap())).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "Curto");
        assert_eq!(scenarios[1].parameters.annual_rate_percent, dec!(6.5));
        assert_eq!(scenarios[1].parameters.period_years, dec!(30));
    }

    #[test]
    fn test_load_without_path_gives_builtin_set() {
        assert_eq!(load(None).unwrap(), default_scenarios());
    }

    #[test]
    fn test_run_scenarios_lists_file_rows() {
        let file = yaml_file();
        let value = run_scenarios(ScenariosArgs {
            scenarios: Some(file.path().to_str().unwrap().to_string()),
        })
        .unwrap();

        let rows = value["results"].as_array().unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Curto", "Longo"]);
        assert!(rows[0].get("monthly_contribution").is_some());
    }

    #[test]
    fn test_run_scenarios_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.yaml");
        assert!(run_scenarios(ScenariosArgs {
            scenarios: Some(missing.to_str().unwrap().to_string()),
        })
        .is_err());
    }
}
