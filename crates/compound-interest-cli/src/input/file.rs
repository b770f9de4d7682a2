use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML file and deserialise into a typed struct.
///
/// `.yaml` / `.yml` files are parsed as YAML, everything else as JSON.
pub fn read_document<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;

    tracing::debug!(path = %canonical.display(), "reading input document");

    let value: T = if is_yaml(&canonical) {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    };
    Ok(value)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Resolve and validate the path.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compound_interest_core::InvestmentParameters;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_reads_yaml_parameters() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "initial_capital: 1000\nmonthly_contribution: 100\nannual_rate_percent: 5.5\nperiod_years: 10"
        )
        .unwrap();

        let params: InvestmentParameters =
            read_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(params.annual_rate_percent, dec!(5.5));
        assert_eq!(params.period_years, dec!(10));
    }

    #[test]
    fn test_reads_json_parameters() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"initial_capital": "0", "monthly_contribution": 50, "annual_rate_percent": 0, "period_years": 2}}"#
        )
        .unwrap();

        let params: InvestmentParameters =
            read_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(params.monthly_contribution, dec!(50));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_document::<InvestmentParameters>("/nonexistent/params.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
