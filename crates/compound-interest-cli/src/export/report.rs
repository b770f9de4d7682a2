use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

use compound_interest_core::scenarios::{
    evaluate_scenarios, rank_by_final_balance, NamedScenario, RankedScenario, ScenarioResult,
};

use super::{chart, csv};
use crate::output::money;

pub const REPORT_FILE: &str = "report.html";

pub struct ReportOptions<'a> {
    pub out_dir: &'a Path,
    pub author: Option<&'a str>,
    pub date: NaiveDate,
    pub currency_symbol: &'a str,
}

/// What was written, plus the comparative ranking.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub report: String,
    pub files: Vec<String>,
    pub results: Vec<RankedScenario>,
}

/// Evaluate the scenarios and write, into `out_dir`, one CSV and one SVG
/// chart per scenario followed by the HTML report that embeds them.
pub fn generate(
    scenarios: &[NamedScenario],
    opts: &ReportOptions<'_>,
) -> Result<ReportSummary, Box<dyn std::error::Error>> {
    let results = evaluate_scenarios(scenarios)?;
    std::fs::create_dir_all(opts.out_dir)
        .map_err(|e| format!("Failed to create '{}': {}", opts.out_dir.display(), e))?;

    let mut files: Vec<String> = Vec::new();
    let mut sections: Vec<ScenarioSection> = Vec::with_capacity(results.len());

    for (scenario, result) in scenarios.iter().zip(&results) {
        let slug = scenario.slug();
        let csv_path = opts.out_dir.join(format!("{slug}.csv"));
        let svg_path = opts.out_dir.join(format!("{slug}.svg"));

        csv::write_series_file(&csv_path, &result.series)?;
        let svg = chart::render_svg(&result.name, &result.series)?;
        std::fs::write(&svg_path, &svg)
            .map_err(|e| format!("Failed to write '{}': {}", svg_path.display(), e))?;

        files.push(display(&csv_path));
        files.push(display(&svg_path));
        sections.push(ScenarioSection {
            result,
            svg,
            csv_file: file_name(&csv_path),
        });
    }

    let ranking = rank_by_final_balance(&results);
    let html = compose_html(&sections, &ranking, opts);

    let report_path = opts.out_dir.join(REPORT_FILE);
    std::fs::write(&report_path, html)
        .map_err(|e| format!("Failed to write '{}': {}", report_path.display(), e))?;
    tracing::info!(path = %report_path.display(), scenarios = results.len(), "wrote report");

    Ok(ReportSummary {
        report: display(&report_path),
        files,
        results: ranking,
    })
}

struct ScenarioSection<'a> {
    result: &'a ScenarioResult,
    svg: String,
    csv_file: String,
}

fn compose_html(
    sections: &[ScenarioSection<'_>],
    ranking: &[RankedScenario],
    opts: &ReportOptions<'_>,
) -> String {
    let cur = |v| money::currency(opts.currency_symbol, v);
    let mut body = String::new();

    // Cover
    let _ = writeln!(body, r#"<section class="cover">"#);
    let _ = writeln!(body, "<h1>Compound Interest Calculator</h1>");
    if let Some(author) = opts.author {
        let _ = writeln!(body, "<p>Author: {}</p>", escape(author));
    }
    let _ = writeln!(body, "<p>Date: {}</p>", opts.date.format("%Y-%m-%d"));
    let _ = writeln!(body, "</section>");

    // Description
    let _ = writeln!(body, "<section>\n<h2>1. Project description</h2>");
    let _ = writeln!(
        body,
        "<p>Month-by-month evolution of an investment with monthly capitalization and a fixed \
         contribution added at the end of each month. This report presents the test scenarios, \
         their charts and the generated CSV files.</p>"
    );
    let _ = writeln!(body, "<ul>");
    for item in [
        "Inputs: initial capital, monthly contribution, annual rate (%), period (years)",
        "Month-by-month calculation with monthly capitalization",
        "Balance evolution chart",
        "Annual table with the balance at the end of each year",
        "CSV export of the monthly series",
    ] {
        let _ = writeln!(body, "<li>{item}</li>");
    }
    let _ = writeln!(body, "</ul>\n</section>");

    // Scenarios
    let _ = writeln!(body, "<section>\n<h2>2. Scenarios and results</h2>");
    for section in sections {
        let r = section.result;
        let p = &r.parameters;
        let _ = writeln!(body, r#"<div class="scenario">"#);
        let _ = writeln!(body, "<h3>Scenario: {}</h3>", escape(&r.name));
        let _ = writeln!(
            body,
            "<p>Parameters: capital={}, contribution={}, rate={}%, period={} years</p>",
            p.initial_capital, p.monthly_contribution, p.annual_rate_percent, p.period_years
        );
        let _ = writeln!(
            body,
            "<p>Final balance: {}    |    Total contributed: {}    |    Interest: {}</p>",
            cur(r.totals.final_balance),
            cur(r.totals.total_contributed),
            cur(r.totals.interest_earned)
        );
        let _ = writeln!(body, r#"<div class="chart">{}</div>"#, section.svg);
        let _ = writeln!(
            body,
            r#"<p class="note">CSV: <a href="{0}">{0}</a></p>"#,
            escape(&section.csv_file)
        );
        let _ = writeln!(body, "</div>");
    }
    let _ = writeln!(body, "</section>");

    // Comparative analysis
    let _ = writeln!(body, "<section>\n<h2>3. Comparative analysis</h2>\n<ol>");
    for entry in ranking {
        let _ = writeln!(
            body,
            "<li>{} -> Final balance: {}</li>",
            escape(&entry.name),
            cur(entry.final_balance)
        );
    }
    let _ = writeln!(body, "</ol>\n</section>");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Compound Interest Calculator</title>
    <style>
        body {{ font-family: sans-serif; margin: 2em; }}
        h1 {{ color: #333; }}
        section {{ margin-bottom: 2em; }}
        .cover {{ text-align: center; }}
        .note {{ font-style: italic; font-size: 0.9em; }}
    </style>
</head>
<body>
{body}</body>
</html>
"#
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| display(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use compound_interest_core::scenarios::default_scenarios;
    use pretty_assertions::assert_eq;

    fn options(dir: &Path) -> ReportOptions<'_> {
        ReportOptions {
            out_dir: dir,
            author: Some("Ana <Lima>"),
            date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            currency_symbol: "R$",
        }
    }

    #[test]
    fn test_generates_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let summary = generate(&default_scenarios(), &options(dir.path())).unwrap();

        assert_eq!(summary.files.len(), 6);
        assert!(dir.path().join("Sem_aporte.csv").is_file());
        assert!(dir.path().join("Com_aporte_e_taxa_maior.svg").is_file());
        assert!(dir.path().join(REPORT_FILE).is_file());

        let padrao = std::fs::read_to_string(dir.path().join("Padrão.csv")).unwrap();
        assert_eq!(padrao.lines().count(), 121);
        assert!(padrao.starts_with("Month,Balance\n1,"));
    }

    #[test]
    fn test_report_sections_and_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let summary = generate(&default_scenarios(), &options(dir.path())).unwrap();
        let html = std::fs::read_to_string(&summary.report).unwrap();

        assert!(html.contains("Author: Ana &lt;Lima&gt;"));
        assert!(html.contains("Date: 2024-05-17"));
        assert!(html.contains("Scenario: Sem aporte"));
        assert!(html.contains("Final balance: R$ 1,647.01"));
        assert_eq!(html.matches("<svg").count(), 3);

        let first = html.find("<li>Com aporte e taxa maior -> ").unwrap();
        let last = html.find("<li>Sem aporte -> ").unwrap();
        assert!(first < last);
        assert_eq!(summary.results[0].rank, 1);
        assert_eq!(summary.results[2].name, "Sem aporte");
    }

    #[test]
    fn test_scenario_names_stay_inside_out_dir() {
        let outer = tempfile::tempdir().unwrap();
        let out_dir = outer.path().join("report");
        let mut scenarios = default_scenarios();
        scenarios[1].name = "../escaped".into();

        let summary = generate(&scenarios, &options(&out_dir)).unwrap();

        assert!(out_dir.join("___escaped.csv").is_file());
        assert!(!outer.path().join("escaped.csv").exists());
        assert!(summary
            .files
            .iter()
            .all(|f| Path::new(f).starts_with(&out_dir)));
    }

    #[test]
    fn test_names_sharing_a_file_name_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut scenarios = default_scenarios();
        scenarios[0].name = "A B".into();
        scenarios[1].name = "A_B".into();

        assert!(generate(&scenarios, &options(dir.path())).is_err());
        assert!(!dir.path().join("A_B.csv").exists());
    }

    #[test]
    fn test_empty_scenario_list_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(generate(&[], &options(dir.path())).is_err());
    }
}
