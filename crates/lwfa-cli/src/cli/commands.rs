use super::{CliError, OutputFormat};
use anyhow::Context;
use lwfa_core::PhysicalConstants;
use lwfa_core::report::ScenarioSummary;
use lwfa_core::scenario::Scenario;
use std::fs;
use std::path::Path;
use tracing::info;

pub(super) fn run_scenario_file_command(path: &Path, format: OutputFormat) -> Result<i32, CliError> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario file '{}'", path.display()))?;
    let scenario = Scenario::from_json_str(&source).map_err(CliError::Compute)?;
    info!(path = %path.display(), "loaded scenario");
    run_scenario_command(scenario, format)
}

pub(super) fn run_scenario_command(scenario: Scenario, format: OutputFormat) -> Result<i32, CliError> {
    let constants = PhysicalConstants::codata_2018();
    let outcome = scenario.evaluate(&constants).map_err(CliError::Compute)?;
    let summary = ScenarioSummary::from_outcome(&outcome).map_err(CliError::Compute)?;

    match format {
        OutputFormat::Text => println!("{}", summary.render_text()),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&summary)
                .context("failed to serialize scenario summary")?;
            println!("{rendered}");
        }
    }

    Ok(0)
}
