//! Check command implementation

use crate::config::Settings;
use crate::output::{print_json, print_result_summary};
use crate::runner::ExpiryRunner;
use crate::utils::domain::{is_valid_domain, normalize_domain};
use crate::utils::progress::probe_spinner;
use crate::utils::ToolkitError;

/// Run the check command
pub async fn run_check(input: &str, settings: &Settings, json: bool) -> anyhow::Result<()> {
    let domain = normalize_domain(input);
    if !is_valid_domain(&domain) {
        return Err(ToolkitError::InvalidDomain.into());
    }

    let runner = ExpiryRunner::from_settings(settings);

    let spinner = (!json).then(|| probe_spinner(&domain));
    let outcome = runner.check(&domain).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let result = outcome?;

    if json {
        print_json(&result)?;
    } else {
        print_result_summary(&result);
    }

    Ok(())
}
