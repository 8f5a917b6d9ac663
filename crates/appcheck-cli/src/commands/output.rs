//! Shared output formatting for scan results.

use anyhow::Result;
use appcheck_core::AnalysisResult;

use crate::OutputFormat;

/// Print a scan result in the specified format.
pub fn print(module_id: &str, result: &AnalysisResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(module_id, result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(module_id: &str, result: &AnalysisResult) {
    if result.is_compliant() {
        println!(
            "\x1b[32mModule '{}' is compliant\x1b[0m ({} file(s) checked)",
            module_id,
            result.files_checked()
        );
        return;
    }

    println!("\x1b[31merror\x1b[0m: module '{module_id}' is not compliant");
    for violation in result.violations() {
        println!(
            "  {} [{} {}]",
            violation.disallowed_token,
            violation.kind.code(),
            violation.kind
        );
    }
    println!(
        "\nFound {} violation(s) in {} file(s)",
        result.violations().len(),
        result.files_checked()
    );
}

fn print_json(result: &AnalysisResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &AnalysisResult) {
    for violation in result.violations() {
        println!(
            "{}: {} [{}]",
            violation.kind.code(),
            violation.disallowed_token,
            violation.kind
        );
    }
}
