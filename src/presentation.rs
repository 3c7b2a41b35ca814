// src/presentation.rs
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::options::OutputFormat;
use serde_json::json;
use string_calc_core::Evaluation;

/// Renders a successful evaluation for stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_evaluation(evaluation: &Evaluation, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Plain => Ok(render_plain(evaluation, config.explain)),
        OutputFormat::Json => render_json(evaluation, config.explain),
    }
}

fn render_plain(evaluation: &Evaluation, explain: bool) -> String {
    if !explain {
        return evaluation.sum.to_string();
    }

    format!(
        "sum:        {}\ndelimiters: {}\ntokens:     {}\nignored:    {:?}",
        evaluation.sum,
        evaluation.delimiters,
        evaluation.tokens.len(),
        evaluation.ignored
    )
}

fn render_json(evaluation: &Evaluation, explain: bool) -> Result<String> {
    let value = if explain {
        serde_json::to_value(evaluation)?
    } else {
        json!({ "sum": evaluation.sum })
    };
    Ok(serde_json::to_string(&value)?)
}

/// Renders a failure. JSON output goes to stdout so scripts can parse it;
/// plain output is meant for stderr.
#[must_use]
pub fn render_error(err: &AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => format!("Error: {err}"),
        OutputFormat::Json => {
            let mut error = json!({ "kind": err.kind(), "message": err.to_string() });
            if let Some(tokens) = calculator_error(err).and_then(|e| e.negative_tokens()) {
                error["tokens"] = json!(tokens);
            }
            json!({ "error": error }).to_string()
        }
    }
}

const fn calculator_error(err: &AppError) -> Option<&string_calc_core::CalculatorError> {
    match err {
        AppError::Calculator(inner) => Some(inner),
        _ => None,
    }
}
