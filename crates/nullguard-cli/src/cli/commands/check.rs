use crate::cli::args::CheckArgs;
use crate::exit_codes::{EXIT_INVALID_FIELDS, EXIT_SUCCESS};
use anyhow::Context;
use nullguard_core::{NullFieldValidator, OptionalFields, ValidationResult};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

pub fn run(args: CheckArgs) -> anyhow::Result<i32> {
    let mut optional: OptionalFields = args.optional.iter().cloned().collect();
    if let Some(path) = &args.optional_file {
        optional.extend(load_optional_file(path)?);
    }

    let data = read_document(args.input.as_deref())?;
    let result = NullFieldValidator::with_optional_fields(optional).validate(&data);

    let out = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", out);

    Ok(match result {
        ValidationResult::Success => EXIT_SUCCESS,
        ValidationResult::Error { invalid_fields } => {
            tracing::info!(invalid = invalid_fields.len(), "null fields found");
            EXIT_INVALID_FIELDS
        }
    })
}

fn read_document(input: Option<&Path>) -> anyhow::Result<Value> {
    let text = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("input is not valid JSON")
}

/// Accepts a YAML or JSON list of paths.
fn load_optional_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read optional fields {}", path.display()))?;
    serde_yaml::from_str(&text)
        .with_context(|| format!("optional fields {} must be a list of paths", path.display()))
}
