use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use rxscore_ingest::{ExtractSummary, derive_schema, extract_file, read_raw_table};
use rxscore_schema::{ConfigFormat, SchemaPaths, SchemaRegistry, raw_data_path};
use rxscore_validate::{validate, validate_dataset};
use rxscore_cli::logging::redact_value;
use rxscore_cli::requests::read_requests;

use crate::cli::{CheckArgs, DeriveArgs, ExtractArgs, SchemaArgs, SchemaSourceArgs, ValidateArgs};
use crate::types::{CheckOutcome, CheckResult, DeriveResult, ValidateResult};

pub fn run_extract(args: &ExtractArgs) -> Result<ExtractSummary> {
    let raw = args.raw.clone().unwrap_or_else(raw_data_path);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| SchemaPaths::resolve(None, None).combinations);
    let span = info_span!("extract", raw = %raw.display());
    let _guard = span.enter();

    extract_file(&raw, &output)
        .with_context(|| format!("extract combinations from {}", raw.display()))
}

pub fn run_derive(args: &DeriveArgs) -> Result<DeriveResult> {
    let raw = args.raw.clone().unwrap_or_else(raw_data_path);
    let df = read_raw_table(&raw).with_context(|| format!("read {}", raw.display()))?;
    let config = derive_schema(&df).with_context(|| format!("derive schema from {}", raw.display()))?;

    let output = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| SchemaPaths::resolve(None, None).params);
        config
            .update_document(&path)
            .with_context(|| format!("write schema to {}", path.display()))?;
        info!(output = %path.display(), "schema configuration written");
        Some(path)
    };

    Ok(DeriveResult {
        raw,
        rows: df.height(),
        config,
        output,
    })
}

/// Render a derived configuration in the format its output path implies.
pub fn render_document(result: &DeriveResult) -> Result<String> {
    let format = result
        .output
        .as_deref()
        .map_or(ConfigFormat::Toml, ConfigFormat::from_path);
    result
        .config
        .to_document_string(format)
        .context("render schema document")
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let registry = load_registry(&args.schema)?;
    let requests = read_requests(&args.requests)?;
    let span = info_span!("check", requests = requests.len());
    let _guard = span.enter();

    let outcomes = requests
        .iter()
        .map(|request| {
            let rejection = validate(request, &registry).err();
            if let Some(rejection) = &rejection {
                warn!(
                    patient_id = redact_value(&request.patient_id),
                    kind = ?rejection.kind(),
                    violations = rejection.violations.len(),
                    "request rejected"
                );
            }
            CheckOutcome {
                patient_id: request.patient_id.clone(),
                rejection,
            }
        })
        .collect();

    Ok(CheckResult {
        source: args.requests.clone(),
        fingerprint: registry.fingerprint().to_string(),
        degraded: registry.is_degraded(),
        outcomes,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let registry = load_registry(&args.schema)?;
    let raw = args.raw.clone().unwrap_or_else(raw_data_path);
    let df = read_raw_table(&raw).with_context(|| format!("read {}", raw.display()))?;
    let report = validate_dataset(&df, &registry);
    info!(
        rows = report.rows,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "training table validated"
    );
    Ok(ValidateResult { raw, report })
}

pub fn run_schema(args: &SchemaArgs) -> Result<SchemaRegistry> {
    load_registry(&args.schema)
}

fn load_registry(args: &SchemaSourceArgs) -> Result<SchemaRegistry> {
    let paths = SchemaPaths::resolve(args.params.clone(), args.combinations.clone());
    if args.strict {
        SchemaRegistry::try_load(&paths.params, &paths.combinations).context("load schema")
    } else {
        Ok(SchemaRegistry::load(&paths.params, &paths.combinations))
    }
}
