//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            std::env::current_dir().expect("Cannot determine current directory")
        });

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Fixture reports validated by `conform`.
fn report_fixtures_dir() -> PathBuf {
    project_root()
        .join("crates")
        .join("caguard-cli")
        .join("tests")
        .join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(caguard_types::AuditReport)
}

fn generate_export_schema() -> schemars::Schema {
    schema_for!(caguard_types::ExportPolicy)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(caguard_settings::CaguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "caguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "caguard.export.v1.json",
            generate: generate_export_schema,
        },
        SchemaSpec {
            filename: "caguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut all_match = true;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            all_match = false;
            continue;
        }

        let schema = (spec.generate)();
        let expected = serialize_schema(&schema)?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
            all_match = false;
        }
    }

    if all_match {
        println!("All schemas are up to date.");
        Ok(())
    } else {
        if !missing.is_empty() {
            eprintln!("Missing schemas:");
            for name in &missing {
                eprintln!("  - {}", name);
            }
        }
        if !mismatched.is_empty() {
            eprintln!("Schemas out of date:");
            for name in &mismatched {
                eprintln!("  - {}", name);
            }
        }
        eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
        bail!("Schema validation failed")
    }
}

/// Validate report fixtures against the generated report schema.
///
/// This checks:
/// 1. Schema validation: fixture reports validate against caguard.report.v1
/// 2. Normalization: the normalizer recognizes each fixture as an envelope,
///    so golden-file comparison elsewhere stays deterministic
fn conform() -> anyhow::Result<()> {
    let schema = generate_report_schema();
    let schema_value =
        serde_json::to_value(&schema).context("Failed to serialize report schema")?;
    let compiled = jsonschema::draft7::new(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    println!("✓ caguard.report.v1 schema compiles");

    let fixtures_dir = report_fixtures_dir();
    if !fixtures_dir.exists() {
        bail!("fixtures directory not found at {}", fixtures_dir.display());
    }

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    for entry in fs::read_dir(&fixtures_dir).context("Failed to read fixtures directory")? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }

        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", filename))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", filename))?;

        for err in compiled.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", filename, err));
        }

        let normalized = caguard_test_util::normalize_nondeterministic(value);
        if normalized["tool"]["version"] != "__VERSION__"
            || normalized["started_at"] != "__TIMESTAMP__"
        {
            errors.push(format!(
                "{}: not recognized as a report envelope by the normalizer",
                filename
            ));
        }

        fixture_count += 1;
        println!("  ✓ {} validates", filename);
    }

    if fixture_count == 0 {
        bail!("No JSON fixtures found in {}", fixtures_dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "\n✓ All {} report fixtures pass conformance checks!",
        fixture_count
    );
    Ok(())
}

/// Validate that all rule IDs have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let rule_ids = caguard_types::explain::all_rule_ids();

    let mut errors = Vec::new();

    for rule_id in rule_ids {
        match caguard_types::explain::lookup_explanation(rule_id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Rule ID '{}' has empty title", rule_id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Rule ID '{}' has empty description", rule_id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Rule ID '{}' has empty remediation", rule_id));
                }
            }
            None => {
                errors.push(format!("Rule ID '{}' has no explanation", rule_id));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} rule IDs have explanations", rule_ids.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate report fixtures against caguard.report.v1");
    eprintln!("  explain-coverage  Validate all rule IDs have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{}", name);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
