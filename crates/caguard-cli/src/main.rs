//! CLI entry point for caguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `caguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use caguard_app::{
    parse_report_json, report_to_renderable, run_audit, run_explain, run_modes, serialize_report,
    with_session, Artifacts, Directory, ExplainOutput, ExportTarget, GraphDirectory, Mode,
    Operator,
};
use caguard_graph::{Credentials, GraphClient};
use caguard_render::{render_html, render_terminal};
use caguard_settings::Overrides;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use time::macros::format_description;
use time::OffsetDateTime;

/// Environment variable holding the app registration client secret. Secrets
/// never travel through argv.
const CLIENT_SECRET_VAR: &str = "CAGUARD_CLIENT_SECRET";

#[derive(Parser, Debug)]
#[command(
    name = "caguard",
    version,
    about = "Conditional Access policy auditor for Entra tenants"
)]
struct Cli {
    /// Path to caguard config TOML.
    #[arg(long, default_value = "caguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (standard|strict|info).
    #[arg(long)]
    profile: Option<String>,

    /// Override output directory for generated artifacts.
    #[arg(long)]
    output_dir: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in, fetch Conditional Access policies, and audit them.
    Audit {
        /// Tenant to audit (overrides config).
        #[arg(long)]
        tenant: Option<String>,

        /// App registration client ID (overrides config).
        #[arg(long)]
        client_id: Option<String>,

        /// Non-interactive: print the terminal view once, write the JSON
        /// report, and exit.
        #[arg(long)]
        show: bool,
    },

    /// Render an HTML report from an existing JSON report.
    Html {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/caguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the HTML output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a rule ID with remediation guidance.
    Explain {
        /// The rule ID (e.g., "policy.no_break_glass_exclusion") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Audit {
            ref tenant,
            ref client_id,
            show,
        } => cmd_audit(&cli, tenant.clone(), client_id.clone(), show),
        Commands::Html { report, output } => cmd_html(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_audit(
    cli: &Cli,
    tenant: Option<String>,
    client_id: Option<String>,
    show: bool,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<()> {
        // Missing config file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
        let cfg = if cfg_text.trim().is_empty() {
            caguard_settings::CaguardConfigV1::default()
        } else {
            caguard_settings::parse_config_toml(&cfg_text).context("parse config")?
        };

        let overrides = Overrides {
            profile: cli.profile.clone(),
            tenant_id: tenant,
            client_id,
            output_dir: cli.output_dir.clone().map(Into::into),
        };
        let resolved =
            caguard_settings::resolve_config(cfg, overrides).context("resolve config")?;

        let tenant_id = resolved
            .remote
            .tenant_id
            .clone()
            .context("tenant ID required: pass --tenant or set tenant_id in caguard.toml")?;
        let client_id = resolved
            .remote
            .client_id
            .clone()
            .context("client ID required: pass --client-id or set client_id in caguard.toml")?;
        let client_secret = std::env::var(CLIENT_SECRET_VAR)
            .with_context(|| format!("{CLIENT_SECRET_VAR} must be set"))?;

        let directory = GraphDirectory::new(
            GraphClient::new(),
            Credentials {
                tenant_id,
                client_id,
                client_secret,
            },
        );
        let output_dir = Utf8PathBuf::from(&resolved.output_dir);

        with_session(&directory, &resolved.remote.scopes, |session| {
            let policies = directory.list_policies(session).context("fetch policies")?;

            if show {
                let output = run_audit(&policies, &resolved.effective);
                let bytes = serialize_report(&output.report)?;
                let path = output_dir.join("report.json");
                write_bytes_file(&path, &bytes).context("write report json")?;
                print!("{}", render_terminal(&report_to_renderable(&output.report)));
                eprintln!("caguard: JSON report written to {path}");
                return Ok(());
            }

            let mut operator = StdOperator::new();
            let mut artifacts = FsArtifacts::new(output_dir.clone());
            run_modes(&policies, &resolved.effective, &mut operator, &mut artifacts)
        })
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("caguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_html(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let html = render_html(&report_to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &html).context("write html output")?;
    } else {
        print!("{}", html);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", caguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
        } => {
            eprint!(
                "{}",
                caguard_app::format_not_found(&identifier, available_rule_ids)
            );
            std::process::exit(1);
        }
    }
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn write_bytes_file(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

/// [`Operator`] backed by stdin/stdout.
struct StdOperator {
    input: io::Lines<io::StdinLock<'static>>,
}

impl StdOperator {
    fn new() -> Self {
        StdOperator {
            input: io::stdin().lock().lines(),
        }
    }

    /// Next trimmed line; `None` on EOF.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        match self.input.next() {
            Some(line) => Ok(Some(line.context("read stdin")?.trim().to_string())),
            None => Ok(None),
        }
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        print!("{text}");
        io::stdout().flush().context("flush stdout")?;
        self.read_line()
    }
}

impl Operator for StdOperator {
    fn select_mode(&mut self) -> anyhow::Result<Mode> {
        loop {
            println!();
            println!("Select an option:");
            println!("  1) Show policies in the terminal");
            println!("  2) Generate HTML report");
            println!("  3) Export policies as JSON");
            println!("  q) Quit");
            match self.prompt("> ")? {
                None => return Ok(Mode::Quit),
                Some(line) => match line.as_str() {
                    "1" => return Ok(Mode::ShowTerminal),
                    "2" => return Ok(Mode::GenerateReport),
                    "3" => return Ok(Mode::ExportJson),
                    "q" | "Q" => return Ok(Mode::Quit),
                    other => println!("unknown option: {other}"),
                },
            }
        }
    }

    fn select_export_target(&mut self, policy_count: usize) -> anyhow::Result<ExportTarget> {
        loop {
            let line = match self.prompt(&format!(
                "Export which policy? (1..{policy_count}, 'all', or 'b' to go back) > "
            ))? {
                None => return Ok(ExportTarget::Back),
                Some(line) => line,
            };
            match line.as_str() {
                "all" | "a" => return Ok(ExportTarget::All),
                "b" | "back" => return Ok(ExportTarget::Back),
                other => match other.parse::<usize>() {
                    Ok(n) => return Ok(ExportTarget::Index(n)),
                    Err(_) => println!("unknown selection: {other}"),
                },
            }
        }
    }

    fn confirm_continue(&mut self) -> anyhow::Result<bool> {
        match self.prompt("Continue? [Y/n] ")? {
            None => Ok(false),
            Some(line) => Ok(!matches!(line.as_str(), "n" | "N" | "no")),
        }
    }

    fn print(&mut self, text: &str) {
        print!("{text}");
    }

    fn notify(&mut self, message: &str) {
        println!("caguard: {message}");
    }
}

/// [`Artifacts`] writing into the configured output directory. Exports get
/// timestamped names so repeated runs never clobber each other; the JSON
/// report keeps a stable name so `caguard html` finds it.
struct FsArtifacts {
    output_dir: Utf8PathBuf,
}

impl FsArtifacts {
    fn new(output_dir: Utf8PathBuf) -> Self {
        FsArtifacts { output_dir }
    }

    fn stamp() -> String {
        OffsetDateTime::now_utc()
            .format(format_description!(
                "[year][month][day]-[hour][minute][second]"
            ))
            .unwrap_or_else(|_| "unknown-time".to_string())
    }
}

impl Artifacts for FsArtifacts {
    fn write_report(&mut self, bytes: &[u8]) -> anyhow::Result<String> {
        let path = self.output_dir.join("report.json");
        write_bytes_file(&path, bytes)?;
        Ok(path.to_string())
    }

    fn write_html(&mut self, document: &str) -> anyhow::Result<String> {
        let path = self
            .output_dir
            .join(format!("caguard-report-{}.html", Self::stamp()));
        write_text_file(&path, document)?;
        Ok(path.to_string())
    }

    fn write_export(&mut self, bytes: &[u8]) -> anyhow::Result<String> {
        let path = self
            .output_dir
            .join(format!("ca-policies-{}.json", Self::stamp()));
        write_bytes_file(&path, bytes)?;
        Ok(path.to_string())
    }
}
