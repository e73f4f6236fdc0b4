use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bundlescope::audit::{AuditReport, DependencyAudit};
use bundlescope::bundle::{BundleAnalysis, BundleReport};
use bundlescope::export::{self, ConsoleRenderer, Palette};
use bundlescope::parser::{self, PackageJson};
use bundlescope::scan::{self, ScanConfig};

#[derive(Parser)]
#[command(name = "bundlescope")]
#[command(version)]
#[command(about = "Bundle weight and dependency audit reports for JavaScript projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report heavy dependencies and the largest source files
    Bundle {
        #[command(flatten)]
        common: CommonArgs,

        /// Where to write the JSON report (relative to --root)
        #[arg(short, long, default_value = "bundle-analysis.json")]
        output: PathBuf,

        /// Directory to scan for large files; repeat for several
        #[arg(long = "scan-dir", value_name = "DIR")]
        scan_dirs: Vec<PathBuf>,

        /// Number of large files to keep
        #[arg(long, default_value_t = scan::DEFAULT_LIMIT)]
        top: usize,
    },
    /// Audit dependencies for unused, duplicate and lazy-loadable packages
    Audit {
        #[command(flatten)]
        common: CommonArgs,

        /// Where to write the JSON report (relative to --root)
        #[arg(short, long, default_value = "dependency-audit.json")]
        output: PathBuf,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Project root
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Manifest path (relative to --root)
    #[arg(short, long, default_value = "package.json")]
    manifest: PathBuf,

    /// Print the JSON report instead of the console summary
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl CommonArgs {
    fn load_manifest(&self) -> Result<PackageJson> {
        let path = self.root.join(&self.manifest);
        parser::parse_file(&path).with_context(|| format!("Cannot load {}", path.display()))
    }

    fn renderer(&self) -> ConsoleRenderer {
        let color = !self.no_color && io::stdout().is_terminal();
        ConsoleRenderer::new(Palette::new(color))
    }
}

fn run_bundle(common: CommonArgs, output: PathBuf, scan_dirs: Vec<PathBuf>, top: usize) -> Result<()> {
    let pkg = common.load_manifest()?;

    let mut config = ScanConfig {
        limit: top,
        ..ScanConfig::default()
    };
    if !scan_dirs.is_empty() {
        config.directories = scan_dirs;
    }

    let files = scan::find_large_files(&common.root, &config);
    let analysis = BundleAnalysis::new(&pkg, files);
    let report = BundleReport::new(&analysis, Utc::now());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if common.json {
        export::json::export(&report, &mut out)?;
    } else {
        common.renderer().render_bundle(&analysis, &mut out)?;
    }

    let output = common.root.join(output);
    export::write_report(&report, &output)?;
    if !common.json {
        writeln!(out, "\n📄 Report saved to {}", output.display())?;
    }
    Ok(())
}

fn run_audit(common: CommonArgs, output: PathBuf) -> Result<()> {
    let pkg = common.load_manifest()?;

    let audit = DependencyAudit::new(&pkg);
    let report = AuditReport::new(&audit, Utc::now());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if common.json {
        export::json::export(&report, &mut out)?;
    } else {
        common.renderer().render_audit(&audit, &mut out)?;
    }

    let output = common.root.join(output);
    export::write_report(&report, &output)?;
    if !common.json {
        writeln!(out, "\n📄 Report saved to {}", output.display())?;
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bundlescope=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bundle {
            common,
            output,
            scan_dirs,
            top,
        } => run_bundle(common, output, scan_dirs, top),
        Commands::Audit { common, output } => run_audit(common, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {:#}", err);
            ExitCode::FAILURE
        }
    }
}
