use anyhow::Result;
use clap::Parser;
use embedvfs::{generate, GenerateError, GeneratorConfig, DEFAULT_PACKAGE};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Generate a virtual file system by embedding files and directories.
///
/// PATTERN is a shell glob. Directories matched by a pattern are embedded
/// recursively under their own name. TARGETDIR is an absolute,
/// slash-separated directory in the virtual file system. The generated
/// module is only written when -o is given; otherwise the mappings are
/// validated and nothing is written.
#[derive(Parser)]
#[command(name = "embedvfs", version, about, long_about)]
struct Cli {
    /// Path of the generated Rust module, for example src/vfs.rs
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Module name of the generated file system
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Virtual path of an embedded file used to generate tests; only
    /// honored together with -o
    #[arg(short = 't', long = "test-file", value_name = "VIRTUAL_PATH")]
    test_file: Option<String>,

    /// Mappings from files to virtual directories
    #[arg(value_name = "PATTERN::TARGETDIR", required = true)]
    mappings: Vec<String>,
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        let mut config = GeneratorConfig::new(cli.mappings).package(cli.package);
        if let Some(output) = cli.output {
            config = config.output(output);
        }
        if let Some(test_file) = cli.test_file {
            config = config.test_file(test_file);
        }
        config
    }
}

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Missing operands are reported by clap with usage and exit code 2
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if err
                .downcast_ref::<GenerateError>()
                .is_some_and(GenerateError::is_argument_error)
            {
                eprintln!("Run 'embedvfs --help' for usage.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GeneratorConfig::from(cli);
    let report = generate(&config)?;

    let registry = &report.registry;
    if report.is_dry_run() {
        println!(
            "Validated {} files ({} bytes); no output written (use -o)",
            registry.len(),
            registry.total_size()
        );
    } else {
        println!(
            "Embedded {} files ({} bytes)",
            registry.len(),
            registry.total_size()
        );
    }

    Ok(())
}
