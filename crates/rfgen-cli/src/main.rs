use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use rfgen_core::config::{self, CONFIG_FILE_NAME, RfgenConfig, SchemaFamily};
use rfgen_core::fetch::HttpSchemaSource;
use rfgen_core::{CodeGenerator, Generation, generate_model};
use rfgen_go::{GoConfig, GoGenerator};

#[derive(Parser)]
#[command(
    name = "rfgen",
    about = "Generate Go types from Redfish/Swordfish JSON Schema",
    version
)]
struct Cli {
    /// Emit verbose output to help debug
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go source for a schema object
    Generate {
        /// The Swordfish/Redfish schema object to process
        object: String,

        /// Schema family, which also names the Go package
        #[arg(short = 't', long = "type")]
        family: Option<FamilyArg>,

        /// File to write results to (default: stdout)
        #[arg(short, long)]
        output_file: Option<PathBuf>,
    },

    /// Print the translated model of a schema object
    Inspect {
        /// The Swordfish/Redfish schema object to process
        object: String,

        /// Schema family
        #[arg(short = 't', long = "type")]
        family: Option<FamilyArg>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new rfgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FamilyArg {
    Redfish,
    Swordfish,
}

impl From<FamilyArg> for SchemaFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Redfish => SchemaFamily::Redfish,
            FamilyArg::Swordfish => SchemaFamily::Swordfish,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Generate {
            object,
            family,
            output_file,
        } => cmd_generate(&object, family, output_file),

        Commands::Inspect {
            object,
            family,
            format,
        } => cmd_inspect(&object, family, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "rfgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<RfgenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn load_model(object: &str, family: Option<FamilyArg>, cfg: &RfgenConfig) -> Result<Generation> {
    let family = family.map(SchemaFamily::from).unwrap_or(cfg.family);
    let source = HttpSchemaSource::new()?;
    let generation = generate_model(&source, cfg, family, object)
        .with_context(|| format!("failed to generate {family} object {object}"))?;

    let fallbacks = generation.diagnostics.fallback_count();
    if fallbacks > 0 {
        log::info!("{fallbacks} properties of {object} defaulted to string");
    }
    Ok(generation)
}

fn cmd_generate(object: &str, family: Option<FamilyArg>, output_file: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let generation = load_model(object, family, &cfg)?;

    let go_config = GoConfig::from_comments(&cfg.comments);
    let files = GoGenerator.generate(&generation.model, &go_config)?;
    let output = output_file.or_else(|| cfg.output.as_ref().map(PathBuf::from));

    for file in &files {
        match &output {
            Some(path) => write_file(path, &file.content)?,
            None => print!("{}", file.content),
        }
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("  wrote {}", path.display());
    Ok(())
}

fn cmd_inspect(object: &str, family: Option<FamilyArg>, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let generation = load_model(object, family, &cfg)?;

    let summary = build_inspect_summary(&generation)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(generation: &Generation) -> Result<serde_json::Value> {
    let model = &generation.model;

    let classes: Vec<serde_json::Value> = model
        .classes
        .iter()
        .map(|c| {
            let attrs: Vec<serde_json::Value> = c
                .attrs
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "name": a.name,
                        "wire_name": a.raw_name,
                        "type": a.ty.to_string(),
                        "rule": format!("{:?}", a.ty.rule),
                    })
                })
                .collect();
            serde_json::json!({ "name": c.name, "attrs": attrs })
        })
        .collect();

    let enums: Vec<serde_json::Value> = model
        .enums
        .iter()
        .map(|e| {
            serde_json::json!({
                "name": e.name,
                "members": e.members.iter().map(|m| &m.name).collect::<Vec<_>>(),
            })
        })
        .collect();

    Ok(serde_json::json!({
        "object_name": model.object_name,
        "package": model.package.as_str(),
        "canonical_url": generation.canonical_url,
        "classes": classes,
        "enums": enums,
        "diagnostics": serde_json::to_value(&generation.diagnostics)?,
    }))
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
