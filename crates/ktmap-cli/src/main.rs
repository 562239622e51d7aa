use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ktmap_config::{
    builtin_pairs, init_tracing, load_for_root, load_pairs, KtmapConfig, MappedTypesDocument,
};
use ktmap_core::{render_java_stub, render_kotlin_stub, CorrespondenceReport, Registry};
use ktmap_gen::{build_index, generate, write_index, GenerateOptions};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "ktmap",
    version,
    about = "Generate Kotlin/Java mapped-type stubs and member correspondence reports"
)]
struct Cli {
    /// Config file (defaults to `KTMAP_CONFIG_PATH`, then `ktmap.toml` in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write stubs and mapping details for every pair in the mapped-types document
    Generate(GenerateArgs),
    /// Rebuild the mapped-types index from generated directories
    Index(IndexArgs),
    /// Print the correspondence report for a single pair without writing files
    Inspect(InspectArgs),
    /// Print the built-in mapped-types document
    Pairs(PairsArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Mapped-types document (YAML)
    #[arg(long, conflicts_with = "builtin")]
    input: Option<PathBuf>,
    /// Use the built-in list of documented mapped types instead of a document
    #[arg(long)]
    builtin: bool,
    /// Output root; one directory per pair is created beneath it
    #[arg(long)]
    output: Option<PathBuf>,
    /// Also rebuild the index file after generating
    #[arg(long)]
    index: bool,
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct IndexArgs {
    /// Output root containing generated pair directories
    #[arg(long)]
    output: Option<PathBuf>,
    /// Index file to write
    #[arg(long)]
    index_file: Option<PathBuf>,
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InspectArgs {
    /// Fully-qualified Kotlin type, e.g. `kotlin.collections.List`
    kotlin: String,
    /// Fully-qualified Java type, e.g. `java.util.List`
    java: String,
    /// Also print both stubs
    #[arg(long)]
    stubs: bool,
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PairsArgs {
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn load_config(explicit: Option<&Path>) -> Result<(KtmapConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = KtmapConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        return Ok((config, Some(path.to_path_buf())));
    }
    load_for_root(Path::new(".")).context("failed to load config")
}

fn run(cli: Cli) -> Result<i32> {
    let (config, config_path) = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging);
    if let Some(path) = config_path {
        tracing::debug!(target: "ktmap.cli", path = %path.display(), "using config file");
    }

    match cli.command {
        Command::Generate(args) => run_generate(args, &config),
        Command::Index(args) => {
            let output_dir = args.output.unwrap_or_else(|| config.output_dir.clone());
            let index_file = args.index_file.unwrap_or_else(|| config.index_file.clone());
            let count = rebuild_index(&output_dir, &index_file, args.json)?;
            if !args.json {
                println!(
                    "Indexed {count} mappings from {}/ into {}",
                    output_dir.display(),
                    index_file.display()
                );
            }
            Ok(0)
        }
        Command::Inspect(args) => {
            let registry = Registry::global();
            let report = registry.infer(&args.kotlin, &args.java);
            if args.json {
                if args.stubs {
                    let stubs = InspectEnvelope {
                        java_stub: render_java_stub(&args.java, &registry.lookup(&args.java)),
                        kotlin_stub: render_kotlin_stub(
                            &args.kotlin,
                            &registry.lookup(&args.kotlin),
                        ),
                        report: &report,
                    };
                    print_json(&stubs)?;
                } else {
                    print_json(&report)?;
                }
            } else {
                if args.stubs {
                    println!("{}", render_java_stub(&args.java, &registry.lookup(&args.java)));
                    println!();
                    println!(
                        "{}",
                        render_kotlin_stub(&args.kotlin, &registry.lookup(&args.kotlin))
                    );
                    println!();
                }
                print!("{}", serde_yaml::to_string(&report)?);
            }
            Ok(0)
        }
        Command::Pairs(args) => {
            let document = MappedTypesDocument {
                mappings: builtin_pairs(),
            };
            if args.json {
                print_json(&document)?;
            } else {
                print!("{}", serde_yaml::to_string(&document)?);
            }
            Ok(0)
        }
    }
}

fn run_generate(args: GenerateArgs, config: &KtmapConfig) -> Result<i32> {
    let pairs = if args.builtin {
        builtin_pairs()
    } else {
        let input = args.input.unwrap_or_else(|| config.mapped_types.clone());
        load_pairs(&input).with_context(|| {
            format!(
                "failed to load mapped types from {} (pass --builtin to use the documented list)",
                input.display()
            )
        })?
    };

    let options = GenerateOptions {
        output_dir: args.output.unwrap_or_else(|| config.output_dir.clone()),
    };
    let summary = generate(Registry::global(), &pairs, &options, |pair| {
        if !args.json {
            println!("Generated mapping for {} <-> {}", pair.kotlin, pair.java);
        }
    })
    .context("generation aborted")?;

    if args.index {
        rebuild_index(&options.output_dir, &config.index_file, false)?;
    }

    if args.json {
        print_json(&summary)?;
    } else {
        println!();
        println!("All mappings generated in {}/", options.output_dir.display());
    }
    Ok(0)
}

fn rebuild_index(output_dir: &Path, index_file: &Path, json: bool) -> Result<usize> {
    let index = build_index(output_dir)
        .with_context(|| format!("failed to scan {}", output_dir.display()))?;
    write_index(index_file, &index)
        .with_context(|| format!("failed to write {}", index_file.display()))?;
    tracing::info!(
        target: "ktmap.cli",
        mappings = index.mappings.len(),
        path = %index_file.display(),
        "wrote mapped-types index"
    );
    if json {
        print_json(&index)?;
    }
    Ok(index.mappings.len())
}

#[derive(Serialize)]
struct InspectEnvelope<'a> {
    java_stub: String,
    kotlin_stub: String,
    report: &'a CorrespondenceReport,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{out}");
    Ok(())
}
