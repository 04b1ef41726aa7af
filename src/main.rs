use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::BoolishValueParser};
use langmap::{
    BuildOptions, BuildReport, Bundled, CollisionPolicy, Fingerprint, JsonFile, LanguageRecord,
    Resolver, integrity, load, needs_republish,
};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "langmap", version, about = "Identify languages from names and paths")]
struct Cli {
    /// JSON dataset to build from instead of the bundled snapshot.
    #[arg(long, global = true, env = "LANGMAP_DATASET")]
    dataset: Option<PathBuf>,

    /// Fail when two language names lowercase to the same key.
    #[arg(
        long,
        global = true,
        env = "LANGMAP_STRICT",
        value_parser = BoolishValueParser::new()
    )]
    strict: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look a language up by name (case-insensitive).
    Name { name: String },
    /// List every language in a category.
    Type { category: String },
    /// Identify a file name or path.
    File {
        path: String,
        #[arg(long, short)]
        filter: Option<String>,
    },
    /// Build the four index artifacts into a directory.
    Build { out: PathBuf },
    /// Print the dataset fingerprint, or compare it with a stored one.
    Fingerprint {
        #[arg(long)]
        previous: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LANGMAP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("langmap=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn open(dataset: Option<&Path>, strict: bool) -> Result<(Resolver, BuildReport)> {
    let options = BuildOptions {
        collision_policy: if strict {
            CollisionPolicy::Reject
        } else {
            CollisionPolicy::LastWriteWins
        },
    };
    let (resolver, report) = match dataset {
        Some(path) => load(&JsonFile(path.to_path_buf()), options),
        None => load(&Bundled, options),
    }?;
    info!(
        languages = report.languages,
        collisions = report.key_collisions.len(),
        "dataset loaded"
    );
    Ok((resolver, report))
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let found = run(Cli::parse())?;
    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Returns `false` when the query found nothing.
fn run(cli: Cli) -> Result<bool> {
    let Cli {
        dataset,
        strict,
        json,
        command,
    } = cli;
    let dataset = dataset.as_deref();

    match command {
        Command::Name { name } => {
            let (resolver, _) = open(dataset, strict)?;
            match resolver.get_language(&name) {
                Some(record) => {
                    print_records(&[record], json)?;
                    Ok(true)
                }
                None => {
                    eprintln!("not found: {name}");
                    Ok(false)
                }
            }
        }
        Command::Type { category } => {
            let (resolver, _) = open(dataset, strict)?;
            // An unknown category is a valid, empty answer.
            print_records(&resolver.get_languages_by_type(&category), json)?;
            Ok(true)
        }
        Command::File { path, filter } => {
            let (resolver, _) = open(dataset, strict)?;
            match resolver.get_language_by_file_name(&path, filter.as_deref()) {
                Some(names) if json => println!("{}", serde_json::to_string(&names)?),
                Some(names) => names.iter().for_each(|n| println!("{n}")),
                None => {
                    eprintln!("not found: {path}");
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Command::Build { out } => {
            let (resolver, report) = open(dataset, strict)?;
            if let Err(errors) = integrity::validate(resolver.indices()) {
                for err in &errors {
                    eprintln!("integrity: {err}");
                }
                anyhow::bail!("{} integrity violation(s)", errors.len());
            }
            resolver.indices().write_dir(&out)?;
            println!(
                "{} languages, {} extensions, {} filenames -> {}",
                report.languages,
                report.extensions,
                report.filenames,
                out.display()
            );
            Ok(true)
        }
        Command::Fingerprint { previous } => fingerprint(dataset, previous.as_deref()),
    }
}

fn print_records(records: &[&LanguageRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    for r in records {
        match r.group() {
            Some(group) => println!("{}\t{}\t(group: {group})", r.name(), r.category()),
            None => println!("{}\t{}", r.name(), r.category()),
        }
    }
    Ok(())
}

fn fingerprint(dataset: Option<&Path>, previous: Option<&str>) -> Result<bool> {
    let text = match dataset {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading dataset {}", path.display()))?,
        None => serde_json::to_string(&langmap::bundled_dataset())?,
    };
    let current = Fingerprint::of(&text);
    match previous {
        None => println!("{current}"),
        Some(prev) => {
            let changed = needs_republish(&text, Some(&Fingerprint::from_hex(prev)));
            println!("{}", if changed { "changed" } else { "unchanged" });
        }
    }
    Ok(true)
}
