#![deny(unsafe_code)]

//! Command-line front end for the association resolution engine.
//!
//! Loads a JSON rules file, feeds the given paths through the indexing pass
//! and the display façade, and prints the winning association per path. This
//! is the same pipeline an IDE host drives, minus the host's file watcher
//! and storage engine.

use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

use associations::{Association, AssociationSet, IconType, PathInfo};
use clap::{Arg, ArgAction, ArgMatches, Command};
use indexing::{IndexedFile, MemoryIndexStore, ScopeId};
use resolver::{Config, Resolver, seed_association};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// On-disk rules file: both rule lists plus the global flags.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesFile {
    #[serde(default)]
    files: AssociationSet,
    #[serde(default)]
    folders: AssociationSet,
    #[serde(default = "default_enabled")]
    files_enabled: bool,
    #[serde(default = "default_enabled")]
    folders_enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

fn cli() -> Command {
    Command::new("pathicons")
        .about("Resolve icon associations for paths against a rules file")
        .arg(
            Arg::new("rules")
                .long("rules")
                .short('r')
                .value_name("FILE")
                .help("JSON rules file with file and folder associations"),
        )
        .arg(
            Arg::new("folders")
                .long("folders")
                .action(ArgAction::SetTrue)
                .help("Treat the given paths as directories"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("NAME")
                .help("Print the association a new rule would be seeded with for NAME"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Enable debug diagnostics"),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(0..)
                .help("Paths to resolve"),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let default_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("pathicons: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    if let Some(name) = matches.get_one::<String>("seed") {
        let seeded = seed_association(name);
        let json = serde_json::to_string_pretty(&seeded)
            .map_err(|error| format!("failed to render seeded rule: {error}"))?;
        println!("{json}");
        return Ok(());
    }

    let rules_path = matches
        .get_one::<String>("rules")
        .ok_or("--rules <FILE> is required unless --seed is used")?;
    let rules = load_rules(rules_path)?;

    let config = Arc::new(Config::new(rules.files, rules.folders));
    config.set_files_enabled(rules.files_enabled);
    config.set_folders_enabled(rules.folders_enabled);

    let resolver = Resolver::new(config, MemoryIndexStore::new());
    let scope = ScopeId::new("cli");
    let as_folders = matches.get_flag("folders");

    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .map(Iterator::collect)
        .unwrap_or_default();
    if paths.is_empty() {
        return Err("no paths given".to_owned());
    }

    for path in paths {
        let icon_type = if as_folders {
            IconType::Folder
        } else {
            IconType::File
        };
        if icon_type == IconType::File {
            resolver.index_path(&IndexedFile::new(path, scope.clone()));
        }
        let resolved = resolver.resolve_for_display(&PathInfo::new(path), icon_type, &scope);
        println!("{path} -> {}", describe(resolved.as_deref()));
    }
    Ok(())
}

fn load_rules(path: &str) -> Result<RulesFile, String> {
    let text = fs::read_to_string(path)
        .map_err(|error| format!("cannot read rules file '{path}': {error}"))?;
    serde_json::from_str(&text)
        .map_err(|error| format!("cannot parse rules file '{path}': {error}"))
}

fn describe(rule: Option<&Association>) -> String {
    rule.map_or_else(
        || "none".to_owned(),
        |rule| {
            let mut out = rule.name().to_owned();
            if !rule.icon().is_empty() {
                out.push_str(&format!(" [{}]", rule.icon()));
            }
            if let Some(color) = rule.icon_color() {
                out.push_str(&format!(" color={color}"));
            }
            out.push_str(&format!(" priority={}", rule.priority()));
            out
        },
    )
}
