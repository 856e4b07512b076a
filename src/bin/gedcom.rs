//! Command-line interface for gedcom
//! This binary renders GEDCOM files and runs genealogy queries against them.
//!
//! Usage:
//!   gedcom print `<path>` [--format `<format>`]        - Render the document
//!   gedcom find `<path>` --criteria `<criteria>`      - List matching individuals
//!   gedcom ancestors `<path>` `<pointer>` [--natural] - List an individual's ancestors
//!   gedcom path `<path>` `<from>` `<to>` [--natural]  - Lineage from a descendant to an ancestor
//!
//! Global flags: `--lenient`, `--config <file>`, `--format <format>`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use gedcom::gedcom::processor::{process_file, ProcessingSpec};
use gedcom::{parse_file, AncestorType, ElementId, Gedcom, Loader, OutputFormat};
use std::error::Error;
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    init_tracing();

    let format_help = format!(
        "Output format ({})",
        OutputFormat::all()
            .iter()
            .map(|format| format.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let matches = Command::new("gedcom")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and querying GEDCOM files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Repair malformed lines and level jumps instead of failing"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help(format_help),
        )
        .subcommand(
            Command::new("print")
                .about("Render a GEDCOM file")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("find")
                .about("List individuals matching a criteria string")
                .arg(path_arg())
                .arg(
                    Arg::new("criteria")
                        .long("criteria")
                        .help("Criteria such as 'surname=Doe:birth_range=1840-1860'")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("ancestors")
                .about("List the ancestors of an individual")
                .arg(path_arg())
                .arg(pointer_arg("pointer", 2, "Pointer of the individual, e.g. @I1@"))
                .arg(natural_arg()),
        )
        .subcommand(
            Command::new("path")
                .about("Find the lineage from a descendant up to an ancestor")
                .arg(path_arg())
                .arg(pointer_arg("from", 2, "Pointer of the descendant"))
                .arg(pointer_arg("to", 3, "Pointer of the ancestor"))
                .arg(natural_arg()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("print", sub)) => handle_print_command(sub),
        Some(("find", sub)) => handle_find_command(sub),
        Some(("ancestors", sub)) => handle_ancestors_command(sub),
        Some(("path", sub)) => handle_path_command(sub),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "gedcom=warn".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the GEDCOM file")
        .required(true)
        .index(1)
}

fn pointer_arg(name: &'static str, index: usize, help: &'static str) -> Arg {
    Arg::new(name).help(help).required(true).index(index)
}

fn natural_arg() -> Arg {
    Arg::new("natural")
        .long("natural")
        .action(ArgAction::SetTrue)
        .help("Follow only natural (birth) parent links")
}

fn arg<'m>(matches: &'m ArgMatches, name: &str) -> &'m str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Layer the config file and command-line flags over the defaults
fn load_spec(matches: &ArgMatches) -> Result<ProcessingSpec, Box<dyn Error>> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("lenient") {
        loader = loader.set_override("parsing.strict", false)?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        format.parse::<OutputFormat>()?;
        loader = loader.set_override("output.format", format.as_str())?;
    }
    Ok(ProcessingSpec::from_config(&loader.build()?))
}

fn load_document(matches: &ArgMatches) -> Result<Gedcom, Box<dyn Error>> {
    let spec = load_spec(matches)?;
    Ok(parse_file(arg(matches, "path"), spec.options)?)
}

fn ancestor_type(matches: &ArgMatches) -> AncestorType {
    if matches.get_flag("natural") {
        AncestorType::Natural
    } else {
        AncestorType::All
    }
}

fn lookup(doc: &Gedcom, pointer: &str) -> Result<ElementId, Box<dyn Error>> {
    doc.find(pointer)
        .ok_or_else(|| format!("no record with pointer {}", pointer).into())
}

fn describe(doc: &Gedcom, id: ElementId) -> String {
    let pointer = doc.element(id).pointer();
    match doc.individual(id) {
        Ok(person) => {
            let (given, surname) = person.name();
            format!("{}\t{} {}", pointer, given, surname).trim_end().to_string()
        }
        Err(_) => pointer.to_string(),
    }
}

/// Handle the print command
fn handle_print_command(matches: &ArgMatches) -> CliResult {
    let spec = load_spec(matches)?;
    print!("{}", process_file(arg(matches, "path"), &spec)?);
    Ok(())
}

/// Handle the find command
fn handle_find_command(matches: &ArgMatches) -> CliResult {
    let doc = load_document(matches)?;
    let criteria = arg(matches, "criteria");
    for id in doc.individuals() {
        if doc.criteria_match(id, criteria)? {
            println!("{}", describe(&doc, id));
        }
    }
    Ok(())
}

/// Handle the ancestors command
fn handle_ancestors_command(matches: &ArgMatches) -> CliResult {
    let doc = load_document(matches)?;
    let individual = lookup(&doc, arg(matches, "pointer"))?;
    for id in doc.get_ancestors(individual, ancestor_type(matches))? {
        println!("{}", describe(&doc, id));
    }
    Ok(())
}

/// Handle the path command
fn handle_path_command(matches: &ArgMatches) -> CliResult {
    let doc = load_document(matches)?;
    let from = lookup(&doc, arg(matches, "from"))?;
    let to = lookup(&doc, arg(matches, "to"))?;
    match doc.find_path_to_ancestor(from, to, ancestor_type(matches))? {
        Some(path) => {
            for id in path {
                println!("{}", describe(&doc, id));
            }
            Ok(())
        }
        None => Err(format!(
            "{} is not an ancestor of {}",
            arg(matches, "to"),
            arg(matches, "from")
        )
        .into()),
    }
}
