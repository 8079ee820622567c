// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::borrow::Cow;
use std::env;

use anyhow::{bail, Context, Result};
use scalebook::music::note::enharmonic_group;
use scalebook::music::{interval_semitones, note_pitch_class};
use scalebook::{
    normalize_interval, normalize_note_name, Catalog, LabelTheme, NoteCollection, SearchOptions,
    TransformOptions,
};
use tracing::Level;

fn print_usage() {
    println!("scalebook - Scale and chord reference");
    println!();
    println!("Usage: scalebook [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --normalize <INTERVAL>...      Normalize interval spellings (b3, M7, #11)");
    println!("  --note <NOTE>...               Normalize note names and show their pitch class");
    println!("  --notes <ROOT> <KEY> [--chromatic]");
    println!("                                 Spell a catalog collection over a root");
    println!("  --labels <KEY>                 Show every label theme for a collection");
    println!("  --search <QUERY> [--type T] [--intervals a,b,...]");
    println!("                                 Search the catalog");
    println!("  --list                         List catalog keys and names");
    println!("  --help                         Show this help message");
    println!();
    println!("Options:");
    println!("  --catalog <FILE>               Extend the catalog with a YAML or TOML file");
    println!("  --verbose                      Log at debug level");
}

/// Remove `flag` and its value from the argument list, returning the value
fn take_option(args: &mut Vec<String>, flag: &str) -> Result<Option<String>> {
    let Some(position) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if position + 1 >= args.len() {
        bail!("{} requires a value", flag);
    }
    let value = args.remove(position + 1);
    args.remove(position);
    Ok(Some(value))
}

/// Remove a boolean flag from the argument list
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    match args.iter().position(|a| a == flag) {
        Some(position) => {
            args.remove(position);
            true
        }
        None => false,
    }
}

fn collection<'a>(catalog: &'a Catalog, key: &str) -> Result<&'a NoteCollection> {
    catalog
        .get(key)
        .with_context(|| format!("Unknown collection: {} (use --list to see keys)", key))
}

fn normalize_intervals(inputs: &[String]) {
    for input in inputs {
        match normalize_interval(input) {
            Ok(token) => {
                let semitones = interval_semitones(token).unwrap_or_default();
                println!("{:<8} -> {:<4} ({} semitones)", input, token, semitones);
            }
            Err(e) => println!("{:<8} -> {}", input, e),
        }
    }
}

fn normalize_notes(inputs: &[String]) {
    for input in inputs {
        match normalize_note_name(input) {
            Ok(name) => {
                let pitch_class = note_pitch_class(name).unwrap_or_default();
                let group = enharmonic_group(pitch_class).join(" ");
                println!("{:<6} -> {:<4} pc {:>2}  [{}]", input, name, pitch_class, group);
            }
            Err(e) => println!("{:<6} -> {}", input, e),
        }
    }
}

fn print_notes(catalog: &Catalog, root: &str, key: &str, chromatic: bool) -> Result<()> {
    let collection = collection(catalog, key)?;
    let options = if chromatic {
        TransformOptions::new().chromatic().similar_to(key)
    } else {
        TransformOptions::new()
    };

    let names = catalog.resolve(root, &collection.intervals, &options);
    if names.is_empty() {
        bail!("Invalid root note: {}", root);
    }

    println!("{} {}", root, collection.name);
    let intervals: Vec<Cow<str>> = if chromatic {
        catalog
            .transform(&collection.intervals, &options)
            .into_iter()
            .map(Cow::Owned)
            .collect()
    } else {
        collection.intervals.iter().map(|s| Cow::Borrowed(s.as_str())).collect()
    };
    for (interval, name) in intervals.iter().zip(&names) {
        println!("  {:<4} {}", interval, name);
    }
    Ok(())
}

fn print_labels(catalog: &Catalog, key: &str) -> Result<()> {
    let collection = collection(catalog, key)?;

    println!("{} ({})", collection.name, collection.key);
    if !collection.aliases.is_empty() {
        println!("  aka:     {}", collection.aliases.join(", "));
    }
    println!("  pattern: {}", collection.step_pattern());
    println!();

    print!("{:<14}", "");
    for semitones in &collection.integers {
        print!("{:<8}", semitones);
    }
    println!();
    for theme in LabelTheme::ALL {
        print!("{:<14}", theme.name());
        for semitones in &collection.integers {
            let pc = semitones.rem_euclid(12) as u8;
            print!("{:<8}", collection.label(theme, pc).unwrap_or("-"));
        }
        println!();
    }
    Ok(())
}

fn print_search(catalog: &Catalog, mut args: Vec<String>) -> Result<()> {
    let collection_type = take_option(&mut args, "--type")?;
    let intervals = take_option(&mut args, "--intervals")?;

    let mut options = SearchOptions::new();
    if !args.is_empty() {
        options = options.with_query(args.join(" "));
    }
    if let Some(t) = collection_type {
        options = options.with_type(t);
    }
    if let Some(list) = intervals {
        let list: Vec<&str> = list.split(',').map(str::trim).collect();
        options = options.with_intervals(&list);
    }

    let results = catalog.search(&options);
    if results.is_empty() {
        println!("No matches");
    }
    for collection in results {
        println!(
            "{:<28} {:<28} {}",
            collection.key,
            collection.name,
            collection.intervals.join(" ")
        );
    }
    Ok(())
}

fn print_list(catalog: &Catalog) {
    for collection in catalog {
        println!(
            "{:<28} {:<28} [{}]",
            collection.key,
            collection.name,
            collection.types.join(", ")
        );
    }
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = take_flag(&mut args, "--verbose");
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = take_option(&mut args, "--catalog")?;
    let extended;
    let catalog = match catalog_path {
        Some(path) => {
            extended = Catalog::with_file(&path)?;
            &extended
        }
        None => Catalog::builtin(),
    };

    if args.is_empty() {
        println!("scalebook - Scale and chord reference");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let command = args.remove(0);
    match command.as_str() {
        "--normalize" => {
            if args.is_empty() {
                eprintln!("Error: --normalize requires at least one interval");
                std::process::exit(1);
            }
            normalize_intervals(&args);
        }
        "--note" => {
            if args.is_empty() {
                eprintln!("Error: --note requires at least one note name");
                std::process::exit(1);
            }
            normalize_notes(&args);
        }
        "--notes" => {
            let chromatic = take_flag(&mut args, "--chromatic");
            if args.len() < 2 {
                eprintln!("Error: --notes requires a root note and a collection key");
                std::process::exit(1);
            }
            print_notes(catalog, &args[0], &args[1], chromatic)?;
        }
        "--labels" => {
            let Some(key) = args.first() else {
                eprintln!("Error: --labels requires a collection key");
                std::process::exit(1);
            };
            print_labels(catalog, key)?;
        }
        "--search" => {
            print_search(catalog, args)?;
        }
        "--list" => {
            print_list(catalog);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
