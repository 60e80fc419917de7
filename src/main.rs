//! Command-line front end for the rhyming engine.
//!
//! Loads a pronunciation dictionary and answers one query per run:
//!
//! ```text
//! rhymer --dict data/rhymedict rhymes cat bat
//! rhymer --dict data/rhymedict find cat
//! rhymer --dict data/rhymedict rhymes-sound cat S AE T
//! rhymer --dict data/rhymedict pronounce aunt
//! ```

use std::error::Error;

use clap::{App, Arg, ArgMatches, SubCommand};

use rhymer::{Rhymer, Scope};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = App::new("rhymer")
        .version("0.1.0")
        .about("Checks and finds rhymes over a phonetic dictionary")
        .arg(
            Arg::with_name("dict")
                .short("d")
                .long("dict")
                .value_name("FILE")
                .help("Pronunciation dictionary, one 'WORD PH PH ...' entry per line")
                .takes_value(true)
                .required(true),
        )
        .subcommand(
            SubCommand::with_name("pronounce")
                .about("Prints every listed pronunciation of a word")
                .arg(Arg::with_name("word").required(true)),
        )
        .subcommand(
            SubCommand::with_name("rhymes")
                .about("Checks whether two words rhyme")
                .arg(Arg::with_name("first").required(true))
                .arg(Arg::with_name("second").required(true)),
        )
        .subcommand(
            SubCommand::with_name("rhymes-sound")
                .about("Checks whether a word rhymes with a phoneme sequence")
                .arg(Arg::with_name("word").required(true))
                .arg(Arg::with_name("phonemes").required(true).multiple(true)),
        )
        .subcommand(
            SubCommand::with_name("find")
                .about("Lists every known word rhyming with a word")
                .arg(Arg::with_name("word").required(true))
                .arg(
                    Arg::with_name("exact")
                        .long("exact")
                        .help("Match whole rhyme keys only, not longer words ending in the same sound"),
                ),
        )
        .subcommand(
            SubCommand::with_name("find-sound")
                .about("Lists every known word ending in a phoneme sequence")
                .arg(Arg::with_name("phonemes").required(true).multiple(true))
                .arg(
                    Arg::with_name("exact")
                        .long("exact")
                        .help("Match whole rhyme keys only, not longer words ending in the same sound"),
                ),
        )
        .get_matches();

    let engine = Rhymer::from_file(matches.value_of("dict").unwrap())?;

    match matches.subcommand() {
        ("pronounce", Some(sub)) => pronounce(&engine, sub),
        ("rhymes", Some(sub)) => rhymes(&engine, sub),
        ("rhymes-sound", Some(sub)) => rhymes_sound(&engine, sub),
        ("find", Some(sub)) => find(&engine, sub),
        ("find-sound", Some(sub)) => find_sound(&engine, sub),
        _ => {
            eprintln!("No command given. See --help for usage.");
            std::process::exit(2);
        }
    }
    Ok(())
}

fn pronounce(engine: &Rhymer, matches: &ArgMatches) {
    let word = matches.value_of("word").unwrap();
    let variants = engine.pronounce(word);
    if variants.is_empty() {
        println!("{}: unknown", word);
        return;
    }
    for pronunciation in variants {
        println!("{} {}", word, pronunciation.join(" "));
    }
}

fn rhymes(engine: &Rhymer, matches: &ArgMatches) {
    let first = matches.value_of("first").unwrap();
    let second = matches.value_of("second").unwrap();
    println!("{}", engine.rhymes(first, second));
}

fn rhymes_sound(engine: &Rhymer, matches: &ArgMatches) {
    let word = matches.value_of("word").unwrap();
    let sound = phoneme_args(matches);
    println!("{}", engine.rhymes_with_sound(word, &sound));
}

fn find(engine: &Rhymer, matches: &ArgMatches) {
    let word = matches.value_of("word").unwrap();
    match engine.pronounce(word).first() {
        Some(primary) => print_sorted(engine.find_rhymes_in_scope(primary, scope_arg(matches))),
        None => println!("{}: unknown", word),
    }
}

fn find_sound(engine: &Rhymer, matches: &ArgMatches) {
    let sound = phoneme_args(matches);
    print_sorted(engine.find_rhymes_in_scope(&sound, scope_arg(matches)));
}

/// Collects the positional phoneme arguments, normalized to uppercase.
fn phoneme_args(matches: &ArgMatches) -> Vec<String> {
    matches
        .values_of("phonemes")
        .unwrap()
        .map(|ph| ph.to_uppercase())
        .collect()
}

fn scope_arg(matches: &ArgMatches) -> Scope {
    if matches.is_present("exact") {
        Scope::Exact
    } else {
        Scope::Broad
    }
}

fn print_sorted(words: std::collections::HashSet<String>) {
    let mut sorted: Vec<String> = words.into_iter().collect();
    sorted.sort();
    for word in sorted {
        println!("{}", word);
    }
}
