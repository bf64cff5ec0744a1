use anyhow::{Context, Result};
use clap::Parser;
use libromanian::{hyphenate, Engine, PartOfSpeech, RomanianRules};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::str::FromStr;

/// Romanian morphological analyzer.
#[derive(Debug, Parser)]
#[command(name = "libromanian", about = "Romanian morphological analyzer")]
struct Args {
    /// Word to analyze; reads `word pos` lines interactively when
    /// omitted.
    word: Option<String>,

    /// Part of speech: n(oun) or v(erb).
    #[arg(short, long, default_value = "noun")]
    pos: String,

    /// Emit decompositions as JSON.
    #[arg(long)]
    json: bool,

    /// Print syllable boundaries instead of decompositions.
    #[arg(long)]
    syllables: bool,

    /// TOML rule file replacing the built-in dataset.
    #[arg(long)]
    rules: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let rules = match &args.rules {
        Some(path) => {
            let rules = RomanianRules::load_toml(path)
                .with_context(|| format!("failed to load rules from {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded external rule file");
            rules
        }
        None => RomanianRules::new(),
    };
    let engine = Engine::new(rules);

    if let Some(word) = &args.word {
        if args.syllables {
            println!("{}", hyphenate(word));
            return Ok(());
        }
        let pos = PartOfSpeech::from_str(&args.pos)?;
        report(&engine, word, pos, args.json)
    } else {
        interactive(&engine, args.json)
    }
}

fn report(engine: &Engine<RomanianRules>, word: &str, pos: PartOfSpeech, json: bool) -> Result<()> {
    let decompositions = engine.decompose(word, pos)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decompositions)?);
        return Ok(());
    }

    println!("Possible decompositions for '{}':", word);
    for (i, decomposition) in decompositions.iter().enumerate() {
        println!("Decomposition {}:", i + 1);
        for morpheme in decomposition.morphemes() {
            println!(
                "  {}: {} - {}",
                morpheme.surface,
                morpheme.category(),
                morpheme.meaning()
            );
        }
    }
    Ok(())
}

fn interactive(engine: &Engine<RomanianRules>, json: bool) -> Result<()> {
    println!("Type `word pos` (pos: n or v), e.g. `lucrător n`.");
    println!("Press Ctrl+C to exit.");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            continue;
        };
        let pos = match parts.next().unwrap_or("n").parse::<PartOfSpeech>() {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        if let Err(e) = report(engine, word, pos, json) {
            eprintln!("{}", e);
        }
        println!();
    }
    Ok(())
}
