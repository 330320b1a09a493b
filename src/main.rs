use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use unicoef::{Analyzer, ContentType, ContextHints, ContextualReport, LexiconPair, UnityReport};

mod cli;
use cli::{Cli, Commands, PolarityFilter};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            text,
            file,
            json,
            no_context,
            content_type,
            genre,
            creative_license,
        } => {
            let input = read_input(text, file)?;
            let hints = build_hints(content_type, genre, creative_license);
            run_analyze(&input, json, no_context, hints.as_ref())
        }
        Commands::Markers { polarity } => {
            run_markers(polarity);
            Ok(())
        }
    }
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

fn build_hints(
    content_type: Option<ContentType>,
    genre: Option<String>,
    creative_license: bool,
) -> Option<ContextHints> {
    if content_type.is_none() && genre.is_none() && !creative_license {
        return None;
    }
    Some(ContextHints {
        content_type,
        genre,
        intent: None,
        creative_license,
    })
}

fn run_analyze(
    input: &str,
    json: bool,
    no_context: bool,
    hints: Option<&ContextHints>,
) -> Result<()> {
    let analyzer = Analyzer::default();

    if no_context {
        let report = analyzer.analyze(input);
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
        return Ok(());
    }

    let contextual = analyzer.analyze_with_context(input, hints);
    if json {
        println!("{}", serde_json::to_string_pretty(&contextual)?);
    } else {
        print_contextual(&contextual);
    }
    Ok(())
}

fn print_report(report: &UnityReport) {
    println!("--- Unity Coefficient Report ---");
    println!("Coefficient: {}", report.coefficient);
    println!("Analysis Method: {}", report.analysis_method);

    println!("\nSeparation Markers Found: {}", report.separation_hits.len());
    for (marker, count) in &report.separation_hits {
        println!("  - {marker}: {count}");
    }

    println!("\nUnity Markers Found: {}", report.unity_hits.len());
    for (marker, count) in &report.unity_hits {
        println!("  - {marker}: {count}");
    }

    println!("\nConscious Reframing:");
    println!("  {}", report.conscious_reframing.replace('\n', "\n  "));
}

fn print_contextual(contextual: &ContextualReport) {
    print_report(&contextual.report);

    println!("\n--- Context ---");
    println!("Content Type: {}", contextual.context.content_type);
    if let Some(genre) = &contextual.context.genre {
        println!("Genre: {genre}");
    }
    if let Some(intent) = &contextual.context.intent {
        println!("Intent: {intent}");
    }
    println!("Creative License: {}", contextual.context.creative_license);
    println!("Detection Confidence: {:.2}", contextual.context.confidence);
    for note in &contextual.notes {
        println!("  * {note}");
    }
}

fn run_markers(polarity: Option<PolarityFilter>) {
    let pair = LexiconPair::builtin();

    if !matches!(polarity, Some(PolarityFilter::Unity)) {
        println!("Separation markers ({}):", pair.separation().len());
        for term in pair.separation().terms() {
            println!("  {term}");
        }
    }
    if !matches!(polarity, Some(PolarityFilter::Separation)) {
        println!("Unity markers ({}):", pair.unity().len());
        for term in pair.unity().terms() {
            println!("  {term}");
        }
    }
}
