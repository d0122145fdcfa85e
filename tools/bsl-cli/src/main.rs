use anyhow::{Context, Result};
use bsl_lexicon::{compile_atlas, ArchivedLexicon, Lexicon, SignDictionary};
use bsl_protocol::SignAtlas;
use bsl_translate::{to_json, translation_stats, Translator};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info, LevelFilter};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::{Path, PathBuf};

mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(author, version, about = "Translate English sentences into BSL gloss order")]
struct Cli {
    /// JSON settings file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate one sentence
    Translate {
        sentence: String,

        /// JSON or rkyv atlas (defaults to the bundled one)
        #[arg(short, long, value_name = "FILE")]
        atlas: Option<PathBuf>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Move trailing topics to the front before word ordering
        #[arg(long)]
        topic_fronting: bool,
    },
    /// Compile a JSON atlas to the rkyv binary format
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// List every gloss, grouped by category
    Glossary {
        #[arg(short, long, value_name = "FILE")]
        atlas: Option<PathBuf>,
    },
    /// Print random glosses
    Sample {
        #[arg(short, default_value_t = 5)]
        n: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_name = "FILE")]
        atlas: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.into())
        .parse_default_env()
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    debug!("settings: {:?}", settings);

    match cli.command {
        Command::Translate { sentence, atlas, json, topic_fronting } => {
            let dictionary = open_dictionary(atlas.as_deref().or(settings.atlas.as_deref()), &settings)?;
            let mut config = settings.translator.clone();
            config.topic_fronting |= topic_fronting;

            let translator = Translator::with_config(dictionary, config);
            let result = translator.translate(&sentence);

            if json {
                println!("{}", to_json(&result)?);
            } else {
                print_translation(&result);
            }
        }
        Command::Compile { input, output } => compile(&input, &output)?,
        Command::Glossary { atlas } => {
            let dictionary = open_dictionary(atlas.as_deref().or(settings.atlas.as_deref()), &settings)?;
            println!("{} signs available.", dictionary.count());
            for (category, glosses) in dictionary.glosses_by_category() {
                println!("\n{} ({})", category, glosses.len());
                println!("  {}", glosses.join(" "));
            }
        }
        Command::Sample { n, seed, atlas } => {
            let dictionary = open_dictionary(atlas.as_deref().or(settings.atlas.as_deref()), &settings)?;
            let sample = match seed {
                Some(seed) => dictionary.random_sample(n, &mut ChaCha8Rng::seed_from_u64(seed)),
                None => dictionary.random_sample(n, &mut rand::thread_rng()),
            };
            println!("{}", sample.join(" "));
        }
    }

    Ok(())
}

/// `.json` files are parsed, anything else is read as an rkyv archive.
fn open_dictionary(path: Option<&Path>, settings: &Settings) -> Result<Box<dyn SignDictionary>> {
    let search_base = settings.search_base.clone();

    let dictionary: Box<dyn SignDictionary> = match path {
        None => {
            let lexicon = Lexicon::bundled()?;
            Box::new(match search_base {
                Some(base) => lexicon.with_search_base(base),
                None => lexicon,
            })
        }
        Some(path) if path.extension().is_some_and(|ext| ext == "json") => {
            let lexicon = Lexicon::open(path)?;
            Box::new(match search_base {
                Some(base) => lexicon.with_search_base(base),
                None => lexicon,
            })
        }
        Some(path) => {
            let lexicon = ArchivedLexicon::open(path)?;
            Box::new(match search_base {
                Some(base) => lexicon.with_search_base(base),
                None => lexicon,
            })
        }
    };

    info!("dictionary ready: {} signs", dictionary.count());
    Ok(dictionary)
}

fn compile(input: &Path, output: &Path) -> Result<()> {
    println!("📖 Reading JSON from {:?}...", input);
    let input_data = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;

    let atlas: SignAtlas = serde_json::from_str(&input_data)?;
    println!("⚙️  Compiling atlas version {} with {} signs...", atlas.version, atlas.entries.len());

    let bytes = compile_atlas(&atlas)?;
    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;

    println!("✅ Success! Binary written to {:?}", output);
    Ok(())
}

fn print_translation(result: &bsl_protocol::TranslationResult) {
    if result.is_empty() {
        println!("(no translatable content)");
        return;
    }

    let stats = translation_stats(result);
    println!("{}", result.gloss_string);
    println!("question: {}", result.question_type);
    println!("rule:     {}", result.explanation);
    println!(
        "coverage: {}/{} signs known ({}%)",
        stats.known_glosses, stats.total_glosses, stats.coverage_percent
    );

    for g in &result.gloss_sequence {
        let link = g
            .sign_entry
            .as_ref()
            .and_then(|e| e.signbsl_url.as_deref())
            .unwrap_or(&g.search_url);
        let marker = if g.is_unknown { "?" } else { " " };
        println!("  {marker} {:<12} {:<12} {}", g.gloss.as_str(), g.original_word, link);
    }
}
