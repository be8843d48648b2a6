//! Command-line front end for word search puzzles.
//!
//! # Usage
//!
//! Generate a puzzle through an external generator program:
//!
//! ```sh
//! wordsearch generate --words SUN,MOON --title Sky --generator ./wordsearch-gen
//! ```
//!
//! Show a shared puzzle:
//!
//! ```sh
//! wordsearch show 'https://wordsearch.example/?g=...&w=4&h=4&e=0&s=...'
//! ```
//!
//! Play a shared puzzle, reading gestures from stdin:
//!
//! ```sh
//! printf 'press 0 0\nmove 2 0\nrelease\n' | wordsearch play '?g=...'
//! ```
//!
//! A link with words but no grid is generated first:
//!
//! ```sh
//! wordsearch show '?words=sun,moon&width=6&height=6' --generator ./wordsearch-gen
//! ```

use std::{
    io::{self, BufRead as _},
    path::PathBuf,
    process,
    sync::Arc,
};

use clap::{Args, Parser, Subcommand};
use wordsearch_app::{
    gesture::Gesture,
    orchestrator::{GestureOutcome, LinkOutcome, Orchestrator},
    render::render_session,
    settings::Settings,
};
use wordsearch_game::SelectionEvent;
use wordsearch_generator::{CommandGenerator, FixedGenerator, GridGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Base URL that share links are built on.
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Share links must be shorter than this many characters.
    #[arg(long, global = true, value_name = "LEN")]
    max_url_len: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a new puzzle with an external generator.
    Generate(GenerateArgs),
    /// Print a shared puzzle.
    Show {
        /// Share URL or query string.
        link: String,
        /// Print the share payload as JSON instead of the grid.
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        generator: LinkGeneratorArgs,
    },
    /// Solve a shared puzzle with gestures read from stdin.
    Play {
        /// Share URL or query string.
        link: String,
        #[command(flatten)]
        generator: LinkGeneratorArgs,
    },
}

/// Generator used when a link carries words but no grid.
#[derive(Debug, Args)]
struct LinkGeneratorArgs {
    /// Generator program for links that only list words.
    #[arg(long, value_name = "PROGRAM")]
    generator: Option<PathBuf>,

    /// Extra arguments passed to the generator program.
    #[arg(last = true, value_name = "ARGS")]
    generator_args: Vec<String>,
}

impl LinkGeneratorArgs {
    fn into_generator(self) -> Arc<dyn GridGenerator> {
        match self.generator {
            Some(program) => Arc::new(CommandGenerator::new(program).args(self.generator_args)),
            None => Arc::new(FixedGenerator::failing(
                "this link lists words only; pass --generator to build its grid",
            )),
        }
    }
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Words to hide, separated by commas.
    #[arg(long, value_name = "WORDS")]
    words: String,

    /// Grid width (defaults to the longest word).
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (defaults to the longest word).
    #[arg(long)]
    height: Option<usize>,

    /// Puzzle title.
    #[arg(long)]
    title: Option<String>,

    /// Generator program speaking JSON over stdin/stdout.
    #[arg(long, value_name = "PROGRAM")]
    generator: PathBuf,

    /// Extra arguments passed to the generator program.
    #[arg(last = true, value_name = "ARGS")]
    generator_args: Vec<String>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = Settings::default();
    if let Some(base_url) = cli.base_url {
        settings.share.base_url = base_url;
    }
    if let Some(max_url_len) = cli.max_url_len {
        settings.share.max_url_len = max_url_len;
    }

    match cli.command {
        Command::Generate(args) => generate(settings, args),
        Command::Show {
            link,
            json,
            generator,
        } => show(settings, &link, json, generator),
        Command::Play { link, generator } => play(settings, &link, generator),
    }
}

fn generate(settings: Settings, args: GenerateArgs) {
    let generator = CommandGenerator::new(args.generator).args(args.generator_args);
    let mut orch = Orchestrator::new(settings, Arc::new(generator));

    let ticket = match orch.create_from_words(&args.words, args.width, args.height, args.title) {
        Ok(ticket) => ticket,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    match orch.wait_generation(ticket) {
        Ok(session) => print!("{}", render_session(session)),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn open(settings: Settings, link: &str, generator: LinkGeneratorArgs) -> Orchestrator {
    let mut orch = Orchestrator::new(settings, generator.into_generator());
    match orch.open_link(link) {
        LinkOutcome::Restored => {}
        LinkOutcome::Generating(ticket) => {
            if let Err(err) = orch.wait_generation(ticket) {
                eprintln!("{err}");
                process::exit(1);
            }
        }
        LinkOutcome::Rejected(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
        LinkOutcome::Empty => {
            eprintln!("Puzzle not found or invalid.");
            process::exit(1);
        }
    }
    orch
}

fn show(settings: Settings, link: &str, json: bool, generator: LinkGeneratorArgs) {
    let orch = open(settings, link, generator);
    if !json {
        print!("{}", render_session(orch.session()));
        return;
    }
    let Some(data) = orch.share_data() else {
        eprintln!("Puzzle is too large to share.");
        process::exit(1);
    };
    match serde_json::to_string_pretty(&data) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn play(settings: Settings, link: &str, generator: LinkGeneratorArgs) {
    let mut orch = open(settings, link, generator);
    print!("{}", render_session(orch.session()));

    for (lineno, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let gesture = match line.parse::<Gesture>() {
            Ok(gesture) => gesture,
            Err(err) => {
                eprintln!("line {}: {err}", lineno + 1);
                continue;
            }
        };
        let GestureOutcome { events, .. } = match gesture {
            Gesture::Press(pos) => orch.press(pos),
            Gesture::Move(pos) => orch.move_to(pos),
            Gesture::Release => orch.release(),
            Gesture::Cancel => orch.cancel_gesture(),
        };
        for event in events {
            match event {
                SelectionEvent::WordFound { word, .. } => println!("found {word}"),
                SelectionEvent::PuzzleSolved => println!("puzzle solved!"),
            }
        }
    }

    print!("\n{}", render_session(orch.session()));
}
