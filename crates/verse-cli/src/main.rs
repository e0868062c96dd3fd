use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verse_app::App;
use verse_core::{Poem, Style};

#[derive(Parser)]
#[command(name = "verse", version, about = "Poetry prompts, form checks, and the doom scale")]
struct Cli {
    /// Data directory override (default: ~/.verse, or as configured)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a random writing prompt with an assigned style
    Prompt,

    /// Check a poem against a style's structural rules
    Validate {
        #[arg(long)]
        style: String,
        /// Read the poem from this file (stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Score a poem on the doom scale without saving it
    Score {
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Save a poem: scores it, stamps the date, prepends to the list
    Save {
        #[arg(long)]
        style: String,
        #[arg(long, default_value = "")]
        prompt: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// List saved poems, most recent first
    List,

    /// Show one saved poem in full
    Show { index: usize },

    /// Print a share token for one saved poem
    Share { index: usize },

    /// Import a shared poem from a token
    Import { token: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let app = App::open(cli.data_dir.clone())?;

    match cli.cmd {
        Command::Prompt => {
            let (prompt, style) = app.draw_prompt();
            if cli.json {
                println!("{}", serde_json::json!({ "prompt": prompt, "style": style.name() }));
            } else {
                println!("Prompt: {}", prompt);
                println!("Style: {}", style);
            }
        }
        Command::Validate { style, file } => {
            let text = read_poem(file.as_deref())?;
            let verdict = app.validate(&Style::from(style.as_str()), &text);
            if cli.json {
                println!("{}", serde_json::to_string(&verdict)?);
            } else {
                println!("{}", verdict.message);
            }
            if !verdict.valid {
                std::process::exit(1);
            }
        }
        Command::Score { file } => {
            let text = read_poem(file.as_deref())?;
            let doom = app.score(&text);
            if cli.json {
                println!("{}", serde_json::json!({ "doom": doom }));
            } else {
                println!("Doom: {}", doom);
            }
        }
        Command::Save { style, prompt, file } => {
            let text = read_poem(file.as_deref())?;
            let poem = app.save_poem(&text, Style::from(style.as_str()), &prompt)?;
            if cli.json {
                println!("{}", serde_json::to_string(&poem)?);
            } else {
                println!("Poem saved successfully!");
                println!("Style: {}  Doom: {}", poem.style, poem.doom);
            }
        }
        Command::List => {
            let poems = app.poems()?;
            if cli.json {
                println!("{}", serde_json::to_string(&poems)?);
            } else if poems.is_empty() {
                println!("No poems saved yet. Start writing!");
            } else {
                for (i, poem) in poems.iter().enumerate() {
                    println!(
                        "{:>3}. {}  [{}] doom {} ({})",
                        i,
                        title_of(poem),
                        poem.style,
                        poem.doom,
                        poem.date.format("%Y-%m-%d")
                    );
                }
            }
        }
        Command::Show { index } => {
            let poems = app.poems()?;
            let poem = poems
                .get(index)
                .with_context(|| format!("no saved poem at index {} ({} saved)", index, poems.len()))?;
            if cli.json {
                println!("{}", serde_json::to_string(poem)?);
            } else {
                println!("Style: {}", poem.style);
                if !poem.prompt.is_empty() {
                    println!("Prompt: {}", poem.prompt);
                }
                println!("Doom: {}", poem.doom);
                println!("Date: {}", poem.date.to_rfc3339());
                println!();
                println!("{}", poem.text);
            }
        }
        Command::Share { index } => {
            let token = app.share(index)?;
            if cli.json {
                println!("{}", serde_json::json!({ "token": token }));
            } else {
                println!("{}", token);
            }
        }
        Command::Import { token } => {
            let poem = app.import(&token)?;
            if cli.json {
                println!("{}", serde_json::to_string(&poem)?);
            } else {
                println!("Imported \"{}\" [{}] doom {}", title_of(&poem), poem.style, poem.doom);
            }
        }
    }

    Ok(())
}

fn read_poem(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("read poem from stdin")?;
            Ok(text)
        }
    }
}

fn title_of(poem: &Poem) -> &str {
    poem.text.lines().find(|line| !line.trim().is_empty()).unwrap_or("Untitled")
}
