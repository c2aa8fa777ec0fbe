//! menukit CLI - interactive demo of the menu engine
//!
//! Usage: menukit <COMMAND>
//!
//! Commands:
//!   demo     Browse a sample model catalog
//!   confirm  Ask a yes/no question
//!   config   Show the effective engine configuration

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use menukit::menu::{MenuItem, MenuOptions, MenuPage, Navigator, Step};
use menukit::ui::terminal::{detect_capabilities, install_interrupt_handler, INTERRUPT_EXIT_CODE};
use menukit::{EngineConfig, MenuEngine, MenuError, RepaintStrategy};

/// menukit - keyboard-driven terminal menus
#[derive(Parser, Debug)]
#[command(name = "menukit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of the user config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse a sample model catalog
    Demo {
        /// Pick several quantizations at once
        #[arg(long)]
        multi: bool,

        /// Repaint strategy (auto, incremental, full)
        #[arg(long, value_parser = parse_repaint)]
        repaint: Option<RepaintStrategy>,

        /// No color, ASCII glyphs
        #[arg(long)]
        plain: bool,
    },

    /// Ask a yes/no question
    Confirm {
        question: String,

        /// Start with "No" highlighted
        #[arg(long)]
        default_no: bool,
    },

    /// Show the effective engine configuration
    Config,
}

fn parse_repaint(value: &str) -> std::result::Result<RepaintStrategy, String> {
    RepaintStrategy::parse(value).ok_or_else(|| {
        format!("unknown repaint strategy '{value}' (expected auto, incremental or full)")
    })
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "menukit=warn",
        1 => "menukit=info",
        2 => "menukit=debug",
        _ => "menukit=trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = install_interrupt_handler() {
        tracing::warn!("could not install Ctrl-C handler: {e}");
    }

    let config = load_config(cli.config.as_deref())?;
    let result = match cli.command {
        Commands::Demo {
            multi,
            repaint,
            plain,
        } => cmd_demo(config, multi, repaint, plain, cli.json),
        Commands::Confirm {
            question,
            default_no,
        } => cmd_confirm(config, &question, !default_no, cli.json),
        Commands::Config => cmd_config(&config, cli.json),
    };

    match result {
        Err(e) if e.downcast_ref::<MenuError>().is_some_and(MenuError::is_interrupt) => {
            std::process::exit(INTERRUPT_EXIT_CODE)
        }
        other => other,
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            let (config, warnings) = EngineConfig::load_with_warnings(path)?;
            for w in &warnings {
                let line = w.line.map(|l| format!(":{l}")).unwrap_or_default();
                match &w.suggestion {
                    Some(s) => eprintln!(
                        "warning: unknown key '{}' in {}{line} (did you mean '{s}'?)",
                        w.key,
                        w.file.display()
                    ),
                    None => {
                        eprintln!("warning: unknown key '{}' in {}{line}", w.key, w.file.display())
                    }
                }
            }
            config.with_env_overrides()
        }
        None => EngineConfig::load_or_default(),
    };

    let caps = detect_capabilities();
    config.color &= caps.color;
    config.unicode &= caps.unicode;
    Ok(config)
}

#[derive(Debug, Clone, Serialize)]
struct Outcome {
    action: &'static str,
    items: Vec<String>,
}

impl Outcome {
    fn download(items: Vec<String>) -> Self {
        Self {
            action: "download",
            items,
        }
    }
}

const CATALOG: &[(&str, &str, &str, &[&str])] = &[
    (
        "qwen2.5-7b",
        "Qwen2.5 7B Instruct",
        "General purpose chat model, 7.6B parameters.",
        &["Q4_K_M", "Q5_K_M", "Q8_0"],
    ),
    (
        "llama3.1-8b",
        "Llama 3.1 8B Instruct",
        "Meta's 8B instruction-tuned model.",
        &["Q4_K_M", "Q8_0"],
    ),
    (
        "phi3-mini",
        "Phi-3 Mini 4K",
        "Small model for low-memory machines.",
        &["Q4_K_M"],
    ),
    (
        "mistral-7b",
        "Mistral 7B Instruct v0.3",
        "Dense 7B model with sliding-window attention.",
        &["Q4_K_M", "Q6_K"],
    ),
];

fn catalog_items(width: usize) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = CATALOG
        .iter()
        .map(|(id, name, about, quants)| {
            let children = quants
                .iter()
                .map(|q| {
                    MenuItem::leaf(format!("{id}:{q}"), *q)
                        .with_description(format!("{name}, {q} quantization"))
                })
                .collect();
            MenuItem::submenu(*id, *name, children).with_description(*about)
        })
        .collect();

    items.push(MenuItem::separator("", width, "-"));
    items.push(MenuItem::leaf("settings", "Settings").with_description("Display settings"));
    items.push(MenuItem::leaf("quit", "Quit"));
    items
}

fn settings_page(config: &EngineConfig) -> MenuPage<Outcome> {
    let repaint = format!("{:?}", config.repaint).to_lowercase();
    let glyphs = if config.unicode { "unicode" } else { "ascii" };
    MenuPage::new(
        "Settings",
        vec![
            MenuItem::static_row(format!("Repaint: {repaint}")),
            MenuItem::static_row(format!("Glyphs: {glyphs}")),
            MenuItem::separator("", 40, "-"),
            MenuItem::leaf("back", "Back"),
        ],
    )
    .options(MenuOptions::new().info("Values come from the config file and MENUKIT_* variables."))
    .action("back", || Ok(Step::Back))
}

fn catalog_page(config: &EngineConfig, multi: bool) -> MenuPage<Outcome> {
    let settings_config = config.clone();
    let mut page = MenuPage::new("Model catalog", catalog_items(40))
        .options(
            MenuOptions::new()
                .multi_select(multi)
                .menu_id("catalog")
                .info("Choose a model and quantization to download."),
        )
        .action("settings", move || Ok(Step::Open(settings_page(&settings_config))))
        .action("quit", || Ok(Step::Back));

    for (id, _, _, quants) in CATALOG {
        for q in quants.iter() {
            let item = format!("{id}:{q}");
            let key = item.clone();
            page = page.action(&key, move || Ok(Step::Done(Outcome::download(vec![item.clone()]))));
        }
    }

    page.on_confirm_many(|items| {
        // only quantization rows name something downloadable
        let ids = items
            .iter()
            .map(|i| i.id().to_string())
            .filter(|id| id.contains(':'))
            .collect();
        Ok(Step::Done(Outcome::download(ids)))
    })
}

fn cmd_demo(
    mut config: EngineConfig,
    multi: bool,
    repaint: Option<RepaintStrategy>,
    plain: bool,
    json: bool,
) -> Result<()> {
    if let Some(repaint) = repaint {
        config.repaint = repaint;
    }
    if plain {
        config.color = false;
        config.unicode = false;
    }

    let mut navigator = Navigator::new(catalog_page(&config, multi), config.max_depth);
    let mut engine = MenuEngine::stdout(config);
    let outcome = navigator.run(&mut engine)?;

    let outcome = match outcome {
        Some(outcome) if !outcome.items.is_empty() && !json => {
            let question = format!("Download {} item(s)?", outcome.items.len());
            if engine.confirm(&question, true)? {
                Some(outcome)
            } else {
                None
            }
        }
        other => other,
    };

    if json {
        println!("{}", serde_json::to_string(&outcome)?);
        return Ok(());
    }

    match outcome {
        Some(outcome) => {
            println!();
            for item in &outcome.items {
                println!("✓ {} {item}", outcome.action);
            }
            engine.wait_for_any_key("Press any key to exit...")?;
        }
        None => println!("\nNothing selected."),
    }
    Ok(())
}

fn cmd_confirm(config: EngineConfig, question: &str, default_yes: bool, json: bool) -> Result<()> {
    let mut engine = MenuEngine::stdout(config);
    let answer = engine.confirm(question, default_yes)?;
    if json {
        println!("{}", serde_json::json!({ "question": question, "answer": answer }));
    } else {
        println!("{}", if answer { "yes" } else { "no" });
    }
    Ok(())
}

fn cmd_config(config: &EngineConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    match menukit::config::user_config_path() {
        Some(path) => println!("# user config: {}", path.display()),
        None => println!("# user config: unavailable"),
    }
    println!("[menu]");
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
