use clap::{Parser, Subcommand};
use food_generator::animation::{fetch_animation, AnimationSummary, ANIMATION_FAILED};
use food_generator::{
    controller_from_config, Action, AppConfig, Cuisine, DishSelection, GeneratorError, Screen,
};
use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "food-generator")]
#[command(about = "Discover random meals or choose based on cuisines!")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print recipes and menus as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Skip the title banner and animation line
    #[arg(long, global = true)]
    no_banner: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random meal
    Random,

    /// List the cuisines that can be browsed
    Cuisines,

    /// Pick a cuisine, then a dish, and show its recipe
    Browse {
        /// Cuisine to browse (prompted for when omitted)
        #[arg(short, long)]
        cuisine: Option<Cuisine>,

        /// Recipe id of a dish from the cuisine's results
        #[arg(short, long, conflicts_with = "pick")]
        dish: Option<u64>,

        /// 1-based position of the dish in the menu (prompted for when omitted)
        #[arg(short, long)]
        pick: Option<usize>,
    },

    /// Show the full recipe for an id
    Show {
        /// Spoonacular recipe id
        id: u64,
    },

    /// Fetch the decorative animation and print a summary
    Animation,
}

impl Commands {
    /// Listing cuisines works offline, so the banner skips the animation
    fn wants_animation(&self) -> bool {
        !matches!(self, Commands::Cuisines)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    debug!("Using recipe API at {}", config.base_url);

    let show_banner = !cli.json && !cli.no_banner;
    let banner_animation = config.animation.enabled && cli.command.wants_animation();
    if show_banner {
        print_banner(&config, banner_animation).await?;
    }

    match cli.command {
        Commands::Cuisines => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&Cuisine::ALL)?);
            } else {
                for cuisine in Cuisine::ALL {
                    println!("{}", cuisine);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Animation => {
            // The banner may already have printed the summary
            if !show_banner || !banner_animation {
                println!("{}", animation_line(&config).await?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Random => {
            let controller = controller_from_config(&config)?;
            let screen = controller.handle(Action::RandomMeal).await;
            print_screen(&screen, cli.json)
        }
        Commands::Show { id } => {
            let controller = controller_from_config(&config)?;
            let screen = controller.handle(Action::ChooseDish(id)).await;
            print_screen(&screen, cli.json)
        }
        Commands::Browse {
            cuisine,
            dish,
            pick,
        } => {
            let controller = controller_from_config(&config)?;

            let cuisine = match cuisine {
                Some(cuisine) => cuisine,
                None => {
                    let cuisines = controller.cuisines();
                    for (i, cuisine) in cuisines.iter().enumerate() {
                        println!("  {}. {}", i + 1, cuisine);
                    }
                    match prompt_choice("Choose a cuisine", cuisines.len())? {
                        Some(choice) => cuisines[choice - 1],
                        None => return Ok(ExitCode::SUCCESS),
                    }
                }
            };

            let menu = match controller.handle(Action::ChooseCuisine(cuisine)).await {
                Screen::Dishes(menu) => menu,
                other => return print_screen(&other, cli.json),
            };

            let selection = match (dish, pick) {
                (Some(id), _) => DishSelection::Id(id),
                (None, Some(choice)) => DishSelection::Position(choice),
                (None, None) if menu.is_empty() || cli.json => {
                    return print_screen(&Screen::Dishes(menu), cli.json);
                }
                (None, None) => {
                    print!("{}", menu);
                    match prompt_choice("Choose a dish", menu.options.len())? {
                        Some(choice) => DishSelection::Position(choice),
                        None => return Ok(ExitCode::SUCCESS),
                    }
                }
            };

            let Some(option) = menu.select(selection) else {
                match selection {
                    DishSelection::Id(id) => {
                        eprintln!("Dish {} is not among the {} results", id, menu.cuisine)
                    }
                    DishSelection::Position(choice) => eprintln!(
                        "No dish at position {}; {}",
                        choice,
                        menu_range(menu.options.len())
                    ),
                }
                return Ok(ExitCode::FAILURE);
            };

            let screen = controller.handle(Action::ChooseDish(option.id)).await;
            print_screen(&screen, cli.json)
        }
    }
}

async fn print_banner(config: &AppConfig, with_animation: bool) -> Result<(), GeneratorError> {
    println!("Food Generator");
    println!("Discover random meals or choose based on cuisines!");
    if with_animation {
        println!("{}", animation_line(config).await?);
    }
    println!();
    Ok(())
}

async fn animation_line(config: &AppConfig) -> Result<String, GeneratorError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    Ok(match fetch_animation(&client, &config.animation.url).await {
        Some(value) => AnimationSummary::from_value(&value).to_string(),
        None => ANIMATION_FAILED.to_string(),
    })
}

fn print_screen(screen: &Screen, json: bool) -> Result<ExitCode, Box<dyn Error>> {
    match screen {
        Screen::Recipe(view) if json => println!("{}", serde_json::to_string_pretty(view)?),
        Screen::Recipe(view) => print!("{}", view),
        Screen::Dishes(menu) if json => println!("{}", serde_json::to_string_pretty(menu)?),
        Screen::Dishes(menu) => print!("{}", menu),
        Screen::Notice(message) => {
            eprintln!("{}", message);
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn menu_range(len: usize) -> String {
    format!("choose 1-{}", len)
}

/// Ask for a 1-based menu position. Empty input or end of input cancels.
fn prompt_choice(prompt: &str, len: usize) -> Result<Option<usize>, GeneratorError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} [1-{}]: ", prompt, len);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let input = line.trim();
        if input.is_empty() {
            return Ok(None);
        }

        match input.parse::<usize>() {
            Ok(choice) if (1..=len).contains(&choice) => return Ok(Some(choice)),
            _ => eprintln!("Please enter a number, {}", menu_range(len)),
        }
    }
}
