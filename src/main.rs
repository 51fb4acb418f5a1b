mod dataset;
mod fetcher;
mod prompt;
mod render;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::{Parser, Subcommand};

use dataset::AnimalRecord;
use fetcher::{AnimalsApi, FetchOutcome};
use prompt::Selection;

#[derive(Parser)]
#[command(name = "animal_pages", about = "Animal facts HTML page generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the page from the local dataset, choosing animals interactively
    Generate {
        /// Dataset file (JSON array of animal records)
        #[arg(long, default_value = "data/animals_data.json")]
        data: PathBuf,
        /// Page template containing the content placeholder
        #[arg(long, default_value = "templates/animals_template.html")]
        template: PathBuf,
        /// Where the finished page is written
        #[arg(long, default_value = "output/animals.html")]
        output: PathBuf,
    },
    /// Build the page from the animals API (requires ANIMALS_API_KEY)
    Fetch {
        /// Animal name to look up (omit to be prompted)
        name: Option<String>,
        #[arg(long, default_value = "templates/animals_template.html")]
        template: PathBuf,
        #[arg(long, default_value = "output/animals.html")]
        output: PathBuf,
    },
    /// List the distinct skin types in the local dataset
    Skins {
        #[arg(long, default_value = "data/animals_data.json")]
        data: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            data,
            template,
            output,
        } => run_generate(&data, &template, &output),
        Commands::Fetch {
            name,
            template,
            output,
        } => run_fetch(name, &template, &output).await,
        Commands::Skins { data } => {
            let animals = dataset::load_dataset(&data)?;
            let skins = dataset::skin_types(&animals)?;

            println!("{:<16} | {:>5}", "Skin type", "Count");
            println!("{}", "-".repeat(24));
            for skin in &skins {
                let count = animals
                    .iter()
                    .filter(|a| a.characteristics.skin_type.as_deref() == Some(skin.as_str()))
                    .count();
                println!("{:<16} | {:>5}", skin, count);
            }
            println!("\n{} skin types across {} animals", skins.len(), animals.len());
            Ok(())
        }
    }
}

/// Interactive local pipeline: load → select → render → write, repeated
/// until the user declines to continue.
fn run_generate(data: &Path, template: &Path, output: &Path) -> anyhow::Result<()> {
    loop {
        let animals = dataset::load_dataset(data)?;
        let selected = select_animals(&animals)?;
        let template_text = render::page::load_template(template)?;
        let html = render::render_page(&selected, &template_text);
        render::page::write_page(output, &html)?;
        println!("Page has been created at {}", output.display());

        if !ask_continue()? {
            println!("\nGoodbye and see you next time!");
            return Ok(());
        }
    }
}

fn select_animals(animals: &[AnimalRecord]) -> anyhow::Result<Vec<AnimalRecord>> {
    let selection = prompt::ask(
        "\nDo you want all animals or select by skin type? (all/skin): ",
        "Please enter either 'all' or 'skin'.",
        prompt::parse_selection,
    )?;

    match selection {
        Selection::All => Ok(animals.to_vec()),
        Selection::BySkin => {
            let skins = dataset::skin_types(animals)?;
            println!("\nHere are all the available skin types:");
            for skin in &skins {
                println!(">>> {}", skin);
            }
            let choice = prompt::ask("\nEnter a skin type: ", "Invalid skin type", |input| {
                prompt::resolve_skin(input, &skins)
            })?;
            dataset::filter_by_skin(animals, &choice)
        }
    }
}

/// Remote pipeline: one shot when a name is given, otherwise the same
/// prompt-and-continue loop as `generate`.
async fn run_fetch(name: Option<String>, template: &Path, output: &Path) -> anyhow::Result<()> {
    let api_key = env::var("ANIMALS_API_KEY")
        .map_err(|_| anyhow!("ANIMALS_API_KEY environment variable must be set"))?;
    let api = AnimalsApi::new(api_key);

    match name {
        Some(name) => fetch_and_build(&api, &name, template, output).await,
        None => loop {
            let name = prompt::ask(
                "\nEnter a name of an animal: ",
                "Please enter a name.",
                prompt::parse_name,
            )?;
            fetch_and_build(&api, &name, template, output).await?;

            if !ask_continue()? {
                println!("\nGoodbye and see you next time!");
                return Ok(());
            }
        },
    }
}

async fn fetch_and_build(
    api: &AnimalsApi,
    name: &str,
    template: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let template_text = render::page::load_template(template)?;
    let html = match api.fetch(name).await? {
        Some(FetchOutcome::Records(animals)) => render::render_page(&animals, &template_text),
        Some(FetchOutcome::NoSuchAnimal(message)) => {
            render::page::inject(&template_text, &message)
        }
        // API failure already logged; keep whatever page exists
        None => {
            println!("No data was loaded for '{}'.", name);
            return Ok(());
        }
    };
    render::page::write_page(output, &html)?;
    println!("Page has been created at {}", output.display());
    Ok(())
}

fn ask_continue() -> anyhow::Result<bool> {
    prompt::ask(
        "\nDo you want to continue? (y/n): ",
        "Please enter 'y' or 'n'.",
        prompt::parse_confirm,
    )
}
