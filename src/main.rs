use anyhow::Result;
use clap::{Parser, Subcommand};

use waste_tracker::cli::{handle_add, handle_categories, handle_list, handle_stats, handle_tips};
use waste_tracker::config::{paths::WastePaths, settings::Settings};
use waste_tracker::logging::init_tracing;
use waste_tracker::services::EntryStore;
use waste_tracker::storage::EntryFile;

#[derive(Parser)]
#[command(
    name = "waste",
    version,
    about = "Household waste log with per-category statistics and disposal tips",
    long_about = "Record what you throw away by category and weight, see how much \
                  each category adds up to, and get tips for reducing it."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a waste entry
    #[command(allow_negative_numbers = true)]
    Add {
        /// Category: Organic, Recyclable, Hazardous, General (or 1-4)
        category: String,
        /// Weight in kilograms
        #[arg(allow_negative_numbers = true)]
        weight: f64,
        /// Free-text description
        description: Option<String>,
    },

    /// List entries, most recent first
    #[command(alias = "ls")]
    List {
        /// Only show the N most recent entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show total weight per category
    #[command(alias = "statistics")]
    Stats,

    /// Show tips for reducing a category of waste
    Tips {
        /// Category name or number
        category: String,
    },

    /// List the waste categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = WastePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = EntryStore::open(
        EntryFile::new(paths.entries_file()).with_quarantine(settings.quarantine_corrupt_files),
    );

    if let Some(recovered) = store.recovered_corruption() {
        eprintln!("Warning: could not read saved entries ({}).", recovered.reason);
        match &recovered.quarantined_to {
            Some(moved) => eprintln!("The unreadable file was moved to {}", moved.display()),
            None => eprintln!("Starting with an empty log; the next entry will overwrite it."),
        }
    }

    match cli.command {
        Some(Commands::Add {
            category,
            weight,
            description,
        }) => {
            handle_add(&store, &category, weight, description.as_deref())?;
        }
        Some(Commands::List { limit }) => handle_list(&store, &settings, limit),
        Some(Commands::Stats) => handle_stats(&store, &settings),
        Some(Commands::Tips { category }) => handle_tips(&store, &category)?,
        Some(Commands::Categories) => handle_categories(),
        Some(Commands::Config) => {
            println!("Waste Tracker Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Entries file:   {}", paths.entries_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Date format:        {}", settings.date_format);
            println!("  Chart width:        {}", settings.chart_width);
            println!("  Quarantine corrupt: {}", settings.quarantine_corrupt_files);
            println!();
            println!("Entries recorded: {}", store.entry_count());
        }
        None => {
            println!("Waste Tracker - household waste log");
            println!();
            println!("Run 'waste --help' for usage information.");
            println!("Run 'waste add Organic 2.5 \"vegetable peels\"' to record an entry.");
        }
    }

    Ok(())
}
