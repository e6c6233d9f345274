use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stockpad::model::Theme;

#[derive(Parser, Debug)]
#[command(name = "stockpad", bin_name = "stockpad", version)]
#[command(about = "Inventory and stock tracking from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding the inventory data (overrides STOCKPAD_HOME)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summary counters and recently added items (default)
    #[command(alias = "d")]
    Dashboard,

    /// List items
    #[command(alias = "ls")]
    List {
        /// Match item name or code (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only items in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one item in detail
    Show {
        /// Item id
        id: u64,
    },

    /// Add a new item
    #[command(alias = "new")]
    Add {
        /// Item code, e.g. ATK001
        code: String,

        /// Display name
        name: String,

        /// Name of an existing category
        category: String,

        /// Units on hand
        #[arg(long, default_value_t = 0)]
        stock: u32,

        /// Threshold at or below which the item counts as low stock
        #[arg(long, default_value_t = 0)]
        min_stock: u32,

        /// Unit price
        #[arg(long, default_value_t = 0.0)]
        price: f64,

        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Change fields of an existing item
    #[command(alias = "edit")]
    Update {
        /// Item id
        id: u64,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        stock: Option<u32>,

        #[arg(long)]
        min_stock: Option<u32>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Item id
        id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List categories with their item counts
    Categories,

    /// Add a category
    CategoryAdd {
        /// Category name
        name: String,

        /// Icon shown next to the name
        #[arg(short, long)]
        icon: Option<String>,

        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a category that no item uses
    CategoryDelete {
        /// Category id
        id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Per-category stock and value report
    Report,

    /// Show or set the color theme (light or dark)
    Theme {
        theme: Option<Theme>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (recent-limit, currency-symbol, seed-sample-data)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
