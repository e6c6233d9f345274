//! # CLI Layer
//!
//! This module is **one possible UI client** for stockpad. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, the confirmation prompt)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API, renderer and configuration
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! Handlers return `Ok(false)` when the command reported an error message, so
//! the binary can exit non-zero without treating it as a crash.

use super::render::Renderer;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use stockpad::api::{
    AlwaysConfirm, CmdMessage, CmdResult, ConfigAction, Confirm, InventoryApi, MessageLevel,
    StockPaths,
};
use stockpad::config::StockConfig;
use stockpad::error::{Result, StockError};
use stockpad::model::{ItemPatch, NewCategory, NewItem, Theme};
use stockpad::store::fs_backend::FsBackend;
use stockpad::views::ItemFilter;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Overrides the data directory when `--data-dir` is not given.
const HOME_ENV: &str = "STOCKPAD_HOME";
/// Log filter directives, e.g. `STOCKPAD_LOG=stockpad=trace`.
const LOG_ENV: &str = "STOCKPAD_LOG";

struct AppContext {
    api: InventoryApi<FsBackend>,
    renderer: Renderer,
}

/// Parses arguments, runs the command and reports whether it succeeded.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Dashboard) => handle_dashboard(&ctx),
        Some(Commands::List { search, category }) => handle_list(&ctx, search, category),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Add {
            code,
            name,
            category,
            stock,
            min_stock,
            price,
            description,
        }) => {
            let mut fields = NewItem::new(code, name, category)
                .stock(stock, min_stock)
                .price(price);
            if let Some(description) = description {
                fields = fields.description(description);
            }
            handle_add(&mut ctx, fields)
        }
        Some(Commands::Update {
            id,
            code,
            name,
            category,
            stock,
            min_stock,
            price,
            description,
        }) => {
            let patch = ItemPatch {
                code,
                name,
                category,
                stock,
                min_stock,
                price,
                description,
            };
            handle_update(&mut ctx, id, patch)
        }
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::CategoryAdd {
            name,
            icon,
            description,
        }) => {
            let mut fields = NewCategory::new(name);
            if let Some(icon) = icon {
                fields = fields.icon(icon);
            }
            if let Some(description) = description {
                fields = fields.description(description);
            }
            handle_category_add(&mut ctx, fields)
        }
        Some(Commands::CategoryDelete { id, yes }) => handle_category_delete(&mut ctx, id, yes),
        Some(Commands::Report) => handle_report(&ctx),
        Some(Commands::Theme { theme }) => handle_theme(&ctx, theme),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "stockpad=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "stockpad", "stockpad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    debug!(data_dir = %data_dir.display(), "opening inventory");

    let config = StockConfig::load(&data_dir)?;
    let currency = config.currency_symbol.clone();
    let paths = StockPaths {
        data_dir: data_dir.clone(),
    };
    let api = InventoryApi::open(FsBackend::new(&data_dir), paths, config)?;

    let theme = api.theme(None)?.theme.unwrap_or_default();
    let use_color = !cli.no_color && io::stdout().is_terminal();
    let renderer = Renderer::new(theme, use_color, &currency)
        .map_err(|e| StockError::Api(format!("Template error: {}", e)))?;

    Ok(AppContext { api, renderer })
}

fn handle_dashboard(ctx: &AppContext) -> Result<bool> {
    let result = ctx.api.dashboard()?;
    if let Some(dashboard) = &result.dashboard {
        print!("{}", ctx.renderer.dashboard(dashboard));
    }
    Ok(finish(ctx, &result))
}

fn handle_list(ctx: &AppContext, search: Option<String>, category: Option<String>) -> Result<bool> {
    let filter = ItemFilter { search, category };
    let result = ctx.api.list_items(&filter)?;

    let empty_message = if filter.is_empty() {
        "No items yet. Add your first item!"
    } else {
        "No items match."
    };
    print!("{}", ctx.renderer.items(&result.listed_items, empty_message));
    Ok(finish(ctx, &result))
}

fn handle_show(ctx: &AppContext, id: u64) -> Result<bool> {
    let result = ctx.api.show_item(id)?;
    for item in &result.listed_items {
        print!("{}", ctx.renderer.item_detail(item));
    }
    Ok(finish(ctx, &result))
}

fn handle_add(ctx: &mut AppContext, fields: NewItem) -> Result<bool> {
    let result = ctx.api.add_item(fields)?;
    Ok(finish(ctx, &result))
}

fn handle_update(ctx: &mut AppContext, id: u64, patch: ItemPatch) -> Result<bool> {
    let result = ctx.api.update_item(id, patch)?;
    Ok(finish(ctx, &result))
}

fn handle_delete(ctx: &mut AppContext, id: u64, yes: bool) -> Result<bool> {
    let result = if yes {
        ctx.api.delete_item(id, &mut AlwaysConfirm)?
    } else {
        ctx.api.delete_item(id, &mut StdinConfirm)?
    };
    Ok(finish(ctx, &result))
}

fn handle_categories(ctx: &AppContext) -> Result<bool> {
    let result = ctx.api.list_categories()?;
    print!("{}", ctx.renderer.categories(&result.categories));
    Ok(finish(ctx, &result))
}

fn handle_category_add(ctx: &mut AppContext, fields: NewCategory) -> Result<bool> {
    let result = ctx.api.add_category(fields)?;
    Ok(finish(ctx, &result))
}

fn handle_category_delete(ctx: &mut AppContext, id: u64, yes: bool) -> Result<bool> {
    let result = if yes {
        ctx.api.delete_category(id, &mut AlwaysConfirm)?
    } else {
        ctx.api.delete_category(id, &mut StdinConfirm)?
    };
    Ok(finish(ctx, &result))
}

fn handle_report(ctx: &AppContext) -> Result<bool> {
    let result = ctx.api.report()?;
    if let Some(report) = &result.report {
        print!("{}", ctx.renderer.report(report));
    }
    Ok(finish(ctx, &result))
}

fn handle_theme(ctx: &AppContext, theme: Option<Theme>) -> Result<bool> {
    let setting = theme.is_some();
    let result = ctx.api.theme(theme)?;
    if !setting {
        if let Some(current) = result.theme {
            println!("{}", current);
        }
    }
    Ok(finish(ctx, &result))
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<bool> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (k, v) in config.entries() {
                println!("{} = {}", k, v);
            }
        }
    }
    Ok(finish(ctx, &result))
}

/// Prints the result's messages (errors to stderr) and reports success.
fn finish(ctx: &AppContext, result: &CmdResult) -> bool {
    let (errors, others): (Vec<&CmdMessage>, Vec<&CmdMessage>) = result
        .messages
        .iter()
        .partition(|m| m.level == MessageLevel::Error);
    if !others.is_empty() {
        print!("{}", ctx.renderer.messages(&others));
    }
    if !errors.is_empty() {
        eprint!("{}", ctx.renderer.messages(&errors));
    }
    !result.has_errors()
}

/// Asks on the terminal; anything but `y`/`yes` declines.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
