use super::render::{
    print_messages, render_config, render_filter_list, render_filter_rows, render_state_path,
};
use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use scopefilter::api::{ConfigAction, FilterApi, ScopePaths, Selection};
use scopefilter::config::ScopeConfig;
use scopefilter::error::{Result, ScopeError};
use scopefilter::model::Scope;
use scopefilter::store::fs::FileStore;
use std::path::PathBuf;

const ENV_HOME: &str = "SCOPEFILTER_HOME";
const PROJECT_DIR: &str = ".scopefilter";

struct AppContext {
    api: FilterApi<FileStore>,
    scope: Scope,
    config: ScopeConfig,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command.unwrap_or(Commands::List) {
        Commands::Init => handle_init(&mut ctx),
        Commands::List => handle_list(&ctx),
        Commands::Select { filter, option } => {
            handle_update(&mut ctx, &filter, Selection::Select(option))
        }
        Commands::Deselect { filter, option } => {
            handle_update(&mut ctx, &filter, Selection::Deselect(option))
        }
        Commands::Switch { filter, state } => {
            handle_update(&mut ctx, &filter, Selection::Switch(state.is_on()))
        }
        Commands::Range { filter, start, end } => {
            handle_update(&mut ctx, &filter, Selection::Range { start, end })
        }
        Commands::Slider { filter, value } => {
            handle_update(&mut ctx, &filter, Selection::Slider(value))
        }
        Commands::Reset { filter } => handle_reset(&mut ctx, filter.as_deref()),
        Commands::Emit { pretty } => handle_emit(&ctx, pretty),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir()?;
    let project_dir = cwd.join(PROJECT_DIR);
    let global_dir = global_data_dir()?;

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_dir,
        Scope::Global => &global_dir,
    };
    let config = ScopeConfig::load(config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        ScopeConfig::default()
    });
    tracing::debug!(?scope, dir = %config_dir.display(), "context ready");

    let store = FileStore::new(Some(project_dir.clone()), global_dir.clone()).with_config(&config);
    let paths = ScopePaths {
        project: Some(project_dir),
        global: global_dir,
    };

    Ok(AppContext {
        api: FilterApi::new(store, paths),
        scope,
        config,
        verbose: cli.verbose,
    })
}

fn global_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(ENV_HOME) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "scopefilter", "scopefilter")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ScopeError::Config("Could not determine data directory".to_string()))
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_filters(ctx.scope)?;
    print!("{}", render_filter_list(&result.filters, result.updated_at));
    print_messages(&result.messages);
    if ctx.verbose {
        print!("{}", render_state_path(&ctx.api.state_path(ctx.scope)?));
    }
    Ok(())
}

fn handle_update(ctx: &mut AppContext, filter: &str, selection: Selection) -> Result<()> {
    let result = ctx.api.update(ctx.scope, filter, selection)?;
    print_messages(&result.messages);
    print!("{}", render_filter_rows(&result.filters));
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, filter: Option<&str>) -> Result<()> {
    let result = ctx.api.reset(ctx.scope, filter)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_emit(ctx: &AppContext, pretty: bool) -> Result<()> {
    let result = ctx.api.emit(ctx.scope, pretty || ctx.config.pretty_json)?;
    if let Some(reply) = &result.reply {
        println!("{}", reply.filters_json);
        println!("{}", reply.state_json);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let showing_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(ctx.scope, action)?;
    if showing_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
