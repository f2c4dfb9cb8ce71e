//! Dispatch from parsed arguments to the API, then to the renderers.
//!
//! Every invocation is one user operation: build the context, run the
//! operation, print, then `flush()` so the state is written once and only
//! when something changed. A command that reports an error message exits
//! non-zero even though it returned `Ok`.

use super::render::{
    print_messages, render_config, render_header, render_notifications, render_page,
    render_palette, render_paths, render_records, render_sidebar, render_table, use_color,
};
use super::setup::{
    print_grouped_help, print_help_for_command, Cli, Commands, InboxCommands, ListArgs,
    MiscCommands, PageCommands, RecordCommands, SessionCommands,
};
use chrono::{Local, Utc};
use clap::Parser;
use erpdash::api::ErpApi;
use erpdash::commands::config::ConfigAction;
use erpdash::commands::CmdResult;
use erpdash::config::ErpConfig;
use erpdash::error::Result;
use erpdash::init::initialize;
use erpdash::state::CollectionKind;
use erpdash::store::fs::FileStore;
use std::process::ExitCode;
use std::time::Duration;

struct AppContext {
    api: ErpApi<FileStore>,
    config: ErpConfig,
    failed: bool,
}

impl AppContext {
    /// Prints the messages of `result` and remembers whether any was an error.
    fn report(&mut self, result: &CmdResult) {
        print_messages(&result.messages);
        self.failed |= result.has_errors();
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if cli.help {
        match &cli.command {
            None => print_grouped_help(),
            Some(command) => print_help_for_command(command.name()),
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        match command {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let recover = matches!(
        cli.command,
        Some(Commands::Records(RecordCommands::Reset))
    );
    let erp = initialize(cli.data_dir, recover)?;
    let mut ctx = AppContext {
        api: erp.api,
        config: erp.config,
        failed: false,
    };

    let result = dispatch(&mut ctx, cli.command);
    let flushed = ctx.api.flush();
    result?;
    if flushed? {
        log::debug!("State saved");
    }

    Ok(if ctx.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Session(cmd)) => match cmd {
            SessionCommands::Login { email, password } => handle_login(ctx, &email, &password),
            SessionCommands::Logout => handle_logout(ctx),
            SessionCommands::Whoami => handle_whoami(ctx),
        },
        Some(Commands::Pages(cmd)) => match cmd {
            PageCommands::Open { path, list } => handle_open(ctx, &path, list),
            PageCommands::Dashboard => handle_open(ctx, "/dashboard", ListArgs::default()),
            PageCommands::Nav => handle_nav(ctx),
            PageCommands::Palette { query } => handle_palette(ctx, &query.join(" ")),
        },
        Some(Commands::Records(cmd)) => match cmd {
            RecordCommands::List { kind, list, json } => handle_list(ctx, kind, list, json),
            RecordCommands::Show { kind, ids } => handle_show(ctx, kind, &ids),
            RecordCommands::Add { kind, json } => handle_add(ctx, kind, &json),
            RecordCommands::Update { kind, id, json } => handle_update(ctx, kind, &id, &json),
            RecordCommands::Delete { kind, ids } => handle_delete(ctx, kind, &ids),
            RecordCommands::Seed => handle_seed(ctx),
            RecordCommands::Reset => handle_reset(ctx),
        },
        Some(Commands::Inbox(cmd)) => match cmd {
            InboxCommands::Notifications { unread } => handle_notifications(ctx, unread),
            InboxCommands::Read { id, all } => handle_read(ctx, id, all),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(ctx, key, value),
            MiscCommands::Paths => handle_paths(ctx),
            // Answered before the context is built.
            MiscCommands::Help { .. } => Ok(()),
        },
        None => handle_open(ctx, "/", ListArgs::default()),
    }
}

// --- Session ---

fn handle_login(ctx: &mut AppContext, email: &str, password: &str) -> Result<()> {
    if ctx.config.login_delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(ctx.config.login_delay_ms));
    }
    let result = ctx.api.login(email, password)?;
    ctx.report(&result);
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.logout()?;
    ctx.report(&result);
    Ok(())
}

fn handle_whoami(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.whoami()?;
    if let Some(header) = &result.header {
        print!("{}", render_header(header, use_color()));
    }
    ctx.report(&result);
    Ok(())
}

// --- Pages ---

fn handle_open(ctx: &mut AppContext, path: &str, list: ListArgs) -> Result<()> {
    let options = list.into_options(ctx.config.page_size);
    let today = Local::now().date_naive();
    let result = ctx.api.open_page(path, &options, today)?;

    let color = use_color();
    if let Some(header) = &result.header {
        println!("{}", render_header(header, color));
    }
    if let Some(page) = &result.page {
        print!("{}", render_page(page, Utc::now(), color));
    }
    ctx.report(&result);
    Ok(())
}

fn handle_nav(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.sidebar()?;
    print!("{}", render_sidebar(&result.sidebar, use_color()));
    ctx.report(&result);
    Ok(())
}

fn handle_palette(ctx: &mut AppContext, query: &str) -> Result<()> {
    let result = ctx.api.palette(query)?;
    print!("{}", render_palette(&result.palette, use_color()));
    ctx.report(&result);
    Ok(())
}

// --- Records ---

fn handle_list(
    ctx: &mut AppContext,
    kind: CollectionKind,
    list: ListArgs,
    json: bool,
) -> Result<()> {
    let options = list.into_options(ctx.config.page_size);
    let result = ctx.api.list(kind, &options)?;
    if json {
        print!("{}", render_records(&result.records));
    } else if let Some(table) = &result.table {
        print!("{}", render_table(table, use_color()));
    }
    ctx.report(&result);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, kind: CollectionKind, ids: &[String]) -> Result<()> {
    let result = ctx.api.show(kind, ids)?;
    if !result.records.is_empty() {
        print!("{}", render_records(&result.records));
    }
    ctx.report(&result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, kind: CollectionKind, json: &str) -> Result<()> {
    let result = ctx.api.add(kind, json)?;
    if !result.records.is_empty() {
        print!("{}", render_records(&result.records));
    }
    ctx.report(&result);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, kind: CollectionKind, id: &str, json: &str) -> Result<()> {
    let result = ctx.api.update(kind, id, json)?;
    ctx.report(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, kind: CollectionKind, ids: &[String]) -> Result<()> {
    let result = ctx.api.delete(kind, ids)?;
    ctx.report(&result);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.seed()?;
    ctx.report(&result);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reset()?;
    ctx.report(&result);
    Ok(())
}

// --- Notifications ---

fn handle_notifications(ctx: &mut AppContext, unread_only: bool) -> Result<()> {
    let result = ctx.api.notifications(unread_only)?;
    print!(
        "{}",
        render_notifications(&result.notifications, Utc::now(), use_color())
    );
    ctx.report(&result);
    Ok(())
}

fn handle_read(ctx: &mut AppContext, id: Option<String>, all: bool) -> Result<()> {
    let result = match id {
        Some(id) if !all => ctx.api.mark_read(&id)?,
        _ => ctx.api.mark_all_read()?,
    };
    ctx.report(&result);
    Ok(())
}

// --- Local ---

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, use_color()));
        }
    }
    ctx.report(&result);
    Ok(())
}

fn handle_paths(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.paths()?;
    print!("{}", render_paths(&result.paths, use_color()));
    ctx.report(&result);
    Ok(())
}
