use clap::{Args, CommandFactory, Parser, Subcommand};
use erpdash::commands::ListOptions;
use erpdash::state::CollectionKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "erpdash",
    bin_name = "erpdash",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "ERP dashboard for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the saved state and config
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, help_heading = "Options")]
    pub quiet: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Session,
    Pages,
    Records,
    Inbox,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Session => "Session:",
            CommandGroup::Pages => "Pages:",
            CommandGroup::Records => "Records:",
            CommandGroup::Inbox => "Notifications:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "login" | "logout" | "whoami" => Some(CommandGroup::Session),
            "open" | "dashboard" | "nav" | "palette" => Some(CommandGroup::Pages),
            "list" | "show" | "add" | "update" | "delete" | "seed" | "reset" => {
                Some(CommandGroup::Records)
            }
            "notifications" | "read" => Some(CommandGroup::Inbox),
            "config" | "paths" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Session,
            CommandGroup::Pages,
            CommandGroup::Records,
            CommandGroup::Inbox,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("erpdash {version}\n"));
    output.push_str("ERP dashboard for the terminal\n");
    output.push('\n');
    output.push_str("Usage: erpdash [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<14} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data-dir <DIR>  Directory holding the saved state and config\n");
    output.push_str("  -v, --verbose         Verbose output (debug logging)\n");
    output.push_str("  -q, --quiet           Only log errors\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Session(c) => match c {
                SessionCommands::Login { .. } => "login",
                SessionCommands::Logout => "logout",
                SessionCommands::Whoami => "whoami",
            },
            Commands::Pages(c) => match c {
                PageCommands::Open { .. } => "open",
                PageCommands::Dashboard => "dashboard",
                PageCommands::Nav => "nav",
                PageCommands::Palette { .. } => "palette",
            },
            Commands::Records(c) => match c {
                RecordCommands::List { .. } => "list",
                RecordCommands::Show { .. } => "show",
                RecordCommands::Add { .. } => "add",
                RecordCommands::Update { .. } => "update",
                RecordCommands::Delete { .. } => "delete",
                RecordCommands::Seed => "seed",
                RecordCommands::Reset => "reset",
            },
            Commands::Inbox(c) => match c {
                InboxCommands::Notifications { .. } => "notifications",
                InboxCommands::Read { .. } => "read",
            },
            Commands::Misc(c) => match c {
                MiscCommands::Config { .. } => "config",
                MiscCommands::Paths => "paths",
                MiscCommands::Help { .. } => "help",
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Session(SessionCommands),

    #[command(flatten)]
    Pages(PageCommands),

    #[command(flatten)]
    Records(RecordCommands),

    #[command(flatten)]
    Inbox(InboxCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Sign in with a demo account
    #[command(display_order = 1)]
    Login {
        /// Account email (e.g. admin@acme.com)
        email: String,

        /// Account password
        #[arg(long, default_value = "demo123")]
        password: String,
    },

    /// Sign out
    #[command(display_order = 2)]
    Logout,

    /// Show who is signed in
    #[command(display_order = 3)]
    Whoami,
}

#[derive(Subcommand, Debug)]
pub enum PageCommands {
    /// Open a page by its path (e.g. /invoices)
    #[command(alias = "o", display_order = 10)]
    Open {
        /// Route path
        path: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Open the dashboard
    #[command(alias = "d", display_order = 11)]
    Dashboard,

    /// Show the sidebar sections visible to you
    #[command(display_order = 12)]
    Nav,

    /// Search quick actions, pages, customers and servers
    #[command(alias = "k", display_order = 13)]
    Palette {
        /// Filter (case-insensitive substring)
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// List a collection as a table
    #[command(alias = "ls", display_order = 20)]
    List {
        #[arg(value_enum)]
        kind: CollectionKind,

        #[command(flatten)]
        list: ListArgs,

        /// Print the selected rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print records by id as JSON
    #[command(alias = "v", display_order = 21)]
    Show {
        #[arg(value_enum)]
        kind: CollectionKind,

        /// Record ids (e.g. cust-1 inv-4)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Add a record from a JSON object
    #[command(alias = "n", display_order = 22)]
    Add {
        #[arg(value_enum)]
        kind: CollectionKind,

        /// The record, e.g. '{"name": "Jane", "email": "jane@example.com"}'
        json: String,
    },

    /// Patch a record with a JSON object
    #[command(alias = "e", display_order = 23)]
    Update {
        #[arg(value_enum)]
        kind: CollectionKind,

        /// Record id
        id: String,

        /// Fields to change, e.g. '{"status": "paid"}'
        json: String,
    },

    /// Delete records by id
    #[command(alias = "rm", display_order = 24)]
    Delete {
        #[arg(value_enum)]
        kind: CollectionKind,

        /// Record ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Load the demo data if nothing is loaded yet
    #[command(display_order = 25)]
    Seed,

    /// Replace all data with the demo set
    #[command(display_order = 26)]
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum InboxCommands {
    /// List notifications
    #[command(display_order = 30)]
    Notifications {
        /// Only unread ones
        #[arg(long)]
        unread: bool,
    },

    /// Mark a notification (or all of them) as read
    #[command(display_order = 31)]
    Read {
        /// Notification id
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<String>,

        /// Mark every notification as read
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 40)]
    Config {
        /// Configuration key (page-size, login-delay-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the data directory and file locations
    #[command(display_order = 41)]
    Paths,

    /// Print help for erpdash or a subcommand
    #[command(display_order = 42)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

/// Table controls shared by `list` and `open`.
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Filter rows by a search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page to show, starting at 1
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page (5, 10, 20, 50 or 100)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Column to sort by; prefix with '-' for descending (e.g. --sort=-total)
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Select rows by id
    #[arg(long, num_args = 1..)]
    pub select: Vec<String>,

    /// Select every row on the page
    #[arg(long)]
    pub select_all: bool,
}

impl ListArgs {
    /// Builds list options, using `default_page_size` when none was given.
    pub fn into_options(self, default_page_size: usize) -> ListOptions {
        ListOptions {
            search: self.search,
            page: self.page,
            page_size: Some(self.page_size.unwrap_or(default_page_size)),
            sort: self.sort,
            select: self.select,
            select_all: self.select_all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn every_visible_command_has_a_group() {
        let cmd = Cli::command();
        for sc in cmd.get_subcommands().filter(|sc| !sc.is_hide_set()) {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn list_parses_kind_and_table_controls() {
        let cli = parse(&[
            "erpdash",
            "list",
            "expense-categories",
            "--search",
            "soft",
            "--sort",
            "-name",
            "--select",
            "ecat-1",
            "ecat-2",
        ]);
        match cli.command {
            Some(Commands::Records(RecordCommands::List { kind, list, json })) => {
                assert_eq!(kind, CollectionKind::ExpenseCategories);
                assert_eq!(list.search.as_deref(), Some("soft"));
                assert_eq!(list.sort.as_deref(), Some("-name"));
                assert_eq!(list.select, vec!["ecat-1", "ecat-2"]);
                assert!(!json);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn page_size_falls_back_to_config() {
        let options = ListArgs::default().into_options(20);
        assert_eq!(options.page_size, Some(20));

        let options = ListArgs {
            page_size: Some(5),
            ..Default::default()
        }
        .into_options(20);
        assert_eq!(options.page_size, Some(5));
    }

    #[test]
    fn read_needs_an_id_or_all() {
        assert!(Cli::try_parse_from(["erpdash", "read"]).is_err());
        assert!(Cli::try_parse_from(["erpdash", "read", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["erpdash", "read", "notif-1", "--all"]).is_err());
    }

    #[test]
    fn global_options_after_the_subcommand() {
        let cli = parse(&["erpdash", "whoami", "--data-dir", "/tmp/erp", "-v"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/erp")));
        assert!(cli.verbose);
        assert_eq!(cli.command.map(|c| c.name()), Some("whoami"));
    }
}
