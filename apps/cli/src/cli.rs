use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "auragold", version, about = "Aura Gold invoice console")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Base URL of the invoice service (overrides AURA_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Scope invoice listing to this user (overrides AURA_USER_ID)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Request timeout in milliseconds (overrides AURA_REQUEST_TIMEOUT_MS)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Dashboard polling interval (overrides AURA_POLL_INTERVAL_SECS)
    #[arg(long, global = true)]
    pub poll_interval_secs: Option<u64>,

    /// Log format: text or json (overrides AURA_LOG_FORMAT)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and print the account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Manage invoices
    #[command(subcommand)]
    Invoices(InvoicesCommand),
    /// Invested totals per metal
    Summary,
    /// Revenue dashboard: KPIs, trends, GST split and profit estimate
    Dashboard(DashboardArgs),
}

#[derive(Subcommand, Debug)]
pub enum InvoicesCommand {
    /// List invoices, oldest first
    List,
    /// Delete one invoice
    Delete { id: String },
    /// Enter an invoice by hand
    Add(ManualInvoiceArgs),
    /// Upload an invoice document for parsing
    Upload { file: PathBuf },
}

#[derive(Args, Debug, Default)]
pub struct ManualInvoiceArgs {
    /// Invoice date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub date: String,
    /// Metal type, e.g. GOLD24 or SILVER24
    #[arg(long, default_value = "")]
    pub metal: String,
    /// Amount before GST
    #[arg(long, default_value = "")]
    pub amount: String,
    /// GST amount
    #[arg(long, default_value = "")]
    pub gst: String,
}

#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub from: String,
    /// End date, inclusive of the whole day (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub to: String,
    /// ALL, GOLD or SILVER
    #[arg(long, default_value = "ALL")]
    pub metal: String,
    #[arg(long, default_value = "")]
    pub gold_grams: String,
    /// Current gold rate per gram
    #[arg(long, default_value = "")]
    pub gold_rate: String,
    #[arg(long, default_value = "")]
    pub silver_grams: String,
    /// Current silver rate per gram
    #[arg(long, default_value = "")]
    pub silver_rate: String,
    /// Keep polling and redraw until Ctrl-C
    #[arg(long)]
    pub watch: bool,
}
