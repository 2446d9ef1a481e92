use crate::cache_commands::CacheCommands;
use crate::demo_commands::DemoCommands;
use crate::holdings_commands::HoldingsCommands;
use crate::onboarding_commands::OnboardingCommands;
use crate::preference_commands::PreferenceCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the backend is up (cached for a short while)
    Health {
        /// Ignore any cached result
        #[arg(long)]
        fresh: bool,
    },

    /// Show whether the market is open and when that changes
    Market,

    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in with it
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Defaults to --password
        #[arg(long)]
        password_confirm: Option<String>,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,
    },

    /// Sign out of the account and of demo mode
    Logout,

    /// Show the current user
    Whoami {
        /// Check the session against the backend first
        #[arg(long)]
        refresh: bool,
    },

    /// Onboarding status and submission
    Onboarding {
        #[command(subcommand)]
        action: OnboardingCommands,
    },

    /// Manage the watchlist
    Watchlist {
        #[command(subcommand)]
        action: PreferenceCommands,
    },

    /// Manage the dislike list
    Dislikes {
        #[command(subcommand)]
        action: PreferenceCommands,
    },

    /// Show holdings or trade
    Holdings {
        #[command(subcommand)]
        action: HoldingsCommands,
    },

    /// Stocks matched to your zodiac sign
    Zodiac {
        /// Bypass the cache
        #[arg(long)]
        refresh: bool,
    },

    /// Try the app without an account
    Demo {
        #[command(subcommand)]
        action: DemoCommands,
    },

    /// Manage cached responses
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },

    /// Follow the current user, printing a line on every change
    Watch {
        /// Poll interval in seconds (defaults to the configured interval)
        #[arg(long)]
        interval: Option<u64>,
    },
}
