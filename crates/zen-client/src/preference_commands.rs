use clap::Subcommand;

#[derive(Subcommand)]
pub enum PreferenceCommands {
    /// List tickers on the list
    List,

    /// Add a ticker
    Add {
        /// Stock ticker (e.g. AAPL)
        ticker: String,
    },

    /// Remove a ticker
    Remove {
        /// Stock ticker (e.g. AAPL)
        ticker: String,
    },
}
