use clap::Subcommand;

#[derive(Subcommand)]
pub enum HoldingsCommands {
    /// Balance and open positions
    Show,

    /// Buy shares
    Buy {
        ticker: String,

        #[arg(long)]
        quantity: f64,

        /// Total cost of the purchase
        #[arg(long)]
        total_value: f64,
    },

    /// Sell shares
    Sell {
        ticker: String,

        #[arg(long)]
        quantity: f64,

        /// Total proceeds of the sale
        #[arg(long)]
        total_value: f64,
    },
}
