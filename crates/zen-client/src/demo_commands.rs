use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Start a demo session
    Enable {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        date_of_birth: Option<NaiveDate>,

        #[arg(long)]
        zodiac_sign: Option<String>,

        #[arg(long)]
        zodiac_symbol: Option<String>,

        #[arg(long)]
        zodiac_element: Option<String>,

        #[arg(long)]
        investing_style: Option<String>,

        #[arg(long)]
        starting_balance: Option<f64>,
    },

    /// End the demo session, keeping the simulated portfolio
    Disable,

    /// End the demo session and delete the simulated portfolio and lists
    Reset,
}
