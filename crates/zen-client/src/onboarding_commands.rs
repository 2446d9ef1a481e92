use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum OnboardingCommands {
    /// Whether onboarding has been completed
    Status,

    /// Submit profile details
    Submit {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        date_of_birth: NaiveDate,

        #[arg(long)]
        zodiac_sign: String,

        #[arg(long)]
        zodiac_symbol: Option<String>,

        #[arg(long)]
        zodiac_element: Option<String>,

        #[arg(long)]
        investing_style: String,

        #[arg(long, default_value_t = zen_core::DEFAULT_STARTING_BALANCE)]
        starting_balance: f64,
    },
}
