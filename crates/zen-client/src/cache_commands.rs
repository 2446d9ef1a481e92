use clap::Subcommand;

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Remove cached responses
    Clear {
        /// Only this cache key (default: every entry)
        #[arg(long)]
        key: Option<String>,
    },
}
