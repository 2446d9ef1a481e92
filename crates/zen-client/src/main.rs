//! zen - ZEN Traders CLI
//!
//! Talks to the ZEN Traders backend, keeping the session and cached responses
//! in a local JSON store. Every command prints JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! zen login --email jane@example.com --password hunter22
//!
//! # Try the app without an account
//! zen demo enable --zodiac-sign Leo --starting-balance 50000
//!
//! # Buy shares
//! zen holdings buy AAPL --quantity 2 --total-value 450 --pretty
//! ```

mod cache_commands;
mod cli;
mod commands;
mod demo_commands;
mod holdings_commands;
mod onboarding_commands;
mod preference_commands;

use crate::{
    cache_commands::CacheCommands, cli::Cli, commands::Commands, demo_commands::DemoCommands,
    holdings_commands::HoldingsCommands, onboarding_commands::OnboardingCommands,
    preference_commands::PreferenceCommands,
};

use zen_client::{ClientResult, FileStorage, LogRedirect, SystemClock, ZenClient, logger};
use zen_config::Config;
use zen_core::{
    LoginCredentials, OnboardingRequest, PreferenceType, ProfileRecord, RegisterRequest,
    TradeAction, TradeRequest,
};

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.api_url.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Logging is best effort; a broken log file should not block commands
    let log_file = config.log_file_path().unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        None
    });
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Warning: {}", e);
    }

    let client = match build_client(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if matches!(cli.command, Commands::Watch { .. }) {
        config.log_summary();
    }
    let result = run(cli.command, &client, cli.pretty).await;

    match result {
        Ok(value) => match render(&value, cli.pretty) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing response: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load config.toml plus environment, then apply `--api-url`
fn load_config(api_url: Option<&str>) -> ClientResult<Config> {
    let mut config = Config::load()?;
    if let Some(url) = api_url {
        config.api.public_url = url.to_string();
        config.api.internal_url = url.to_string();
    }
    config.validate()?;
    Ok(config)
}

fn build_client(config: &Config) -> ClientResult<ZenClient> {
    let storage = FileStorage::open(config.storage_path()?)?;
    Ok(ZenClient::new(
        config,
        Arc::new(storage),
        Arc::new(SystemClock),
        Arc::new(LogRedirect),
    ))
}

fn render(value: &Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

async fn run(command: Commands, client: &ZenClient, pretty: bool) -> ClientResult<Value> {
    let value = match command {
        Commands::Health { fresh } => {
            if fresh {
                client.clear_health_cache();
            }
            serde_json::to_value(client.check_health().await)?
        }

        Commands::Market => serde_json::to_value(client.market_status().await?)?,

        Commands::Login { email, password } => {
            let outcome = client
                .session()
                .login(&LoginCredentials::new(email, password))
                .await?;
            serde_json::to_value(outcome.user)?
        }

        Commands::Register {
            email,
            username,
            password,
            password_confirm,
            first_name,
            last_name,
        } => {
            let request = RegisterRequest {
                email,
                username,
                password_confirm: password_confirm.unwrap_or_else(|| password.clone()),
                password,
                first_name,
                last_name,
            };
            let outcome = client.session().register(&request).await?;
            serde_json::to_value(outcome.user)?
        }

        Commands::Logout => {
            client.user_state().logout();
            json!({ "message": "Signed out" })
        }

        Commands::Whoami { refresh } => {
            let user_state = client.user_state();
            let current = if refresh {
                user_state.reconcile().await
            } else {
                user_state.current()
            };
            match current {
                Some(user) => serde_json::to_value(user)?,
                None => json!({ "mode": null, "user": null }),
            }
        }

        Commands::Onboarding { action } => match action {
            OnboardingCommands::Status => serde_json::to_value(client.onboarding_status().await?)?,
            OnboardingCommands::Submit {
                date_of_birth,
                zodiac_sign,
                zodiac_symbol,
                zodiac_element,
                investing_style,
                starting_balance,
            } => {
                let request = OnboardingRequest {
                    date_of_birth,
                    zodiac_sign,
                    zodiac_symbol,
                    zodiac_element,
                    investing_style,
                    starting_balance,
                };
                serde_json::to_value(client.submit_onboarding(&request).await?)?
            }
        },

        Commands::Watchlist { action } => {
            run_preference(client, PreferenceType::Watchlist, action).await?
        }
        Commands::Dislikes { action } => {
            run_preference(client, PreferenceType::Dislike, action).await?
        }

        Commands::Holdings { action } => match action {
            HoldingsCommands::Show => serde_json::to_value(client.holdings().await?)?,
            HoldingsCommands::Buy {
                ticker,
                quantity,
                total_value,
            } => trade(client, TradeAction::Buy, ticker, quantity, total_value).await?,
            HoldingsCommands::Sell {
                ticker,
                quantity,
                total_value,
            } => trade(client, TradeAction::Sell, ticker, quantity, total_value).await?,
        },

        Commands::Zodiac { refresh } => {
            serde_json::to_value(client.zodiac_matched_stocks(refresh).await?)?
        }

        Commands::Demo { action } => match action {
            DemoCommands::Enable {
                date_of_birth,
                zodiac_sign,
                zodiac_symbol,
                zodiac_element,
                investing_style,
                starting_balance,
            } => {
                let profile = ProfileRecord {
                    date_of_birth,
                    zodiac_sign,
                    zodiac_symbol,
                    zodiac_element,
                    investing_style,
                    starting_balance,
                    ..ProfileRecord::default()
                };
                serde_json::to_value(client.enable_demo(profile)?)?
            }
            DemoCommands::Disable => {
                client.disable_demo();
                json!({ "message": "Demo mode disabled" })
            }
            DemoCommands::Reset => {
                client.reset_demo();
                json!({ "message": "Demo data cleared" })
            }
        },

        Commands::Cache { action } => match action {
            CacheCommands::Clear { key } => match key {
                Some(key) => {
                    client.cache().clear(&key);
                    json!({ "cleared": [key] })
                }
                None => {
                    client.cache().clear_all();
                    json!({ "cleared": "all" })
                }
            },
        },

        Commands::Watch { interval } => watch(client, interval, pretty).await?,
    };

    Ok(value)
}

async fn run_preference(
    client: &ZenClient,
    kind: PreferenceType,
    action: PreferenceCommands,
) -> ClientResult<Value> {
    let value = match action {
        PreferenceCommands::List => serde_json::to_value(client.preferences(kind).await?)?,
        PreferenceCommands::Add { ticker } => {
            serde_json::to_value(client.add_preference(kind, &ticker).await?)?
        }
        PreferenceCommands::Remove { ticker } => {
            json!({ "message": client.remove_preference(kind, &ticker).await? })
        }
    };
    Ok(value)
}

async fn trade(
    client: &ZenClient,
    action: TradeAction,
    ticker: String,
    quantity: f64,
    total_value: f64,
) -> ClientResult<Value> {
    let request = TradeRequest {
        ticker: ticker.to_uppercase(),
        quantity,
        total_value,
        action,
    };
    Ok(serde_json::to_value(client.execute_trade(&request).await?)?)
}

/// Follow the current user until Ctrl+C, one JSON line per change
async fn watch(client: &ZenClient, interval: Option<u64>, pretty: bool) -> ClientResult<Value> {
    let poll_interval = interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| client.poll_interval());
    let user_state = client.user_state();
    let mut changes = user_state.subscribe();
    let guard = user_state.mount(poll_interval);
    info!("Watching current user (poll every {:?})", poll_interval);

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    warn!("User state closed");
                    break;
                }
                let current = changes.borrow_and_update().clone();
                match &current {
                    Some(user) => info!("Current user: {}", user.user().display_name()),
                    None => info!("Signed out"),
                }
                match render(&serde_json::to_value(current)?, pretty) {
                    Ok(line) => println!("{}", line),
                    Err(e) => warn!("Failed to render user: {}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping watch");
                break;
            }
        }
    }

    drop(guard);
    Ok(json!({ "message": "Stopped watching" }))
}
