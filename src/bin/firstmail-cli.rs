#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! CLI for a Firstmail account

use anyhow::Context;
use clap::{Parser, Subcommand};
use firstmail_client::{
    ClientConfig, FirstmailClient, Folder, MessageList, generate_password,
};
use serde_json::Value;
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "firstmail-cli")]
#[command(about = "CLI for a Firstmail webmail account")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a fresh login yields a valid session
    Check,

    /// List the first page of messages in a folder
    Messages {
        /// Folder to list (inbox, starred or spam)
        #[arg(long, default_value = "inbox")]
        folder: String,
    },

    /// Search the whole mailbox
    Search {
        /// Search query; empty lists everything
        #[arg(default_value = "")]
        query: String,
    },

    /// Change the account password
    ChangePassword {
        /// New password
        #[arg(required_unless_present = "generate")]
        new_password: Option<String>,

        /// Generate a random password instead
        #[arg(long, conflicts_with = "new_password")]
        generate: bool,
    },

    /// Log in and print the stored credentials
    Credentials,

    /// Print a random password that meets the provider's rules
    GeneratePassword,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if matches!(args.command, Command::GeneratePassword) {
        println!("{}", generate_password());
        return Ok(());
    }

    let config = ClientConfig::from_env()?;
    let mut client = FirstmailClient::new(config)?;
    login_from_env(&mut client).await?;

    match &args.command {
        Command::Check => {
            let valid = client.check_jwt().await;
            if args.json {
                println!("{}", serde_json::json!({ "valid": valid }));
            } else {
                println!("{}", if valid { "valid" } else { "invalid" });
            }
        }
        Command::Messages { folder } => {
            let folder: Folder = folder.parse()?;
            let list = client.get_messages(folder).await?;
            print_messages(&args, &list)?;
        }
        Command::Search { query } => {
            let result = client.search(query).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_message_lines(&result.messages, result.count);
            }
        }
        Command::ChangePassword {
            new_password,
            generate,
        } => {
            let new_password = if *generate {
                generate_password()
            } else {
                new_password
                    .clone()
                    .context("new password is required")?
            };
            client.change_password(&new_password).await?;
            println!("Password changed to {new_password}");
        }
        Command::Credentials => {
            let creds = client.get_credentials();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&creds)?);
            } else {
                println!("Email:    {}", creds.email.as_deref().unwrap_or("-"));
                println!("Password: {}", creds.password.as_deref().unwrap_or("-"));
                println!("JWT:      {}", creds.jwt_token.as_deref().unwrap_or("-"));
                println!("OTP key:  {}", creds.otp_key.as_deref().unwrap_or("-"));
            }
        }
        Command::GeneratePassword => {}
    }

    Ok(())
}

/// Log in with `FIRSTMAIL_EMAIL`, `FIRSTMAIL_PASSWORD` and the optional
/// `FIRSTMAIL_OTP` (code or TOTP secret).
async fn login_from_env(client: &mut FirstmailClient) -> anyhow::Result<()> {
    let email = env::var("FIRSTMAIL_EMAIL").context("FIRSTMAIL_EMAIL not set")?;
    let password = env::var("FIRSTMAIL_PASSWORD").context("FIRSTMAIL_PASSWORD not set")?;
    let otp = env::var("FIRSTMAIL_OTP").ok();

    client.login(&email, &password, otp.as_deref()).await?;
    Ok(())
}

fn print_messages(args: &Args, list: &MessageList) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(list)?);
    } else {
        print_message_lines(&list.messages, list.count);
    }
    Ok(())
}

fn print_message_lines(messages: &[Value], count: u64) {
    if messages.is_empty() {
        println!("No messages found.");
        return;
    }

    for message in messages {
        println!("{}", truncate(&message.to_string(), 120));
    }

    println!("\n{count} message(s)");
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
