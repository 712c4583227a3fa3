use std::error::Error;

use clap::{Parser, Subcommand};
use phonebook_sdk::PhonebookClient;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "phonebook-cli")]
#[command(about = "Command-line client for the phonebook service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every contact
    List,
    /// Show one contact
    Get { id: u64 },
    /// Add a contact
    Add { name: String, number: String },
    /// Delete a contact
    Delete { id: u64 },
    /// Show the server info page
    Info,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = PhonebookClient::new(&cli.url);

    if let Err(e) = execute(&client, cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn execute(client: &PhonebookClient, command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::List => print_json(&client.list().await?)?,
        Commands::Get { id } => print_json(&client.get(id).await?)?,
        Commands::Add { name, number } => print_json(&client.create(&name, &number).await?)?,
        Commands::Delete { id } => {
            client.delete(id).await?;
            println!("Deleted {}", id);
        }
        Commands::Info => println!("{}", client.info().await?),
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
