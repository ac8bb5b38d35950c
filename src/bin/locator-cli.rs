use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mock_locator::locator::{decode, Locator, Request};
use mock_locator::store::FsStore;

#[derive(Parser)]
#[command(name = "locator-cli")]
#[command(about = "Inspect how requests resolve against a mock catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request path against a catalog
    Resolve {
        /// Catalog root directory
        #[arg(short, long, default_value = "./mock")]
        mount: PathBuf,

        /// Request method
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// Print every match instead of the best one
        #[arg(short, long)]
        all: bool,

        /// Request path, optionally with a query string
        path: String,
    },
    /// Decode a leaf name into its pattern
    Decode {
        /// Encoded leaf name, e.g. `list?page=:page.GET.json`
        name: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            mount,
            method,
            all,
            path,
        } => {
            let locator = Locator::new(FsStore::new(mount));
            let request = Request::parse(method, &path);
            if all {
                let matches = locator.find_all(&request)?;
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                match locator.find(&request)? {
                    Some(found) => println!("{}", serde_json::to_string_pretty(&found)?),
                    None => {
                        eprintln!("No match for {} {}", request.method, path);
                        std::process::exit(1);
                    }
                }
            }
        }
        Commands::Decode { name } => {
            let pattern = decode(&name)?;
            println!("{}", serde_json::to_string_pretty(&pattern)?);
        }
    }

    Ok(())
}
