//! pmsbridge CLI Client
//!
//! Command-line interface for sending one command to a PMS server.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pmsbridge::protocol::{CheckInRequest, CheckOutRequest, ReadCardRequest};
use pmsbridge::{BridgeError, Config, Exchange, PmsClient};
use tracing_subscriber::{fmt, EnvFilter};

/// pmsbridge CLI
#[derive(Parser, Debug)]
#[command(name = "pmsbridge-cli")]
#[command(about = "Send check-in, check-out and card-read commands to a hotel PMS")]
#[command(version)]
struct Args {
    /// PMS server host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// PMS server port
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Destination address (defaults to 01)
    #[arg(short, long)]
    dest: Option<String>,

    /// Source address (defaults to 03)
    #[arg(short, long)]
    src: Option<String>,

    /// Print the exchange as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a guest in and issue a card
    CheckIn {
        /// Room number
        #[arg(short, long)]
        room: String,

        /// Guest name
        #[arg(short, long)]
        name: String,

        /// Arrival, YYYY-MM-DDTHH:MM
        #[arg(long)]
        check_in: String,

        /// Departure, YYYY-MM-DDTHH:MM
        #[arg(long)]
        check_out: String,
    },

    /// Check a guest out
    CheckOut {
        /// Room number
        #[arg(short, long)]
        room: String,

        /// Only check out this guest
        #[arg(short, long)]
        name: Option<String>,

        /// Also cancel the card on the encoder
        #[arg(long)]
        cancel_card: bool,
    },

    /// Read the card on the encoder
    ReadCard,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pmsbridge=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .server_host(&args.host)
        .server_port(args.port)
        .build();
    let target = config.target();
    let client = PmsClient::new(config);

    tracing::debug!("pmsbridge CLI v{} targeting {}", pmsbridge::VERSION, target);

    let result = match args.command {
        Commands::CheckIn {
            room,
            name,
            check_in,
            check_out,
        } => {
            let request = CheckInRequest {
                dest_addr: args.dest,
                src_addr: args.src,
                ..CheckInRequest::new(room, name, check_in, check_out)
            };
            client.check_in(&target, &request)
        }
        Commands::CheckOut {
            room,
            name,
            cancel_card,
        } => {
            let request = CheckOutRequest {
                dest_addr: args.dest,
                src_addr: args.src,
                cancel_card,
                guest_name: name,
                ..CheckOutRequest::new(room)
            };
            client.check_out(&target, &request)
        }
        Commands::ReadCard => {
            let request = ReadCardRequest {
                dest_addr: args.dest,
                src_addr: args.src,
            };
            client.read_card(&target, &request)
        }
    };

    match result {
        Ok(exchange) => {
            print_exchange(&exchange, args.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e, args.json);
            if e.is_validation() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn print_exchange(exchange: &Exchange, json: bool) {
    if json {
        match serde_json::to_string_pretty(exchange) {
            Ok(out) => println!("{}", out),
            Err(e) => tracing::error!("Failed to serialize exchange: {}", e),
        }
        return;
    }

    println!("{}", exchange.message);
    println!("sent:          {:?}", exchange.sent);
    println!("received hex:  {}", exchange.received_hex);
    println!("received text: {:?}", exchange.received_text);
}

fn print_error(error: &BridgeError, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "error": error.to_string() }));
    } else {
        eprintln!("error: {}", error);
    }
}
