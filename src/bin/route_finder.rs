use std::env;

use log::info;
use transit_routes::transit::{DEFAULT_DESTINATION, DEFAULT_SOURCE};
use transit_routes::{Error, Route, TransitNetwork};

/// Output style for the computed route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

/// Configuration for a route lookup
#[derive(Debug, Clone)]
struct RouteConfig {
    source: String,
    destination: String,
    output: OutputFormat,
    list_stops: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            output: OutputFormat::Table,
            list_stops: false,
        }
    }
}

impl RouteConfig {
    /// Defaults, then TRANSIT_SOURCE / TRANSIT_DESTINATION, then arguments
    fn load(args: impl IntoIterator<Item = String>) -> Result<Self, Error> {
        let mut config = Self::default();

        if let Ok(source) = env::var("TRANSIT_SOURCE") {
            config.source = source;
        }
        if let Ok(destination) = env::var("TRANSIT_DESTINATION") {
            config.destination = destination;
        }

        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--json" => config.output = OutputFormat::Json,
                "--list" => config.list_stops = true,
                flag if flag.starts_with("--") => {
                    return Err(Error::InvalidArgument(format!("unknown flag {}", flag)));
                }
                _ => positional.push(arg),
            }
        }

        match positional.len() {
            0 => {}
            1 => config.source = positional.remove(0),
            2 => {
                config.destination = positional.remove(1);
                config.source = positional.remove(0);
            }
            n => {
                return Err(Error::InvalidArgument(format!(
                    "expected at most 2 stops, got {}",
                    n
                )));
            }
        }

        Ok(config)
    }
}

fn print_stops(network: &TransitNetwork) {
    println!("{:<6} | {}", "Index", "Stop");
    println!("-------------------------------");
    for (index, name) in network.stops().iter().enumerate() {
        println!("{:<6} | {}", index, name);
    }
}

fn print_table(route: &Route, network: &TransitNetwork) -> Result<(), Error> {
    let from = network.stop_name(route.source)?;
    let to = network.stop_name(route.destination)?;

    if route.is_empty() {
        if route.source == route.destination {
            println!("{} is both source and destination, nothing to travel", from);
        } else {
            println!("No route from {} to {}", from, to);
        }
        return Ok(());
    }

    println!("{:<20} | {:<20} | {:<8}", "Source", "Destination", "Cost");
    println!("-------------------------------------------------------");
    for leg in &route.legs {
        println!(
            "{:<20} | {:<20} | Rs.{}",
            leg.from_name, leg.to_name, leg.fare
        );
    }
    println!("-------------------------------------------------------");
    println!("{:<20} | {:<20} | Rs.{}", from, to, route.total_fare());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = RouteConfig::load(env::args().skip(1))?;
    info!("configuration: {:?}", config);

    let network = TransitNetwork::easyway()?;

    if config.list_stops {
        print_stops(&network);
        return Ok(());
    }

    let route = network.route_by_name(&config.source, &config.destination)?;

    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&route)?),
        OutputFormat::Table => print_table(&route, &network)?,
    }

    Ok(())
}
