use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use sw_app::{
    AppError, AppResult, InMemoryLineRepository, InMemoryStationDirectory, LineRequest,
    LineResponse, LineService, LoadedNetwork, SectionRequest, load_network, save_network,
};
use sw_core::Id;

#[derive(Parser)]
#[command(name = "sw-cli")]
#[command(about = "Subway line editor - manage lines and their sections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate network file syntax and line structure
    Validate {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// List lines with their stations
    Lines {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// Show one line
    Show {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Line ID
        line_id: u32,
        /// Print the line as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a line with its first section
    CreateLine {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        color: String,
        /// Up station ID
        #[arg(long)]
        up: u32,
        /// Down station ID
        #[arg(long)]
        down: u32,
        #[arg(long)]
        distance: u32,
    },
    /// Register a section on a line
    AddSection {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Line ID
        line_id: u32,
        /// Up station ID
        #[arg(long)]
        up: u32,
        /// Down station ID
        #[arg(long)]
        down: u32,
        #[arg(long)]
        distance: u32,
    },
    /// Rename or recolor a line
    UpdateLine {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Line ID
        line_id: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        color: String,
    },
    /// Delete a line and its sections
    DeleteLine {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Line ID
        line_id: u32,
    },
}

type Service = LineService<InMemoryLineRepository, InMemoryStationDirectory>;

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Lines { network_path } => cmd_lines(&network_path),
        Commands::Show {
            network_path,
            line_id,
            json,
        } => cmd_show(&network_path, line_id, json),
        Commands::CreateLine {
            network_path,
            name,
            color,
            up,
            down,
            distance,
        } => cmd_create_line(&network_path, name, color, up, down, distance),
        Commands::AddSection {
            network_path,
            line_id,
            up,
            down,
            distance,
        } => cmd_add_section(&network_path, line_id, up, down, distance),
        Commands::UpdateLine {
            network_path,
            line_id,
            name,
            color,
        } => cmd_update_line(&network_path, line_id, &name, &color),
        Commands::DeleteLine {
            network_path,
            line_id,
        } => cmd_delete_line(&network_path, line_id),
    }
}

fn parse_id(raw: u32, what: &str) -> AppResult<Id> {
    Id::from_raw(raw).ok_or_else(|| AppError::InvalidInput(format!("{what} ID must be at least 1")))
}

fn open_service(network_path: &Path) -> AppResult<(String, Service)> {
    let network = load_network(network_path)?;
    Ok((
        network.name,
        LineService::new(network.lines, network.stations),
    ))
}

fn close_service(network_path: &Path, name: String, service: Service) -> AppResult<()> {
    let (lines, stations) = service.into_parts();
    save_network(
        network_path,
        &LoadedNetwork {
            name,
            lines,
            stations,
        },
    )
}

fn print_line(line: &LineResponse) {
    let stations: Vec<&str> = line.stations.iter().map(|s| s.name.as_str()).collect();
    println!("  {} - {} [{}]", line.id, line.name, line.color);
    println!("    {}", stations.join(" -> "));
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let (_, service) = open_service(network_path)?;
    let lines = service.find_all_lines()?;
    println!("✓ Network is valid ({} lines)", lines.len());
    Ok(())
}

fn cmd_lines(network_path: &Path) -> AppResult<()> {
    let (_, service) = open_service(network_path)?;
    let lines = service.find_all_lines()?;

    if lines.is_empty() {
        println!("No lines found in network");
    } else {
        println!("Lines in network:");
        for line in &lines {
            print_line(line);
        }
    }
    Ok(())
}

fn cmd_show(network_path: &Path, line_id: u32, json: bool) -> AppResult<()> {
    let (_, service) = open_service(network_path)?;
    let line = service.find_line_by_id(parse_id(line_id, "Line")?)?;

    if json {
        let text = serde_json::to_string_pretty(&line)
            .map_err(|e| AppError::InvalidInput(format!("Failed to serialize line: {}", e)))?;
        println!("{}", text);
    } else {
        print_line(&line);
        println!("    created {}, modified {}", line.created_at, line.modified_at);
    }
    Ok(())
}

fn cmd_create_line(
    network_path: &Path,
    name: String,
    color: String,
    up: u32,
    down: u32,
    distance: u32,
) -> AppResult<()> {
    let (network_name, mut service) = open_service(network_path)?;
    let line = service.save_line(&LineRequest {
        name,
        color,
        up_station_id: parse_id(up, "Station")?,
        down_station_id: parse_id(down, "Station")?,
        distance,
    })?;
    close_service(network_path, network_name, service)?;

    println!("✓ Line created:");
    print_line(&line);
    Ok(())
}

fn cmd_add_section(
    network_path: &Path,
    line_id: u32,
    up: u32,
    down: u32,
    distance: u32,
) -> AppResult<()> {
    let (network_name, mut service) = open_service(network_path)?;
    let line = service.add_section(
        parse_id(line_id, "Line")?,
        &SectionRequest {
            up_station_id: parse_id(up, "Station")?,
            down_station_id: parse_id(down, "Station")?,
            distance,
        },
    )?;
    close_service(network_path, network_name, service)?;

    println!("✓ Section registered:");
    print_line(&line);
    Ok(())
}

fn cmd_update_line(network_path: &Path, line_id: u32, name: &str, color: &str) -> AppResult<()> {
    let (network_name, mut service) = open_service(network_path)?;
    let line = service.update_line(parse_id(line_id, "Line")?, name, color)?;
    close_service(network_path, network_name, service)?;

    println!("✓ Line updated:");
    print_line(&line);
    Ok(())
}

fn cmd_delete_line(network_path: &Path, line_id: u32) -> AppResult<()> {
    let (network_name, mut service) = open_service(network_path)?;
    let id = parse_id(line_id, "Line")?;
    service.delete_line_by_id(id)?;
    close_service(network_path, network_name, service)?;

    println!("✓ Line {} deleted", id);
    Ok(())
}
