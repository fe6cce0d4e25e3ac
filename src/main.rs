use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wtrack::application::manage_config::format_home;
use wtrack::application::{App, ConfigService, InitService};
use wtrack::cli::{format_map, format_workout, format_workout_list, Cli, Commands};
use wtrack::domain::{Coords, WorkoutForm, WorkoutKind};
use wtrack::error::{Result, TrackerError};
use wtrack::infrastructure::{
    ConfiguredPosition, FileStorage, FileSystemRepository, MarkerLayer, TrackerRepository,
};

fn init_logging() {
    let filter = EnvFilter::try_from_env("WTRACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Load config and workouts for the tracker containing the current directory
fn open_app() -> Result<(ConfiguredPosition, App<FileStorage, MarkerLayer>)> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let app = App::new(repo.storage(), config.zoom_level)?;
    Ok((ConfiguredPosition::from_env(&config), app))
}

fn parse_coords(raw: &str) -> Result<Coords> {
    Coords::from_str(raw).map_err(TrackerError::InvalidInput)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path, zoom, home }) => {
            let home = home.as_deref().map(parse_coords).transpose()?;
            let config = InitService::execute(&path, zoom, home)?;
            println!("Initialized wtrack at {}", path.display());
            println!("Zoom level: {}", config.zoom_level);
            println!("Home: {}", format_home(config.home));
            Ok(())
        }
        Some(Commands::Add {
            kind,
            at,
            distance,
            duration,
            cadence,
            elevation,
        }) => {
            let kind = WorkoutKind::from_str(&kind).map_err(TrackerError::InvalidInput)?;
            let form = WorkoutForm::new(kind)
                .distance(distance)
                .duration(duration)
                .cadence(cadence)
                .elevation(elevation);

            let (_, mut app) = open_app()?;
            app.show_form(parse_coords(&at)?);
            let workout = app.new_workout(&form)?;
            print!("{}", format_workout(workout));
            Ok(())
        }
        Some(Commands::List) => {
            let (_, app) = open_app()?;
            println!("{}", format_workout_list(app.workouts()).trim_end());
            Ok(())
        }
        Some(Commands::Map) => {
            let (position, mut app) = open_app()?;
            app.load_map(&position, MarkerLayer::new())?;
            if let Some(map) = app.map() {
                print!("{}", format_map(map));
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let (position, mut app) = open_app()?;
            match app.load_map(&position, MarkerLayer::new()) {
                Ok(()) => {}
                Err(e @ TrackerError::Geolocation(_)) => {
                    tracing::warn!(error = %e, "map unavailable");
                }
                Err(e) => return Err(e),
            }
            let workout = app.move_to_popup(&id)?;
            println!(
                "{} {} at {}",
                workout.kind().icon(),
                workout.description(),
                workout.coords()
            );
            if let Some(map) = app.map() {
                print!("{}", format_map(map));
            }
            Ok(())
        }
        Some(Commands::Remove { id }) => {
            let (_, mut app) = open_app()?;
            let removed = app.remove_workout(&id)?;
            println!("Removed {} [{}]", removed.description(), removed.id());
            Ok(())
        }
        Some(Commands::Reset) => {
            let (_, mut app) = open_app()?;
            app.reset()?;
            println!("All workouts deleted");
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("zoom_level = {}", config.zoom_level);
                println!("home = {}", format_home(config.home));
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: wtrack config [--list | <key> [<value>]]");
                println!("Valid keys: zoom_level, home, created");
                Ok(())
            }
        }
        None => {
            println!("wtrack - Map-based workout tracker");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
