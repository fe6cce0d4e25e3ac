//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wtrack")]
#[command(about = "Map-based running and cycling workout tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workout tracker
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Map zoom level used when centering on a position
        #[arg(short, long, default_value_t = 13)]
        zoom: u8,

        /// Home position used when no live position is set (LAT,LNG)
        #[arg(long, allow_hyphen_values = true)]
        home: Option<String>,
    },

    /// Record a workout at a map location
    Add {
        /// Workout type (running, cycling)
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Location of the workout (LAT,LNG)
        #[arg(long, allow_hyphen_values = true)]
        at: String,

        /// Distance in km
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        distance: String,

        /// Duration in minutes
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        duration: String,

        /// Cadence in steps per minute (running)
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        cadence: String,

        /// Elevation gain in meters (cycling)
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        elevation: String,
    },

    /// List recorded workouts
    List,

    /// Center the map on the current position and show workout markers
    Map,

    /// Center the map on a workout
    Show {
        /// Workout id (see 'wtrack list')
        id: String,
    },

    /// Delete a workout
    Remove {
        /// Workout id (see 'wtrack list')
        id: String,
    },

    /// Delete all workouts
    Reset,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
