//! CLI argument definitions.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::model::LatLng;

/// Top-level CLI parser for `placemaps`.
#[derive(Debug, Parser)]
#[command(name = "placemaps", version, about = "Create, save, and browse maps of places")]
pub struct Cli {
    /// Collection file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List saved maps.
    List,
    /// Show the places on one saved map.
    Show {
        /// Map number as printed by `list`.
        index: usize,
    },
    /// Create a new map and save it.
    Create {
        /// Map title.
        title: String,
        /// Marker to place, as `LAT,LNG,TITLE,DESCRIPTION`. Repeatable.
        #[arg(
            long = "marker",
            value_name = "LAT,LNG,TITLE,DESCRIPTION",
            allow_hyphen_values = true
        )]
        markers: Vec<MarkerSpec>,
        /// Remove the N-th marker (1-based) before saving. Repeatable.
        #[arg(long = "remove", value_name = "N")]
        remove: Vec<usize>,
    },
    /// Add the built-in sample maps.
    Sample,
}

/// A marker given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// Marker position.
    pub position: LatLng,
    /// Marker title.
    pub title: String,
    /// Marker description; may contain commas.
    pub description: String,
}

impl FromStr for MarkerSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(4, ',');
        let (Some(lat), Some(lng), Some(title), Some(description)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected LAT,LNG,TITLE,DESCRIPTION, got `{s}`"));
        };
        let latitude: f64 =
            lat.trim().parse().map_err(|e| format!("invalid latitude `{lat}`: {e}"))?;
        let longitude: f64 =
            lng.trim().parse().map_err(|e| format!("invalid longitude `{lng}`: {e}"))?;
        Ok(Self {
            position: LatLng::new(latitude, longitude),
            title: title.to_string(),
            description: description.to_string(),
        })
    }
}
