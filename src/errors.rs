// Error types for padboard

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum DashboardError {
    // Errors loading the launch records dataset. All of these are fatal at
    // startup; the dashboard never starts with a partial dataset.
    #[snafu(display("Unable to open launch records file: {path}"))]
    MissingDataFile { path: String, source: io::Error },
    #[snafu(display("Error parsing launch records"))]
    MalformedRecords { source: csv::Error },
    #[snafu(display("Launch records file is missing required column: {column}"))]
    MissingColumn { column: String },
    #[snafu(display("Launch records file contains no rows"))]
    EmptyDataset,

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
}
