//! Error categories.
//!
//! Upstream service failures ([`ServiceError`]) are kept apart from problems
//! with the local JSON data ([`DataError`]) so a failed run says which side
//! is at fault.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::coordinate::RouteKey;

/// The external mapping service failed or answered with something unusable.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("request to mapping service failed")]
    Http(#[from] reqwest::Error),
    #[error("mapping service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("mapping service rejected the request ({code}): {message}")]
    Rejected { code: String, message: String },
    #[error("malformed response from mapping service: {0}")]
    MalformedResponse(String),
    #[error("invalid mapping service base url {0:?}")]
    InvalidBaseUrl(String),
}

/// Local input or output files could not be read, parsed or written.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid json in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("location {0:?} has not been geocoded")]
    UnknownLocation(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResampleError {
    #[error("coordinate at index {index} is not finite")]
    NonFiniteCoordinate { index: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value {value:?} for environment variable {name}")]
    InvalidVar { name: &'static str, value: String },
}

/// Failure of one of the precompute steps. Any of these aborts the run.
#[derive(Error, Debug)]
pub enum PrecomputeError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("failed to resample route {key}")]
    Resample {
        key: RouteKey,
        #[source]
        source: ResampleError,
    },
    #[error("no geocoding match for {0:?}")]
    NoGeocodeMatch(String),
    #[error("no driving route found for {0}")]
    NoRoute(RouteKey),
}
