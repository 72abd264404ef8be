//! # PdfPress Common
//!
//! Shared types and closed registries for the PdfPress workspace.
//!
//! This crate defines the error code registry the PDF pipeline reports
//! against and the localization layer translates from.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod codes;

pub use codes::ErrorCode;
