//! Presentation-independent configuration values

pub mod output_format;
