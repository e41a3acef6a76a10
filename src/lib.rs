//! ShortsTitler - AI-generated headlines and titles for short-form video
//!
//! This crate turns a video transcript (pasted text, a plain-text file or a
//! SubRip subtitle file) into a prompt, sends it to an OpenAI-compatible
//! chat completions API and returns the generated headlines and titles.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Transcript and prompt value objects, subtitle extraction, errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (OpenAI, XDG config, clipboard)
//! - **CLI**: Command-line interface, argument parsing, and presentation

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
