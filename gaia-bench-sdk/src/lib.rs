//! GAIA Bench SDK
//!
//! This crate provides the HTTP transport used to put benchmark questions
//! to language models served behind an OpenAI-compatible
//! `chat/completions` endpoint (OpenAI itself, or a routing proxy that
//! fronts Anthropic, Gemini and Ollama models).
//!
//! # Features
//!
//! - **Structured output**: requests carry a `json_schema` response format
//! - **Automatic retries**: configurable retry logic with exponential backoff
//! - **Rate limiting**: automatic handling of rate limits with retry-after
//! - **Harness integration**: [`HttpCompletionClient`] implements
//!   [`gaia_bench_core::CompletionClient`], and [`SdkError`] converts into
//!   [`gaia_bench_core::SolveError`]
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gaia_bench_core::{ChatMessage, CompletionRequest, ModelId};
//! use gaia_bench_sdk::{HttpCompletionClient, SdkConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SdkConfig::new("https://api.openai.com/v1")
//!         .with_api_key("your-api-key");
//!
//!     let client = HttpCompletionClient::new(config)?;
//!
//!     let request = CompletionRequest::new(
//!         ModelId::from("gpt-4o"),
//!         vec![ChatMessage::user("What is the capital of France?")],
//!     );
//!     let completion = client.chat_completion(&request).await?;
//!     println!("{:?}", completion.content);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```rust,no_run
//! use gaia_bench_sdk::SdkConfig;
//! use std::time::Duration;
//!
//! let config = SdkConfig::new("http://localhost:4000/v1")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_max_retries(5)
//!     .with_logging(true);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::HttpCompletionClient;
pub use config::{SdkConfig, DEFAULT_BASE_URL};
pub use error::{SdkError, SdkResult};
