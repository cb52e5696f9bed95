//! Client library for sending emoji reactions to WhatsApp Channel posts.
//!
//! The entry point is [`ReactionClient`]: give it an API key (or a full
//! [`ClientConfig`]), then call [`ReactionClient::send_reaction`] for a
//! single post or [`ReactionClient::send_batch_reactions`] for an ordered
//! list processed sequentially with a delay between requests.
//!
//! ```no_run
//! # async fn run() -> nvrch::Result<()> {
//! let client = nvrch::ReactionClient::new("KEY123")?;
//! let response = client
//!     .send_reaction(
//!         "https://whatsapp.com/channel/0029VbAzDjIBFLgbEyadQb3y/178",
//!         vec!["👍", "❤️"],
//!         Default::default(),
//!     )
//!     .await?;
//! # let _ = response;
//! # Ok(())
//! # }
//! ```

// Configuration and errors
pub mod config;
pub mod error;

// Input validation and normalization
pub mod emoji;
pub mod validate;

// Client and batch types
pub mod batch;
pub mod client;
pub mod info;

// Re-exports for convenience
pub use batch::{BatchItem, BatchOptions, BatchResult};
pub use client::{API_URL, ReactionClient, SendOptions};
pub use config::{ClientAuth, ClientConfig, ConfigUpdate, MaskedConfig};
pub use emoji::EmojiInput;
pub use error::{Error, Result};
pub use info::{PackageInfo, package_info};
pub use validate::validate_url;
