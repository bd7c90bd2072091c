// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports for dependency inversion.
//!
//! - [`port`]: Trait definitions (interfaces) implemented by infrastructure
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer consumes the ports through trait objects
//!
//! # Example
//!
//! ```ignore
//! use lightbox_dismiss::application::port::MediaSource;
//! use lightbox_dismiss::infrastructure::TomlCatalog;
//!
//! // Infrastructure implements the port trait
//! let source = TomlCatalog::new("catalog.toml");
//! let items = source.load()?;
//! ```

pub mod port;
