//! tsci Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the tsci
//! project initializer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            tsci-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (InitService, VersionAdvisor)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, VersionLookup, Generator)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     tsci-adapters (Infrastructure)      │
//! │  (LocalFilesystem, NpmRegistry, etc.)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │    (StarterFile, VersionCheck, ...)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tsci_core::application::InitService;
//!
//! // Assemble the service with injected adapters, then run the use case.
//! let service = InitService::new(filesystem, generators);
//! let report = service.initialize(&project_dir, &starters)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InitService, VersionAdvisor,
        ports::{Filesystem, ProjectGenerator, VersionLookup},
    };
    pub use crate::domain::{InitReport, StarterFile, VersionCheck};
    pub use crate::error::{InitError, InitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
