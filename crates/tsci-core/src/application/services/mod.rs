//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: "initialize a project" and "advise on updates".

pub mod init_service;
pub mod version_advisor;

pub use init_service::InitService;
pub use version_advisor::VersionAdvisor;
