// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports towards the host.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The controls consume the ports and never a concrete host

pub mod port;
