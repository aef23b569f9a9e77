//! Core domain models for the chain selector registry.
//!
//! This module contains the fundamental data structures that represent:
//! - Families: the closed set of supported blockchain ecosystems
//! - Chain identifiers: family-native network identifiers
//! - Chain details: the selector, name and network type attached to a chain

mod chain;
mod family;

pub use chain::{ChainDetails, ChainIdentifier, RegistryEntry, Selector};
pub use family::{ChainFamily, IdentifierKind, NetworkType};
