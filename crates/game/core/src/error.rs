//! Common error infrastructure for rogue-core.
//!
//! This module provides the shared classification used by every error type in
//! the crate. Domain-specific errors (`CombatError`, `CatalogError`,
//! `OracleError`) live next to the code that produces them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error enum with specific variants
//! - **Fail Fast**: Data inconsistencies surface immediately, never as silent defaults
//! - **Severity Classification**: Errors are categorized for handling strategies

/// Severity level of an error, used for categorization and handling strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Inconsistent balance data or programmer error
/// - **Fatal**: The environment is missing something the engine cannot run without
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: negative health on a snapshot, negative attribute in a data file
    Validation,

    /// Internal error - inconsistent data or a bug in the caller.
    ///
    /// Examples: equipped item missing from the catalog, tag outside the vocabulary
    Internal,

    /// Fatal error - the engine cannot continue.
    ///
    /// Examples: missing required oracle
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug or broken data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all rogue-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
