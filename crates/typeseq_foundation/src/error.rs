//! Error types for typeseq.
//!
//! Every error here is a contract violation detected while a sequence is
//! being constructed. None of them is retryable: combinators are pure, so
//! the same inputs always fail the same way.

use std::fmt;

use thiserror::Error;

use crate::descriptor::Descriptor;

/// The main error type for typeseq operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records that the error passed through `operation`.
    ///
    /// The first call sets the operation; later calls push outer frames.
    #[must_use]
    pub fn in_operation(mut self, operation: &'static str) -> Self {
        self.context = Some(match self.context.take() {
            None => ErrorContext::new().with_operation(operation),
            Some(ctx) if ctx.operation.is_none() => ctx.with_operation(operation),
            Some(ctx) => ctx.with_frame(operation),
        });
        self
    }

    /// Creates a length mismatch error (zipping sequences of different sizes).
    #[must_use]
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::new(ErrorKind::LengthMismatch { left, right })
    }

    /// Creates a length exceeded error (taking more elements than exist).
    #[must_use]
    pub fn length_exceeded(requested: usize, length: usize) -> Self {
        Self::new(ErrorKind::LengthExceeded { requested, length })
    }

    /// Creates an index out of range error.
    #[must_use]
    pub fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfRange { index, length })
    }

    /// Creates a target smaller than source error (left padding).
    #[must_use]
    pub fn target_smaller_than_source(target: usize, length: usize) -> Self {
        Self::new(ErrorKind::TargetSmallerThanSource { target, length })
    }

    /// Creates a not-a-pair error (a zipped operation saw a plain element).
    #[must_use]
    pub fn not_a_pair(index: usize, found: Descriptor) -> Self {
        Self::new(ErrorKind::NotAPair { index, found })
    }

    /// Creates an unknown type error (registry lookup miss).
    #[must_use]
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType(name.into()))
    }

    /// Creates a duplicate name error (registering a taken name).
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateName(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Two sequences that must have equal size do not.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Size of the left sequence.
        left: usize,
        /// Size of the right sequence.
        right: usize,
    },

    /// More elements were requested than the sequence holds.
    #[error("length exceeded: requested {requested} of {length}")]
    LengthExceeded {
        /// Number of elements requested.
        requested: usize,
        /// The actual size of the sequence.
        length: usize,
    },

    /// Random access past the end of the sequence.
    #[error("index out of range: {index} (length {length})")]
    IndexOutOfRange {
        /// The index that was accessed.
        index: usize,
        /// The actual size of the sequence.
        length: usize,
    },

    /// Left padding to a size smaller than the source.
    #[error("target size {target} is smaller than source size {length}")]
    TargetSmallerThanSource {
        /// The requested size.
        target: usize,
        /// The actual size of the sequence.
        length: usize,
    },

    /// A zipped operation found an element that is not a pair.
    #[error("element {index} is not a pair: {found}")]
    NotAPair {
        /// Position of the offending element.
        index: usize,
        /// The offending element.
        found: Descriptor,
    },

    /// A native type has no registered descriptor.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A registered name already belongs to a different type.
    #[error("name already registered: {0}")]
    DuplicateName(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The combinator that detected the violation.
    pub operation: Option<&'static str>,
    /// Enclosing combinators, innermost first.
    pub stack: Vec<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation that detected the error.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Adds an enclosing frame.
    #[must_use]
    pub fn with_frame(mut self, frame: &'static str) -> Self {
        self.stack.push(frame);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = self.operation {
            write!(f, "in {operation}")?;
        }
        for frame in &self.stack {
            write!(f, " via {frame}")?;
        }
        Ok(())
    }
}
