use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Which host notification a subscription listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObserveKind {
    Scroll,
    Resize,
}

impl fmt::Display for ObserveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scroll => f.write_str("scroll"),
            Self::Resize => f.write_str("resize"),
        }
    }
}

/// Failure to register a scroll or resize observer on the host container.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ObserveError {
    #[error("{kind} observation is not supported by this host")]
    Unsupported { kind: ObserveKind },

    #[error("host rejected {kind} observer: {reason}")]
    Rejected { kind: ObserveKind, reason: String },
}

impl ObserveError {
    pub fn kind(&self) -> ObserveKind {
        match self {
            Self::Unsupported { kind } | Self::Rejected { kind, .. } => *kind,
        }
    }
}
