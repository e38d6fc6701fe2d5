//! Engine error types.

use smartlight_proto::UserType;
use thiserror::Error;

/// Errors returned by [`crate::Engine::handle`].
///
/// Every variant leaves the engine state exactly as it was before the
/// command; none of them is fatal to the command loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The ownership payload violates a directory invariant.
    #[error("ownership rejected: {0}")]
    Directory(#[from] DirectoryError),

    /// A `user3` claim was refused.
    #[error("claim by {user_id} rejected: {reason}")]
    ClaimRejected {
        /// Claiming user.
        user_id: String,
        /// Why the claim failed.
        reason: ClaimRejection,
    },
}

/// Directory invariant violations found while loading a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Two records share a user id.
    #[error("duplicate user id {0}")]
    DuplicateUser(String),

    /// Two records share a sensor id.
    #[error("duplicate sensor id {0}")]
    DuplicateSensor(String),
}

/// Reasons a `user3` claim is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimRejection {
    /// The user is not in the current directory.
    #[error("unknown user")]
    UnknownUser,

    /// Only `USER3` users may claim.
    #[error("user is {0}, not USER3")]
    NotUser3(UserType),

    /// The light is held by a higher tier.
    #[error("light is held by a {0} user")]
    Outranked(UserType),

    /// The incumbent `USER3` is at least as close to the light.
    #[error("incumbent {incumbent} is at least as close to the light")]
    IncumbentCloser {
        /// Current owner.
        incumbent: String,
    },

    /// Distances cannot be compared before `location` has been received.
    #[error("light location has not been set")]
    LocationUnset,
}
