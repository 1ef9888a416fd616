//! Session gate primitives.
//!
//! # Design
//! - Keep the session as plain data so the UI store can hold it directly.
//! - Route the login trigger through an injected [`Authenticator`] seam.
//! - The stub authenticator accepts every trigger; there is no logout.

use crate::error::AuthError;

/// Capability that decides whether a login trigger opens the session.
pub trait Authenticator {
    /// Attempt to authenticate the current user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] when the session must stay closed.
    fn authenticate(&self) -> Result<(), AuthError>;
}

/// Authenticator that opens the session on any trigger without checking credentials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StubAuthenticator;

impl Authenticator for StubAuthenticator {
    fn authenticate(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

/// In-memory session flag; starts closed and is never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the login trigger has opened the session.
    pub is_authenticated: bool,
}

impl SessionState {
    /// Open the session through the given authenticator.
    ///
    /// Opening an already open session is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates the authenticator's rejection; the session stays closed.
    pub fn open<A: Authenticator + ?Sized>(&mut self, authenticator: &A) -> Result<(), AuthError> {
        if self.is_authenticated {
            return Ok(());
        }
        authenticator.authenticate()?;
        self.is_authenticated = true;
        tracing::info!("session opened");
        Ok(())
    }
}

/// Session state bundled with the authenticator that guards it.
#[derive(Debug, Default)]
pub struct SessionGate<A> {
    authenticator: A,
    state: SessionState,
}

impl<A: Authenticator> SessionGate<A> {
    /// Create a closed gate.
    #[must_use]
    pub fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            state: SessionState::default(),
        }
    }

    /// Handle the login trigger.
    ///
    /// # Errors
    ///
    /// Returns the authenticator's rejection.
    pub fn login(&mut self) -> Result<(), AuthError> {
        self.state.open(&self.authenticator)
    }

    /// Whether the gate is open.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// Snapshot of the session flag.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }
}
