//! Session state and the authentication seam.
//!
//! The session is one of three states and the app routes on it alone. There
//! is no credential check anywhere in this crate: a real deployment plugs an
//! [`Authenticator`] backed by its identity service.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

use crate::error::AuthError;
use crate::user::{ProfileUpdate, UserProfile};

/// Default simulated latency of the demo authenticator.
pub const DEFAULT_AUTH_DELAY: Duration = Duration::from_millis(1000);

/// Source of an existing sign-in at startup.
#[async_trait]
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Look up an existing session. `Ok(None)` means nobody is signed in.
    async fn restore(&self) -> Result<Option<UserProfile>, AuthError>;

    /// Short name for logs (e.g., "demo").
    fn name(&self) -> &'static str;
}

/// Always signs in the demo profile after a fixed delay.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    delay: Duration,
    profile: UserProfile,
}

impl DemoAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            profile: UserProfile::demo(),
        }
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_DELAY)
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn restore(&self) -> Result<Option<UserProfile>, AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Some(self.profile.clone()))
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting on the authenticator.
    Loading,
    Unauthenticated,
    Authenticated(UserProfile),
}

/// Top-level screen group for a session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Splash,
    Auth,
    Main,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Splash => "splash",
            Route::Auth => "auth",
            Route::Main => "main",
        }
    }
}

/// Holds the session state machine. Starts in `Loading`; `restore` settles
/// it, after which it moves freely between signed in and signed out.
#[derive(Debug)]
pub struct SessionProvider {
    state: SessionState,
    authenticator: Box<dyn Authenticator>,
}

impl SessionProvider {
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            state: SessionState::Loading,
            authenticator,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn route(&self) -> Route {
        match self.state {
            SessionState::Loading => Route::Splash,
            SessionState::Unauthenticated => Route::Auth,
            SessionState::Authenticated(_) => Route::Main,
        }
    }

    /// Ask the authenticator for an existing session. Any failure leaves the
    /// session signed out; the error is still returned.
    pub async fn restore(&mut self) -> Result<(), AuthError> {
        match self.authenticator.restore().await {
            Ok(Some(profile)) => {
                tracing::info!(
                    user_id = %profile.id,
                    authenticator = self.authenticator.name(),
                    "Restored session"
                );
                self.state = SessionState::Authenticated(profile);
                Ok(())
            }
            Ok(None) => {
                tracing::info!("No existing session found");
                self.state = SessionState::Unauthenticated;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    authenticator = self.authenticator.name(),
                    "Session restore failed: {}",
                    e
                );
                self.state = SessionState::Unauthenticated;
                Err(e)
            }
        }
    }

    /// Sign in with `profile`, or the demo profile when none is given.
    pub fn login(&mut self, profile: Option<UserProfile>) {
        let profile = profile.unwrap_or_else(UserProfile::demo);
        tracing::info!(user_id = %profile.id, "Logged in");
        self.state = SessionState::Authenticated(profile);
    }

    /// Sign in a freshly registered user under a new id.
    pub fn sign_up(&mut self, name: &str, email: &str) -> UserProfile {
        let profile = UserProfile {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.login(Some(profile.clone()));
        profile
    }

    pub fn logout(&mut self) {
        if let Some(profile) = self.profile() {
            tracing::info!(user_id = %profile.id, "Logged out");
        }
        self.state = SessionState::Unauthenticated;
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&UserProfile, AuthError> {
        match &mut self.state {
            SessionState::Authenticated(profile) => {
                profile.apply(update);
                Ok(&*profile)
            }
            _ => Err(AuthError::NotAuthenticated),
        }
    }
}
