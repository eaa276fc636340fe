//! Login check run at the start of every protected page.

use crate::backend::{SessionClient, SessionState};
use crate::config::ClientConfig;
use crate::dom::Navigator;
use crate::models::Profile;

/// Return the caller's profile, or send the browser to the login page.
///
/// `None` means a navigation has been started and the page must not render any
/// authenticated content. A failed request counts as unauthenticated.
pub async fn require_session<C, N>(client: &C, navigator: &N, config: &ClientConfig) -> Option<Profile>
where
    C: SessionClient,
    N: Navigator,
{
    match client.fetch_profile().await {
        Ok(SessionState::Authenticated(profile)) => {
            tracing::debug!("user is logged in: {:?}", profile);
            Some(profile)
        }
        Ok(SessionState::Unauthenticated) => {
            tracing::info!("user is not logged in, redirecting to {}", config.pages.login);
            navigator.navigate(&config.pages.login);
            None
        }
        Err(e) => {
            tracing::error!("profile request failed: {}", e);
            navigator.navigate(&config.pages.login);
            None
        }
    }
}
