//! Login page and logout

use super::Outcome;
use crate::context::AppContext;
use harmony_core::{Authenticator, RequestId, Result, User};
use harmony_store::AuthAction;
use tracing::{info, warn};

/// Shown when email login fails
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";

/// Shown when demo login fails
pub const DEMO_LOGIN_FAILED: &str = "Something went wrong. Please try again.";

/// Log in with email and password
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Outcome<User> {
    let request = begin(ctx).await;
    let result = ctx.providers.auth.login(email, password).await;
    finish(ctx, request, result, INVALID_CREDENTIALS).await
}

/// Log in to the demo account with every service connected
pub async fn demo_login(ctx: &AppContext) -> Outcome<User> {
    let request = begin(ctx).await;
    let result = ctx.providers.auth.demo_login().await;
    finish(ctx, request, result, DEMO_LOGIN_FAILED).await
}

pub async fn logout(ctx: &AppContext) {
    ctx.dispatch(AuthAction::Logout).await;
    info!("Logged out");
}

async fn begin(ctx: &AppContext) -> RequestId {
    let request = ctx.requests.issue();
    ctx.dispatch(AuthAction::BeginLogin(request)).await;
    request
}

async fn finish(
    ctx: &AppContext,
    request: RequestId,
    result: Result<User>,
    failure: &str,
) -> Outcome<User> {
    let mut store = ctx.store.lock().await;
    let current = store.state().auth.pending_login == Some(request);

    match result {
        Ok(user) => {
            store.dispatch(AuthAction::LoginSucceeded {
                request,
                user: user.clone(),
            });
            if current {
                info!(user_id = %user.id, %request, "Login complete");
                Outcome::Applied(user)
            } else {
                Outcome::Superseded
            }
        }
        Err(e) => {
            warn!(error = %e, %request, "Login failed");
            store.dispatch(AuthAction::LoginFailed {
                request,
                message: failure.to_string(),
            });
            if current {
                Outcome::Failed(failure.to_string())
            } else {
                Outcome::Superseded
            }
        }
    }
}
