//! Settings screen: service connections and crossfade

use super::Outcome;
use crate::context::AppContext;
use harmony_core::{HarmonyError, Provider, RequestId, Result, Service, ServiceConnector, ServiceId};
use harmony_store::{AuthAction, PlayerAction};
use tracing::{info, warn};

/// Shown when a connection attempt fails
pub const CONNECT_FAILED: &str = "Could not connect. Please try again.";

/// Connect `provider` to the logged-in user
///
/// Connecting the same provider again while a connection is in flight
/// supersedes the earlier attempt.
pub async fn connect(ctx: &AppContext, provider: Provider) -> Result<Outcome<Service>> {
    if !ctx.is_authenticated().await {
        return Err(HarmonyError::NotAuthenticated);
    }

    let request = ctx.requests.issue();
    ctx.connecting.lock().await.insert(provider, request);

    let result = ctx.providers.connector.connect(provider).await;

    if !finish_connecting(ctx, provider, request).await {
        return Ok(Outcome::Superseded);
    }

    match result {
        Ok(service) => {
            ctx.dispatch(AuthAction::ConnectService(service.clone())).await;
            info!(service_id = %service.id, %provider, "Service connected");
            Ok(Outcome::Applied(service))
        }
        Err(e) => {
            warn!(error = %e, %provider, "Service connection failed");
            Ok(Outcome::Failed(CONNECT_FAILED.to_string()))
        }
    }
}

/// Clear the in-flight marker if `request` still owns it
async fn finish_connecting(ctx: &AppContext, provider: Provider, request: RequestId) -> bool {
    let mut connecting = ctx.connecting.lock().await;
    if connecting.get(&provider) == Some(&request) {
        connecting.remove(&provider);
        true
    } else {
        false
    }
}

/// Providers with a connection in flight
pub async fn connecting(ctx: &AppContext) -> Vec<Provider> {
    let mut providers: Vec<Provider> = ctx.connecting.lock().await.keys().copied().collect();
    providers.sort_by_key(|p| p.as_str());
    providers
}

pub async fn disconnect(ctx: &AppContext, id: &ServiceId) -> Result<()> {
    let mut store = ctx.store.lock().await;
    let user = store.user().ok_or(HarmonyError::NotAuthenticated)?;
    if user.service(id).is_none() {
        return Err(HarmonyError::ServiceNotFound(id.clone()));
    }

    store.dispatch(AuthAction::DisconnectService(id.clone()));
    info!(service_id = %id, "Service disconnected");
    Ok(())
}

/// Set the crossfade, clamped to the player's range; returns the applied value
pub async fn set_crossfade(ctx: &AppContext, seconds: u8) -> u8 {
    let mut store = ctx.store.lock().await;
    store.dispatch(PlayerAction::SetCrossfade(seconds));
    store.state().player.crossfade()
}
