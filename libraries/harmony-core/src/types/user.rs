/// User and connected-service domain types
use crate::types::{Provider, ServiceId, UserId};
use serde::{Deserialize, Serialize};

/// A streaming-service connection on a user account
///
/// Token fields are only ever populated while `connected` is true; use the
/// constructors and [`Service::disconnect`] rather than setting them by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Unique connection identifier, e.g. `spotify-1`
    pub id: ServiceId,

    /// Provider tag
    #[serde(rename = "name")]
    pub provider: Provider,

    /// Whether the connection is live
    pub connected: bool,

    /// Access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Refresh token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Access token expiry, epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl Service {
    /// Create a live connection
    pub fn connected(
        id: impl Into<ServiceId>,
        provider: Provider,
        token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            provider,
            connected: true,
            token: Some(token.into()),
            refresh_token: Some(refresh_token.into()),
            expires_at: Some(expires_at),
        }
    }

    /// Create a known-but-disconnected service entry
    pub fn disconnected(id: impl Into<ServiceId>, provider: Provider) -> Self {
        Self {
            id: id.into(),
            provider,
            connected: false,
            token: None,
            refresh_token: None,
            expires_at: None,
        }
    }

    /// Mark the service disconnected and drop its credentials
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.token = None;
        self.refresh_token = None;
        self.expires_at = None;
    }

    /// Whether the access token has expired at `now_ms` (epoch milliseconds)
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires_at.is_some_and(|expiry| expiry <= now_ms)
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login email
    pub email: String,

    /// Display name
    pub name: String,

    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Known service connections
    #[serde(default)]
    pub services: Vec<Service>,
}

impl User {
    /// Create a user with no service connections
    pub fn new(id: impl Into<UserId>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            avatar: None,
            services: Vec::new(),
        }
    }

    /// Look up a service entry by id
    pub fn service(&self, id: &ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| &s.id == id)
    }

    /// Replace the entry with the same id, or append a new one
    pub fn upsert_service(&mut self, service: Service) {
        match self.services.iter_mut().find(|s| s.id == service.id) {
            Some(existing) => *existing = service,
            None => self.services.push(service),
        }
    }

    /// Disconnect a service by id
    ///
    /// Returns `false` when no entry has that id.
    pub fn disconnect_service(&mut self, id: &ServiceId) -> bool {
        match self.services.iter_mut().find(|s| &s.id == id) {
            Some(service) => {
                service.disconnect();
                true
            }
            None => false,
        }
    }

    /// Providers with at least one live connection
    pub fn connected_providers(&self) -> Vec<Provider> {
        let mut providers: Vec<Provider> = self
            .services
            .iter()
            .filter(|s| s.connected)
            .map(|s| s.provider)
            .collect();
        providers.sort();
        providers.dedup();
        providers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> User {
        let mut user = User::new("123456", "demo@example.com", "Demo User");
        user.services.push(Service::connected(
            "spotify-1",
            Provider::Spotify,
            "mock-token",
            "mock-refresh-token",
            1_000,
        ));
        user.services
            .push(Service::disconnected("deezer-1", Provider::Deezer));
        user
    }

    #[test]
    fn upsert_replaces_by_id() {
        let mut user = demo_user();
        user.upsert_service(Service::connected(
            "deezer-1",
            Provider::Deezer,
            "t",
            "r",
            5,
        ));
        assert_eq!(user.services.len(), 2);
        assert!(user.service(&ServiceId::new("deezer-1")).unwrap().connected);

        user.upsert_service(Service::disconnected("soundcloud-9", Provider::SoundCloud));
        assert_eq!(user.services.len(), 3);
    }

    #[test]
    fn disconnect_clears_tokens() {
        let mut user = demo_user();
        assert!(user.disconnect_service(&ServiceId::new("spotify-1")));

        let service = user.service(&ServiceId::new("spotify-1")).unwrap();
        assert!(!service.connected);
        assert!(service.token.is_none());
        assert!(service.refresh_token.is_none());
        assert!(service.expires_at.is_none());

        assert!(!user.disconnect_service(&ServiceId::new("missing")));
    }

    #[test]
    fn serialized_shape_matches_session_record() {
        let user = demo_user();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["services"][0]["name"], "spotify");
        assert_eq!(json["services"][0]["refreshToken"], "mock-refresh-token");
        assert_eq!(json["services"][0]["expiresAt"], 1_000);
        // Disconnected services carry no token fields at all
        assert!(json["services"][1].get("token").is_none());

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn connected_providers_are_deduplicated() {
        let mut user = demo_user();
        user.services.push(Service::connected(
            "spotify-2",
            Provider::Spotify,
            "t",
            "r",
            0,
        ));
        assert_eq!(user.connected_providers(), vec![Provider::Spotify]);
    }

    #[test]
    fn expiry_check() {
        let service = Service::connected("s", Provider::Spotify, "t", "r", 100);
        assert!(!service.is_expired(99));
        assert!(service.is_expired(100));
        assert!(!Service::disconnected("d", Provider::Deezer).is_expired(i64::MAX));
    }
}
