//! Mock authenticator and service connector
//!
//! Login accepts any non-blank email and password. Email login connects only
//! Spotify; the demo account comes back with every service connected. All
//! tokens are mock values that expire one hour after issue.

use crate::network::SimulatedNetwork;
use async_trait::async_trait;
use chrono::Utc;
use harmony_core::{
    Authenticator, HarmonyError, Provider, Result, Service, ServiceConnector, User,
};
use std::time::Duration;
use tracing::info;

pub const DEMO_USER_ID: &str = "123456";
pub const DEMO_USER_NAME: &str = "Demo User";
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const MOCK_TOKEN: &str = "mock-token";
pub const MOCK_REFRESH_TOKEN: &str = "mock-refresh-token";

/// Token lifetime in milliseconds
pub const TOKEN_TTL_MS: i64 = 3_600_000;

fn live_service(id: String, provider: Provider) -> Service {
    Service::connected(
        id,
        provider,
        MOCK_TOKEN,
        MOCK_REFRESH_TOKEN,
        Utc::now().timestamp_millis() + TOKEN_TTL_MS,
    )
}

fn default_service_id(provider: Provider) -> String {
    format!("{}-1", provider.as_str())
}

#[derive(Debug, Default)]
pub struct MockAuthenticator {
    network: SimulatedNetwork,
}

impl MockAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self {
            network: SimulatedNetwork::new(delay),
        }
    }

    pub fn network(&self) -> &SimulatedNetwork {
        &self.network
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn login(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(HarmonyError::invalid_input("email and password are required"));
        }

        self.network.round_trip("auth.login").await?;

        let mut user = User::new(DEMO_USER_ID, email, DEMO_USER_NAME);
        for provider in Provider::ALL {
            let id = default_service_id(provider);
            user.upsert_service(if provider == Provider::Spotify {
                live_service(id, provider)
            } else {
                Service::disconnected(id, provider)
            });
        }

        info!(email, "Logged in");
        Ok(user)
    }

    async fn demo_login(&self) -> Result<User> {
        self.network.round_trip("auth.demo_login").await?;

        let mut user = User::new(DEMO_USER_ID, DEMO_EMAIL, DEMO_USER_NAME);
        for provider in Provider::ALL {
            user.upsert_service(live_service(default_service_id(provider), provider));
        }

        info!("Logged in to demo account");
        Ok(user)
    }
}

/// OAuth-style connect that always succeeds after its delay
#[derive(Debug, Default)]
pub struct MockServiceConnector {
    network: SimulatedNetwork,
}

impl MockServiceConnector {
    pub fn new(delay: Duration) -> Self {
        Self {
            network: SimulatedNetwork::new(delay),
        }
    }

    pub fn network(&self) -> &SimulatedNetwork {
        &self.network
    }
}

#[async_trait]
impl ServiceConnector for MockServiceConnector {
    async fn connect(&self, provider: Provider) -> Result<Service> {
        self.network.round_trip("service.connect").await?;

        // Ids are stamped when the connection completes
        let id = format!("{}-{}", provider.as_str(), Utc::now().timestamp_millis());
        info!(%provider, service_id = %id, "Service connected");
        Ok(live_service(id, provider))
    }
}
