//! Auth segment: the logged-in user and their service connections

use harmony_core::{RequestId, Service, ServiceId, User};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,

    /// Login request whose response is still wanted
    pub pending_login: Option<RequestId>,
}

impl AuthState {
    /// Start from a rehydrated user, if any
    pub fn with_user(user: Option<User>) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::SetUser(user) => {
                self.user = Some(user);
                self.error = None;
            }
            AuthAction::Logout => {
                self.user = None;
                self.pending_login = None;
                self.is_loading = false;
            }
            AuthAction::SetLoading(loading) => self.is_loading = loading,
            AuthAction::SetError(error) => self.error = error,
            AuthAction::ConnectService(service) => {
                if let Some(user) = &mut self.user {
                    user.upsert_service(service);
                }
            }
            AuthAction::DisconnectService(id) => {
                if let Some(user) = &mut self.user {
                    if !user.disconnect_service(&id) {
                        debug!(service_id = %id, "Disconnect for unknown service ignored");
                    }
                }
            }
            AuthAction::BeginLogin(request) => {
                self.pending_login = Some(request);
                self.is_loading = true;
                self.error = None;
            }
            AuthAction::LoginSucceeded { request, user } => {
                if self.take_pending(request) {
                    self.user = Some(user);
                    self.error = None;
                }
            }
            AuthAction::LoginFailed { request, message } => {
                if self.take_pending(request) {
                    self.error = Some(message);
                }
            }
        }
    }

    /// Clear the pending login if `request` is it
    fn take_pending(&mut self, request: RequestId) -> bool {
        if self.pending_login == Some(request) {
            self.pending_login = None;
            self.is_loading = false;
            true
        } else {
            debug!(%request, pending = ?self.pending_login, "Stale login response dropped");
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    SetUser(User),
    Logout,
    SetLoading(bool),
    SetError(Option<String>),
    ConnectService(Service),
    DisconnectService(ServiceId),
    BeginLogin(RequestId),
    LoginSucceeded { request: RequestId, user: User },
    LoginFailed { request: RequestId, message: String },
}

impl AuthAction {
    pub fn name(&self) -> &'static str {
        match self {
            AuthAction::SetUser(_) => "auth/setUser",
            AuthAction::Logout => "auth/logout",
            AuthAction::SetLoading(_) => "auth/setLoading",
            AuthAction::SetError(_) => "auth/setError",
            AuthAction::ConnectService(_) => "auth/connectService",
            AuthAction::DisconnectService(_) => "auth/disconnectService",
            AuthAction::BeginLogin(_) => "auth/beginLogin",
            AuthAction::LoginSucceeded { .. } => "auth/loginSucceeded",
            AuthAction::LoginFailed { .. } => "auth/loginFailed",
        }
    }

    /// Whether this action can change the persisted user
    pub(crate) fn touches_user(&self) -> bool {
        matches!(
            self,
            AuthAction::SetUser(_)
                | AuthAction::Logout
                | AuthAction::ConnectService(_)
                | AuthAction::DisconnectService(_)
                | AuthAction::LoginSucceeded { .. }
        )
    }
}
