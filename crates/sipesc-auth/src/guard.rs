//! Guard policies and their decision state machine.
//!
//! A guard sits at a boundary (a route, a block of content) and turns one
//! access decision into a render outcome plus an optional navigation. Three
//! policies exist:
//!
//! - [`GuardPolicy::ProtectedRoute`]: role allow-list with a redirect target
//! - [`GuardPolicy::Permission`]: a `(module, action)` permission with optional fallback
//! - [`GuardPolicy::Visualization`]: a module with optional fallback
//!
//! Every guard starts in [`GuardState::Loading`] and moves to exactly one
//! terminal state once the session resolves. [`GuardCycle`] tracks one mount
//! of a guard so the navigation side effect fires at most once per decision.

use sipesc_config::RoutesConfig;
use sipesc_core::permissions;
use sipesc_models::{Module, Principal, Role};

use crate::access;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardPolicy {
    ProtectedRoute {
        allowed_roles: Vec<Role>,
        /// Falls back to the dashboard route when `None`.
        redirect_to: Option<String>,
    },
    Permission {
        module: Module,
        action: String,
        has_fallback: bool,
    },
    Visualization {
        module: Module,
        has_fallback: bool,
    },
}

impl GuardPolicy {
    pub fn protected_route(allowed_roles: impl Into<Vec<Role>>) -> Self {
        Self::ProtectedRoute {
            allowed_roles: allowed_roles.into(),
            redirect_to: None,
        }
    }

    pub fn permission(module: Module, action: impl Into<String>) -> Self {
        Self::Permission {
            module,
            action: action.into(),
            has_fallback: false,
        }
    }

    pub fn visualization(module: Module) -> Self {
        Self::Visualization {
            module,
            has_fallback: false,
        }
    }

    /// Sets the redirect target of a protected route. Other policies are unchanged.
    #[must_use]
    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        if let Self::ProtectedRoute { redirect_to, .. } = &mut self {
            *redirect_to = Some(target.into());
        }
        self
    }

    /// Marks a permission or visualization guard as carrying fallback content.
    #[must_use]
    pub fn with_fallback(mut self) -> Self {
        match &mut self {
            Self::Permission { has_fallback, .. } | Self::Visualization { has_fallback, .. } => {
                *has_fallback = true;
            }
            Self::ProtectedRoute { .. } => {}
        }
        self
    }

    /// Short name used in logs and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProtectedRoute { .. } => "protected_route",
            Self::Permission { .. } => "permission",
            Self::Visualization { .. } => "visualization",
        }
    }

    fn has_fallback(&self) -> bool {
        match self {
            Self::ProtectedRoute { .. } => false,
            Self::Permission { has_fallback, .. } | Self::Visualization { has_fallback, .. } => {
                *has_fallback
            }
        }
    }

    /// Whether a principal without full access passes this policy.
    fn allows_scoped(&self, principal: &Principal) -> bool {
        let p = Some(principal);
        match self {
            Self::ProtectedRoute { allowed_roles, .. } => allowed_roles.contains(&principal.role),
            Self::Permission { module, action, .. } => {
                access::has_permission(p, &permissions::permission(module.as_str(), action))
            }
            Self::Visualization {
                module: Module::BiPanel,
                ..
            } => access::can_access_bi(p),
            Self::Visualization { module, .. } => access::is_module_enabled(p, *module),
        }
    }

    /// Resolves a loaded session into a terminal state.
    pub fn resolve(&self, principal: Option<&Principal>) -> GuardState {
        match principal {
            None => GuardState::Unauthenticated,
            Some(p) if access::has_full_access(Some(p)) => GuardState::AuthorizedFullAccess,
            Some(p) if self.allows_scoped(p) => GuardState::AuthorizedScoped,
            Some(_) => GuardState::Denied,
        }
    }

    /// What to render in `state`, and where to navigate if anywhere.
    pub fn outcome(&self, state: GuardState, routes: &RoutesConfig) -> (Render, Option<String>) {
        if state.is_authorized() {
            return (Render::Children, None);
        }

        match self {
            Self::ProtectedRoute { redirect_to, .. } => match state {
                GuardState::Loading => (Render::Placeholder, None),
                GuardState::Unauthenticated => (Render::Nothing, Some(routes.login_route.clone())),
                _ => (
                    Render::Nothing,
                    Some(
                        redirect_to
                            .clone()
                            .unwrap_or_else(|| routes.dashboard_route.clone()),
                    ),
                ),
            },
            Self::Permission { .. } => match state {
                GuardState::Loading => (Render::Nothing, None),
                _ if self.has_fallback() => (Render::Fallback, None),
                _ => (Render::Nothing, None),
            },
            Self::Visualization { .. } => match state {
                GuardState::Loading => (Render::Nothing, None),
                _ if self.has_fallback() => (Render::Fallback, None),
                GuardState::Unauthenticated => (Render::Nothing, Some(routes.login_route.clone())),
                _ => (Render::Nothing, Some(routes.dashboard_route.clone())),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    AuthorizedFullAccess,
    AuthorizedScoped,
    Denied,
}

impl GuardState {
    pub fn is_authorized(self) -> bool {
        matches!(self, Self::AuthorizedFullAccess | Self::AuthorizedScoped)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Unauthenticated => "unauthenticated",
            Self::AuthorizedFullAccess => "authorized_full_access",
            Self::AuthorizedScoped => "authorized_scoped",
            Self::Denied => "denied",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Loading indicator shown while the session is unresolved.
    Placeholder,
    Children,
    Fallback,
    Nothing,
}

/// The session as a guard observes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView<'a> {
    Loading,
    Ready(Option<&'a Principal>),
}

/// One mount of a guard.
///
/// Feeding the same resolved session to [`GuardCycle::observe`] repeatedly is
/// a no-op, so the navigation produced by a decision is handed out once. A
/// different principal (or a return to loading) starts a fresh cycle.
#[derive(Debug, Clone)]
pub struct GuardCycle {
    policy: GuardPolicy,
    routes: RoutesConfig,
    state: GuardState,
    resolved_for: Option<Option<Principal>>,
    pending_navigation: Option<String>,
    mounted: bool,
}

impl GuardCycle {
    pub fn mount(policy: GuardPolicy, routes: RoutesConfig) -> Self {
        Self {
            policy,
            routes,
            state: GuardState::Loading,
            resolved_for: None,
            pending_navigation: None,
            mounted: true,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Feeds the current session into the cycle and returns the resulting state.
    pub fn observe(&mut self, session: SessionView<'_>) -> GuardState {
        if !self.mounted {
            return self.state;
        }

        let principal = match session {
            SessionView::Loading => {
                self.state = GuardState::Loading;
                self.resolved_for = None;
                self.pending_navigation = None;
                return self.state;
            }
            SessionView::Ready(principal) => principal,
        };

        if matches!(&self.resolved_for, Some(previous) if previous.as_ref() == principal) {
            return self.state;
        }

        self.state = self.policy.resolve(principal);
        self.resolved_for = Some(principal.cloned());
        self.pending_navigation = self.policy.outcome(self.state, &self.routes).1;
        self.state
    }

    pub fn render(&self) -> Render {
        self.policy.outcome(self.state, &self.routes).0
    }

    /// Takes the navigation for the current decision. Returns `Some` at most once per cycle.
    pub fn take_navigation(&mut self) -> Option<String> {
        if !self.mounted {
            return None;
        }
        self.pending_navigation.take()
    }

    /// Cancels any navigation that has not been taken yet.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending_navigation = None;
    }
}
