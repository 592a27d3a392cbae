//! API context: the identity client and its session cache.
//!
//! DESIGN
//! ======
//! Nothing here is a global. `ApiContext` is built explicitly and handed to
//! the component tree through Leptos context. During SSR every render gets a
//! fresh context (`for_request`), so no session state leaks between
//! requests. In the browser one context lives for the whole page lifetime
//! (`browser`). Components only ever see `use_api_context`.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::{Arc, Mutex, OnceLock};

use leptos::prelude::*;

use super::api::{AUTH_API_BASE, HttpAuthBackend};
use super::types::Session;

/// Shared slot holding the last known session. Clones share the slot.
#[derive(Clone, Debug, Default)]
pub struct SessionCache {
    slot: Arc<Mutex<Option<Session>>>,
}

impl SessionCache {
    pub fn get(&self) -> Option<Session> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    pub fn set(&self, session: Session) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(session);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }

    /// Whether both handles point at the same slot.
    pub fn shares_slot_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

/// How long a context is meant to live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextLifetime {
    /// One server render.
    Request,
    /// The browser page.
    Process,
}

#[derive(Clone, Debug)]
pub struct ApiContext {
    auth: HttpAuthBackend,
    lifetime: ContextLifetime,
}

static BROWSER_CONTEXT: OnceLock<ApiContext> = OnceLock::new();

impl ApiContext {
    fn build(base: &str, lifetime: ContextLifetime) -> Self {
        Self { auth: HttpAuthBackend::new(base, SessionCache::default()), lifetime }
    }

    /// Fresh context for one server-side render.
    pub fn for_request(base: &str) -> Self {
        Self::build(base, ContextLifetime::Request)
    }

    /// The page-wide context, created on first use.
    pub fn browser() -> Self {
        BROWSER_CONTEXT
            .get_or_init(|| Self::build(AUTH_API_BASE, ContextLifetime::Process))
            .clone()
    }

    pub fn auth(&self) -> &HttpAuthBackend {
        &self.auth
    }

    pub fn sessions(&self) -> &SessionCache {
        self.auth.sessions()
    }

    pub fn lifetime(&self) -> ContextLifetime {
        self.lifetime
    }
}

/// Build the context appropriate for the current build target and provide it
/// to the component tree.
pub fn provide_api_context() -> ApiContext {
    #[cfg(feature = "hydrate")]
    let ctx = ApiContext::browser();
    #[cfg(not(feature = "hydrate"))]
    let ctx = ApiContext::for_request(AUTH_API_BASE);
    provide_context(ctx.clone());
    ctx
}

/// Context provided by `provide_api_context`.
pub fn use_api_context() -> ApiContext {
    expect_context::<ApiContext>()
}
