//! Webhook references and payloads.

use serde::Serialize;

/// The object a hook is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookRef {
    App(u64),
    Space(u64),
    AppField(u64),
}

impl HookRef {
    /// The `ref_type` path segment.
    pub fn ref_type(&self) -> &'static str {
        match self {
            HookRef::App(_) => "app",
            HookRef::Space(_) => "space",
            HookRef::AppField(_) => "app_field",
        }
    }

    /// The `ref_id` path segment.
    pub fn ref_id(&self) -> u64 {
        match *self {
            HookRef::App(id) | HookRef::Space(id) | HookRef::AppField(id) => id,
        }
    }

    /// `/hook/{ref_type}/{ref_id}/`
    pub(crate) fn path(&self) -> String {
        format!("/hook/{}/{}/", self.ref_type(), self.ref_id())
    }
}

/// Body of a hook creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateHookPayload {
    /// Callback URL Podio will POST events to.
    pub url: String,
    /// Event type, e.g. `item.create`.
    #[serde(rename = "type")]
    pub hook_type: String,
}

/// Body of a hook validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateHookPayload {
    /// Code Podio sent to the callback URL.
    pub code: String,
}
