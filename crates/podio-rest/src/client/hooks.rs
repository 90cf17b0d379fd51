//! Webhook endpoints.

use super::{PendingRequest, PodioRestClient};
use crate::error::{Error, ErrorKind, Result};
use crate::hook::{CreateHookPayload, HookRef, ValidateHookPayload};
use crate::request::RequestPayload;

impl PodioRestClient {
    /// Register a hook on an app, space or app field. Send with POST.
    ///
    /// `url` must be an absolute URL and `hook_type` non-empty
    /// (e.g. `item.create`).
    pub fn create_hook(
        &self,
        hook_ref: HookRef,
        url: &str,
        hook_type: &str,
    ) -> Result<PendingRequest<'_>> {
        url::Url::parse(url).map_err(|e| {
            Error::with_source(ErrorKind::InvalidInput(format!("invalid hook URL: {e}")), e)
        })?;

        if hook_type.trim().is_empty() {
            return Err(Error::invalid_input("hook type must not be empty"));
        }

        Ok(self.pending_with(
            &hook_ref.path(),
            RequestPayload::CreateHook(CreateHookPayload {
                url: url.to_string(),
                hook_type: hook_type.to_string(),
            }),
        ))
    }

    /// Confirm a hook with the code Podio sent to its URL. Send with POST.
    pub fn validate_hook(&self, hook_id: u64, code: &str) -> PendingRequest<'_> {
        self.pending_with(
            &format!("/hook/{hook_id}/verify/validate"),
            RequestPayload::ValidateHook(ValidateHookPayload {
                code: code.to_string(),
            }),
        )
    }

    /// List the hooks on an app, space or app field. Send with GET.
    pub fn get_hooks(&self, hook_ref: HookRef) -> PendingRequest<'_> {
        self.pending(&hook_ref.path())
    }

    /// Ask Podio to send a new verification code to the hook URL. Send with POST.
    pub fn request_hook_verification(&self, hook_id: u64) -> PendingRequest<'_> {
        self.pending(&format!("/hook/{hook_id}/verify/request"))
    }

    /// Remove a hook. Send with DELETE.
    pub fn delete_hook(&self, hook_id: u64) -> PendingRequest<'_> {
        self.pending(&format!("/hook/{hook_id}"))
    }
}
