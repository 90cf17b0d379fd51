//! App endpoints.

use super::{PendingRequest, PodioRestClient};

impl PodioRestClient {
    /// List the apps the user can see, demo apps excluded. Send with GET.
    pub fn get_apps(&self) -> PendingRequest<'_> {
        self.pending("/app/?exclude_demo=true&limit=100")
    }

    /// Fetch one app. Send with GET.
    pub fn get_app_by_id(&self, app_id: u64) -> PendingRequest<'_> {
        self.pending(&format!("/app/{app_id}"))
    }

    /// List the apps of a space. Send with GET.
    pub fn get_apps_by_space_id(&self, space_id: u64) -> PendingRequest<'_> {
        self.pending(&format!("/app/space/{space_id}/"))
    }
}
