//! Organization and space endpoints.

use super::{PendingRequest, PodioRestClient};

impl PodioRestClient {
    /// List the user's organizations. Send with GET.
    pub fn get_organizations(&self) -> PendingRequest<'_> {
        self.pending("/org/")
    }

    /// List the spaces of an organization. Send with GET.
    pub fn get_spaces_by_org_id(&self, org_id: u64) -> PendingRequest<'_> {
        self.pending(&format!("/space/org/{org_id}/"))
    }
}
