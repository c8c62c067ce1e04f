use crate::shared::action_error::ActionError;
use crate::shared::fetcher::{Fetcher, SuccessMarker, NO_BODY};
use crate::shared::resource::{ActionMessages, Reconcile};
use contracts::domain::a003_maintenance::aggregate::{
    MaintenanceStatus, MaintenanceTask, ModifyMaintenanceRequest, PendingListResponse,
};

const FETCH_PENDING: &str = "/maintenance/fetch_maintenace_pending";
const MODIFY_PENDING: &str = "/maintenance/modify_maintenance_pending";
const LOAD_TODAY: &str = "/maintenance/load_today";

const VALID: SuccessMarker = SuccessMarker::truthy("valid");

pub fn load_messages() -> ActionMessages {
    ActionMessages::load(
        "Failed to fetch pending maintenance data.",
        "Error fetching maintenance data.",
    )
}

pub fn complete_messages() -> ActionMessages {
    ActionMessages::new(
        "Maintenance task marked as completed!",
        "Error modifying maintenance status.",
    )
    .rejected("Failed to modify maintenance status.")
}

pub fn load_today_messages() -> ActionMessages {
    ActionMessages::new(
        "Today's maintenance tasks loaded successfully!",
        "Error loading today's maintenance.",
    )
}

pub async fn fetch_pending(fetcher: &Fetcher) -> Result<Vec<MaintenanceTask>, ActionError> {
    let response: PendingListResponse = fetcher.post_as(FETCH_PENDING, NO_BODY, VALID).await?;
    Ok(response.pending_list.unwrap_or_default())
}

/// Marks a task completed. The server answers with the refreshed pending
/// list when it has one; otherwise only the task's status changes.
pub async fn mark_completed(
    fetcher: &Fetcher,
    maintenance_id: i64,
) -> Result<Reconcile<MaintenanceTask>, ActionError> {
    let request = ModifyMaintenanceRequest::completed(maintenance_id);
    let response: PendingListResponse = fetcher.post_as(MODIFY_PENDING, Some(&request), VALID).await?;
    Ok(match response.pending_list {
        Some(list) => Reconcile::ReplaceAll(list),
        None => Reconcile::PatchStatus {
            id: maintenance_id,
            status: MaintenanceStatus::Completed.as_str().to_string(),
        },
    })
}

/// Asks the server to generate today's tasks. The caller reloads afterwards.
pub async fn load_today(fetcher: &Fetcher) -> Result<Reconcile<MaintenanceTask>, ActionError> {
    fetcher.post(LOAD_TODAY, NO_BODY, SuccessMarker::HttpOk).await?;
    Ok(Reconcile::Nothing)
}
