use crate::shared::action_error::ActionError;
use crate::shared::fetcher::{Fetcher, SuccessMarker, NO_BODY};
use crate::shared::resource::{ActionMessages, Reconcile};
use contracts::domain::a004_requirement::aggregate::{
    ModifyRequirementRequest, NewRequirement, Requirement, RequirementListResponse, STATUS_COMPLETED,
    STATUS_PENDING,
};

const FETCH_REQUIREMENTS: &str = "/maintenance/fetch_requirements";
const MODIFY_REQUIREMENTS: &str = "/maintenance/modify_requirements";
const ADD_REQUIREMENTS: &str = "/maintenance/add_requirements";

pub fn load_messages() -> ActionMessages {
    ActionMessages::load("Error fetching requirements.", "Error fetching requirements.")
}

pub fn complete_messages() -> ActionMessages {
    ActionMessages::new(
        "Requirement marked as completed!",
        "Error modifying requirement status.",
    )
    .rejected("Failed to modify requirement status.")
}

pub fn add_messages() -> ActionMessages {
    ActionMessages::new("Requirement added successfully!", "Error adding requirement.")
        .rejected("Failed to add requirement.")
}

pub async fn fetch_requirements(fetcher: &Fetcher) -> Result<Vec<Requirement>, ActionError> {
    let response: RequirementListResponse = fetcher
        .post_as(FETCH_REQUIREMENTS, NO_BODY, SuccessMarker::HttpOk)
        .await?;
    Ok(response.fetched_data)
}

pub async fn mark_completed(
    fetcher: &Fetcher,
    requirement_id: i64,
) -> Result<Reconcile<Requirement>, ActionError> {
    let request = ModifyRequirementRequest::completed(requirement_id);
    fetcher
        .post(
            MODIFY_REQUIREMENTS,
            Some(&request),
            SuccessMarker::status(STATUS_COMPLETED),
        )
        .await?;
    Ok(Reconcile::PatchStatus {
        id: requirement_id,
        status: STATUS_COMPLETED.to_string(),
    })
}

/// Files a new requirement. It shows up in the list on the next load.
pub async fn add_requirement(
    fetcher: &Fetcher,
    requirement: NewRequirement,
) -> Result<Reconcile<Requirement>, ActionError> {
    ActionError::check(requirement.validate())?;
    fetcher
        .post(
            ADD_REQUIREMENTS,
            Some(&requirement),
            SuccessMarker::status(STATUS_PENDING),
        )
        .await?;
    log::info!("requirement filed for room {}", requirement.room_id);
    Ok(Reconcile::Nothing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::ListState;
    use crate::shared::testing::RecordingTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn requirement(id: i64, status: &str) -> Requirement {
        Requirement {
            requirement_id: id,
            status: status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn list_without_fetched_data_is_empty() {
        let t = RecordingTransport::new();
        t.reply(200, json!({}));
        assert!(block_on(fetch_requirements(&t.fetcher())).unwrap().is_empty());
    }

    #[test]
    fn completion_patches_only_that_requirement() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "completed" }));
        let mut state = ListState::new();
        state.items = vec![requirement(1, "pending"), requirement(2, "pending")];
        state.begin_mutation();
        let result = block_on(mark_completed(&t.fetcher(), 2));
        state.finish_mutation(result, &complete_messages());
        assert_eq!(
            state.items,
            vec![requirement(1, "pending"), requirement(2, "completed")]
        );
    }

    #[test]
    fn other_status_is_a_rejection() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "pending" }));
        let err = block_on(mark_completed(&t.fetcher(), 1)).unwrap_err();
        assert_eq!(
            complete_messages().failure_text(&err),
            "Failed to modify requirement status."
        );
    }

    #[test]
    fn add_requires_pending_status() {
        let t = RecordingTransport::new();
        let form = NewRequirement {
            user_id: "U1".into(),
            room_id: "R0001".into(),
            description: "AC not working".into(),
            ..Default::default()
        };
        t.reply(200, json!({ "status": "pending" }));
        assert_eq!(
            block_on(add_requirement(&t.fetcher(), form.clone())).unwrap(),
            Reconcile::Nothing
        );

        t.reply(200, json!({ "status": "error" }));
        let err = block_on(add_requirement(&t.fetcher(), form)).unwrap_err();
        assert_eq!(add_messages().failure_text(&err), "Failed to add requirement.");
        assert_eq!(t.calls()[1].body.as_ref().map(|b| b["isCustomer"].clone()), Some(json!(false)));
    }

    #[test]
    fn blank_form_is_refused_locally() {
        let t = RecordingTransport::new();
        let err = block_on(add_requirement(&t.fetcher(), NewRequirement::default())).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(t.call_count(), 0);
    }
}
