use crate::shared::action_error::ActionError;
use crate::shared::fetcher::{Fetcher, SuccessMarker, NO_BODY};
use crate::shared::resource::{ActionMessages, Reconcile};
use contracts::domain::a007_event::aggregate::{Event, EventListResponse, EventStatusRequest};

const TODAYS_EVENTS: &str = "/reseption/event_todays";
const EVENT_STATUS: &str = "/reseption/event_status_modify";

pub fn load_messages() -> ActionMessages {
    ActionMessages::load("Failed to fetch events.", "Error fetching events.")
}

pub fn over_messages() -> ActionMessages {
    ActionMessages::new("", "Error modifying event status.")
}

pub async fn fetch_todays_events(fetcher: &Fetcher) -> Result<Vec<Event>, ActionError> {
    let response: EventListResponse = fetcher
        .post_as(TODAYS_EVENTS, NO_BODY, SuccessMarker::truthy("content"))
        .await?;
    Ok(response.data)
}

/// Ends an event. The server answers with the whole refreshed list.
pub async fn mark_over(fetcher: &Fetcher, event_id: i64) -> Result<Reconcile<Event>, ActionError> {
    let events: Vec<Event> = fetcher
        .post_as(
            EVENT_STATUS,
            Some(&EventStatusRequest::over(event_id)),
            SuccessMarker::JsonArray,
        )
        .await?;
    Ok(Reconcile::ReplaceAll(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::ListState;
    use crate::shared::testing::RecordingTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn no_content_is_a_load_failure() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "content": false }));
        let mut state: ListState<Event> = ListState::new();
        let ticket = state.begin_load();
        let result = block_on(fetch_todays_events(&t.fetcher()));
        state.finish_load(ticket, result, &load_messages());
        assert_eq!(state.error.as_deref(), Some("Failed to fetch events."));

        t.fail("offline");
        let ticket = state.begin_load();
        let result = block_on(fetch_todays_events(&t.fetcher()));
        state.finish_load(ticket, result, &load_messages());
        assert_eq!(state.error.as_deref(), Some("Error fetching events."));
    }

    #[test]
    fn mark_over_takes_the_returned_list() {
        let t = RecordingTransport::new();
        t.reply(
            200,
            json!([
                { "event_id": 1, "event_name": "Gala", "status": "Over" },
                { "event_id": 2, "event_name": "Yoga", "status": "Scheduled" }
            ]),
        );
        let mut items = vec![Event { event_id: 1, status: "Scheduled".into(), ..Default::default() }];
        block_on(mark_over(&t.fetcher(), 1)).unwrap().apply(&mut items);
        assert_eq!(items.len(), 2);
        assert!(items[0].is_over());
        assert_eq!(t.calls()[0].body, Some(json!({ "id": 1, "status": "Over" })));
    }

    #[test]
    fn object_reply_leaves_events_alone() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "Over" }));
        let mut state = ListState::new();
        state.items = vec![Event { event_id: 1, status: "Scheduled".into(), ..Default::default() }];
        state.begin_mutation();
        let result = block_on(mark_over(&t.fetcher(), 1));
        state.finish_mutation(result, &over_messages());
        assert_eq!(state.items[0].status, "Scheduled");
        assert_eq!(
            state.banner.map(|b| b.text),
            Some("Error modifying event status.".to_string())
        );
    }
}
