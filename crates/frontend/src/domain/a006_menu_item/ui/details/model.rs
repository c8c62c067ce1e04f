use crate::shared::action_error::ActionError;
use crate::shared::fetcher::{Fetcher, SuccessMarker, NO_BODY};
use crate::shared::resource::{ActionMessages, Reconcile};
use contracts::domain::a006_menu_item::aggregate::{
    DeleteFoodRequest, FetchMenuRequest, FoodItem, FoodModification, InsertFoodResponse,
    MenuResponse, NewFoodItem, OrderCart, Restaurant,
};

const RESTAURANTS: &str = "/restaurant/restaurant_id";
const SELECTED_RESTAURANT: &str = "/restaurant/fetch_selected_restaurant";
const INSERT_FOOD: &str = "/authority/insert_food";
const MODIFY_FOOD: &str = "/authority/modify_food";
const DELETE_FOOD: &str = "/authority/delete_food";
const PLACE_ORDER: &str = "/orders";

/// Either status means the item is gone.
const DELETED: SuccessMarker = SuccessMarker::FieldIn {
    field: "status",
    values: &["Deleted", "Modified"],
};

pub fn restaurants_messages() -> ActionMessages {
    ActionMessages::load("Failed to load restaurants.", "Error fetching restaurants.")
}

pub fn menu_messages() -> ActionMessages {
    ActionMessages::load("Failed to load the menu.", "Error fetching restaurant details.")
}

pub fn insert_messages() -> ActionMessages {
    ActionMessages::new("Menu item added.", "Error adding menu item.").rejected("Failed to insert item.")
}

pub fn modify_messages() -> ActionMessages {
    ActionMessages::new("Menu item modified.", "Error modifying menu item.")
        .rejected("Failed to modify item.")
}

pub fn delete_messages() -> ActionMessages {
    ActionMessages::new("Menu item deleted.", "Error deleting menu item.")
        .rejected("Failed to delete item.")
}

pub fn order_messages() -> ActionMessages {
    ActionMessages::new(
        "Order submitted successfully!",
        "Failed to submit order. Please try again.",
    )
}

pub async fn fetch_restaurants(fetcher: &Fetcher) -> Result<Vec<Restaurant>, ActionError> {
    fetcher
        .post_as(RESTAURANTS, NO_BODY, SuccessMarker::JsonArray)
        .await
}

pub async fn fetch_menu(fetcher: &Fetcher, rest_id: i64) -> Result<Vec<FoodItem>, ActionError> {
    let response: MenuResponse = fetcher
        .post_as(
            SELECTED_RESTAURANT,
            Some(&FetchMenuRequest { rest_id }),
            SuccessMarker::HttpOk,
        )
        .await?;
    Ok(response.menu_details)
}

/// Adds a dish. The list gets the server's copy of it, which carries the
/// assigned `food_id`.
pub async fn insert_food(fetcher: &Fetcher, item: NewFoodItem) -> Result<Reconcile<FoodItem>, ActionError> {
    ActionError::check(item.validate())?;
    let response: InsertFoodResponse = fetcher
        .post_as(
            INSERT_FOOD,
            Some(&item.to_payload()),
            SuccessMarker::status("Inserted"),
        )
        .await
        .inspect_err(|e| log::warn!("menu item {} not inserted: {}", item.name, e))?;
    let created = response.body.into_iter().next().ok_or_else(|| {
        log::warn!("insert of {} answered without the new item", item.name);
        ActionError::ResponseShape("insert response has an empty body".to_string())
    })?;
    Ok(Reconcile::Append(created))
}

pub async fn modify_food(
    fetcher: &Fetcher,
    modification: FoodModification,
) -> Result<Reconcile<FoodItem>, ActionError> {
    let payload = modification.to_payload()?;
    fetcher
        .post(MODIFY_FOOD, Some(&payload), SuccessMarker::status("Modified"))
        .await?;
    Ok(Reconcile::PatchField {
        id: payload.food_id,
        field: payload.what_to_modify,
        value: payload.modification_value.to_string(),
    })
}

pub async fn delete_food(fetcher: &Fetcher, food_id: i64) -> Result<Reconcile<FoodItem>, ActionError> {
    fetcher
        .post(DELETE_FOOD, Some(&DeleteFoodRequest { food_id }), DELETED)
        .await?;
    Ok(Reconcile::Remove(food_id))
}

/// Submits the guest's cart. The menu itself does not change.
pub async fn place_order(fetcher: &Fetcher, cart: OrderCart) -> Result<Reconcile<FoodItem>, ActionError> {
    let request = cart.checkout()?;
    fetcher
        .post(PLACE_ORDER, Some(&request), SuccessMarker::HttpOk)
        .await?;
    log::info!("order of {} items placed", request.order.len());
    Ok(Reconcile::Nothing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::ListState;
    use crate::shared::testing::RecordingTransport;
    use contracts::domain::a006_menu_item::aggregate::{ModifiableFoodField, PaymentMethod};
    use futures::executor::block_on;
    use serde_json::json;

    fn dish(food_id: i64, name: &str, price: f64) -> FoodItem {
        FoodItem {
            food_id,
            name: name.into(),
            price: Some(price),
            ..Default::default()
        }
    }

    fn new_item() -> NewFoodItem {
        NewFoodItem {
            name: "Dal".into(),
            price: "8".into(),
            ..Default::default()
        }
    }

    #[test]
    fn first_restaurant_list_is_an_array() {
        let t = RecordingTransport::new();
        t.reply(200, json!([{ "rest_id": 1 }, { "rest_id": "2" }]));
        let restaurants = block_on(fetch_restaurants(&t.fetcher())).unwrap();
        assert_eq!(restaurants, vec![Restaurant { rest_id: 1 }, Restaurant { rest_id: 2 }]);

        t.reply(200, json!({ "rest_id": 1 }));
        assert!(matches!(
            block_on(fetch_restaurants(&t.fetcher())),
            Err(ActionError::ResponseShape(_))
        ));
    }

    #[test]
    fn insert_appends_only_when_inserted() {
        let t = RecordingTransport::new();
        let mut state = ListState::new();
        state.items = vec![dish(1, "Soup", 4.0)];

        t.reply(200, json!({ "status": "Inserted", "body": [{ "food_id": 9, "name": "Dal", "price": 8 }] }));
        state.begin_mutation();
        let result = block_on(insert_food(&t.fetcher(), new_item()));
        state.finish_mutation(result, &insert_messages());
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1].food_id, 9);

        t.reply(200, json!({ "status": "Duplicate" }));
        state.begin_mutation();
        let result = block_on(insert_food(&t.fetcher(), new_item()));
        state.finish_mutation(result, &insert_messages());
        assert_eq!(state.items.len(), 2);
        assert_eq!(
            state.banner.map(|b| b.text),
            Some("Failed to insert item.".to_string())
        );
    }

    #[test]
    fn inserted_without_body_is_a_shape_error() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "Inserted", "body": [] }));
        assert!(matches!(
            block_on(insert_food(&t.fetcher(), new_item())),
            Err(ActionError::ResponseShape(_))
        ));
    }

    #[test]
    fn insert_sends_coerced_numbers() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "Inserted", "body": [{ "food_id": 3 }] }));
        block_on(insert_food(&t.fetcher(), new_item())).unwrap();
        let sent = t.calls()[0].body.clone().unwrap();
        assert_eq!(sent["price"], json!(8.0));
        assert_eq!(sent["avg_plate_cost"], json!(0.0));
        assert_eq!(sent["isVeg"], json!(1));
    }

    #[test]
    fn modify_sends_the_entered_value() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "Modified" }));
        let modification = FoodModification {
            food_id: "1".into(),
            what_to_modify: ModifiableFoodField::Price,
            modification_value: "5.5".into(),
        };
        let mut items = vec![dish(1, "Soup", 4.0), dish(2, "Tea", 1.0)];
        block_on(modify_food(&t.fetcher(), modification)).unwrap().apply(&mut items);
        assert_eq!(
            t.calls()[0].body,
            Some(json!({ "food_id": 1, "what_to_modify": "price", "modification_value": 5.5 }))
        );
        assert_eq!(items[0].price, Some(5.5));
        assert_eq!(items[1].price, Some(1.0));
    }

    #[test]
    fn non_numeric_modification_is_refused_locally() {
        let t = RecordingTransport::new();
        let modification = FoodModification {
            food_id: "x".into(),
            modification_value: "cheap".into(),
            ..Default::default()
        };
        let err = block_on(modify_food(&t.fetcher(), modification)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(t.call_count(), 0);
    }

    #[test]
    fn delete_accepts_either_status_and_waits_for_it() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "Modified" }));
        let mut items = vec![dish(1, "Soup", 4.0), dish(2, "Tea", 1.0)];
        block_on(delete_food(&t.fetcher(), 1)).unwrap().apply(&mut items);
        assert_eq!(items, vec![dish(2, "Tea", 1.0)]);

        t.reply(200, json!({ "status": "Failed" }));
        assert!(block_on(delete_food(&t.fetcher(), 2)).is_err());
    }

    #[test]
    fn checkout_needs_payment_method_before_sending() {
        let t = RecordingTransport::new();
        let mut cart = OrderCart::default();
        cart.add(dish(1, "Soup", 4.0));
        let err = block_on(place_order(&t.fetcher(), cart.clone())).unwrap_err();
        assert_eq!(
            err,
            ActionError::Validation(vec!["Please select a payment method".into()])
        );
        assert_eq!(t.call_count(), 0);

        t.reply(200, json!({}));
        cart.payment_method = Some(PaymentMethod::Cash);
        block_on(place_order(&t.fetcher(), cart)).unwrap();
        let sent = t.calls()[0].body.clone().unwrap();
        assert_eq!(sent["paymentMethod"], json!("cash"));
        assert_eq!(t.calls()[0].url, "http://hotel.test/orders");
    }
}
