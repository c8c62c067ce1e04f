use crate::domain::common::ResourceItem;
use crate::shared::validation::{self, Violations};
use crate::shared::wire;
use serde::{Deserialize, Serialize};

// ============================================================================
// Restaurant
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(deserialize_with = "wire::i64_lenient")]
    pub rest_id: i64,
}

impl ResourceItem for Restaurant {
    type Id = i64;

    fn id(&self) -> i64 {
        self.rest_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchMenuRequest {
    pub rest_id: i64,
}

// ============================================================================
// Food item
// ============================================================================

/// Dish on a restaurant menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(deserialize_with = "wire::i64_lenient")]
    pub food_id: i64,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::opt_f64_lenient")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_f64_lenient")]
    pub avg_income_rate: Option<f64>,
    #[serde(default, deserialize_with = "wire::opt_f64_lenient")]
    pub avg_plate_cost: Option<f64>,
    #[serde(rename = "isVeg", default, deserialize_with = "wire::opt_i64_lenient")]
    pub is_veg: Option<i64>,
    #[serde(rename = "type", default, deserialize_with = "wire::opt_string_lenient")]
    pub food_type: Option<String>,
}

impl FoodItem {
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("${}", price),
            None => "$-".to_string(),
        }
    }

    pub fn is_vegetarian(&self) -> bool {
        self.is_veg == Some(1)
    }
}

impl ResourceItem for FoodItem {
    type Id = i64;

    fn id(&self) -> i64 {
        self.food_id
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let Some(field) = ModifiableFoodField::from_wire(field) else {
            return false;
        };
        let Some(number) = validation::parse_number(value) else {
            return false;
        };
        match field {
            ModifiableFoodField::Price => self.price = Some(number),
            ModifiableFoodField::AvgIncomeRate => self.avg_income_rate = Some(number),
            ModifiableFoodField::AvgPlateCost => self.avg_plate_cost = Some(number),
        }
        true
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuResponse {
    #[serde(default, deserialize_with = "wire::vec_or_null")]
    pub menu_details: Vec<FoodItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsertFoodResponse {
    #[serde(default, deserialize_with = "wire::vec_or_null")]
    pub body: Vec<FoodItem>,
}

// ============================================================================
// Admin forms
// ============================================================================

/// Menu item form as typed by the admin. Numbers stay text until
/// [`to_payload`](NewFoodItem::to_payload).
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodItem {
    pub name: String,
    pub price: String,
    pub description: String,
    pub avg_income_rate: String,
    pub avg_plate_cost: String,
    pub is_veg: String,
    pub food_type: String,
    pub rest_id: String,
}

impl Default for NewFoodItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            description: String::new(),
            avg_income_rate: String::new(),
            avg_plate_cost: String::new(),
            is_veg: "1".to_string(),
            food_type: String::new(),
            rest_id: "1".to_string(),
        }
    }
}

/// Insert body: decimals default to 0, integers are sent as `null` when
/// they do not parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertFoodPayload {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub avg_income_rate: f64,
    pub avg_plate_cost: f64,
    #[serde(rename = "isVeg")]
    pub is_veg: Option<i64>,
    #[serde(rename = "type")]
    pub food_type: String,
    pub rest_id: Option<i64>,
}

impl NewFoodItem {
    pub fn validate(&self) -> Violations {
        let mut v = Violations::new();
        v.check(!validation::is_blank(&self.name), "Name is required");
        v.check(!validation::is_blank(&self.price), "Price is required");
        v
    }

    pub fn to_payload(&self) -> InsertFoodPayload {
        let decimal = |s: &str| validation::parse_number(s).unwrap_or(0.0);
        let integer = |s: &str| s.trim().parse::<i64>().ok();
        InsertFoodPayload {
            name: self.name.clone(),
            price: decimal(&self.price),
            description: self.description.clone(),
            avg_income_rate: decimal(&self.avg_income_rate),
            avg_plate_cost: decimal(&self.avg_plate_cost),
            is_veg: integer(&self.is_veg),
            food_type: self.food_type.clone(),
            rest_id: integer(&self.rest_id),
        }
    }
}

/// Numeric menu columns an admin may edit in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModifiableFoodField {
    #[default]
    Price,
    AvgIncomeRate,
    AvgPlateCost,
}

impl ModifiableFoodField {
    pub const ALL: [ModifiableFoodField; 3] = [
        ModifiableFoodField::Price,
        ModifiableFoodField::AvgIncomeRate,
        ModifiableFoodField::AvgPlateCost,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            ModifiableFoodField::Price => "price",
            ModifiableFoodField::AvgIncomeRate => "avg_income_rate",
            ModifiableFoodField::AvgPlateCost => "avg_plate_cost",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModifiableFoodField::Price => "Price",
            ModifiableFoodField::AvgIncomeRate => "Average Income Rate",
            ModifiableFoodField::AvgPlateCost => "Average Plate Cost",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_wire() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodModification {
    pub food_id: String,
    pub what_to_modify: ModifiableFoodField,
    pub modification_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodModificationPayload {
    pub food_id: i64,
    pub what_to_modify: String,
    pub modification_value: f64,
}

impl FoodModification {
    /// The entered value is sent, not a default.
    pub fn to_payload(&self) -> Result<FoodModificationPayload, Violations> {
        let mut v = Violations::new();
        let food_id = self.food_id.trim().parse::<i64>().ok();
        v.check(food_id.is_some(), "Food ID must be a whole number");
        let value = validation::parse_number(&self.modification_value);
        v.check(value.is_some(), "New value must be a number");
        match (food_id, value) {
            (Some(food_id), Some(modification_value)) => Ok(FoodModificationPayload {
                food_id,
                what_to_modify: self.what_to_modify.as_wire().to_string(),
                modification_value,
            }),
            _ => Err(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteFoodRequest {
    pub food_id: i64,
}

// ============================================================================
// Customer cart
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::Paypal,
        PaymentMethod::Cash,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Cash => "Cash",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_wire() == value)
    }
}

/// A guest's order in progress. The same dish may appear several times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCart {
    pub items: Vec<FoodItem>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceOrderRequest {
    pub order: Vec<FoodItem>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

impl OrderCart {
    pub fn add(&mut self, item: FoodItem) {
        self.items.push(item);
    }

    /// Removes the line at `index`; out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<FoodItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn total(&self) -> f64 {
        self.items.iter().filter_map(|item| item.price).sum()
    }

    pub fn total_label(&self) -> String {
        format!("{:.2}", self.total())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Label of the cart toggle button.
    pub fn toggle_label(&self, showing: bool) -> String {
        let verb = if showing { "Hide Order" } else { "Show Order" };
        format!("{verb} ({} items)", self.items.len())
    }

    /// Payment method is checked before the cart contents; the first
    /// failing rule is the only one reported.
    pub fn checkout(&self) -> Result<PlaceOrderRequest, Violations> {
        let mut v = Violations::new();
        let Some(method) = self.payment_method else {
            v.push("Please select a payment method");
            return Err(v);
        };
        if self.items.is_empty() {
            v.push("Please add items to your order");
            return Err(v);
        }
        Ok(PlaceOrderRequest {
            order: self.items.clone(),
            payment_method: method.as_wire().to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.payment_method = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dish(food_id: i64, price: f64) -> FoodItem {
        FoodItem {
            food_id,
            name: format!("Dish {food_id}"),
            price: Some(price),
            ..Default::default()
        }
    }

    #[test]
    fn insert_payload_coerces_numbers() {
        let form = NewFoodItem {
            name: "Pasta".into(),
            price: "12.5".into(),
            avg_income_rate: "abc".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["price"], json!(12.5));
        assert_eq!(value["avg_income_rate"], json!(0.0));
        assert_eq!(value["isVeg"], json!(1));
        assert_eq!(value["rest_id"], json!(1));
        assert_eq!(value["type"], json!(""));
    }

    #[test]
    fn unparsable_integers_go_out_as_null() {
        let form = NewFoodItem {
            rest_id: "x".into(),
            ..Default::default()
        };
        assert_eq!(form.to_payload().rest_id, None);
    }

    #[test]
    fn modification_sends_entered_value() {
        let m = FoodModification {
            food_id: "7".into(),
            what_to_modify: ModifiableFoodField::AvgPlateCost,
            modification_value: "3.25".into(),
        };
        let payload = m.to_payload().unwrap();
        assert_eq!(payload.modification_value, 3.25);
        assert_eq!(payload.what_to_modify, "avg_plate_cost");
    }

    #[test]
    fn modification_rejects_non_numeric_input() {
        let m = FoodModification {
            food_id: "seven".into(),
            modification_value: "".into(),
            ..Default::default()
        };
        assert_eq!(m.to_payload().unwrap_err().len(), 2);
    }

    #[test]
    fn set_field_only_touches_numeric_columns() {
        let mut item = dish(1, 10.0);
        assert!(item.set_field("price", "11.5"));
        assert_eq!(item.price, Some(11.5));
        assert!(!item.set_field("name", "Soup"));
        assert!(!item.set_field("price", "cheap"));
    }

    #[test]
    fn cart_totals_to_two_decimals() {
        let mut cart = OrderCart::default();
        cart.add(dish(1, 4.1));
        cart.add(dish(2, 5.2));
        cart.add(dish(1, 4.1));
        assert_eq!(cart.total_label(), "13.40");
        assert_eq!(cart.remove(1).map(|d| d.food_id), Some(2));
        assert_eq!(cart.remove(5), None);
        assert_eq!(cart.items.len(), 2);
    }

    #[test]
    fn cart_toggle_follows_contents() {
        let mut cart = OrderCart::default();
        assert!(cart.is_empty());
        cart.add(dish(3, 7.0));
        assert!(!cart.is_empty());
        assert_eq!(cart.toggle_label(false), "Show Order (1 items)");
        assert_eq!(cart.toggle_label(true), "Hide Order (1 items)");
    }

    #[test]
    fn checkout_checks_payment_before_items() {
        let mut cart = OrderCart::default();
        assert_eq!(
            cart.checkout().unwrap_err().joined(),
            "Please select a payment method"
        );
        cart.payment_method = Some(PaymentMethod::Cash);
        assert_eq!(
            cart.checkout().unwrap_err().joined(),
            "Please add items to your order"
        );
        cart.add(dish(3, 2.0));
        let request = cart.checkout().unwrap();
        assert_eq!(request.payment_method, "cash");
    }

    #[test]
    fn decodes_menu_with_string_numbers() {
        let menu: MenuResponse = serde_json::from_value(json!({
            "menu_details": [{ "food_id": "5", "name": "Idli", "price": "2.50", "isVeg": 1, "type": "Breakfast" }]
        }))
        .unwrap();
        let item = &menu.menu_details[0];
        assert_eq!(item.food_id, 5);
        assert_eq!(item.price, Some(2.5));
        assert!(item.is_vegetarian());
        assert_eq!(item.food_type.as_deref(), Some("Breakfast"));
    }
}
