use crate::domain::common::ResourceItem;
use crate::shared::validation::{self, Violations};
use crate::shared::wire;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Employee (list record)
// ============================================================================

/// Staff member as returned by the employee list.
///
/// The server sends more columns than the list shows; everything not named
/// here is kept in `extra` so searches and edits still see it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub userid: String,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub username: String,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub job_title: String,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub phone_no: String,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub salary: String,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub nationality: String,
    #[serde(rename = "DOB", default, deserialize_with = "wire::string_lenient")]
    pub dob: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Employee {
    /// Every value of the record as text, named columns first.
    pub fn field_values(&self) -> Vec<String> {
        let mut values = vec![
            self.userid.clone(),
            self.username.clone(),
            self.job_title.clone(),
            self.phone_no.clone(),
            self.salary.clone(),
            self.nationality.clone(),
            self.dob.clone(),
        ];
        values.extend(self.extra.values().map(wire::value_to_text));
        values
    }

    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "userid" => Some(self.userid.clone()),
            "username" => Some(self.username.clone()),
            "job_title" => Some(self.job_title.clone()),
            "phone_no" => Some(self.phone_no.clone()),
            "salary" => Some(self.salary.clone()),
            "nationality" => Some(self.nationality.clone()),
            "DOB" => Some(self.dob.clone()),
            other => self.extra.get(other).map(wire::value_to_text),
        }
    }
}

impl ResourceItem for Employee {
    type Id = String;

    fn id(&self) -> String {
        self.userid.clone()
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let value = value.to_string();
        match field {
            "userid" => self.userid = value,
            "username" => self.username = value,
            "job_title" => self.job_title = value,
            "phone_no" => self.phone_no = value,
            "salary" => self.salary = value,
            "nationality" => self.nationality = value,
            "DOB" => self.dob = value,
            other => {
                self.extra.insert(other.to_string(), Value::String(value));
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeListResponse {
    #[serde(default, deserialize_with = "wire::vec_or_null")]
    pub body: Vec<Employee>,
}

// ============================================================================
// Add / modify / delete requests
// ============================================================================

/// Staff onboarding form, sent as-is to the insert endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewStaff {
    pub username: String,
    pub userid: String,
    pub job_title: String,
    pub phone_no: String,
    pub salary: String,
    pub job_type: String,
    pub contract_start: String,
    pub contract_end: String,
    pub address: String,
    pub join_date: String,
    pub age: String,
    pub id_type: String,
    pub id_number: String,
    pub nationality: String,
    #[serde(rename = "DOB")]
    pub dob: String,
    pub alter_phone_no: String,
    pub bank_name: String,
    pub isfe: String,
    pub account_no: String,
}

impl NewStaff {
    /// Wire names in form order.
    pub const FIELDS: [&'static str; 19] = [
        "username",
        "userid",
        "job_title",
        "phone_no",
        "salary",
        "job_type",
        "contract_start",
        "contract_end",
        "address",
        "join_date",
        "age",
        "id_type",
        "id_number",
        "nationality",
        "DOB",
        "alter_phone_no",
        "bank_name",
        "isfe",
        "account_no",
    ];

    fn slot(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "username" => &mut self.username,
            "userid" => &mut self.userid,
            "job_title" => &mut self.job_title,
            "phone_no" => &mut self.phone_no,
            "salary" => &mut self.salary,
            "job_type" => &mut self.job_type,
            "contract_start" => &mut self.contract_start,
            "contract_end" => &mut self.contract_end,
            "address" => &mut self.address,
            "join_date" => &mut self.join_date,
            "age" => &mut self.age,
            "id_type" => &mut self.id_type,
            "id_number" => &mut self.id_number,
            "nationality" => &mut self.nationality,
            "DOB" => &mut self.dob,
            "alter_phone_no" => &mut self.alter_phone_no,
            "bank_name" => &mut self.bank_name,
            "isfe" => &mut self.isfe,
            "account_no" => &mut self.account_no,
            _ => return None,
        })
    }

    pub fn get(&self, name: &str) -> &str {
        match name {
            "username" => &self.username,
            "userid" => &self.userid,
            "job_title" => &self.job_title,
            "phone_no" => &self.phone_no,
            "salary" => &self.salary,
            "job_type" => &self.job_type,
            "contract_start" => &self.contract_start,
            "contract_end" => &self.contract_end,
            "address" => &self.address,
            "join_date" => &self.join_date,
            "age" => &self.age,
            "id_type" => &self.id_type,
            "id_number" => &self.id_number,
            "nationality" => &self.nationality,
            "DOB" => &self.dob,
            "alter_phone_no" => &self.alter_phone_no,
            "bank_name" => &self.bank_name,
            "isfe" => &self.isfe,
            "account_no" => &self.account_no,
            _ => "",
        }
    }

    pub fn set(&mut self, name: &str, value: String) -> bool {
        match self.slot(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Phone numbers, age bracket and salary sign. Empty optional fields pass.
    pub fn validate(&self) -> Violations {
        let mut v = Violations::new();
        if !self.phone_no.is_empty() {
            v.check(
                validation::is_ten_digit_phone(&self.phone_no),
                "Phone number must be 10 digits",
            );
        }
        if !self.alter_phone_no.is_empty() {
            v.check(
                validation::is_ten_digit_phone(&self.alter_phone_no),
                "Alternate phone number must be 10 digits",
            );
        }
        if !self.age.is_empty() {
            let in_range = validation::parse_number(&self.age)
                .map(|age| (18.0..=65.0).contains(&age))
                .unwrap_or(false);
            v.check(in_range, "Age must be between 18 and 65");
        }
        if !self.salary.is_empty() {
            match validation::parse_number(&self.salary) {
                Some(salary) => v.check(salary >= 0.0, "Salary cannot be negative"),
                None => v.push("Salary must be a number"),
            }
        }
        v
    }

    /// The list record this form becomes once the server accepts it.
    pub fn to_employee(&self) -> Employee {
        let mut employee = Employee {
            userid: self.userid.clone(),
            username: self.username.clone(),
            job_title: self.job_title.clone(),
            phone_no: self.phone_no.clone(),
            salary: self.salary.clone(),
            nationality: self.nationality.clone(),
            dob: self.dob.clone(),
            extra: Map::new(),
        };
        for name in Self::FIELDS {
            if employee.field(name).is_none() {
                employee
                    .extra
                    .insert(name.to_string(), Value::String(self.get(name).to_string()));
            }
        }
        employee
    }
}

/// Free-form single-field edit. The field name is not checked client-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffModification {
    pub userid: String,
    pub what_to_modify: String,
    pub modification_value: String,
}

impl StaffModification {
    pub fn validate(&self) -> Violations {
        let mut v = Violations::new();
        v.check(!validation::is_blank(&self.userid), "User ID is required");
        v.check(
            !validation::is_blank(&self.what_to_modify),
            "Field to modify is required",
        );
        v
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffDeleteRequest {
    pub userid: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_staff() -> NewStaff {
        NewStaff {
            username: "Asha".into(),
            userid: "E7".into(),
            phone_no: "0123456789".into(),
            age: "30".into(),
            salary: "42000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_a_well_formed_form() {
        assert!(valid_staff().validate().is_empty());
    }

    #[test]
    fn reports_every_broken_rule() {
        let staff = NewStaff {
            phone_no: "123".into(),
            age: "17".into(),
            salary: "-1".into(),
            ..valid_staff()
        };
        assert_eq!(
            staff.validate().joined(),
            "Phone number must be 10 digits, Age must be between 18 and 65, Salary cannot be negative"
        );
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for (age, ok) in [("18", true), ("65", true), ("66", false), ("abc", false)] {
            let staff = NewStaff { age: age.into(), ..valid_staff() };
            assert_eq!(staff.validate().is_empty(), ok, "age {age}");
        }
    }

    #[test]
    fn serializes_date_of_birth_with_server_name() {
        let staff = NewStaff { dob: "1990-01-01".into(), ..valid_staff() };
        let value = serde_json::to_value(&staff).unwrap();
        assert_eq!(value["DOB"], "1990-01-01");
        assert_eq!(value.as_object().unwrap().len(), NewStaff::FIELDS.len());
    }

    #[test]
    fn keeps_unlisted_columns_when_decoding() {
        let employee: Employee = serde_json::from_value(json!({
            "userid": 12,
            "username": "Ravi",
            "bank_name": "SBI"
        }))
        .unwrap();
        assert_eq!(employee.userid, "12");
        assert_eq!(employee.field("bank_name").as_deref(), Some("SBI"));
        assert!(employee.field_values().contains(&"SBI".to_string()));
    }

    #[test]
    fn set_field_reaches_extra_columns() {
        let mut employee = valid_staff().to_employee();
        assert!(employee.set_field("address", "Main St"));
        assert!(employee.set_field("salary", "50000"));
        assert_eq!(employee.field("address").as_deref(), Some("Main St"));
        assert_eq!(employee.salary, "50000");
    }

    #[test]
    fn modification_needs_user_and_field() {
        let m = StaffModification::default();
        assert_eq!(m.validate().len(), 2);
    }
}
