use crate::shared::action_error::ActionError;
use crate::shared::fetcher::{Fetcher, SuccessMarker, NO_BODY};
use crate::shared::resource::{ActionMessages, Reconcile};
use contracts::domain::a001_staff::aggregate::{
    Employee, EmployeeListResponse, NewStaff, StaffDeleteRequest, StaffModification,
};
use contracts::shared::validation::{self, Violations};

const EMPLOYEE_LIST: &str = "/authority/employee_list";
const INSERT_EMPLOYEE: &str = "/authority/insert_employee";
const MODIFY_EMPLOYEE: &str = "/authority/modify_employee";
const DELETE_EMPLOYEE: &str = "/authority/delete_employee";

pub fn load_messages() -> ActionMessages {
    ActionMessages::load("Failed to fetch employee list.", "Error fetching employee list.")
}

pub fn add_messages() -> ActionMessages {
    ActionMessages::new("Staff member added successfully.", "Failed to add staff member")
}

pub fn modify_messages() -> ActionMessages {
    ActionMessages::new("Staff member modified successfully.", "Failed to modify staff member")
        .rejected("Error modifying staff member.")
}

pub fn delete_messages() -> ActionMessages {
    ActionMessages::new("Staff member deleted successfully.", "Failed to delete staff member")
        .rejected("Error deleting staff member.")
}

pub async fn fetch_employees(fetcher: &Fetcher) -> Result<Vec<Employee>, ActionError> {
    let response: EmployeeListResponse = fetcher
        .post_as(EMPLOYEE_LIST, NO_BODY, SuccessMarker::status("valid"))
        .await?;
    Ok(response.body)
}

/// Inserts a staff member. The endpoint only answers with a status code, so
/// the list gets the record built from the form.
pub async fn add_staff(fetcher: &Fetcher, staff: NewStaff) -> Result<Reconcile<Employee>, ActionError> {
    ActionError::check(staff.validate())?;
    fetcher
        .post(INSERT_EMPLOYEE, Some(&staff), SuccessMarker::HttpOk)
        .await?;
    log::info!("staff member {} added", staff.userid);
    Ok(Reconcile::Upsert(staff.to_employee()))
}

/// Free-form single-field update. `what_to_modify` goes to the server as typed.
pub async fn modify_staff(
    fetcher: &Fetcher,
    modification: StaffModification,
) -> Result<Reconcile<Employee>, ActionError> {
    ActionError::check(modification.validate())?;
    fetcher
        .post(MODIFY_EMPLOYEE, Some(&modification), SuccessMarker::status("Modified"))
        .await?;
    Ok(Reconcile::PatchField {
        id: modification.userid,
        field: modification.what_to_modify,
        value: modification.modification_value,
    })
}

pub async fn delete_staff(
    fetcher: &Fetcher,
    request: StaffDeleteRequest,
) -> Result<Reconcile<Employee>, ActionError> {
    fetcher
        .post(DELETE_EMPLOYEE, Some(&request), SuccessMarker::status("Deleted"))
        .await?;
    Ok(Reconcile::Remove(request.userid))
}

/// What a press of the delete button should do.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteStep {
    /// Show the warning and wait for a second press.
    AskConfirmation,
    Execute(StaffDeleteRequest),
    Invalid(ActionError),
}

/// Two-press guard in front of staff deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteConfirm {
    armed: bool,
}

impl DeleteConfirm {
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn submit(&mut self, userid: &str) -> DeleteStep {
        if validation::is_blank(userid) {
            let mut v = Violations::new();
            v.push("User ID is required");
            return DeleteStep::Invalid(v.into());
        }
        if !self.armed {
            self.armed = true;
            return DeleteStep::AskConfirmation;
        }
        self.armed = false;
        DeleteStep::Execute(StaffDeleteRequest {
            userid: userid.to_string(),
        })
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }
}
