//! Employee API port.
//!
//! Remote operations on employee accounts. Implementations frame the
//! requests; stores only see records or a `RemoteError`.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::employee::Employee;
use crate::domain::foundation::{EmployeeId, RemoteError};

/// Remote employee operations.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Lists every employee visible to the caller.
    async fn list_employees(&self) -> Result<Vec<Employee>, RemoteError>;

    /// Creates an account and returns the stored record.
    async fn create_employee(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Employee, RemoteError>;

    /// Changes an employee's email and returns the stored record.
    async fn update_employee(&self, id: EmployeeId, email: &str) -> Result<Employee, RemoteError>;

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Anything other than an empty success response is an error.
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), RemoteError>;

    /// Fetches the signed-in employee.
    async fn fetch_self(&self) -> Result<Employee, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_api_is_object_safe() {
        fn _accepts_dyn(_api: &dyn EmployeeApi) {}
    }
}
