//! Status messages for operation feedback.

use std::fmt;

/// Label starting a success line.
pub const SUCCESS_LABEL: &str = "Success:";
/// Label starting a failure line.
pub const WARNING_LABEL: &str = "Warning:";

/// A one-line outcome message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { SUCCESS_LABEL } else { WARNING_LABEL }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Script completed".to_string());
        assert_eq!(format!("{success}"), "Success: Script completed\n");

        let failure = OperationStatus::failure("Field left empty".to_string());
        assert!(format!("{failure}").starts_with("Warning:"));
    }
}
