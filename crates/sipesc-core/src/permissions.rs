//! Permission constants for the SIPESC API.
//!
//! Permissions are flat strings of the form `module:action`. They are granted
//! ad hoc to non-privileged principals; `admin` and `prosecutor` bypass them.
//!
//! # Example
//!
//! ```ignore
//! use sipesc_core::permissions;
//!
//! if has_permission(principal, permissions::INCIDENTS_CREATE) {
//!     // Record incident
//! }
//! ```

/// Separator between the module and action halves of a permission.
pub const SEPARATOR: char = ':';

/// Builds the permission string for a `(module, action)` pair.
pub fn permission(module: &str, action: &str) -> String {
    format!("{module}{SEPARATOR}{action}")
}

// =============================================================================
// Students permissions
// =============================================================================

/// Permission to read the student roster
pub const STUDENTS_READ: &str = "students:read";
/// Permission to register students
pub const STUDENTS_CREATE: &str = "students:create";

// =============================================================================
// Incidents permissions
// =============================================================================

/// Permission to read incidents
pub const INCIDENTS_READ: &str = "incidents:read";
/// Permission to record incidents
pub const INCIDENTS_CREATE: &str = "incidents:create";

// =============================================================================
// Referrals permissions
// =============================================================================

/// Permission to read referrals
pub const REFERRALS_READ: &str = "referrals:read";
/// Permission to create referrals to councils
pub const REFERRALS_CREATE: &str = "referrals:create";

// =============================================================================
// Attendance / medications / messages
// =============================================================================

pub const ATTENDANCE_READ: &str = "attendance:read";
pub const ATTENDANCE_UPDATE: &str = "attendance:update";
pub const MEDICATIONS_READ: &str = "medications:read";
pub const MESSAGES_SEND: &str = "messages:send";

// =============================================================================
// Reports permissions
// =============================================================================

/// Permission to view reports
pub const REPORTS_VIEW: &str = "reports:view";
/// Permission to export reports
pub const REPORTS_EXPORT: &str = "reports:export";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_joins_module_and_action() {
        assert_eq!(permission("incidents", "create"), INCIDENTS_CREATE);
        assert_eq!(permission("reports", "export"), REPORTS_EXPORT);
    }
}
