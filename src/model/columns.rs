//! Column names used by the roster spreadsheets and the derived reports.

pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const FULL_NAME: &str = "Full Name";
pub const ACADEMIC_SUPERVISOR: &str = "Academic Supervisor";
pub const SUPERVISOR_EMAIL: &str = "Supervisor Email";
pub const ALTERNATE_EMAIL: &str = "Alternate Email Address";
pub const CUNY_EMAIL: &str = "CUNY Email";
pub const COLLEGE_OR_SCHOOL: &str = "College or School";
pub const DISCIPLINE: &str = "Discipline";
pub const FINAL_STATUS: &str = "Final Status";

/// Roster columns that never reach any output.
pub const DROPPED_COLUMNS: [&str; 5] = [
    "Comments",
    "Course Number and Title",
    "Faculty Status",
    "Familiarity With Blackboard",
    "Final Points",
];

/// Prefix given to header cells left blank in a roster.
pub const UNNAMED_PREFIX: &str = "Unnamed: ";
