//! Gender selection for the registration form

use std::fmt;

/// The options offered by the gender select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    /// All options, in the order the form presents them
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Others];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Others => "Others",
        };
        write!(f, "{}", label)
    }
}
