use serde::{Deserialize, Serialize};

/// Fields of the registration form. Wire names belong to the external
/// form-processing service and cannot be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Email,
    FirstName,
    LastName,
    CountryCode,
    Phone,
    Course,
    Objective,
    Batch,
    LearningApproach,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Email,
        FormField::FirstName,
        FormField::LastName,
        FormField::CountryCode,
        FormField::Phone,
        FormField::Course,
        FormField::Objective,
        FormField::Batch,
        FormField::LearningApproach,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::CountryCode => "country_code",
            FormField::Phone => "mobile",
            FormField::Course => "course",
            FormField::Objective => "objective",
            FormField::Batch => "batch",
            FormField::LearningApproach => "learning_approach",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Email => "Email",
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::CountryCode => "Country code",
            FormField::Phone => "Phone number",
            FormField::Course => "Course",
            FormField::Objective => "Your objective",
            FormField::Batch => "Preferred batch",
            FormField::LearningApproach => "Learning approach",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            FormField::Email
                | FormField::FirstName
                | FormField::Phone
                | FormField::Objective
                | FormField::LearningApproach
        )
    }
}

/// Value of the objective select's placeholder option.
pub const OBJECTIVE_PLACEHOLDER: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Upskill,
    CareerSwitch,
    FirstJob,
    Freelance,
    Academic,
}

impl Objective {
    pub const ALL: [Objective; 5] = [
        Objective::Upskill,
        Objective::CareerSwitch,
        Objective::FirstJob,
        Objective::Freelance,
        Objective::Academic,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Objective::Upskill => "Upskill in my current role",
            Objective::CareerSwitch => "Switch my career",
            Objective::FirstJob => "Land my first job",
            Objective::Freelance => "Start freelancing",
            Objective::Academic => "Academic requirement",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.value() == value)
    }
}

/// Only one approach is offered today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningApproach {
    LiveOnline,
}

impl LearningApproach {
    pub const ALL: [LearningApproach; 1] = [LearningApproach::LiveOnline];

    pub fn value(self) -> &'static str {
        match self {
            LearningApproach::LiveOnline => "Live online classes",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.value() == value)
    }
}

/// Hidden tracking fields the external service expects; always sent empty.
pub const TRACKING_FIELDS: [&str; 3] = ["utm_source", "utm_medium", "utm_campaign"];
