pub mod course;
pub mod registration;

pub use course::{CourseModule, CourseRecord};
pub use registration::{
    FormField, LearningApproach, OBJECTIVE_PLACEHOLDER, Objective, TRACKING_FIELDS,
};
