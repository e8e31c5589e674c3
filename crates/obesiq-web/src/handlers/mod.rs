pub mod advice;
pub mod assess;
pub mod dashboard;
pub mod system;
