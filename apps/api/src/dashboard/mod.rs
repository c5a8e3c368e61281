pub mod calendar;
pub mod guides;
pub mod roles;
