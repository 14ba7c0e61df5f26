pub mod assignments;

pub mod courses;

pub mod enrollments;

pub mod reports;

pub mod submissions;

pub use assignments::configure_assignments_routes;
pub use courses::configure_courses_routes;
pub use enrollments::configure_enrollments_routes;
pub use reports::configure_reports_routes;
pub use submissions::configure_submissions_routes;
