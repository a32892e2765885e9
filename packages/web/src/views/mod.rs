mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod student;
pub use student::StudentDashboard;

mod instructor;
pub use instructor::InstructorDashboard;
