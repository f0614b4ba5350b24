pub mod contest;
pub mod contest_connection;
pub mod enums;
pub mod run;
pub mod statement_problem;
pub mod user;
pub mod workshop;
pub mod workshop_connection;
