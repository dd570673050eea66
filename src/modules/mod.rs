pub mod admin;
pub mod alerts;
pub mod auth;
pub mod bi;
pub mod councils;
pub mod dashboard;
pub mod incidents;
pub mod referrals;
pub mod schools;
pub mod students;
