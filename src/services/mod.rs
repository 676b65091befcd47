pub mod email_validation;
pub mod signup_service;
