pub mod blob_service;
pub mod question_service;
