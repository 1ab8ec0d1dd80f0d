pub mod repositories;
pub mod reset_tokens;
