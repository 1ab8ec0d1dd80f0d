pub mod login_attempt;
pub mod user;

pub use login_attempt::PostgresLoginAttemptRepository;
pub use user::PostgresUserRepository;
