mod repository;
mod team;
mod user;

pub use repository::GhRepository;
pub use team::GhTeam;
pub use user::GhUser;
