// Skill/role graph: storage, seed data, fallback requirements, and path search.

pub mod fallback;
pub mod handlers;
pub mod path_finder;
pub mod seed;
pub mod store;
