// Pathway assembly: path finding + resource discovery per gap, milestones,
// duration and encouragement.

pub mod assembler;
pub mod handlers;
pub mod milestones;
pub mod summary;
