pub mod pathway;
pub mod resource;
