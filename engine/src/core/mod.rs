//! Core engine functionality: the entity world and the coordinate system

pub mod coordinates;
pub mod entity;
