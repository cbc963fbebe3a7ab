pub mod enums;
pub mod event;
pub mod pet;

pub use enums::{CareArea, Category, LifeStage, Priority};
pub use event::HealthEvent;
pub use pet::PetProfile;
