//! Dispatch across the two unrelated hierarchies.
//!
//! The original script probed each object with `hasattr` to decide
//! whether to call `move()` or `use_power()`. A tagged union makes the
//! same decision a compile-checked `match`: an [`Entity`] is either a
//! hero or a vehicle, and `perform` invokes whichever polymorphic
//! operation applies.

use crate::heroes::Hero;
use crate::vehicles::Vehicle;

/// Either family, behind its trait object.
pub enum Entity {
    Hero(Box<dyn Hero>),
    Vehicle(Box<dyn Vehicle>),
}

impl Entity {
    /// Runs the polymorphic operation of whichever family this entity
    /// belongs to.
    pub fn perform(&mut self) -> String {
        match self {
            Entity::Hero(hero) => hero.use_power(),
            Entity::Vehicle(vehicle) => vehicle.travel(),
        }
    }

    /// Display line for the driver: hero summary or vehicle description.
    pub fn label(&self) -> String {
        match self {
            Entity::Hero(hero) => hero.summary(),
            Entity::Vehicle(vehicle) => vehicle.description(),
        }
    }
}

impl From<Box<dyn Hero>> for Entity {
    fn from(hero: Box<dyn Hero>) -> Self {
        Entity::Hero(hero)
    }
}

impl From<Box<dyn Vehicle>> for Entity {
    fn from(vehicle: Box<dyn Vehicle>) -> Self {
        Entity::Vehicle(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heroes::{FlyingHero, HeroRegistry, TechHero};
    use crate::vehicles::{Car, Plane};

    #[test]
    fn perform_picks_the_right_operation_per_family() {
        let registry = HeroRegistry::new();
        let mut entities: Vec<Entity> = vec![
            Entity::Hero(Box::new(FlyingHero::new(&registry, "Wind Walker", "Sam Wilson"))),
            Entity::Vehicle(Box::new(Car::new("Ferrari", "F40", 2023))),
            Entity::Hero(Box::new(TechHero::new(&registry, "Code Master", "Lisa Park"))),
            Entity::Vehicle(Box::new(Plane::new("Airbus", "A380", 2022))),
        ];

        let outputs: Vec<String> = entities.iter_mut().map(Entity::perform).collect();
        assert!(outputs[0].contains("soars through the sky"));
        assert!(outputs[1].contains("driving on the highway"));
        assert!(outputs[2].contains("high-tech gadgets"));
        assert!(outputs[3].contains("flying at"));
    }

    #[test]
    fn vehicles_keep_their_state_across_perform() {
        let mut entity = Entity::Vehicle(Box::new(Car::new("Ferrari", "F40", 2023)));
        entity.perform();
        match &entity {
            Entity::Vehicle(vehicle) => assert!(vehicle.is_moving()),
            Entity::Hero(_) => unreachable!(),
        }
    }

    #[test]
    fn labels_follow_the_family_display_format() {
        let registry = HeroRegistry::new();
        let hero: Entity = Entity::Hero(Box::new(FlyingHero::new(&registry, "Wind Walker", "Sam Wilson")));
        let vehicle: Entity = Entity::Vehicle(Box::new(Car::new("Ferrari", "F40", 2023)));

        assert_eq!(hero.label(), "Wind Walker (Power: 50, Missions: 0)");
        assert_eq!(vehicle.label(), "2023 Ferrari F40");
    }
}
