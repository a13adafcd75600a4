// End-to-end scenarios mirroring the demo driver.

use oop_polymorphism::dispatch::Entity;
use oop_polymorphism::heroes::{FlyingHero, Hero, HeroRegistry, TechHero};
use oop_polymorphism::vehicles::{Car, Plane, Vehicle};

#[test]
fn electric_car_drives_and_honks() {
    let mut car = Car::new("Tesla", "Model S", 2023).with_fuel_type("electric");

    let report = car.travel();
    assert!(report.contains("driving"));
    assert!(car.is_moving());

    assert!(car.honk().contains("BEEP BEEP"));

    car.stop();
    assert!(!car.is_moving());
}

#[test]
fn flying_hero_soars_at_its_ceiling() {
    let registry = HeroRegistry::new();
    let mut hero = FlyingHero::new(&registry, "Sky Sentinel", "Maria Garcia")
        .with_max_altitude(15_000)
        .with_power_level(80);

    assert!(hero.use_power().contains("15000"));

    hero.fly();
    assert!(hero.is_flying());
    hero.land();
    assert!(!hero.is_flying());
}

#[test]
fn plane_altitude_follows_travel_and_land() {
    let mut plane = Plane::new("Airbus", "A380", 2022);

    plane.travel();
    assert_eq!(plane.altitude(), Plane::DEFAULT_MAX_ALTITUDE);
    assert!(plane.is_moving());

    plane.land();
    assert_eq!(plane.altitude(), 0);
}

#[test]
fn mixed_collection_dispatches_per_family() {
    let registry = HeroRegistry::new();
    let mut entities: Vec<Entity> = vec![
        Entity::Hero(Box::new(
            FlyingHero::new(&registry, "Wind Walker", "Sam Wilson").with_power_level(85),
        )),
        Entity::Vehicle(Box::new(Car::new("Ferrari", "F40", 2023))),
        Entity::Hero(Box::new(
            TechHero::new(&registry, "Code Master", "Lisa Park").with_power_level(90),
        )),
        Entity::Vehicle(Box::new(Plane::new("Airbus", "A380", 2022))),
    ];

    let outputs: Vec<String> = entities.iter_mut().map(Entity::perform).collect();

    assert!(outputs[0].contains("Wind Walker"));
    assert!(outputs[1].contains("driving"));
    assert!(outputs[2].contains("Code Master"));
    assert!(outputs[3].contains("flying"));
    assert_eq!(registry.total(), 2);
}
