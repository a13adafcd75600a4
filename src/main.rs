//! Demo driver for the OOP polymorphism patterns.
//!
//! Run with: cargo run --bin oop_demo
//!
//! Three scripted showcases: the superhero hierarchy, the vehicle
//! hierarchy, and one loop dispatching across both.

use colored::Colorize;

use oop_polymorphism::dispatch::Entity;
use oop_polymorphism::heroes::{FlyingHero, Hero, HeroRegistry, Superhero, TechHero};
use oop_polymorphism::vehicles::{Bicycle, Boat, Car, Plane, Vehicle};

const BANNER_WIDTH: usize = 50;

fn banner(title: &str) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{}", title.cyan().bold());
    println!("{}", "=".repeat(BANNER_WIDTH));
}

fn hero_showcase(registry: &HeroRegistry) {
    banner("PART 1: SUPERHERO HIERARCHY");

    let mut captain =
        Superhero::new(registry, "Captain Courage", "John Smith").with_power_level(75);
    let mut sentinel = FlyingHero::new(registry, "Sky Sentinel", "Maria Garcia")
        .with_max_altitude(15_000)
        .with_power_level(80);
    let mut guardian = TechHero::new(registry, "Cyber Guardian", "Alex Chen")
        .with_gadget_count(8)
        .with_power_level(70);

    println!("Hero's public name: {}", captain.name());
    println!("Hero's secret identity: {}", captain.real_name());
    println!();

    println!("Heroes using their powers:");
    let heroes: [&dyn Hero; 3] = [&captain, &sentinel, &guardian];
    for hero in heroes {
        println!("- {}", hero.use_power());
    }
    println!();

    println!("Flying Hero specific actions:");
    println!("- {}", sentinel.fly());
    println!("- {}", sentinel.land());
    println!();

    println!("Tech Hero specific actions:");
    println!("- {}", guardian.add_gadget("Nano Shield"));
    println!("- {}", guardian.hack_system());
    println!();

    println!("Mission Results:");
    let heroes: [&mut dyn Hero; 3] = [&mut captain, &mut sentinel, &mut guardian];
    for hero in heroes {
        println!("- {}", hero.complete_mission());
    }

    println!();
    println!("Total Heroes Created: {}", registry.total());
}

fn vehicle_showcase() {
    banner("PART 2: VEHICLE POLYMORPHISM");

    let mut car = Car::new("Tesla", "Model S", 2023).with_fuel_type("electric");
    let mut plane = Plane::new("Boeing", "737", 2022).with_max_altitude(40_000);
    let mut boat = Boat::new("Yamaha", "Wave Runner", 2023).with_boat_type("jetski");
    let mut bike = Bicycle::new("Trek", "Mountain Bike", 2023).with_gear_count(27);

    println!("Polymorphism in action - same method, different behaviors:");
    println!();

    // One loop, four concrete types behind the trait.
    let vehicles: [&mut dyn Vehicle; 4] = [&mut car, &mut plane, &mut boat, &mut bike];
    for vehicle in vehicles {
        println!("{}", vehicle.description());
        println!("   {}", vehicle.travel());
        println!("   {}", vehicle.stop());
        println!();
    }

    println!("Vehicle-specific actions:");
    println!("- {}", car.honk());
    println!("- {}", plane.takeoff());
    println!("- {}", boat.anchor());
    println!("- {}", bike.ring_bell());
}

fn mixed_dispatch(registry: &HeroRegistry) {
    banner("PART 3: DISPATCH ACROSS BOTH HIERARCHIES");

    let mut entities: Vec<Entity> = vec![
        Entity::Hero(Box::new(
            FlyingHero::new(registry, "Wind Walker", "Sam Wilson").with_power_level(85),
        )),
        Entity::Vehicle(Box::new(Car::new("Ferrari", "F40", 2023))),
        Entity::Hero(Box::new(
            TechHero::new(registry, "Code Master", "Lisa Park").with_power_level(90),
        )),
        Entity::Vehicle(Box::new(Plane::new("Airbus", "A380", 2022))),
    ];

    println!("One loop over heroes and vehicles together:");
    for entity in &mut entities {
        println!("{}", entity.perform());
    }
}

fn main() {
    let registry = HeroRegistry::new();

    hero_showcase(&registry);
    println!();
    vehicle_showcase();
    println!();
    mixed_dispatch(&registry);

    println!();
    banner("CONCEPTS DEMONSTRATED");
    println!("- Structs and traits in place of classes");
    println!("- Constructors with builder-style optional fields");
    println!("- Encapsulation via private fields and accessors");
    println!("- Shared behavior through default trait methods");
    println!("- Polymorphism through trait objects");
    println!("- Tagged-union dispatch across hierarchies");
    println!("{}", "=".repeat(BANNER_WIDTH));
}
