//! Vehicle hierarchy: the "vehicles in action" polymorphism challenge.
//!
//! Same construction as [`crate::heroes`]: shared state in
//! [`VehicleCore`], shared behavior (`stop`, the description line) as
//! default trait methods, and one required polymorphic operation,
//! [`Vehicle::travel`] (`move` being a Rust keyword).
//!
//! The original base class had a `move()` that did not set the moving
//! flag while every subclass override did. That inconsistency is dropped
//! here: `travel` is required, every implementation sets `is_moving`, and
//! there is no constructible bare base vehicle.

use std::fmt;

/// State every vehicle shares.
#[derive(Debug)]
pub struct VehicleCore {
    brand: String,
    model: String,
    year: u32,
    is_moving: bool,
}

impl VehicleCore {
    fn new(brand: impl Into<String>, model: impl Into<String>, year: u32) -> Self {
        VehicleCore {
            brand: brand.into(),
            model: model.into(),
            year,
            is_moving: false,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }
}

/// The vehicle interface. Object-safe.
pub trait Vehicle {
    fn core(&self) -> &VehicleCore;
    fn core_mut(&mut self) -> &mut VehicleCore;

    /// The polymorphic operation. Every implementation sets the moving
    /// flag and reports how this vehicle gets around.
    fn travel(&mut self) -> String;

    /// Clears the moving flag no matter its prior state. Not overridden.
    fn stop(&mut self) -> String {
        self.core_mut().is_moving = false;
        let core = self.core();
        format!("{} {} has stopped.", core.brand, core.model)
    }

    fn brand(&self) -> &str {
        self.core().brand()
    }

    fn model(&self) -> &str {
        self.core().model()
    }

    fn year(&self) -> u32 {
        self.core().year()
    }

    fn is_moving(&self) -> bool {
        self.core().is_moving()
    }

    /// One-line display summary, the original's `__str__`.
    fn description(&self) -> String {
        let core = self.core();
        format!("{} {} {}", core.year, core.brand, core.model)
    }
}

/// Road vehicle. Extra attribute: what it burns (or charges).
#[derive(Debug)]
pub struct Car {
    core: VehicleCore,
    fuel_type: String,
}

impl Car {
    pub const DEFAULT_FUEL_TYPE: &'static str = "gasoline";

    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: u32) -> Self {
        Car {
            core: VehicleCore::new(brand, model, year),
            fuel_type: Self::DEFAULT_FUEL_TYPE.to_string(),
        }
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = fuel_type.into();
        self
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    pub fn honk(&self) -> String {
        format!("{} {} goes BEEP BEEP!", self.core.brand, self.core.model)
    }
}

impl Vehicle for Car {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn travel(&mut self) -> String {
        self.core.is_moving = true;
        format!(
            "{} {} is driving on the highway!",
            self.core.brand, self.core.model
        )
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Air vehicle. Tracks a cruising ceiling and its current altitude.
#[derive(Debug)]
pub struct Plane {
    core: VehicleCore,
    max_altitude: u32,
    altitude: u32,
}

impl Plane {
    pub const DEFAULT_MAX_ALTITUDE: u32 = 35_000;

    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: u32) -> Self {
        Plane {
            core: VehicleCore::new(brand, model, year),
            max_altitude: Self::DEFAULT_MAX_ALTITUDE,
            altitude: 0,
        }
    }

    pub fn with_max_altitude(mut self, feet: u32) -> Self {
        self.max_altitude = feet;
        self
    }

    pub fn max_altitude(&self) -> u32 {
        self.max_altitude
    }

    pub fn altitude(&self) -> u32 {
        self.altitude
    }

    pub fn takeoff(&self) -> String {
        format!("{} {} is taking off!", self.core.brand, self.core.model)
    }

    /// Brings the plane back to ground level, whatever the moving flag
    /// says.
    pub fn land(&mut self) -> String {
        self.altitude = 0;
        format!("{} {} is landing!", self.core.brand, self.core.model)
    }
}

impl Vehicle for Plane {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn travel(&mut self) -> String {
        self.core.is_moving = true;
        self.altitude = self.max_altitude;
        format!(
            "{} {} is flying at {} feet!",
            self.core.brand, self.core.model, self.altitude
        )
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Water vehicle.
#[derive(Debug)]
pub struct Boat {
    core: VehicleCore,
    boat_type: String,
}

impl Boat {
    pub const DEFAULT_BOAT_TYPE: &'static str = "sailboat";

    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: u32) -> Self {
        Boat {
            core: VehicleCore::new(brand, model, year),
            boat_type: Self::DEFAULT_BOAT_TYPE.to_string(),
        }
    }

    pub fn with_boat_type(mut self, boat_type: impl Into<String>) -> Self {
        self.boat_type = boat_type.into();
        self
    }

    pub fn boat_type(&self) -> &str {
        &self.boat_type
    }

    pub fn anchor(&self) -> String {
        format!("{} {} drops anchor!", self.core.brand, self.core.model)
    }
}

impl Vehicle for Boat {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn travel(&mut self) -> String {
        self.core.is_moving = true;
        format!(
            "{} {} is sailing across the ocean!",
            self.core.brand, self.core.model
        )
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Human-powered vehicle.
#[derive(Debug)]
pub struct Bicycle {
    core: VehicleCore,
    gear_count: u32,
}

impl Bicycle {
    pub const DEFAULT_GEAR_COUNT: u32 = 21;

    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: u32) -> Self {
        Bicycle {
            core: VehicleCore::new(brand, model, year),
            gear_count: Self::DEFAULT_GEAR_COUNT,
        }
    }

    pub fn with_gear_count(mut self, gears: u32) -> Self {
        self.gear_count = gears;
        self
    }

    pub fn gear_count(&self) -> u32 {
        self.gear_count
    }

    pub fn ring_bell(&self) -> String {
        format!("{} {} rings its bell!", self.core.brand, self.core.model)
    }
}

impl Vehicle for Bicycle {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn travel(&mut self) -> String {
        self.core.is_moving = true;
        format!(
            "{} {} is pedaling down the bike path!",
            self.core.brand, self.core.model
        )
    }
}

impl fmt::Display for Bicycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
