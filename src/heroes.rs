//! Superhero hierarchy: a base "class" rebuilt from composition plus a
//! trait with default methods.
//!
//! Shared attributes live in [`HeroCore`]; each concrete hero embeds one
//! and wires it up through [`Hero::core`] / [`Hero::core_mut`]. Shared
//! behavior (`introduce`, `complete_mission`, the summary line) is written
//! once as default trait methods, and only [`Hero::use_power`] is
//! overridden per variant.
//!
//! The original exercise kept a class-level `total_heroes` counter. Here
//! that is an explicit [`HeroRegistry`] handed to every constructor, so
//! the shared state is visible in the signature and atomic if anyone ever
//! constructs heroes off the main thread.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Power level used when a constructor is not given one.
pub const DEFAULT_POWER_LEVEL: u32 = 50;

/// Fixed power gain per completed mission.
const MISSION_POWER_BONUS: u32 = 5;

/// Counts every hero ever constructed. Increment-only.
#[derive(Debug, Default)]
pub struct HeroRegistry {
    total: AtomicUsize,
}

impl HeroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of heroes constructed against this registry.
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    fn register(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }
}

/// State every hero shares: the fields the original base class owned.
///
/// `name` and `real_name` are private and immutable after construction;
/// callers go through the accessors.
#[derive(Debug)]
pub struct HeroCore {
    name: String,
    real_name: String,
    power_level: u32,
    is_active: bool,
    missions_completed: u32,
}

impl HeroCore {
    fn new(
        registry: &HeroRegistry,
        name: impl Into<String>,
        real_name: impl Into<String>,
    ) -> Self {
        registry.register();
        HeroCore {
            name: name.into(),
            real_name: real_name.into(),
            power_level: DEFAULT_POWER_LEVEL,
            is_active: true,
            missions_completed: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn real_name(&self) -> &str {
        &self.real_name
    }

    pub fn power_level(&self) -> u32 {
        self.power_level
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn missions_completed(&self) -> u32 {
        self.missions_completed
    }
}

/// The hero interface. Object-safe, so heterogeneous collections can hold
/// `Box<dyn Hero>` or `&mut dyn Hero`.
pub trait Hero {
    fn core(&self) -> &HeroCore;
    fn core_mut(&mut self) -> &mut HeroCore;

    fn name(&self) -> &str {
        self.core().name()
    }

    fn real_name(&self) -> &str {
        self.core().real_name()
    }

    fn power_level(&self) -> u32 {
        self.core().power_level()
    }

    fn is_active(&self) -> bool {
        self.core().is_active()
    }

    fn missions_completed(&self) -> u32 {
        self.core().missions_completed()
    }

    /// Same greeting for every variant; never overridden.
    fn introduce(&self) -> String {
        format!("I am {}! Ready to protect the world!", self.name())
    }

    /// The polymorphic operation. The default body is the plain-hero
    /// behavior; variants override it.
    fn use_power(&self) -> String {
        format!("{} uses their incredible powers!", self.name())
    }

    /// Bumps the mission counter and grows power by a fixed amount.
    fn complete_mission(&mut self) -> String {
        let core = self.core_mut();
        core.missions_completed += 1;
        core.power_level += MISSION_POWER_BONUS;
        format!(
            "{} completed a mission! Power level now: {}",
            core.name, core.power_level
        )
    }

    /// One-line display summary, the original's `__str__`.
    fn summary(&self) -> String {
        let core = self.core();
        format!(
            "{} (Power: {}, Missions: {})",
            core.name, core.power_level, core.missions_completed
        )
    }

    /// Sets the starting power level. Builder-style because Rust has no
    /// default arguments; call it right after `new`.
    fn with_power_level(mut self, power_level: u32) -> Self
    where
        Self: Sized,
    {
        self.core_mut().power_level = power_level;
        self
    }
}

/// A hero with no specialty: just the shared state and the default
/// `use_power`.
#[derive(Debug)]
pub struct Superhero {
    core: HeroCore,
}

impl Superhero {
    pub fn new(
        registry: &HeroRegistry,
        name: impl Into<String>,
        real_name: impl Into<String>,
    ) -> Self {
        Superhero {
            core: HeroCore::new(registry, name, real_name),
        }
    }
}

impl Hero for Superhero {
    fn core(&self) -> &HeroCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HeroCore {
        &mut self.core
    }
}

impl fmt::Display for Superhero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Hero variant that flies. Adds an altitude ceiling and an in-flight flag.
#[derive(Debug)]
pub struct FlyingHero {
    core: HeroCore,
    max_altitude: u32,
    is_flying: bool,
}

impl FlyingHero {
    pub const DEFAULT_MAX_ALTITUDE: u32 = 10_000;

    pub fn new(
        registry: &HeroRegistry,
        name: impl Into<String>,
        real_name: impl Into<String>,
    ) -> Self {
        FlyingHero {
            core: HeroCore::new(registry, name, real_name),
            max_altitude: Self::DEFAULT_MAX_ALTITUDE,
            is_flying: false,
        }
    }

    pub fn with_max_altitude(mut self, feet: u32) -> Self {
        self.max_altitude = feet;
        self
    }

    pub fn max_altitude(&self) -> u32 {
        self.max_altitude
    }

    pub fn is_flying(&self) -> bool {
        self.is_flying
    }

    pub fn fly(&mut self) -> String {
        self.is_flying = true;
        format!("{} takes flight!", self.core.name())
    }

    pub fn land(&mut self) -> String {
        self.is_flying = false;
        format!("{} lands gracefully!", self.core.name())
    }
}

impl Hero for FlyingHero {
    fn core(&self) -> &HeroCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HeroCore {
        &mut self.core
    }

    fn use_power(&self) -> String {
        format!(
            "{} soars through the sky at {} feet!",
            self.core.name(),
            self.max_altitude
        )
    }
}

impl fmt::Display for FlyingHero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Hero variant built on gadgets. `gadget_count` is the advertised
/// capacity; the gadget list itself is append-only and unbounded.
#[derive(Debug)]
pub struct TechHero {
    core: HeroCore,
    gadget_count: u32,
    gadgets: Vec<String>,
}

impl TechHero {
    pub const DEFAULT_GADGET_COUNT: u32 = 5;

    pub fn new(
        registry: &HeroRegistry,
        name: impl Into<String>,
        real_name: impl Into<String>,
    ) -> Self {
        TechHero {
            core: HeroCore::new(registry, name, real_name),
            gadget_count: Self::DEFAULT_GADGET_COUNT,
            gadgets: Vec::new(),
        }
    }

    pub fn with_gadget_count(mut self, count: u32) -> Self {
        self.gadget_count = count;
        self
    }

    pub fn gadget_count(&self) -> u32 {
        self.gadget_count
    }

    /// Acquired gadgets, in acquisition order.
    pub fn gadgets(&self) -> &[String] {
        &self.gadgets
    }

    pub fn add_gadget(&mut self, gadget: impl Into<String>) -> String {
        let gadget = gadget.into();
        let report = format!("{} acquired new gadget: {}!", self.core.name(), gadget);
        self.gadgets.push(gadget);
        report
    }

    pub fn hack_system(&self) -> String {
        format!("{} hacks into enemy systems!", self.core.name())
    }
}

impl Hero for TechHero {
    fn core(&self) -> &HeroCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HeroCore {
        &mut self.core
    }

    fn use_power(&self) -> String {
        format!("{} deploys high-tech gadgets!", self.core.name())
    }
}

impl fmt::Display for TechHero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
