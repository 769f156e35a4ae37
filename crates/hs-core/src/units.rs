// hs-core/src/units.rs

use uom::si::f64::{
    Power as UomPower, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Power = UomPower;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Value of a power in kilowatts.
#[inline]
pub fn as_kw(p: Power) -> f64 {
    use uom::si::power::kilowatt;
    p.get::<kilowatt>()
}

/// Value of a temperature in degrees Celsius.
#[inline]
pub fn as_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}
