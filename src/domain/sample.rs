use crate::domain::model::{House, Room};
use crate::utils::error::Result;

pub const SAMPLE_ADDRESS: &str = "Kerkstraat 42, Amsterdam";
pub const SAMPLE_PRICE_PER_CUBIC_METER: f64 = 600.0;

const SAMPLE_ROOMS: [(&str, f64, f64, f64); 5] = [
    ("Living Room", 5.5, 4.2, 2.8),
    ("Kitchen", 3.8, 3.0, 2.8),
    ("Master Bedroom", 4.5, 3.5, 2.8),
    ("Guest Bedroom", 3.2, 3.0, 2.8),
    ("Bathroom", 2.5, 2.0, 2.8),
];

/// The demo house used when no configuration file is given.
pub fn sample_house() -> Result<House> {
    let mut house = House::new(SAMPLE_ADDRESS, SAMPLE_PRICE_PER_CUBIC_METER)?;
    for (name, length, width, height) in SAMPLE_ROOMS {
        house.add_room(Room::new(name, length, width, height)?)?;
    }
    Ok(house)
}
