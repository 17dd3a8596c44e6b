use crate::utils::error::{HouseError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use serde::Serialize;

pub const DEFAULT_PRICE_PER_CUBIC_METER: f64 = 500.0;

/// Rounds half away from zero to two decimals.
///
/// The scaled value is pre-rounded to 15 significant digits first, so binary
/// representation error does not flip a visible half: `round2(1.005) == 1.01`
/// and `round2(5.5 * 4.2 * 2.8) == 64.68`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = value * 100.0;
    // past ~1e306 there are no cents left to round
    if !scaled.is_finite() {
        return value;
    }
    let pre_rounded = format!("{:.14e}", scaled).parse::<f64>().unwrap_or(scaled);
    pre_rounded.round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    name: String,
    length: f64,
    width: f64,
    height: f64,
    volume: f64,
}

impl Room {
    pub fn new(name: impl Into<String>, length: f64, width: f64, height: f64) -> Result<Self> {
        let mut room = Self {
            name: name.into(),
            length: 0.0,
            width: 0.0,
            height: 0.0,
            volume: 0.0,
        };
        room.set_dimensions(length, width, height)?;
        Ok(room)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces all three dimensions and recomputes the volume. The room is
    /// left untouched when any dimension, or the resulting volume, is rejected.
    pub fn set_dimensions(&mut self, length: f64, width: f64, height: f64) -> Result<()> {
        validate_positive_number("room.length", length)?;
        validate_positive_number("room.width", width)?;
        validate_positive_number("room.height", height)?;

        let volume = round2(length * width * height);
        ensure_finite("room.volume", volume)?;

        self.length = length;
        self.width = width;
        self.height = height;
        self.volume = volume;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }
}

impl Validate for Room {
    fn validate(&self) -> Result<()> {
        validate_positive_number("room.length", self.length)?;
        validate_positive_number("room.width", self.width)?;
        validate_positive_number("room.height", self.height)?;
        ensure_finite("room.volume", self.volume)
    }
}

fn ensure_finite(field_name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HouseError::validation(
            field_name,
            value,
            "Value is too large to represent",
        ))
    }
}

/// A priced collection of rooms. Totals are computed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    address: String,
    price_per_cubic_meter: f64,
    rooms: Vec<Room>,
}

impl House {
    pub fn new(address: impl Into<String>, price_per_cubic_meter: f64) -> Result<Self> {
        let mut house = Self::with_default_price(address);
        house.set_price_per_cubic_meter(price_per_cubic_meter)?;
        Ok(house)
    }

    pub fn with_default_price(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            price_per_cubic_meter: DEFAULT_PRICE_PER_CUBIC_METER,
            rooms: Vec::new(),
        }
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_price_per_cubic_meter(&mut self, price: f64) -> Result<()> {
        validate_positive_number("house.price_per_cubic_meter", price)?;
        ensure_finite_totals(self.total_volume(), price)?;
        self.price_per_cubic_meter = price;
        Ok(())
    }

    /// Appends a room. Rejected, leaving the house unchanged, when the new
    /// totals would no longer be finite.
    pub fn add_room(&mut self, room: Room) -> Result<()> {
        ensure_finite_totals(
            round2(self.room_volume_sum() + room.volume()),
            self.price_per_cubic_meter,
        )?;
        tracing::debug!(room = room.name(), volume = room.volume(), "Adding room");
        self.rooms.push(room);
        Ok(())
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn price_per_cubic_meter(&self) -> f64 {
        self.price_per_cubic_meter
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    fn room_volume_sum(&self) -> f64 {
        self.rooms.iter().map(Room::volume).fold(0.0, |acc, v| acc + v)
    }

    pub fn total_volume(&self) -> f64 {
        round2(self.room_volume_sum())
    }

    pub fn total_price(&self) -> f64 {
        round2(self.total_volume() * self.price_per_cubic_meter)
    }
}

impl Validate for House {
    fn validate(&self) -> Result<()> {
        validate_positive_number("house.price_per_cubic_meter", self.price_per_cubic_meter)?;
        self.rooms.iter().try_for_each(|room| room.validate())?;
        ensure_finite_totals(self.total_volume(), self.price_per_cubic_meter)
    }
}

fn ensure_finite_totals(total_volume: f64, price: f64) -> Result<()> {
    ensure_finite("house.total_volume", total_volume)?;
    ensure_finite("house.total_price", round2(total_volume * price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HouseError;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(1.005), 1.01);
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(-1.005), -1.01);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(31.92), 31.92);
        assert_eq!(round2(5.5 * 4.2 * 2.8), 64.68);
    }

    #[test]
    fn test_room_volume_is_rounded() {
        let kitchen = Room::new("Kitchen", 3.8, 3.0, 2.8).unwrap();
        assert_eq!(kitchen.volume(), 31.92);
        assert_eq!(kitchen.name(), "Kitchen");
        assert_eq!(kitchen.length(), 3.8);
        assert_eq!(kitchen.width(), 3.0);
        assert_eq!(kitchen.height(), 2.8);
    }

    #[test]
    fn test_set_dimensions_recomputes_volume() {
        let mut room = Room::new("Study", 2.0, 2.0, 2.0).unwrap();
        room.set_dimensions(3.0, 2.0, 2.5).unwrap();
        assert_eq!(room.volume(), 15.0);
    }

    #[test]
    fn test_rejected_dimensions_leave_room_unchanged() {
        let mut room = Room::new("Study", 2.0, 2.0, 2.0).unwrap();
        let err = room.set_dimensions(3.0, -1.0, 2.5).unwrap_err();
        assert!(matches!(err, HouseError::ValidationError { ref field, .. } if field == "room.width"));
        assert_eq!(room.length(), 2.0);
        assert_eq!(room.volume(), 8.0);
    }

    #[test]
    fn test_set_name_keeps_volume() {
        let mut room = Room::new("Box", 1.0, 2.0, 3.0).unwrap();
        room.set_name("Storage");
        assert_eq!(room.name(), "Storage");
        assert_eq!(room.volume(), 6.0);
    }

    #[test]
    fn test_house_defaults_and_empty_totals() {
        let house = House::with_default_price("Nowhere 1");
        assert_eq!(house.price_per_cubic_meter(), DEFAULT_PRICE_PER_CUBIC_METER);
        assert!(house.rooms().is_empty());
        assert_eq!(house.total_volume(), 0.0);
        assert_eq!(house.total_price(), 0.0);
    }

    #[test]
    fn test_house_rejects_bad_price() {
        assert!(House::new("Nowhere 1", 0.0).is_err());
        assert!(House::new("Nowhere 1", f64::NAN).is_err());

        let mut house = House::new("Nowhere 1", 450.0).unwrap();
        assert!(house.set_price_per_cubic_meter(-10.0).is_err());
        assert_eq!(house.price_per_cubic_meter(), 450.0);
    }

    #[test]
    fn test_totals_follow_price_changes() {
        let mut house = House::new("Nowhere 1", 100.0).unwrap();
        house.add_room(Room::new("Hall", 2.0, 1.5, 2.5).unwrap()).unwrap();
        assert_eq!(house.total_volume(), 7.5);
        assert_eq!(house.total_price(), 750.0);

        house.set_price_per_cubic_meter(200.0).unwrap();
        assert_eq!(house.total_price(), 1500.0);
    }

    #[test]
    fn test_duplicate_rooms_are_kept() {
        let room = Room::new("Cell", 1.0, 1.0, 1.0).unwrap();
        let mut house = House::with_default_price("Block A");
        house.add_room(room.clone()).unwrap();
        house.add_room(room).unwrap();
        assert_eq!(house.rooms().len(), 2);
        assert_eq!(house.total_volume(), 2.0);
    }

    #[test]
    fn test_overflowing_volume_is_rejected() {
        let err = Room::new("Huge", 1e200, 1e200, 1e200).unwrap_err();
        assert!(matches!(err, HouseError::ValidationError { ref field, .. } if field == "room.volume"));

        let mut room = Room::new("Study", 2.0, 2.0, 2.0).unwrap();
        assert!(room.set_dimensions(1e150, 1e150, 1e150).is_err());
        assert_eq!(room.volume(), 8.0);
    }

    #[test]
    fn test_house_totals_stay_finite() {
        let big = Room::new("Hangar", 1e102, 1e102, 1e102).unwrap();
        assert!(big.volume().is_finite());

        // volume fits, but any price above ~180 per m³ overflows the total price
        let mut house = House::new("Airfield 1", 100.0).unwrap();
        house.add_room(big.clone()).unwrap();
        let err = house.set_price_per_cubic_meter(1e10).unwrap_err();
        assert!(matches!(err, HouseError::ValidationError { ref field, .. } if field == "house.total_price"));
        assert_eq!(house.price_per_cubic_meter(), 100.0);

        let mut house = House::new("Airfield 2", 1.0).unwrap();
        for _ in 0..179 {
            house.add_room(big.clone()).unwrap();
        }
        let err = house.add_room(Room::new("Spare", 1e154, 1e154, 1.0).unwrap()).unwrap_err();
        assert!(matches!(err, HouseError::ValidationError { ref field, .. } if field == "house.total_volume"));
        assert_eq!(house.rooms().len(), 179);
        assert!(house.total_price().is_finite());
    }
}
