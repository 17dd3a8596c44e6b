use house_volume::domain::model::round2;
use house_volume::{sample_house, House, HouseError, Room};
use proptest::prelude::*;

#[test]
fn test_kitchen_volume() {
    let kitchen = Room::new("Kitchen", 3.8, 3.0, 2.8).unwrap();
    assert_eq!(kitchen.volume(), 31.92);
}

#[test]
fn test_sample_house_at_600() {
    let house = sample_house().unwrap();
    assert_eq!(house.price_per_cubic_meter(), 600.0);
    assert_eq!(house.total_volume(), 181.58);
    assert_eq!(house.total_price(), 108948.0);

    let names: Vec<&str> = house.rooms().iter().map(Room::name).collect();
    assert_eq!(
        names,
        vec!["Living Room", "Kitchen", "Master Bedroom", "Guest Bedroom", "Bathroom"]
    );
}

#[test]
fn test_empty_house_is_free() {
    let house = House::new("Empty Lot", 600.0).unwrap();
    assert_eq!(house.total_volume(), 0.0);
    assert_eq!(house.total_price(), 0.0);
}

#[test]
fn test_invalid_construction_fails_immediately() {
    for (l, w, h) in [(0.0, 1.0, 1.0), (1.0, -2.0, 1.0), (1.0, 1.0, f64::NAN), (f64::INFINITY, 1.0, 1.0)] {
        let err = Room::new("Bad", l, w, h).unwrap_err();
        assert!(matches!(err, HouseError::ValidationError { .. }));
    }
    assert!(matches!(
        House::new("Bad", -600.0),
        Err(HouseError::ValidationError { .. })
    ));
}

fn dimension() -> impl Strategy<Value = f64> {
    // centimetre precision, like a tape measure
    (1u32..5000).prop_map(|cm| cm as f64 / 100.0)
}

fn room_dims() -> impl Strategy<Value = (f64, f64, f64)> {
    (dimension(), dimension(), dimension())
}

proptest! {
    #[test]
    fn room_volume_is_rounded_product((l, w, h) in room_dims()) {
        let room = Room::new("Room", l, w, h).unwrap();
        prop_assert_eq!(room.volume(), round2(l * w * h));
    }

    #[test]
    fn house_totals_follow_rooms(
        dims in prop::collection::vec(room_dims(), 0..12),
        price_cents in 1u32..200_000,
    ) {
        let price = price_cents as f64 / 100.0;
        let mut house = House::new("Property Lane 1", price).unwrap();
        for (i, (l, w, h)) in dims.iter().enumerate() {
            house.add_room(Room::new(format!("Room {}", i), *l, *w, *h).unwrap()).unwrap();
        }

        let sum = house.rooms().iter().fold(0.0, |acc, r| acc + r.volume());
        prop_assert_eq!(house.total_volume(), round2(sum));
        prop_assert_eq!(house.total_price(), round2(house.total_volume() * price));
        prop_assert_eq!(house.rooms().len(), dims.len());
    }

    #[test]
    fn insertion_order_is_kept_and_totals_ignore_it(dims in prop::collection::vec(room_dims(), 1..10)) {
        let mut forward = House::with_default_price("Forward 1");
        let mut backward = House::with_default_price("Backward 1");
        for (i, (l, w, h)) in dims.iter().enumerate() {
            forward.add_room(Room::new(format!("Room {}", i), *l, *w, *h).unwrap()).unwrap();
        }
        for (i, (l, w, h)) in dims.iter().enumerate().rev() {
            backward.add_room(Room::new(format!("Room {}", i), *l, *w, *h).unwrap()).unwrap();
        }

        let forward_names: Vec<String> = forward.rooms().iter().map(|r| r.name().to_string()).collect();
        let expected: Vec<String> = (0..dims.len()).map(|i| format!("Room {}", i)).collect();
        prop_assert_eq!(forward_names, expected);

        prop_assert!((forward.total_volume() - backward.total_volume()).abs() < 1e-9);
        prop_assert!((forward.total_price() - backward.total_price()).abs() < 1e-6);
    }
}
