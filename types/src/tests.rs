use super::*;
use proptest::prelude::*;

fn pocket(value: u8) -> Pocket {
    Pocket::new(value).unwrap()
}

#[test]
fn test_pocket_rejects_out_of_range() {
    assert!(Pocket::new(36).is_ok());
    assert!(matches!(
        Pocket::new(37),
        Err(TargetError::PocketOutOfRange { got: 37, max: 36 })
    ));
    assert!(Pocket::new(255).is_err());
}

#[test]
fn test_pocket_color_assignment() {
    // Fixed European assignment, zero is green.
    let reds = [
        1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
    ];
    assert_eq!(pocket(0).color(), Color::Green);
    for value in 1..=36 {
        let expected = if reds.contains(&value) {
            Color::Red
        } else {
            Color::Black
        };
        assert_eq!(pocket(value).color(), expected, "pocket {}", value);
    }
}

#[test]
fn test_wheel_order_is_permutation() {
    let mut seen = [false; POCKET_COUNT];
    for value in WHEEL_ORDER {
        assert!(!seen[value as usize], "duplicate slot for {}", value);
        seen[value as usize] = true;
    }
    assert!(seen.iter().all(|&present| present));
}

#[test]
fn test_wheel_slot_and_angle() {
    assert_eq!(wheel_slot(Pocket::ZERO), 0);
    assert_eq!(slot_angle_degrees(Pocket::ZERO), 0.0);
    assert_eq!(wheel_slot(pocket(32)), 1);
    assert_eq!(wheel_slot(pocket(26)), 36);
    let angle = slot_angle_degrees(pocket(26));
    assert!((angle - 36.0 * 360.0 / 37.0).abs() < 1e-9);
}

#[test]
fn test_payout_multipliers() {
    assert_eq!(BetTarget::Straight(pocket(17)).payout_multiplier(), 35);
    assert_eq!(BetTarget::Red.payout_multiplier(), 1);
    assert_eq!(BetTarget::Black.payout_multiplier(), 1);
    assert_eq!(BetTarget::Even.payout_multiplier(), 1);
    assert_eq!(BetTarget::Odd.payout_multiplier(), 1);
    assert_eq!(BetTarget::Low.payout_multiplier(), 1);
    assert_eq!(BetTarget::High.payout_multiplier(), 1);
    assert_eq!(BetTarget::Dozen(Dozen::First).payout_multiplier(), 2);
    assert_eq!(BetTarget::Column(Column::Third).payout_multiplier(), 2);
}

#[test]
fn test_target_display_names() {
    assert_eq!(BetTarget::Straight(pocket(17)).to_string(), "Number 17");
    assert_eq!(BetTarget::Red.to_string(), "Red");
    assert_eq!(BetTarget::Low.to_string(), "1-18");
    assert_eq!(BetTarget::High.to_string(), "19-36");
    assert_eq!(BetTarget::Dozen(Dozen::First).to_string(), "1st Dozen");
    assert_eq!(BetTarget::Dozen(Dozen::Third).to_string(), "3rd Dozen");
    assert_eq!(BetTarget::Column(Column::Second).to_string(), "Column 2");
}

#[test]
fn test_target_json_shape() {
    // The browser UI sends targets in exactly this shape.
    let straight = serde_json::to_value(BetTarget::Straight(pocket(17))).unwrap();
    assert_eq!(straight, serde_json::json!({"kind": "straight", "value": 17}));

    let red = serde_json::to_value(BetTarget::Red).unwrap();
    assert_eq!(red, serde_json::json!({"kind": "red"}));

    let dozen = serde_json::to_value(BetTarget::Dozen(Dozen::Second)).unwrap();
    assert_eq!(dozen, serde_json::json!({"kind": "dozen", "value": "second"}));
}

#[test]
fn test_pocket_deserialize_revalidates() {
    assert!(serde_json::from_str::<Pocket>("36").is_ok());
    assert!(serde_json::from_str::<Pocket>("37").is_err());
    let target: Result<BetTarget, _> =
        serde_json::from_value(serde_json::json!({"kind": "straight", "value": 40}));
    assert!(target.is_err());
}

fn target_strategy() -> impl Strategy<Value = BetTarget> {
    let dozen = prop_oneof![
        Just(Dozen::First),
        Just(Dozen::Second),
        Just(Dozen::Third)
    ];
    let column = prop_oneof![
        Just(Column::First),
        Just(Column::Second),
        Just(Column::Third)
    ];
    prop_oneof![
        (0u8..=36).prop_map(|n| BetTarget::Straight(Pocket::new(n).unwrap())),
        Just(BetTarget::Red),
        Just(BetTarget::Black),
        Just(BetTarget::Even),
        Just(BetTarget::Odd),
        Just(BetTarget::Low),
        Just(BetTarget::High),
        dozen.prop_map(BetTarget::Dozen),
        column.prop_map(BetTarget::Column),
    ]
}

proptest! {
    #[test]
    fn prop_pocket_new_matches_range(value: u8) {
        prop_assert_eq!(Pocket::new(value).is_ok(), value <= 36);
    }

    #[test]
    fn prop_target_serde_roundtrip(target in target_strategy()) {
        let encoded = serde_json::to_string(&target).unwrap();
        let decoded: BetTarget = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(target, decoded);
    }
}
