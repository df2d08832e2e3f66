#![forbid(unsafe_code)]
#![cfg(feature = "serde")]

//! Configuration and effects survive a JSON round trip.

use pinp_core::animation::{Curve, SpringParams};
use pinp_core::edge::PulloutSide;
use pinp_core::geometry::Point;
use pinp_widgets::{Effect, Motion, PinpConfig, PulloutAffordance};

#[test]
fn config_round_trips_through_json() {
    let config = PinpConfig::default()
        .with_margin(24.0)
        .with_fade(0.3, Curve::EaseOut);
    let json = serde_json::to_string(&config).expect("serialize config");
    let back: PinpConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(back, config);
}

#[test]
fn partial_config_fills_defaults() {
    let back: PinpConfig =
        serde_json::from_str(r#"{ "margin": 12.0 }"#).expect("deserialize partial config");
    assert_eq!(back, PinpConfig::default().with_margin(12.0));
    assert_eq!(back.validate(), Ok(()));
}

#[test]
fn effects_serialize_with_snake_case_tags() {
    let effects = vec![
        Effect::SetPullout(PulloutAffordance::shown(PulloutSide::Left)),
        Effect::MoveCenter {
            center: Point::new(50.0, 400.0),
            motion: Motion::Spring(SpringParams::SNAP),
        },
        Effect::Minimize(true),
    ];
    let json = serde_json::to_value(&effects).expect("serialize effects");
    assert_eq!(json[0]["set_pullout"]["side"], "left");
    assert_eq!(json[1]["move_center"]["center"]["x"], 50.0);
    assert!(json[1]["move_center"]["motion"]["spring"].is_object());
    assert_eq!(json[2]["minimize"], true);

    let back: Vec<Effect> = serde_json::from_value(json).expect("deserialize effects");
    assert_eq!(back, effects);
}
