use chrono::{DateTime, TimeZone, Utc};
use qtty::Days;
use skydial::{
    map_visual_state, resolve, ClockBoard, ClockError, CelestialBody, DayPeriod, FixedClock,
    HourCycle, Location, SkyGradient, TimeZoneId,
};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn london_midnight_is_night_at_the_lower_clamp() {
    let fields = resolve(&utc(2024, 1, 15, 0, 0), &TimeZoneId::new("Europe/London")).unwrap();
    let sky = map_visual_state(&fields);
    assert_eq!(sky.day_progress_percent, 0.0);
    assert!(sky.is_night);
    assert_eq!(sky.sky_gradient, SkyGradient::Night);
    assert_eq!(sky.body_position_percent, 10.0);
    assert_eq!(sky.body(), CelestialBody::Moon);
    assert_eq!(fields.elapsed_of_day(), Days::new(0.0));
}

#[test]
fn summer_time_shifts_the_band() {
    // 05:30 UTC is 05:30 GMT in winter but 06:30 BST in summer.
    let zone = TimeZoneId::new("Europe/London");
    let winter = map_visual_state(&resolve(&utc(2024, 1, 15, 5, 30), &zone).unwrap());
    let summer = map_visual_state(&resolve(&utc(2024, 7, 15, 5, 30), &zone).unwrap());
    assert_eq!(winter.period, DayPeriod::Night);
    assert!(winter.is_night);
    assert_eq!(summer.period, DayPeriod::Dawn);
    assert!(!summer.is_night);
}

#[test]
fn afternoon_progress_uses_the_24_hour_value() {
    // 15:00 local must read as 62.5%, not as 3 PM → 12.5%.
    let fields = resolve(&utc(2024, 3, 1, 15, 0), &TimeZoneId::new("UTC")).unwrap();
    let sky = map_visual_state(&fields);
    assert_eq!(sky.day_progress_percent, 62.5);
    assert_eq!(sky.period, DayPeriod::Day);
}

#[test]
fn invalid_zone_is_a_typed_error() {
    for id in ["", "utc/nowhere", "Europe/Londn"] {
        let err = resolve(&utc(2024, 1, 1, 0, 0), &TimeZoneId::new(id)).unwrap_err();
        assert!(matches!(err, ClockError::InvalidTimeZone(ref got) if got == id));
        assert!(err.is_recoverable());
    }
}

#[test]
fn resolving_twice_is_identical() {
    let instant = utc(2024, 10, 27, 0, 59);
    let zone = TimeZoneId::new("Europe/Berlin");
    let first = resolve(&instant, &zone).unwrap();
    let second = resolve(&instant, &zone).unwrap();
    assert_eq!(first, second);
    assert_eq!(map_visual_state(&first), map_visual_state(&second));
}

#[test]
fn board_end_to_end() {
    let mut board = ClockBoard::with_defaults();
    board.config_mut().hour_cycle = HourCycle::H12;
    board.add_city("Mumbai").unwrap();
    board.locations_mut().push(Location::new("Typo", "Asia/Tokio"));
    assert!(board.move_up(4));

    let clock = FixedClock(utc(2024, 1, 15, 12, 0));
    let cards = board.tick_from(&clock);

    let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["New York", "London", "Tokyo", "Mumbai", "Auckland", "Typo"]);

    // Mumbai is UTC+05:30.
    assert_eq!(cards[3].time_text, "05:30 PM");
    assert_eq!(cards[3].visual().unwrap().period, DayPeriod::Dusk);

    let typo = &cards[5];
    assert!(typo.is_last);
    assert_eq!(typo.time_text, board.config().placeholder);
    assert!(matches!(typo.face, Err(ClockError::InvalidTimeZone(_))));
}

#[cfg(feature = "serde")]
#[test]
fn visual_state_serialises_with_tag_names() {
    let fields = resolve(&utc(2024, 1, 15, 17, 0), &TimeZoneId::new("UTC")).unwrap();
    let json = serde_json::to_string(&map_visual_state(&fields)).unwrap();
    assert!(json.contains(r#""sky_gradient":"DUSK""#));
    assert!(json.contains(r#""progress_bar_color":"DUSK""#));
    assert!(json.contains(r#""period":"dusk""#));
}

#[cfg(feature = "serde")]
#[test]
fn location_list_roundtrips_through_json() {
    let list = skydial::LocationList::with_defaults();
    let json = serde_json::to_string(&list).unwrap();
    assert!(json.starts_with(r#"[{"name":"New York","timezone":"America/New_York"}"#));
    let back: skydial::LocationList = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
}
