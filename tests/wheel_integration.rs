use rand::rngs::StdRng;
use rand::SeedableRng;

use team_wheel::config::{load_config_from, save_config_to, Config};
use team_wheel::engine::{
    calculate_wheel_rotation, draw, pick_random, pool_for_today, slugify, RepeatPolicy,
    SequenceSource, WheelSettings,
};
use team_wheel::{Member, Room, Team};

fn members() -> Vec<Member> {
    vec![
        Member::new("1", "Ann", false),
        Member::new("2", "Bob", true),
        Member::new("3", "Cid", false),
        Member::new("4", "Dee", false),
    ]
}

fn sector_under_pointer(count: usize, rotation: f64, pointer: f64) -> usize {
    let slice = 360.0 / count as f64;
    let wheel_angle = (pointer - rotation).rem_euclid(360.0);
    (wheel_angle / slice).floor() as usize % count
}

#[test]
fn test_pool_skips_vacation_and_keeps_last_winner() {
    let members = members();
    let pool = pool_for_today(&members, Some("3"), RepeatPolicy::default());
    let ids: Vec<&str> = pool.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);

    let pool = pool_for_today(&members, Some("3"), RepeatPolicy::ExcludeLastWinner);
    let ids: Vec<&str> = pool.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
}

#[test]
fn test_pick_from_empty_pool() {
    let empty: Vec<Member> = Vec::new();
    let mut source = SequenceSource::new(vec![0.7]);
    assert!(pick_random(&empty, &mut source).is_none());
    assert_eq!(source.draws(), 0);
}

#[test]
fn test_second_of_four_from_rest() {
    let mut source = SequenceSource::new(vec![0.0]);
    let rotation = calculate_wheel_rotation(1, 4, 0.0, &WheelSettings::default(), &mut source);
    assert_eq!(rotation, 2115.0);
}

#[test]
fn test_seeded_draws_land_on_the_winner() {
    let members = members();
    let pool = pool_for_today(&members, None, RepeatPolicy::default());
    let settings = WheelSettings::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut rotation = 0.0;

    for _ in 0..200 {
        let result = draw(&pool, rotation, &settings, &mut rng).unwrap();
        assert!(result.target_rotation > rotation);
        assert!((5..=8).contains(&result.full_rotations));

        let landed = sector_under_pointer(pool.len(), result.target_rotation, settings.pointer_angle);
        assert_eq!(pool[landed].id, result.winner.id);
        rotation = result.target_rotation;
    }
}

#[test]
fn test_same_seed_same_draw() {
    let members = members();
    let pool = pool_for_today(&members, None, RepeatPolicy::default());
    let settings = WheelSettings::default();

    let a = draw(&pool, 90.0, &settings, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = draw(&pool, 90.0, &settings, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a.winner.id, b.winner.id);
    assert_eq!(a.target_rotation, b.target_rotation);
}

#[test]
fn test_room_reads_store_rows() {
    let team: Team = serde_json::from_str(
        r#"{"id":"t1","name":"Core","slug":"core","last_winner_member_id":"m2"}"#,
    )
    .unwrap();
    let members: Vec<Member> = serde_json::from_str(
        r#"[
            {"id":"m1","name":"Ann","vacation":false,"created_at":"2024-01-01T10:00:00+00:00"},
            {"id":"m2","name":"Bob"}
        ]"#,
    )
    .unwrap();

    let room = Room::new(team, members);
    assert_eq!(room.last_winner().map(|m| m.name.as_str()), Some("Bob"));
    assert_eq!(room.pool(RepeatPolicy::default()).len(), 2);
    assert_eq!(room.find_member("ANN").unwrap().id, "m1");
}

#[test]
fn test_team_slugs() {
    assert_eq!(slugify("Команда Аналитики"), "komanda-analitiki");
    assert_eq!(slugify("QA / Mobile"), "qa-mobile");
    assert_eq!(slugify("中文"), "team");
}

#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        store_url: Some("https://example.supabase.co".to_string()),
        api_key: Some("anon-key".to_string()),
        default_room: Some("core".to_string()),
        wheel: WheelSettings {
            repeat_policy: RepeatPolicy::ExcludeLastWinner,
            ..WheelSettings::default()
        },
    };
    save_config_to(&path, &config).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.default_room.as_deref(), Some("core"));
    assert_eq!(loaded.wheel.repeat_policy, RepeatPolicy::ExcludeLastWinner);
    assert_eq!(loaded.wheel.min_rotations, 5);
}
