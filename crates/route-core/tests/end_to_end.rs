use approx::assert_abs_diff_eq;
use route_core::{
    estimate_times, fastest, haversine_km, plan, plan_by_name, rank_ascending, resolve,
    resolve_exact, suggest, CityRecord, Gazetteer, ModeTable, RawCity, Resolution, RouteError,
};

fn uk_france() -> (CityRecord, CityRecord) {
    (
        CityRecord::new("London", "UK", 51.5074, -0.1278).unwrap(),
        CityRecord::new("Paris", "France", 48.8566, 2.3522).unwrap(),
    )
}

#[test]
fn london_paris_international_flight() {
    let (london, paris) = uk_france();
    let modes = ModeTable::default();

    let d = haversine_km(london.latitude, london.longitude, paris.latitude, paris.longitude);
    assert_abs_diff_eq!(d, 343.56, epsilon = 0.005);

    let times = estimate_times(d, &london, &paris, &modes).unwrap();
    let base = modes[1].base_minutes(d);
    let air = times[1];
    assert_eq!(air.total_minutes(), (base + 180.0).round() as u32);
}

#[test]
fn air_overhead_only_depends_on_country() {
    let modes = ModeTable::default();
    let (london, paris) = uk_france();
    let paris_uk = CityRecord::new("Paris", "UK", 48.8566, 2.3522).unwrap();

    let intl = estimate_times(500.0, &london, &paris, &modes).unwrap();
    let dom = estimate_times(500.0, &london, &paris_uk, &modes).unwrap();

    assert_eq!(intl[1].total_minutes() - dom[1].total_minutes(), 60);
    // every other mode is unaffected by the country
    for i in [0, 2, 3, 4] {
        assert_eq!(intl[i], dom[i]);
    }
}

#[test]
fn bundled_data_resolution_protocol() {
    let gaz = Gazetteer::load().unwrap();

    // exact, case-insensitive, first match for duplicate names
    assert_eq!(resolve_exact("PARIS", gaz).unwrap(), resolve_exact("paris", gaz).unwrap());
    assert_eq!(resolve_exact("Paris", gaz).unwrap().country(), "France");
    assert_eq!(resolve_exact(" london ", gaz).unwrap().country(), "United Kingdom");

    // miss -> suggestion -> confirmed exact lookup
    let Resolution::Suggested(s) = resolve("Melbourn", gaz) else {
        panic!("expected a suggestion");
    };
    assert_eq!(s.city.name(), "Melbourne");
    assert_eq!(s.distance, 1);
    assert_eq!(resolve_exact(s.city.name(), gaz).unwrap(), s.city);
}

#[test]
fn single_near_miss_entry() {
    let gaz = Gazetteer::from_rows(vec![
        RawCity::new("United Kingdom", "London", "51.5074", "-0.1278"),
        RawCity::new("Japan", "Tokyo", "35.6762", "139.6503"),
    ])
    .unwrap();
    let s = suggest("Lodnon", &gaz).unwrap();
    assert_eq!((s.city.name(), s.distance), ("London", 2));
    assert!(matches!(resolve_exact("Lodnon", &gaz), Err(RouteError::NotFound(_))));
}

#[test]
fn preset_pairs_all_plan() {
    let gaz = Gazetteer::load().unwrap();
    let modes = ModeTable::load().unwrap();
    let pairs = [
        ("Tokyo", "Damascus"),
        ("Beijing", "Moscow"),
        ("Cairo", "Bangkok"),
        ("Mexico City", "New York"),
        ("Seoul", "Istanbul"),
        ("Paris", "Berlin"),
        ("London", "Guangzhou"),
        ("Hong Kong", "Chicago"),
        ("Sydney", "Melbourne"),
        ("Athens", "Darwin"),
    ];

    for (o, d) in pairs {
        let report = plan_by_name(gaz, o, d, modes).unwrap();
        assert_eq!(report.estimates.len(), 5);
        assert!(report.estimates.iter().all(|e| e.minutes < 60));

        let best = report.estimates[report.fastest].total_minutes();
        assert!(report.estimates.iter().all(|e| best <= e.total_minutes()));
        assert_eq!(report.ranked[0].total_minutes(), best);
    }
}

#[test]
fn ranking_round_trips_to_mode_labels() {
    let gaz = Gazetteer::load().unwrap();
    let modes = ModeTable::default();
    let o = resolve_exact("Sydney", gaz).unwrap();
    let d = resolve_exact("Melbourne", gaz).unwrap();
    let report = plan(o, d, &modes).unwrap();

    let ranked = rank_ascending(&report.estimates);
    assert_eq!(ranked, report.ranked);
    assert_eq!(Some(ranked[0].mode_index), fastest(&report.estimates));

    let mut indices: Vec<_> = ranked.iter().map(|e| e.mode_index).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}
