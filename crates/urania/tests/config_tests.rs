use std::fs;

use urania::aspects::{ActivePolicy, AspectCalculator, AspectClass, MAJOR_ASPECTS};
use urania::chart::{ids, ChartSnapshot};
use urania::directions::{build_table, TermVariant};
use urania::zodiac::Sign;
use urania::Settings;

#[test]
fn test_empty_settings_are_defaults() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.aspects.exact_orb, 0.3);
    assert_eq!(settings.aspects.minor_orb, 3.0);
    assert_eq!(settings.aspects.active_policy, ActivePolicy::Strict);
    assert_eq!(settings.directions.max_arc, 100.0);
    assert_eq!(settings.directions.terms, TermVariant::Egyptian);
}

#[test]
fn test_sections_override_defaults() {
    let toml = r#"
        [aspects]
        active_policy = "conjunctions_only"
        static_passive_inherits = true

        [orbs]
        sun = 17.0
        saturn = 10.5

        [directions]
        max_arc = 90.0
        significators = ["sun", "moon"]
        angles = ["asc"]
    "#;
    let settings = Settings::from_toml_str(toml).unwrap();
    assert_eq!(settings.aspects.active_policy, ActivePolicy::ConjunctionsOnly);
    assert!(settings.aspects.static_passive_inherits);
    assert_eq!(settings.orb_for(ids::SUN), 17.0);
    assert_eq!(settings.orb_for(ids::MOON), 12.0);
    assert_eq!(settings.orb_for(ids::ASC), 0.0);
    assert_eq!(settings.directions.max_arc, 90.0);
    assert_eq!(settings.directions.angles, vec!["asc".to_string()]);
    // untouched lists keep their defaults
    assert_eq!(settings.directions.promissors.len(), 10);
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(Settings::from_toml_str("[aspects]\nexact = 0.5\n").is_err());
    assert!(Settings::from_toml_str("[houses]\nsystem = \"placidus\"\n").is_err());
    assert!(Settings::from_toml_str("[aspects]\nactive_policy = \"lenient\"\n").is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Settings::from_toml_str("[orbs]\nsun = -1.0\n").is_err());
    assert!(Settings::from_toml_str("[directions]\nmax_arc = 0.0\n").is_err());
    assert!(Settings::from_toml_str("[aspects]\nminor_orb = -3.0\n").is_err());

    let duplicated = r#"
        [[aspects.catalogue]]
        angle = 90.0
        name = "square"
        class = "major"

        [[aspects.catalogue]]
        angle = 90.0
        name = "quadrature"
        class = "major"
    "#;
    assert!(Settings::from_toml_str(duplicated).is_err());
}

#[test]
fn test_custom_catalogue() {
    let toml = r#"
        [[aspects.catalogue]]
        angle = 0.0
        name = "conjunction"
        class = "major"

        [[aspects.catalogue]]
        angle = 40.0
        name = "novile"
        class = "major"
    "#;
    let settings = Settings::from_toml_str(toml).unwrap();
    let catalogue = &settings.aspects.catalogue;
    assert_eq!(catalogue.definitions().len(), 2);
    assert_eq!(catalogue.class_of(40.0), AspectClass::Major);
    assert_eq!(catalogue.name_of(40.0), Some("novile"));
}

#[test]
fn test_custom_terms() {
    let mut toml = String::from("[directions]\nterms = \"custom\"\n");
    for sign in Sign::ALL {
        toml.push_str(&format!(
            "\n[[directions.custom_terms]]\nsign = \"{}\"\nbody = \"jupiter\"\nstart = 0.0\n\n[[directions.custom_terms]]\nsign = \"{}\"\nbody = \"mars\"\nstart = 15.0\n",
            sign, sign
        ));
    }
    let settings = Settings::from_toml_str(&toml).unwrap();
    let table = settings.directions.term_table().unwrap();
    assert_eq!(table.entries().len(), 24);
    assert_eq!(table.lookup(ids::MARS, Sign::Gemini).unwrap(), 75.0);

    let partial = "[directions]\nterms = \"custom\"\n\n[[directions.custom_terms]]\nsign = \"aries\"\nbody = \"mars\"\nstart = 0.0\n";
    assert!(Settings::from_toml_str(partial).is_err());
}

#[test]
fn test_orbs_flow_into_calculations() {
    let mut chart =
        ChartSnapshot::from_json(include_str!("fixtures/chart_2015.json")).unwrap();
    let settings = Settings::from_toml_str("[orbs]\nsaturn = 13.0\n").unwrap();
    let calculator = AspectCalculator::new(settings.aspects.clone());

    // Sun trine Saturn is 12.14 off, inside the sun's orb only
    let before = calculator
        .evaluate(chart.get(ids::SUN).unwrap(), chart.get(ids::SATURN).unwrap(), MAJOR_ASPECTS)
        .unwrap();
    assert!(!before.mutual_aspect());

    settings.apply_orbs(&mut chart);
    assert_eq!(chart.get(ids::SATURN).unwrap().orb, 13.0);
    let after = calculator
        .evaluate(chart.get(ids::SUN).unwrap(), chart.get(ids::SATURN).unwrap(), MAJOR_ASPECTS)
        .unwrap();
    assert!(after.mutual_aspect());

    let point = settings.point(ids::SATURN, 10.0, 0.0, 0.03).unwrap();
    assert_eq!(point.orb, 13.0);

    let table = build_table(&chart, MAJOR_ASPECTS, settings.directions.clone()).unwrap();
    assert!(!table.is_empty());
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("urania_settings_{}.toml", std::process::id()));
    fs::write(&path, "[directions]\nobliquity = 23.4392911\n").unwrap();
    let settings = Settings::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(settings.directions.obliquity, 23.4392911);

    let missing = std::env::temp_dir().join("urania_missing_settings.toml");
    let err = Settings::load(&missing).unwrap_err();
    assert!(err.to_string().contains("Could not read settings"));
}
