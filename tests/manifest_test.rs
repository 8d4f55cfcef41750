//! Manifests and the registry the binding generator consumes.

#![cfg(feature = "full")]
#![allow(dead_code)]

use bridge_caps::prelude::*;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Celsius(f64);

pub struct Opaque(std::rc::Rc<u8>);

bridge! {
    Point;
    Celsius;
    Opaque;
    Names = Vec<String>;
}

#[test]
fn manifest_mirrors_registration() {
    let m = point::Registration::manifest();
    assert_eq!(m.name, "Point");
    assert_eq!(m.rust_type, "Point");
    assert_eq!(m.symbol, "point_bridge_vtable");
    assert_eq!((m.size, m.align), (8, 4));
    assert_eq!(m.predicates, point::PREDICATES);
    assert_eq!(m.profile, point::PROFILE);
    assert_eq!(m.operations.len(), Operation::ALL.len() - 1, "everything but display");
    assert!(!m.has(Operation::Display));
}

#[test]
fn manifest_lists_only_filled_slots() {
    let m = opaque::Registration::manifest();
    assert_eq!(m.operations, [Operation::MoveNew, Operation::Destruct]);
    assert!(m.profile.needs_drop);
    assert!(!m.profile.send && !m.profile.sync);

    let m = celsius::Registration::manifest();
    assert!(m.has(Operation::ThreeWay) && !m.has(Operation::Hash));
    assert!(m.profile.partial_ord && !m.profile.ord);
}

#[test]
fn registry_keeps_order() {
    let mut registry = Registry::new();
    registry
        .register::<point::Registration>()
        .and_then(|r| r.register::<celsius::Registration>())
        .and_then(|r| r.register::<names::Registration>())
        .unwrap();

    assert_eq!(registry.len(), 3);
    let names: Vec<_> = registry.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Point", "Celsius", "Names"]);
    assert_eq!(registry.get("Names").map(|m| m.rust_type.as_str()), Some("Vec<String>"));
    assert!(registry.get("Opaque").is_none());
    assert_eq!((&registry).into_iter().count(), 3);
}

#[test]
fn duplicate_name_rejected() {
    let mut registry = Registry::new();
    registry.register::<point::Registration>().unwrap();
    let err = registry.register::<point::Registration>().unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateName { ref name } if name == "Point"));
    assert_eq!(err.to_string(), "type `Point` is already registered");
    assert_eq!(registry.len(), 1);
}

#[test]
fn duplicate_symbol_rejected() {
    let mut registry = Registry::new();
    registry.register::<point::Registration>().unwrap();

    let mut clash = celsius::Registration::manifest();
    clash.symbol = point::SYMBOL.to_string();
    let err = registry.insert(clash).unwrap_err();
    match err {
        RegistryError::DuplicateSymbol { symbol, first, second } => {
            assert_eq!(symbol, "point_bridge_vtable");
            assert_eq!(first, "Point");
            assert_eq!(second, "Celsius");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(registry.get("Celsius").is_none());
}

#[cfg(feature = "manifest")]
mod json {
    use super::*;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register::<point::Registration>()
            .and_then(|r| r.register::<opaque::Registration>())
            .unwrap();
        registry
    }

    #[test]
    fn manifest_json_shape() {
        let json = registry().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert_eq!(first["name"], "Point");
        assert_eq!(first["symbol"], "point_bridge_vtable");
        assert_eq!(first["predicates"]["three_way"], "native");
        assert_eq!(first["predicates"]["display"], "absent");
        assert_eq!(first["profile"]["copy"], true);
        assert_eq!(value[1]["operations"], serde_json::json!(["move_new", "destruct"]));
    }

    #[test]
    fn json_reload_is_identical() {
        let original = registry();
        let reloaded = Registry::from_json(&original.to_json().unwrap()).unwrap();
        assert!(original.iter().eq(reloaded.iter()));
    }

    #[test]
    fn json_reload_checks_duplicates() {
        let json = serde_json::to_string(&[
            point::Registration::manifest(),
            point::Registration::manifest(),
        ])
        .unwrap();
        let err = Registry::from_json(&json).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Registry::from_json("{not json").unwrap_err();
        assert!(matches!(err, RegistryError::Serialize(_)));
    }
}
