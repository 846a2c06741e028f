mod common;

use fleetyard_lib::{CargoContainer, ProductType, RejectionReason, Ship};

use common::{demo_ships, manifest, recording_factory};

#[test]
fn full_ship_rejects_fourth_container_regardless_of_weight() {
    let (factory, _log) = recording_factory();
    let mut ship = Ship::new("Atlantic Express", 25.0, 3, 10_000.0).unwrap();
    for _ in 0..3 {
        ship.load_container(factory.gas(1.0, 10.0, 1.0).unwrap())
            .expect("room for three");
    }

    let rejected = ship
        .load_container(factory.gas(1.0, 10.0, 1.0).unwrap())
        .expect_err("count limit");

    assert_eq!(rejected.reason, RejectionReason::ContainerLimit { limit: 3 });
    assert!(!ship.can_accept(&rejected.container));
}

#[test]
fn weight_limit_rejects_container_above_ten_tons() {
    let (factory, _log) = recording_factory();
    let mut ship = Ship::new("Heavy", 12.0, 100, 10.0).unwrap();
    ship.load_container(factory.liquid(9_000.0, 1000.0, false).unwrap())
        .expect("9 t fits");

    let rejected = ship
        .load_container(factory.liquid(1_001.0, 1000.0, false).unwrap())
        .expect_err("10001 kg > 10000 kg");

    assert!(matches!(rejected.reason, RejectionReason::WeightLimit { .. }));
    assert_eq!(ship.len(), 1);
}

#[test]
fn transfer_moves_container_between_ships() {
    let (factory, _log) = recording_factory();
    let (mut atlantic, mut pacific) = demo_ships();
    let mut helium = factory.gas(150.0, 500.0, 10.0).unwrap();
    helium.load(400.0).unwrap();
    let serial = helium.serial_number().to_string();
    atlantic.load_container(helium).unwrap();

    atlantic
        .transfer_container(&serial, &mut pacific)
        .expect("room on Pacific Runner");

    assert!(atlantic.find(&serial).is_none());
    assert_eq!(manifest(&pacific), vec![serial.clone()]);
    assert_eq!(pacific.total_weight_kg(), 550.0);
}

#[test]
fn rejected_transfer_leaves_source_untouched() {
    let (factory, _log) = recording_factory();
    let mut source = Ship::new("Source", 20.0, 5, 20.0).unwrap();
    let mut destination = Ship::new("Destination", 20.0, 1, 20.0).unwrap();
    destination
        .load_container(factory.liquid(100.0, 1000.0, false).unwrap())
        .unwrap();
    let refused = source.load_containers(vec![
        factory.gas(100.0, 500.0, 1.0).unwrap(),
        factory.gas(100.0, 500.0, 1.0).unwrap(),
        factory.gas(100.0, 500.0, 1.0).unwrap(),
    ]);
    assert!(refused.is_empty());
    let before = manifest(&source);

    let reason = source
        .transfer_container("CON-G-3", &mut destination)
        .expect_err("destination is full");

    assert_eq!(reason, RejectionReason::ContainerLimit { limit: 1 });
    assert_eq!(manifest(&source), before);
    assert_eq!(manifest(&destination), vec!["CON-L-1".to_string()]);
}

#[test]
fn transfer_of_unknown_serial_reports_not_found() {
    let (mut atlantic, mut pacific) = demo_ships();

    let reason = atlantic
        .transfer_container("CON-L-42", &mut pacific)
        .expect_err("nothing aboard");

    assert_eq!(
        reason,
        RejectionReason::NotFound {
            serial: "CON-L-42".to_string()
        }
    );
}

#[test]
fn rejected_replace_restores_original_index() {
    let (factory, _log) = recording_factory();
    let mut ship = Ship::new("Atlantic Express", 25.0, 3, 2.0).unwrap();
    ship.load_containers(vec![
        factory.liquid(500.0, 1000.0, false).unwrap(),
        factory.liquid(500.0, 1000.0, false).unwrap(),
        factory.liquid(500.0, 1000.0, false).unwrap(),
    ]);
    let before = manifest(&ship);

    let mut heavy = factory
        .refrigerated(900.0, 800.0, ProductType::Chocolate, 18.0)
        .unwrap();
    heavy.load(200.0).unwrap();
    let rejected = ship
        .replace_container("CON-L-2", heavy)
        .expect_err("2100 kg > 2000 kg");

    assert!(matches!(rejected.reason, RejectionReason::WeightLimit { .. }));
    assert_eq!(manifest(&ship), before);
    assert_eq!(rejected.into_container().serial_number(), "CON-C-4");
}

#[test]
fn replaced_container_becomes_unowned_and_reloadable() {
    let (factory, _log) = recording_factory();
    let (mut atlantic, mut pacific) = demo_ships();
    atlantic
        .load_container(factory.liquid(300.0, 2000.0, true).unwrap())
        .unwrap();

    let displaced = atlantic
        .replace_container(
            "CON-L-1",
            factory
                .refrigerated(250.0, 800.0, ProductType::Bananas, 14.0)
                .unwrap(),
        )
        .expect("fits");

    assert_eq!(manifest(&atlantic), vec!["CON-C-2".to_string()]);
    pacific.load_container(displaced).unwrap();
    assert_eq!(manifest(&pacific), vec!["CON-L-1".to_string()]);
}
