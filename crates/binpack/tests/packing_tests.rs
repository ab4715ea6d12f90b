//! Integration tests for multi-SKU consolidation.

use cartonfit_binpack::{BinPacker, Container, Part};

fn shipment() -> Vec<Part> {
    vec![
        Part::new("carton-A", 180.0, 120.0, 90.0)
            .with_weight(1.4)
            .with_quantity(12),
        Part::new("carton-B", 60.0, 60.0, 60.0)
            .with_weight(0.3)
            .with_quantity(40),
        Part::new("carton-C", 240.0, 200.0, 110.0)
            .with_weight(3.1)
            .with_quantity(5),
    ]
}

#[test]
fn test_mixed_shipment_is_feasible() {
    let container = Container::new(400.0, 300.0, 250.0).with_max_weight(25.0);
    let packer = BinPacker::new(container.clone());

    let report = packer.pack(&shipment());
    assert!(report.all_packed());
    assert_eq!(report.packed_count(), 57);

    // Every box complies with both budgets. No assertion on box count:
    // the heuristic guarantees feasibility, not optimality.
    for packed in &report.boxes {
        assert!(packed.used_volume <= container.volume() + 1e-9);
        assert!(packed.used_weight <= 25.0 + 1e-9);
        assert!(packed.utilization_pct(&container) <= 100.0);
    }
}

#[test]
fn test_unplaceable_sku_does_not_hang_or_drop_others() {
    let container = Container::new(400.0, 300.0, 250.0);
    let packer = BinPacker::new(container);

    let mut parts = shipment();
    parts.push(Part::new("monolith", 900.0, 900.0, 900.0).with_quantity(2));

    let report = packer.pack(&parts);
    // The monolith's volume exceeds the box entirely: both instances end in
    // the leftover list, everything placeable is still packed.
    assert_eq!(report.leftovers, vec!["monolith", "monolith"]);
    assert_eq!(report.packed_count(), 57);
}

#[test]
fn test_clearance_tightens_the_shell() {
    // 100-cube items into a 100-cube box: fine without clearance,
    // impossible with it.
    let parts = vec![Part::new("exact", 100.0, 100.0, 100.0).with_quantity(2)];

    let loose = BinPacker::new(Container::new(100.0, 100.0, 100.0));
    assert!(loose.pack(&parts).all_packed());

    let tight = BinPacker::new(Container::new(100.0, 100.0, 100.0).with_clearance(2.0));
    let report = tight.pack(&parts);
    assert_eq!(report.leftovers.len(), 2);
}

#[test]
fn test_weightless_parts_ignore_weight_budget() {
    let packer = BinPacker::new(Container::new(100.0, 100.0, 100.0).with_max_weight(1.0));
    let parts = vec![Part::new("foam", 50.0, 50.0, 50.0).with_quantity(8)];

    let report = packer.pack(&parts);
    assert!(report.all_packed());
    assert_eq!(report.total_boxes(), 1);
}

#[test]
fn test_repeat_runs_are_identical() {
    let packer = BinPacker::new(Container::new(400.0, 300.0, 250.0).with_max_weight(25.0));
    let parts = shipment();

    let first = packer.pack(&parts);
    let second = packer.pack(&parts);
    assert_eq!(first.total_boxes(), second.total_boxes());
    for (a, b) in first.boxes.iter().zip(&second.boxes) {
        assert_eq!(a.items, b.items);
    }
}
