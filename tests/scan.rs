use std::any::Any as _;

use podi::{
    component, scan::distributed_slice, scanned_type, Config, Container, ResolveErrorKind, ScanErrorKind, TypeEntry,
    TypeInfo, TYPE_ENTRIES,
};

#[derive(Default)]
struct CatalogService;

#[derive(Default)]
struct PricingService;

#[allow(dead_code)]
struct DomainEvent;

component!(CatalogService in "shop.services");
component!(PricingService in "shop.services");
scanned_type!(DomainEvent in "shop.services");

#[derive(Default)]
struct CatalogRepository;

component!(CatalogRepository in "shop.services.impl");

#[test]
fn test_entries_count() {
    let entries = TYPE_ENTRIES
        .iter()
        .filter(|entry| entry.package == "shop.services")
        .count();
    assert_eq!(entries, 3);
}

#[test]
fn test_scan_registers_direct_components_only() {
    let container = Container::new(Config::with_scan_root("shop.services")).unwrap();

    assert!(container.contains("catalogService"));
    assert!(container.contains("pricingService"));
    // scanned, but not a component
    assert!(!container.contains("domainEvent"));
    // declared under a subpackage
    assert!(!container.contains("catalogRepository"));
}

#[test]
fn test_subpackage_scans_independently() {
    let container = Container::new(Config::with_scan_root("shop.services.impl")).unwrap();

    assert_eq!(container.bean_names(), ["catalogRepository"]);
}

#[test]
fn test_absent_root_yields_empty_registry() {
    let container = Container::new(Config::with_scan_root("shop.nowhere")).unwrap();

    assert!(container.bean_names().is_empty());
    assert!(matches!(
        container.get("catalogService").unwrap_err(),
        ResolveErrorKind::NotFound { .. },
    ));
}

#[test]
fn test_config_is_kept() {
    let container = Container::new(Config::with_scan_root("shop.services")).unwrap();
    assert_eq!(container.config().scan_root(), Some("shop.services"));

    let container = Container::new(Config::new()).unwrap();
    assert_eq!(container.config().scan_root(), None);
}

#[allow(dead_code)]
struct Unresolvable;

#[distributed_slice(TYPE_ENTRIES)]
#[linkme(crate = podi::scan::linkme)]
static UNRESOLVABLE_ENTRY: TypeEntry = TypeEntry {
    package: "shop.broken",
    type_name: "Unresolvable",
    load: || Err(anyhow::anyhow!("artifact cannot be resolved").into()),
};

#[derive(Default)]
struct FineService;

component!(FineService in "shop.broken");

#[test]
fn test_load_failure_aborts_container_construction() {
    // one broken entry fails the whole scan, the loadable neighbor does not
    // survive as a partial result
    let err = Container::new(Config::with_scan_root("shop.broken")).unwrap_err();
    let ScanErrorKind::Load { type_name, .. } = err;
    assert_eq!(type_name, "Unresolvable");
}

#[derive(Default)]
struct FirstWriter;

#[derive(Default)]
struct SecondWriter;

component!(FirstWriter in "shop.duplicates", name = "writer");
component!(SecondWriter in "shop.duplicates", name = "writer");

#[test]
fn test_duplicate_name_keeps_a_single_definition() {
    let container = Container::new(Config::with_scan_root("shop.duplicates")).unwrap();

    assert_eq!(container.bean_names(), ["writer"]);
    container.get("writer").unwrap();

    let first = TypeInfo::of::<FirstWriter>();
    let second = TypeInfo::of::<SecondWriter>();
    let kept = container.get("writer").unwrap();
    let kept_id = (*kept).type_id();
    assert!(kept_id == first.id || kept_id == second.id);
}
