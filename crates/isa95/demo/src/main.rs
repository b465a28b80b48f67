#![deny(unsafe_code)]
//! ISA-95 equipment demo binary.
//!
//! Builds a small plant model in memory:
//! 1. Equipment class types for each hierarchy level
//! 2. A tank equipment type defined by the tank class
//! 3. An enterprise → site → area → unit containment tree
//!
//! An optional first argument names a JSON file with an
//! `AddressSpaceConfig`. Log verbosity follows `RUST_LOG`.

use anyhow::Context;
use isa95_address_space::{AddressSpace, AddressSpaceConfig};
use isa95_equipment::{
    Equipment, EquipmentAddressSpace, EquipmentClassTypeOptions, EquipmentOptions,
    EquipmentTypeOptions,
};
use isa95_types::{EquipmentLevel, NodeId};
use tracing_subscriber::EnvFilter;

// ── Formatting Helpers ──────────────────────────────────────────────────

const BANNER: &str = r#"
 ╔═══════════════════════════════════════════════════════════════╗
 ║              ISA-95 Equipment Model  --  Demo                ║
 ║                                                              ║
 ║   Equipment classes, equipment types and a containment       ║
 ║   hierarchy built on an in-memory address space.             ║
 ╚═══════════════════════════════════════════════════════════════╝
"#;

fn section(title: &str) {
    let width: usize = 60;
    let pad = width.saturating_sub(title.len() + 4);
    let left = pad / 2;
    let right = pad - left;
    println!();
    println!(" ┌{}┐", "─".repeat(width));
    println!(" │{}  {}  {}│", " ".repeat(left), title, " ".repeat(right));
    println!(" └{}┘", "─".repeat(width));
}

fn ok(msg: &str) {
    println!("   [OK]  {}", msg);
}

fn info(msg: &str) {
    println!("   [--]  {}", msg);
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("{}", BANNER);

    if let Err(e) = run_demo() {
        eprintln!();
        eprintln!("   [FATAL]  Demo failed: {:#}", e);
        std::process::exit(1);
    }

    println!();
    println!(" ════════════════════════════════════════════════════════════════");
    println!("  Demo complete.");
    println!(" ════════════════════════════════════════════════════════════════");
    println!();
}

fn load_config() -> anyhow::Result<AddressSpaceConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path))?;
            Ok(AddressSpaceConfig::from_json(&json)?)
        }
        None => Ok(AddressSpaceConfig::default()),
    }
}

fn run_demo() -> anyhow::Result<()> {
    // ── Phase A: Address Space ──────────────────────────────────────
    section("Phase A: Address Space");

    let config = load_config()?;
    for line in serde_json::to_string_pretty(&config)?.lines() {
        info(line);
    }
    let mut space = AddressSpace::new(config)?;
    ok(&format!(
        "address space ready  nodes={}  namespaces={}",
        space.node_count(),
        space.namespace_uris().len()
    ));

    // ── Phase B: Equipment Classes ──────────────────────────────────
    section("Phase B: Equipment Classes");

    let mut classes = Vec::new();
    for (name, level) in [
        ("EnterpriseClass", EquipmentLevel::Enterprise),
        ("SiteClass", EquipmentLevel::Site),
        ("AreaClass", EquipmentLevel::Area),
        ("UnitClass", EquipmentLevel::Unit),
    ] {
        let id = space
            .define_equipment_class_type(EquipmentClassTypeOptions::new(name).with_level(level))?;
        ok(&format!("{:<16} level={:<12} id={}", name, level, id));
        classes.push(id);
    }
    let [enterprise, site, area, unit]: [NodeId; 4] = classes
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected four class types"))?;

    let tank = space.define_equipment_class_type(
        EquipmentClassTypeOptions::new("TankClass")
            .subtype_of(unit.clone())
            .with_description("Storage vessel operated as a process unit"),
    )?;
    ok(&format!("{:<16} subtype of UnitClass  id={}", "TankClass", tank));

    // ── Phase C: Equipment Types ────────────────────────────────────
    section("Phase C: Equipment Types");

    let tank_type = space
        .define_equipment_type(EquipmentTypeOptions::new("TankType").defined_by(tank.clone()))?;
    ok(&format!("TankType defined by TankClass  id={}", tank_type));

    // ── Phase D: Equipment Hierarchy ────────────────────────────────
    section("Phase D: Equipment Hierarchy");

    let folder = space.objects_folder();
    let acme = space.create_equipment(
        EquipmentOptions::new("Acme")
            .defined_by(enterprise)
            .organized_by(folder.clone()),
    )?;
    let plant = space.create_equipment(
        EquipmentOptions::new("Rotterdam")
            .defined_by(site)
            .contained_by(acme.node_id().clone()),
    )?;
    let tank_farm = space.create_equipment(
        EquipmentOptions::new("TankFarm")
            .defined_by(area)
            .contained_by(plant.node_id().clone()),
    )?;
    for name in ["Tank01", "Tank02"] {
        let eq = space.create_equipment(
            EquipmentOptions::new(name)
                .of_type(tank_type.clone())
                .contained_by(tank_farm.node_id().clone()),
        )?;
        ok(&format!(
            "{} created  classes={}  level={:?}",
            name,
            eq.defined_by_equipment_classes(&space).len(),
            eq.equipment_level(&space)
        ));
    }

    match space.create_equipment(EquipmentOptions::new("Stray").contained_by(folder)) {
        Ok(_) => anyhow::bail!("container check did not fire"),
        Err(e) => info(&format!("rejected as expected: {}", e)),
    }

    // ── Phase E: Result ─────────────────────────────────────────────
    section("Phase E: Result");

    print_tree(&space, &acme, 0);
    info(&format!("total nodes={}", space.node_count()));
    Ok(())
}

fn print_tree(space: &AddressSpace, equipment: &Equipment, depth: usize) {
    let name = equipment.browse_name(space).unwrap_or("?");
    let level = equipment
        .equipment_level(space)
        .map(|l| l.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("   {}{} [{}]", "  ".repeat(depth), name, level);
    for child in equipment.made_up_of_equipments(space) {
        print_tree(space, &child, depth + 1);
    }
}
