//! Itemdesc - Entry Point
//!
//! Builds a sample unique item, equips it, and prints its tooltip.
//! Pass `--json` to dump the equipped items with their descriptions.

use anyhow::Result;

use itemdesc::config::load_settings_or_default;
use itemdesc::items::{tooltip_lines, EquipSlot, Equipment, EquipmentAction, Item, UniqueItemData};
use itemdesc::properties::{Property, PropertyCatalog, Stat};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting itemdesc v{}", env!("CARGO_PKG_VERSION"));

    let json = std::env::args().skip(1).any(|arg| arg == "--json");
    let settings = load_settings_or_default();

    let catalog = sample_catalog();
    let item = Item::from_unique(1, &sample_row(), &catalog)?;

    let mut equipment = Equipment::new();
    equipment.apply(EquipmentAction::Reset);
    equipment.apply(EquipmentAction::ChangeItem {
        slot: EquipSlot::RightHand,
        item: Some(item),
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&equipment)?);
        return Ok(());
    }

    for (slot, item) in equipment.occupied() {
        println!("{}: {}", slot.name(), item.name);
        for line in tooltip_lines(item, &settings) {
            println!("  {}", line);
        }
    }

    Ok(())
}

fn stat(code: &str, func: i32, value: i32, desc1: &str, priority: u8) -> Stat {
    Stat {
        code: code.to_string(),
        description_function: func,
        description_value: value,
        description1: desc1.to_string(),
        description_priority: priority,
        ..Stat::default()
    }
}

/// A handful of properties from the vanilla tables
fn sample_catalog() -> PropertyCatalog {
    vec![
        Property::special("dmg%"),
        Property::special("item_numsockets"),
        Property::with_stats("str", vec![stat("strength", 1, 1, "to Strength", 67)]),
        Property::with_stats("hp", vec![stat("maxhp", 1, 1, "to Life", 59)]),
        Property::with_stats(
            "hit-skill",
            vec![stat(
                "item_skillonhit",
                15,
                0,
                "%d%% Chance to cast level %d %s on striking",
                160,
            )],
        ),
        Property::with_stats(
            "swing2",
            vec![stat("item_fasterattackrate", 4, 1, "Increased Attack Speed", 145)],
        ),
    ]
    .into_iter()
    .collect()
}

fn sample_row() -> UniqueItemData {
    UniqueItemData {
        index: "The Gnasher".to_string(),
        enabled: "1".to_string(),
        lvl_req: "5".to_string(),
        code: "hax".to_string(),
        prop1: "dmg%".to_string(),
        min1: "60".to_string(),
        max1: "70".to_string(),
        prop2: "str".to_string(),
        min2: "8".to_string(),
        max2: "8".to_string(),
        prop3: "hit-skill".to_string(),
        par3: "Holy Bolt".to_string(),
        min3: "25".to_string(),
        max3: "6".to_string(),
        prop4: "swing2".to_string(),
        min4: "20".to_string(),
        max4: "20".to_string(),
        ..UniqueItemData::default()
    }
}
