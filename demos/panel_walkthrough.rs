// SPDX-License-Identifier: MPL-2.0

//! Panel walkthrough example.
//!
//! Drives a full panel session against an in-memory store: login, room
//! controls, the energy page figures, and logout. Everything printed here is
//! what the corresponding dashboard pages would render.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example panel_walkthrough
//! ```

use lumipanel::energy;
use lumipanel::panel::{ControlPanel, DEMO_EMAIL, DEMO_PASSWORD};
use lumipanel::store::MemoryStore;
use lumipanel::types::Room;
use lumipanel::{Result, clock};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut panel = ControlPanel::new(MemoryStore::new());

    println!("=== LumiPanel Walkthrough ===");
    println!("Time: {}", clock::current_time_display());
    println!();

    // Login page
    assert!(panel.login(DEMO_EMAIL, DEMO_PASSWORD)?);
    println!("Logged in as {DEMO_EMAIL}");

    // Dashboard entry
    panel.load_lights();
    panel.load_settings();
    println!("Theme: {}", panel.settings().theme);
    println!("Status: {}", energy::system_status_message(panel.lights()));
    println!();

    // Rooms page: living room to full, kitchen to half
    panel.toggle_light(Room::LivingRoom)?;
    panel.set_brightness(Room::LivingRoom, 100)?;
    panel.toggle_light(Room::Kitchen)?;
    println!("Turned on {} and {}", Room::LivingRoom.label(), Room::Kitchen.label());

    // Energy page
    let usage = panel.usage();
    println!();
    println!("Current consumption: {:.1} W", usage.total_watts);
    println!("Lights on:           {}", usage.lights_on);
    println!(
        "Daily estimate:      {:.2} kWh",
        energy::daily_estimate_kwh(panel.lights())
    );
    for entry in energy::per_room_breakdown(panel.lights()) {
        println!("  {}: {:.1} W", entry.label(), entry.watts);
    }
    if energy::is_over_threshold(panel.lights()) {
        println!("Warning: high energy usage!");
    }
    println!();
    println!("Status: {}", energy::system_status_message(panel.lights()));

    // Master switch, then logout
    let now_on = panel.toggle_all()?;
    println!();
    println!(
        "Master switch: all lights {}",
        if now_on { "on" } else { "off" }
    );

    panel.logout()?;
    println!("Logged out");
    Ok(())
}
