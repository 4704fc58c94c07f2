use std::time::Duration;

use anyhow::Result;

use pagewire_core::{AppConfig, PageRuntime};

pub fn run(config: &AppConfig) -> Result<()> {
    config.validate()?;
    // Building the runtime catches what validation alone cannot
    let runtime = PageRuntime::from_config(config, Duration::ZERO)?;
    let page = runtime.page();

    println!(
        "Viewport {}x{}, document height {}",
        page.viewport_width,
        page.viewport_height,
        runtime.themes().document_height()
    );

    println!("\nSections ({}):", runtime.themes().sections().len());
    for section in runtime.themes().sections() {
        println!(
            "  {:<12} {:>6} - {:<6} theme={} bg={}",
            section.name,
            section.top,
            section.bottom(),
            section.theme,
            section.bg.as_deref().unwrap_or("-")
        );
    }

    println!("\nTab groups ({}):", runtime.tab_groups().len());
    for group in runtime.tab_groups() {
        let autoplay = if group.autoplay_enabled() {
            format!("autoplay every {}ms", group.autoplay_duration().as_millis())
        } else {
            "manual".to_string()
        };
        println!("  {} - {} tabs, {}", group.name(), group.len(), autoplay);
    }

    println!("\nFAQ items: {}", runtime.accordion().len());
    let modals: Vec<&str> = runtime.modals().modals().iter().map(|m| m.name.as_str()).collect();
    println!("Modals: {}", if modals.is_empty() { "-".to_string() } else { modals.join(", ") });
    println!("Marquees: {}", runtime.marquees().len());
    println!("Videos: {}", runtime.videos().len());
    if let Some(countdown) = runtime.countdown() {
        println!("Countdown: {} {}", countdown.days_remaining(), countdown.label());
    }

    println!("\nConfiguration OK");
    Ok(())
}
