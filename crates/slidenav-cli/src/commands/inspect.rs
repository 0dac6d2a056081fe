use anyhow::Result;
use serde::Serialize;

use slidenav_core::surface::{MemorySurface, SlideLayout};
use slidenav_core::{AppConfig, ManualClock, Mode, Pointer, SlideNavigator, Viewport};
use slidenav_tui::Deck;

#[derive(Debug, Serialize)]
struct Report {
    mode: Mode,
    width: f64,
    height: f64,
    pointer: Pointer,
    track_height: Option<f64>,
    slides: Vec<SlideReport>,
}

#[derive(Debug, Serialize)]
struct SlideReport {
    index: usize,
    title: Option<String>,
    layout: &'static str,
    top: f64,
    height: f64,
}

/// Lay the deck out headlessly for one viewport and report the result
pub fn run(
    config: &AppConfig,
    deck: &Deck,
    width: f64,
    height: f64,
    coarse: bool,
    json: bool,
) -> Result<()> {
    let report = inspect(config, deck, width, height, coarse)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} mode for {}x{} ({} pointer)",
        report.mode,
        report.width,
        report.height,
        if coarse { "coarse" } else { "fine" }
    );
    if let Some(track) = report.track_height {
        println!("track height: {}px", track);
    }
    println!();
    println!("{:<4} {:<10} {:>8} {:>8}  TITLE", "#", "LAYOUT", "TOP", "HEIGHT");
    println!("{}", "-".repeat(48));
    for slide in &report.slides {
        println!(
            "{:<4} {:<10} {:>8} {:>8}  {}",
            slide.index + 1,
            slide.layout,
            slide.top,
            slide.height,
            slide.title.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn inspect(
    config: &AppConfig,
    deck: &Deck,
    width: f64,
    height: f64,
    coarse: bool,
) -> Result<Report> {
    let pointer = if coarse { Pointer::Coarse } else { Pointer::Fine };
    let mut surface = MemorySurface::new(deck.len(), width, height);
    surface.viewport = Viewport::new(width, height).with_pointer(pointer);
    surface.titles = deck.slides.iter().map(|s| s.title.clone()).collect();

    let mut navigator = SlideNavigator::new(surface, ManualClock::new(), config.navigator.clone())?;
    navigator.start();
    let mode = navigator.mode().unwrap_or(Mode::Desktop);

    let surface = navigator.surface();
    let slides = surface
        .layouts
        .iter()
        .enumerate()
        .map(|(index, layout)| {
            let (layout, top, height) = match *layout {
                SlideLayout::Absolute { top, height } => ("absolute", top, height),
                SlideLayout::Flow => {
                    let rect = surface.rects[index];
                    ("flow", rect.top, rect.height)
                }
            };
            SlideReport {
                index,
                title: surface.titles[index].clone(),
                layout,
                top,
                height,
            }
        })
        .collect();

    Ok(Report {
        mode,
        width,
        height,
        pointer,
        track_height: surface.track_height,
        slides,
    })
}
