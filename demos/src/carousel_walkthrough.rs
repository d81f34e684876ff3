// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel walkthrough.
//!
//! Drive a `wallcraft_session::Session` headlessly: load panels from a JSON
//! config, print the weighted display sequence, then replay the gestures the
//! app's views would send (tap to center, drag, long press for details) and
//! step the wall view's flow state.
//!
//! Run:
//! - `cargo run -p wallcraft_demos --bin carousel_walkthrough -- --config demos/configs/wallcraft.json`
//! - `RUST_LOG=debug cargo run -p wallcraft_demos --bin carousel_walkthrough` to see every event.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::Point;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallcraft_carousel::{LONG_PRESS_MS, Panel, PanelId};
use wallcraft_session::{Session, SessionConfig, SessionEvent};

/// Headless walkthrough of the WallCraft panel carousel.
#[derive(Debug, Parser)]
struct Args {
    /// JSON session config; a built-in panel list is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured viewport width.
    #[arg(long)]
    viewport_width: Option<f64>,

    /// Only show panels whose title contains this text.
    #[arg(long)]
    filter: Option<String>,
}

fn load_config(path: Option<PathBuf>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(builtin_config());
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read session config from {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("invalid session config {}", path.display()))?;
    info!(path = %path.display(), "loaded session config");
    Ok(config)
}

fn builtin_config() -> SessionConfig {
    let panels = (0..11_u64)
        .map(|i| Panel {
            id: PanelId(i),
            title: format!("Panel {}", i + 1),
            detail: format!("https://picsum.photos/200/{}", 300 + i),
        })
        .collect();
    SessionConfig {
        panels,
        ..SessionConfig::default()
    }
}

fn print_carousel(session: &Session) {
    println!(
        "offset {:>8.1}  viewport {:.0}",
        session.carousel().scroll_offset(),
        session.viewport_width()
    );
    let width = session.viewport_width();
    for item in session
        .display_items()
        .iter()
        .filter(|item| item.screen_x > -width && item.screen_x < 2.0 * width)
    {
        println!(
            "  slot {:>2}  {:<10}  x {:>7.1}  opacity {:.2}  scale {:.2}",
            item.slot, item.panel.title, item.screen_x, item.opacity, item.scale
        );
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config)?;
    let mut session = Session::from_config(config).context("invalid panel list")?;
    if let Some(width) = args.viewport_width {
        session.set_viewport_width(width);
    }
    session.subscribe(|event| {
        if let SessionEvent::FlowChanged(flow) = event {
            println!("wall shows {}", flow.wall_image().asset_name());
        }
    });
    if let Some(filter) = args.filter {
        session.set_filter(filter);
    }

    let Some(first) = session.carousel().visible_panels().first().map(|p| p.id) else {
        println!("no panels to show");
        return Ok(());
    };

    session.center_on(first);
    println!("-- centered on {first}");
    print_carousel(&session);

    // Tap the card to the right of center.
    let mid = session.viewport_width() / 2.0;
    let right = mid + session.layout().item_stride;
    session.pointer_down(Point::new(right, 0.0), 0);
    let outcome = session.pointer_up(Point::new(right, 0.0), 60);
    println!("-- {outcome:?}");
    print_carousel(&session);

    // Drag the content half a card to the left.
    let half = session.layout().item_width / 2.0;
    session.pointer_down(Point::new(mid, 0.0), 1_000);
    session.pointer_move(Point::new(mid - half, 0.0));
    let outcome = session.pointer_up(Point::new(mid - half, 0.0), 1_200);
    println!("-- {outcome:?}");
    print_carousel(&session);

    // Long press whatever sits under the midpoint.
    session.pointer_down(Point::new(mid, 0.0), 2_000);
    session.pointer_up(Point::new(mid, 0.0), 2_000 + LONG_PRESS_MS);
    match session.detail_panel() {
        Some(panel) => println!("-- detail: {} ({})", panel.title, panel.detail),
        None => println!("-- detail: nothing under the midpoint"),
    }
    session.close_detail();

    session.open_immersive();
    for _ in 0..3 {
        session.advance_flow();
    }
    session.toggle_settings();
    println!(
        "-- settings presented: {}, image: {}",
        session.settings().is_presented(),
        session.settings().selected_image().label()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(Args::parse())
}
