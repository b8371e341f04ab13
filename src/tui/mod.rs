//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the map, and
//! translates keyboard events into map-screen operations.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event loop
//!
//! One loop drives everything: poll the keyboard (bounded wait), forward
//! events to the [`MapScreen`], then drain the completion channel that the
//! screen's background tasks report into. Redraws happen only when an event
//! or a completion arrived.

mod event;
mod ui;

use log::{debug, info};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::LocationSource;
use crate::core::config::ResolvedConfig;
use crate::core::screen::MapScreen;
use crate::core::state::App;
use crate::location::{FixedProvider, IpLookupProvider, LocationProvider};
use crate::poi::{NearbyPlacesProvider, PoiProvider};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Pan step as a fraction of the visible span.
const PAN_FRACTION: f64 = 0.25;
const ZOOM_IN_FACTOR: f64 = 0.5;
const ZOOM_OUT_FACTOR: f64 = 2.0;

/// Build the POI provider from a resolved config.
pub fn build_poi_provider(config: &ResolvedConfig) -> Arc<dyn PoiProvider> {
    Arc::new(NearbyPlacesProvider::with_timeout(
        Some(config.poi_endpoint.clone()),
        config.poi_timeout_secs,
    ))
}

/// Build the location provider from a resolved config's source selection.
pub fn build_location_provider(config: &ResolvedConfig) -> Arc<dyn LocationProvider> {
    match config.location_source {
        LocationSource::IpLookup => Arc::new(IpLookupProvider::new(
            config.ip_lookup_base_url.clone(),
            config.allow_location,
        )),
        LocationSource::Fixed => Arc::new(FixedProvider::new(
            config.fixed_coordinates,
            config.allow_location,
        )),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let poi = build_poi_provider(&config);
    let location = build_location_provider(&config);
    info!(
        "Map screen starting: POI provider '{}', location provider '{}'",
        poi.name(),
        location.name()
    );

    // Channel for completions from background tasks
    let (tx, mut rx) = mpsc::unbounded_channel();
    let app = App::from_config(&config);
    let mut screen = MapScreen::new(app, poi, location, tx);

    let mut terminal = ratatui::init();

    // The starting viewport gets markers without waiting for input.
    screen.refresh();

    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &screen.app))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let region = screen.app.region;
            match event {
                TuiEvent::Quit => should_quit = true,
                TuiEvent::Resize => {}
                TuiEvent::PanNorth => {
                    screen.region_changed(region.shifted(region.latitude_delta * PAN_FRACTION, 0.0));
                }
                TuiEvent::PanSouth => {
                    screen
                        .region_changed(region.shifted(-region.latitude_delta * PAN_FRACTION, 0.0));
                }
                TuiEvent::PanEast => {
                    screen.region_changed(
                        region.shifted(0.0, region.longitude_delta * PAN_FRACTION),
                    );
                }
                TuiEvent::PanWest => {
                    screen.region_changed(
                        region.shifted(0.0, -region.longitude_delta * PAN_FRACTION),
                    );
                }
                TuiEvent::ZoomIn => screen.region_changed(region.zoomed(ZOOM_IN_FACTOR)),
                TuiEvent::ZoomOut => screen.region_changed(region.zoomed(ZOOM_OUT_FACTOR)),
                TuiEvent::CenterOnUser => screen.center_on_user(),
            }
        }

        if should_quit {
            break;
        }

        // Handle background task completions (POI fetches, location queries)
        while let Ok(msg) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", msg);
            screen.handle(msg);
        }
    }

    ratatui::restore();
    Ok(())
}
