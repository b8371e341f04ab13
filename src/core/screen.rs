//! # Map Screen
//!
//! Wires the external collaborators (POI service, location provider) to the
//! state container. The shell forwards input events here; completions from
//! background tasks come back as [`ScreenMsg`] values over an mpsc channel
//! and are applied through the reducer.
//!
//! Every external call failure is caught where it happens, logged, and
//! becomes a no-op for domain state: the screen keeps rendering whatever it
//! had. Nothing is retried, nothing is fatal.
//!
//! Overlapping fetches are sequenced: each issued fetch carries a
//! monotonically increasing number, and a completion for anything but the
//! most recently issued fetch is dropped. A slow response for a viewport the
//! user already left can therefore never clobber the current markers.

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::mpsc;

use crate::core::action::{Action, update};
use crate::core::state::App;
use crate::geo::{Coordinates, Region};
use crate::location::LocationProvider;
use crate::poi::{Poi, PoiProvider};

/// Span of the viewport after centering on the user.
pub const CENTER_SPAN: f64 = 0.01;

/// Completion messages from background tasks.
#[derive(Debug)]
pub enum ScreenMsg {
    /// Location query succeeded.
    Located(Coordinates),
    /// Location query failed or consent was withheld. Carries the reason for
    /// the status line; domain state is untouched.
    LocateFailed(String),
    /// POI fetch succeeded with a list (possibly empty).
    PoisLoaded { seq: u64, pois: Vec<Poi> },
    /// POI fetch failed, or the response carried no list. Prior markers stay.
    PoisFailed { seq: u64, reason: String },
}

pub struct MapScreen {
    pub app: App,
    poi: Arc<dyn PoiProvider>,
    location: Arc<dyn LocationProvider>,
    tx: mpsc::UnboundedSender<ScreenMsg>,
    /// Sequence number of the most recently issued fetch.
    latest_seq: u64,
}

impl MapScreen {
    pub fn new(
        app: App,
        poi: Arc<dyn PoiProvider>,
        location: Arc<dyn LocationProvider>,
        tx: mpsc::UnboundedSender<ScreenMsg>,
    ) -> Self {
        Self {
            app,
            poi,
            location,
            tx,
            latest_seq: 0,
        }
    }

    /// Fetch POIs for the current viewport without moving it.
    /// Called once at startup so the initial region gets markers.
    pub fn refresh(&mut self) {
        let region = self.app.region;
        self.issue_fetch(region);
    }

    /// The viewport moved (pan, zoom, or an external region event): adopt the
    /// new region and fetch POIs for it.
    pub fn region_changed(&mut self, region: Region) {
        if !region.is_valid() {
            warn!("Ignoring invalid region: {:?}", region);
            return;
        }
        update(&mut self.app, Action::SetRegion(region));
        self.issue_fetch(region);
    }

    /// User asked to center the map on their own location.
    ///
    /// The query runs in the background; [`handle`](Self::handle) applies the
    /// result. A denied consent or failed query changes nothing.
    pub fn center_on_user(&mut self) {
        info!("Centering on user location via {}", self.location.name());
        let location = self.location.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let msg = match location.current_location().await {
                Ok(coords) => ScreenMsg::Located(coords),
                Err(e) => {
                    warn!("Location query failed: {}", e);
                    ScreenMsg::LocateFailed(e.to_string())
                }
            };
            if tx.send(msg).is_err() {
                warn!("Failed to send location result: receiver dropped");
            }
        });
    }

    /// Apply a background-task completion.
    pub fn handle(&mut self, msg: ScreenMsg) {
        match msg {
            ScreenMsg::Located(coords) => {
                update(&mut self.app, Action::SetUserLocation(coords));
                let region = Region::centered_on(coords, CENTER_SPAN);
                update(&mut self.app, Action::SetRegion(region));
                // Fetch for the centered viewport directly; same wire
                // contract as the region-change path.
                self.issue_fetch(region);
            }
            ScreenMsg::LocateFailed(reason) => {
                update(
                    &mut self.app,
                    Action::SetStatus(format!("Location unavailable: {reason}")),
                );
            }
            ScreenMsg::PoisLoaded { seq, pois } => {
                if seq != self.latest_seq {
                    debug!(
                        "Dropping stale POI response (seq {} < {})",
                        seq, self.latest_seq
                    );
                    return;
                }
                let count = pois.len();
                update(&mut self.app, Action::SetPois(pois));
                update(
                    &mut self.app,
                    Action::SetStatus(format!("{count} POIs in view")),
                );
            }
            ScreenMsg::PoisFailed { seq, reason } => {
                if seq != self.latest_seq {
                    debug!(
                        "Dropping stale POI failure (seq {} < {})",
                        seq, self.latest_seq
                    );
                    return;
                }
                update(&mut self.app, Action::SetStatus(reason));
            }
        }
    }

    fn issue_fetch(&mut self, region: Region) {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        update(
            &mut self.app,
            Action::SetStatus("Loading POIs...".to_string()),
        );

        let provider = self.poi.clone();
        let tx = self.tx.clone();
        debug!("Issuing POI fetch #{} for {:?}", seq, region);
        tokio::spawn(async move {
            let msg = match provider.fetch_pois(&region).await {
                Ok(response) => match response.pois {
                    Some(pois) => ScreenMsg::PoisLoaded { seq, pois },
                    None => {
                        warn!("POI response contained no POI list");
                        ScreenMsg::PoisFailed {
                            seq,
                            reason: "No POIs were found".to_string(),
                        }
                    }
                },
                Err(e) => {
                    error!("POI request failed: {}", e);
                    ScreenMsg::PoisFailed {
                        seq,
                        reason: "POI request failed".to_string(),
                    }
                }
            };
            if tx.send(msg).is_err() {
                warn!("Failed to send POI result: receiver dropped");
            }
        });
    }
}
