use std::time::Duration;

use tracing::debug;

use crate::{
    axis::LatLon,
    descriptor::{Bounds, ViewportDescriptor, Zoom},
};

/// Something the map surface reports or the loader delivers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Loaded(ViewportDescriptor),
    Panned(LatLon),
    Zoomed(Zoom),
    /// The settling delay after a load has elapsed.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSnapshot {
    pub center: LatLon,
    pub zoom: Zoom,
    pub bounds: Bounds,
    pub loaded: bool,
}

impl Default for ViewportSnapshot {
    /// What the map shows before any source has been read.
    fn default() -> Self {
        Self {
            center: LatLon::new(2.901275, 101.651944),
            zoom: Zoom(7),
            bounds: Bounds {
                first: LatLon::new(2.900169, 101.650864),
                second: LatLon::new(2.902380, 101.653024),
            },
            loaded: false,
        }
    }
}

impl ViewportSnapshot {
    pub fn apply(&self, event: ViewportEvent) -> Self {
        match event {
            ViewportEvent::Loaded(ViewportDescriptor {
                bounds,
                center,
                zoom,
            }) => Self {
                center,
                zoom,
                bounds,
                loaded: self.loaded,
            },
            ViewportEvent::Panned(center) => Self { center, ..*self },
            ViewportEvent::Zoomed(zoom) => Self { zoom, ..*self },
            ViewportEvent::Settled => Self {
                loaded: true,
                ..*self
            },
        }
    }
}

/// Every snapshot the viewport has been in, oldest first. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportLog {
    snapshots: Vec<ViewportSnapshot>,
}

impl Default for ViewportLog {
    fn default() -> Self {
        Self::new(ViewportSnapshot::default())
    }
}

impl ViewportLog {
    pub fn new(initial: ViewportSnapshot) -> Self {
        Self {
            snapshots: vec![initial],
        }
    }

    pub fn current(&self) -> &ViewportSnapshot {
        // `snapshots` starts with one element and is only ever pushed to
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn history(&self) -> &[ViewportSnapshot] {
        &self.snapshots
    }

    pub fn record(&mut self, event: ViewportEvent) -> &ViewportSnapshot {
        let next = self.current().apply(event);
        debug!(?event, ?next, "viewport changed");
        self.snapshots.push(next);
        self.current()
    }

    /// Applies a freshly extracted descriptor. The snapshot stays unloaded
    /// until [`ViewportLog::settle`] runs.
    pub fn apply_descriptor(&mut self, descriptor: ViewportDescriptor) -> &ViewportSnapshot {
        self.record(ViewportEvent::Loaded(descriptor))
    }

    pub async fn settle(&mut self, delay: Duration) -> &ViewportSnapshot {
        async_std::task::sleep(delay).await;
        self.record(ViewportEvent::Settled)
    }
}
