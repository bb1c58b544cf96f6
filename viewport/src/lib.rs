pub mod anchor;
pub mod axis;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod literal;
pub mod view;

pub use anchor::{AnchorPair, Field, RawLiteralFragment};
pub use axis::{to_lat_lon_order, LatLon};
pub use config::ViewerConfig;
pub use descriptor::{Bounds, BoundsReduction, ViewportDescriptor, Zoom, ZoomRange};
pub use error::*;
pub use extract::{extract_viewport, Extractor};
pub use fetch::{Fetch, HttpFetcher};
pub use view::{ViewportEvent, ViewportLog, ViewportSnapshot};

/// Fetches a MapTiler page once and extracts its viewport. The blocking
/// request runs on the async-std blocking pool; dropping the future only
/// discards the result.
pub async fn read_maptiler_source<F>(
    fetcher: F,
    url: &str,
    extractor: Extractor,
) -> Result<ViewportDescriptor, ViewportError>
where
    F: Fetch + Send + 'static,
{
    let url = url.to_owned();
    let document = async_std::task::spawn_blocking(move || fetcher.fetch(&url)).await?;
    extractor.extract(&document)
}
