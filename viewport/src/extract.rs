use tracing::debug;

use crate::{
    anchor::{strip_line_breaks, Field, RawLiteralFragment},
    axis::lon_lat,
    descriptor::{validate_coord, BoundsReduction, ViewportDescriptor, ZoomRange},
    error::{ParseError, ViewportError},
    literal,
};

/// Turns the text of a MapTiler `openlayers.html` page into a
/// [`ViewportDescriptor`]. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extractor {
    pub reduction: BoundsReduction,
    pub zoom_range: ZoomRange,
}

/// Locates `field` by its anchors in `text` and hands the fragment to `parser`.
pub fn extract_field<'a, T>(
    text: &'a str,
    field: Field,
    parser: impl FnOnce(&RawLiteralFragment<'a>) -> Result<T, ParseError>,
) -> Result<T, ViewportError> {
    let fragment = field.anchors().locate(field, text)?;
    debug!(%field, raw = fragment.raw, "located literal");
    Ok(parser(&fragment)?)
}

impl Extractor {
    pub fn new(reduction: BoundsReduction, zoom_range: ZoomRange) -> Self {
        Self {
            reduction,
            zoom_range,
        }
    }

    pub fn extract(&self, document: &str) -> Result<ViewportDescriptor, ViewportError> {
        let text = strip_line_breaks(document);

        let extent = extract_field(&text, Field::Bounds, literal::numeric_array::<4>)?;
        let center = extract_field(&text, Field::Center, literal::numeric_array::<2>)?;
        let zoom = extract_field(&text, Field::Zoom, literal::integer)?;
        debug!(?extent, ?center, zoom, "parsed literals");

        let [lon1, lat1, lon2, lat2] = extent;
        validate_coord(Field::Bounds, lon_lat([lon1, lat1]))?;
        validate_coord(Field::Bounds, lon_lat([lon2, lat2]))?;

        Ok(ViewportDescriptor {
            bounds: self.reduction.reduce(extent),
            center: validate_coord(Field::Center, lon_lat(center))?,
            zoom: self.zoom_range.validate(zoom)?,
        })
    }
}

/// [`Extractor::extract`] with the default reduction and zoom range.
pub fn extract_viewport(document: &str) -> Result<ViewportDescriptor, ViewportError> {
    Extractor::default().extract(document)
}
