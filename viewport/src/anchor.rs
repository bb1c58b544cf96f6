use derive_more::Display;

use crate::error::ExtractionError;

/// The viewport values embedded in a MapTiler `openlayers.html` page.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    #[display("bounds")]
    Bounds,
    #[display("center")]
    Center,
    #[display("zoom")]
    Zoom,
}

/// Literal text surrounding an embedded value in the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPair {
    pub start: &'static str,
    pub end: &'static str,
}

pub const BOUNDS_ANCHORS: AnchorPair = AnchorPair {
    start: "transformExtent(",
    end: ", 'EPSG:4326",
};

pub const CENTER_ANCHORS: AnchorPair = AnchorPair {
    start: "center: ol.proj.fromLonLat(",
    end: "),    zoom:",
};

pub const ZOOM_ANCHORS: AnchorPair = AnchorPair {
    start: "zoom:",
    end: "  })});</script>",
};

impl Field {
    pub const fn anchors(self) -> AnchorPair {
        match self {
            Field::Bounds => BOUNDS_ANCHORS,
            Field::Center => CENTER_ANCHORS,
            Field::Zoom => ZOOM_ANCHORS,
        }
    }
}

/// Text between the start of a field's start anchor and the start of its end
/// anchor. The start anchor is still part of [`RawLiteralFragment::raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLiteralFragment<'a> {
    pub field: Field,
    pub anchors: AnchorPair,
    pub raw: &'a str,
}

impl RawLiteralFragment<'_> {
    /// The fragment with every occurrence of its start anchor removed.
    pub fn cleaned(&self) -> String {
        self.raw.replace(self.anchors.start, "")
    }
}

/// Drops `\r` and `\n` so anchors and payload end up on one line.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

impl AnchorPair {
    /// Both anchors are searched from the beginning of `text`, independently
    /// of one another; the first occurrence of each wins.
    pub fn locate<'a>(
        &self,
        field: Field,
        text: &'a str,
    ) -> Result<RawLiteralFragment<'a>, ExtractionError> {
        let start = text
            .find(self.start)
            .ok_or(ExtractionError::StartAnchorMissing {
                field,
                anchor: self.start,
            })?;
        let end = text
            .find(self.end)
            .ok_or(ExtractionError::EndAnchorMissing {
                field,
                anchor: self.end,
            })?;

        if end < start {
            return Err(ExtractionError::AnchorsOutOfOrder { field, start, end });
        }

        Ok(RawLiteralFragment {
            field,
            anchors: *self,
            raw: &text[start..end],
        })
    }
}
