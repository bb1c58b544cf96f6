#[cfg(test)]
mod fixture {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    /// Answers a single HTTP request on loopback and returns the URL to hit.
    pub fn serve_once(status: &'static str, content_type: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind loopback");
        let addr = listener.local_addr().expect("listener has an address");
        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        });
        format!("http://{addr}/openlayers.html")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::*;
    use viewport::*;

    use crate::fixture::serve_once;

    /// Mimics the `openlayers.html` MapTiler writes next to a tile pyramid.
    fn page(extent: [f64; 4], center: [f64; 2], zoom: i64) -> String {
        let [lon1, lat1, lon2, lat2] = extent;
        let [lon, lat] = center;
        format!(
            "<!DOCTYPE html>\r\n<html>\r\n<head>\r\n<title>openlayers.html</title>\r\n\
             <script src=\"https://cdn.jsdelivr.net/npm/ol@v7.3.0/dist/ol.js\"></script>\r\n</head>\r\n\
             <body>\r\n<div id=\"map\"></div>\r\n<script type=\"text/javascript\">\r\n\
             var mapExtent = ol.proj.transformExtent([{lon1}, {lat1}, {lon2}, {lat2}], 'EPSG:4326', 'EPSG:3857');\r\n\
             var map = new ol.Map({{\r\n  target: 'map',\r\n  layers: [\r\n    new ol.layer.Tile({{\r\n      \
             source: new ol.source.XYZ({{ url: './{{z}}/{{x}}/{{y}}.png' }})\r\n    }})\r\n  ],\r\n  \
             view: new ol.View({{\r\n    center: ol.proj.fromLonLat([{lon}, {lat}]),\r\n    zoom: {zoom}\r\n  \
             }})}});</script>\r\n</body>\r\n</html>\r\n"
        )
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    macro_rules! check {
        ($v: expr, $lat: expr, $lon: expr) => {
            assert!(
                close($v.lat, $lat) && close($v.lon, $lon),
                "{:?} != [{}, {}]",
                $v,
                $lat,
                $lon
            )
        };
    }

    #[test]
    fn reference_scenario() {
        let descriptor = extract_viewport(&page(
            [101.650, 2.900, 101.653, 2.902],
            [101.651944, 2.901275],
            16,
        ))
        .expect("reference page is well formed");

        assert_eq!(
            <[f64; 4]>::from(descriptor.bounds),
            [2.900, 101.650, 2.900, 101.653]
        );
        assert_eq!(descriptor.center, LatLon::new(2.901275, 101.651944));
        assert_eq!(descriptor.zoom.get(), 16);
    }

    #[test]
    fn random_documents_round_trip() {
        for _ in 0..200 {
            let extent = [
                random_range(-180.0..=180.0),
                random_range(-90.0..=90.0),
                random_range(-180.0..=180.0),
                random_range(-90.0..=90.0),
            ];
            let center = [random_range(-180.0..=180.0), random_range(-90.0..=90.0)];
            let zoom = random_range(0..=23);
            let text = page(extent, center, zoom);

            let descriptor = extract_viewport(&text).expect("generated page is well formed");
            check!(descriptor.center, center[1], center[0]);
            check!(descriptor.bounds.first, extent[1], extent[0]);
            check!(descriptor.bounds.second, extent[1], extent[2]);
            assert_eq!(i64::from(descriptor.zoom.get()), zoom);

            assert_eq!(extract_viewport(&text).ok(), Some(descriptor));
        }
    }

    #[test]
    fn two_corner_mode_on_random_documents() {
        let extractor = Extractor::new(BoundsReduction::TwoCorner, ZoomRange::default());
        for _ in 0..50 {
            let extent = [
                random_range(-180.0..=180.0),
                random_range(-90.0..=90.0),
                random_range(-180.0..=180.0),
                random_range(-90.0..=90.0),
            ];
            let descriptor = extractor
                .extract(&page(extent, [0.0, 0.0], 3))
                .expect("generated page is well formed");
            check!(descriptor.bounds.first, extent[1], extent[0]);
            check!(descriptor.bounds.second, extent[3], extent[2]);
        }
    }

    #[test]
    fn each_missing_anchor_is_reported() {
        let good = page([101.650, 2.900, 101.653, 2.902], [101.651944, 2.901275], 16);
        let cases = [
            ("transformExtent(", "transformExtent (", Field::Bounds),
            (", 'EPSG:4326'", ", 'EPSG:3857'", Field::Bounds),
            ("ol.proj.fromLonLat(", "ol.proj.fromLonLat (", Field::Center),
            ("),\r\n    zoom:", "),\r\n  zoom:", Field::Center),
            ("zoom:", "zoom =", Field::Center),
            ("\r\n  })});</script>", "})});</script>", Field::Zoom),
        ];

        for (from, to, field) in cases {
            let text = good.replace(from, to);
            assert_ne!(text, good, "{from:?} not in page");
            match extract_viewport(&text) {
                Err(ViewportError::Extraction(e)) => assert!(
                    matches!(
                        e,
                        ExtractionError::StartAnchorMissing { field: f, .. }
                        | ExtractionError::EndAnchorMissing { field: f, .. } if f == field
                    ),
                    "replacing {from:?} gave {e:?}"
                ),
                other => panic!("replacing {from:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn non_numeric_center_is_a_parse_error() {
        let text = page([1.0, 2.0, 3.0, 4.0], [5.0, 6.0], 7).replace("[5, 6]", "[lon, lat]");
        match extract_viewport(&text) {
            Err(ViewportError::Parse(ParseError::Malformed {
                field: Field::Center,
                fragment,
                ..
            })) => assert_eq!(fragment, "[lon, lat]"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_values_never_reach_the_descriptor() {
        for _ in 0..50 {
            let lat = random_range(90.001..1000.0) * if random() { 1.0 } else { -1.0 };
            let res = extract_viewport(&page([1.0, 2.0, 3.0, 4.0], [10.0, lat], 7));
            assert!(
                matches!(
                    res,
                    Err(ViewportError::Validation(ValidationError::Latitude {
                        field: Field::Center,
                        ..
                    }))
                ),
                "lat {lat} gave {res:?}"
            );
        }

        let res = extract_viewport(&page([1.0, 2.0, 3.0, 4.0], [181.0, 0.0], 7));
        assert!(matches!(
            res,
            Err(ViewportError::Validation(ValidationError::Longitude { .. }))
        ));

        let res = extract_viewport(&page([1.0, 2.0, 3.0, 4.0], [5.0, 6.0], 40));
        assert!(matches!(
            res,
            Err(ViewportError::Validation(ValidationError::Zoom { value: 40, .. }))
        ));
    }

    #[async_std::test]
    async fn reads_page_over_http() {
        let url = serve_once(
            "200 OK",
            "text/html; charset=utf-8",
            page([101.650, 2.900, 101.653, 2.902], [101.651944, 2.901275], 16),
        );
        let fetcher = HttpFetcher::new(Duration::from_secs(5));
        let descriptor = read_maptiler_source(fetcher, &url, Extractor::default())
            .await
            .expect("fixture serves a well formed page");

        assert_eq!(descriptor.center, LatLon::new(2.901275, 101.651944));
        assert_eq!(descriptor.zoom.get(), 16);

        let mut log = ViewportLog::default();
        log.apply_descriptor(descriptor);
        let settled = *log.settle(Duration::from_millis(1)).await;
        assert!(settled.loaded);
        assert_eq!(settled.bounds, descriptor.bounds);
    }

    #[async_std::test]
    async fn non_success_status_is_a_fetch_error() {
        let url = serve_once("404 Not Found", "text/html", "<h1>missing</h1>".into());
        let res = read_maptiler_source(HttpFetcher::default(), &url, Extractor::default()).await;
        assert!(matches!(
            res,
            Err(ViewportError::Fetch(FetchError::Status { status: 404, .. }))
        ));
    }

    #[test]
    fn binary_content_is_a_fetch_error() {
        let url = serve_once("200 OK", "image/png", "\u{1}PNG".into());
        let res = HttpFetcher::default().fetch(&url);
        assert!(matches!(
            res,
            Err(FetchError::ContentType { ref content_type, .. }) if content_type == "image/png"
        ));
    }
}
