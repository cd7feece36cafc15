//! Fixtures shared by the CLI unit and behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use carpool_core::{Route, SearchInput, Stop};
use geo::Coord;
use serde::Serialize;
use tempfile::TempDir;

pub(super) const VILNIUS: Coord<f64> = Coord {
    x: 25.2797,
    y: 54.6872,
};
pub(super) const KAUNAS: Coord<f64> = Coord {
    x: 23.9036,
    y: 54.8985,
};
const KLAIPEDA: Coord<f64> = Coord {
    x: 21.1443,
    y: 55.7033,
};

pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) fn write_json<T: Serialize + ?Sized>(path: &Utf8Path, value: &T) {
    let payload = serde_json::to_string_pretty(value).expect("serialize fixture");
    write_utf8(path, payload.as_bytes());
}

/// A rider travelling from Vilnius to Kaunas.
pub(super) fn vilnius_to_kaunas() -> SearchInput {
    SearchInput::new(VILNIUS, KAUNAS)
}

/// Four candidates: an exact match, a near match, a route to Klaipeda and a
/// full exact match. Only the first two should be offered, in that order.
pub(super) fn candidate_routes() -> Vec<Route> {
    let near_start = Coord {
        x: 25.30,
        y: 54.70,
    };
    vec![
        Route::new(3, VILNIUS, KLAIPEDA, 50.0).with_capacity(3, 2),
        Route::new(2, near_start, KAUNAS, 20.0).with_capacity(3, 2),
        Route::new(1, VILNIUS, KAUNAS, 20.0)
            .with_capacity(3, 1)
            .with_stops(vec![
                Stop::new(10, Coord { x: 24.6, y: 54.8 }).with_application(5),
            ]),
        Route::new(4, VILNIUS, KAUNAS, 20.0).with_capacity(3, 0),
    ]
}
