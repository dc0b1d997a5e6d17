// src/figures/map.rs

use super::Figure;
use crate::ingest::{DeathLocation, PumpLocation};
use serde_json::json;

/// Map center when there are no death locations to average: the Broad
/// Street pump vicinity.
const FALLBACK_CENTER: (f64, f64) = (51.513341, -0.136668);

const PUMP_COLOR: &str = "#d90441";
const PUMP_MARKER_SIZE: u32 = 16;
const MAP_ZOOM: u32 = 15;
const MAP_HEIGHT: u32 = 600;

/// Largest bubble diameter in pixels; plotly's area sizing formula
/// (sizeref = 2 * max(size) / max_px^2) scales the rest against it.
const MAX_BUBBLE_PX: f64 = 20.0;

/// Deaths near the Broad Street pump as area-sized bubbles, with the pump
/// positions overlaid, on a carto-positron base map.
pub fn death_map(deaths: &[DeathLocation], pumps: &[PumpLocation]) -> Figure {
    let sizes: Vec<u32> = deaths.iter().map(|d| d.deaths).collect();
    let max_size = sizes.iter().copied().max().unwrap_or(1).max(1);
    let sizeref = 2.0 * f64::from(max_size) / (MAX_BUBBLE_PX * MAX_BUBBLE_PX);

    let death_trace = json!({
        "type": "scattermapbox",
        "name": "Deaths",
        "lat": deaths.iter().map(|d| d.latitude).collect::<Vec<_>>(),
        "lon": deaths.iter().map(|d| d.longitude).collect::<Vec<_>>(),
        "marker": {
            "size": sizes,
            "sizemode": "area",
            "sizeref": sizeref,
            "sizemin": 2,
        },
    });
    let pump_trace = json!({
        "type": "scattermapbox",
        "name": "Pump location",
        "lat": pumps.iter().map(|p| p.latitude).collect::<Vec<_>>(),
        "lon": pumps.iter().map(|p| p.longitude).collect::<Vec<_>>(),
        "marker": { "color": PUMP_COLOR, "size": PUMP_MARKER_SIZE },
    });

    let (center_lat, center_lon) = center(deaths);
    Figure {
        data: vec![death_trace, pump_trace],
        layout: json!({
            "mapbox": {
                "style": "carto-positron",
                "zoom": MAP_ZOOM,
                "center": { "lat": center_lat, "lon": center_lon },
            },
            "height": MAP_HEIGHT,
            "margin": { "r": 0, "t": 0, "l": 0, "b": 0 },
            "showlegend": true,
        }),
    }
}

fn center(deaths: &[DeathLocation]) -> (f64, f64) {
    if deaths.is_empty() {
        return FALLBACK_CENTER;
    }
    let n = deaths.len() as f64;
    let lat = deaths.iter().map(|d| d.latitude).sum::<f64>() / n;
    let lon = deaths.iter().map(|d| d.longitude).sum::<f64>() / n;
    (lat, lon)
}
