//! Web-Mercator tile math for the map selector.
//!
//! The selector draws a fixed 3×3 grid of OpenStreetMap raster tiles around
//! its view center. Screen clicks are converted to coordinates by going
//! local pixel → global pixel → lat/lng at the grid's zoom.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use std::f64::consts::PI;

use gyms::geocode::Coordinates;

pub const TILE_SIZE: f64 = 256.0;
pub const DEFAULT_ZOOM: u8 = 13;
pub const GRID_TILES: i64 = 3;
pub const TILE_SERVER: &str = "https://tile.openstreetmap.org";

/// Mercator is undefined at the poles; OSM clips here.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// A point in global pixel space at some zoom, or local grid pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2_f64.powi(i32::from(zoom))
}

/// Project coordinates to global pixels.
#[must_use]
pub fn project(coords: Coordinates, zoom: u8) -> Pixel {
    let size = world_size(zoom);
    let lat = coords.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (coords.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    Pixel::new(x, y)
}

/// Inverse of [`project`].
#[must_use]
pub fn unproject(pixel: Pixel, zoom: u8) -> Coordinates {
    let size = world_size(zoom);
    let lng = pixel.x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * pixel.y / size;
    let lat = n.sinh().atan().to_degrees();
    Coordinates::new(lat, lng)
}

/// Map a point inside the rendered grid element to grid pixels.
///
/// The grid may be scaled by CSS, so `x`/`y` are relative to the element's
/// top-left corner and `width`/`height` are its rendered size. Returns
/// `None` for a collapsed element.
#[must_use]
pub fn scale_to_grid(x: f64, y: f64, width: f64, height: f64) -> Option<Pixel> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let size = TileGrid::size_px();
    Some(Pixel::new(x * size / width, y * size / height))
}

/// One raster tile placed in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
    pub zoom: u8,
    pub col: i64,
    pub row: i64,
}

impl Tile {
    /// Tile image URL. Columns wrap around the antimeridian.
    #[must_use]
    pub fn url(&self) -> String {
        let n = 1_i64 << self.zoom;
        format!("{TILE_SERVER}/{}/{}/{}.png", self.zoom, self.x.rem_euclid(n), self.y)
    }

    /// Top-left corner as a percentage of the grid edge.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position_percent(&self) -> (f64, f64) {
        let step = 100.0 / GRID_TILES as f64;
        (self.col as f64 * step, self.row as f64 * step)
    }
}

/// The 3×3 tile window centered on the tile containing `center`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub zoom: u8,
    pub first_x: i64,
    pub first_y: i64,
}

impl TileGrid {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn centered_on(center: Coordinates, zoom: u8) -> Self {
        let p = project(center, zoom);
        let cx = (p.x / TILE_SIZE).floor() as i64;
        let cy = (p.y / TILE_SIZE).floor() as i64;
        Self { zoom, first_x: cx - GRID_TILES / 2, first_y: cy - GRID_TILES / 2 }
    }

    /// Edge length of the rendered grid in CSS pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_px() -> f64 {
        GRID_TILES as f64 * TILE_SIZE
    }

    #[allow(clippy::cast_precision_loss)]
    fn origin(&self) -> Pixel {
        Pixel::new(self.first_x as f64 * TILE_SIZE, self.first_y as f64 * TILE_SIZE)
    }

    /// Tiles in row-major order, skipping rows beyond the poles.
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        let rows = 1_i64 << self.zoom;
        let mut out = Vec::new();
        for row in 0..GRID_TILES {
            let y = self.first_y + row;
            if !(0..rows).contains(&y) {
                continue;
            }
            for col in 0..GRID_TILES {
                out.push(Tile { x: self.first_x + col, y, zoom: self.zoom, col, row });
            }
        }
        out
    }

    /// Where `coords` falls inside the grid, in local pixels.
    #[must_use]
    pub fn offset_of(&self, coords: Coordinates) -> Pixel {
        let p = project(coords, self.zoom);
        let origin = self.origin();
        Pixel::new(p.x - origin.x, p.y - origin.y)
    }

    /// Coordinates under a local grid pixel (e.g. a click offset).
    #[must_use]
    pub fn coordinates_at(&self, local: Pixel) -> Coordinates {
        let origin = self.origin();
        let mut coords = unproject(Pixel::new(origin.x + local.x, origin.y + local.y), self.zoom);
        coords.lng = (coords.lng + 180.0).rem_euclid(360.0) - 180.0;
        coords
    }
}
