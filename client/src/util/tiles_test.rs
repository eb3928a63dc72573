use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn project_origin_is_world_center() {
    let p = project(Coordinates::new(0.0, 0.0), 0);
    assert!(close(p.x, 128.0));
    assert!(close(p.y, 128.0));
}

#[test]
fn project_unproject_returns_input() {
    let c = Coordinates::new(-23.5505, -46.6333);
    let back = unproject(project(c, DEFAULT_ZOOM), DEFAULT_ZOOM);
    assert!(close(back.lat, c.lat));
    assert!(close(back.lng, c.lng));
}

#[test]
fn grid_puts_center_in_middle_tile() {
    let center = Coordinates::new(-23.5505, -46.6333);
    let grid = TileGrid::centered_on(center, DEFAULT_ZOOM);
    let offset = grid.offset_of(center);
    assert!(offset.x >= TILE_SIZE && offset.x < 2.0 * TILE_SIZE);
    assert!(offset.y >= TILE_SIZE && offset.y < 2.0 * TILE_SIZE);
}

#[test]
fn click_offset_maps_back_to_coordinates() {
    let center = Coordinates::new(-23.5505, -46.6333);
    let grid = TileGrid::centered_on(center, DEFAULT_ZOOM);
    let at = grid.coordinates_at(grid.offset_of(center));
    assert!(close(at.lat, center.lat));
    assert!(close(at.lng, center.lng));
}

#[test]
fn grid_has_nine_tiles_away_from_poles() {
    let grid = TileGrid::centered_on(Coordinates::new(10.0, 10.0), DEFAULT_ZOOM);
    let tiles = grid.tiles();
    assert_eq!(tiles.len(), 9);
    assert_eq!(tiles[4].col, 1);
    assert_eq!(tiles[4].row, 1);
}

#[test]
fn tile_url_wraps_columns() {
    let tile = Tile { x: -1, y: 0, zoom: 1, col: 0, row: 0 };
    assert_eq!(tile.url(), "https://tile.openstreetmap.org/1/1/0.png");
}

#[test]
fn grid_at_zoom_zero_skips_rows_beyond_poles() {
    let grid = TileGrid::centered_on(Coordinates::new(0.0, 0.0), 0);
    assert_eq!(grid.tiles().len(), 3);
}

#[test]
fn scale_to_grid_undoes_css_scaling() {
    let p = scale_to_grid(192.0, 96.0, 384.0, 384.0).expect("scaled");
    assert!(close(p.x, 384.0));
    assert!(close(p.y, 192.0));
    assert_eq!(scale_to_grid(1.0, 1.0, 0.0, 384.0), None);
}

#[test]
fn tile_position_is_a_third_per_step() {
    let tile = Tile { x: 0, y: 0, zoom: 13, col: 2, row: 1 };
    let (left, top) = tile.position_percent();
    assert!(close(left, 200.0 / 3.0));
    assert!(close(top, 100.0 / 3.0));
}
