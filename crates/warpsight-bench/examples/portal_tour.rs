//! Walk an observer past a rotated portal and print what it sees.
//!
//! Legend: `@` observer, `?` hidden, `#` opaque, `*` portal mouth,
//! `.` floor, `%` off the world.

use warpsight_core::{traverse, Direction};
use warpsight_fov::{FovConfig, Shadowcaster, View};
use warpsight_space::{EdgeBehavior, Tile, TileGrid};
use warpsight_test_utils::render_view;

fn main() {
    println!("=== Warpsight portal tour ===\n");

    let mut grid = TileGrid::new(40, 15, 1, EdgeBehavior::Absorb).unwrap();
    grid.fill_rect((20, 0), (20, 14), 0, Tile::Wall).unwrap();
    grid.fill_rect((30, 5), (32, 9), 0, Tile::Wall).unwrap();
    let mouth = grid.location(8, 10, 0).unwrap();
    let target = grid.location(28, 7, 0).unwrap();
    grid.set_portal(mouth, Direction::North, target, Direction::East)
        .unwrap();

    let mut caster = Shadowcaster::new(FovConfig::default()).unwrap();
    let mut view = View::new(6).unwrap();
    let mut here = grid.location(8, 3, 0).unwrap();

    for step in 0..6 {
        let stats = caster.calculate(&grid, &mut view, here);
        let (x, y, _) = grid.coords(here).unwrap();
        println!(
            "step {step}: observer at ({x}, {y}), {} cells seen, {} recasts",
            view.revealed_count(),
            stats.recasts
        );
        println!("{}", render_view(&view, &grid));

        let (next, _) = traverse(&grid, here, Direction::North, Direction::North);
        if !next.is_valid() {
            break;
        }
        here = next;
    }
}
