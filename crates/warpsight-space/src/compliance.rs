//! `WorldQuery` contract test helpers.
//!
//! These functions verify that a world backend satisfies the invariants
//! the visibility engine relies on. Reused across backend test modules.

use indexmap::IndexSet;
use warpsight_core::{traverse, Direction, Location, WorldQuery};

/// Assert the invalid sentinel is rejected everywhere.
pub fn assert_sentinel_handling(world: &dyn WorldQuery) {
    let s = Location::INVALID;
    assert!(!world.is_valid(s), "sentinel reported valid");
    assert!(world.blocks_vision(s), "sentinel must block vision");
    assert!(!world.has_neighbor_override_record(s));
    for d in Direction::ALL {
        assert_eq!(world.neighbor_override(s, d), None);
        assert_eq!(
            traverse(world, s, d, Direction::IDENTITY),
            (Location::INVALID, Direction::IDENTITY),
            "stepping {d} from the sentinel"
        );
    }
}

/// Assert every grid step lands on a valid location or the sentinel.
pub fn assert_steps_stay_in_world(world: &dyn WorldQuery, locations: &[Location]) {
    for &loc in locations {
        assert!(world.is_valid(loc), "{loc} is not valid");
        for d in Direction::ALL {
            let next = world.default_grid_step(loc, d);
            assert!(
                next == Location::INVALID || world.is_valid(next),
                "step {d} from {loc} produced foreign handle {next}"
            );
        }
    }
}

/// Assert that `b` being a grid neighbour of `a` implies the reverse.
pub fn assert_grid_neighbours_symmetric(world: &dyn WorldQuery, locations: &[Location]) {
    for &a in locations {
        for d in Direction::ALL {
            let b = world.default_grid_step(a, d);
            if !b.is_valid() || b == a {
                continue;
            }
            let back: IndexSet<Location> = Direction::ALL
                .iter()
                .map(|&e| world.default_grid_step(b, e))
                .collect();
            assert!(
                back.contains(&a),
                "{b} is a grid neighbour of {a} but not vice versa"
            );
        }
    }
}

/// Assert overrides win only when present and valid, and that every
/// other step falls back to the grid with the identity rotation.
pub fn assert_override_fallback(world: &dyn WorldQuery, locations: &[Location]) {
    for &loc in locations {
        for d in Direction::ALL {
            let expected = match world.neighbor_override(loc, d) {
                Some((target, rotation)) if world.is_valid(target) => {
                    assert!(
                        world.has_neighbor_override_record(loc),
                        "{loc} has an override {d} but reports no record"
                    );
                    (target, rotation)
                }
                _ => (world.default_grid_step(loc, d), Direction::IDENTITY),
            };
            assert_eq!(
                traverse(world, loc, d, Direction::IDENTITY),
                expected,
                "traverse {d} from {loc}"
            );
        }
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(world: &dyn WorldQuery, locations: &[Location]) {
    assert_sentinel_handling(world);
    assert_steps_stay_in_world(world, locations);
    assert_grid_neighbours_symmetric(world, locations);
    assert_override_fallback(world, locations);
}
