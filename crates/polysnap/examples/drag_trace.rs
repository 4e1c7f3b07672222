//! Drag a cursor across the demo scene and print the snapped markers.
//!
//! Usage:
//!   cargo run -p polysnap --example drag_trace
//!   cargo run -p polysnap --example drag_trace -- 40
//!
//! The optional argument is the number of steps along the diagonal sweep
//! from (0, 0) to (600, 550). One line per step: cursor, active shape, and
//! the visible markers.

use polysnap::prelude::*;

fn main() {
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(20)
        .max(1);
    let mut tracker = Tracker::new(Scene::demo(), TrackCfg::default());
    tracker.pointer_down();
    for k in 0..=steps {
        let s = k as f64 / steps as f64;
        let cursor = Vec2::new(600.0 * s, 550.0 * s);
        let frame = match tracker.pointer_move(cursor) {
            Ok(Some(frame)) => frame,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("step {k}: {e}");
                return;
            }
        };
        let shown: Vec<String> = frame
            .visible
            .iter()
            .map(|&i| format!("{i}@({:.1}, {:.1})", frame.markers[i].x, frame.markers[i].y))
            .collect();
        println!(
            "step {k:>3}: cursor=({:.1}, {:.1}) active={:?} markers=[{}]",
            cursor.x,
            cursor.y,
            frame.active,
            shown.join(", ")
        );
    }
    tracker.pointer_up();
}
