//! Grouping of per-shot results into holes and a run total

use std::collections::BTreeMap;

use crate::types::{HoleSg, RunSg, ShotSg};
use crate::utils::round4;

/// Group shots by hole (ascending), order each hole by shot number, and sum.
///
/// The sort is stable, so repeated shot numbers keep their input order.
pub fn aggregate(run_id: &str, shots: Vec<ShotSg>) -> RunSg {
    let mut by_hole: BTreeMap<u32, Vec<ShotSg>> = BTreeMap::new();
    for shot in shots {
        by_hole.entry(shot.hole).or_default().push(shot);
    }

    let mut holes = Vec::with_capacity(by_hole.len());
    let mut flat = Vec::new();
    for (hole, mut hole_shots) in by_hole {
        hole_shots.sort_by_key(|s| s.shot);
        let sg_total = round4(hole_shots.iter().map(|s| s.sg_delta).sum());
        flat.extend(hole_shots.iter().copied());
        holes.push(HoleSg {
            hole,
            sg_total,
            shots: hole_shots,
        });
    }

    let sg_total = round4(holes.iter().map(|h| h.sg_total).sum());
    RunSg {
        run_id: run_id.to_string(),
        sg_total,
        holes,
        shots: flat,
    }
}
