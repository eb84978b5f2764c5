use super::Sweep;
use crate::LayoutGraph;
use rustc_hash::FxHashMap as HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct BarycenterEntry {
    pub v: String,
    /// Weighted mean position of the fixed-side neighbours; `None` when there are none.
    pub barycenter: Option<f64>,
    pub weight: f64,
}

pub fn barycenter(
    g: &LayoutGraph,
    v: &str,
    sweep: Sweep,
    positions: &HashMap<String, usize>,
) -> BarycenterEntry {
    let edges = match sweep {
        Sweep::Down => g.in_edges(v),
        Sweep::Up => g.out_edges(v),
    };

    let mut sum = 0.0;
    let mut weight = 0.0;
    for e in edges {
        let u = match sweep {
            Sweep::Down => e.v,
            Sweep::Up => e.w,
        };
        let Some(&pos) = positions.get(u) else {
            continue;
        };
        sum += e.label.weight * pos as f64;
        weight += e.label.weight;
    }

    BarycenterEntry {
        v: v.to_string(),
        barycenter: (weight > 0.0).then(|| sum / weight),
        weight,
    }
}

/// Sorts one layer by barycenter. Entries without a barycenter keep their current index and the
/// sortable ones fill the remaining slots in barycenter order (ties keep their current order).
pub fn sort_layer(entries: Vec<BarycenterEntry>) -> Vec<String> {
    let len = entries.len();
    let mut fixed: Vec<Option<String>> = vec![None; len];
    let mut sortable: Vec<(f64, usize, String)> = Vec::new();
    for (i, entry) in entries.into_iter().enumerate() {
        match entry.barycenter {
            Some(bc) => sortable.push((bc, i, entry.v)),
            None => fixed[i] = Some(entry.v),
        }
    }
    sortable.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut sortable = sortable.into_iter().map(|(_, _, v)| v);
    let mut out: Vec<String> = Vec::with_capacity(len);
    for slot in fixed {
        match slot {
            Some(v) => out.push(v),
            None => {
                if let Some(v) = sortable.next() {
                    out.push(v);
                }
            }
        }
    }
    out
}
