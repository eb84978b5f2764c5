//! Helper algorithms over [`Graph`].

use super::Graph;

/// Depth-first preorder starting at each of `roots` in turn; nodes reached from an earlier root
/// are not visited again. The walk keeps its own frame stack, so long chains do not grow the call
/// stack.
pub fn preorder<N, E>(g: &Graph<N, E>, roots: &[&str]) -> Vec<String> {
    let mut visited: Vec<bool> = vec![false; g.node_count()];
    let mut out: Vec<String> = Vec::new();
    let mut stack: Vec<(Vec<&str>, usize)> = Vec::new();

    let mut visit = |v: &str, visited: &mut [bool]| -> bool {
        let Some(ix) = g.node_ix(v) else {
            return false;
        };
        if std::mem::replace(&mut visited[ix], true) {
            return false;
        }
        out.push(v.to_string());
        true
    };

    for &r in roots {
        if !visit(r, &mut visited) {
            continue;
        }
        stack.push((g.successors(r), 0));

        while let Some((succs, next)) = stack.last_mut() {
            let Some(&w) = succs.get(*next) else {
                stack.pop();
                continue;
            };
            *next += 1;
            if visit(w, &mut visited) {
                stack.push((g.successors(w), 0));
            }
        }
    }
    out
}

/// Every cycle in the graph, reported as its strongly connected component.
///
/// Components with more than one node are cycles; a single node only counts when it carries a
/// self-loop. Nodes inside a component keep insertion order and components are sorted by their
/// first node.
pub fn find_cycles<N, E>(g: &Graph<N, E>) -> Vec<Vec<String>> {
    let n = g.node_count();
    let ids: Vec<&str> = g.node_ids().collect();
    let succ_ixs = |v: usize| -> Vec<usize> {
        g.successors(ids[v])
            .into_iter()
            .filter_map(|w| g.node_ix(w))
            .collect()
    };

    // Tarjan's algorithm with an explicit frame stack of `(node, successors, next successor)`.
    let mut index: usize = 0;
    let mut indices: Vec<Option<usize>> = vec![None; n];
    let mut lowlink: Vec<usize> = vec![0; n];
    let mut on_stack: Vec<bool> = vec![false; n];
    let mut scc_stack: Vec<usize> = Vec::new();
    let mut sccs: Vec<Vec<String>> = Vec::new();
    let mut frames: Vec<(usize, Vec<usize>, usize)> = Vec::new();

    for root in 0..n {
        if indices[root].is_some() {
            continue;
        }
        indices[root] = Some(index);
        lowlink[root] = index;
        index += 1;
        scc_stack.push(root);
        on_stack[root] = true;
        frames.push((root, succ_ixs(root), 0));

        while let Some((v, succs, next)) = frames.last_mut() {
            let v = *v;
            if let Some(&w) = succs.get(*next) {
                *next += 1;
                match indices[w] {
                    None => {
                        indices[w] = Some(index);
                        lowlink[w] = index;
                        index += 1;
                        scc_stack.push(w);
                        on_stack[w] = true;
                        frames.push((w, succ_ixs(w), 0));
                    }
                    Some(w_idx) if on_stack[w] => lowlink[v] = lowlink[v].min(w_idx),
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();
            if let Some((parent, _, _)) = frames.last() {
                lowlink[*parent] = lowlink[*parent].min(lowlink[v]);
            }
            if Some(lowlink[v]) == indices[v] {
                let mut scc: Vec<String> = Vec::new();
                while let Some(w) = scc_stack.pop() {
                    on_stack[w] = false;
                    scc.push(ids[w].to_string());
                    if w == v {
                        break;
                    }
                }
                sccs.push(scc);
            }
        }
    }

    let mut cycles: Vec<Vec<String>> = Vec::new();
    for mut scc in sccs {
        if scc.len() > 1 {
            scc.sort_by_key(|v| g.node_ix(v).unwrap_or(usize::MAX));
            cycles.push(scc);
        } else if g.successors(&scc[0]).contains(&scc[0].as_str()) {
            cycles.push(scc);
        }
    }

    cycles.sort_by(|a, b| a.first().cmp(&b.first()));
    cycles
}

pub fn is_acyclic<N, E>(g: &Graph<N, E>) -> bool {
    find_cycles(g).is_empty()
}
