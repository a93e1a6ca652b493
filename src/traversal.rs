use crate::datastructures::{try_push, BitSet};
use crate::error::GraphError;
use crate::graph::BaseGraph;
use std::collections::VecDeque;

/// Parent and level arrays of a BFS or DFS tree.
///
/// Entry `v - 1` describes vertex `v`. Parents are 1-based vertex ids; the
/// root and unreached vertices have no parent. Unreached vertices have no
/// level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTree {
    root: usize,
    parents: Vec<Option<usize>>,
    levels: Vec<Option<usize>>,
}

impl SearchTree {
    fn try_unreached(n: usize, root: usize) -> Result<Self, GraphError> {
        let mut parents = Vec::new();
        parents.try_reserve_exact(n)?;
        parents.resize(n, None);
        let mut levels = Vec::new();
        levels.try_reserve_exact(n)?;
        levels.resize(n, None);
        levels[root] = Some(0);
        Ok(Self {
            root: root + 1,
            parents,
            levels,
        })
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    pub fn levels(&self) -> &[Option<usize>] {
        &self.levels
    }

    pub fn parent(&self, v: usize) -> Option<usize> {
        v.checked_sub(1)
            .and_then(|i| self.parents.get(i).copied().flatten())
    }

    pub fn level(&self, v: usize) -> Option<usize> {
        v.checked_sub(1)
            .and_then(|i| self.levels.get(i).copied().flatten())
    }

    /// Reached vertices as `(vertex, parent, level)`, by increasing id.
    pub fn reached(&self) -> impl Iterator<Item = (usize, Option<usize>, usize)> + '_ {
        self.levels
            .iter()
            .zip(self.parents.iter())
            .enumerate()
            .filter_map(|(i, (level, parent))| level.map(|l| (i + 1, *parent, l)))
    }

    pub fn reached_count(&self) -> usize {
        self.levels.iter().filter(|l| l.is_some()).count()
    }

    pub fn max_level(&self) -> usize {
        self.farthest().1
    }

    /// Smallest vertex id attaining the largest level, with that level.
    pub fn farthest(&self) -> (usize, usize) {
        let mut best = (self.root, 0);
        for (v, _, level) in self.reached() {
            if level > best.1 {
                best = (v, level);
            }
        }
        best
    }
}

/// Breadth-first search from the 0-based `start`.
pub fn bfs<G: BaseGraph + ?Sized>(graph: &G, start: usize) -> Result<SearchTree, GraphError> {
    let n = graph.order();
    let mut tree = SearchTree::try_unreached(n, start)?;
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    queue.try_reserve(n)?;
    queue.push_back((start, 0));

    while let Some((u, level)) = queue.pop_front() {
        for v in graph.neighborhood(u) {
            if tree.levels[v].is_none() {
                tree.levels[v] = Some(level + 1);
                tree.parents[v] = Some(u + 1);
                queue.push_back((v, level + 1));
            }
        }
    }
    Ok(tree)
}

/// Depth-first search from the 0-based `start`, using an explicit stack.
///
/// Vertices are marked visited when popped, not when pushed, so a vertex may
/// sit on the stack several times. Every push of an unvisited neighbour
/// overwrites its parent and level; the last push is the one popped first,
/// so the tree stays consistent. Neighbours are pushed in storage order and
/// therefore explored in reverse storage order. The stack may outgrow `n`;
/// growing it past that reports `AllocationFailure` like the other buffers.
pub fn dfs<G: BaseGraph + ?Sized>(graph: &G, start: usize) -> Result<SearchTree, GraphError> {
    let n = graph.order();
    let mut tree = SearchTree::try_unreached(n, start)?;
    let mut visited = BitSet::try_new(n)?;
    let mut stack: Vec<usize> = Vec::new();
    stack.try_reserve(n)?;
    stack.push(start);

    while let Some(u) = stack.pop() {
        if visited.set_bit(u) {
            continue;
        }
        let next = tree.levels[u].map_or(1, |l| l + 1);
        for v in graph.neighborhood(u) {
            if !visited[v] {
                tree.parents[v] = Some(u + 1);
                tree.levels[v] = Some(next);
                try_push(&mut stack, v)?;
            }
        }
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, Representation};

    const BOTH: [Representation; 2] = [Representation::List, Representation::Matrix];

    fn build(n: usize, rep: Representation, directed: bool, edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::new(n, rep, directed).unwrap();
        for &(u, v) in edges {
            graph.insert_edge(u, v).unwrap();
        }
        graph
    }

    // 1 - 2, 1 - 3, 2 - 4, 3 - 4, 4 - 5
    const DIAMOND_TAIL: [(usize, usize); 5] = [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)];

    #[test]
    fn bfs_levels_on_path() {
        for &rep in &BOTH {
            let graph = build(5, rep, false, &[(1, 2), (2, 3), (3, 4), (4, 5)]);
            let tree = graph.bfs(1).unwrap();
            let levels: Vec<Option<usize>> = (0..5).map(Some).collect();
            assert_eq!(tree.levels(), levels.as_slice());
            assert_eq!(tree.parents(), &[None, Some(1), Some(2), Some(3), Some(4)]);
            assert_eq!(tree.max_level(), 4);
            assert_eq!(tree.farthest(), (5, 4));
        }
    }

    #[test]
    fn bfs_leaves_other_component_unreached() {
        for &rep in &BOTH {
            let graph = build(4, rep, false, &[(1, 2), (3, 4)]);
            let tree = graph.bfs(1).unwrap();
            assert_eq!(tree.levels(), &[Some(0), Some(1), None, None]);
            assert_eq!(tree.parent(3), None);
            assert_eq!(tree.parent(4), None);
            assert_eq!(tree.reached_count(), 2);
        }
    }

    #[test]
    fn bfs_shortest_levels() {
        for &rep in &BOTH {
            let graph = build(5, rep, false, &DIAMOND_TAIL);
            let tree = graph.bfs(1).unwrap();
            assert_eq!(
                tree.levels(),
                &[Some(0), Some(1), Some(1), Some(2), Some(3)]
            );
            assert_eq!(tree.parents(), &[None, Some(1), Some(1), Some(2), Some(4)]);
            assert_eq!(tree.root(), 1);
        }
    }

    #[test]
    fn dfs_pins_lazy_stack_tree() {
        for &rep in &BOTH {
            let graph = build(5, rep, false, &DIAMOND_TAIL);
            let tree = graph.dfs(1).unwrap();
            assert_eq!(
                tree.parents(),
                &[None, Some(4), Some(1), Some(3), Some(4)]
            );
            assert_eq!(
                tree.levels(),
                &[Some(0), Some(3), Some(1), Some(2), Some(3)]
            );
        }
    }

    #[test]
    fn dfs_follows_list_insertion_order() {
        // neighbours of 1 in insertion order: 4, 2, 3; explored 3, 2, 4
        let graph = build(4, Representation::List, false, &[(1, 4), (1, 2), (1, 3), (2, 4)]);
        let tree = graph.dfs(1).unwrap();
        assert_eq!(tree.parents(), &[None, Some(1), Some(1), Some(2)]);
        assert_eq!(tree.levels(), &[Some(0), Some(1), Some(1), Some(2)]);

        let graph = build(4, Representation::Matrix, false, &[(1, 4), (1, 2), (1, 3), (2, 4)]);
        let tree = graph.dfs(1).unwrap();
        assert_eq!(tree.parents(), &[None, Some(4), Some(1), Some(1)]);
        assert_eq!(tree.levels(), &[Some(0), Some(2), Some(1), Some(1)]);
    }

    #[test]
    fn directed_traversals_follow_arcs() {
        for &rep in &BOTH {
            let graph = build(3, rep, true, &[(2, 1), (2, 3)]);
            let tree = graph.bfs(1).unwrap();
            assert_eq!(tree.reached_count(), 1);
            let tree = graph.dfs(2).unwrap();
            assert_eq!(tree.levels(), &[Some(1), Some(0), Some(1)]);
            assert_eq!(tree.parents(), &[Some(2), None, Some(2)]);
        }
    }

    #[test]
    fn dfs_stack_grows_past_order() {
        // in K5 every vertex is pushed once per visited neighbour
        let mut edges = Vec::new();
        for u in 1..=5 {
            for v in (u + 1)..=5 {
                edges.push((u, v));
            }
        }
        for &rep in &BOTH {
            let graph = build(5, rep, false, &edges);
            let tree = graph.dfs(1).unwrap();
            assert_eq!(tree.reached_count(), 5);
            assert_eq!(
                tree.levels(),
                &[Some(0), Some(4), Some(3), Some(2), Some(1)]
            );
            assert_eq!(tree.parents(), &[None, Some(3), Some(4), Some(5), Some(1)]);
        }
    }

    #[test]
    fn single_vertex() {
        for &rep in &BOTH {
            let graph = build(1, rep, false, &[]);
            let tree = graph.dfs(1).unwrap();
            assert_eq!(tree.levels(), &[Some(0)]);
            assert_eq!(tree.parents(), &[None]);
            assert_eq!(tree.max_level(), 0);
            let reached: Vec<_> = tree.reached().collect();
            assert_eq!(reached, vec![(1, None, 0)]);
        }
    }
}
