use crate::datastructures::{try_push, BitSet};
use crate::error::GraphError;
use crate::graph::BaseGraph;

/// Vertices of one component as 1-based ids, in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    members: Vec<usize>,
}

impl Component {
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// The vertex the component was discovered from, also its smallest id.
    pub fn seed(&self) -> usize {
        self.members.first().copied().unwrap_or_default()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.members.contains(&v)
    }
}

/// Components reachable through stored arcs, seeded in increasing vertex
/// order.
///
/// Each component is collected with the same lazy stack as
/// [`dfs`](crate::traversal::dfs): mark on pop, push every unvisited
/// neighbour. For a directed graph only stored arcs are followed, so the
/// result depends on the direction edges were inserted in.
pub fn connected_components<G: BaseGraph + ?Sized>(
    graph: &G,
) -> Result<Vec<Component>, GraphError> {
    let n = graph.order();
    let mut visited = BitSet::try_new(n)?;
    let mut stack: Vec<usize> = Vec::new();
    stack.try_reserve(n)?;
    let mut components = Vec::new();

    for seed in graph.vertices() {
        if visited[seed] {
            continue;
        }
        let mut members = Vec::new();
        try_push(&mut stack, seed)?;
        while let Some(u) = stack.pop() {
            if visited.set_bit(u) {
                continue;
            }
            try_push(&mut members, u + 1)?;
            for v in graph.neighborhood(u) {
                if !visited[v] {
                    try_push(&mut stack, v)?;
                }
            }
        }
        members.shrink_to_fit();
        try_push(&mut components, Component { members })?;
    }

    #[cfg(feature = "log")]
    log::info!("obtained {} components", components.len());
    Ok(components)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentSummary {
    pub count: usize,
    pub largest: usize,
    pub smallest: usize,
}

impl ComponentSummary {
    pub fn of(components: &[Component]) -> Option<Self> {
        let largest = components.iter().map(Component::size).max()?;
        let smallest = components.iter().map(Component::size).min()?;
        Some(Self {
            count: components.len(),
            largest,
            smallest,
        })
    }
}
