use crate::{
    graph::{Edge, EdgeId},
    sets::hiding::HidingSet,
};

/// Iterator over the cached incidence list of one node.
///
/// The cache stores edge ids only; visibility is looked up in the edge store while
/// iterating, so hidden edges are skipped without being removed from the cache.
pub struct IncidentEdges<'a> {
    ids: std::slice::Iter<'a, EdgeId>,
    edges: &'a HidingSet<Edge>,
    include_hidden: bool,
}

impl<'a> IncidentEdges<'a> {
    pub(crate) fn visible(ids: &'a [EdgeId], edges: &'a HidingSet<Edge>) -> Self {
        IncidentEdges {
            ids: ids.iter(),
            edges,
            include_hidden: false,
        }
    }

    pub(crate) fn all(ids: &'a [EdgeId], edges: &'a HidingSet<Edge>) -> Self {
        IncidentEdges {
            ids: ids.iter(),
            edges,
            include_hidden: true,
        }
    }

    pub(crate) fn empty(edges: &'a HidingSet<Edge>) -> Self {
        IncidentEdges::visible(&[], edges)
    }
}

impl<'a> Iterator for IncidentEdges<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<&'a Edge> {
        let edges = self.edges;
        let include_hidden = self.include_hidden;
        self.ids.by_ref().find_map(|id| {
            if include_hidden {
                edges.get_even_if_hidden(id.internal)
            } else {
                edges.get(id.internal)
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.ids.size_hint().1)
    }
}
