use tracing::trace;

use super::*;

impl EdgeContraction for MultiGraph {
    fn contract_edge(&mut self, id: EdgeId) -> Result<NumEdges> {
        let edge = *self.edges.get(&id).ok_or(GraphError::StaleEdge(id))?;
        if edge.is_loop() {
            return Err(GraphError::SelfLoop(id));
        }

        let Edge { from, to, .. } = edge;
        if !self.vertices.contains_key(&from) {
            return Err(GraphError::MissingNode(from));
        }
        let mut absorbed = self
            .vertices
            .remove(&to)
            .ok_or(GraphError::MissingNode(to))?;

        // Redirect everything incident to `to`, regardless of which side `to` was on
        let moved = absorbed.take_incident();
        for e in &moved {
            if let Some(edge) = self.edges.get_mut(e) {
                edge.redirect(to, from);
            }
        }

        if let Some(target) = self.vertices.get_mut(&from) {
            target.extend_incident(moved);
        }

        // `id` itself is among the loops; parallel edges to third vertices are not
        let loops = self.self_loops();
        self.purge_edges(&loops);

        debug_assert!(self.edges.values().all(|e| !e.is_incident_to(to)));
        trace!(
            edge = id,
            from,
            to,
            loops = loops.len(),
            remaining = self.order.len(),
            "contracted edge"
        );

        Ok(loops.len())
    }
}
