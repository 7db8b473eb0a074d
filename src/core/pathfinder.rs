use std::collections::VecDeque;
use std::sync::Arc;

use crate::core::recommendations::{approach_for_path, recommendations_for_path, unreachable_recommendations};
use crate::error::EngineError;
use crate::models::{ConnectionPath, NetworkAnalysis, NetworkGraph, NetworkProfile};
use crate::services::SocialGraph;

pub const DEFAULT_MAX_DEPTH: usize = 3;
pub const MAX_ALTERNATIVES: usize = 3;
pub const MAX_MUTUAL_CONNECTIONS: usize = 5;

/// Intermediaries above this connection count earn a strength bonus
const WELL_CONNECTED: u32 = 500;
const HOP_PENALTY: i32 = 15;
const WELL_CONNECTED_BONUS: i32 = 10;

/// Finds and ranks introduction paths through a [`SocialGraph`]
#[derive(Debug, Clone)]
pub struct PathFinder {
    graph: Arc<SocialGraph>,
}

impl PathFinder {
    pub fn new(graph: Arc<SocialGraph>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    /// Analyse how `source_id` can reach `target_id` within `max_depth` hops
    ///
    /// Returns the best path (fewest hops, then strongest) with up to three
    /// alternatives, or an unreachable analysis when no path fits the bound.
    pub fn find_connection_paths(
        &self,
        source_id: &str,
        target_id: &str,
        max_depth: usize,
    ) -> Result<NetworkAnalysis, EngineError> {
        let (_, target) = self.endpoints(source_id, target_id)?;
        let mut paths = self.ranked_paths(source_id, target_id, max_depth);

        if paths.is_empty() {
            tracing::debug!("No path from {} to {} within {} hops", source_id, target_id, max_depth);
            return Ok(NetworkAnalysis {
                target: target.name.clone(),
                target_profile: target.clone(),
                reachable: false,
                best_path: None,
                alternative_paths: Vec::new(),
                recommendations: unreachable_recommendations(),
            });
        }

        let best = paths.remove(0);
        paths.truncate(MAX_ALTERNATIVES);

        tracing::debug!(
            "Best path from {} to {}: {} hops, strength {} ({} alternatives)",
            source_id,
            target_id,
            best.degree,
            best.strength,
            paths.len()
        );

        Ok(NetworkAnalysis {
            target: target.name.clone(),
            target_profile: target.clone(),
            reachable: true,
            recommendations: recommendations_for_path(&best),
            best_path: Some(best),
            alternative_paths: paths,
        })
    }

    /// Every discovered path between two profiles, for visualization
    pub fn network_graph(
        &self,
        source_id: &str,
        target_id: &str,
        max_depth: usize,
    ) -> Result<NetworkGraph, EngineError> {
        let (founder, investor) = self.endpoints(source_id, target_id)?;
        let paths = self.ranked_paths(source_id, target_id, max_depth);

        Ok(NetworkGraph {
            founder: founder.clone(),
            investor: investor.clone(),
            shortest_path: paths.first().cloned(),
            total_paths: paths.len(),
            paths,
        })
    }

    fn endpoints(
        &self,
        source_id: &str,
        target_id: &str,
    ) -> Result<(&NetworkProfile, &NetworkProfile), EngineError> {
        let source = self
            .graph
            .profile(source_id)
            .ok_or_else(|| EngineError::NotFound(source_id.to_string()))?;
        let target = self
            .graph
            .profile(target_id)
            .ok_or_else(|| EngineError::NotFound(target_id.to_string()))?;
        Ok((source, target))
    }

    /// All simple paths sorted by (degree asc, strength desc)
    ///
    /// The sort is stable, so equal keys keep discovery order; that order
    /// is not part of the contract.
    pub fn ranked_paths(&self, source_id: &str, target_id: &str, max_depth: usize) -> Vec<ConnectionPath> {
        let mutual = self.mutual_connections(source_id, target_id);

        let mut paths: Vec<ConnectionPath> = find_all_paths(&self.graph, source_id, target_id, max_depth)
            .into_iter()
            .filter_map(|ids| self.build_connection_path(&ids, &mutual))
            .collect();

        paths.sort_by(|a, b| a.degree.cmp(&b.degree).then_with(|| b.strength.cmp(&a.strength)));
        paths
    }

    fn build_connection_path(&self, ids: &[String], mutual: &[NetworkProfile]) -> Option<ConnectionPath> {
        let profiles: Option<Vec<NetworkProfile>> =
            ids.iter().map(|id| self.graph.profile(id).cloned()).collect();

        let Some(profiles) = profiles else {
            tracing::warn!("Dropping path with unknown profile: {}", ids.join(" -> "));
            return None;
        };

        let target = profiles.last()?.clone();
        Some(ConnectionPath {
            target,
            degree: profiles.len() - 1,
            strength: calculate_path_strength(&profiles),
            mutual_connections: mutual.to_vec(),
            recommended_approach: approach_for_path(&profiles),
            path: profiles,
        })
    }

    /// Profiles adjacent to both endpoints, in the source's adjacency order
    pub fn mutual_connections(&self, source_id: &str, target_id: &str) -> Vec<NetworkProfile> {
        self.graph
            .neighbours(source_id)
            .iter()
            .filter(|id| self.graph.is_connected(target_id, id))
            .filter_map(|id| self.graph.profile(id).cloned())
            .take(MAX_MUTUAL_CONNECTIONS)
            .collect()
    }
}

/// Breadth-first enumeration of every simple path from `start` to `target`
///
/// Each frontier entry carries its own path, and a neighbour is skipped only
/// if it already appears in that path. Paths stop at the target and never
/// exceed `max_depth` hops. The trivial path from a node to itself is never
/// produced.
pub fn find_all_paths(graph: &SocialGraph, start: &str, target: &str, max_depth: usize) -> Vec<Vec<String>> {
    let mut paths = Vec::new();
    let mut queue: VecDeque<Vec<String>> = VecDeque::new();
    queue.push_back(vec![start.to_string()]);

    while let Some(path) = queue.pop_front() {
        let Some(current) = path.last() else { continue };

        if current == target && path.len() > 1 {
            paths.push(path);
            continue;
        }

        // Extending would exceed the hop bound
        if path.len() > max_depth {
            continue;
        }

        for next in graph.neighbours(current) {
            if !path.contains(next) {
                let mut extended = path.clone();
                extended.push(next.clone());
                queue.push_back(extended);
            }
        }
    }

    paths
}

/// Strength of a path (0-100)
///
/// Starts at 100, loses 15 per intermediary, gains 10 per well-connected
/// intermediary.
pub fn calculate_path_strength(path: &[NetworkProfile]) -> u8 {
    let intermediaries: &[NetworkProfile] = if path.len() > 2 { &path[1..path.len() - 1] } else { &[] };

    let mut strength: i32 = 100;
    strength -= intermediaries.len() as i32 * HOP_PENALTY;
    strength += intermediaries
        .iter()
        .filter(|p| p.connections > WELL_CONNECTED)
        .count() as i32
        * WELL_CONNECTED_BONUS;

    strength.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, connections: u32) -> NetworkProfile {
        NetworkProfile {
            id: id.to_string(),
            name: id.to_uppercase(),
            title: None,
            company: None,
            location: None,
            linkedin_url: None,
            connections,
        }
    }

    fn line_graph() -> PathFinder {
        let graph = SocialGraph::builder()
            .profile(person("a", 100))
            .profile(person("b", 100))
            .profile(person("c", 100))
            .connect("a", "b")
            .connect("b", "c")
            .build();
        PathFinder::new(Arc::new(graph))
    }

    #[test]
    fn test_single_two_hop_path() {
        let analysis = line_graph().find_connection_paths("a", "c", 3).unwrap();

        assert!(analysis.reachable);
        let best = analysis.best_path.unwrap();
        let ids: Vec<&str> = best.path.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(best.degree, 2);
        assert_eq!(best.strength, 85);
        assert!(analysis.alternative_paths.is_empty());
    }

    #[test]
    fn test_depth_bound_makes_target_unreachable() {
        let finder = line_graph();

        for depth in [0, 1] {
            let analysis = finder.find_connection_paths("a", "c", depth).unwrap();
            assert!(!analysis.reachable);
            assert!(analysis.best_path.is_none());
            assert_eq!(analysis.recommendations, unreachable_recommendations());
        }
    }

    #[test]
    fn test_unknown_ids_not_found() {
        let finder = line_graph();
        assert_eq!(
            finder.find_connection_paths("a", "zzz", 3).unwrap_err(),
            EngineError::NotFound("zzz".to_string())
        );
        assert!(matches!(finder.find_connection_paths("zzz", "a", 3), Err(EngineError::NotFound(_))));
    }

    #[test]
    fn test_self_path_is_never_emitted() {
        let analysis = line_graph().find_connection_paths("a", "a", 3).unwrap();
        assert!(!analysis.reachable);
    }

    #[test]
    fn test_cycles_do_not_repeat_nodes() {
        // Square a-b-d-c-a plus diagonal b-c
        let graph = SocialGraph::builder()
            .profile(person("a", 100))
            .profile(person("b", 100))
            .profile(person("c", 100))
            .profile(person("d", 100))
            .connect("a", "b")
            .connect("a", "c")
            .connect("b", "d")
            .connect("c", "d")
            .connect("b", "c")
            .build();

        let paths = find_all_paths(&graph, "a", "d", 5);
        // a-b-d, a-c-d, a-b-c-d, a-c-b-d
        assert_eq!(paths.len(), 4);
        for path in &paths {
            let mut seen = path.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), path.len());
        }
    }

    #[test]
    fn test_strength_clamped() {
        let mut path: Vec<NetworkProfile> = vec![person("s", 0)];
        path.extend((0..3).map(|i| person(&format!("i{}", i), 5000)));
        path.push(person("t", 0));
        // 100 - 45 + 30
        assert_eq!(calculate_path_strength(&path), 85);

        let direct = vec![person("s", 5000), person("t", 5000)];
        assert_eq!(calculate_path_strength(&direct), 100);

        let mut long: Vec<NetworkProfile> = vec![person("s", 0)];
        long.extend((0..9).map(|i| person(&format!("i{}", i), 0)));
        long.push(person("t", 0));
        assert_eq!(calculate_path_strength(&long), 0);
    }

    #[test]
    fn test_paths_with_unknown_nodes_are_dropped() {
        let graph = SocialGraph::builder()
            .profile(person("a", 100))
            .profile(person("c", 100))
            .connect("a", "ghost")
            .connect("ghost", "c")
            .build();
        let finder = PathFinder::new(Arc::new(graph));

        let analysis = finder.find_connection_paths("a", "c", 3).unwrap();
        assert!(!analysis.reachable);
        assert!(finder.mutual_connections("a", "c").is_empty());
    }

    #[test]
    fn test_mutual_connections_capped() {
        let mut builder = SocialGraph::builder().profile(person("s", 1)).profile(person("t", 1));
        for i in 0..8 {
            let id = format!("m{}", i);
            builder = builder.profile(person(&id, 1)).connect("s", &id).connect(&id, "t");
        }
        let finder = PathFinder::new(Arc::new(builder.build()));

        let mutual = finder.mutual_connections("s", "t");
        let ids: Vec<&str> = mutual.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["m0", "m1", "m2", "m3", "m4"]);

        let analysis = finder.find_connection_paths("s", "t", 2).unwrap();
        assert_eq!(analysis.alternative_paths.len(), MAX_ALTERNATIVES);
        assert_eq!(analysis.best_path.unwrap().mutual_connections.len(), MAX_MUTUAL_CONNECTIONS);
    }

    #[test]
    fn test_network_graph_lists_all_paths() {
        let finder = PathFinder::new(Arc::new(SocialGraph::seeded()));
        let view = finder.network_graph("founder1", "vc4", DEFAULT_MAX_DEPTH).unwrap();

        // via advisor1-vc1, advisor1-connector1 and founder2-mentor1
        assert_eq!(view.total_paths, 3);
        assert_eq!(view.paths.len(), 3);
        assert_eq!(view.shortest_path.map(|p| p.degree), Some(3));
    }
}
