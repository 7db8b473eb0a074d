use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::models::NetworkProfile;
use crate::services::data::{read_json, DataError};
use crate::services::seed;

/// On-disk network format: profiles plus `id -> [connected ids]`
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkData {
    pub profiles: Vec<NetworkProfile>,
    #[serde(default)]
    pub connections: HashMap<String, Vec<String>>,
}

/// Immutable social graph: profile table plus outgoing adjacency lists
///
/// Adjacency lists keep insertion order and hold no duplicates. The graph is
/// symmetric only if the data source made it so; traversal follows outgoing
/// entries as stored.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    profiles: HashMap<String, NetworkProfile>,
    adjacency: HashMap<String, Vec<String>>,
}

impl SocialGraph {
    pub fn builder() -> SocialGraphBuilder {
        SocialGraphBuilder::default()
    }

    /// Built-in demo network
    pub fn seeded() -> Self {
        Self::from_data(seed::network())
    }

    pub fn from_data(data: NetworkData) -> Self {
        let mut builder = Self::builder();
        for profile in data.profiles {
            builder = builder.profile(profile);
        }
        for (id, neighbours) in data.connections {
            builder = builder.edges(&id, neighbours);
        }
        builder.build()
    }

    /// Load a network from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        Ok(Self::from_data(read_json(path)?))
    }

    pub fn profile(&self, id: &str) -> Option<&NetworkProfile> {
        self.profiles.get(id)
    }

    /// Outgoing neighbours of `id`, empty when it has none
    pub fn neighbours(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_connected(&self, from: &str, to: &str) -> bool {
        self.neighbours(from).iter().any(|n| n == to)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Case-insensitive substring search over name and company, sorted by id
    pub fn search(&self, query: &str) -> Vec<&NetworkProfile> {
        let query = query.to_lowercase();
        let mut results: Vec<&NetworkProfile> = self
            .profiles
            .values()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.company
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&query))
            })
            .collect();
        results.sort_by(|a, b| a.id.cmp(&b.id));
        results
    }
}

/// Collects profiles and edges before freezing them into a [`SocialGraph`]
#[derive(Debug, Default)]
pub struct SocialGraphBuilder {
    profiles: HashMap<String, NetworkProfile>,
    adjacency: HashMap<String, Vec<String>>,
}

impl SocialGraphBuilder {
    pub fn profile(mut self, profile: NetworkProfile) -> Self {
        self.profiles.insert(profile.id.clone(), profile);
        self
    }

    /// Add directed edges `from -> each of to`
    pub fn edges<I, S>(mut self, from: &str, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for target in to {
            self.push_edge(from, target.into());
        }
        self
    }

    /// Add an undirected connection between `a` and `b`
    pub fn connect(mut self, a: &str, b: &str) -> Self {
        self.push_edge(a, b.to_string());
        self.push_edge(b, a.to_string());
        self
    }

    fn push_edge(&mut self, from: &str, to: String) {
        if from == to {
            return;
        }
        let list = self.adjacency.entry(from.to_string()).or_default();
        if !list.contains(&to) {
            list.push(to);
        }
    }

    pub fn build(self) -> SocialGraph {
        SocialGraph {
            profiles: self.profiles,
            adjacency: self.adjacency,
        }
    }
}
