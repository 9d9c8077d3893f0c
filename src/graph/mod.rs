//! Dependency graph between declared resources.
//!
//! An edge `a -> b` exists when the properties of `a` hold a `Ref` or
//! `Fn::GetAtt` naming `b`. CloudFormation creates `b` first.

use crate::error::StackError;
use crate::template::Template;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
struct Node {
    id: String,
    resource_type: &'static str,
    /// Indices of the nodes this one references, deduplicated.
    dependencies: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct ResourceGraph {
    nodes: Vec<Node>,
}

impl ResourceGraph {
    /// Fails on a reference to an id the template does not declare.
    pub fn from_template(template: &Template) -> Result<Self, StackError> {
        let mut nodes = Vec::with_capacity(template.len());

        for (id, resource) in template.resources() {
            let references = resource.references().map_err(|e| StackError::Serialization {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

            let mut dependencies = BTreeSet::new();
            for reference in references {
                let index = template
                    .position_of(&reference.target)
                    .ok_or_else(|| StackError::DanglingReference {
                        from: id.to_string(),
                        to: reference.target.clone(),
                    })?;
                dependencies.insert(index);
            }

            nodes.push(Node {
                id: id.to_string(),
                resource_type: resource.type_name(),
                dependencies: dependencies.into_iter().collect(),
            });
        }

        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.dependencies.len()).sum()
    }

    /// Node ids with their resource type, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.nodes.iter().map(|n| (n.id.as_str(), n.resource_type))
    }

    /// The ids `id` references directly, or `None` for an unknown id.
    pub fn dependencies_of(&self, id: &str) -> Option<Vec<&str>> {
        self.index_of(id).map(|i| {
            self.nodes[i]
                .dependencies
                .iter()
                .map(|&d| self.nodes[d].id.as_str())
                .collect()
        })
    }

    /// The ids that reference `id` directly.
    pub fn dependents_of(&self, id: &str) -> Option<Vec<&str>> {
        self.index_of(id).map(|target| {
            self.nodes
                .iter()
                .filter(|n| n.dependencies.contains(&target))
                .map(|n| n.id.as_str())
                .collect()
        })
    }

    /// Resources nothing else depends on.
    pub fn terminal_nodes(&self) -> Vec<&str> {
        let mut referenced = vec![false; self.nodes.len()];
        for node in &self.nodes {
            for &d in &node.dependencies {
                referenced[d] = true;
            }
        }
        self.nodes
            .iter()
            .zip(referenced)
            .filter(|(_, referenced)| !referenced)
            .map(|(n, _)| n.id.as_str())
            .collect()
    }

    /// Dependencies before dependents. Among ready nodes the earlier
    /// declaration comes first, so the order is stable.
    pub fn topological_order(&self) -> Result<Vec<&str>, StackError> {
        let mut pending: Vec<usize> = self.nodes.iter().map(|n| n.dependencies.len()).collect();
        let dependents = self.dependents();
        let mut ready: BTreeSet<usize> = (0..self.nodes.len()).filter(|&i| pending[i] == 0).collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(next) = ready.pop_first() {
            order.push(self.nodes[next].id.as_str());
            for &dependent in &dependents[next] {
                pending[dependent] -= 1;
                if pending[dependent] == 0 {
                    ready.insert(dependent);
                }
            }
        }

        if order.len() < self.nodes.len() {
            return Err(self.cycle_error(&pending));
        }
        Ok(order)
    }

    /// Layer 0 holds resources without dependencies; layer n holds resources
    /// whose dependencies all sit in earlier layers.
    pub fn dependency_layers(&self) -> Result<Vec<Vec<&str>>, StackError> {
        let mut pending: Vec<usize> = self.nodes.iter().map(|n| n.dependencies.len()).collect();
        let dependents = self.dependents();
        let mut current: Vec<usize> = (0..self.nodes.len()).filter(|&i| pending[i] == 0).collect();
        let mut layers = Vec::new();
        let mut placed = 0;

        while !current.is_empty() {
            placed += current.len();
            let mut next = Vec::new();
            for &i in &current {
                for &dependent in &dependents[i] {
                    pending[dependent] -= 1;
                    if pending[dependent] == 0 {
                        next.push(dependent);
                    }
                }
            }
            next.sort_unstable();
            layers.push(current.iter().map(|&i| self.nodes[i].id.as_str()).collect());
            current = next;
        }

        if placed < self.nodes.len() {
            return Err(self.cycle_error(&pending));
        }
        Ok(layers)
    }

    pub fn is_acyclic(&self) -> bool {
        self.topological_order().is_ok()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    fn dependents(&self) -> Vec<Vec<usize>> {
        let mut dependents = vec![Vec::new(); self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate() {
            for &d in &node.dependencies {
                dependents[d].push(i);
            }
        }
        dependents
    }

    fn cycle_error(&self, pending: &[usize]) -> StackError {
        let stuck = pending
            .iter()
            .position(|&p| p > 0)
            .map(|i| self.nodes[i].id.clone())
            .unwrap_or_default();
        StackError::Cycle(stuck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::{Alarm, Subscription, Topic};
    use crate::template::{LogicalId, Value};

    fn id(s: &str) -> LogicalId {
        LogicalId::new(s).unwrap()
    }

    fn monitoring_template() -> Template {
        let mut template = Template::new("graph");
        let topic = template.add(id("Topic"), Topic::new("Alerts", "alerts")).unwrap();
        template
            .add(id("Subscription"), Subscription::email(Value::ref_to(&topic), "ops@example.com"))
            .unwrap();
        template
            .add(
                id("Alarm"),
                Alarm::waf_sum("Blocked", "BlockedRequests", 2.0, 60).with_action(Value::ref_to(&topic)),
            )
            .unwrap();
        template.add(id("Loose"), Topic::new("Other", "other")).unwrap();
        template
    }

    #[test]
    fn test_edges_and_queries() {
        let graph = ResourceGraph::from_template(&monitoring_template()).unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.dependencies_of("Subscription"), Some(vec!["Topic"]));
        assert_eq!(graph.dependencies_of("Topic"), Some(vec![]));
        assert_eq!(graph.dependents_of("Topic"), Some(vec!["Subscription", "Alarm"]));
        assert_eq!(graph.dependencies_of("Missing"), None);
    }

    #[test]
    fn test_terminal_nodes() {
        let graph = ResourceGraph::from_template(&monitoring_template()).unwrap();
        assert_eq!(graph.terminal_nodes(), vec!["Subscription", "Alarm", "Loose"]);
    }

    #[test]
    fn test_order_and_layers() {
        let graph = ResourceGraph::from_template(&monitoring_template()).unwrap();
        assert_eq!(
            graph.topological_order().unwrap(),
            vec!["Topic", "Subscription", "Alarm", "Loose"]
        );
        assert_eq!(
            graph.dependency_layers().unwrap(),
            vec![vec!["Topic", "Loose"], vec!["Subscription", "Alarm"]]
        );
    }

    #[test]
    fn test_dangling_reference() {
        let mut template = Template::new("graph");
        template
            .add(id("Subscription"), Subscription::email(Value::ref_to(&id("Nowhere")), "a@b.c"))
            .unwrap();
        let err = ResourceGraph::from_template(&template).unwrap_err();
        assert_eq!(
            err,
            StackError::DanglingReference {
                from: "Subscription".to_string(),
                to: "Nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_cycle_detected() {
        let mut template = Template::new("graph");
        template.push_unchecked(
            id("First"),
            Alarm::waf_sum("a", "BlockedRequests", 1.0, 60).with_action(Value::ref_to(&id("Second"))),
        );
        template.push_unchecked(
            id("Second"),
            Alarm::waf_sum("b", "BlockedRequests", 1.0, 60).with_action(Value::ref_to(&id("First"))),
        );
        let graph = ResourceGraph::from_template(&template).unwrap();
        assert!(!graph.is_acyclic());
        assert!(matches!(graph.topological_order(), Err(StackError::Cycle(_))));
        assert!(matches!(graph.dependency_layers(), Err(StackError::Cycle(_))));
        assert!(graph.terminal_nodes().is_empty());
    }
}
