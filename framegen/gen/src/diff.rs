//! Structural comparison of assembled trees.
//!
//! Answers whether regenerating from a fresh specification would change the
//! output derived from a baseline, and if so where. Nothing here writes or
//! merges files.

use std::collections::BTreeSet;
use std::fmt;

use framegen_define::Specification;
use tracing::instrument;

use crate::assemble::{SchemaTree, assemble_schema};
use crate::errors::GeneratorError;
use crate::output::item_label;
use crate::schema::NodeMap;

/// One difference between a baseline tree and a fresh tree.
///
/// Paths join node names with `.`; schema-level fields use `(schema)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(String),
    Removed(String),
    Modified(String),
}

impl Change {
    pub fn path(&self) -> &str {
        match self {
            Change::Added(path) | Change::Removed(path) | Change::Modified(path) => path,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Added(path) => write!(f, "+ {}", path),
            Change::Removed(path) => write!(f, "- {}", path),
            Change::Modified(path) => write!(f, "~ {}", path),
        }
    }
}

/// Whether output generated from `fresh` would differ from `baseline`.
///
/// ## Examples
///
/// ```
/// use framegen_gen::assemble::SchemaTree;
/// use framegen_gen::diff::would_change;
///
/// let tree = SchemaTree::default();
/// assert!(!would_change(&tree, &tree.clone()));
/// ```
pub fn would_change(baseline: &SchemaTree, fresh: &SchemaTree) -> bool {
    !baseline.equals(fresh)
}

/// Lists every change from `baseline` to `fresh`, in path order.
///
/// A nested node whose own fields are unchanged is descended into, so a
/// change deep in the tree is reported at the deepest differing node rather
/// than at its ancestors.
pub fn diff_trees(baseline: &SchemaTree, fresh: &SchemaTree) -> Vec<Change> {
    let mut changes = Vec::new();
    if baseline.description != fresh.description
        || baseline.deprecation_message != fresh.deprecation_message
    {
        changes.push(Change::Modified("(schema)".to_string()));
    }
    diff_maps("", &baseline.attributes, &fresh.attributes, &mut changes);
    diff_maps("", &baseline.blocks, &fresh.blocks, &mut changes);
    changes
}

fn diff_maps(prefix: &str, baseline: &NodeMap, fresh: &NodeMap, changes: &mut Vec<Change>) {
    let names: BTreeSet<&String> = baseline.keys().chain(fresh.keys()).collect();
    for name in names {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match (baseline.get(name), fresh.get(name)) {
            (Some(_), None) => changes.push(Change::Removed(path)),
            (None, Some(_)) => changes.push(Change::Added(path)),
            (Some(old), Some(new)) if !old.equals(new) => {
                if old.without_children().equals(&new.without_children()) {
                    for (old_children, new_children) in old.children().into_iter().zip(new.children()) {
                        diff_maps(&path, old_children, new_children, changes);
                    }
                } else {
                    changes.push(Change::Modified(path));
                }
            }
            _ => {}
        }
    }
}

/// How one item compares between a baseline and a fresh specification.
#[derive(Debug)]
pub enum CheckOutcome {
    Unchanged,
    Changed(Vec<Change>),
    /// Only the fresh specification has the item.
    Added,
    /// Only the baseline has the item.
    Removed,
    /// Either side failed to assemble.
    Failed(GeneratorError),
}

/// The check result of one item, labelled `<target>/<name>`.
#[derive(Debug)]
pub struct ItemCheck {
    pub item: String,
    pub outcome: CheckOutcome,
}

impl ItemCheck {
    /// Whether regenerating this item would change its output.
    pub fn would_change(&self) -> bool {
        !matches!(self.outcome, CheckOutcome::Unchanged)
    }
}

/// Compares every item of two specifications, fresh items first in document
/// order, then items only the baseline has.
#[instrument(skip_all)]
pub fn check_specifications(baseline: &Specification, fresh: &Specification) -> Vec<ItemCheck> {
    let mut checks = Vec::new();
    let mut seen = BTreeSet::new();

    for (target, name, schema) in fresh.items() {
        let item = item_label(target, name);
        seen.insert(item.clone());
        let baseline_schema = baseline
            .items()
            .find(|(t, n, _)| *t == target && *n == name)
            .map(|(_, _, schema)| schema);

        let outcome = match baseline_schema {
            None => CheckOutcome::Added,
            Some(old) => match (assemble_schema(old), assemble_schema(schema)) {
                (Ok(old), Ok(new)) => {
                    let changes = diff_trees(&old, &new);
                    if changes.is_empty() {
                        CheckOutcome::Unchanged
                    } else {
                        CheckOutcome::Changed(changes)
                    }
                }
                (Err(error), _) | (_, Err(error)) => CheckOutcome::Failed(error),
            },
        };
        checks.push(ItemCheck { item, outcome });
    }

    for (target, name, _) in baseline.items() {
        let item = item_label(target, name);
        if !seen.contains(&item) {
            checks.push(ItemCheck {
                item,
                outcome: CheckOutcome::Removed,
            });
        }
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeCommon, Node, SingleNestedAttribute};
    use crate::test_utils::{
        bool_node, bool_spec, node_map, resource_spec, single_nested_node, string_node,
    };
    use framegen_define::ComputedOptionalRequired;

    /// Helper to build a tree from top-level attributes.
    fn tree(attributes: Vec<(&str, Node)>) -> SchemaTree {
        SchemaTree {
            attributes: node_map(attributes),
            ..Default::default()
        }
    }

    #[test]
    fn identical_trees_have_no_changes() {
        let baseline = tree(vec![("enabled", bool_node(ComputedOptionalRequired::Optional))]);
        let fresh = baseline.clone();

        assert!(diff_trees(&baseline, &fresh).is_empty());
        assert!(!would_change(&baseline, &fresh));
    }

    #[test]
    fn added_and_removed_attributes() {
        let baseline = tree(vec![("old", bool_node(ComputedOptionalRequired::Optional))]);
        let fresh = tree(vec![("new", bool_node(ComputedOptionalRequired::Optional))]);

        assert_eq!(
            diff_trees(&baseline, &fresh),
            vec![Change::Added("new".to_string()), Change::Removed("old".to_string())]
        );
    }

    #[test]
    fn deep_change_names_deepest_node() {
        let baseline = tree(vec![(
            "configuration",
            single_nested_node(
                vec![("description", string_node(ComputedOptionalRequired::Optional))],
                None,
            ),
        )]);
        let fresh = tree(vec![(
            "configuration",
            single_nested_node(
                vec![("description", string_node(ComputedOptionalRequired::Required))],
                None,
            ),
        )]);

        assert_eq!(
            diff_trees(&baseline, &fresh),
            vec![Change::Modified("configuration.description".to_string())]
        );
        assert!(would_change(&baseline, &fresh));
    }

    #[test]
    fn own_field_change_stops_descent() {
        let children = vec![("description", string_node(ComputedOptionalRequired::Optional))];
        let baseline = tree(vec![("configuration", single_nested_node(children.clone(), None))]);
        let fresh = tree(vec![(
            "configuration",
            Node::SingleNested(SingleNestedAttribute {
                common: AttributeCommon {
                    sensitive: true,
                    ..Default::default()
                },
                attributes: node_map(children),
                default: None,
            }),
        )]);

        assert_eq!(
            diff_trees(&baseline, &fresh),
            vec![Change::Modified("configuration".to_string())]
        );
    }

    #[test]
    fn specification_check_reports_each_item() {
        let baseline = resource_spec(
            "thing",
            vec![bool_spec("enabled", ComputedOptionalRequired::Optional)],
        );
        let mut fresh = resource_spec(
            "thing",
            vec![bool_spec("enabled", ComputedOptionalRequired::Required)],
        );
        fresh.resources.push(framegen_define::Resource {
            name: "other".to_string(),
            schema: Default::default(),
        });

        let checks = check_specifications(&baseline, &fresh);
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].item, "resource/thing");
        match &checks[0].outcome {
            CheckOutcome::Changed(changes) => {
                assert_eq!(changes, &vec![Change::Modified("enabled".to_string())])
            }
            other => panic!("expected changed item, got {:?}", other),
        }
        assert!(matches!(checks[1].outcome, CheckOutcome::Added));
        assert!(checks.iter().all(ItemCheck::would_change));
    }

    #[test]
    fn unchanged_specification_would_not_change() {
        let spec = resource_spec(
            "thing",
            vec![bool_spec("enabled", ComputedOptionalRequired::Optional)],
        );

        let checks = check_specifications(&spec, &spec.clone());
        assert!(matches!(checks[0].outcome, CheckOutcome::Unchanged));
        assert!(!checks[0].would_change());
    }

    #[test]
    fn schema_description_change_is_reported() {
        let baseline = SchemaTree::default();
        let fresh = SchemaTree {
            description: Some("Manages a thing".to_string()),
            ..Default::default()
        };

        let changes = diff_trees(&baseline, &fresh);
        assert_eq!(changes, vec![Change::Modified("(schema)".to_string())]);
        assert_eq!(changes[0].to_string(), "~ (schema)");
    }
}
