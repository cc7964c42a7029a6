//! Walking the declared notebook hierarchy.
//!
//! Notebooks are stored flat on disk; the logical nesting is declared in the
//! library's `meta.json` as a forest of UUID nodes. The walker resolves each
//! UUID against the loaded notebooks and visits the forest pre-order, handing
//! the visitor the notebook together with its root-first ancestor chain.
//!
//! A UUID declared in the hierarchy but missing from the notebook list
//! resolves to `None` rather than failing; libraries whose metadata has
//! drifted still walk.

use crate::model::{Library, Notebook, NotebookHierarchyInfo};
use std::collections::HashMap;

impl Library {
    /// Visit every node of the declared hierarchy in pre-order.
    ///
    /// The visitor receives the notebook resolved for the node's UUID (`None`
    /// when the UUID has no matching notebook) and its ancestors, root first,
    /// resolved the same way. Roots are visited with an empty ancestor list.
    /// The first visitor error stops the traversal and is returned as-is.
    pub fn walk_hierarchy<E, F>(&self, mut visit: F) -> std::result::Result<(), E>
    where
        F: FnMut(Option<&Notebook>, &[Option<&Notebook>]) -> std::result::Result<(), E>,
    {
        let by_uuid: HashMap<&str, &Notebook> = self
            .notebooks
            .iter()
            .map(|nb| (nb.meta.uuid.as_str(), nb))
            .collect();

        for node in &self.meta.children {
            walk_node(node, &[], &by_uuid, &mut visit)?;
        }
        Ok(())
    }
}

fn walk_node<'a, E, F>(
    node: &'a NotebookHierarchyInfo,
    ancestors: &[Option<&'a Notebook>],
    by_uuid: &HashMap<&str, &'a Notebook>,
    visit: &mut F,
) -> std::result::Result<(), E>
where
    F: FnMut(Option<&Notebook>, &[Option<&Notebook>]) -> std::result::Result<(), E>,
{
    let current = by_uuid.get(node.uuid.as_str()).copied();
    visit(current, ancestors)?;

    if !node.children.is_empty() {
        // each level gets its own chain; the caller's is never extended
        let mut chain = ancestors.to_vec();
        chain.push(current);
        for child in &node.children {
            walk_node(child, &chain, by_uuid, visit)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LibraryMetadata, NotebookMetadata};

    fn notebook(uuid: &str) -> Notebook {
        Notebook {
            meta: NotebookMetadata {
                name: format!("Notebook {}", uuid),
                uuid: uuid.to_string(),
            },
            notes: Vec::new(),
        }
    }

    fn node(uuid: &str, children: Vec<NotebookHierarchyInfo>) -> NotebookHierarchyInfo {
        NotebookHierarchyInfo {
            uuid: uuid.to_string(),
            children,
        }
    }

    fn library(roots: Vec<NotebookHierarchyInfo>, notebooks: Vec<Notebook>) -> Library {
        Library {
            meta: LibraryMetadata { children: roots },
            notebooks,
        }
    }

    #[test]
    fn test_two_roots_with_one_child_each_visit_pre_order() {
        let lib = library(
            vec![
                node("R1", vec![node("C1", vec![])]),
                node("R2", vec![node("C2", vec![])]),
            ],
            vec![
                notebook("R1"),
                notebook("C1"),
                notebook("R2"),
                notebook("C2"),
            ],
        );

        let mut seen: Vec<(String, Vec<String>)> = Vec::new();
        lib.walk_hierarchy::<(), _>(|nb, ancestors| {
            seen.push((
                nb.unwrap().meta.uuid.clone(),
                ancestors
                    .iter()
                    .map(|a| a.unwrap().meta.uuid.clone())
                    .collect(),
            ));
            Ok(())
        })
        .unwrap();

        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], ("R1".to_string(), vec![]));
        assert_eq!(seen[1], ("C1".to_string(), vec!["R1".to_string()]));
        assert_eq!(seen[2], ("R2".to_string(), vec![]));
        assert_eq!(seen[3], ("C2".to_string(), vec!["R2".to_string()]));
    }

    #[test]
    fn test_sibling_branches_do_not_share_ancestors() {
        // R -> (A -> A1, B): visiting B after the deeper A branch must not
        // leak A into B's chain
        let lib = library(
            vec![node(
                "R",
                vec![node("A", vec![node("A1", vec![])]), node("B", vec![])],
            )],
            vec![notebook("R"), notebook("A"), notebook("A1"), notebook("B")],
        );

        let mut chains: Vec<Vec<String>> = Vec::new();
        lib.walk_hierarchy::<(), _>(|_, ancestors| {
            chains.push(
                ancestors
                    .iter()
                    .map(|a| a.unwrap().meta.uuid.clone())
                    .collect(),
            );
            Ok(())
        })
        .unwrap();

        assert_eq!(chains[2], vec!["R".to_string(), "A".to_string()]); // A1
        assert_eq!(chains[3], vec!["R".to_string()]); // B
    }

    #[test]
    fn test_unknown_uuid_resolves_to_none() {
        let lib = library(
            vec![node("R", vec![node("GHOST", vec![])])],
            vec![notebook("R")],
        );

        let mut seen = Vec::new();
        lib.walk_hierarchy::<(), _>(|nb, ancestors| {
            seen.push((nb.is_some(), ancestors.len()));
            Ok(())
        })
        .unwrap();

        assert_eq!(seen, vec![(true, 0), (false, 1)]);
    }

    #[test]
    fn test_visitor_error_short_circuits() {
        let lib = library(
            vec![node("A", vec![]), node("B", vec![]), node("C", vec![])],
            vec![notebook("A"), notebook("B"), notebook("C")],
        );

        let mut visited = 0;
        let res = lib.walk_hierarchy(|nb, _| {
            visited += 1;
            if nb.map(|n| n.meta.uuid.as_str()) == Some("B") {
                Err("stop here")
            } else {
                Ok(())
            }
        });

        assert_eq!(res, Err("stop here"));
        assert_eq!(visited, 2);
    }
}
