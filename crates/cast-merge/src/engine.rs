//! The merge itself, free of I/O.

use std::collections::{BTreeMap, BTreeSet};

use cast_core::{
    AbstractSyntaxTreeCrossPlatform, AbstractSyntaxTreeTargetPlatform, AstNode, AstNodes, MacroObject, Node,
    TargetPlatform,
};
use tracing::{debug, error, info, warn};

use crate::report::{MergeIssue, MergeReport, join_platforms};

/// The cross-platform AST and the report of how it was built.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub ast: AbstractSyntaxTreeCrossPlatform,
    pub report: MergeReport,
}

struct Occurrence {
    platform: TargetPlatform,
    node: Node,
}

/// Merge per-platform ASTs, in the given order.
///
/// An AST whose requested and actual platforms are both unknown is skipped;
/// it is most likely an earlier merge result sitting next to the inputs.
#[must_use]
pub fn merge(asts: Vec<AbstractSyntaxTreeTargetPlatform>) -> MergeOutcome {
    let mut report = MergeReport::default();
    let mut file_name = String::new();
    let mut index: BTreeMap<String, Vec<Occurrence>> = BTreeMap::new();
    let mut kind_rejected: BTreeSet<String> = BTreeSet::new();

    for ast in asts {
        if ast.platform_requested.is_unknown() && ast.platform_actual.is_unknown() {
            warn!(file_name = %ast.file_name, "merge: skipping AST without a target platform");
            continue;
        }
        let platform = ast.platform_requested;
        debug!(%platform, nodes = ast.nodes.len(), "merge: indexing platform");
        if file_name.is_empty() {
            file_name = ast.file_name;
        }

        for node in ast.nodes.into_nodes() {
            let name = node.name().to_string();
            let occurrences = index.entry(name.clone()).or_default();
            let expected = occurrences.first().map(|first| first.node.kind());
            if let Some(expected) = expected.filter(|&kind| kind != node.kind()) {
                error!(%name, %platform, %expected, actual = %node.kind(), "merge: kind mismatch");
                report.issues.push(MergeIssue::KindMismatch {
                    name: name.clone(),
                    platform: platform.clone(),
                    expected,
                    actual: node.kind(),
                });
                kind_rejected.insert(name);
                continue;
            }
            occurrences.push(Occurrence {
                platform: platform.clone(),
                node,
            });
        }
        report.platforms.push(platform);
    }

    let mut nodes = AstNodes::default();
    for (name, occurrences) in index {
        if occurrences.len() != report.platforms.len() {
            if !kind_rejected.contains(&name) {
                let missing: Vec<TargetPlatform> = report
                    .platforms
                    .iter()
                    .filter(|platform| !occurrences.iter().any(|o| &o.platform == *platform))
                    .cloned()
                    .collect();
                warn!(%name, missing = %join_platforms(&missing), "merge: not declared on every platform");
                report.issues.push(MergeIssue::Missing {
                    name,
                    platforms: missing,
                });
            }
            continue;
        }

        let mut occurrences = occurrences.into_iter();
        let Some(first) = occurrences.next() else {
            continue;
        };
        let mut differing = Vec::new();
        let mut only_macro_values = true;
        for other in occurrences {
            if !first.node.eq_ignoring_location(&other.node) {
                only_macro_values &= differs_only_in_macro_value(&first.node, &other.node);
                differing.push(other.platform);
            }
        }

        if differing.is_empty() {
            let mut node = first.node;
            node.clear_locations();
            nodes.insert(node);
            report.kept += 1;
        } else if only_macro_values {
            warn!(%name, platforms = %join_platforms(&differing), "merge: macro value differs between platforms");
            report.issues.push(MergeIssue::MacroValueMismatch {
                name,
                platforms: differing,
            });
        } else {
            error!(
                %name,
                first = %first.platform,
                platforms = %join_platforms(&differing),
                "merge: declarations differ between platforms"
            );
            report.issues.push(MergeIssue::Mismatch {
                name,
                platforms: differing,
            });
        }
    }

    info!(%report, "merge: merged");
    MergeOutcome {
        ast: AbstractSyntaxTreeCrossPlatform {
            file_name,
            platforms: report.platforms.clone(),
            nodes,
        },
        report,
    }
}

fn differs_only_in_macro_value(first: &Node, other: &Node) -> bool {
    match (first, other) {
        (Node::MacroObject(first), Node::MacroObject(other)) => {
            let other = MacroObject {
                value: first.value.clone(),
                ..other.clone()
            };
            first.eq_ignoring_location(&other)
        }
        _ => false,
    }
}
