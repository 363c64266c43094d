// tooling/cyclops-core/src/complexity.rs
//
// Cyclomatic complexity of a method body:
//   - decision points (if, while, until, for, rescue, when, and, or) add one
//   - explicit returns subtract one
//   - the trailing statement adds the implicit exit of the method
//
// complexity = score(body) - 1 + adjustment(body), and exactly 0 for a
// method without a body.

use serde::Serialize;
use tracing::trace;

use crate::syntax::{Location, MethodUnit, NodeKind, SyntaxNode};

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Counts of the node kinds that move the score, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub decision_points: u32,
    pub explicit_returns: u32,
}

pub struct ComplexityScorer;

impl ComplexityScorer {
    /// `1 + Σ weight(node)` over every node reachable from `body`, nested
    /// closures and items included. An absent body scores 0.
    pub fn score<N: SyntaxNode>(body: Option<&N>) -> i64 {
        let Some(root) = body else {
            return 0;
        };

        let mut score = 1;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            score += node.kind().weight();
            stack.extend(node.children());
        }
        score
    }

    pub fn tally<N: SyntaxNode>(body: Option<&N>) -> Tally {
        let mut tally = Tally::default();
        let mut stack: Vec<&N> = body.into_iter().collect();
        while let Some(node) = stack.pop() {
            match node.kind() {
                NodeKind::Return => tally.explicit_returns += 1,
                kind if kind.is_decision_point() => tally.decision_points += 1,
                _ => {}
            }
            stack.extend(node.children());
        }
        tally
    }
}

// ---------------------------------------------------------------------------
// Implicit return
// ---------------------------------------------------------------------------

pub struct ImplicitReturnAdjuster;

impl ImplicitReturnAdjuster {
    /// 0 without a body, 2 when the final statement is an explicit `return`
    /// (cancelling the scorer's -1 for it), 1 otherwise.
    pub fn adjustment<N: SyntaxNode>(body: Option<&N>) -> i64 {
        let Some(node) = body else {
            return 0;
        };

        match node.kind() {
            NodeKind::Return => 2,
            NodeKind::Begin => match node.children().last() {
                Some(last) if *last.kind() == NodeKind::Return => 2,
                _ => 1,
            },
            _ => 1,
        }
    }
}

/// Net complexity of one method.
pub fn method_complexity<N: SyntaxNode>(unit: &MethodUnit<N>) -> i64 {
    let Some(body) = unit.body.as_ref() else {
        return 0;
    };

    let score = ComplexityScorer::score(Some(body));
    let adjustment = ImplicitReturnAdjuster::adjustment(Some(body));
    trace!(method = %unit.name, score, adjustment, "scored method body");
    score - 1 + adjustment
}

// ---------------------------------------------------------------------------
// Per-method metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodMetrics {
    pub name: String,
    pub location: Location,
    pub param_count: usize,
    pub decision_points: u32,
    pub explicit_returns: u32,
    pub complexity: i64,
}

impl MethodMetrics {
    pub fn measure<N: SyntaxNode>(unit: &MethodUnit<N>) -> Self {
        let tally = ComplexityScorer::tally(unit.body.as_ref());
        Self {
            name: unit.name.clone(),
            location: unit.location,
            param_count: unit.params.len(),
            decision_points: tally.decision_points,
            explicit_returns: tally.explicit_returns,
            complexity: method_complexity(unit),
        }
    }
}
