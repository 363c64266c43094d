// tooling/cyclops-core/src/syntax.rs
//
// Syntax model consumed by the complexity rule. Parsers live outside the core
// and hand over trees through the `SyntaxNode` trait; `Node` is the owned
// implementation produced by `crate::frontend` and used throughout the tests.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// 1-based line and column of a node or token in its source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Converts a `proc_macro2` position (1-based line, 0-based column).
    pub fn from_line_column(lc: proc_macro2::LineColumn) -> Self {
        Self { line: lc.line, column: lc.column + 1 }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// ---------------------------------------------------------------------------
// Node kinds
// ---------------------------------------------------------------------------

/// Discriminant of a syntax node. The set is open: anything the complexity
/// rule does not care about is carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    If,
    While,
    Until,
    For,
    Rescue,
    When,
    And,
    Or,
    Return,
    /// A sequence of statements.
    Begin,
    Other(String),
}

impl NodeKind {
    pub fn other(name: impl Into<String>) -> Self {
        NodeKind::Other(name.into())
    }

    /// Branches and loops that open an additional path through a method.
    pub fn is_decision_point(&self) -> bool {
        matches!(
            self,
            NodeKind::If
                | NodeKind::While
                | NodeKind::Until
                | NodeKind::For
                | NodeKind::Rescue
                | NodeKind::When
                | NodeKind::And
                | NodeKind::Or
        )
    }

    /// Contribution of a single node of this kind to a complexity score.
    pub fn weight(&self) -> i64 {
        match self {
            NodeKind::Return => -1,
            kind if kind.is_decision_point() => 1,
            _ => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::If => "if",
            NodeKind::While => "while",
            NodeKind::Until => "until",
            NodeKind::For => "for",
            NodeKind::Rescue => "rescue",
            NodeKind::When => "when",
            NodeKind::And => "and",
            NodeKind::Or => "or",
            NodeKind::Return => "return",
            NodeKind::Begin => "begin",
            NodeKind::Other(name) => name,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

/// Read-only view of a node in an externally owned syntax tree.
pub trait SyntaxNode {
    fn kind(&self) -> &NodeKind;

    fn children(&self) -> &[Self]
    where
        Self: Sized;

    fn location(&self) -> Option<Location> {
        None
    }
}

/// Owned, immutable syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
    location: Option<Location>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children, location: None }
    }

    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Statement sequence, the shape of a multi-statement body.
    pub fn begin(statements: Vec<Node>) -> Self {
        Self::new(NodeKind::Begin, statements)
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }
}

impl SyntaxNode for Node {
    fn kind(&self) -> &NodeKind {
        &self.kind
    }

    fn children(&self) -> &[Node] {
        &self.children
    }

    fn location(&self) -> Option<Location> {
        self.location
    }
}

// ---------------------------------------------------------------------------
// Methods
// ---------------------------------------------------------------------------

/// One method or function definition as handed to the complexity rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodUnit<N = Node> {
    pub name: String,
    /// Position of the definition keyword.
    pub location: Location,
    pub params: Vec<String>,
    /// `None` for an empty method.
    pub body: Option<N>,
}

impl<N> MethodUnit<N> {
    pub fn new(name: impl Into<String>, location: Location, body: Option<N>) -> Self {
        Self {
            name: name.into(),
            location,
            params: Vec::new(),
            body,
        }
    }

    pub fn with_params(mut self, params: Vec<String>) -> Self {
        self.params = params;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_point_weights() {
        for kind in [
            NodeKind::If,
            NodeKind::While,
            NodeKind::Until,
            NodeKind::For,
            NodeKind::Rescue,
            NodeKind::When,
            NodeKind::And,
            NodeKind::Or,
        ] {
            assert!(kind.is_decision_point(), "{kind} should be a decision point");
            assert_eq!(kind.weight(), 1);
        }
    }

    #[test]
    fn test_return_and_other_weights() {
        assert_eq!(NodeKind::Return.weight(), -1);
        assert!(!NodeKind::Return.is_decision_point());
        assert_eq!(NodeKind::Begin.weight(), 0);
        assert_eq!(NodeKind::other("send").weight(), 0);
    }

    #[test]
    fn test_location_from_proc_macro_column_is_one_based() {
        let loc = Location::from_line_column(proc_macro2::LineColumn { line: 3, column: 0 });
        assert_eq!(loc, Location::new(3, 1));
        assert_eq!(loc.to_string(), "3:1");
    }
}
