// tooling/cyclops-core/src/frontend.rs
//
// Rust source frontend: lowers `syn` function bodies into the generic syntax
// model and lexes source into the flat token model.
//
//   if / if let / match guard      -> If
//   while / while let              -> While
//   for                            -> For
//   let ... else                   -> If around the local
//   match arm (except catch-all)   -> When
//   && / ||                        -> And / Or
//   return                         -> Return
//   block of several statements    -> Begin
//
// Everything else becomes `Other`. Closures, nested items and macro arguments
// that parse as expressions are lowered into the enclosing body.

use proc_macro2::{Spacing, TokenStream, TokenTree};
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::visit::{self, Visit};
use syn::{
    Arm, BinOp, Block, Expr, ExprMatch, FnArg, ImplItemFn, ItemFn, Macro, Pat, Signature,
    Stmt, Token, TraitItemFn,
};
use tracing::trace;

use crate::error::{AnalysisError, Result};
use crate::syntax::{Location, MethodUnit, Node, NodeKind};
use crate::token::{Token as LexToken, TokenKind};

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

// ---------------------------------------------------------------------------
// Methods
// ---------------------------------------------------------------------------

/// Every function with a body in `source`: free functions, impl and trait
/// default methods, and functions nested inside other bodies.
pub fn parse_methods(source: &str) -> Result<Vec<MethodUnit<Node>>> {
    let file = syn::parse_file(source)?;
    let mut collector = MethodCollector::default();
    collector.visit_file(&file);
    Ok(collector.methods)
}

#[derive(Default)]
struct MethodCollector {
    methods: Vec<MethodUnit<Node>>,
}

impl MethodCollector {
    fn push(&mut self, sig: &Signature, block: &Block) {
        let name = sig.ident.to_string();
        let location = Location::from_line_column(sig.fn_token.span.start());
        trace!(method = %name, %location, "lowering method body");
        self.methods
            .push(MethodUnit::new(name, location, lower_body(block)).with_params(params(sig)));
    }
}

impl<'ast> Visit<'ast> for MethodCollector {
    fn visit_item_fn(&mut self, node: &'ast ItemFn) {
        self.push(&node.sig, &node.block);
        visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast ImplItemFn) {
        self.push(&node.sig, &node.block);
        visit::visit_impl_item_fn(self, node);
    }

    fn visit_trait_item_fn(&mut self, node: &'ast TraitItemFn) {
        // Declarations without a default body are not definitions.
        if let Some(block) = &node.default {
            self.push(&node.sig, block);
        }
        visit::visit_trait_item_fn(self, node);
    }
}

fn params(sig: &Signature) -> Vec<String> {
    sig.inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Receiver(_) => "self".to_string(),
            FnArg::Typed(typed) => {
                let pat = &*typed.pat;
                quote!(#pat).to_string()
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

/// `None` for an empty block, the statement itself for a single statement,
/// `Begin` otherwise.
pub fn lower_body(block: &Block) -> Option<Node> {
    let mut statements: Vec<Node> = block.stmts.iter().map(lower_stmt).collect();
    match statements.len() {
        0 => None,
        1 => statements.pop(),
        _ => {
            let open = block.brace_token.span.open().start();
            Some(Node::begin(statements).at(Location::from_line_column(open)))
        }
    }
}

fn lower_stmt(stmt: &Stmt) -> Node {
    let mut lowering = Lowering::new();
    let location = Some(Location::from_line_column(stmt.span().start()));

    match stmt {
        Stmt::Expr(expr, _) => {
            lowering.visit_expr(expr);
            let mut nodes = lowering.finish();
            match nodes.len() {
                1 => nodes.pop().unwrap_or_else(|| Node::leaf(NodeKind::other("expr"))),
                _ => Node::new(NodeKind::other("expr"), nodes).with_location(location),
            }
        }
        Stmt::Local(local) => {
            lowering.visit_stmt(stmt);
            let node = Node::new(NodeKind::other("local"), lowering.finish()).with_location(location);
            // A diverging `else` is a branch around the binding.
            match local.init.as_ref().and_then(|init| init.diverge.as_ref()) {
                Some((else_token, _)) => Node::new(NodeKind::If, vec![node])
                    .at(Location::from_line_column(else_token.span.start())),
                None => node,
            }
        }
        Stmt::Item(_) => {
            lowering.visit_stmt(stmt);
            Node::new(NodeKind::other("item"), lowering.finish()).with_location(location)
        }
        Stmt::Macro(_) => {
            lowering.visit_stmt(stmt);
            Node::new(NodeKind::other("macro"), lowering.finish()).with_location(location)
        }
    }
}

/// Builds a node tree while `syn` walks an expression. Each frame collects
/// the children of the node being visited.
struct Lowering {
    frames: Vec<Vec<Node>>,
}

impl Lowering {
    fn new() -> Self {
        Self { frames: vec![Vec::new()] }
    }

    fn open(&mut self) {
        self.frames.push(Vec::new());
    }

    fn close(&mut self, kind: NodeKind, location: Location) {
        let children = if self.frames.len() > 1 {
            self.frames.pop().unwrap_or_default()
        } else {
            Vec::new()
        };
        self.emit(Node::new(kind, children).at(location));
    }

    fn emit(&mut self, node: Node) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(node);
        }
    }

    fn finish(mut self) -> Vec<Node> {
        self.frames.truncate(1);
        self.frames.pop().unwrap_or_default()
    }

    fn lower_arm(&mut self, arm: &Arm, is_last: bool) {
        self.open();
        if let Some((if_token, guard)) = &arm.guard {
            self.open();
            self.visit_expr(guard);
            self.close(NodeKind::If, Location::from_line_column(if_token.span.start()));
        }
        self.visit_expr(&arm.body);

        let kind = if is_default_arm(arm, is_last) {
            NodeKind::other("else")
        } else {
            NodeKind::When
        };
        self.close(kind, Location::from_line_column(arm.pat.span().start()));
    }
}

impl<'ast> Visit<'ast> for Lowering {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        self.open();
        visit::visit_expr(self, expr);
        self.close(expr_kind(expr), Location::from_line_column(expr.span().start()));
    }

    fn visit_expr_match(&mut self, node: &'ast ExprMatch) {
        self.visit_expr(&node.expr);
        let last = node.arms.len().saturating_sub(1);
        for (i, arm) in node.arms.iter().enumerate() {
            self.lower_arm(arm, i == last);
        }
    }

    fn visit_macro(&mut self, mac: &'ast Macro) {
        // Arguments of vec!, assert!, format! and friends are plain
        // expressions; anything else stays opaque.
        if let Ok(args) = mac.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
            for arg in &args {
                Visit::visit_expr(self, arg);
            }
        }
    }
}

/// The `else` of a case: an unguarded `_`, or an unguarded plain binding
/// (`other => ...`) in the last arm. Capitalised idents such as `None` are
/// unit variants, not bindings.
fn is_default_arm(arm: &Arm, is_last: bool) -> bool {
    if arm.guard.is_some() {
        return false;
    }
    match &arm.pat {
        Pat::Wild(_) => true,
        Pat::Ident(binding) if is_last && binding.subpat.is_none() => binding
            .ident
            .to_string()
            .starts_with(|c: char| c.is_lowercase() || c == '_'),
        _ => false,
    }
}

fn expr_kind(expr: &Expr) -> NodeKind {
    match expr {
        Expr::If(_) => NodeKind::If,
        Expr::While(_) => NodeKind::While,
        Expr::ForLoop(_) => NodeKind::For,
        Expr::Return(_) => NodeKind::Return,
        Expr::Binary(binary) => match binary.op {
            BinOp::And(_) => NodeKind::And,
            BinOp::Or(_) => NodeKind::Or,
            _ => NodeKind::other("binary"),
        },
        Expr::Match(_) => NodeKind::other("match"),
        Expr::Loop(_) => NodeKind::other("loop"),
        Expr::Closure(_) => NodeKind::other("closure"),
        Expr::Try(_) => NodeKind::other("try"),
        Expr::Block(_) => NodeKind::other("block"),
        Expr::Call(_) => NodeKind::other("call"),
        Expr::MethodCall(_) => NodeKind::other("method_call"),
        Expr::Macro(_) => NodeKind::other("macro"),
        Expr::Let(_) => NodeKind::other("let"),
        Expr::Assign(_) => NodeKind::other("assign"),
        Expr::Lit(_) => NodeKind::other("lit"),
        Expr::Path(_) => NodeKind::other("path"),
        _ => NodeKind::other("expr"),
    }
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Flat token stream of `source` in source order. Delimiters are dropped,
/// comments never reach the lexer output.
pub fn tokenize(source: &str) -> Result<Vec<LexToken>> {
    let stream: TokenStream = source
        .parse()
        .map_err(|e: proc_macro2::LexError| AnalysisError::Lex(e.to_string()))?;
    let mut tokens = Vec::new();
    flatten(stream, &mut tokens);
    Ok(tokens)
}

fn flatten(stream: TokenStream, out: &mut Vec<LexToken>) {
    let mut trees = stream.into_iter().peekable();
    while let Some(tree) = trees.next() {
        let location = Location::from_line_column(tree.span().start());
        match tree {
            TokenTree::Group(group) => flatten(group.stream(), out),
            TokenTree::Ident(ident) => {
                let text = ident.to_string();
                let kind = if KEYWORDS.contains(&text.as_str()) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                out.push(LexToken::new(kind, text, location));
            }
            TokenTree::Punct(punct) => {
                // A lifetime lexes as a joint `'` followed by an ident.
                let is_lifetime = punct.as_char() == '\''
                    && punct.spacing() == Spacing::Joint
                    && matches!(trees.peek(), Some(TokenTree::Ident(_)));
                if is_lifetime {
                    if let Some(TokenTree::Ident(name)) = trees.next() {
                        out.push(LexToken::new(TokenKind::Lifetime, format!("'{name}"), location));
                    }
                } else {
                    out.push(LexToken::new(TokenKind::Punct, punct.as_char().to_string(), location));
                }
            }
            TokenTree::Literal(literal) => {
                out.push(LexToken::new(TokenKind::Literal, literal.to_string(), location));
            }
        }
    }
}
