//! Violation detector: a single-pass AST walk over one parsed file.
//!
//! The detector recognizes five syntactic shapes that reference a type by
//! name and checks each name against the blacklist registry:
//!
//! 1. supertrait clauses (`trait T: Base`)
//! 2. trait impl clauses (`impl Cap for T`)
//! 3. static-style calls (`Recv::f()`)
//! 4. constant member access (`Recv::CONST`)
//! 5. construction (`Recv { .. }`, `Recv(..)`)
//!
//! Only statically named receivers are considered. References routed through
//! a runtime value (method calls on variables, field access) or a qualified
//! path (`<T as Tr>::CONST`) are silently skipped: the detector flags only
//! what it can prove from the source text alone, trading missed violations
//! through indirection for zero false alarms. Tokens inside macro invocations
//! are not expanded and are therefore not inspected either.

use syn::visit::{self, Visit};
use syn::{Expr, ExprCall, ExprPath, ExprStruct, ItemImpl, ItemTrait, TypeParamBound};

use crate::registry::Blacklist;
use crate::types::{Violation, ViolationKind};

/// Checks one syntax tree against a blacklist registry.
///
/// A detector is stateless between runs: each [`detect`](Detector::detect)
/// call threads its own accumulator through the traversal, so one instance
/// can be reused across files sequentially or the calls run concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Detector<'a> {
    blacklist: &'a Blacklist,
}

impl<'a> Detector<'a> {
    /// Creates a detector over the given registry.
    #[must_use]
    pub fn new(blacklist: &'a Blacklist) -> Self {
        Self { blacklist }
    }

    /// Walks the tree pre-order, depth-first, visiting every node once, and
    /// returns the violations in visitation order.
    ///
    /// Never fails: the tree is already structurally valid, so the walk only
    /// finds zero or more matches.
    #[must_use]
    pub fn detect(&self, tree: &syn::File) -> Vec<Violation> {
        let mut visitor = ShapeVisitor {
            blacklist: self.blacklist,
            violations: Vec::new(),
        };
        visitor.visit_file(tree);
        visitor.violations
    }
}

struct ShapeVisitor<'a> {
    blacklist: &'a Blacklist,
    violations: Vec<Violation>,
}

impl ShapeVisitor<'_> {
    fn check(&mut self, ident: &syn::Ident, kind: ViolationKind) {
        let token = ident.to_string();
        if self.blacklist.contains(&token) {
            self.violations.push(Violation::new(token, kind));
        }
    }
}

impl<'ast> Visit<'ast> for ShapeVisitor<'_> {
    fn visit_item_trait(&mut self, node: &'ast ItemTrait) {
        // Each named supertrait is an independent base-type reference.
        for bound in &node.supertraits {
            if let TypeParamBound::Trait(trait_bound) = bound {
                if let Some(segment) = trait_bound.path.segments.last() {
                    self.check(&segment.ident, ViolationKind::ClassExtendsNotAllowed);
                }
            }
        }
        visit::visit_item_trait(self, node);
    }

    fn visit_item_impl(&mut self, node: &'ast ItemImpl) {
        if let Some((_, trait_path, _)) = &node.trait_ {
            if let Some(segment) = trait_path.segments.last() {
                self.check(&segment.ident, ViolationKind::ClassImplementsNotAllowed);
            }
        }
        visit::visit_item_impl(self, node);
    }

    fn visit_expr_call(&mut self, node: &'ast ExprCall) {
        if let Expr::Path(func) = &*node.func {
            if func.qself.is_none() {
                if let Some(receiver) = receiver_type(&func.path) {
                    self.check(receiver, ViolationKind::StaticCallNotAllowed);
                } else if let Some(target) = single_type_segment(&func.path) {
                    // Tuple-struct construction: `Recv(..)`.
                    self.check(target, ViolationKind::ClassInstantiationNotAllowed);
                }
            }
            // The function path is classified above; only the arguments can
            // still contain violating expressions.
            for arg in &node.args {
                self.visit_expr(arg);
            }
            return;
        }
        visit::visit_expr_call(self, node);
    }

    fn visit_expr_path(&mut self, node: &'ast ExprPath) {
        if node.qself.is_none() {
            if let Some(last) = node.path.segments.last() {
                if is_const_ident(&last.ident.to_string()) {
                    if let Some(receiver) = receiver_type(&node.path) {
                        self.check(receiver, ViolationKind::ClassConstFetchNotAllowed);
                    }
                }
            }
        }
        visit::visit_expr_path(self, node);
    }

    fn visit_expr_struct(&mut self, node: &'ast ExprStruct) {
        if node.qself.is_none() {
            if let Some(segment) = node.path.segments.last() {
                self.check(&segment.ident, ViolationKind::ClassInstantiationNotAllowed);
            }
        }
        visit::visit_expr_struct(self, node);
    }
}

/// The receiver type a static-style access names: the next-to-last segment
/// of a plain multi-segment path (`Recv::member`). Single-segment paths have
/// no receiver.
fn receiver_type(path: &syn::Path) -> Option<&syn::Ident> {
    let len = path.segments.len();
    if len < 2 {
        return None;
    }
    path.segments.iter().nth(len - 2).map(|s| &s.ident)
}

/// The sole segment of a single-segment path written in type case.
fn single_type_segment(path: &syn::Path) -> Option<&syn::Ident> {
    if path.segments.len() != 1 {
        return None;
    }
    let segment = path.segments.first()?;
    segment
        .ident
        .to_string()
        .starts_with(char::is_uppercase)
        .then_some(&segment.ident)
}

/// True for UPPER_SNAKE_CASE identifiers, the shape of a constant member.
fn is_const_ident(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase())
        && !name.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(code: &str) -> Vec<Violation> {
        let blacklist = Blacklist::new([
            "LegacyApi",
            "LegacyUtil",
            "LegacyLog",
            "LegacyDb",
            "LegacyConfig",
            "LegacyHelper",
        ]);
        let tree = syn::parse_file(code).expect("test source must parse");
        Detector::new(&blacklist).detect(&tree)
    }

    #[test]
    fn detects_disallowed_supertrait() {
        let violations = detect("trait Foo: LegacyApi {}");
        assert_eq!(
            violations,
            vec![Violation::new(
                "LegacyApi",
                ViolationKind::ClassExtendsNotAllowed
            )]
        );
    }

    #[test]
    fn detects_each_disallowed_capability_independently() {
        let violations = detect(
            r"
struct Bar;
impl LegacyUtil for Bar {}
impl LegacyLog for Bar {}
",
        );
        assert_eq!(
            violations,
            vec![
                Violation::new("LegacyUtil", ViolationKind::ClassImplementsNotAllowed),
                Violation::new("LegacyLog", ViolationKind::ClassImplementsNotAllowed),
            ]
        );
    }

    #[test]
    fn detects_static_call_receiver() {
        let violations = detect("fn run() { LegacyDb::execute_query(); }");
        assert_eq!(
            violations,
            vec![Violation::new(
                "LegacyDb",
                ViolationKind::StaticCallNotAllowed
            )]
        );
    }

    #[test]
    fn detects_static_call_behind_longer_path() {
        let violations = detect("fn run() { platform::LegacyDb::execute_query(); }");
        assert_eq!(
            violations,
            vec![Violation::new(
                "LegacyDb",
                ViolationKind::StaticCallNotAllowed
            )]
        );
    }

    #[test]
    fn detects_const_fetch_receiver() {
        let violations = detect("fn limit() -> u32 { LegacyConfig::SOME_CONST }");
        assert_eq!(
            violations,
            vec![Violation::new(
                "LegacyConfig",
                ViolationKind::ClassConstFetchNotAllowed
            )]
        );
    }

    #[test]
    fn detects_struct_literal_instantiation() {
        let violations = detect("fn make() { let _x = LegacyHelper { id: 1 }; }");
        assert_eq!(
            violations,
            vec![Violation::new(
                "LegacyHelper",
                ViolationKind::ClassInstantiationNotAllowed
            )]
        );
    }

    #[test]
    fn detects_tuple_struct_instantiation() {
        let violations = detect("fn make() { let _x = LegacyHelper(1); }");
        assert_eq!(
            violations,
            vec![Violation::new(
                "LegacyHelper",
                ViolationKind::ClassInstantiationNotAllowed
            )]
        );
    }

    #[test]
    fn clean_file_yields_no_violations() {
        let violations = detect(
            r"
trait Foo: Clone {}
struct Bar;
impl Default for Bar {
    fn default() -> Self {
        Bar
    }
}
fn run() -> u32 {
    String::new();
    let _b = Bar {};
    u32::MAX
}
",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn matching_ignores_case_and_keeps_token_as_written() {
        let violations = detect("fn run() { LEGACYDB::execute_query(); legacydb::run(); }");
        assert_eq!(
            violations,
            vec![
                Violation::new("LEGACYDB", ViolationKind::StaticCallNotAllowed),
                Violation::new("legacydb", ViolationKind::StaticCallNotAllowed),
            ]
        );
    }

    #[test]
    fn collects_every_shape_not_just_the_first() {
        let violations = detect(
            r"
trait Gate: LegacyApi {}
fn run() {
    LegacyApi::check();
    let _ = LegacyApi::VERSION;
}
",
        );
        let codes: Vec<u16> = violations.iter().map(|v| v.kind.code()).collect();
        assert_eq!(codes, vec![1000, 1002, 1003]);
        assert!(violations.iter().all(|v| v.disallowed_token == "LegacyApi"));
    }

    #[test]
    fn method_call_on_runtime_value_is_skipped() {
        // `db` may well hold a LegacyDb at runtime; that is not statically
        // resolvable, so no violation is produced.
        let violations = detect("fn run(db: Db) { db.execute_query(); }");
        assert!(violations.is_empty());
    }

    #[test]
    fn qualified_path_receiver_is_skipped() {
        let violations = detect("fn limit() -> u32 { <LegacyConfig>::SOME_CONST }");
        assert!(violations.is_empty());
    }

    #[test]
    fn field_access_is_never_a_const_fetch() {
        let violations = detect("fn run(cfg: Cfg) -> u32 { cfg.some_const }");
        assert!(violations.is_empty());
    }

    #[test]
    fn plain_function_reference_is_skipped() {
        // A non-constant member path (`Recv::method` used as a value) is left
        // alone; only the call and constant shapes are claimed.
        let violations = detect("fn run() { let _f = LegacyDb::execute_query; }");
        assert!(violations.is_empty());
    }

    #[test]
    fn violations_inside_call_arguments_are_found() {
        let violations = detect("fn run() { emit(LegacyHelper { id: 1 }); }");
        assert_eq!(
            violations,
            vec![Violation::new(
                "LegacyHelper",
                ViolationKind::ClassInstantiationNotAllowed
            )]
        );
    }

    #[test]
    fn receiver_is_reported_before_arguments() {
        let violations = detect("fn run() { LegacyDb::query(LegacyConfig::LIMIT); }");
        assert_eq!(
            violations,
            vec![
                Violation::new("LegacyDb", ViolationKind::StaticCallNotAllowed),
                Violation::new("LegacyConfig", ViolationKind::ClassConstFetchNotAllowed),
            ]
        );
    }

    #[test]
    fn detector_reuse_is_independent_per_tree() {
        let blacklist = Blacklist::new(["LegacyApi"]);
        let detector = Detector::new(&blacklist);
        let dirty = syn::parse_file("trait A: LegacyApi {}").expect("parse");
        let clean = syn::parse_file("trait B: Clone {}").expect("parse");
        assert_eq!(detector.detect(&dirty).len(), 1);
        assert!(detector.detect(&clean).is_empty());
        // Re-running the dirty tree finds the same violation again.
        assert_eq!(detector.detect(&dirty).len(), 1);
    }
}
