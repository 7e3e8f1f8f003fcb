//! Finds assertion calls in a source file and folds their messages.

use crate::{
    ast::{MessageTemplate, Visitor, fold_message, walk_expr},
    error_map::{Code, ErrorMapError, ErrorMapStore},
    syntax::{self, diagnostic::Diagnostic, expression::Expression, position::Position},
};

pub const DEFAULT_ASSERTION_NAME: &str = "invariant";

/// One `invariant(condition, message, ...)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionSite {
    pub template: MessageTemplate,
    pub position: Position,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    /// In source order of the call's start.
    pub sites: Vec<AssertionSite>,
    pub errors: Vec<Diagnostic>,
}

impl ScanReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(|site| site.template.text.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Scanner {
    assertion_name: String,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new(DEFAULT_ASSERTION_NAME)
    }
}

impl Scanner {
    pub fn new(assertion_name: impl Into<String>) -> Self {
        Scanner {
            assertion_name: assertion_name.into(),
        }
    }

    pub fn assertion_name(&self) -> &str {
        &self.assertion_name
    }

    /// Parse `source` and collect every assertion site. Sites are still
    /// reported when the source has syntax errors.
    pub fn scan(&self, source: &str) -> ScanReport {
        let (program, errors) = syntax::parse(source);
        let mut collector = AssertionCollector {
            name: &self.assertion_name,
            sites: Vec::new(),
        };
        collector.visit_program(&program);
        ScanReport {
            sites: collector.sites,
            errors,
        }
    }

    /// Scan `source` and register each template with `store`, returning the
    /// codes in site order. Nothing is registered if the source has errors.
    pub fn scan_into(
        &self,
        source: &str,
        store: &mut ErrorMapStore,
    ) -> Result<(ScanReport, Vec<Code>), ErrorMapError> {
        let report = self.scan(source);
        if report.has_errors() {
            return Ok((report, Vec::new()));
        }
        let codes = report
            .templates()
            .map(|template| store.lookup_or_allocate(template))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((report, codes))
    }
}

struct AssertionCollector<'a> {
    name: &'a str,
    sites: Vec<AssertionSite>,
}

impl<'ast> Visitor<'ast> for AssertionCollector<'_> {
    fn visit_expr(&mut self, expr: &'ast Expression) {
        if let Expression::Call {
            function,
            arguments,
            optional: false,
            span,
        } = expr
            && function.as_identifier() == Some(self.name)
            && let Some(message) = arguments.get(1)
        {
            self.sites.push(AssertionSite {
                template: fold_message(message),
                position: span.start,
            });
        }
        walk_expr(self, expr);
    }
}
