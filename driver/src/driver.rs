//! The check driver.

use std::collections::HashSet;

use veto_checks::{
    AnnotationApi, CheckConfig, CheckResult, CompositionCycleCheck, ConstraintCheck,
    ConstraintHelper, Diagnostic, Diagnostics, DuplicateValidatorCheck, RequiredMembersCheck,
    ValidatorCheck, ValidatorReferenceCheck,
};
use veto_registry::Registry;

/// Statistics from one driver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of constraint types checked.
    pub types_checked: usize,
    /// Number of check invocations.
    pub checks_run: usize,
    /// Number of diagnostics after deduplication.
    pub diagnostics_emitted: usize,
}

/// Result of one driver run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Deduplicated, deterministically ordered diagnostics.
    pub diagnostics: Diagnostics,
    /// Run statistics.
    pub stats: RunStats,
}

/// Runs the registered rule checks over a registry.
///
/// The driver borrows the registry and configuration; checks are
/// registered as trait objects, so new structural rules plug in without
/// touching existing ones. Each check invocation is independent and
/// side-effect-free, and all shared state is behind `&`-references, so a
/// host may fan invocations out across declarations; the shipped `run`
/// is single-threaded.
pub struct CheckDriver<'r> {
    helper: ConstraintHelper<'r>,
    registry: &'r Registry,
    checks: Vec<Box<dyn ConstraintCheck + 'r>>,
}

impl<'r> CheckDriver<'r> {
    /// Create a driver with no registered checks.
    pub fn new(registry: &'r Registry, config: &'r CheckConfig) -> Self {
        Self {
            helper: ConstraintHelper::new(registry, config),
            registry,
            checks: Vec::new(),
        }
    }

    /// Create a driver with the built-in rule checks registered.
    pub fn with_default_checks(
        registry: &'r Registry,
        config: &'r CheckConfig,
    ) -> CheckResult<Self> {
        let mut driver = Self::new(registry, config);
        let helper = driver.helper;
        let api = AnnotationApi::new();

        driver.register(Box::new(ValidatorCheck::new(helper, api)));
        driver.register(Box::new(DuplicateValidatorCheck::new(api, config)));
        driver.register(Box::new(CompositionCycleCheck::new(helper)));
        driver.register(Box::new(RequiredMembersCheck::new(config)));
        driver.register(Box::new(ValidatorReferenceCheck::new(api, config)?));

        Ok(driver)
    }

    /// Register a rule check.
    pub fn register(&mut self, check: Box<dyn ConstraintCheck + 'r>) {
        self.checks.push(check);
    }

    /// Get the number of registered checks.
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Run every registered check against every constraint type.
    pub fn run(&self) -> RunOutcome {
        let mut stats = RunStats::default();
        let mut seen: HashSet<Diagnostic> = HashSet::new();
        let mut collected: Vec<Diagnostic> = Vec::new();

        for decl in self.registry.all_decls() {
            let constraint = match self.helper.constraint_mirror(decl) {
                Some(mirror) => mirror,
                None => continue,
            };
            stats.types_checked += 1;

            for check in &self.checks {
                stats.checks_run += 1;
                for diagnostic in check.check_annotation_type(decl, constraint) {
                    if seen.insert(diagnostic.clone()) {
                        collected.push(diagnostic);
                    }
                }
            }
        }

        // Registry iteration order is unspecified; sort for stable output.
        collected.sort_by(|a, b| {
            a.decl_name
                .cmp(&b.decl_name)
                .then_with(|| a.code.as_str().cmp(b.code.as_str()))
                .then_with(|| a.message.cmp(&b.message))
        });

        stats.diagnostics_emitted = collected.len();
        let mut diagnostics = Diagnostics::new();
        for diagnostic in collected {
            diagnostics.push(diagnostic);
        }

        RunOutcome { diagnostics, stats }
    }
}
