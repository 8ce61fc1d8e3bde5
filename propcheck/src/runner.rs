//! The test driver: binds a generator, a reduction, and a property into a
//! named, reusable test, and searches for minimal counterexamples.

use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;

use crate::config::RunConfig;
use crate::error::GenError;
use crate::generator::Generator;
use crate::property::Property;
use crate::reduction::Reduction;
use crate::rng;

/// Outcome of minimizing one failing value.
#[derive(Debug, Clone)]
pub struct ShrinkResult<T> {
    /// The failing value that triggered shrinking.
    pub original: T,
    /// The minimal value that still fails.
    pub minimal: T,
    /// Number of accepted shrink steps.
    pub steps: usize,
}

/// An executable property test: one generator, one reduction, one property,
/// and a name.
///
/// Tests are immutable and hold no internal state; a test can be checked
/// any number of times, and its parts are reference-counted so several
/// tests may share one generator, reduction, or property.
pub struct PropertyTest<T> {
    name: String,
    generator: Arc<dyn Generator<Value = T>>,
    reduction: Arc<dyn Reduction<Value = T>>,
    property: Arc<dyn Property<T>>,
}

impl<T> Clone for PropertyTest<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            generator: Arc::clone(&self.generator),
            reduction: Arc::clone(&self.reduction),
            property: Arc::clone(&self.property),
        }
    }
}

impl<T> fmt::Debug for PropertyTest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyTest")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> PropertyTest<T>
where
    T: Clone + fmt::Debug + PartialEq + 'static,
{
    /// Create a test from owned parts.
    pub fn new(
        name: impl Into<String>,
        generator: impl Generator<Value = T> + 'static,
        reduction: impl Reduction<Value = T> + 'static,
        property: impl Property<T> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            generator: Arc::new(generator),
            reduction: Arc::new(reduction),
            property: Arc::new(property),
        }
    }

    /// Create a test from shared parts.
    pub fn from_parts(
        name: impl Into<String>,
        generator: Arc<dyn Generator<Value = T>>,
        reduction: Arc<dyn Reduction<Value = T>>,
        property: Arc<dyn Property<T>>,
    ) -> Self {
        Self {
            name: name.into(),
            generator,
            reduction,
            property,
        }
    }

    /// The test's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The test's generator, for sharing with other tests.
    pub fn generator(&self) -> Arc<dyn Generator<Value = T>> {
        Arc::clone(&self.generator)
    }

    /// The test's reduction, for sharing with other tests.
    pub fn reduction(&self) -> Arc<dyn Reduction<Value = T>> {
        Arc::clone(&self.reduction)
    }

    /// The test's property, for sharing with other tests.
    pub fn property(&self) -> Arc<dyn Property<T>> {
        Arc::clone(&self.property)
    }

    /// Draw once, from the run's isolated stream when one is configured,
    /// else from the shared stream (locked per draw, so concurrent callers
    /// interleave in call order).
    fn draw(&self, local: &mut Option<StdRng>) -> Result<T, GenError> {
        match local {
            Some(stream) => self.generator.generate(stream),
            None => {
                let mut stream = rng::lock_shared();
                self.generator.generate(&mut *stream)
            }
        }
    }

    /// Check the property against `n` sequential draws, short-circuiting at
    /// the first failure. Returns true iff `n > 0` and all draws pass.
    pub fn check(&self, n: usize) -> Result<bool, GenError> {
        self.check_with_config(n, &RunConfig::default())
    }

    /// [`check`](PropertyTest::check) with an explicit configuration.
    pub fn check_with_config(&self, n: usize, config: &RunConfig) -> Result<bool, GenError> {
        if n == 0 {
            return Ok(false);
        }
        let mut local = config.seed.map(rng::seeded_rng);
        for _ in 0..n {
            let value = self.draw(&mut local)?;
            if !self.property.holds(&value) {
                if config.verbose {
                    eprintln!("{}: failed on {:?}", self.name, value);
                }
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Check the property against exactly `n` draws with no short-circuit,
    /// returning `(pass_rate, fail_rate)`. The rates sum to 1.0 for
    /// `n > 0`; `n == 0` yields `(0.0, 0.0)`.
    pub fn check_percentage(&self, n: usize) -> Result<(f64, f64), GenError> {
        self.check_percentage_with_config(n, &RunConfig::default())
    }

    /// [`check_percentage`](PropertyTest::check_percentage) with an
    /// explicit configuration.
    pub fn check_percentage_with_config(
        &self,
        n: usize,
        config: &RunConfig,
    ) -> Result<(f64, f64), GenError> {
        if n == 0 {
            return Ok((0.0, 0.0));
        }
        let mut local = config.seed.map(rng::seeded_rng);
        let mut passed = 0usize;
        for _ in 0..n {
            let value = self.draw(&mut local)?;
            if self.property.holds(&value) {
                passed += 1;
            }
        }
        let pass_rate = passed as f64 / n as f64;
        if config.verbose {
            eprintln!("{}: {:.1}% of {} draws passed", self.name, pass_rate * 100.0, n);
        }
        Ok((pass_rate, 1.0 - pass_rate))
    }

    /// Draw up to `n` values; on the first failure, shrink it and return
    /// the minimal counterexample. Returns `None` when all `n` draws pass.
    pub fn fails_at(&self, n: usize) -> Result<Option<T>, GenError> {
        self.fails_at_with_config(n, &RunConfig::default())
    }

    /// [`fails_at`](PropertyTest::fails_at) with an explicit configuration.
    pub fn fails_at_with_config(
        &self,
        n: usize,
        config: &RunConfig,
    ) -> Result<Option<T>, GenError> {
        Ok(self
            .fails_at_init_with_config(n, config)?
            .map(|(_, minimal)| minimal))
    }

    /// Like [`fails_at`](PropertyTest::fails_at), but also retains the
    /// first failing draw, returning `(first_failure, minimal)`.
    pub fn fails_at_init(&self, n: usize) -> Result<Option<(T, T)>, GenError> {
        self.fails_at_init_with_config(n, &RunConfig::default())
    }

    /// [`fails_at_init`](PropertyTest::fails_at_init) with an explicit
    /// configuration.
    pub fn fails_at_init_with_config(
        &self,
        n: usize,
        config: &RunConfig,
    ) -> Result<Option<(T, T)>, GenError> {
        let mut local = config.seed.map(rng::seeded_rng);
        for _ in 0..n {
            let value = self.draw(&mut local)?;
            if !self.property.holds(&value) {
                if config.verbose {
                    eprintln!("{}: failed on {:?}, shrinking", self.name, value);
                }
                let result = self.minimize(value, config);
                if config.verbose {
                    eprintln!(
                        "{}: minimal counterexample {:?} after {} steps",
                        self.name, result.minimal, result.steps
                    );
                }
                return Ok(Some((result.original, result.minimal)));
            }
        }
        Ok(None)
    }

    /// Shrink a failing value to a minimal counterexample.
    ///
    /// Scans the current value's candidate list in order for the first
    /// candidate that also fails the property; if one is found and it is
    /// distinct from the current value, it becomes current and the scan
    /// restarts on its own candidate list. Stops when no candidate fails,
    /// when the failing candidate makes no progress, or when the step
    /// budget is exhausted. Termination relies on the reduction's finite
    /// descent; it is not verified here.
    pub fn minimize(&self, failing: T, config: &RunConfig) -> ShrinkResult<T> {
        let original = failing.clone();
        let mut current = failing;
        let mut steps = 0;
        while steps < config.max_shrink_steps {
            let next = self
                .reduction
                .reduce(&current)
                .into_iter()
                .find(|candidate| !self.property.holds(candidate));
            match next {
                Some(candidate) if candidate != current => {
                    current = candidate;
                    steps += 1;
                    if config.verbose {
                        eprintln!("{}: shrink step {} -> {:?}", self.name, steps, current);
                    }
                }
                _ => break,
            }
        }
        ShrinkResult {
            original,
            minimal: current,
            steps,
        }
    }
}

/// Run [`fails_at`](PropertyTest::fails_at) independently for each test,
/// pairing every test with its result.
pub fn execute<T>(
    n: usize,
    tests: &[PropertyTest<T>],
) -> Result<Vec<(&PropertyTest<T>, Option<T>)>, GenError>
where
    T: Clone + fmt::Debug + PartialEq + 'static,
{
    execute_with_config(n, tests, &RunConfig::default())
}

/// [`execute`] with an explicit configuration.
pub fn execute_with_config<'a, T>(
    n: usize,
    tests: &'a [PropertyTest<T>],
    config: &RunConfig,
) -> Result<Vec<(&'a PropertyTest<T>, Option<T>)>, GenError>
where
    T: Clone + fmt::Debug + PartialEq + 'static,
{
    let mut results = Vec::with_capacity(tests.len());
    for test in tests {
        let outcome = test.fails_at_with_config(n, config)?;
        if config.verbose {
            match &outcome {
                Some(minimal) => eprintln!("{}: falsified by {:?}", test.name(), minimal),
                None => eprintln!("{}: passed {} draws", test.name(), n),
            }
        }
        results.push((test, outcome));
    }
    Ok(results)
}
