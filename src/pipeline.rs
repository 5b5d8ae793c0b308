use anyhow::Context;
use log::debug;
use std::fmt::Debug;

use crate::{
    error::InvalidShape,
    outcome::Outcome,
    term::{to_success, unwrap_strict, Term},
};

/// Single step of a pipeline. Receives the success payload produced by
/// the previous step and decides what happens next: a raw value or a
/// success continues, a failure stops the pipeline.
pub trait Stage<T, E> {
    fn call(&self, input: T) -> Term<T, E>;
}

impl<F, T, E> Stage<T, E> for F
where
    F: Fn(T) -> Term<T, E>,
{
    fn call(&self, input: T) -> Term<T, E> {
        self(input)
    }
}

type BoxStage<T, E> = Box<dyn Stage<T, E> + Send + Sync>;

/// Linear chain of named stages.
///
/// ```rust
/// use routcome::{pipeline::Pipeline, Outcome, Term};
///
/// let pipeline = Pipeline::new()
///     .stage("parse", |s: String| match s.trim().parse::<i64>() {
///         Ok(n) => Term::Value(n.to_string()),
///         Err(e) => Term::Outcome(Outcome::Failure(e.to_string())),
///     })
///     .stage("double", |s: String| Term::Value(format!("{}{}", s, s)));
///
/// let doubled: Outcome<String, String> = pipeline.run(Term::Value(String::from(" 12 ")));
/// assert_eq!(doubled, Outcome::Success(String::from("1212")));
/// assert!(pipeline.run(Term::Value(String::from("x"))).is_failure());
/// ```
pub struct Pipeline<T, E> {
    stages: Vec<(String, BoxStage<T, E>)>,
}

impl<T, E> Default for Pipeline<T, E> {
    fn default() -> Self {
        Self { stages: vec![] }
    }
}

impl<T, E> Pipeline<T, E>
where
    T: Debug,
    E: Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage. Stages run in registration order.
    pub fn stage<N, S>(mut self, name: N, stage: S) -> Self
    where
        N: ToString,
        S: Stage<T, E> + Send + Sync + 'static,
    {
        self.stages.push((name.to_string(), Box::new(stage)));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|(name, _)| name.as_str())
    }

    /// Runs every stage, letting the first failure pass through to the
    /// caller. Stages after a failure are not called.
    pub fn run(&self, input: Term<T, E>) -> Outcome<T, E> {
        let mut outcome = to_success(input);

        for (name, stage) in self.stages.iter() {
            let value = match outcome {
                Outcome::Success(value) => value,
                failure => {
                    debug!("Pipeline::run - short-circuit before `{}`: {:?}", name, failure);
                    return failure;
                }
            };

            debug!("Pipeline::run - stage `{}` input: {:?}", name, value);
            outcome = to_success(stage.call(value));
        }

        outcome
    }

    /// Runs every stage, treating any failure as a hard error naming the
    /// stage that produced it. Raw values are wrapped as successes first.
    pub fn run_strict(&self, input: Term<T, E>) -> anyhow::Result<T> {
        let mut value = strict_step(input).context("pipeline input")?;

        for (name, stage) in self.stages.iter() {
            debug!("Pipeline::run_strict - stage `{}` input: {:?}", name, value);
            value = strict_step(stage.call(value))
                .with_context(|| format!("pipeline stage `{}`", name))?;
        }

        Ok(value)
    }
}

fn strict_step<T, E: Debug>(term: Term<T, E>) -> Result<T, InvalidShape> {
    let outcome = to_success(term);
    if let Outcome::Failure(error) = &outcome {
        debug!("Pipeline::run_strict - failure: {:?}", error);
    }
    unwrap_strict(Term::<T, E>::Outcome(outcome))
}
