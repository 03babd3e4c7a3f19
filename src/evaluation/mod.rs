//! Route distance evaluation.

mod evaluator;

pub use evaluator::{Leg, RouteEvaluator, RouteSummary};
