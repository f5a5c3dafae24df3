pub mod evaluator;
pub mod predicates;
