/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, its `Options`, statement execution and the
/// control signal used to unwind `→` returns.
pub mod core;

/// Arithmetic evaluation.
///
/// Applies `+`, `-`, `*` and `/` to integer and float operands.
pub mod binary;

/// The name-to-value store.
///
/// Holds the global bindings of a session and the local bindings of each
/// active call.
pub mod environment;

/// Function evaluation.
///
/// Handles calls of `Π` functions: argument checking, call frames and return
/// value computation.
pub mod function;
