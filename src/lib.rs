pub mod dataset;
pub mod error;
pub mod logistic_regression;
pub mod qubit;
pub mod split;
