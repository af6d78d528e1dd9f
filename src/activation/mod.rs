pub mod logistic;

pub use logistic::{sigmoid, sigmoid_derivative_from_output};
