use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Layer sizes of an input → hidden → output network.
///
/// Fields:
/// - `inputs`:  length of every vector passed to `query`/`train`
/// - `hidden`:  number of hidden units
/// - `outputs`: length of every output and target vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub inputs: usize,
    pub hidden: usize,
    pub outputs: usize,
}

impl Topology {
    pub fn new(inputs: usize, hidden: usize, outputs: usize) -> Self {
        Topology { inputs, hidden, outputs }
    }

    /// Every layer must hold at least one unit.
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [("inputs", self.inputs), ("hidden", self.hidden), ("outputs", self.outputs)] {
            if size == 0 {
                return Err(NetworkError::InvalidTopology(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }

    /// Shape of the input → hidden weight matrix, `(inputs, hidden)`.
    pub fn input_weights_shape(&self) -> (usize, usize) {
        (self.inputs, self.hidden)
    }

    /// Shape of the hidden → output weight matrix, `(hidden, outputs)`.
    pub fn hidden_weights_shape(&self) -> (usize, usize) {
        (self.hidden, self.outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_layers() {
        assert!(Topology::new(3, 3, 3).validate().is_ok());
        assert!(matches!(
            Topology::new(3, 0, 3).validate(),
            Err(NetworkError::InvalidTopology(msg)) if msg.contains("hidden")
        ));
        assert!(Topology::new(0, 1, 1).validate().is_err());
        assert!(Topology::new(1, 1, 0).validate().is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let t: Topology = serde_json::from_str(r#"{"inputs":2,"hidden":4,"outputs":1}"#).unwrap();
        assert_eq!(t, Topology::new(2, 4, 1));
        assert_eq!(t.input_weights_shape(), (2, 4));
        assert_eq!(t.hidden_weights_shape(), (4, 1));
    }
}
