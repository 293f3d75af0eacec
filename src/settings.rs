use std::fs;

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::solver::SolverMethod;

/** parameters of a solve call. Missing fields take their default value.

```json
{ "method": "bop", "num_threads": 8, "warm_start": true }
```
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveSettings {
    /// solver method
    pub method: SolverMethod,
    /// number of threads the solver may use
    pub num_threads: usize,
    /// give the heuristic coloring to the solver as a starting point
    pub warm_start: bool,
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self { method: SolverMethod::default(), num_threads: 8, warm_start: true }
    }
}

impl SolveSettings {
    /// reads settings from a json string
    pub fn from_json_str(s:&str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// reads settings from a json file
    pub fn from_file(filename:&str) -> Result<Self> {
        let s = fs::read_to_string(filename)?;
        Self::from_json_str(&s)
    }
}
