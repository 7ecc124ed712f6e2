//! NaN removal for Nordic RADAR precipitation data.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::fields::Field;
use crate::filters::Filter;
use crate::matching::{MatchRule, MatchSpec};

fn default_lwe() -> String {
    "lwe".to_string()
}

fn default_output() -> String {
    "lwe_pp".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NordicPpOptions {
    #[serde(default = "default_lwe")]
    lwe: String,
    #[serde(default = "default_output")]
    output: String,
}

/// Zero out NaN values in a liquid-water-equivalent field.
///
/// Consumes one field matched by param name and emits one renamed
/// field built from it as metadata template.
#[derive(Debug)]
pub struct NordicPp {
    /// Param name of the precip field to match.
    lwe: String,
    /// Param name assigned to the produced field.
    output: String,
}

impl NordicPp {
    pub fn from_options(options: &Value) -> Result<Self> {
        let options: NordicPpOptions = serde_json::from_value(options.clone())?;
        Ok(Self {
            lwe: options.lwe,
            output: options.output,
        })
    }
}

fn pp_radar(mut lwe: Vec<f32>) -> Vec<f32> {
    debug!(values = ?lwe, "raw lwe payload");

    // NaN never compares equal to anything, so this replaces no
    // elements. Kept as-is until the intended semantics ("replace NaN
    // with 0") are confirmed; see DESIGN.md.
    #[allow(invalid_nan_comparisons)]
    for value in lwe.iter_mut() {
        if *value == f32::NAN {
            *value = 0.0;
        }
    }

    lwe
}

impl Filter for NordicPp {
    fn name(&self) -> &'static str {
        "nordic_pp"
    }

    fn match_spec(&self) -> MatchSpec {
        MatchSpec::new(vec![MatchRule::forwarded("lwe", self.lwe.clone())])
    }

    fn forward_transform(&self, bound: &[Field]) -> Result<Vec<Field>> {
        let lwe = bound.first().ok_or_else(|| TransformError::MissingInput {
            filter: self.name(),
            param: self.lwe.clone(),
        })?;

        let lwe_pp = pp_radar(lwe.values.clone());

        Ok(vec![Field::from_template(lwe_pp, lwe, self.output.clone())])
    }
}
