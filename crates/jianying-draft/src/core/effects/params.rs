//! Parameter Resolution
//!
//! Maps caller slider values (0-100, as shown in the host UI) onto the parameter
//! ranges declared by effect metadata.

use serde_json::{json, Value};

use crate::core::metadata::{EffectMeta, EffectParam};
use crate::core::{CoreError, CoreResult};

/// A parameter with its applied value
#[derive(Clone, Debug, PartialEq)]
pub struct EffectParamInstance {
    pub name: String,
    pub default_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// Position within the metadata's parameter list
    pub index: usize,
    pub value: f64,
}

impl EffectParamInstance {
    fn new(param: &EffectParam, index: usize, value: f64) -> Self {
        Self {
            name: param.name.clone(),
            default_value: param.default_value,
            min_value: param.min_value,
            max_value: param.max_value,
            index,
            value,
        }
    }

    pub fn export_json(&self) -> Value {
        json!({
            "default_value": self.default_value,
            "name": self.name,
            "type": "",
            "value": self.value,
        })
    }
}

/// Resolves caller values against the metadata's parameters, one instance per
/// declared parameter.
///
/// `values[i]` overrides parameter `i`: `Some(v)` is mapped linearly from 0-100 to
/// `[min, max]`, `None` (or a missing tail) keeps the default. Values outside
/// 0-100 are mapped without clamping.
pub fn resolve_params(meta: &EffectMeta, values: &[Option<f64>]) -> CoreResult<Vec<EffectParamInstance>> {
    if values.len() > meta.params.len() {
        return Err(CoreError::InvalidParameterCount {
            name: meta.name.clone(),
            given: values.len(),
            expected: meta.params.len(),
        });
    }

    Ok(meta
        .params
        .iter()
        .enumerate()
        .map(|(i, param)| {
            let value = match values.get(i).copied().flatten() {
                Some(v) => param.min_value + (v / 100.0) * (param.max_value - param.min_value),
                None => param.default_value,
            };
            EffectParamInstance::new(param, i, value)
        })
        .collect())
}
