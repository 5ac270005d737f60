use serde::{Deserialize, Serialize};

use crate::core::ChartData;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{SpiderChart, SpiderChartConfig};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const CHART_DATA_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: SpiderChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataJsonContractV1 {
    pub schema_version: u32,
    pub data: ChartData,
}

impl SpiderChartConfig {
    pub fn to_json_contract_v1_pretty(self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts both a bare config object and a versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value)
                .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")));
        }
        let payload: ChartConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

impl ChartData {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartDataJsonContractV1 {
            schema_version: CHART_DATA_JSON_SCHEMA_V1,
            data: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize data contract v1: {e}"))
        })
    }

    pub fn from_json_contract_v1_str(input: &str) -> ChartResult<Self> {
        let payload: ChartDataJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse data json payload: {e}"))
        })?;
        if payload.schema_version != CHART_DATA_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported data schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.data)
    }
}

impl<R: Renderer> SpiderChart<R> {
    pub fn config_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.config.to_json_contract_v1_pretty()
    }

    pub fn data_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.data.to_json_contract_v1_pretty()
    }
}
