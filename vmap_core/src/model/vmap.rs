use serde::{Deserialize, Serialize};

use super::VastData;
use crate::codec::{TimeOffset, as_text_opt};

/// `<vmap:VMAP>` 根元素。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vmap {
    /// 根元素直接包含的字符数据。
    #[serde(default)]
    pub text: String,
    /// `xmlns:vmap` 命名空间。
    #[serde(default)]
    pub vmap: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub ad_breaks: Vec<AdBreak>,
}

/// 一个广告插播点。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdBreak {
    #[serde(default)]
    pub ad_source: Option<AdSource>,
    #[serde(default)]
    pub tracking_events: Vec<TrackingEvent>,
    /// `breakId` 属性。
    #[serde(default)]
    pub id: String,
    /// `breakType` 属性，如 `linear`。
    #[serde(default)]
    pub break_type: String,
    /// `timeOffset` 属性；空文本对应 `None`。
    #[serde(default, with = "as_text_opt")]
    pub time_offset: Option<TimeOffset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdSource {
    /// `<vmap:VASTAdData>`
    #[serde(rename = "VASTData", default)]
    pub vast_data: Option<VastData>,
}

/// `<Tracking event="...">url</Tracking>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub url: String,
}

impl Vmap {
    /// 按 `breakId` 查找插播点。
    #[must_use]
    pub fn ad_break(&self, id: &str) -> Option<&AdBreak> {
        self.ad_breaks.iter().find(|b| b.id == id)
    }
}
