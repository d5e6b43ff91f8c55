use serde::{Deserialize, Serialize};

use super::TrackingEvent;
use crate::codec::Duration;

/// `<vmap:VASTAdData>` 包装元素。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VastData {
    #[serde(default)]
    pub vast: Option<Vast>,
}

/// 内嵌的 `<VAST>` 文档。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vast {
    #[serde(default)]
    pub text: String,
    /// `xmlns:xsi` 命名空间。
    #[serde(default)]
    pub xsi: String,
    /// `xsi:noNamespaceSchemaLocation`
    #[serde(default)]
    pub no_namespace_schema_location: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub ad: Vec<Ad>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sequence: i64,
    #[serde(default)]
    pub in_line: Option<InLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InLine {
    #[serde(default)]
    pub ad_system: String,
    #[serde(default)]
    pub ad_title: String,
    #[serde(default)]
    pub impression: Vec<Impression>,
    #[serde(default)]
    pub creatives: Vec<Creative>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
    #[serde(default)]
    pub error: Option<VastError>,
}

/// `<Error>` 元素，内容通常是错误上报地址。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VastError {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impression {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub ad_id: String,
    #[serde(default)]
    pub universal_ad_id: Option<UniversalAdId>,
    #[serde(default)]
    pub linear: Option<Linear>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversalAdId {
    #[serde(default)]
    pub id_registry: String,
    #[serde(default)]
    pub id: String,
}

/// 线性创意（贴片视频）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linear {
    /// `<Duration>`，缺失时为零。
    #[serde(default)]
    pub duration: Duration,
    #[serde(default)]
    pub tracking_events: Vec<TrackingEvent>,
    #[serde(default)]
    pub media_files: Vec<MediaFile>,
    /// `VideoClicks>ClickThrough`
    #[serde(default)]
    pub click_through: Option<ClickThrough>,
    /// `VideoClicks>ClickTracking`
    #[serde(default)]
    pub click_tracking: Vec<ClickTracking>,
    /// `VideoClicks>CustomClick`
    #[serde(default)]
    pub custom_click: Vec<CustomClick>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickThrough {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickTracking {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomClick {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    /// 媒体文件地址。
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub bitrate: i64,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub delivery: String,
    /// `type` 属性，如 `video/mp4`。
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub codec: String,
}

/// `<Extension>`，目前只处理 FreeWheel 的 `CreativeParameters` 扩展。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    #[serde(rename = "type", default)]
    pub extension_type: String,
    #[serde(default)]
    pub creative_parameters: Vec<CreativeParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeParameter {
    #[serde(default)]
    pub creative_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    /// `type` 属性。
    #[serde(default)]
    pub creative_parameter_type: String,
}
