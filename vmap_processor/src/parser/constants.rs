//! # VMAP 解析器使用的元素名和属性名

// VMAP 层
pub(super) const TAG_VMAP: &[u8] = b"VMAP";
pub(super) const TAG_AD_BREAK: &[u8] = b"AdBreak";
pub(super) const TAG_AD_SOURCE: &[u8] = b"AdSource";
pub(super) const TAG_VAST_AD_DATA: &[u8] = b"VASTAdData";
pub(super) const TAG_TRACKING_EVENTS: &[u8] = b"TrackingEvents";
pub(super) const TAG_TRACKING: &[u8] = b"Tracking";

// VAST 层
pub(super) const TAG_VAST: &[u8] = b"VAST";
pub(super) const TAG_AD: &[u8] = b"Ad";
pub(super) const TAG_IN_LINE: &[u8] = b"InLine";
pub(super) const TAG_AD_SYSTEM: &[u8] = b"AdSystem";
pub(super) const TAG_AD_TITLE: &[u8] = b"AdTitle";
pub(super) const TAG_IMPRESSION: &[u8] = b"Impression";
pub(super) const TAG_CREATIVES: &[u8] = b"Creatives";
pub(super) const TAG_CREATIVE: &[u8] = b"Creative";
pub(super) const TAG_UNIVERSAL_AD_ID: &[u8] = b"UniversalAdId";
pub(super) const TAG_LINEAR: &[u8] = b"Linear";
pub(super) const TAG_DURATION: &[u8] = b"Duration";
pub(super) const TAG_MEDIA_FILES: &[u8] = b"MediaFiles";
pub(super) const TAG_MEDIA_FILE: &[u8] = b"MediaFile";
pub(super) const TAG_VIDEO_CLICKS: &[u8] = b"VideoClicks";
pub(super) const TAG_CLICK_THROUGH: &[u8] = b"ClickThrough";
pub(super) const TAG_CLICK_TRACKING: &[u8] = b"ClickTracking";
pub(super) const TAG_CUSTOM_CLICK: &[u8] = b"CustomClick";
pub(super) const TAG_EXTENSIONS: &[u8] = b"Extensions";
pub(super) const TAG_EXTENSION: &[u8] = b"Extension";
pub(super) const TAG_CREATIVE_PARAMETERS: &[u8] = b"CreativeParameters";
pub(super) const TAG_CREATIVE_PARAMETER: &[u8] = b"CreativeParameter";
pub(super) const TAG_ERROR: &[u8] = b"Error";

pub(super) const ATTR_XMLNS_VMAP: &[u8] = b"xmlns:vmap";
pub(super) const ATTR_VMAP: &[u8] = b"vmap";
pub(super) const ATTR_VERSION: &[u8] = b"version";
pub(super) const ATTR_BREAK_ID: &[u8] = b"breakId";
pub(super) const ATTR_BREAK_TYPE: &[u8] = b"breakType";
pub(super) const ATTR_TIME_OFFSET: &[u8] = b"timeOffset";
pub(super) const ATTR_EVENT: &[u8] = b"event";
pub(super) const ATTR_XMLNS_XSI: &[u8] = b"xmlns:xsi";
pub(super) const ATTR_XSI: &[u8] = b"xsi";
pub(super) const ATTR_XSI_SCHEMA_LOCATION: &[u8] = b"xsi:noNamespaceSchemaLocation";
pub(super) const ATTR_SCHEMA_LOCATION: &[u8] = b"noNamespaceSchemaLocation";
pub(super) const ATTR_ID: &[u8] = b"id";
pub(super) const ATTR_SEQUENCE: &[u8] = b"sequence";
pub(super) const ATTR_AD_ID: &[u8] = b"adId";
pub(super) const ATTR_ID_REGISTRY: &[u8] = b"idRegistry";
pub(super) const ATTR_BITRATE: &[u8] = b"bitrate";
pub(super) const ATTR_WIDTH: &[u8] = b"width";
pub(super) const ATTR_HEIGHT: &[u8] = b"height";
pub(super) const ATTR_DELIVERY: &[u8] = b"delivery";
pub(super) const ATTR_TYPE: &[u8] = b"type";
pub(super) const ATTR_CODEC: &[u8] = b"codec";
pub(super) const ATTR_CREATIVE_ID: &[u8] = b"creativeId";
pub(super) const ATTR_NAME: &[u8] = b"name";
