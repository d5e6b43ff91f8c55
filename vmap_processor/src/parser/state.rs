//! # 解析器的状态机和数据结构

use vmap_core::{
    Ad, AdBreak, ClickThrough, ClickTracking, Creative, CreativeParameter, CustomClick,
    Extension, Impression, InLine, Linear, MediaFile, TrackingEvent, UniversalAdId, Vast, Vmap,
};

use super::constants::{
    TAG_AD, TAG_AD_BREAK, TAG_AD_SOURCE, TAG_AD_SYSTEM, TAG_AD_TITLE, TAG_CLICK_THROUGH,
    TAG_CLICK_TRACKING, TAG_CREATIVE, TAG_CREATIVE_PARAMETER, TAG_CREATIVE_PARAMETERS,
    TAG_CREATIVES, TAG_CUSTOM_CLICK, TAG_DURATION, TAG_ERROR, TAG_EXTENSION, TAG_EXTENSIONS,
    TAG_IMPRESSION, TAG_IN_LINE, TAG_LINEAR, TAG_MEDIA_FILE, TAG_MEDIA_FILES, TAG_TRACKING,
    TAG_TRACKING_EVENTS, TAG_UNIVERSAL_AD_ID, TAG_VAST, TAG_VAST_AD_DATA, TAG_VIDEO_CLICKS,
    TAG_VMAP,
};

/// 已识别的元素。同名元素在不同父元素下含义不同，所以识别总是结合父元素进行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tag {
    Vmap,
    AdBreak,
    AdSource,
    VastAdData,
    TrackingEvents,
    Tracking,
    Vast,
    Ad,
    InLine,
    AdSystem,
    AdTitle,
    Impression,
    Creatives,
    Creative,
    UniversalAdId,
    Linear,
    Duration,
    MediaFiles,
    MediaFile,
    VideoClicks,
    ClickThrough,
    ClickTracking,
    CustomClick,
    Extensions,
    Extension,
    CreativeParameters,
    CreativeParameter,
    Error,
    /// 不在模型中的元素，其整个子树都被忽略。
    Unknown,
}

impl Tag {
    /// 根据父元素和本地名识别元素。
    pub(super) fn resolve(parent: Option<Self>, local_name: &[u8]) -> Self {
        match (parent, local_name) {
            (None, TAG_VMAP) => Self::Vmap,
            (Some(Self::Vmap), TAG_AD_BREAK) => Self::AdBreak,
            (Some(Self::AdBreak), TAG_AD_SOURCE) => Self::AdSource,
            (Some(Self::AdBreak | Self::Linear), TAG_TRACKING_EVENTS) => Self::TrackingEvents,
            (Some(Self::TrackingEvents), TAG_TRACKING) => Self::Tracking,
            (Some(Self::AdSource), TAG_VAST_AD_DATA) => Self::VastAdData,
            (Some(Self::VastAdData), TAG_VAST) => Self::Vast,
            (Some(Self::Vast), TAG_AD) => Self::Ad,
            (Some(Self::Ad), TAG_IN_LINE) => Self::InLine,
            (Some(Self::InLine), TAG_AD_SYSTEM) => Self::AdSystem,
            (Some(Self::InLine), TAG_AD_TITLE) => Self::AdTitle,
            (Some(Self::InLine), TAG_IMPRESSION) => Self::Impression,
            (Some(Self::InLine), TAG_CREATIVES) => Self::Creatives,
            (Some(Self::InLine), TAG_EXTENSIONS) => Self::Extensions,
            (Some(Self::InLine), TAG_ERROR) => Self::Error,
            (Some(Self::Creatives), TAG_CREATIVE) => Self::Creative,
            (Some(Self::Creative), TAG_UNIVERSAL_AD_ID) => Self::UniversalAdId,
            (Some(Self::Creative), TAG_LINEAR) => Self::Linear,
            (Some(Self::Linear), TAG_DURATION) => Self::Duration,
            (Some(Self::Linear), TAG_MEDIA_FILES) => Self::MediaFiles,
            (Some(Self::Linear), TAG_VIDEO_CLICKS) => Self::VideoClicks,
            (Some(Self::MediaFiles), TAG_MEDIA_FILE) => Self::MediaFile,
            (Some(Self::VideoClicks), TAG_CLICK_THROUGH) => Self::ClickThrough,
            (Some(Self::VideoClicks), TAG_CLICK_TRACKING) => Self::ClickTracking,
            (Some(Self::VideoClicks), TAG_CUSTOM_CLICK) => Self::CustomClick,
            (Some(Self::Extensions), TAG_EXTENSION) => Self::Extension,
            (Some(Self::Extension), TAG_CREATIVE_PARAMETERS) => Self::CreativeParameters,
            (Some(Self::CreativeParameters), TAG_CREATIVE_PARAMETER) => Self::CreativeParameter,
            _ => Self::Unknown,
        }
    }
}

/// 已读取属性、正在等待文本内容的叶子元素。叶子元素不会嵌套，一个槽位就够了。
#[derive(Debug)]
pub(super) enum PendingLeaf {
    Tracking(TrackingEvent),
    Impression(Impression),
    UniversalAdId(UniversalAdId),
    MediaFile(MediaFile),
    ClickThrough(ClickThrough),
    ClickTracking(ClickTracking),
    CustomClick(CustomClick),
    CreativeParameter(CreativeParameter),
}

/// 主解析器状态机。
///
/// 每个容器元素在开始标签处创建，在结束标签处挂到父节点上。
#[derive(Debug, Default)]
pub(super) struct VmapParserState {
    /// 当前打开的元素，栈顶是最内层。
    pub(super) element_stack: Vec<Tag>,
    /// 与 `element_stack` 一一对应，收集每个元素直接包含的文本。
    pub(super) text_stack: Vec<String>,

    pub(super) document: Option<Vmap>,
    pub(super) ad_break: Option<AdBreak>,
    pub(super) vast: Option<Vast>,
    pub(super) ad: Option<Ad>,
    pub(super) in_line: Option<InLine>,
    pub(super) creative: Option<Creative>,
    pub(super) linear: Option<Linear>,
    pub(super) extension: Option<Extension>,
    pub(super) pending_leaf: Option<PendingLeaf>,
}

impl VmapParserState {
    pub(super) fn current_tag(&self) -> Option<Tag> {
        self.element_stack.last().copied()
    }

    pub(super) fn push_element(&mut self, tag: Tag) {
        self.element_stack.push(tag);
        self.text_stack.push(String::new());
    }

    /// 弹出最内层元素及其文本。
    pub(super) fn pop_element(&mut self) -> Option<(Tag, String)> {
        let tag = self.element_stack.pop()?;
        let text = self.text_stack.pop().unwrap_or_default();
        Some((tag, text))
    }

    pub(super) fn append_text(&mut self, text: &str) {
        if let Some(buffer) = self.text_stack.last_mut() {
            buffer.push_str(text);
        }
    }

    pub(super) fn append_char(&mut self, ch: char) {
        if let Some(buffer) = self.text_stack.last_mut() {
            buffer.push(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_resolution_depends_on_parent() {
        assert_eq!(Tag::resolve(None, b"VMAP"), Tag::Vmap);
        assert_eq!(Tag::resolve(None, b"AdBreak"), Tag::Unknown);
        assert_eq!(
            Tag::resolve(Some(Tag::AdBreak), b"TrackingEvents"),
            Tag::TrackingEvents
        );
        assert_eq!(
            Tag::resolve(Some(Tag::Linear), b"TrackingEvents"),
            Tag::TrackingEvents
        );
        assert_eq!(Tag::resolve(Some(Tag::InLine), b"Tracking"), Tag::Unknown);
        assert_eq!(Tag::resolve(Some(Tag::Unknown), b"Ad"), Tag::Unknown);
        assert_eq!(Tag::resolve(Some(Tag::Linear), b"Duration"), Tag::Duration);
        assert_eq!(Tag::resolve(Some(Tag::InLine), b"Duration"), Tag::Unknown);
    }

    #[test]
    fn test_text_goes_to_innermost_element() {
        let mut state = VmapParserState::default();
        state.append_text("ignored");
        state.push_element(Tag::Vmap);
        state.append_text(" outer ");
        state.push_element(Tag::AdBreak);
        state.append_text("inner");
        state.append_char('!');

        assert_eq!(state.pop_element(), Some((Tag::AdBreak, "inner!".to_owned())));
        assert_eq!(state.current_tag(), Some(Tag::Vmap));
        assert_eq!(state.pop_element(), Some((Tag::Vmap, " outer ".to_owned())));
        assert_eq!(state.pop_element(), None);
    }
}
