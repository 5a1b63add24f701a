//! Response type definitions for the media-listing endpoint.

use serde::Deserialize;

/// Top-level media-listing response: a status flag plus the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaListingResponse {
    #[serde(default)]
    pub status: String,
    pub data: Option<MediaListingData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaListingData {
    pub user: Option<TimelineUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineUser {
    pub edge_owner_to_timeline_media: TimelineMedia,
}

/// One decoded page of a profile's timeline media.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineMedia {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub edges: Vec<PostEdge>,
}

/// Cursor state of a page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostEdge {
    #[serde(default)]
    pub node: PostNode,
}

/// A timeline post. Carousel posts carry one child per media unit in
/// `edge_sidecar_to_children`; single posts carry their own URLs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostNode {
    #[serde(rename = "__typename", default)]
    pub typename: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub display_url: String,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub taken_at_timestamp: i64,
    #[serde(default)]
    pub edge_sidecar_to_children: SidecarChildren,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SidecarChildren {
    #[serde(default)]
    pub edges: Vec<ChildEdge>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChildEdge {
    #[serde(default)]
    pub node: ChildNode,
}

/// One child of a carousel post. Children expose only a display URL, even
/// when flagged as video.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChildNode {
    #[serde(rename = "__typename", default)]
    pub typename: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub display_url: String,
    #[serde(default)]
    pub is_video: bool,
}
