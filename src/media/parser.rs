//! Expansion of timeline post edges into downloadable media items.

use crate::api::types::{PostNode, TimelineMedia};
use crate::media::item::{MediaItem, MediaKind};

/// Expand one post into its downloadable items.
///
/// Carousel posts contribute one item per child, using the child's own URL
/// and kind. Single posts contribute exactly one item: the video URL when
/// the post is flagged as video, the display URL otherwise.
pub fn expand_post(node: &PostNode) -> Vec<MediaItem> {
    let children = &node.edge_sidecar_to_children.edges;
    if !children.is_empty() {
        return children
            .iter()
            .map(|child| {
                let kind = if child.node.is_video {
                    MediaKind::Video
                } else {
                    MediaKind::Image
                };
                MediaItem::new(child.node.display_url.clone(), kind)
            })
            .collect();
    }

    if node.is_video {
        match &node.video_url {
            Some(url) => vec![MediaItem::new(url.clone(), MediaKind::Video)],
            None => {
                // Seen on video posts served without a direct stream URL;
                // the display image is the only downloadable asset left.
                tracing::warn!(
                    "video post {} has no video_url, falling back to display_url",
                    node.id
                );
                vec![MediaItem::new(node.display_url.clone(), MediaKind::Image)]
            }
        }
    } else {
        vec![MediaItem::new(node.display_url.clone(), MediaKind::Image)]
    }
}

/// Flatten a decoded page into its items, in post-then-children order.
pub fn collect_page_items(page: &TimelineMedia) -> Vec<MediaItem> {
    page.edges
        .iter()
        .flat_map(|edge| expand_post(&edge.node))
        .collect()
}
