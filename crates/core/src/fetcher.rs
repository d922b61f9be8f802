use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::{
    error::Result,
    types::CommentDataset,
    video_id::VideoId,
    youtube::YoutubeApi,
};

/// Walk the comment listing page by page and collect every top-level comment.
///
/// Pages are requested one after another since each continuation token comes
/// from the previous response. Stops when the API returns no token, when a
/// token repeats, or once `max_comments` comments were collected. Any page
/// failure fails the whole fetch.
pub async fn fetch_comments<A: YoutubeApi>(
    api: &A,
    video_id: &VideoId,
    max_comments: Option<usize>,
) -> Result<CommentDataset> {
    let mut comments = Vec::new();
    let mut seen_tokens: HashSet<String> = HashSet::new();
    let mut page_token: Option<String> = None;
    let mut cap_reached = false;
    let mut pages = 0usize;

    loop {
        if max_comments.is_some_and(|limit| comments.len() >= limit) {
            cap_reached = true;
            break;
        }

        let page = api.comment_page(video_id, page_token.as_deref()).await?;
        pages += 1;
        debug!(
            video_id = %video_id,
            page = pages,
            comments = page.comments.len(),
            "fetched comment page"
        );
        comments.extend(page.comments);

        match page.next_page_token {
            Some(token) if !seen_tokens.insert(token.clone()) => {
                warn!(video_id = %video_id, token = %token, "page token repeated, stopping");
                break;
            }
            Some(token) => page_token = Some(token),
            None => {
                page_token = None;
                break;
            }
        }
    }

    // A partly consumed page or a pending token both mean more comments exist.
    let mut truncated = false;
    if let Some(limit) = max_comments {
        truncated = comments.len() > limit || (cap_reached && page_token.is_some());
        comments.truncate(limit);
    }

    info!(
        video_id = %video_id,
        pages,
        comments = comments.len(),
        truncated,
        "comment fetch finished"
    );

    Ok(CommentDataset {
        video_id: video_id.clone(),
        comments,
        truncated,
    })
}
