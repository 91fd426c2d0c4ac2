const SHARE_LINK_MARKER: &str = "drive.google.com/file/d/";
const THUMBNAIL_WIDTH: u32 = 1000;

/// Rewrites a Google Drive share link into a direct thumbnail URL.
///
/// Anything that does not contain a `drive.google.com/file/d/<id>` segment is
/// returned unchanged, including the empty string.
pub fn normalize_image_link(url: &str) -> String {
    match drive_file_id(url) {
        Some(id) => thumbnail_url(id),
        None => url.to_owned(),
    }
}

pub fn thumbnail_url(file_id: &str) -> String {
    format!("https://drive.google.com/thumbnail?id={file_id}&sz=w{THUMBNAIL_WIDTH}")
}

fn drive_file_id(url: &str) -> Option<&str> {
    for (start, _) in url.match_indices(SHARE_LINK_MARKER) {
        let rest = &url[start + SHARE_LINK_MARKER.len()..];
        let end = rest
            .find(|ch: char| !is_file_id_char(ch))
            .unwrap_or(rest.len());
        if end > 0 {
            return Some(&rest[..end]);
        }
    }
    None
}

fn is_file_id_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}
