//! Video list (videos.txt) parser
//!
//! One video per line: `Title | video_id | tag1, tag2`.

use crate::model::{Catalog, Video};

/// Parse the whole video list, skipping blank, comment and malformed lines
pub fn parse_catalog_str(text: &str) -> Catalog {
    let mut catalog = Catalog::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(video) = parse_line(line) else {
            log::warn!("Skipping malformed video entry on line {}: {:?}", line_no, line);
            continue;
        };

        let id = video.id.clone();
        if !catalog.add_video(video) {
            log::warn!("Skipping duplicate video id {:?} on line {}", id, line_no);
        }
    }

    log::info!("Parsed {} videos from video list", catalog.video_count());
    catalog
}

/// Parse a single entry; None if title or id is missing
fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().filter(|s| !s.is_empty())?;
    let id = fields.next().filter(|s| !s.is_empty())?;
    let tags: Vec<String> = fields
        .next()
        .map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}
