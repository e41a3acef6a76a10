//! SubRip (.srt) dialogue extraction

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::DecodingError;

/// Cue header: a digits-only sequence line directly followed by a time range line
static CUE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[0-9]+[ \t]*\r?\n[0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3} --> [0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}[ \t]*(?:\r?\n|$)",
    )
    .expect("cue header pattern compiles")
});

/// Inline styling markup such as `<i>`, `</b>` or `<font color="...">`
static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("markup tag pattern compiles"));

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Extract the dialogue of a subtitle document as a plain-text transcript.
///
/// Cue sequence numbers, time ranges and `<...>` markup are removed, blank
/// lines are dropped and the surviving lines are joined with `\n` in their
/// original order.
///
/// Lines that look like a cue but are malformed (for instance a time range
/// without milliseconds) are kept as dialogue. Only undecodable bytes fail.
pub fn extract_dialogue(bytes: &[u8]) -> Result<String, DecodingError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    let cues = CUE_HEADER.find_iter(text).count();
    log::debug!("Stripping {} cue headers from subtitle document", cues);
    if cues == 0 && !text.trim().is_empty() {
        log::warn!("No subtitle cue headers found; treating the whole document as dialogue");
    }

    // A pass can expose a new header (a tag-wrapped time range, or a blank
    // line between number and time range), so repeat until nothing changes.
    // Every pass that changes the text makes it shorter.
    let mut current = clean(text);
    loop {
        let next = clean(&current);
        if next == current {
            return Ok(current);
        }
        current = next;
    }
}

/// One cleanup pass over decoded subtitle text
fn clean(text: &str) -> String {
    let without_headers = CUE_HEADER.replace_all(text, "");
    let without_markup = MARKUP_TAG.replace_all(&without_headers, "");

    without_markup
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
