use encoding_rs::Encoding;

/// How far into the body to look for a `<meta>` charset declaration.
const META_SNIFF_BYTES: usize = 1024;

/// Decodes a page body. The charset comes from the Content-Type header, then
/// from a `<meta>` declaration near the top of the document, then from
/// statistical detection.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let declared = content_type
        .and_then(charset_param)
        .or_else(|| meta_charset(body))
        .and_then(|label| Encoding::for_label(label.as_bytes()));

    let encoding = match declared {
        Some(encoding) => encoding,
        None => {
            let mut detector = chardetng::EncodingDetector::new();
            detector.feed(body, true);
            detector.guess(None, true)
        }
    };

    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Value following `charset=` in a header or tag, without quotes.
fn charset_param(text: &str) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    let start = lower.find("charset=")? + "charset=".len();
    let value: String = lower[start..]
        .trim_start_matches(|c| c == '"' || c == '\'' || c == ' ')
        .chars()
        .take_while(|c| !matches!(c, '"' | '\'' | ';' | '>' | '/') && !c.is_whitespace())
        .collect();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn meta_charset(body: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&body[..body.len().min(META_SNIFF_BYTES)]).to_ascii_lowercase();
    head.match_indices("<meta").find_map(|(start, _)| {
        let tag = &head[start..];
        let tag = &tag[..tag.find('>').unwrap_or(tag.len())];
        charset_param(tag)
    })
}
