//! Rewriting of pagination link markup.

/// Replace every quoted `href` value in `html` with `target`. Either
/// quote character is accepted; the original quote is kept.
pub fn rewrite_hrefs(html: &str, target: &str) -> String {
    const ATTR: &str = "href=";

    let mut out = String::with_capacity(html.len() + target.len());
    let mut rest = html;

    while let Some(pos) = rest.find(ATTR) {
        let value_start = pos + ATTR.len();
        out.push_str(&rest[..value_start]);
        rest = &rest[value_start..];

        let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            continue;
        };
        let Some(close) = rest[1..].find(quote) else {
            continue;
        };
        if close == 0 {
            // empty value, left as is
            continue;
        }

        out.push(quote);
        out.push_str(target);
        out.push(quote);
        rest = &rest[close + 2..];
    }

    out.push_str(rest);
    out
}
