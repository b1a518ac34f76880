use crate::meeting::Analysis;

const SUMMARY_LINES: usize = 3;

/// Cheap extractive stand-in for the real analysis.
///
/// - summary: the first few prose lines, joined
/// - action items: lines starting with `- `
/// - participants: distinct `Name:` speaker prefixes, in order of appearance
pub fn extract_analysis(content: &str) -> Analysis {
    let mut summary = Vec::new();
    let mut action_items = Vec::new();
    let mut participants: Vec<String> = Vec::new();

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(item) = line.strip_prefix("- ") {
            action_items.push(item.trim().to_string());
            continue;
        }

        if let Some(speaker) = speaker_of(line) {
            if !participants.iter().any(|p| p == speaker) {
                participants.push(speaker.to_string());
            }
        }

        if summary.len() < SUMMARY_LINES {
            summary.push(line);
        }
    }

    Analysis {
        summary: summary.join(" "),
        action_items,
        participants,
    }
}

/// `Anna: hello` -> `Anna`; a single capitalised word before the colon
fn speaker_of(line: &str) -> Option<&str> {
    let (name, rest) = line.split_once(':')?;
    let name = name.trim();

    let is_name = !name.is_empty()
        && !name.contains(char::is_whitespace)
        && name.chars().next().is_some_and(char::is_uppercase)
        && !rest.trim().is_empty();

    is_name.then_some(name)
}
