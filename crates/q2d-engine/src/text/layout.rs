use super::FontFace;

/// Splits on explicit newlines only.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_owned).collect()
}

/// Greedy word wrap.
///
/// Each `\n`-separated paragraph is split on whitespace and words are packed
/// while `face.measure(line + " " + word) <= max_width`. A paragraph with no
/// words yields one empty line. A single word wider than `max_width` is kept
/// whole on its own line.
pub fn wrap_lines<F>(text: &str, face: &F, max_width: i32) -> Vec<String>
where
    F: FontFace + ?Sized,
{
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut words = paragraph.split_whitespace();
        let Some(first) = words.next() else {
            lines.push(String::new());
            continue;
        };

        let mut current = first.to_owned();
        for word in words {
            let candidate = format!("{current} {word}");
            if face.measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_owned()));
            }
        }
        lines.push(current);
    }

    lines
}
