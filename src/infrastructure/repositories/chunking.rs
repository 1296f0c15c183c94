/// Split text into chunks of at most `max_len` bytes, preferring sentence
/// boundaries. Both providers cap request size, so text above the cap is
/// sent in pieces and the results are rejoined in order.
pub fn split_on_sentences(text: &str, max_len: usize) -> Vec<String> {
    if text.len() <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    let sentence_pattern = regex::Regex::new(r"([.!?]+\s+)").unwrap();
    let mut last_end = 0;

    for mat in sentence_pattern.find_iter(text) {
        let sentence = &text[last_end..mat.end()];

        if !current.is_empty() && current.len() + sentence.len() > max_len {
            chunks.push(current.trim().to_string());
            current = String::new();
        }

        if sentence.len() > max_len {
            // A single sentence over the limit gets the same
            // character-window fallback as boundary-free text
            push_char_windows(sentence, max_len, &mut chunks);
        } else {
            current.push_str(sentence);
        }
        last_end = mat.end();
    }

    // Text after the last sentence boundary
    if last_end < text.len() {
        let remaining = &text[last_end..];

        if !current.is_empty() && current.len() + remaining.len() > max_len {
            chunks.push(current.trim().to_string());
            current = String::new();
        }

        if remaining.len() > max_len {
            push_char_windows(remaining, max_len, &mut chunks);
        } else {
            current.push_str(remaining);
        }
    }

    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

fn push_char_windows(text: &str, max_len: usize, chunks: &mut Vec<String>) {
    let chars: Vec<char> = text.chars().collect();
    for window in chars.chunks(max_len) {
        let chunk: String = window.iter().collect();
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
    }
}
