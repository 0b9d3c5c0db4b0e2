/// Characters after which a TTS request may be cut
const BREAK_CHARS: &[char] = &['.', '!', '?', ';', ':', ',', '…', '。', '！', '？', '，', '\n'];

/// Split text into pieces that end at punctuation, keeping the punctuation.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if BREAK_CHARS.contains(&ch) {
            push_trimmed(&mut pieces, &current);
            current.clear();
        }
    }
    push_trimmed(&mut pieces, &current);

    pieces
}

fn push_trimmed(pieces: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        pieces.push(trimmed.to_string());
    }
}

/// Split text into chunks of at most `max_chars` characters.
///
/// Cuts prefer sentence punctuation, then whitespace; a single word longer
/// than `max_chars` is cut at character boundaries.
pub fn split_for_tts(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text) {
        for token in fit_token(&sentence, max_chars) {
            let needed = if current.is_empty() {
                token.chars().count()
            } else {
                current.chars().count() + 1 + token.chars().count()
            };

            if needed <= max_chars {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&token);
            } else {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
                current = token;
            }
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Break a sentence that is too long into word-sized (or smaller) tokens.
fn fit_token(sentence: &str, max_chars: usize) -> Vec<String> {
    if sentence.chars().count() <= max_chars {
        return vec![sentence.to_string()];
    }

    let mut tokens = Vec::new();
    for word in sentence.split_whitespace() {
        if word.chars().count() <= max_chars {
            tokens.push(word.to_string());
        } else {
            let chars: Vec<char> = word.chars().collect();
            tokens.extend(chars.chunks(max_chars).map(|c| c.iter().collect::<String>()));
        }
    }
    tokens
}
