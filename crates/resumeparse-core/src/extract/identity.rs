use crate::entity::EntitySpan;

/// First PERSON span starting within the leading `window` characters.
pub fn extract_name(text: &str, spans: &[EntitySpan], window: usize) -> Option<String> {
    spans
        .iter()
        .filter(|span| span.is_person())
        .find(|span| {
            text.get(..span.start)
                .is_some_and(|prefix| span.start < text.len() && prefix.chars().count() < window)
        })
        .map(|span| span.text.clone())
}
