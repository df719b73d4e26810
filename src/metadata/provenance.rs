pub const C2PA_MARKER: &[u8; 4] = b"c2pa";

// Coincidental byte sequences produce false positives.
pub fn detect_content_credentials(bytes: &[u8]) -> bool {
    bytes.windows(C2PA_MARKER.len()).any(|w| w == C2PA_MARKER)
}
