//! MIME type detection for the generic static fallback.
//!
//! The named routes pin their Content-Type; this table only backs files the
//! fallback serves, so it covers what a player directory actually holds.

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use music_player_web::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("json")), "application/json");
/// assert_eq!(content_type_for(Some("mp3")), "audio/mpeg");
/// assert_eq!(content_type_for(None), "application/octet-stream");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",

        // Script and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",

        // Artwork
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",

        // Audio
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("m4a") => "audio/mp4",

        // Default
        _ => "application/octet-stream",
    }
}
