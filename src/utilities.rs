use std::path::Path;

/// Whether a file has the extension, ignoring case.
pub fn has_extension<P: AsRef<Path>>(extension: &str, file: P) -> bool {
    match file.as_ref().extension() {
        Some(file_extension) => file_extension.eq_ignore_ascii_case(extension),
        None => false,
    }
}

/// Formats a byte count for humans.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["KiB", "MiB", "GiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, UNITS[unit])
}
