/// Forces a relative template path to end in exactly one instance of the
/// canonical extension.
///
/// Every occurrence of the extension substring is removed first, then the
/// extension is appended once. This makes the transform idempotent, but it
/// also means a mid-filename occurrence is stripped: `"my.php.file"` with
/// `".php"` standardizes to `"my.file.php"`. That behavior is load-bearing
/// for existing callers and is kept as-is.
pub fn standardize_path(path: &str, extension: &str) -> String {
    let mut standardized = path.replace(extension, "");
    standardized.push_str(extension);
    standardized
}
