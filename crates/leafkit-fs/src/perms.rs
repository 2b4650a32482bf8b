//! Unix permission bits, with no-op fallbacks elsewhere.

use std::fs::{DirBuilder, Metadata, OpenOptions};
use std::io;
use std::path::Path;

#[cfg(unix)]
pub(crate) fn set_create_mode(options: &mut OpenOptions, mode: u32) {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(mode);
}

#[cfg(not(unix))]
pub(crate) fn set_create_mode(_options: &mut OpenOptions, _mode: u32) {}

/// `mkdir -p` with `mode` applied to every directory it creates.
pub(crate) fn create_dir_all_with_mode(path: &Path, mode: u32) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path)
}

/// Permission bits of `meta`, synthesized from the read-only flag off Unix.
pub(crate) fn mode_bits(meta: &Metadata) -> u32 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        meta.permissions().mode() & 0o7777
    }
    #[cfg(not(unix))]
    {
        if meta.permissions().readonly() { 0o444 } else { 0o666 }
    }
}

/// `ls -l` style mode string, e.g. `drwxr-xr-x`.
pub(crate) fn mode_string(meta: &Metadata) -> String {
    let file_type = meta.file_type();
    let kind = if file_type.is_dir() {
        'd'
    } else if file_type.is_symlink() {
        'L'
    } else {
        '-'
    };
    let bits = mode_bits(meta);
    let mut out = String::with_capacity(10);
    out.push(kind);
    for shift in [6, 3, 0] {
        let triple = (bits >> shift) & 0o7;
        out.push(if triple & 0o4 != 0 { 'r' } else { '-' });
        out.push(if triple & 0o2 != 0 { 'w' } else { '-' });
        out.push(if triple & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mode_string_shape() {
        let temp = TempDir::new().unwrap();
        let dir_meta = std::fs::metadata(temp.path()).unwrap();
        let rendered = mode_string(&dir_meta);
        assert_eq!(rendered.len(), 10);
        assert!(rendered.starts_with('d'));

        let file = temp.path().join("f");
        std::fs::write(&file, "x").unwrap();
        let file_meta = std::fs::metadata(&file).unwrap();
        assert!(mode_string(&file_meta).starts_with("-r"));
    }

    #[cfg(unix)]
    #[test]
    fn test_mode_string_symlink() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path(), &link).unwrap();

        let meta = std::fs::symlink_metadata(&link).unwrap();
        assert!(mode_string(&meta).starts_with('L'));
        let followed = std::fs::metadata(&link).unwrap();
        assert!(mode_string(&followed).starts_with('d'));
    }

    #[cfg(unix)]
    #[test]
    fn test_create_dir_all_with_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b");
        create_dir_all_with_mode(&nested, 0o700).unwrap();
        let mode = std::fs::metadata(&nested).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
